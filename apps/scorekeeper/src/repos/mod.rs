pub mod saved_games;
