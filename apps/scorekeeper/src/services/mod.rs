pub mod game_session;
pub mod history;

pub use game_session::GameSessionService;
pub use history::{DateFilter, GameFilter};
