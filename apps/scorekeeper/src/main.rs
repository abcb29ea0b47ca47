//! Scorekeeper CLI - record Zole rounds and keep running totals.
//!
//! Seats are 0-based in every argument and in the printed table.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::domain::{score_sheet, table_snapshot, Action, Bid, SoloGrade};
use scorekeeper::services::history::{DateFilter, GameFilter};
use scorekeeper::{telemetry, AppConfig, AppError, GameSessionService};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Scorekeeper for Zole card game sessions")]
struct Args {
    /// Saved-game directory (overrides SCOREKEEPER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game
    New {
        /// Comma-separated player names in seat order (3 or 4)
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,

        /// Seat of the first dealer
        #[arg(long, default_value = "0")]
        dealer: u8,
    },
    /// Apply one action to a saved game
    Act {
        id: String,
        #[command(subcommand)]
        action: ActCommand,
    },
    /// Print the score sheet and the current table
    Show { id: String },
    /// List saved games
    List {
        /// Match player names or game id
        #[arg(long, default_value = "")]
        search: String,

        /// Match player names
        #[arg(long, default_value = "")]
        player: String,

        #[arg(long, default_value = "all")]
        date: DateArg,
    },
    /// Delete a saved game
    Delete { id: String },
    /// Print the share token of a saved game
    Share { id: String },
    /// Save a shared game under a new id
    Import { token: String },
}

#[derive(Subcommand)]
enum ActCommand {
    /// Seat to act passes ("Garām")
    Pass,
    /// Seat to act declares "Mazā zole"
    Small,
    /// Seat to act declares "Zole"
    Zole,
    /// Seat to act declares "Lielais"
    Big,
    /// Resolve "Galdiņš": the given seat lost
    Lost { seat: u8 },
    /// Resolve "Mazā zole" as won
    SmallWon,
    /// Resolve "Mazā zole" as lost
    SmallLost,
    /// Resolve a solo game with a grade
    Grade { grade: GradeArg },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateArg {
    All,
    Today,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GradeArg {
    Win61,
    Win91,
    WinAll,
    Lose60,
    Lose30,
    LoseAll,
}

impl From<DateArg> for DateFilter {
    fn from(arg: DateArg) -> Self {
        match arg {
            DateArg::All => DateFilter::All,
            DateArg::Today => DateFilter::Today,
            DateArg::Week => DateFilter::Week,
            DateArg::Month => DateFilter::Month,
        }
    }
}

impl From<GradeArg> for SoloGrade {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::Win61 => SoloGrade::Win61To90,
            GradeArg::Win91 => SoloGrade::Win91Plus,
            GradeArg::WinAll => SoloGrade::WinAllTricks,
            GradeArg::Lose60 => SoloGrade::Lose31To60,
            GradeArg::Lose30 => SoloGrade::Lose30OrLess,
            GradeArg::LoseAll => SoloGrade::LoseNoTricks,
        }
    }
}

impl From<ActCommand> for Action {
    fn from(cmd: ActCommand) -> Self {
        match cmd {
            ActCommand::Pass => Action::Bid(Bid::Pass),
            ActCommand::Small => Action::Bid(Bid::DeclareSmallGame),
            ActCommand::Zole => Action::Bid(Bid::DeclareSoloGameA),
            ActCommand::Big => Action::Bid(Bid::DeclareSoloGameB),
            ActCommand::Lost { seat } => Action::ResolveNoPlay(seat),
            ActCommand::SmallWon => Action::ResolveSmallGame { won: true },
            ActCommand::SmallLost => Action::ResolveSmallGame { won: false },
            ActCommand::Grade { grade } => Action::ResolveSoloGame(grade.into()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }
    let service = GameSessionService::from_config(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::New { players, dealer } => {
            let game = service.start(players, dealer)?;
            let token = service.share(&game.meta.id)?;
            writeln!(out, "Created game {}", game.meta.id)?;
            writeln!(out, "Share token: {token}")?;
            render::table(&mut out, &table_snapshot(&game.state))?;
        }
        Command::Act { id, action } => {
            let game = service.apply(&id, action.into())?;
            render::table(&mut out, &table_snapshot(&game.state))?;
        }
        Command::Show { id } => {
            let game = service.load(&id)?;
            render::score_sheet(&mut out, &score_sheet(&game.state))?;
            writeln!(out)?;
            render::table(&mut out, &table_snapshot(&game.state))?;
        }
        Command::List {
            search,
            player,
            date,
        } => {
            let filter = GameFilter {
                search,
                player,
                date: date.into(),
            };
            render::history(&mut out, &service.list(&filter)?)?;
        }
        Command::Delete { id } => {
            service.delete(&id)?;
            writeln!(out, "Deleted game {id}")?;
        }
        Command::Share { id } => {
            writeln!(out, "{}", service.share(&id)?)?;
        }
        Command::Import { token } => {
            let game = service.import(&token)?;
            writeln!(out, "Imported as game {}", game.meta.id)?;
            render::table(&mut out, &table_snapshot(&game.state))?;
        }
    }
    Ok(())
}
