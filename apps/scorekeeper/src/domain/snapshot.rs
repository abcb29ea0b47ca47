//! Read-only views of a session for display collaborators.

use serde::{Deserialize, Serialize};

use crate::domain::game_type::{GameType, Pass, Resolution, RoundOutcome, SoloGrade};
use crate::domain::scoring::ScoredRound;
use crate::domain::state::{hand_position, RoundPhase, Seat, SessionState};

/// Public info about a single seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Seat,
    pub name: String,
    pub is_dealer: bool,
    /// 1..=3 for the seats in the bidding window.
    pub hand_position: Option<u8>,
    pub to_act: bool,
    pub is_declarer: bool,
    pub total: i32,
}

/// Adjacently tagged union of phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup,
    Bidding {
        to_act: Seat,
        passes: Vec<Pass>,
    },
    Declared {
        game_type: GameType,
        choices: Vec<Resolution>,
    },
}

/// Snapshot of the round currently being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// 1-based.
    pub round_no: usize,
    pub dealer: Option<Seat>,
    pub seats: Vec<SeatView>,
    pub phase: PhaseSnapshot,
}

/// Resolutions that fit a declared game type.
pub fn resolution_choices(game_type: GameType, player_count: u8) -> Vec<Resolution> {
    match game_type {
        GameType::NoPlay => (0..player_count)
            .map(|loser| Resolution::NoPlay { loser })
            .collect(),
        GameType::SmallGame { .. } => vec![
            Resolution::SmallGame { won: true },
            Resolution::SmallGame { won: false },
        ],
        GameType::SoloGameA { .. } | GameType::SoloGameB { .. } => SoloGrade::ALL
            .iter()
            .map(|&grade| Resolution::SoloGame { grade })
            .collect(),
    }
}

pub fn table_snapshot(state: &SessionState) -> TableSnapshot {
    let n = state.player_count();
    let dealer = state.current_dealer();
    let to_act = state.to_act();
    let declarer = state.declared_game_type.and_then(|g| g.declarer());
    let totals = state.totals();

    let seats = state
        .players
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let seat = idx as Seat;
            SeatView {
                seat,
                name: name.clone(),
                is_dealer: dealer == Some(seat),
                hand_position: dealer.and_then(|d| hand_position(d, seat, n)),
                to_act: to_act == Some(seat),
                is_declarer: declarer == Some(seat),
                total: totals.get(idx).copied().unwrap_or(0),
            }
        })
        .collect();

    let phase = match state.phase() {
        RoundPhase::Setup => PhaseSnapshot::Setup,
        RoundPhase::Bidding { passes } => match to_act {
            Some(to_act) => PhaseSnapshot::Bidding {
                to_act,
                passes: passes.to_vec(),
            },
            None => PhaseSnapshot::Setup,
        },
        RoundPhase::Declared(game_type) => PhaseSnapshot::Declared {
            game_type,
            choices: resolution_choices(game_type, n),
        },
    };

    TableSnapshot {
        round_no: state.rounds_played() + 1,
        dealer,
        seats,
        phase,
    }
}

/// How a seat fared in a round, for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatResult {
    Won,
    Lost,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCell {
    pub total: i32,
    pub delta: i32,
    pub result: SeatResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheetRow {
    /// 1-based.
    pub round_no: usize,
    pub label: String,
    pub cells: Vec<ScoreCell>,
}

/// Played-rounds table with a totals footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub players: Vec<String>,
    pub rows: Vec<ScoreSheetRow>,
    pub totals: Vec<i32>,
}

fn seat_result(outcome: &RoundOutcome, seat: Seat) -> SeatResult {
    if seat != outcome.focal_seat() {
        SeatResult::Neutral
    } else if outcome.focal_won() {
        SeatResult::Won
    } else {
        SeatResult::Lost
    }
}

fn sheet_row(idx: usize, round: &ScoredRound) -> ScoreSheetRow {
    let cells = round
        .totals
        .iter()
        .zip(&round.deltas)
        .enumerate()
        .map(|(seat, (&total, &delta))| ScoreCell {
            total,
            delta,
            result: seat_result(&round.outcome, seat as Seat),
        })
        .collect();
    ScoreSheetRow {
        round_no: idx + 1,
        label: round.outcome.label().to_string(),
        cells,
    }
}

pub fn score_sheet(state: &SessionState) -> ScoreSheet {
    ScoreSheet {
        players: state.players.clone(),
        rows: state
            .history
            .iter()
            .enumerate()
            .map(|(idx, round)| sheet_row(idx, round))
            .collect(),
        totals: state.totals(),
    }
}
