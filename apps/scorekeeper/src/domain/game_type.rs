//! Round variants, bids, resolution payloads and resolved outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::state::Seat;

/// Game type declared for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameType {
    /// "Galdiņš": everyone in the bidding window passed.
    NoPlay,
    /// "Mazā zole".
    SmallGame { declarer: Seat },
    /// "Zole".
    SoloGameA { declarer: Seat },
    /// "Lielais".
    SoloGameB { declarer: Seat },
}

impl GameType {
    pub fn declarer(&self) -> Option<Seat> {
        match self {
            GameType::NoPlay => None,
            GameType::SmallGame { declarer }
            | GameType::SoloGameA { declarer }
            | GameType::SoloGameB { declarer } => Some(*declarer),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            GameType::NoPlay => "Galdiņš",
            GameType::SmallGame { .. } => "Mazā zole",
            GameType::SoloGameA { .. } => "Zole",
            GameType::SoloGameB { .. } => "Lielais",
        }
    }
}

/// Action offered to the seat whose turn it is during bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bid {
    /// "Garām".
    Pass,
    DeclareSmallGame,
    DeclareSoloGameA,
    DeclareSoloGameB,
}

/// A recorded pass by the seat that was asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pass {
    pub seat: Seat,
}

/// Result grade of a solo game (both "Zole" and "Lielais").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoloGrade {
    Win61To90,
    Win91Plus,
    WinAllTricks,
    Lose31To60,
    Lose30OrLess,
    LoseNoTricks,
}

impl SoloGrade {
    pub const ALL: [SoloGrade; 6] = [
        SoloGrade::Win61To90,
        SoloGrade::Win91Plus,
        SoloGrade::WinAllTricks,
        SoloGrade::Lose31To60,
        SoloGrade::Lose30OrLess,
        SoloGrade::LoseNoTricks,
    ];

    pub const fn is_win(&self) -> bool {
        matches!(
            self,
            SoloGrade::Win61To90 | SoloGrade::Win91Plus | SoloGrade::WinAllTricks
        )
    }

    pub const fn label(&self) -> &'static str {
        match self {
            SoloGrade::Win61To90 => "Uzvar ar 61 - 90 acīm",
            SoloGrade::Win91Plus => "Uzvar ar 91 vai vairāk acīm",
            SoloGrade::WinAllTricks => "Uzvar iegūstot visus stiķus",
            SoloGrade::Lose31To60 => "Zaudē ar 31 - 60 acīm",
            SoloGrade::Lose30OrLess => "Zaudē ar 30 un mazāk acīm",
            SoloGrade::LoseNoTricks => "Zaudē neiegūstot nevienu stiķi",
        }
    }
}

/// Caller-supplied payload that resolves a declared round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    NoPlay { loser: Seat },
    SmallGame { won: bool },
    SoloGame { grade: SoloGrade },
}

/// Resolved result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundOutcome {
    NoPlay { loser: Seat },
    SmallGame { declarer: Seat, won: bool },
    SoloGameA { declarer: Seat, grade: SoloGrade },
    SoloGameB { declarer: Seat, grade: SoloGrade },
}

impl RoundOutcome {
    /// Combine a declared game type with its resolution payload.
    ///
    /// Returns `None` when the payload shape does not fit the game type.
    pub fn from_parts(game_type: GameType, resolution: Resolution) -> Option<Self> {
        match (game_type, resolution) {
            (GameType::NoPlay, Resolution::NoPlay { loser }) => {
                Some(RoundOutcome::NoPlay { loser })
            }
            (GameType::SmallGame { declarer }, Resolution::SmallGame { won }) => {
                Some(RoundOutcome::SmallGame { declarer, won })
            }
            (GameType::SoloGameA { declarer }, Resolution::SoloGame { grade }) => {
                Some(RoundOutcome::SoloGameA { declarer, grade })
            }
            (GameType::SoloGameB { declarer }, Resolution::SoloGame { grade }) => {
                Some(RoundOutcome::SoloGameB { declarer, grade })
            }
            _ => None,
        }
    }

    pub fn game_type(&self) -> GameType {
        match *self {
            RoundOutcome::NoPlay { .. } => GameType::NoPlay,
            RoundOutcome::SmallGame { declarer, .. } => GameType::SmallGame { declarer },
            RoundOutcome::SoloGameA { declarer, .. } => GameType::SoloGameA { declarer },
            RoundOutcome::SoloGameB { declarer, .. } => GameType::SoloGameB { declarer },
        }
    }

    /// The seat settling against everyone else: the declarer, or the table-round loser.
    pub fn focal_seat(&self) -> Seat {
        match *self {
            RoundOutcome::NoPlay { loser } => loser,
            RoundOutcome::SmallGame { declarer, .. }
            | RoundOutcome::SoloGameA { declarer, .. }
            | RoundOutcome::SoloGameB { declarer, .. } => declarer,
        }
    }

    /// Whether the focal seat came out ahead.
    pub fn focal_won(&self) -> bool {
        match self {
            RoundOutcome::NoPlay { .. } => false,
            RoundOutcome::SmallGame { won, .. } => *won,
            RoundOutcome::SoloGameA { grade, .. } | RoundOutcome::SoloGameB { grade, .. } => {
                grade.is_win()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        self.game_type().label()
    }
}
