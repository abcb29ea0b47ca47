use serde::{Deserialize, Serialize};

use crate::domain::game_type::{GameType, Pass};
use crate::domain::rules::{is_valid_player_count, MAX_PASSES};
use crate::domain::scoring::{round_deltas, ScoredRound};
use crate::errors::domain::{DomainError, TransitionKind};

pub type Seat = u8; // 0..player_count

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase<'a> {
    /// Players or initial dealer not chosen yet.
    Setup,
    /// Seats are being asked, in turn, to pass or declare.
    Bidding { passes: &'a [Pass] },
    /// A game type is chosen; waiting for the outcome.
    Declared(GameType),
}

/// Entire session container threaded through the reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Roster; the index is the seat.
    #[serde(default)]
    pub players: Vec<String>,
    /// Seat that dealt the first round. Immutable once rounds are played.
    #[serde(default)]
    pub initial_dealer: Option<Seat>,
    /// Append-only list of resolved rounds.
    #[serde(default)]
    pub history: Vec<ScoredRound>,
    /// Passes collected in the current bidding window.
    #[serde(default)]
    pub pre_round_actions: Vec<Pass>,
    /// Non-null only between declaration and resolution.
    #[serde(default)]
    pub declared_game_type: Option<GameType>,
}

impl SessionState {
    pub fn player_count(&self) -> u8 {
        self.players.len() as u8
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn is_set_up(&self) -> bool {
        is_valid_player_count(self.players.len()) && self.initial_dealer.is_some()
    }

    pub fn phase(&self) -> RoundPhase<'_> {
        if !self.is_set_up() {
            return RoundPhase::Setup;
        }
        match self.declared_game_type {
            Some(game_type) => RoundPhase::Declared(game_type),
            None => RoundPhase::Bidding {
                passes: &self.pre_round_actions,
            },
        }
    }

    /// Dealer of the round currently being played.
    pub fn current_dealer(&self) -> Option<Seat> {
        if !self.is_set_up() {
            return None;
        }
        self.initial_dealer
            .map(|d| current_dealer(d, self.player_count(), self.rounds_played()))
    }

    /// Seat expected to pass or declare next; `None` outside bidding.
    pub fn to_act(&self) -> Option<Seat> {
        match self.phase() {
            RoundPhase::Bidding { passes } => self
                .current_dealer()
                .map(|dealer| expected_actor(dealer, passes.len(), self.player_count())),
            _ => None,
        }
    }

    /// Running totals: last history entry, or zeros.
    pub fn totals(&self) -> Vec<i32> {
        self.history
            .last()
            .map(|round| round.totals.clone())
            .unwrap_or_else(|| vec![0; self.players.len()])
    }

    pub fn require_dealer(&self, ctx: &'static str) -> Result<Seat, DomainError> {
        self.current_dealer().ok_or_else(|| {
            DomainError::transition(
                TransitionKind::NotSetUp,
                format!("players and initial dealer must be chosen ({ctx})"),
            )
        })
    }

    pub fn require_seat(&self, seat: Seat) -> Result<Seat, DomainError> {
        if usize::from(seat) < self.players.len() {
            Ok(seat)
        } else {
            Err(DomainError::seat_out_of_range(seat, self.player_count()))
        }
    }

    /// Structural check for states that did not come out of the reducer,
    /// e.g. decoded from a share token.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.players.is_empty() {
            if self.initial_dealer.is_some()
                || !self.history.is_empty()
                || !self.pre_round_actions.is_empty()
                || self.declared_game_type.is_some()
            {
                return Err(DomainError::corrupt("game data present without players"));
            }
            return Ok(());
        }

        crate::domain::setup::validate_roster(&self.players)?;
        let n = self.player_count();

        if let Some(dealer) = self.initial_dealer {
            crate::domain::setup::validate_dealer(dealer, n)?;
        } else if !self.history.is_empty()
            || !self.pre_round_actions.is_empty()
            || self.declared_game_type.is_some()
        {
            return Err(DomainError::corrupt("rounds present without an initial dealer"));
        }

        let mut totals = vec![0i32; self.players.len()];
        for (idx, round) in self.history.iter().enumerate() {
            self.require_seat(round.outcome.focal_seat())?;
            let expected = round_deltas(&round.outcome, n);
            if round.deltas != expected {
                return Err(DomainError::corrupt(format!(
                    "round {} deltas do not match its outcome",
                    idx + 1
                )));
            }
            for (total, delta) in totals.iter_mut().zip(&expected) {
                *total += delta;
            }
            if round.totals != totals {
                return Err(DomainError::corrupt(format!(
                    "round {} totals do not match the replayed history",
                    idx + 1
                )));
            }
        }

        if self.pre_round_actions.len() > MAX_PASSES {
            return Err(DomainError::corrupt("too many passes recorded"));
        }
        if self.declared_game_type.is_some() && !self.pre_round_actions.is_empty() {
            return Err(DomainError::corrupt("passes recorded after a declaration"));
        }
        if let Some(dealer) = self.current_dealer() {
            for (i, pass) in self.pre_round_actions.iter().enumerate() {
                if pass.seat != expected_actor(dealer, i, n) {
                    return Err(DomainError::corrupt(format!(
                        "pass {} recorded for seat {} out of turn",
                        i + 1,
                        pass.seat
                    )));
                }
            }
        }
        if let Some(declarer) = self.declared_game_type.and_then(|g| g.declarer()) {
            self.require_seat(declarer)?;
        }
        Ok(())
    }
}

/// Seat / turn math helpers for a table of `player_count` seats.
///
/// Every layer (reducer, snapshots, services) shares these for rotation
/// and "who acts next". Clockwise is positive.
#[inline]
pub fn seat_offset(seat: Seat, delta: usize, player_count: u8) -> Seat {
    debug_assert!(player_count > 0, "player_count must be positive");
    ((usize::from(seat) + delta) % usize::from(player_count)) as Seat
}

/// Dealer for the round after `rounds_played` completed rounds.
#[inline]
pub fn current_dealer(initial_dealer: Seat, player_count: u8, rounds_played: usize) -> Seat {
    seat_offset(initial_dealer, rounds_played, player_count)
}

/// Expected actor during bidding: starts left of the dealer and
/// rotates clockwise by the number of passes already recorded.
#[inline]
pub fn expected_actor(dealer: Seat, action_count: usize, player_count: u8) -> Seat {
    seat_offset(dealer, 1 + action_count, player_count)
}

/// 1-based position of `seat` in the bidding window ("1. roka" .. "3. roka").
/// The dealer has no position at a four-player table.
pub fn hand_position(dealer: Seat, seat: Seat, player_count: u8) -> Option<u8> {
    (1..=crate::domain::rules::BIDDING_SEATS)
        .find(|&k| seat_offset(dealer, k, player_count) == seat)
        .map(|k| k as u8)
}
