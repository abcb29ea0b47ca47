use serde::{Deserialize, Serialize};

use crate::domain::game_type::RoundOutcome;
use crate::domain::rules::{
    modifier, solo_a_base, solo_b_base, NO_PLAY_LOSS, SMALL_GAME_LOSS, SMALL_GAME_WIN,
};
use crate::domain::state::Seat;

/// A resolved round with per-seat deltas and running totals (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRound {
    pub outcome: RoundOutcome,
    pub deltas: Vec<i32>,
    pub totals: Vec<i32>,
}

/// Signed per-opponent base from the focal seat's point of view.
pub fn base_points(outcome: &RoundOutcome) -> i32 {
    match *outcome {
        RoundOutcome::NoPlay { .. } => NO_PLAY_LOSS,
        RoundOutcome::SmallGame { won: true, .. } => SMALL_GAME_WIN,
        RoundOutcome::SmallGame { won: false, .. } => SMALL_GAME_LOSS,
        RoundOutcome::SoloGameA { grade, .. } => solo_a_base(grade),
        RoundOutcome::SoloGameB { grade, .. } => solo_b_base(grade),
    }
}

/// Points `seat` receives for `outcome` at a table of `player_count`.
pub fn points_for(outcome: &RoundOutcome, seat: Seat, player_count: u8) -> i32 {
    let base = base_points(outcome);
    if seat == outcome.focal_seat() {
        base * modifier(player_count)
    } else {
        -base
    }
}

/// Delta vector for every seat; always sums to zero.
pub fn round_deltas(outcome: &RoundOutcome, player_count: u8) -> Vec<i32> {
    (0..player_count)
        .map(|seat| points_for(outcome, seat, player_count))
        .collect()
}

/// Score `outcome` on top of `previous_totals` (empty means a fresh game).
pub fn apply_outcome(outcome: RoundOutcome, previous_totals: &[i32], player_count: u8) -> ScoredRound {
    let deltas = round_deltas(&outcome, player_count);
    let totals = if previous_totals.is_empty() {
        deltas.clone()
    } else {
        previous_totals
            .iter()
            .zip(&deltas)
            .map(|(total, delta)| total + delta)
            .collect()
    };
    ScoredRound {
        outcome,
        deltas,
        totals,
    }
}

/// Totals rebuilt by folding every round's deltas from zero.
pub fn replay_totals(history: &[ScoredRound], player_count: u8) -> Vec<i32> {
    history
        .iter()
        .fold(vec![0; usize::from(player_count)], |mut acc, round| {
            for (total, delta) in acc.iter_mut().zip(&round.deltas) {
                *total += delta;
            }
            acc
        })
}
