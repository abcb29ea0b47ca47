// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::reducer::Action;
use crate::domain::{Bid, RoundOutcome, Seat, SoloGrade};

/// Generate a supported player count (3 or 4)
pub fn player_count() -> impl Strategy<Value = u8> {
    3u8..=4u8
}

/// Generate a SoloGrade
pub fn solo_grade() -> impl Strategy<Value = SoloGrade> {
    prop::sample::select(SoloGrade::ALL.to_vec())
}

/// Generate a Bid
pub fn bid() -> impl Strategy<Value = Bid> {
    prop_oneof![
        3 => Just(Bid::Pass),
        1 => Just(Bid::DeclareSmallGame),
        1 => Just(Bid::DeclareSoloGameA),
        1 => Just(Bid::DeclareSoloGameB),
    ]
}

/// Generate any outcome whose seats fit `player_count`
pub fn outcome(player_count: u8) -> impl Strategy<Value = RoundOutcome> {
    let seat = 0..player_count;
    prop_oneof![
        seat.clone().prop_map(|loser| RoundOutcome::NoPlay { loser }),
        (seat.clone(), any::<bool>())
            .prop_map(|(declarer, won)| RoundOutcome::SmallGame { declarer, won }),
        (seat.clone(), solo_grade())
            .prop_map(|(declarer, grade)| RoundOutcome::SoloGameA { declarer, grade }),
        (seat, solo_grade())
            .prop_map(|(declarer, grade)| RoundOutcome::SoloGameB { declarer, grade }),
    ]
}

/// Generate a player count together with a matching outcome
pub fn sized_outcome() -> impl Strategy<Value = (u8, RoundOutcome)> {
    player_count().prop_flat_map(|n| (Just(n), outcome(n)))
}

/// Generate a player count with a history of 0..=max outcomes
pub fn sized_history(max: usize) -> impl Strategy<Value = (u8, Vec<RoundOutcome>)> {
    player_count().prop_flat_map(move |n| (Just(n), prop::collection::vec(outcome(n), 0..=max)))
}

/// Generate a game-play action (no setup), including ones that may be rejected
pub fn play_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => bid().prop_map(Action::Bid),
        1 => (0u8..5u8).prop_map(Action::ResolveNoPlay),
        1 => any::<bool>().prop_map(|won| Action::ResolveSmallGame { won }),
        1 => solo_grade().prop_map(Action::ResolveSoloGame),
    ]
}

/// Generate a dealer seat valid for `player_count`
pub fn dealer(player_count: u8) -> impl Strategy<Value = Seat> {
    0..player_count
}
