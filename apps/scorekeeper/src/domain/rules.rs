use std::ops::RangeInclusive;

use crate::domain::game_type::SoloGrade;

/// Supported table sizes.
pub const PLAYER_COUNTS: RangeInclusive<usize> = 3..=4;

/// Seats offered the chance to declare each round, starting left of the dealer.
/// With four players the dealer sits out; with three the dealer bids last.
pub const BIDDING_SEATS: usize = 3;

/// Passes recorded before the next pass turns the round into a table round.
pub const MAX_PASSES: usize = BIDDING_SEATS - 1;

// Point table. Each value is the per-opponent base from the focal seat's view
// (declarer, or the table-round loser); the focal seat receives `base * modifier`
// and every other seat receives `-base`.
pub const NO_PLAY_LOSS: i32 = -2;
pub const SMALL_GAME_WIN: i32 = 6;
pub const SMALL_GAME_LOSS: i32 = -7;

pub const SOLO_A_WIN_61: i32 = 5;
pub const SOLO_A_WIN_91: i32 = 6;
pub const SOLO_A_WIN_ALL: i32 = 7;
pub const SOLO_A_LOSS_60: i32 = -6;
pub const SOLO_A_LOSS_30: i32 = -7;
pub const SOLO_A_LOSS_ALL: i32 = -8;

pub const SOLO_B_WIN_61: i32 = 1;
pub const SOLO_B_WIN_91: i32 = 2;
pub const SOLO_B_WIN_ALL: i32 = 3;
pub const SOLO_B_LOSS_60: i32 = -2;
pub const SOLO_B_LOSS_30: i32 = -3;
pub const SOLO_B_LOSS_ALL: i32 = -4;

/// Multiplier applied to the focal seat: it settles against every other seat.
#[inline]
pub fn modifier(player_count: u8) -> i32 {
    i32::from(player_count) - 1
}

/// Base points for a "Zole" (solo A) result.
pub fn solo_a_base(grade: SoloGrade) -> i32 {
    match grade {
        SoloGrade::Win61To90 => SOLO_A_WIN_61,
        SoloGrade::Win91Plus => SOLO_A_WIN_91,
        SoloGrade::WinAllTricks => SOLO_A_WIN_ALL,
        SoloGrade::Lose31To60 => SOLO_A_LOSS_60,
        SoloGrade::Lose30OrLess => SOLO_A_LOSS_30,
        SoloGrade::LoseNoTricks => SOLO_A_LOSS_ALL,
    }
}

/// Base points for a "Lielais" (solo B) result.
pub fn solo_b_base(grade: SoloGrade) -> i32 {
    match grade {
        SoloGrade::Win61To90 => SOLO_B_WIN_61,
        SoloGrade::Win91Plus => SOLO_B_WIN_91,
        SoloGrade::WinAllTricks => SOLO_B_WIN_ALL,
        SoloGrade::Lose31To60 => SOLO_B_LOSS_60,
        SoloGrade::Lose30OrLess => SOLO_B_LOSS_30,
        SoloGrade::LoseNoTricks => SOLO_B_LOSS_ALL,
    }
}

pub fn is_valid_player_count(count: usize) -> bool {
    PLAYER_COUNTS.contains(&count)
}
