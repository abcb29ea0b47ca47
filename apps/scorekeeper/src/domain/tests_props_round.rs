//! Property tests for seat rotation and the round state machine.

use proptest::prelude::*;

use crate::domain::reducer::apply;
use crate::domain::state::{current_dealer, expected_actor};
use crate::domain::test_state_helpers::make_session;
use crate::domain::{test_gens, test_prelude, Bid, GameType, RoundPhase};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a full rotation returns the deal to the same seat.
    #[test]
    fn prop_full_rotation_returns_dealer(
        (n, dealer) in test_gens::player_count().prop_flat_map(|n| (Just(n), test_gens::dealer(n))),
        rounds in 0usize..200,
    ) {
        prop_assert_eq!(
            current_dealer(dealer, n, rounds),
            current_dealer(dealer, n, rounds + usize::from(n))
        );
        prop_assert!(current_dealer(dealer, n, rounds) < n);
    }

    /// Property: the bidding window never starts at the dealer.
    #[test]
    fn prop_first_hand_is_not_dealer(
        (n, dealer) in test_gens::player_count().prop_flat_map(|n| (Just(n), test_gens::dealer(n))),
    ) {
        prop_assert_ne!(expected_actor(dealer, 0, n), dealer);
    }

    /// Property: three passes always yield a table round without a declarer.
    #[test]
    fn prop_three_passes_yield_no_play(
        (n, dealer) in test_gens::player_count().prop_flat_map(|n| (Just(n), test_gens::dealer(n))),
    ) {
        let mut state = make_session(n, dealer);
        for _ in 0..3 {
            state = apply(&state, crate::domain::Action::Bid(Bid::Pass)).unwrap();
        }
        prop_assert_eq!(state.phase(), RoundPhase::Declared(GameType::NoPlay));
        prop_assert_eq!(GameType::NoPlay.declarer(), None);
    }

    /// Property: arbitrary action streams either apply or are rejected,
    /// and every accepted state stays structurally valid.
    #[test]
    fn prop_random_actions_keep_state_valid(
        (n, dealer) in test_gens::player_count().prop_flat_map(|n| (Just(n), test_gens::dealer(n))),
        actions in prop::collection::vec(test_gens::play_action(), 0..60),
    ) {
        let mut state = make_session(n, dealer);
        for action in actions {
            let before = state.clone();
            match apply(&state, action) {
                Ok(next) => {
                    prop_assert!(next.history.len() >= before.history.len());
                    prop_assert!(next.validate().is_ok(), "{:?}", next.validate());
                    state = next;
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }
        prop_assert_eq!(
            state.current_dealer(),
            Some(current_dealer(dealer, n, state.history.len()))
        );
    }
}
