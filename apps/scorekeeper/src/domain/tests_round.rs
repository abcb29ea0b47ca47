use crate::domain::round::{place_bid, resolve_round};
use crate::domain::test_state_helpers::make_session;
use crate::domain::{Bid, GameType, Pass, Resolution, RoundOutcome, RoundPhase, SoloGrade};
use crate::errors::domain::{DomainError, TransitionKind};

#[test]
fn passes_rotate_from_left_of_dealer() {
    let mut state = make_session(4, 1);
    assert_eq!(state.to_act(), Some(2));

    place_bid(&mut state, Bid::Pass).unwrap();
    assert_eq!(state.pre_round_actions, vec![Pass { seat: 2 }]);
    assert_eq!(state.to_act(), Some(3));

    place_bid(&mut state, Bid::Pass).unwrap();
    assert_eq!(
        state.pre_round_actions,
        vec![Pass { seat: 2 }, Pass { seat: 3 }]
    );
    assert_eq!(state.to_act(), Some(0));
}

#[test]
fn third_pass_becomes_table_round() {
    let mut state = make_session(3, 0);
    for _ in 0..3 {
        place_bid(&mut state, Bid::Pass).unwrap();
    }
    assert_eq!(state.declared_game_type, Some(GameType::NoPlay));
    assert!(state.pre_round_actions.is_empty());
    assert_eq!(state.phase(), RoundPhase::Declared(GameType::NoPlay));
    assert_eq!(state.to_act(), None);
}

#[test]
fn four_player_dealer_never_asked() {
    // Dealer 2: window is 3, 0, 1; three passes end in a table round.
    let mut state = make_session(4, 2);
    let mut asked = Vec::new();
    while let Some(seat) = state.to_act() {
        asked.push(seat);
        place_bid(&mut state, Bid::Pass).unwrap();
    }
    assert_eq!(asked, vec![3, 0, 1]);
    assert_eq!(state.declared_game_type, Some(GameType::NoPlay));
}

#[test]
fn declarer_is_seat_whose_turn_it_is() {
    let mut state = make_session(3, 0);
    place_bid(&mut state, Bid::Pass).unwrap();
    place_bid(&mut state, Bid::Pass).unwrap();
    place_bid(&mut state, Bid::DeclareSoloGameA).unwrap();
    assert_eq!(
        state.declared_game_type,
        Some(GameType::SoloGameA { declarer: 0 })
    );
    assert!(state.pre_round_actions.is_empty());
}

#[test]
fn first_hand_can_declare_immediately() {
    let mut state = make_session(4, 3);
    place_bid(&mut state, Bid::DeclareSoloGameB).unwrap();
    assert_eq!(
        state.declared_game_type,
        Some(GameType::SoloGameB { declarer: 0 })
    );
}

#[test]
fn declaring_twice_is_rejected_and_state_kept() {
    let mut state = make_session(3, 1);
    place_bid(&mut state, Bid::DeclareSmallGame).unwrap();
    let before = state.clone();

    let err = place_bid(&mut state, Bid::DeclareSoloGameA).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::AlreadyDeclared, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn resolve_while_bidding_is_rejected_and_state_kept() {
    let mut state = make_session(3, 0);
    place_bid(&mut state, Bid::Pass).unwrap();
    let before = state.clone();

    let err = resolve_round(&mut state, Resolution::SmallGame { won: true }).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::NotDeclared, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn mismatched_resolution_is_rejected() {
    let mut state = make_session(4, 0);
    place_bid(&mut state, Bid::DeclareSmallGame).unwrap();
    let before = state.clone();

    let err = resolve_round(
        &mut state,
        Resolution::SoloGame {
            grade: SoloGrade::Win61To90,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::OutcomeMismatch, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn table_round_loser_must_be_seated() {
    let mut state = make_session(3, 0);
    for _ in 0..3 {
        place_bid(&mut state, Bid::Pass).unwrap();
    }
    let before = state.clone();
    let err = resolve_round(&mut state, Resolution::NoPlay { loser: 3 }).unwrap_err();
    assert_eq!(
        err,
        DomainError::OutOfRangeSeat {
            seat: 3,
            player_count: 3
        }
    );
    assert_eq!(state, before);
}

#[test]
fn resolution_appends_history_and_rotates_dealer() {
    let mut state = make_session(4, 0);
    place_bid(&mut state, Bid::DeclareSmallGame).unwrap();
    resolve_round(&mut state, Resolution::SmallGame { won: false }).unwrap();

    assert_eq!(state.history.len(), 1);
    let round = &state.history[0];
    assert_eq!(
        round.outcome,
        RoundOutcome::SmallGame {
            declarer: 1,
            won: false
        }
    );
    assert_eq!(round.deltas, vec![7, -21, 7, 7]);
    assert_eq!(state.declared_game_type, None);
    assert!(state.pre_round_actions.is_empty());
    assert_eq!(state.current_dealer(), Some(1));
    assert_eq!(state.to_act(), Some(2));
}

#[test]
fn bidding_before_setup_is_rejected() {
    let mut state = crate::domain::SessionState::default();
    let err = place_bid(&mut state, Bid::Pass).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::NotSetUp, _)
    ));
}
