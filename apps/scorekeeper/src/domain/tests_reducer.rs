use crate::domain::reducer::{apply, replay, Action};
use crate::domain::test_state_helpers::{apply_all, make_session, roster, solo_a_round};
use crate::domain::{Bid, GameType, SessionState, SoloGrade};
use crate::errors::domain::{ConfigurationKind, DomainError, TransitionKind};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn three_player_scenario_matches_scoring_table() {
    let state = apply_all(make_session(3, 0), &solo_a_round());
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.totals(), vec![12, -6, -6]);
    assert_eq!(state.current_dealer(), Some(1));
}

#[test]
fn setup_rejects_two_players() {
    let err = apply(
        &SessionState::default(),
        Action::SetupPlayers(names(&["Anna", "Juris"])),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidConfiguration(ConfigurationKind::PlayerCount, _)
    ));
}

#[test]
fn setup_trims_names() {
    let state = apply(
        &SessionState::default(),
        Action::SetupPlayers(names(&[" Anna", "Juris ", "Līga"])),
    )
    .unwrap();
    assert_eq!(state.players, names(&["Anna", "Juris", "Līga"]));
    assert_eq!(state.initial_dealer, None);
}

#[test]
fn dealer_requires_players() {
    let err = apply(&SessionState::default(), Action::SelectInitialDealer(0)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidConfiguration(_, _)));
}

#[test]
fn dealer_out_of_range_is_rejected() {
    let state = apply(&SessionState::default(), Action::SetupPlayers(roster(3))).unwrap();
    let err = apply(&state, Action::SelectInitialDealer(3)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidConfiguration(ConfigurationKind::DealerOutOfRange, _)
    ));
}

#[test]
fn reselecting_dealer_clears_passes() {
    let state = apply_all(make_session(4, 0), &[Action::Bid(Bid::Pass)]);
    assert_eq!(state.pre_round_actions.len(), 1);

    let state = apply(&state, Action::SelectInitialDealer(2)).unwrap();
    assert!(state.pre_round_actions.is_empty());
    assert_eq!(state.to_act(), Some(3));
}

#[test]
fn setup_is_locked_after_first_round() {
    let state = apply_all(make_session(3, 0), &solo_a_round());

    let err = apply(&state, Action::SetupPlayers(roster(4))).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::SetupLocked, _)
    ));
    let err = apply(&state, Action::SelectInitialDealer(1)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::SetupLocked, _)
    ));
}

#[test]
fn rejected_action_leaves_input_untouched() {
    let state = make_session(4, 0);
    let before = state.clone();
    assert!(apply(&state, Action::ResolveSmallGame { won: true }).is_err());
    assert_eq!(state, before);
}

#[test]
fn replay_builds_the_same_state_as_stepwise_apply() {
    let mut actions = vec![
        Action::SetupPlayers(roster(4)),
        Action::SelectInitialDealer(3),
    ];
    actions.extend(solo_a_round());
    actions.extend([
        Action::Bid(Bid::Pass),
        Action::Bid(Bid::Pass),
        Action::Bid(Bid::Pass),
        Action::ResolveNoPlay(1),
    ]);

    let replayed = replay(actions.clone()).unwrap();
    let stepwise = apply_all(SessionState::default(), &actions);
    assert_eq!(replayed, stepwise);
    assert_eq!(replayed.history.len(), 2);
    assert!(replayed.validate().is_ok());
}

#[test]
fn replay_stops_at_first_rejection() {
    let err = replay([
        Action::SetupPlayers(roster(3)),
        Action::Bid(Bid::Pass),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::NotSetUp, _)
    ));
}

#[test]
fn equal_declared_states_resolve_identically() {
    let declare = [Action::Bid(Bid::DeclareSoloGameB)];
    let a = apply_all(make_session(4, 1), &declare);
    let b = apply_all(make_session(4, 1), &declare);
    assert_eq!(a.declared_game_type, Some(GameType::SoloGameB { declarer: 2 }));

    let resolve = Action::ResolveSoloGame(SoloGrade::WinAllTricks);
    let a = apply(&a, resolve.clone()).unwrap();
    let b = apply(&b, resolve).unwrap();
    assert_eq!(a.history.last(), b.history.last());
    assert_eq!(a.totals(), vec![-3, -3, 9, -3]);
}
