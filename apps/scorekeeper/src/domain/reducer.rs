//! The session reducer: `(state, action) -> state'`.

use serde::{Deserialize, Serialize};

use crate::domain::game_type::{Bid, Resolution, SoloGrade};
use crate::domain::round::{place_bid, resolve_round};
use crate::domain::setup::{validate_dealer, validate_roster};
use crate::domain::state::{Seat, SessionState};
use crate::errors::domain::{ConfigurationKind, DomainError, TransitionKind};

/// Input consumed by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum Action {
    SetupPlayers(Vec<String>),
    SelectInitialDealer(Seat),
    Bid(Bid),
    ResolveNoPlay(Seat),
    ResolveSmallGame { won: bool },
    ResolveSoloGame(SoloGrade),
}

/// Apply one action. On error the input state is untouched and no new state
/// is produced.
pub fn apply(state: &SessionState, action: Action) -> Result<SessionState, DomainError> {
    let mut next = state.clone();
    match action {
        Action::SetupPlayers(names) => {
            ensure_unlocked(state, "players")?;
            let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
            validate_roster(&names)?;
            next.players = names;
            if let Some(dealer) = next.initial_dealer {
                if dealer >= next.player_count() {
                    next.initial_dealer = None;
                }
            }
            next.pre_round_actions.clear();
            next.declared_game_type = None;
        }
        Action::SelectInitialDealer(dealer) => {
            ensure_unlocked(state, "initial dealer")?;
            if state.players.is_empty() {
                return Err(DomainError::configuration(
                    ConfigurationKind::PlayerCount,
                    "players must be chosen before the dealer",
                ));
            }
            validate_dealer(dealer, state.player_count())?;
            next.initial_dealer = Some(dealer);
            next.pre_round_actions.clear();
            next.declared_game_type = None;
        }
        Action::Bid(bid) => place_bid(&mut next, bid)?,
        Action::ResolveNoPlay(loser) => resolve_round(&mut next, Resolution::NoPlay { loser })?,
        Action::ResolveSmallGame { won } => {
            resolve_round(&mut next, Resolution::SmallGame { won })?
        }
        Action::ResolveSoloGame(grade) => {
            resolve_round(&mut next, Resolution::SoloGame { grade })?
        }
    }
    Ok(next)
}

/// Apply actions in order, stopping at the first rejection.
pub fn replay<I>(actions: I) -> Result<SessionState, DomainError>
where
    I: IntoIterator<Item = Action>,
{
    actions
        .into_iter()
        .try_fold(SessionState::default(), |state, action| apply(&state, action))
}

fn ensure_unlocked(state: &SessionState, what: &str) -> Result<(), DomainError> {
    if state.history.is_empty() && state.declared_game_type.is_none() {
        Ok(())
    } else {
        Err(DomainError::transition(
            TransitionKind::SetupLocked,
            format!("cannot change {what} once a round is under way"),
        ))
    }
}
