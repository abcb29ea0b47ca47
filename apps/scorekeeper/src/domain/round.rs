//! Round state machine: `Bidding(passes) -> Declared(game type) -> Resolved`.
//!
//! Every transition validates fully before touching the state, so a rejected
//! action leaves the state exactly as it was.

use crate::domain::game_type::{Bid, GameType, Pass, Resolution, RoundOutcome};
use crate::domain::rules::MAX_PASSES;
use crate::domain::scoring::apply_outcome;
use crate::domain::state::{expected_actor, RoundPhase, SessionState};
use crate::errors::domain::{DomainError, TransitionKind};

/// Record a pass or declaration for the seat whose turn it is.
pub fn place_bid(state: &mut SessionState, bid: Bid) -> Result<(), DomainError> {
    let passes = match state.phase() {
        RoundPhase::Bidding { passes } => passes.len(),
        RoundPhase::Setup => {
            return Err(DomainError::transition(
                TransitionKind::NotSetUp,
                "cannot bid before players and dealer are chosen",
            ))
        }
        RoundPhase::Declared(game_type) => {
            return Err(DomainError::transition(
                TransitionKind::AlreadyDeclared,
                format!("{} is already declared for this round", game_type.label()),
            ))
        }
    };
    let dealer = state.require_dealer("place_bid")?;
    let seat = expected_actor(dealer, passes, state.player_count());

    let declared = match bid {
        Bid::Pass if passes < MAX_PASSES => {
            state.pre_round_actions.push(Pass { seat });
            return Ok(());
        }
        Bid::Pass => GameType::NoPlay,
        Bid::DeclareSmallGame => GameType::SmallGame { declarer: seat },
        Bid::DeclareSoloGameA => GameType::SoloGameA { declarer: seat },
        Bid::DeclareSoloGameB => GameType::SoloGameB { declarer: seat },
    };
    state.declared_game_type = Some(declared);
    state.pre_round_actions.clear();
    Ok(())
}

/// Resolve the declared round, append the scored round and start the next one.
pub fn resolve_round(state: &mut SessionState, resolution: Resolution) -> Result<(), DomainError> {
    let game_type = match state.phase() {
        RoundPhase::Declared(game_type) => game_type,
        RoundPhase::Setup => {
            return Err(DomainError::transition(
                TransitionKind::NotSetUp,
                "cannot resolve before players and dealer are chosen",
            ))
        }
        RoundPhase::Bidding { .. } => {
            return Err(DomainError::transition(
                TransitionKind::NotDeclared,
                "cannot resolve a round that is still bidding",
            ))
        }
    };
    if let Resolution::NoPlay { loser } = resolution {
        state.require_seat(loser)?;
    }
    let outcome = RoundOutcome::from_parts(game_type, resolution).ok_or_else(|| {
        DomainError::transition(
            TransitionKind::OutcomeMismatch,
            format!("{resolution:?} does not resolve {}", game_type.label()),
        )
    })?;

    let scored = apply_outcome(outcome, &state.totals(), state.player_count());
    state.history.push(scored);
    state.declared_game_type = None;
    state.pre_round_actions.clear();
    Ok(())
}
