//! Illegal-intent rejection.
//!
//! Attacking without enough energy, playing a card that is not in hand,
//! or acting after the match has ended are ordinary outcomes, not bugs:
//! the AI routinely probes actions it expects to be rejected. Every
//! mutating entry point returns one of these values and performs no
//! mutation when it does.

use thiserror::Error;

/// Why an intent was rejected. No state was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The match already has a winner; the state is read-only.
    #[error("match has already ended")]
    MatchOver,

    /// The acting side does not currently hold the turn.
    #[error("acting side does not hold the turn")]
    NotYourTurn,

    /// Attack rejected: dragon dead, frozen, or the cost is unaffordable.
    #[error("attack is not legal for this side right now")]
    AttackBlocked,

    /// The named card is not in the acting side's hand.
    #[error("card is not in hand")]
    CardNotInHand,

    /// Card rejected: unaffordable, archetype-restricted, or the frozen
    /// card-play cap was reached.
    #[error("card cannot be played right now")]
    CardBlocked,
}
