//! Core building blocks: side/target identifiers, deterministic RNG,
//! and the illegal-intent error type.

mod error;
mod rng;
mod side;

pub use error::ActionError;
pub use rng::{MatchRng, MatchRngState};
pub use side::{Side, Target};
