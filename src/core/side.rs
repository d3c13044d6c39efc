//! Side and target identifiers.
//!
//! A duel always has exactly two sides. `Side` indexes into the match's
//! combatant pair; `Target` picks one of the two units on a side.

use serde::{Deserialize, Serialize};

/// One of the two combatants in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in seating order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into per-side arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "side A"),
            Side::B => write!(f, "side B"),
        }
    }
}

/// A unit that can be attacked or resolved as a card target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Dragon,
    Rider,
}

impl Target {
    /// The other unit on the same side (used for splash damage).
    #[must_use]
    pub const fn other(self) -> Target {
        match self {
            Target::Dragon => Target::Rider,
            Target::Rider => Target::Dragon,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Dragon => write!(f, "Dragon"),
            Target::Rider => write!(f, "Rider"),
        }
    }
}
