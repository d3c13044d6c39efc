//! Rider archetypes.
//!
//! Riders provide per-turn economy and a passive ability that degrades
//! at two HP breakpoints: *wounded* and *critical* (critical implies
//! wounded). The breakpoint thresholds are fixed per archetype.

use serde::{Deserialize, Serialize};

/// The five rider archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiderArchetype {
    Talia,
    Kael,
    Bronn,
    Lyra,
    Morrik,
}

/// Static definition of a rider archetype.
///
/// Instance-specific data (current HP, shields, force-wounded flag) lives
/// in [`crate::state::Rider`].
#[derive(Clone, Copy, Debug)]
pub struct RiderSpec {
    pub archetype: RiderArchetype,
    pub max_hp: i32,
    pub base_economy: i32,
    pub wounded_threshold: i32,
    pub critical_threshold: i32,
    pub passive: &'static str,
    pub wounded_effect: &'static str,
    pub critical_effect: &'static str,
}

const TALIA: RiderSpec = RiderSpec {
    archetype: RiderArchetype::Talia,
    max_hp: 18,
    base_economy: 2,
    wounded_threshold: 13,
    critical_threshold: 7,
    passive: "+1 Economy while Dragon is alive",
    wounded_effect: "Economy reduced by 1",
    critical_effect: "Loses Dragon bonus",
};

const KAEL: RiderSpec = RiderSpec {
    archetype: RiderArchetype::Kael,
    max_hp: 17,
    base_economy: 1,
    wounded_threshold: 12,
    critical_threshold: 6,
    passive: "First attack each turn: +2 damage, Rider gains 2 shields",
    wounded_effect: "Bonus reduced to +1 damage, +1 shield",
    critical_effect: "No bonus; attacks cost +1 energy",
};

const BRONN: RiderSpec = RiderSpec {
    archetype: RiderArchetype::Bronn,
    max_hp: 20,
    base_economy: 1,
    wounded_threshold: 14,
    critical_threshold: 8,
    passive: "Reduce all damage to Dragon and Rider by 1",
    wounded_effect: "Only Dragon damage reduced",
    critical_effect: "No damage reduction",
};

const LYRA: RiderSpec = RiderSpec {
    archetype: RiderArchetype::Lyra,
    max_hp: 17,
    base_economy: 2,
    wounded_threshold: 12,
    critical_threshold: 6,
    passive: "Mistress of freeze effects",
    wounded_effect: "Freeze cards cost +1 energy",
    critical_effect: "Cannot play Freeze cards",
};

const MORRIK: RiderSpec = RiderSpec {
    archetype: RiderArchetype::Morrik,
    max_hp: 19,
    base_economy: 2,
    wounded_threshold: 14,
    critical_threshold: 8,
    passive: "+1 energy when playing Shield cards",
    wounded_effect: "Shield cards only grant half shields (rounded up)",
    critical_effect: "Cannot play Shield cards",
};

impl RiderArchetype {
    /// All archetypes, in catalog order.
    pub const ALL: [RiderArchetype; 5] = [
        RiderArchetype::Talia,
        RiderArchetype::Kael,
        RiderArchetype::Bronn,
        RiderArchetype::Lyra,
        RiderArchetype::Morrik,
    ];

    /// The static definition for this archetype.
    #[must_use]
    pub const fn spec(self) -> &'static RiderSpec {
        match self {
            RiderArchetype::Talia => &TALIA,
            RiderArchetype::Kael => &KAEL,
            RiderArchetype::Bronn => &BRONN,
            RiderArchetype::Lyra => &LYRA,
            RiderArchetype::Morrik => &MORRIK,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RiderArchetype::Talia => "Talia",
            RiderArchetype::Kael => "Kael",
            RiderArchetype::Bronn => "Bronn",
            RiderArchetype::Lyra => "Lyra",
            RiderArchetype::Morrik => "Morrik",
        }
    }
}

impl std::fmt::Display for RiderArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_matches_archetype() {
        for archetype in RiderArchetype::ALL {
            assert_eq!(archetype.spec().archetype, archetype);
        }
    }

    #[test]
    fn test_critical_implies_wounded_threshold() {
        for archetype in RiderArchetype::ALL {
            let spec = archetype.spec();
            assert!(spec.critical_threshold < spec.wounded_threshold);
            assert!(spec.wounded_threshold < spec.max_hp);
        }
    }
}
