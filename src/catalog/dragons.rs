//! Dragon archetypes.
//!
//! Dragons are the primary attackers. Each carries a unique always-on
//! combat ability, dispatched by enum in the combat resolver. Starting
//! shields are transferred to the rider at match setup; dragons hold no
//! shields afterwards.

use serde::{Deserialize, Serialize};

/// The five dragon archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragonArchetype {
    /// First attack each turn applies 1 Burn to the target.
    Emberfang,
    /// Every attack attempts to Freeze the target (respects immunity).
    Cryowyrm,
    /// Attacks deal 2 splash damage to the other target type.
    Voltwing,
    /// When damaged, the attacker loses 1 energy.
    Steelhorn,
    /// Attacks steal 1 energy; at turn start, 2 damage to the enemy
    /// dragon when strictly ahead on energy.
    Voidmaw,
}

/// Static definition of a dragon archetype.
#[derive(Clone, Copy, Debug)]
pub struct DragonSpec {
    pub archetype: DragonArchetype,
    pub max_hp: i32,
    /// Starting shields, transferred to the rider at setup.
    pub shields: i32,
    pub attack_cost: i32,
    pub attack_damage: i32,
    pub ability: &'static str,
}

const EMBERFANG: DragonSpec = DragonSpec {
    archetype: DragonArchetype::Emberfang,
    max_hp: 33,
    shields: 3,
    attack_cost: 2,
    attack_damage: 3,
    ability: "First attack each turn applies +1 Burn to target",
};

const CRYOWYRM: DragonSpec = DragonSpec {
    archetype: DragonArchetype::Cryowyrm,
    max_hp: 30,
    shields: 2,
    attack_cost: 2,
    attack_damage: 3,
    ability: "Attacks apply Freeze to target (respects immunity)",
};

const VOLTWING: DragonSpec = DragonSpec {
    archetype: DragonArchetype::Voltwing,
    max_hp: 35,
    shields: 2,
    attack_cost: 2,
    attack_damage: 3,
    ability: "Attacks deal +2 splash damage to the other target",
};

const STEELHORN: DragonSpec = DragonSpec {
    archetype: DragonArchetype::Steelhorn,
    max_hp: 40,
    shields: 4,
    attack_cost: 2,
    attack_damage: 3,
    ability: "When taking damage from attack, attacker loses 1 energy",
};

const VOIDMAW: DragonSpec = DragonSpec {
    archetype: DragonArchetype::Voidmaw,
    max_hp: 32,
    shields: 2,
    attack_cost: 2,
    attack_damage: 3,
    ability: "Attacks steal 1 energy. At turn start, if ahead in energy, deal 2 damage to enemy Dragon",
};

impl DragonArchetype {
    /// All archetypes, in catalog order.
    pub const ALL: [DragonArchetype; 5] = [
        DragonArchetype::Emberfang,
        DragonArchetype::Cryowyrm,
        DragonArchetype::Voltwing,
        DragonArchetype::Steelhorn,
        DragonArchetype::Voidmaw,
    ];

    /// The static definition for this archetype.
    #[must_use]
    pub const fn spec(self) -> &'static DragonSpec {
        match self {
            DragonArchetype::Emberfang => &EMBERFANG,
            DragonArchetype::Cryowyrm => &CRYOWYRM,
            DragonArchetype::Voltwing => &VOLTWING,
            DragonArchetype::Steelhorn => &STEELHORN,
            DragonArchetype::Voidmaw => &VOIDMAW,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DragonArchetype::Emberfang => "Emberfang",
            DragonArchetype::Cryowyrm => "Cryowyrm",
            DragonArchetype::Voltwing => "Voltwing",
            DragonArchetype::Steelhorn => "Steelhorn",
            DragonArchetype::Voidmaw => "Voidmaw",
        }
    }
}

impl std::fmt::Display for DragonArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_matches_archetype() {
        for archetype in DragonArchetype::ALL {
            assert_eq!(archetype.spec().archetype, archetype);
        }
    }

    #[test]
    fn test_uniform_attack_profile() {
        // All dragons share the same base attack; identity comes from
        // the ability hook and the HP/shield budget.
        for archetype in DragonArchetype::ALL {
            let spec = archetype.spec();
            assert_eq!(spec.attack_cost, 2);
            assert_eq!(spec.attack_damage, 3);
        }
    }
}
