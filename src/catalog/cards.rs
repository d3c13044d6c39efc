//! Card catalog: static definitions and deterministic per-copy identity.
//!
//! The catalog is the shared draft pool: ~20 named definitions, each with
//! 1-4 copies, 44 cards total. A [`CardId`] is a definition index plus a
//! copy index, so any participant holding the catalog reconstructs the
//! same identity from the same id without card objects crossing the wire.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The fifteen card effect archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Flat damage to the resolved target.
    Damage,
    /// Damage plus burn stacks to the same target.
    Burn,
    /// Attempt freeze on the resolved target, no damage.
    Freeze,
    /// Grant shields to the owner's rider.
    Shield,
    /// Restore HP to the owner's dragon or rider per the card's target.
    Heal,
    /// Add flat energy to the owner.
    Energy,
    /// Remove energy from the opponent, floored at 0.
    Drain,
    /// Opponent randomly discards N cards from hand.
    Discard,
    /// Split damage: primary to the enemy dragon, secondary to the rider.
    Chain,
    /// Like chain: simultaneous damage to both enemy units.
    Dual,
    /// Damage the enemy rider and force the wounded state.
    Cripple,
    /// Remove freeze from whichever own unit is frozen, then draw one.
    Thaw,
    /// Zero out the owner's burn stacks on both units.
    Firebreak,
    /// Zero out the enemy dragon's shields.
    Strip,
    /// Grant the enemy dragon temporary freeze immunity.
    EnergyShield,
}

/// Who a card points at.
///
/// `Dragon`/`Rider` pick a unit (enemy side for offensive effects, own
/// side for heals); `Own`, `Opponent`, and `Both` need no target choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTarget {
    Dragon,
    Rider,
    Own,
    Opponent,
    Both,
}

/// Index of a card definition in [`CATALOG`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardDefId(pub u16);

impl CardDefId {
    /// The static definition behind this id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not index the catalog; ids built through
    /// [`standard_pool`] or [`CardIndex`] are always valid.
    #[must_use]
    pub fn spec(self) -> &'static CardSpec {
        &CATALOG[self.0 as usize]
    }
}

/// Deterministic identity of one physical card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub def: CardDefId,
    pub copy: u8,
}

impl CardId {
    #[must_use]
    pub const fn new(def: CardDefId, copy: u8) -> Self {
        Self { def, copy }
    }

    /// The static definition behind this card.
    #[must_use]
    pub fn spec(self) -> &'static CardSpec {
        self.def.spec()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.spec().name, self.copy)
    }
}

/// Static definition of a card.
#[derive(Clone, Copy, Debug)]
pub struct CardSpec {
    pub name: &'static str,
    pub cost: i32,
    pub effect: EffectKind,
    pub target: CardTarget,
    pub value: i32,
    pub secondary_value: i32,
    pub copies: u8,
    pub description: &'static str,
}

/// The shared draft catalog.
pub const CATALOG: &[CardSpec] = &[
    // Dragon damage
    CardSpec {
        name: "Strike",
        cost: 1,
        effect: EffectKind::Damage,
        target: CardTarget::Dragon,
        value: 2,
        secondary_value: 0,
        copies: 4,
        description: "Deal 2 damage to enemy Dragon",
    },
    CardSpec {
        name: "Heavy Blow",
        cost: 3,
        effect: EffectKind::Damage,
        target: CardTarget::Dragon,
        value: 4,
        secondary_value: 0,
        copies: 2,
        description: "Deal 4 damage to enemy Dragon",
    },
    CardSpec {
        name: "Burning Hit",
        cost: 2,
        effect: EffectKind::Burn,
        target: CardTarget::Dragon,
        value: 1,
        secondary_value: 1,
        copies: 2,
        description: "Deal 1 damage to enemy Dragon and apply 1 Burn",
    },
    // Rider damage
    CardSpec {
        name: "Weakening Strike",
        cost: 1,
        effect: EffectKind::Damage,
        target: CardTarget::Rider,
        value: 2,
        secondary_value: 0,
        copies: 3,
        description: "Deal 2 damage to enemy Rider",
    },
    CardSpec {
        name: "Precision Strike",
        cost: 1,
        effect: EffectKind::Damage,
        target: CardTarget::Rider,
        value: 3,
        secondary_value: 0,
        copies: 2,
        description: "Deal 3 damage to enemy Rider",
    },
    CardSpec {
        name: "Crippling Blow",
        cost: 3,
        effect: EffectKind::Cripple,
        target: CardTarget::Rider,
        value: 2,
        secondary_value: 0,
        copies: 1,
        description: "Deal 2 damage to enemy Rider, target becomes Wounded until healed",
    },
    // Multi-target
    CardSpec {
        name: "Chain Bolt",
        cost: 2,
        effect: EffectKind::Chain,
        target: CardTarget::Both,
        value: 2,
        secondary_value: 1,
        copies: 2,
        description: "Deal 2 damage to enemy Dragon, 1 damage to enemy Rider",
    },
    CardSpec {
        name: "Dual Strike",
        cost: 1,
        effect: EffectKind::Dual,
        target: CardTarget::Both,
        value: 1,
        secondary_value: 1,
        copies: 2,
        description: "Deal 1 damage to enemy Dragon and 1 damage to enemy Rider",
    },
    // Control
    CardSpec {
        name: "Freeze Ray",
        cost: 2,
        effect: EffectKind::Freeze,
        target: CardTarget::Dragon,
        value: 0,
        secondary_value: 0,
        copies: 2,
        description: "Apply Freeze to enemy Dragon",
    },
    CardSpec {
        name: "Rider Immobilize",
        cost: 3,
        effect: EffectKind::Freeze,
        target: CardTarget::Rider,
        value: 0,
        secondary_value: 0,
        copies: 2,
        description: "Apply Freeze to enemy Rider",
    },
    CardSpec {
        name: "Energy Drain",
        cost: 2,
        effect: EffectKind::Drain,
        target: CardTarget::Opponent,
        value: 2,
        secondary_value: 0,
        copies: 2,
        description: "Opponent loses 2 Energy",
    },
    CardSpec {
        name: "Sabotage",
        cost: 2,
        effect: EffectKind::Discard,
        target: CardTarget::Opponent,
        value: 2,
        secondary_value: 0,
        copies: 2,
        description: "Opponent discards 2 cards randomly",
    },
    // Defense
    CardSpec {
        name: "Shield Up",
        cost: 2,
        effect: EffectKind::Shield,
        target: CardTarget::Own,
        value: 2,
        secondary_value: 0,
        copies: 3,
        description: "Your Rider gains 2 Shields",
    },
    CardSpec {
        name: "Shield Disruptor",
        cost: 2,
        effect: EffectKind::Strip,
        target: CardTarget::Dragon,
        value: 0,
        secondary_value: 0,
        copies: 1,
        description: "Destroy all Shields on enemy Dragon",
    },
    // Healing
    CardSpec {
        name: "Dragon Heal",
        cost: 2,
        effect: EffectKind::Heal,
        target: CardTarget::Dragon,
        value: 3,
        secondary_value: 0,
        copies: 2,
        description: "Heal your Dragon for 3 HP",
    },
    CardSpec {
        name: "Rider Heal",
        cost: 2,
        effect: EffectKind::Heal,
        target: CardTarget::Rider,
        value: 3,
        secondary_value: 0,
        copies: 4,
        description: "Heal your Rider for 3 HP",
    },
    // Utility
    CardSpec {
        name: "Energy Surge",
        cost: 1,
        effect: EffectKind::Energy,
        target: CardTarget::Own,
        value: 3,
        secondary_value: 0,
        copies: 2,
        description: "Gain 3 Energy",
    },
    CardSpec {
        name: "Thaw",
        cost: 1,
        effect: EffectKind::Thaw,
        target: CardTarget::Own,
        value: 1,
        secondary_value: 0,
        copies: 2,
        description: "Remove Freeze from your Dragon or Rider. Draw 1 card.",
    },
    CardSpec {
        name: "Firebreak",
        cost: 1,
        effect: EffectKind::Firebreak,
        target: CardTarget::Own,
        value: 0,
        secondary_value: 0,
        copies: 2,
        description: "Remove all Burn from your Dragon and Rider",
    },
    CardSpec {
        name: "Energy Shield",
        cost: 2,
        effect: EffectKind::EnergyShield,
        target: CardTarget::Own,
        value: 0,
        secondary_value: 0,
        copies: 2,
        description: "Prevent the next Freeze applied to the enemy Dragon",
    },
];

/// Drafted deck size.
pub const DECK_SIZE: usize = 20;

/// Total physical copies across the catalog.
pub const POOL_SIZE: usize = 44;

/// Every physical card copy in the shared pool, in catalog order.
#[must_use]
pub fn standard_pool() -> Vec<CardId> {
    let mut pool = Vec::with_capacity(POOL_SIZE);
    for (index, spec) in CATALOG.iter().enumerate() {
        for copy in 0..spec.copies {
            pool.push(CardId::new(CardDefId(index as u16), copy));
        }
    }
    pool
}

/// Name index over the catalog.
///
/// Built once by drafting layers and tests that address cards by name.
#[derive(Clone, Debug)]
pub struct CardIndex {
    by_name: FxHashMap<&'static str, CardDefId>,
}

impl CardIndex {
    #[must_use]
    pub fn new() -> Self {
        let by_name = CATALOG
            .iter()
            .enumerate()
            .map(|(index, spec)| (spec.name, CardDefId(index as u16)))
            .collect();
        Self { by_name }
    }

    /// Look up a definition by its catalog name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CardDefId> {
        self.by_name.get(name).copied()
    }
}

impl Default for CardIndex {
    fn default() -> Self {
        Self::new()
    }
}
