//! Combat resolution: the damage pipeline and dragon attack execution.
//!
//! ## Damage Pipeline
//!
//! Damage flows through reduction, then shields, then HP:
//!
//! 1. Bronn's flat reduction, degraded by his wounded/critical state
//! 2. Shield absorption for riders (dragons take damage straight to HP)
//! 3. Remaining damage to HP
//!
//! Burn ticks bypass this pipeline entirely; see the start phase in
//! [`crate::engine::phases`].
//!
//! Attacks layer the attacker's rider and dragon hooks on top: Kael's
//! first-strike bonus before the hit, the dragon's archetype ability
//! after it.

use serde::{Deserialize, Serialize};

use crate::catalog::{DragonArchetype, RiderArchetype};
use crate::core::{ActionError, Side, Target};
use crate::engine::economy::{attack_cost, can_attack};
use crate::state::{CombatantState, Match};

/// One application of the damage pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Damage before reduction.
    pub raw: i32,
    /// Bronn's reduction, if any applied.
    pub reduction: i32,
    /// Damage soaked by rider shields (always 0 for dragon hits).
    pub shield_absorbed: i32,
    /// Damage that reached HP.
    pub hp_damage: i32,
    /// Steelhorn's counter fired: the attacker lost 1 energy.
    pub retaliated: bool,
}

/// Bronn's flat reduction against a hit on `target`.
#[must_use]
pub fn damage_reduction(defender: &CombatantState, target: Target) -> i32 {
    if defender.rider.archetype != RiderArchetype::Bronn {
        return 0;
    }
    if defender.rider.is_critical() {
        return 0;
    }
    if defender.rider.is_wounded() {
        return if target == Target::Dragon { 1 } else { 0 };
    }
    1
}

/// Damage the defender's dragon. Dragons carry no shields in play, so
/// reduced damage goes straight to HP. Pass the attacker when the hit
/// comes from an opposing side so Steelhorn's counter can fire.
pub fn damage_dragon(
    defender: &mut CombatantState,
    attacker: Option<&mut CombatantState>,
    amount: i32,
) -> DamageResult {
    let reduction = damage_reduction(defender, Target::Dragon);
    let dealt = (amount - reduction).max(0);
    defender.dragon.hp -= dealt;

    let mut retaliated = false;
    if defender.dragon.archetype == DragonArchetype::Steelhorn && dealt > 0 {
        if let Some(attacker) = attacker {
            attacker.energy = (attacker.energy - 1).max(0);
            retaliated = true;
        }
    }

    DamageResult {
        raw: amount,
        reduction,
        shield_absorbed: 0,
        hp_damage: dealt,
        retaliated,
    }
}

/// Damage the defender's rider. Shields absorb before HP.
pub fn damage_rider(defender: &mut CombatantState, amount: i32) -> DamageResult {
    let reduction = damage_reduction(defender, Target::Rider);
    let dealt = (amount - reduction).max(0);

    let absorbed = defender.rider.shields.min(dealt);
    defender.rider.shields -= absorbed;
    let hp_damage = dealt - absorbed;
    defender.rider.hp -= hp_damage;

    DamageResult {
        raw: amount,
        reduction,
        shield_absorbed: absorbed,
        hp_damage,
        retaliated: false,
    }
}

/// Heal the dragon, capped at max HP. Returns HP actually restored.
pub fn heal_dragon(side: &mut CombatantState, amount: i32) -> i32 {
    let healed = amount.min(side.dragon.spec().max_hp - side.dragon.hp);
    side.dragon.hp += healed;
    healed
}

/// Heal the rider, capped at max HP. Healing above the wounded threshold
/// lifts a forced wounded state. Returns HP actually restored.
pub fn heal_rider(side: &mut CombatantState, amount: i32) -> i32 {
    let healed = amount.min(side.rider.spec().max_hp - side.rider.hp);
    side.rider.hp += healed;
    if side.rider.hp > side.rider.spec().wounded_threshold {
        side.rider.force_wounded = false;
    }
    healed
}

/// Grant shields to the rider. Morrik only banks half (rounded up)
/// while wounded. Returns shields actually granted.
pub fn add_shields(side: &mut CombatantState, amount: i32) -> i32 {
    let granted = if side.rider.archetype == RiderArchetype::Morrik && side.rider.is_wounded() {
        (amount + 1) / 2
    } else {
        amount
    };
    side.rider.shields += granted;
    granted
}

/// Kael's first-strike rider bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstStrikeBonus {
    pub damage: i32,
    pub shields: i32,
}

/// Everything one attack did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub target: Target,
    pub cost_paid: i32,
    pub first_strike: Option<FirstStrikeBonus>,
    pub damage: DamageResult,
    /// Voltwing's splash onto the other unit.
    pub splash: Option<DamageResult>,
    /// Burn stacks applied by Emberfang's hook.
    pub burn_applied: i32,
    /// `Some(true)` if Cryowyrm froze the target, `Some(false)` if
    /// immunity blocked it, `None` for other dragons.
    pub froze_target: Option<bool>,
    /// Energy Voidmaw stole.
    pub energy_stolen: i32,
}

/// Resolve a dragon attack by `side` against the enemy `target`.
///
/// Legality gating (turn ownership, match over) happens in the public
/// API; this checks attack legality itself and performs no mutation on
/// rejection.
pub fn execute_attack(
    game: &mut Match,
    side: Side,
    target: Target,
) -> Result<AttackOutcome, ActionError> {
    if !can_attack(game.side(side)) {
        return Err(ActionError::AttackBlocked);
    }

    let (attacker, defender) = game.pair_mut(side);

    let cost = attack_cost(attacker);
    attacker.energy -= cost;

    let first_strike_window = attacker.first_attack_available;

    // Kael first-strike bonus, gone entirely at critical.
    let mut damage = attacker.dragon.spec().attack_damage;
    let mut first_strike = None;
    if attacker.rider.archetype == RiderArchetype::Kael
        && first_strike_window
        && !attacker.rider.is_critical()
    {
        let bonus = if attacker.rider.is_wounded() {
            FirstStrikeBonus { damage: 1, shields: 1 }
        } else {
            FirstStrikeBonus { damage: 2, shields: 2 }
        };
        damage += bonus.damage;
        attacker.rider.shields += bonus.shields;
        first_strike = Some(bonus);
    }

    let damage = match target {
        Target::Dragon => damage_dragon(defender, Some(&mut *attacker), damage),
        Target::Rider => damage_rider(defender, damage),
    };

    let mut outcome = AttackOutcome {
        target,
        cost_paid: cost,
        first_strike,
        damage,
        splash: None,
        burn_applied: 0,
        froze_target: None,
        energy_stolen: 0,
    };

    match attacker.dragon.archetype {
        DragonArchetype::Emberfang => {
            if first_strike_window && attacker.burn_hook_available {
                defender.apply_burn(target, 1);
                attacker.burn_hook_available = false;
                outcome.burn_applied = 1;
            }
        }
        DragonArchetype::Cryowyrm => {
            outcome.froze_target = Some(defender.apply_freeze(target));
        }
        DragonArchetype::Voltwing => {
            let splash = match target.other() {
                Target::Dragon => damage_dragon(defender, Some(&mut *attacker), 2),
                Target::Rider => damage_rider(defender, 2),
            };
            outcome.splash = Some(splash);
        }
        DragonArchetype::Voidmaw => {
            let stolen = defender.energy.min(1);
            defender.energy -= stolen;
            attacker.energy += stolen;
            outcome.energy_stolen = stolen;
        }
        // Counter lives in the damage pipeline.
        DragonArchetype::Steelhorn => {}
    }

    attacker.first_attack_available = false;

    Ok(outcome)
}
