//! Energy economy: costs, affordability, and turn income.
//!
//! All archetype-conditional pricing lives here so the AI, the UI, and
//! the resolvers all quote the same numbers.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardTarget, EffectKind, RiderArchetype};
use crate::core::Target;
use crate::state::{CombatantState, BASE_INCOME};

/// Effective attack cost for this side right now.
///
/// Kael pays a +1 surcharge while critical.
#[must_use]
pub fn attack_cost(side: &CombatantState) -> i32 {
    let mut cost = side.dragon.spec().attack_cost;
    if side.rider.archetype == RiderArchetype::Kael && side.rider.is_critical() {
        cost += 1;
    }
    cost
}

/// Effective cost of a card for this side right now.
///
/// Lyra pays +1 on freeze cards while wounded.
#[must_use]
pub fn card_cost(side: &CombatantState, card: CardId) -> i32 {
    let spec = card.spec();
    let mut cost = spec.cost;
    if side.rider.archetype == RiderArchetype::Lyra
        && side.rider.is_wounded()
        && spec.effect == EffectKind::Freeze
    {
        cost += 1;
    }
    cost
}

/// Whether this side may attack: dragon alive, not frozen, cost covered.
#[must_use]
pub fn can_attack(side: &CombatantState) -> bool {
    side.dragon.is_alive() && !side.dragon_frozen && side.energy >= attack_cost(side)
}

/// Whether this side may play the card (assuming it is in hand).
///
/// Checks affordability, archetype critical-state restrictions, and the
/// one-card cap while the dragon is frozen.
#[must_use]
pub fn can_play_card(side: &CombatantState, card: CardId) -> bool {
    let spec = card.spec();

    if side.energy < card_cost(side, card) {
        return false;
    }

    if side.rider.archetype == RiderArchetype::Lyra
        && side.rider.is_critical()
        && spec.effect == EffectKind::Freeze
    {
        return false;
    }

    if side.rider.archetype == RiderArchetype::Morrik
        && side.rider.is_critical()
        && spec.effect == EffectKind::Shield
    {
        return false;
    }

    if side.dragon_frozen && side.cards_played_while_frozen >= 1 {
        return false;
    }

    true
}

/// Whether the card expects the caller to name a unit.
///
/// Only cards aimed at one enemy unit take a target; self-buffs and
/// whole-side effects resolve without one.
#[must_use]
pub fn needs_target(card: CardId) -> bool {
    matches!(card.spec().target, CardTarget::Dragon | CardTarget::Rider)
}

/// Whether the named unit is a legal target for the card.
///
/// Unit-locked cards accept only their own unit; everything else
/// ignores the choice.
#[must_use]
pub fn valid_target(card: CardId, target: Target) -> bool {
    match card.spec().target {
        CardTarget::Dragon => target == Target::Dragon,
        CardTarget::Rider => target == Target::Rider,
        _ => true,
    }
}

/// How a side's turn income decomposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Fixed base income.
    pub base: i32,
    /// Rider economy after wounded penalties, floored at 0.
    pub rider: i32,
    /// Talia's bonus while her dragon is alive and she is not critical.
    pub dragon_alive_bonus: Option<i32>,
}

impl IncomeBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.base + self.rider + self.dragon_alive_bonus.unwrap_or(0)
    }
}

/// Turn income for this side: base plus rider economy.
#[must_use]
pub fn income_breakdown(side: &CombatantState) -> IncomeBreakdown {
    let rider = &side.rider;
    let mut economy = rider.spec().base_economy;
    let mut dragon_alive_bonus = None;

    if rider.archetype == RiderArchetype::Talia {
        if rider.is_wounded() {
            economy -= 1;
        }
        if !rider.is_critical() && side.dragon.is_alive() {
            dragon_alive_bonus = Some(1);
        }
    }

    IncomeBreakdown {
        base: BASE_INCOME,
        rider: economy.max(0),
        dragon_alive_bonus,
    }
}

/// Total turn income for this side.
#[must_use]
pub fn income(side: &CombatantState) -> i32 {
    income_breakdown(side).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_pool, CardIndex, DragonArchetype};
    use crate::state::Loadout;

    fn side_with(rider: RiderArchetype, dragon: DragonArchetype) -> CombatantState {
        let pool = standard_pool();
        CombatantState::new(&Loadout {
            rider,
            dragon,
            deck: pool[..20].to_vec(),
        })
    }

    fn card(name: &str) -> CardId {
        CardId::new(CardIndex::new().lookup(name).unwrap(), 0)
    }

    #[test]
    fn test_talia_income_breakpoints() {
        let mut side = side_with(RiderArchetype::Talia, DragonArchetype::Emberfang);

        // Healthy: 3 base + 2 rider + 1 dragon-alive.
        assert_eq!(income(&side), 6);

        // Wounded: rider economy drops by 1, dragon bonus stays.
        side.rider.hp = 13;
        assert_eq!(income(&side), 5);

        // Critical: loses the dragon bonus too.
        side.rider.hp = 7;
        assert_eq!(income(&side), 4);

        // Dead dragon: no dragon bonus at full health either.
        side.rider.hp = 18;
        side.dragon.hp = 0;
        assert_eq!(income(&side), 5);
    }

    #[test]
    fn test_flat_income_for_other_riders() {
        let side = side_with(RiderArchetype::Kael, DragonArchetype::Cryowyrm);
        assert_eq!(income(&side), 4);

        let breakdown = income_breakdown(&side);
        assert_eq!(breakdown.base, BASE_INCOME);
        assert_eq!(breakdown.rider, 1);
        assert_eq!(breakdown.dragon_alive_bonus, None);
    }

    #[test]
    fn test_kael_critical_attack_surcharge() {
        let mut side = side_with(RiderArchetype::Kael, DragonArchetype::Emberfang);
        assert_eq!(attack_cost(&side), 2);

        side.rider.hp = 6;
        assert_eq!(attack_cost(&side), 3);
    }

    #[test]
    fn test_lyra_freeze_surcharge_and_lockout() {
        let mut side = side_with(RiderArchetype::Lyra, DragonArchetype::Cryowyrm);
        side.energy = 10;
        let freeze_ray = card("Freeze Ray");

        assert_eq!(card_cost(&side, freeze_ray), 2);
        assert!(can_play_card(&side, freeze_ray));

        side.rider.hp = 12;
        assert_eq!(card_cost(&side, freeze_ray), 3);
        assert!(can_play_card(&side, freeze_ray));

        side.rider.hp = 6;
        assert!(!can_play_card(&side, freeze_ray));
        // Non-freeze cards are unaffected.
        assert!(can_play_card(&side, card("Strike")));
    }

    #[test]
    fn test_morrik_critical_shield_lockout() {
        let mut side = side_with(RiderArchetype::Morrik, DragonArchetype::Steelhorn);
        side.energy = 10;
        let shield_up = card("Shield Up");

        assert!(can_play_card(&side, shield_up));
        side.rider.hp = 8;
        assert!(!can_play_card(&side, shield_up));
    }

    #[test]
    fn test_frozen_dragon_blocks_attack_and_caps_cards() {
        let mut side = side_with(RiderArchetype::Bronn, DragonArchetype::Voltwing);
        side.energy = 10;

        assert!(can_attack(&side));
        side.dragon_frozen = true;
        assert!(!can_attack(&side));

        let strike = card("Strike");
        assert!(can_play_card(&side, strike));
        side.cards_played_while_frozen = 1;
        assert!(!can_play_card(&side, strike));
    }

    #[test]
    fn test_targeting_rules_follow_card_target() {
        // Unit-locked cards require a matching unit.
        let ray = card("Freeze Ray");
        assert!(needs_target(ray));
        assert!(valid_target(ray, Target::Dragon));
        assert!(!valid_target(ray, Target::Rider));

        let immobilize = card("Rider Immobilize");
        assert!(needs_target(immobilize));
        assert!(valid_target(immobilize, Target::Rider));
        assert!(!valid_target(immobilize, Target::Dragon));

        // Side-wide and self cards take whatever they are given.
        for name in ["Shield Up", "Energy Drain", "Chain Bolt"] {
            let c = card(name);
            assert!(!needs_target(c));
            assert!(valid_target(c, Target::Dragon));
            assert!(valid_target(c, Target::Rider));
        }
    }

    #[test]
    fn test_attack_requires_energy_and_live_dragon() {
        let mut side = side_with(RiderArchetype::Bronn, DragonArchetype::Voltwing);
        side.energy = 1;
        assert!(!can_attack(&side));

        side.energy = 2;
        assert!(can_attack(&side));

        side.dragon.hp = 0;
        assert!(!can_attack(&side));
    }
}
