//! Card effect interpreter.
//!
//! One entry point, [`execute_card`], validates, pays, moves the card to
//! discard, then dispatches on the effect archetype. Every branch fills
//! in the relevant slots of [`CardOutcome`]; the engine never writes to
//! a log itself.
//!
//! ## Resolution Order
//!
//! 1. Reject if the card is not in hand or `can_play_card` fails (no
//!    mutation on rejection)
//! 2. Pay the effective cost, then Morrik's shield-card rebate
//! 3. Bump the frozen-play counter if the own dragon is frozen
//! 4. Move the card from hand to discard
//! 5. Dispatch the effect

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardTarget, EffectKind, RiderArchetype};
use crate::core::{ActionError, Side, Target};
use crate::engine::combat::{
    add_shields, damage_dragon, damage_rider, heal_dragon, heal_rider, DamageResult,
};
use crate::engine::economy::{can_play_card, card_cost};
use crate::state::Match;

/// Everything one card play did.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardOutcome {
    pub cost_paid: i32,
    /// Morrik's shield-card energy rebate.
    pub rebate: i32,
    pub damage: Option<DamageResult>,
    pub secondary_damage: Option<DamageResult>,
    /// Sum of HP damage across both hits.
    pub total_damage: i32,
    pub damage_target: Option<CardTarget>,
    pub healing: i32,
    pub shields_gained: i32,
    pub burn_applied: i32,
    /// `Some(true)` when a freeze landed, `Some(false)` when immunity
    /// blocked it, `None` for non-freezing cards.
    pub froze_target: Option<bool>,
    pub energy_drained: i32,
    pub cards_discarded: u32,
    /// Card drawn by a thaw effect.
    pub drew: Option<CardId>,
    /// Human-readable effect descriptions for the caller's log.
    pub notes: SmallVec<[String; 4]>,
}

/// Resolve `card` relative to the card spec and an optional explicit
/// target request. Unit-targeting cards resolve to their printed unit;
/// a request may only confirm it.
fn resolved_target(spec_target: CardTarget, requested: Option<Target>) -> Target {
    if spec_target == CardTarget::Dragon || requested == Some(Target::Dragon) {
        Target::Dragon
    } else {
        Target::Rider
    }
}

/// Play `card` from `side`'s hand.
///
/// Legality gating (turn ownership, match over) happens in the public
/// API. Rejection performs no mutation.
pub fn execute_card(
    game: &mut Match,
    side: Side,
    card: CardId,
    requested: Option<Target>,
) -> Result<CardOutcome, ActionError> {
    let position = game
        .side(side)
        .hand_position(card)
        .ok_or(ActionError::CardNotInHand)?;

    if !can_play_card(game.side(side), card) {
        return Err(ActionError::CardBlocked);
    }

    let spec = card.spec();
    let (player, opponent, rng) = game.parts_mut(side);

    let cost = card_cost(player, card);
    player.energy -= cost;

    let mut outcome = CardOutcome {
        cost_paid: cost,
        ..CardOutcome::default()
    };

    // Morrik refunds 1 energy on shield cards while healthy.
    if player.rider.archetype == RiderArchetype::Morrik
        && spec.effect == EffectKind::Shield
        && !player.rider.is_wounded()
    {
        player.energy += 1;
        outcome.rebate = 1;
        outcome.notes.push("shield card rebate".into());
    }

    if player.dragon_frozen {
        player.cards_played_while_frozen += 1;
    }

    player.discard_from_hand(position);

    match spec.effect {
        EffectKind::Damage => {
            let target = resolved_target(spec.target, requested);
            let result = match target {
                Target::Dragon => damage_dragon(opponent, Some(&mut *player), spec.value),
                Target::Rider => damage_rider(opponent, spec.value),
            };
            outcome.total_damage = result.hp_damage;
            outcome.damage = Some(result);
            outcome.damage_target = Some(spec.target);
        }
        EffectKind::Burn => {
            let target = resolved_target(spec.target, requested);
            let result = match target {
                Target::Dragon => damage_dragon(opponent, Some(&mut *player), spec.value),
                Target::Rider => damage_rider(opponent, spec.value),
            };
            opponent.apply_burn(target, spec.secondary_value);
            outcome.total_damage = result.hp_damage;
            outcome.damage = Some(result);
            outcome.damage_target = Some(spec.target);
            outcome.burn_applied = spec.secondary_value;
        }
        EffectKind::Freeze => {
            let target = resolved_target(spec.target, requested);
            let landed = opponent.apply_freeze(target);
            outcome.froze_target = Some(landed);
            if !landed {
                outcome.notes.push(format!("{target} was immune to freeze"));
            }
        }
        EffectKind::Shield => {
            outcome.shields_gained = add_shields(player, spec.value);
        }
        EffectKind::Heal => {
            outcome.healing = match spec.target {
                CardTarget::Dragon => heal_dragon(player, spec.value),
                _ => heal_rider(player, spec.value),
            };
        }
        EffectKind::Energy => {
            player.energy += spec.value;
        }
        EffectKind::Drain => {
            let drained = spec.value.min(opponent.energy);
            opponent.energy -= drained;
            outcome.energy_drained = drained;
        }
        EffectKind::Discard => {
            let count = (spec.value as usize).min(opponent.hand.len());
            for _ in 0..count {
                let pick = rng.gen_range_usize(0..opponent.hand.len());
                let lost = opponent.discard_from_hand(pick);
                outcome.notes.push(format!("opponent discarded {lost}"));
            }
            outcome.cards_discarded = count as u32;
        }
        EffectKind::Chain | EffectKind::Dual => {
            let primary = damage_dragon(opponent, Some(&mut *player), spec.value);
            let secondary = damage_rider(opponent, spec.secondary_value);
            outcome.total_damage = primary.hp_damage + secondary.hp_damage;
            outcome.damage = Some(primary);
            outcome.secondary_damage = Some(secondary);
            outcome.damage_target = Some(CardTarget::Both);
        }
        EffectKind::Cripple => {
            let result = damage_rider(opponent, spec.value);
            opponent.rider.force_wounded = true;
            outcome.total_damage = result.hp_damage;
            outcome.damage = Some(result);
            outcome.damage_target = Some(CardTarget::Rider);
            outcome.notes.push("rider forced wounded".into());
        }
        EffectKind::Thaw => {
            if player.dragon_frozen {
                player.clear_freeze(Target::Dragon);
                outcome.notes.push("thawed dragon".into());
            } else if player.rider_frozen {
                player.clear_freeze(Target::Rider);
                outcome.notes.push("thawed rider".into());
            }
            outcome.drew = player.draw();
        }
        EffectKind::Firebreak => {
            let cleared = player.dragon_burn + player.rider_burn;
            player.dragon_burn = 0;
            player.rider_burn = 0;
            outcome.notes.push(format!("cleared {cleared} burn"));
        }
        EffectKind::Strip => {
            let removed = opponent.dragon.shields;
            opponent.dragon.shields = 0;
            outcome.notes.push(format!("stripped {removed} shields"));
        }
        EffectKind::EnergyShield => {
            opponent.grant_freeze_immunity(Target::Dragon);
            outcome.notes.push("enemy dragon freeze-proofed".into());
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_pool, CardIndex, DragonArchetype};
    use crate::state::{Loadout, MatchId, MatchPhase, TurnPhase};

    fn loadout(rider: RiderArchetype, dragon: DragonArchetype) -> Loadout {
        let pool = standard_pool();
        Loadout {
            rider,
            dragon,
            deck: pool[..20].to_vec(),
        }
    }

    fn duel(rider_a: RiderArchetype) -> Match {
        let mut game = Match::new(
            MatchId(0),
            &loadout(rider_a, DragonArchetype::Emberfang),
            &loadout(RiderArchetype::Talia, DragonArchetype::Cryowyrm),
            11,
        );
        game.phase = MatchPhase::Play;
        game.turn_phase = TurnPhase::Action;
        game.side_mut(Side::A).energy = 10;
        game.side_mut(Side::B).energy = 10;
        game
    }

    fn give(game: &mut Match, side: Side, name: &str) -> CardId {
        let card = CardId::new(CardIndex::new().lookup(name).unwrap(), 0);
        game.side_mut(side).hand.push(card);
        card
    }

    #[test]
    fn test_damage_card_hits_printed_target() {
        let mut game = duel(RiderArchetype::Talia);
        let strike = give(&mut game, Side::A, "Strike");

        let outcome = execute_card(&mut game, Side::A, strike, None).unwrap();

        assert_eq!(outcome.cost_paid, 1);
        assert_eq!(outcome.total_damage, 2);
        assert_eq!(game.side(Side::B).dragon.hp, 28);
        assert_eq!(game.side(Side::A).energy, 9);
        // Card moved hand -> discard.
        assert!(game.side(Side::A).hand_position(strike).is_none());
        assert_eq!(game.side(Side::A).discard.last(), Some(&strike));
    }

    #[test]
    fn test_card_not_in_hand() {
        let mut game = duel(RiderArchetype::Talia);
        let strike = CardId::new(CardIndex::new().lookup("Strike").unwrap(), 3);

        assert_eq!(
            execute_card(&mut game, Side::A, strike, None),
            Err(ActionError::CardNotInHand)
        );
    }

    #[test]
    fn test_unaffordable_card_rejected_without_mutation() {
        let mut game = duel(RiderArchetype::Talia);
        let blow = give(&mut game, Side::A, "Heavy Blow");
        game.side_mut(Side::A).energy = 2;

        assert_eq!(
            execute_card(&mut game, Side::A, blow, None),
            Err(ActionError::CardBlocked)
        );
        assert_eq!(game.side(Side::A).energy, 2);
        assert!(game.side(Side::A).hand_position(blow).is_some());
    }

    #[test]
    fn test_burn_card_deals_and_stacks() {
        let mut game = duel(RiderArchetype::Talia);
        let hit = give(&mut game, Side::A, "Burning Hit");

        let outcome = execute_card(&mut game, Side::A, hit, None).unwrap();
        assert_eq!(outcome.total_damage, 1);
        assert_eq!(outcome.burn_applied, 1);
        assert_eq!(game.side(Side::B).dragon_burn, 1);
    }

    #[test]
    fn test_chain_bolt_splits_damage() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::B).rider.shields = 0;
        let bolt = give(&mut game, Side::A, "Chain Bolt");

        let outcome = execute_card(&mut game, Side::A, bolt, None).unwrap();
        assert_eq!(outcome.damage.unwrap().hp_damage, 2);
        assert_eq!(outcome.secondary_damage.unwrap().hp_damage, 1);
        assert_eq!(outcome.total_damage, 3);
        assert_eq!(game.side(Side::B).dragon.hp, 28);
        assert_eq!(game.side(Side::B).rider.hp, 17);
    }

    #[test]
    fn test_chain_split_totals_sum_both_hits() {
        // The same split at 3/2: against an unshielded, unreduced
        // defender the reported total is the sum of both HP hits.
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::B).rider.shields = 0;
        let (attacker, defender) = game.pair_mut(Side::A);

        let primary = damage_dragon(defender, Some(&mut *attacker), 3);
        let secondary = damage_rider(defender, 2);

        assert_eq!(primary.hp_damage, 3);
        assert_eq!(secondary.hp_damage, 2);
        assert_eq!(primary.hp_damage + secondary.hp_damage, 5);
        assert_eq!(defender.dragon.hp, 27);
        assert_eq!(defender.rider.hp, 16);
    }

    #[test]
    fn test_cripple_forces_wounded() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::B).rider.shields = 0;
        let blow = give(&mut game, Side::A, "Crippling Blow");

        execute_card(&mut game, Side::A, blow, None).unwrap();
        let rider = &game.side(Side::B).rider;
        assert_eq!(rider.hp, 16);
        // 16 > Talia's threshold of 13, wounded only by force.
        assert!(rider.is_wounded());
    }

    #[test]
    fn test_freeze_card_respects_immunity() {
        let mut game = duel(RiderArchetype::Talia);
        let ray = give(&mut game, Side::A, "Freeze Ray");

        let outcome = execute_card(&mut game, Side::A, ray, None).unwrap();
        assert_eq!(outcome.froze_target, Some(true));
        assert!(game.side(Side::B).dragon_frozen);

        game.side_mut(Side::B).clear_freeze(Target::Dragon);
        game.side_mut(Side::B).grant_freeze_immunity(Target::Dragon);

        let ray = give(&mut game, Side::A, "Freeze Ray");
        let outcome = execute_card(&mut game, Side::A, ray, None).unwrap();
        assert_eq!(outcome.froze_target, Some(false));
        assert!(!game.side(Side::B).dragon_frozen);
    }

    #[test]
    fn test_morrik_shield_rebate_gates_on_health() {
        let mut game = duel(RiderArchetype::Morrik);
        let up = give(&mut game, Side::A, "Shield Up");

        let outcome = execute_card(&mut game, Side::A, up, None).unwrap();
        assert_eq!(outcome.rebate, 1);
        assert_eq!(outcome.shields_gained, 2);
        // Paid 2, refunded 1.
        assert_eq!(game.side(Side::A).energy, 9);

        // Wounded: no rebate and halved shields (2 -> 1).
        game.side_mut(Side::A).rider.hp = 14;
        let up = give(&mut game, Side::A, "Shield Up");
        let outcome = execute_card(&mut game, Side::A, up, None).unwrap();
        assert_eq!(outcome.rebate, 0);
        assert_eq!(outcome.shields_gained, 1);
    }

    #[test]
    fn test_drain_floors_at_zero() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::B).energy = 1;
        let drain = give(&mut game, Side::A, "Energy Drain");

        let outcome = execute_card(&mut game, Side::A, drain, None).unwrap();
        assert_eq!(outcome.energy_drained, 1);
        assert_eq!(game.side(Side::B).energy, 0);
    }

    #[test]
    fn test_sabotage_discards_randomly_but_conserves_cards() {
        let mut game = duel(RiderArchetype::Talia);
        for _ in 0..4 {
            game.side_mut(Side::B).draw();
        }
        let sabotage = give(&mut game, Side::A, "Sabotage");

        let before = game.side(Side::B).hand.len();
        let outcome = execute_card(&mut game, Side::A, sabotage, None).unwrap();

        assert_eq!(outcome.cards_discarded, 2);
        assert_eq!(game.side(Side::B).hand.len(), before - 2);
        assert_eq!(game.side(Side::B).discard.len(), 2);
    }

    #[test]
    fn test_thaw_clears_own_freeze_and_draws() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::A).dragon_frozen = true;
        let thaw = give(&mut game, Side::A, "Thaw");

        let outcome = execute_card(&mut game, Side::A, thaw, None).unwrap();
        assert!(!game.side(Side::A).dragon_frozen);
        assert!(outcome.drew.is_some());
    }

    #[test]
    fn test_frozen_dragon_one_card_cap() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::A).dragon_frozen = true;
        let first = give(&mut game, Side::A, "Strike");
        let second = give(&mut game, Side::A, "Strike");

        execute_card(&mut game, Side::A, first, None).unwrap();
        assert_eq!(game.side(Side::A).cards_played_while_frozen, 1);
        assert_eq!(
            execute_card(&mut game, Side::A, second, None),
            Err(ActionError::CardBlocked)
        );
    }

    #[test]
    fn test_firebreak_clears_own_burn() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::A).dragon_burn = 2;
        game.side_mut(Side::A).rider_burn = 1;
        let firebreak = give(&mut game, Side::A, "Firebreak");

        execute_card(&mut game, Side::A, firebreak, None).unwrap();
        assert_eq!(game.side(Side::A).dragon_burn, 0);
        assert_eq!(game.side(Side::A).rider_burn, 0);
    }

    #[test]
    fn test_energy_shield_protects_enemy_dragon() {
        let mut game = duel(RiderArchetype::Talia);
        let shield = give(&mut game, Side::A, "Energy Shield");

        execute_card(&mut game, Side::A, shield, None).unwrap();
        assert!(game.side(Side::B).dragon_freeze_immune);
        assert!(!game.side_mut(Side::B).apply_freeze(Target::Dragon));
    }

    #[test]
    fn test_energy_surge() {
        let mut game = duel(RiderArchetype::Talia);
        let surge = give(&mut game, Side::A, "Energy Surge");

        execute_card(&mut game, Side::A, surge, None).unwrap();
        // 10 - 1 cost + 3 gained.
        assert_eq!(game.side(Side::A).energy, 12);
    }

    #[test]
    fn test_heal_cards_cap_at_max() {
        let mut game = duel(RiderArchetype::Talia);
        game.side_mut(Side::A).dragon.hp = 31;
        let heal = give(&mut game, Side::A, "Dragon Heal");

        let outcome = execute_card(&mut game, Side::A, heal, None).unwrap();
        assert_eq!(outcome.healing, 2);
        assert_eq!(game.side(Side::A).dragon.hp, 33);
    }
}
