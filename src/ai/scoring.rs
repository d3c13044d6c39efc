//! Heuristic action scoring.
//!
//! Pure functions over the two combatant states: no randomness, no
//! mutation, no memory across turns. The weights are hand-tuned
//! constants; difficulty jitter is layered on by the driver so the same
//! position always scores the same here.

use serde::{Deserialize, Serialize};

use crate::ai::presets::AiProfile;
use crate::catalog::{CardId, CardTarget, DragonArchetype, EffectKind, RiderArchetype};
use crate::core::Target;
use crate::state::CombatantState;

/// A candidate AI action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiAction {
    AttackDragon,
    AttackRider,
    PlayCard { card: CardId, target: Option<Target> },
    Pass,
}

/// An action with its heuristic score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredAction {
    pub action: AiAction,
    pub score: f32,
}

/// Score one candidate action for `player` against `opponent`.
///
/// Passing scores a flat -10 so anything worth doing outranks it.
#[must_use]
pub fn score_action(
    player: &CombatantState,
    opponent: &CombatantState,
    action: AiAction,
    profile: &AiProfile,
) -> f32 {
    match action {
        AiAction::Pass => -10.0,
        AiAction::AttackDragon => score_attack_dragon(player, opponent, profile),
        AiAction::AttackRider => score_attack_rider(player, opponent, profile),
        AiAction::PlayCard { card, target } => score_card(player, opponent, card, target, profile),
    }
}

/// Damage the next attack is expected to deal, including Kael's
/// first-strike bonus.
fn expected_damage(player: &CombatantState) -> i32 {
    let mut damage = player.dragon.spec().attack_damage;
    if player.rider.archetype == RiderArchetype::Kael
        && player.first_attack_available
        && !player.rider.is_critical()
    {
        damage += if player.rider.is_wounded() { 1 } else { 2 };
    }
    damage
}

fn score_attack_dragon(player: &CombatantState, opponent: &CombatantState, profile: &AiProfile) -> f32 {
    let mut score = 50.0;
    let damage = expected_damage(player);

    let hp_pct = opponent.dragon.hp as f32 / opponent.dragon.spec().max_hp as f32;
    if hp_pct < 0.3 {
        score += 25.0;
    } else if hp_pct < 0.5 {
        score += 10.0;
    }

    if opponent.rider.shields == 0 {
        score += 8.0;
    }

    if opponent.dragon.hp <= damage {
        score += 50.0;
    }

    match player.dragon.archetype {
        DragonArchetype::Emberfang if player.first_attack_available => score += 5.0,
        DragonArchetype::Voltwing => score += 8.0,
        DragonArchetype::Voidmaw => {
            score += 10.0;
            if player.energy >= opponent.energy {
                score += 5.0;
            }
        }
        _ => {}
    }

    score *= 0.5 + profile.aggression * 0.5;
    score *= 1.2 - profile.rider_focus * 0.4;
    score
}

fn score_attack_rider(player: &CombatantState, opponent: &CombatantState, profile: &AiProfile) -> f32 {
    let mut score = 45.0;
    let damage = expected_damage(player);

    let rider = &opponent.rider;
    let hp_pct = rider.hp as f32 / rider.spec().max_hp as f32;
    if hp_pct < 0.3 {
        score += 30.0;
    } else if hp_pct < 0.5 {
        score += 15.0;
    }

    if rider.hp <= damage {
        score += 60.0;
    }

    // Pushing the rider over the wounded breakpoint is worth extra.
    if rider.hp > rider.spec().wounded_threshold
        && rider.hp - damage <= rider.spec().wounded_threshold
    {
        score += 12.0;
    }

    match player.dragon.archetype {
        DragonArchetype::Voltwing => score += 8.0,
        DragonArchetype::Voidmaw => score += 10.0,
        _ => {}
    }

    score *= 0.5 + profile.aggression * 0.5;
    score *= 0.8 + profile.rider_focus * 0.4;
    score
}

fn score_card(
    player: &CombatantState,
    opponent: &CombatantState,
    card: CardId,
    target: Option<Target>,
    profile: &AiProfile,
) -> f32 {
    let spec = card.spec();

    let mut score = match spec.effect {
        EffectKind::Damage => score_damage_card(card, opponent, profile),
        EffectKind::Burn => score_burn_card(opponent),
        EffectKind::Freeze => score_freeze_card(card, player, opponent, target),
        EffectKind::Shield => score_shield_card(player, profile),
        EffectKind::Heal => score_heal_card(card, player, profile),
        EffectKind::Energy => 40.0,
        EffectKind::Drain => score_drain_card(player, opponent),
        EffectKind::Chain | EffectKind::Dual => score_multi_target_card(card, opponent),
        EffectKind::Cripple => score_cripple_card(opponent),
        EffectKind::Thaw => score_thaw_card(player),
        EffectKind::Firebreak => score_firebreak_card(player),
        EffectKind::Strip => score_strip_card(opponent),
        EffectKind::Discard => 35.0,
        EffectKind::EnergyShield => 25.0,
    };

    // Value-per-energy efficiency term.
    if spec.value > 0 && spec.cost > 0 {
        score += spec.value as f32 / spec.cost as f32 * 5.0;
    }

    score
}

fn score_damage_card(card: CardId, opponent: &CombatantState, profile: &AiProfile) -> f32 {
    let spec = card.spec();
    let mut score = 40.0 + spec.value as f32 * 5.0;

    match spec.target {
        CardTarget::Dragon => {
            if opponent.dragon.hp <= spec.value {
                score += 40.0;
            }
            if (opponent.dragon.hp as f32) < opponent.dragon.spec().max_hp as f32 * 0.3 {
                score += 15.0;
            }
            score *= 1.2 - profile.rider_focus * 0.4;
        }
        CardTarget::Rider => {
            let rider = &opponent.rider;
            if rider.hp <= spec.value {
                score += 50.0;
            }
            if (rider.hp as f32) < rider.spec().max_hp as f32 * 0.3 {
                score += 20.0;
            }
            if rider.hp > rider.spec().wounded_threshold
                && rider.hp - spec.value <= rider.spec().wounded_threshold
            {
                score += 10.0;
            }
            score *= 0.8 + profile.rider_focus * 0.4;
        }
        _ => {}
    }

    score
}

fn score_burn_card(opponent: &CombatantState) -> f32 {
    let mut score = 45.0;
    // Burn pays off over many ticks; best against a healthy dragon.
    if opponent.dragon.hp as f32 > opponent.dragon.spec().max_hp as f32 * 0.7 {
        score += 10.0;
    }
    score
}

fn score_freeze_card(
    card: CardId,
    player: &CombatantState,
    opponent: &CombatantState,
    target: Option<Target>,
) -> f32 {
    let effective = match (target, card.spec().target) {
        (Some(unit), _) => unit,
        (None, CardTarget::Dragon) => Target::Dragon,
        _ => Target::Rider,
    };

    // Wasted on an already-frozen or immune unit.
    if opponent.frozen(effective) || opponent.freeze_immune(effective) {
        return 5.0;
    }

    let mut score = 45.0;
    if player.rider.archetype == RiderArchetype::Lyra && !player.rider.is_wounded() {
        score += 15.0;
    }
    score
}

fn score_shield_card(player: &CombatantState, profile: &AiProfile) -> f32 {
    let mut score = 30.0;
    if (player.dragon.hp as f32) < player.dragon.spec().max_hp as f32 * 0.5 {
        score += 15.0;
    }
    if player.rider.archetype == RiderArchetype::Morrik {
        score += 15.0;
    }
    score * (1.5 - profile.aggression * 0.5)
}

fn score_heal_card(card: CardId, player: &CombatantState, profile: &AiProfile) -> f32 {
    let spec = card.spec();
    let heals_dragon = spec.target == CardTarget::Dragon;
    let (hp, max_hp) = if heals_dragon {
        (player.dragon.hp, player.dragon.spec().max_hp)
    } else {
        (player.rider.hp, player.rider.spec().max_hp)
    };
    let hp_pct = hp as f32 / max_hp as f32;

    // Near full: mostly wasted.
    if hp_pct > 0.8 {
        return 10.0;
    }

    let mut score = 25.0;
    if hp_pct < 0.3 {
        score += 30.0;
    } else if hp_pct < 0.5 {
        score += 15.0;
    }

    // Lifting the rider back over the wounded breakpoint restores the
    // passive.
    if !heals_dragon
        && player.rider.is_wounded()
        && !player.rider.force_wounded
        && player.rider.hp + spec.value > player.rider.spec().wounded_threshold
    {
        score += 15.0;
    }

    score * (1.5 - profile.aggression * 0.5)
}

fn score_thaw_card(player: &CombatantState) -> f32 {
    if player.any_frozen() {
        60.0
    } else {
        15.0
    }
}

fn score_firebreak_card(player: &CombatantState) -> f32 {
    let total_burn = player.dragon_burn + player.rider_burn;
    if total_burn == 0 {
        return 5.0;
    }
    20.0 + total_burn as f32 * 12.0
}

fn score_strip_card(opponent: &CombatantState) -> f32 {
    if opponent.rider.shields == 0 {
        return 5.0;
    }
    20.0 + opponent.rider.shields as f32 * 10.0
}

fn score_drain_card(player: &CombatantState, opponent: &CombatantState) -> f32 {
    let mut score = 35.0;
    if player.dragon.archetype == DragonArchetype::Voidmaw {
        score += 20.0;
    }
    if opponent.energy > 5 {
        score += 10.0;
    }
    score
}

fn score_cripple_card(opponent: &CombatantState) -> f32 {
    // Forcing the wounded state is worth far more while it still flips
    // something.
    if opponent.rider.is_wounded() {
        35.0
    } else {
        55.0
    }
}

fn score_multi_target_card(card: CardId, opponent: &CombatantState) -> f32 {
    let spec = card.spec();
    let mut score = 45.0;
    if opponent.dragon.hp <= spec.value {
        score += 30.0;
    }
    if opponent.rider.hp <= spec.secondary_value {
        score += 40.0;
    }
    score
}
