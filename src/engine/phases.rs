//! Turn-phase state machine: Start -> Action -> End.
//!
//! ## Freeze/Immunity Handshake
//!
//! A frozen unit thaws at its owner's end phase and gains freeze
//! immunity for exactly one cycle: the immunity is cleared when the
//! owner's *next* start phase begins (the opponent's start phase runs
//! in between, where the immunity does its work).
//!
//! ## Burn
//!
//! Burn stacks tick at their owner's start phase, hitting HP directly:
//! no Bronn reduction, no shields. Stacks persist until a firebreak
//! clears them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{CardId, DragonArchetype};
use crate::core::{Side, Target};
use crate::engine::combat::{damage_dragon, DamageResult};
use crate::engine::economy::{income_breakdown, IncomeBreakdown};
use crate::engine::victory::{apply_win, Verdict};
use crate::state::{Match, TurnPhase, HAND_LIMIT};

/// What a start phase did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartReport {
    pub side: Side,
    pub drew: Option<CardId>,
    pub income: IncomeBreakdown,
    /// Burn damage taken by the dragon this tick.
    pub dragon_burn_tick: i32,
    /// Burn damage taken by the rider this tick.
    pub rider_burn_tick: i32,
    /// Voidmaw's energy-advantage strike on the enemy dragon.
    pub ambush: Option<DamageResult>,
    /// Set when burn or the ambush ended the match; the Action phase
    /// was not entered.
    pub verdict: Option<Verdict>,
}

/// What an end phase did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndReport {
    pub side: Side,
    /// Cards discarded down to the hand limit, in discard order.
    pub discarded: SmallVec<[CardId; 2]>,
    /// Units that thawed and received one cycle of freeze immunity.
    pub thawed: SmallVec<[Target; 2]>,
    pub next: Side,
    pub turn: u32,
}

/// A full end-of-turn rollover: the ending side's end phase plus the
/// next side's start phase (skipped when the match ended first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRollover {
    pub end: EndReport,
    pub start: Option<StartReport>,
}

/// Run the active side's start phase.
///
/// Clears the opponent's one-cycle freeze immunity, draws, pays income,
/// ticks burn, fires start-of-turn dragon hooks, resets per-turn flags,
/// and arbitrates wins before opening the Action phase.
pub fn start_phase(game: &mut Match) -> StartReport {
    let side = game.active;
    let (player, opponent) = game.pair_mut(side);

    // The opponent's immunity was granted at their own end phase; this
    // start phase is the cycle boundary where it expires.
    opponent.clear_freeze_immunity();

    let drew = player.draw();

    let income = income_breakdown(player);
    player.energy += income.total();

    // Burn hits HP directly, past reduction and shields.
    let dragon_burn_tick = player.dragon_burn;
    if dragon_burn_tick > 0 {
        player.dragon.hp -= dragon_burn_tick;
    }
    let rider_burn_tick = player.rider_burn;
    if rider_burn_tick > 0 {
        player.rider.hp -= rider_burn_tick;
    }

    let mut ambush = None;
    if player.dragon.archetype == DragonArchetype::Voidmaw && player.energy > opponent.energy {
        ambush = Some(damage_dragon(opponent, Some(&mut *player), 2));
    }

    player.reset_turn_flags();

    let verdict = apply_win(game);
    if verdict.is_none() {
        game.turn_phase = TurnPhase::Action;
    }

    StartReport {
        side,
        drew,
        income,
        dragon_burn_tick,
        rider_burn_tick,
        ambush,
        verdict,
    }
}

/// Run the active side's end phase and rotate.
pub fn end_phase(game: &mut Match) -> EndReport {
    let side = game.active;
    game.turn_phase = TurnPhase::End;

    let player = game.side_mut(side);

    let mut discarded = SmallVec::new();
    while player.hand.len() > HAND_LIMIT {
        let position = player.hand.len() - 1;
        discarded.push(player.discard_from_hand(position));
    }

    let mut thawed = SmallVec::new();
    for target in [Target::Dragon, Target::Rider] {
        if player.frozen(target) {
            player.clear_freeze(target);
            player.grant_freeze_immunity(target);
            thawed.push(target);
        }
    }

    let next = side.opponent();
    game.active = next;
    if next == Side::A {
        game.turn += 1;
    }
    game.turn_phase = TurnPhase::Start;

    EndReport {
        side,
        discarded,
        thawed,
        next,
        turn: game.turn,
    }
}

/// End the active side's turn and start the opponent's, unless the end
/// phase closed the match.
pub fn pass_turn(game: &mut Match) -> TurnRollover {
    let end = end_phase(game);
    let start = if game.is_over() {
        None
    } else {
        Some(start_phase(game))
    };
    TurnRollover { end, start }
}
