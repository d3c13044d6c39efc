//! Rules engine: match creation and the public action API.
//!
//! The submodules hold the machinery; this module owns the gate every
//! intent passes through (turn ownership, match liveness) and the
//! bookkeeping shared by all actions: the action log and win
//! arbitration after every mutation.

pub mod cards;
pub mod combat;
pub mod economy;
pub mod phases;
pub mod victory;

use crate::catalog::CardId;
use crate::core::{ActionError, Side, Target};
use crate::state::{
    ActionKind, Loadout, Match, MatchId, MatchPhase, TurnPhase, OPENING_HAND_SIZE,
};

use cards::CardOutcome;
use combat::AttackOutcome;
use phases::TurnRollover;

/// Create a match from two loadouts: shuffle both decks, deal opening
/// hands, and run side A's first start phase.
#[must_use]
pub fn create_match(id: MatchId, a: &Loadout, b: &Loadout, seed: u64) -> Match {
    let mut game = Match::new(id, a, b, seed);

    for side in Side::BOTH {
        let (player, _, rng) = game.parts_mut(side);
        rng.shuffle(&mut player.draw_pile);
    }

    for side in Side::BOTH {
        let player = game.side_mut(side);
        for _ in 0..OPENING_HAND_SIZE {
            player.draw();
        }
    }

    game.phase = MatchPhase::Play;
    phases::start_phase(&mut game);
    game
}

/// Shared legality gate: the match must be live and `side` must hold
/// the Action phase.
fn gate(game: &Match, side: Side) -> Result<(), ActionError> {
    if game.is_over() || game.phase != MatchPhase::Play {
        return Err(ActionError::MatchOver);
    }
    if side != game.active || game.turn_phase != TurnPhase::Action {
        return Err(ActionError::NotYourTurn);
    }
    Ok(())
}

/// Attack the enemy `target` with `side`'s dragon.
pub fn attack(game: &mut Match, side: Side, target: Target) -> Result<AttackOutcome, ActionError> {
    gate(game, side)?;
    let outcome = combat::execute_attack(game, side, target)?;

    let damage =
        outcome.damage.hp_damage + outcome.splash.map_or(0, |splash| splash.hp_damage);
    game.push_record(side, ActionKind::Attack { target, damage });

    victory::apply_win(game);
    Ok(outcome)
}

/// Play `card` from `side`'s hand, with an optional explicit target for
/// unit-targeting cards.
pub fn play_card(
    game: &mut Match,
    side: Side,
    card: CardId,
    target: Option<Target>,
) -> Result<CardOutcome, ActionError> {
    gate(game, side)?;
    let outcome = cards::execute_card(game, side, card, target)?;

    game.push_record(side, ActionKind::PlayCard { card });

    victory::apply_win(game);
    Ok(outcome)
}

/// End `side`'s turn: end phase, rotation, and the opponent's start
/// phase in one step.
pub fn end_turn(game: &mut Match, side: Side) -> Result<TurnRollover, ActionError> {
    gate(game, side)?;
    game.push_record(side, ActionKind::Pass);
    Ok(phases::pass_turn(game))
}
