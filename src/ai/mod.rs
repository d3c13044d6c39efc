//! Heuristic AI driver.
//!
//! The AI plays through the same public action API as any other caller:
//! it enumerates legal actions with the engine's own predicates, scores
//! them with the pure heuristics in [`scoring`], perturbs the scores
//! with difficulty jitter drawn from the match RNG, and greedily
//! executes the best action until nothing beats passing.
//!
//! Stateless and memoryless across turns; a given seed and difficulty
//! replay identically.

mod presets;
mod scoring;

pub use presets::{AiProfile, Difficulty};
pub use scoring::{score_action, AiAction, ScoredAction};

use crate::core::{Side, Target};
use crate::engine;
use crate::state::Match;

/// Hard cap on actions per AI turn; a safety net against pathological
/// loops, not a tuning knob.
pub const MAX_ACTIONS_PER_TURN: usize = 20;

/// One AI decision: every candidate with its jittered score, sorted
/// best-first, and the action taken (`None` when the AI stopped).
#[derive(Clone, Debug)]
pub struct AiStep {
    pub scored: Vec<ScoredAction>,
    pub executed: Option<AiAction>,
}

/// Enumerate every legal action for `side`, pass included.
#[must_use]
pub fn generate_actions(game: &Match, side: Side) -> Vec<AiAction> {
    let player = game.side(side);
    let mut actions = vec![AiAction::Pass];

    if engine::economy::can_attack(player) {
        actions.push(AiAction::AttackDragon);
        actions.push(AiAction::AttackRider);
    }

    for &card in &player.hand {
        if engine::economy::can_play_card(player, card) {
            let target = if engine::economy::needs_target(card) {
                [Target::Dragon, Target::Rider]
                    .into_iter()
                    .find(|&t| engine::economy::valid_target(card, t))
            } else {
                None
            };
            actions.push(AiAction::PlayCard { card, target });
        }
    }

    actions
}

/// Score, pick, and execute one action for `side`.
///
/// Stops (returns `executed: None`) when the match is over, when only
/// passing is legal, or when nothing scores at least 0.
pub fn take_action(game: &mut Match, side: Side, profile: &AiProfile) -> AiStep {
    if game.is_over() {
        return AiStep {
            scored: Vec::new(),
            executed: None,
        };
    }

    let actions = generate_actions(game, side);
    if actions.len() == 1 {
        return AiStep {
            scored: Vec::new(),
            executed: None,
        };
    }

    let mut scored: Vec<ScoredAction> = {
        let player = game.side(side);
        let opponent = game.side(side.opponent());
        actions
            .into_iter()
            .map(|action| ScoredAction {
                action,
                score: score_action(player, opponent, action, profile),
            })
            .collect()
    };

    if profile.randomness > 0.0 {
        for entry in &mut scored {
            entry.score += (game.rng.unit() - 0.5) * profile.randomness * 2.0;
        }
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let best = scored[0];
    if best.action == AiAction::Pass || best.score < 0.0 {
        return AiStep {
            scored,
            executed: None,
        };
    }

    let result = match best.action {
        AiAction::AttackDragon => engine::attack(game, side, Target::Dragon).map(|_| ()),
        AiAction::AttackRider => engine::attack(game, side, Target::Rider).map(|_| ()),
        AiAction::PlayCard { card, target } => {
            engine::play_card(game, side, card, target).map(|_| ())
        }
        AiAction::Pass => unreachable!(),
    };

    AiStep {
        scored,
        executed: result.ok().map(|()| best.action),
    }
}

/// Play `side`'s whole Action phase and end the turn.
///
/// Returns the decision trail. The turn is ended (and the opponent's
/// start phase run) unless the match finished first.
pub fn run_full_turn(game: &mut Match, side: Side, difficulty: Difficulty) -> Vec<AiStep> {
    let profile = difficulty.profile_for(game.side(side).dragon.archetype);

    let mut steps = Vec::new();
    while !game.is_over() && steps.len() < MAX_ACTIONS_PER_TURN {
        let step = take_action(game, side, &profile);
        let done = step.executed.is_none();
        steps.push(step);
        if done {
            break;
        }
    }

    if !game.is_over() {
        let _ = engine::end_turn(game, side);
    }

    steps
}
