//! Relay boundary: serializable intents, compact match summaries, and
//! opaque snapshots.
//!
//! A host (UI, bot harness, network relay) speaks to the engine in
//! [`Intent`] values and receives [`IntentOutcome`]s; it never reaches
//! into the resolvers directly. Snapshots round-trip the whole match
//! through bincode, RNG position included, so a restored match
//! continues the same stream.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, DragonArchetype, RiderArchetype};
use crate::core::{ActionError, Side, Target};
use crate::engine::{
    self, cards::CardOutcome, combat::AttackOutcome, phases::TurnRollover,
};
use crate::state::{Match, MatchId, MatchPhase, WinKind};

/// One action request from a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Intent {
    Attack { target: Target },
    PlayCard { card: CardId, target: Option<Target> },
    EndTurn,
}

/// What an accepted intent did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IntentOutcome {
    Attack(AttackOutcome),
    Card(CardOutcome),
    TurnEnded(TurnRollover),
}

/// Apply one intent through the engine's public API.
pub fn apply_intent(
    game: &mut Match,
    side: Side,
    intent: Intent,
) -> Result<IntentOutcome, ActionError> {
    match intent {
        Intent::Attack { target } => {
            engine::attack(game, side, target).map(IntentOutcome::Attack)
        }
        Intent::PlayCard { card, target } => {
            engine::play_card(game, side, card, target).map(IntentOutcome::Card)
        }
        Intent::EndTurn => engine::end_turn(game, side).map(IntentOutcome::TurnEnded),
    }
}

/// Public view of one side: everything a spectator may see. Hand and
/// draw pile are exposed as counts only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSummary {
    pub rider: RiderArchetype,
    pub rider_hp: i32,
    pub rider_shields: i32,
    pub dragon: DragonArchetype,
    pub dragon_hp: i32,
    pub energy: i32,
    pub hand_size: usize,
    pub draw_pile_size: usize,
    pub discard_size: usize,
    pub dragon_frozen: bool,
    pub rider_frozen: bool,
    pub dragon_burn: i32,
    pub rider_burn: i32,
}

/// Compact spectator view of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub phase: MatchPhase,
    pub turn: u32,
    pub active: Side,
    pub winner: Option<Side>,
    pub win_kind: Option<WinKind>,
    pub sides: [SideSummary; 2],
}

impl MatchSummary {
    #[must_use]
    pub fn of(game: &Match) -> Self {
        let summarize = |side: Side| {
            let s = game.side(side);
            SideSummary {
                rider: s.rider.archetype,
                rider_hp: s.rider.hp,
                rider_shields: s.rider.shields,
                dragon: s.dragon.archetype,
                dragon_hp: s.dragon.hp,
                energy: s.energy,
                hand_size: s.hand.len(),
                draw_pile_size: s.draw_pile.len(),
                discard_size: s.discard.len(),
                dragon_frozen: s.dragon_frozen,
                rider_frozen: s.rider_frozen,
                dragon_burn: s.dragon_burn,
                rider_burn: s.rider_burn,
            }
        };

        Self {
            id: game.id,
            phase: game.phase,
            turn: game.turn,
            active: game.active,
            winner: game.winner,
            win_kind: game.win_kind,
            sides: [summarize(Side::A), summarize(Side::B)],
        }
    }
}

/// Serialize the full match, RNG position included.
pub fn snapshot_bytes(game: &Match) -> bincode::Result<Vec<u8>> {
    bincode::serialize(game)
}

/// Restore a match from [`snapshot_bytes`] output.
pub fn restore_snapshot(bytes: &[u8]) -> bincode::Result<Match> {
    bincode::deserialize(bytes)
}
