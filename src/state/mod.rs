//! Match state: the aggregate the engine mutates.
//!
//! ## Structure
//!
//! - [`Match`] is the root aggregate: two [`CombatantState`] sides, the
//!   turn counter, the phase machine position, the winner slot, an
//!   append-only action log, and the match RNG
//! - [`CombatantState`] holds one side's rider, dragon, card zones,
//!   energy, and status flags
//! - [`Rider`] and [`Dragon`] are unit instances; their static stats live
//!   in [`crate::catalog`]
//!
//! The log uses an immutable vector so cloning a match for AI lookahead
//! is O(1) in the log length.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, DragonArchetype, DragonSpec, RiderArchetype, RiderSpec};
use crate::core::{MatchRng, Side, Target};

/// Energy granted to the active side at every turn start, before rider
/// economy modifiers.
pub const BASE_INCOME: i32 = 3;

/// Maximum hand size; excess is discarded at end of turn.
pub const HAND_LIMIT: usize = 5;

/// Cards drawn by each side at match creation.
pub const OPENING_HAND_SIZE: usize = 4;

/// Unique match identifier, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "match-{}", self.0)
    }
}

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Loadouts received, zones not yet dealt.
    Setup,
    /// Hosts that let players pick loadouts interactively park the
    /// match here before dealing; engine-created matches skip it.
    Draft,
    /// Normal play; intents are accepted.
    Play,
    /// A winner has been recorded; the state is read-only.
    Ended,
}

/// Position within the active side's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Upkeep: draw, income, burn ticks, start-of-turn dragon hooks.
    Start,
    /// The active side attacks, plays cards, or passes.
    Action,
    /// Hand-limit discard, thaw, immunity grant, rotation.
    End,
}

/// How the match was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinKind {
    /// The losing side's dragon reached 0 HP.
    DragonKill,
    /// The losing side's rider reached 0 HP.
    RiderKill,
}

/// What a side brings to a match: archetype picks plus a drafted deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Loadout {
    pub rider: RiderArchetype,
    pub dragon: DragonArchetype,
    pub deck: Vec<CardId>,
}

/// A rider unit instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    pub archetype: RiderArchetype,
    pub hp: i32,
    pub shields: i32,
    /// Set by crippling effects; forces the wounded state regardless of
    /// HP until a heal lifts HP above the wounded threshold.
    pub force_wounded: bool,
}

impl Rider {
    #[must_use]
    pub fn new(archetype: RiderArchetype) -> Self {
        Self {
            archetype,
            hp: archetype.spec().max_hp,
            shields: 0,
            force_wounded: false,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &'static RiderSpec {
        self.archetype.spec()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Wounded at or below the archetype threshold, or while crippled.
    #[must_use]
    pub fn is_wounded(&self) -> bool {
        self.force_wounded || self.hp <= self.spec().wounded_threshold
    }

    /// Critical at or below the archetype threshold. Critical implies
    /// wounded.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.hp <= self.spec().critical_threshold
    }
}

/// A dragon unit instance.
///
/// Starting shields from the archetype are transferred to the rider at
/// match setup; the field stays for shield-stripping effects, which zero
/// whatever is here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dragon {
    pub archetype: DragonArchetype,
    pub hp: i32,
    pub shields: i32,
}

impl Dragon {
    #[must_use]
    pub fn new(archetype: DragonArchetype) -> Self {
        Self {
            archetype,
            hp: archetype.spec().max_hp,
            shields: 0,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &'static DragonSpec {
        self.archetype.spec()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// One side of the duel: units, card zones, energy, and status flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombatantState {
    pub rider: Rider,
    pub dragon: Dragon,

    pub hand: Vec<CardId>,
    /// Face-down draw pile; draws pop from the end.
    pub draw_pile: Vec<CardId>,
    pub discard: Vec<CardId>,

    pub energy: i32,

    pub dragon_frozen: bool,
    pub rider_frozen: bool,
    /// One-shot freeze immunity, granted on thaw and by enemy
    /// energy-shield effects. Cleared when the granting window closes.
    pub dragon_freeze_immune: bool,
    pub rider_freeze_immune: bool,

    pub dragon_burn: i32,
    pub rider_burn: i32,

    /// True until this side's dragon attacks this turn. Gates Kael's
    /// first-strike bonus and Emberfang's burn hook.
    pub first_attack_available: bool,
    /// One use per turn of the dragon's burn-on-attack hook.
    pub burn_hook_available: bool,

    /// Cards played this turn while the own dragon was frozen. A side
    /// with a frozen dragon may play at most one card per turn.
    pub cards_played_while_frozen: u32,
}

impl CombatantState {
    /// Build a side from its loadout. The dragon's starting shields are
    /// moved onto the rider.
    #[must_use]
    pub fn new(loadout: &Loadout) -> Self {
        let mut rider = Rider::new(loadout.rider);
        let dragon = Dragon::new(loadout.dragon);
        rider.shields = dragon.spec().shields;

        Self {
            rider,
            dragon,
            hand: Vec::with_capacity(HAND_LIMIT + 2),
            draw_pile: loadout.deck.clone(),
            discard: Vec::new(),
            energy: 0,
            dragon_frozen: false,
            rider_frozen: false,
            dragon_freeze_immune: false,
            rider_freeze_immune: false,
            dragon_burn: 0,
            rider_burn: 0,
            first_attack_available: true,
            burn_hook_available: true,
            cards_played_while_frozen: 0,
        }
    }

    /// Draw one card into hand. Returns the drawn card, or `None` when
    /// the draw pile is empty (no reshuffle; the pool is finite).
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.draw_pile.pop()?;
        self.hand.push(card);
        Some(card)
    }

    /// Position of a card in hand, if present.
    #[must_use]
    pub fn hand_position(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|&held| held == card)
    }

    /// Move the card at `position` from hand to discard.
    pub fn discard_from_hand(&mut self, position: usize) -> CardId {
        let card = self.hand.remove(position);
        self.discard.push(card);
        card
    }

    /// Whether the given unit is frozen.
    #[must_use]
    pub fn frozen(&self, target: Target) -> bool {
        match target {
            Target::Dragon => self.dragon_frozen,
            Target::Rider => self.rider_frozen,
        }
    }

    /// Whether the given unit currently ignores freeze attempts.
    #[must_use]
    pub fn freeze_immune(&self, target: Target) -> bool {
        match target {
            Target::Dragon => self.dragon_freeze_immune,
            Target::Rider => self.rider_freeze_immune,
        }
    }

    /// Burn stacks on the given unit.
    #[must_use]
    pub fn burn(&self, target: Target) -> i32 {
        match target {
            Target::Dragon => self.dragon_burn,
            Target::Rider => self.rider_burn,
        }
    }

    /// Attempt to freeze a unit. Returns `false` when immunity blocked
    /// the attempt; freezing an already-frozen unit is a no-op success.
    pub fn apply_freeze(&mut self, target: Target) -> bool {
        if self.freeze_immune(target) {
            return false;
        }
        match target {
            Target::Dragon => self.dragon_frozen = true,
            Target::Rider => self.rider_frozen = true,
        }
        true
    }

    pub fn clear_freeze(&mut self, target: Target) {
        match target {
            Target::Dragon => self.dragon_frozen = false,
            Target::Rider => self.rider_frozen = false,
        }
    }

    pub fn grant_freeze_immunity(&mut self, target: Target) {
        match target {
            Target::Dragon => self.dragon_freeze_immune = true,
            Target::Rider => self.rider_freeze_immune = true,
        }
    }

    /// Drop freeze immunity on both units.
    pub fn clear_freeze_immunity(&mut self) {
        self.dragon_freeze_immune = false;
        self.rider_freeze_immune = false;
    }

    /// Add burn stacks to a unit.
    pub fn apply_burn(&mut self, target: Target, stacks: i32) {
        match target {
            Target::Dragon => self.dragon_burn += stacks,
            Target::Rider => self.rider_burn += stacks,
        }
    }

    /// Whether any own unit is frozen.
    #[must_use]
    pub fn any_frozen(&self) -> bool {
        self.dragon_frozen || self.rider_frozen
    }

    /// Reset per-turn flags at the start of this side's turn.
    pub fn reset_turn_flags(&mut self) {
        self.first_attack_available = true;
        self.burn_hook_available = true;
        self.cards_played_while_frozen = 0;
    }
}

/// What kind of action a log record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A dragon attack and the total HP damage it dealt.
    Attack { target: Target, damage: i32 },
    /// A card play.
    PlayCard { card: CardId },
    /// The side ended its turn.
    Pass,
}

/// One entry in the match's append-only action log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub turn: u32,
    pub side: Side,
    pub kind: ActionKind,
}

/// The root match aggregate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub phase: MatchPhase,

    /// 1-based full-round counter; increments when the turn rotates back
    /// to side A.
    pub turn: u32,
    pub active: Side,
    pub turn_phase: TurnPhase,

    pub sides: [CombatantState; 2],

    pub winner: Option<Side>,
    pub win_kind: Option<WinKind>,

    pub log: Vector<ActionRecord>,
    pub rng: MatchRng,
}

impl Match {
    /// Build a match in [`MatchPhase::Setup`]. Decks are dealt and the
    /// first turn started by [`crate::engine::create_match`].
    #[must_use]
    pub fn new(id: MatchId, a: &Loadout, b: &Loadout, seed: u64) -> Self {
        Self {
            id,
            phase: MatchPhase::Setup,
            turn: 1,
            active: Side::A,
            turn_phase: TurnPhase::Start,
            sides: [CombatantState::new(a), CombatantState::new(b)],
            winner: None,
            win_kind: None,
            log: Vector::new(),
            rng: MatchRng::new(seed),
        }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &CombatantState {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut CombatantState {
        &mut self.sides[side.index()]
    }

    /// Disjoint mutable borrows of `side` and its opponent.
    pub fn pair_mut(&mut self, side: Side) -> (&mut CombatantState, &mut CombatantState) {
        let [a, b] = &mut self.sides;
        match side {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }

    /// Like [`Match::pair_mut`], plus the match RNG for effects that
    /// need randomness while both sides are borrowed.
    pub fn parts_mut(
        &mut self,
        side: Side,
    ) -> (&mut CombatantState, &mut CombatantState, &mut MatchRng) {
        let [a, b] = &mut self.sides;
        let (own, other) = match side {
            Side::A => (a, b),
            Side::B => (b, a),
        };
        (own, other, &mut self.rng)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Append an entry to the action log.
    pub fn push_record(&mut self, side: Side, kind: ActionKind) {
        self.log.push_back(ActionRecord {
            turn: self.turn,
            side,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_pool;

    fn test_loadout() -> Loadout {
        let pool = standard_pool();
        Loadout {
            rider: RiderArchetype::Talia,
            dragon: DragonArchetype::Emberfang,
            deck: pool[..20].to_vec(),
        }
    }

    #[test]
    fn test_setup_transfers_dragon_shields_to_rider() {
        let side = CombatantState::new(&test_loadout());
        assert_eq!(side.rider.shields, 3);
        assert_eq!(side.dragon.shields, 0);
    }

    #[test]
    fn test_draw_pops_from_pile_end() {
        let mut side = CombatantState::new(&test_loadout());
        let top = *side.draw_pile.last().unwrap();

        let drawn = side.draw().unwrap();
        assert_eq!(drawn, top);
        assert_eq!(side.hand, vec![top]);
        assert_eq!(side.draw_pile.len(), 19);
    }

    #[test]
    fn test_draw_from_empty_pile() {
        let mut side = CombatantState::new(&test_loadout());
        side.draw_pile.clear();
        assert!(side.draw().is_none());
        assert!(side.hand.is_empty());
    }

    #[test]
    fn test_freeze_respects_immunity() {
        let mut side = CombatantState::new(&test_loadout());

        assert!(side.apply_freeze(Target::Dragon));
        assert!(side.frozen(Target::Dragon));

        side.clear_freeze(Target::Dragon);
        side.grant_freeze_immunity(Target::Dragon);

        assert!(!side.apply_freeze(Target::Dragon));
        assert!(!side.frozen(Target::Dragon));

        // Immunity is per-unit.
        assert!(side.apply_freeze(Target::Rider));
    }

    #[test]
    fn test_wounded_and_critical_breakpoints() {
        let mut rider = Rider::new(RiderArchetype::Talia);
        assert!(!rider.is_wounded());

        rider.hp = 13;
        assert!(rider.is_wounded());
        assert!(!rider.is_critical());

        rider.hp = 7;
        assert!(rider.is_wounded());
        assert!(rider.is_critical());
    }

    #[test]
    fn test_force_wounded_overrides_hp() {
        let mut rider = Rider::new(RiderArchetype::Bronn);
        assert!(!rider.is_wounded());
        rider.force_wounded = true;
        assert!(rider.is_wounded());
        assert!(!rider.is_critical());
    }

    #[test]
    fn test_match_clone_is_independent() {
        let loadout = test_loadout();
        let mut game = Match::new(MatchId(1), &loadout, &loadout, 42);
        let snapshot = game.clone();

        game.push_record(Side::A, ActionKind::Pass);
        game.side_mut(Side::A).energy = 99;

        assert!(snapshot.log.is_empty());
        assert_eq!(snapshot.side(Side::A).energy, 0);
    }

    #[test]
    fn test_match_phase_wire_names() {
        for (phase, name) in [
            (MatchPhase::Setup, "\"setup\""),
            (MatchPhase::Draft, "\"draft\""),
            (MatchPhase::Play, "\"play\""),
            (MatchPhase::Ended, "\"ended\""),
        ] {
            assert_eq!(serde_json::to_string(&phase).unwrap(), name);
            assert_eq!(serde_json::from_str::<MatchPhase>(name).unwrap(), phase);
        }
    }
}
