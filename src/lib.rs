//! # dragon-duel
//!
//! A deterministic 1v1 turn-based combat engine: two Rider + Dragon pairs
//! fight with energy-gated attacks and a drafted 20-card hand pool, under
//! interacting status effects (burn, freeze, shields) and per-archetype
//! conditional rules (wounded/critical breakpoints, five unique dragon
//! abilities).
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness (deck shuffles, random discards,
//!    AI jitter) flows through a seeded, serializable RNG. Same seed and
//!    same intents produce an identical match.
//!
//! 2. **No ambient state**: the engine operates purely on the [`Match`]
//!    aggregate passed to it. Every mutating operation returns a structured
//!    outcome record; callers own logging, rendering, and persistence.
//!
//! 3. **Closed dispatch**: rider archetypes, dragon archetypes, and card
//!    effects are enums. Adding an archetype is a compile error everywhere
//!    a case is missing.
//!
//! 4. **Illegal intents are values, not panics**: every mutating entry
//!    point rejects without mutation via [`ActionError`]. The AI probes
//!    legality through the same pure predicates the UI uses.
//!
//! ## Modules
//!
//! - `core`: side/target identifiers, deterministic RNG, error type
//! - `catalog`: static rider/dragon/card definitions and deterministic
//!   per-copy card identity
//! - `state`: the `Match` aggregate, card zones, status flags, action log
//! - `engine`: economy, combat resolution, card interpreter, turn phases,
//!   win arbitration, and the public action API
//! - `ai`: heuristic decision engine with difficulty presets
//! - `protocol`: relay-boundary intents and opaque match snapshots

pub mod core;
pub mod catalog;
pub mod state;
pub mod engine;
pub mod ai;
pub mod protocol;

// Re-export commonly used types
pub use crate::core::{ActionError, MatchRng, MatchRngState, Side, Target};

pub use crate::catalog::{
    standard_pool, CardDefId, CardId, CardIndex, CardSpec, CardTarget, DragonArchetype,
    DragonSpec, EffectKind, RiderArchetype, RiderSpec,
};

pub use crate::state::{
    ActionKind, ActionRecord, CombatantState, Dragon, Loadout, Match, MatchId, MatchPhase,
    Rider, TurnPhase, WinKind,
};

pub use crate::engine::{
    attack, create_match, end_turn, play_card,
    combat::{AttackOutcome, DamageResult, FirstStrikeBonus},
    cards::CardOutcome,
    economy::IncomeBreakdown,
    phases::{EndReport, StartReport, TurnRollover},
    victory::Verdict,
};

pub use crate::ai::{AiAction, AiProfile, AiStep, Difficulty, ScoredAction};

pub use crate::protocol::{Intent, IntentOutcome, MatchSummary};
