//! Static catalogs of rider archetypes, dragon archetypes, and cards.
//!
//! These are configuration, not per-match mutable state. A drafting or
//! collection layer picks from these catalogs; the engine consumes the
//! resulting loadouts at match creation.
//!
//! Card identity is deterministic: a [`CardId`] is a catalog definition
//! index plus a copy index, so independent participants reconstruct
//! identical ids from the shared catalog without exchanging card objects.

mod cards;
mod dragons;
mod riders;

pub use cards::{
    standard_pool, CardDefId, CardId, CardIndex, CardSpec, CardTarget, EffectKind, CATALOG,
    DECK_SIZE, POOL_SIZE,
};
pub use dragons::{DragonArchetype, DragonSpec};
pub use riders::{RiderArchetype, RiderSpec};
