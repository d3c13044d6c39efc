//! Shared helpers for integration tests.
#![allow(dead_code)]

use dragon_duel::{
    create_match, standard_pool, DragonArchetype, Loadout, Match, MatchId, RiderArchetype,
};

/// A 20-card deck cut from the front of the shared pool.
pub fn front_deck() -> Vec<dragon_duel::CardId> {
    standard_pool()[..20].to_vec()
}

/// A 20-card deck cut from the back of the shared pool, disjoint from
/// [`front_deck`].
pub fn back_deck() -> Vec<dragon_duel::CardId> {
    standard_pool()[24..44].to_vec()
}

pub fn loadout(rider: RiderArchetype, dragon: DragonArchetype, deck: Vec<dragon_duel::CardId>) -> Loadout {
    Loadout { rider, dragon, deck }
}

/// Talia/Emberfang vs Kael/Cryowyrm, the pairing most scenarios use.
pub fn standard_match(seed: u64) -> Match {
    let a = loadout(RiderArchetype::Talia, DragonArchetype::Emberfang, front_deck());
    let b = loadout(RiderArchetype::Kael, DragonArchetype::Cryowyrm, back_deck());
    create_match(MatchId(1), &a, &b, seed)
}

/// A match with chosen archetypes and disjoint decks.
pub fn match_with(
    a: (RiderArchetype, DragonArchetype),
    b: (RiderArchetype, DragonArchetype),
    seed: u64,
) -> Match {
    let a = loadout(a.0, a.1, front_deck());
    let b = loadout(b.0, b.1, back_deck());
    create_match(MatchId(1), &a, &b, seed)
}
