//! Snapshot and intent behavior across the relay boundary.

mod common;

use common::standard_match;
use dragon_duel::ai::run_full_turn;
use dragon_duel::protocol::{apply_intent, restore_snapshot, snapshot_bytes};
use dragon_duel::{Difficulty, Intent, IntentOutcome, MatchSummary, Side, Target};

#[test]
fn test_snapshot_round_trip_preserves_play() {
    let mut game = standard_match(42);
    apply_intent(&mut game, Side::A, Intent::Attack { target: Target::Dragon }).unwrap();

    let bytes = snapshot_bytes(&game).unwrap();
    let mut restored = restore_snapshot(&bytes).unwrap();

    assert_eq!(restored.turn, game.turn);
    assert_eq!(restored.side(Side::A).hand, game.side(Side::A).hand);
    assert_eq!(restored.side(Side::B).dragon.hp, game.side(Side::B).dragon.hp);
    assert_eq!(restored.log, game.log);

    // Play continues identically on both copies.
    let a = apply_intent(&mut game, Side::A, Intent::EndTurn).unwrap();
    let b = apply_intent(&mut restored, Side::A, Intent::EndTurn).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_snapshot_preserves_ai_randomness() {
    let mut game = standard_match(7);
    run_full_turn(&mut game, Side::A, Difficulty::Easy);

    let bytes = snapshot_bytes(&game).unwrap();
    let mut restored = restore_snapshot(&bytes).unwrap();

    // Easy difficulty draws jitter from the match RNG; a restored match
    // must make the same noisy decisions.
    run_full_turn(&mut game, Side::B, Difficulty::Easy);
    run_full_turn(&mut restored, Side::B, Difficulty::Easy);

    assert_eq!(game.log, restored.log);
    assert_eq!(game.side(Side::A).dragon.hp, restored.side(Side::A).dragon.hp);
}

#[test]
fn test_summary_tracks_match_progress() {
    let mut game = standard_match(42);

    let opening = MatchSummary::of(&game);
    assert_eq!(opening.turn, 1);
    assert_eq!(opening.sides[1].dragon_hp, 30);

    apply_intent(&mut game, Side::A, Intent::Attack { target: Target::Dragon }).unwrap();
    let after = MatchSummary::of(&game);
    assert_eq!(after.sides[1].dragon_hp, 27);
    assert_eq!(after.sides[1].dragon_burn, 1);
}

#[test]
fn test_play_card_intent_resolves() {
    let mut game = standard_match(42);
    let card = game.side(Side::A).hand[0];

    // Opening energy (6) covers every card in the catalog.
    let outcome = apply_intent(&mut game, Side::A, Intent::PlayCard { card, target: None });

    match outcome {
        Ok(IntentOutcome::Card(card_outcome)) => {
            assert_eq!(card_outcome.cost_paid, card.spec().cost);
            assert!(game.side(Side::A).discard.contains(&card));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn test_intent_json_is_stable() {
    let intent = Intent::Attack { target: Target::Rider };
    let json = serde_json::to_string(&intent).unwrap();
    assert_eq!(json, r#"{"kind":"attack","target":"rider"}"#);
}
