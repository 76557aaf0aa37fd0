//! Turn-resolution scenario tests.
//!
//! These walk the engine through the canonical plays:
//! - Matching pair on a two-symbol board
//! - Mismatched pair flipping back
//! - Single-pair board won in one move, clock stopping
//! - Elapsed-time counting and display
//! - Input lock while a pair is being compared

use memory_match::games::memory::format_elapsed;
use memory_match::{
    Alphabet, GameConfig, GameEngine, GameError, RoundPhase, SettleOutcome, TileId, TurnOutcome,
    TurnPhase,
};

fn engine(symbols: &[&str], seed: u64) -> GameEngine {
    let alphabet = Alphabet::from_strs(symbols.iter().copied()).unwrap();
    GameEngine::new(GameConfig::new(alphabet).with_seed(seed)).unwrap()
}

fn pair_of(engine: &GameEngine, symbol: &str) -> [TileId; 2] {
    let ids: Vec<TileId> = engine
        .round()
        .tiles()
        .filter(|t| t.symbol.as_str() == symbol)
        .map(|t| t.id)
        .collect();
    assert_eq!(ids.len(), 2, "every symbol sits on exactly two tiles");
    [ids[0], ids[1]]
}

/// Flipping both A tiles resolves them after the settle.
#[test]
fn test_matching_pair() {
    let mut engine = engine(&["A", "B"], 1);

    let mut symbols: Vec<&str> = engine.round().tiles().map(|t| t.symbol.as_str()).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, vec!["A", "A", "B", "B"]);

    let [a1, a2] = pair_of(&engine, "A");
    assert_eq!(engine.select_tile(a1).unwrap(), TurnOutcome::FirstFlip(a1));

    let pending = match engine.select_tile(a2).unwrap() {
        TurnOutcome::PendingMatch(p) => p,
        other => panic!("expected pending match, got {other:?}"),
    };

    // Face up but not yet resolved during the settle window.
    let round = engine.round();
    assert!(round.tile(a1).unwrap().revealed);
    assert!(!round.tile(a1).unwrap().resolved);

    assert_eq!(engine.settle(pending), SettleOutcome::Matched([a1, a2]));

    let round = engine.round();
    assert!(round.tile(a1).unwrap().resolved);
    assert!(round.tile(a2).unwrap().resolved);
    assert_eq!(round.matched_pair_count(), 1);
    assert!(!round.is_won());
    assert_eq!(round.phase(), RoundPhase::Playing);
}

/// An A then a B flip back face down after the mismatch settle.
#[test]
fn test_mismatched_pair() {
    let mut engine = engine(&["A", "B"], 2);
    let [a, _] = pair_of(&engine, "A");
    let [b, _] = pair_of(&engine, "B");

    engine.select_tile(a).unwrap();
    let outcome = engine.select_tile(b).unwrap();
    assert!(matches!(outcome, TurnOutcome::PendingMismatch(_)));

    let pending = outcome.pending_settle().unwrap();
    assert_eq!(engine.settle(pending), SettleOutcome::Mismatched([a, b]));

    let round = engine.round();
    assert!(!round.tile(a).unwrap().revealed);
    assert!(!round.tile(b).unwrap().revealed);
    assert!(round.pending().is_empty());
    assert_eq!(round.move_count(), 1);
    assert_eq!(round.matched_pair_count(), 0);
    assert_eq!(round.turn_phase(), TurnPhase::Idle);
}

/// One-symbol board: second flip wins, and the clock freezes.
#[test]
fn test_single_pair_win() {
    let mut engine = engine(&["X"], 3);
    let [x1, x2] = pair_of(&engine, "X");

    engine.select_tile(x1).unwrap();
    assert!(engine.round().is_started());

    let pending = engine.select_tile(x2).unwrap().pending_settle().unwrap();
    assert_eq!(
        engine.settle(pending),
        SettleOutcome::Won {
            moves: 1,
            elapsed_seconds: 0
        }
    );

    let round = engine.round();
    assert_eq!(round.matched_pair_count(), 1);
    assert!(round.is_won());

    for _ in 0..10 {
        assert!(!engine.tick());
    }
    assert_eq!(engine.round().elapsed_seconds(), 0);
}

/// 75 ticks while playing read as 1:15.
#[test]
fn test_elapsed_time() {
    let mut engine = engine(&["A", "B"], 4);
    let [a, _] = pair_of(&engine, "A");
    engine.select_tile(a).unwrap();

    for _ in 0..75 {
        assert!(engine.tick());
    }

    assert_eq!(engine.round().elapsed_seconds(), 75);
    assert_eq!(format_elapsed(engine.round().elapsed_seconds()), "1:15");
}

/// A third selection during the compare window changes nothing.
#[test]
fn test_third_selection_ignored() {
    let mut engine = engine(&["A", "B", "C"], 5);
    let [a, _] = pair_of(&engine, "A");
    let [b, _] = pair_of(&engine, "B");
    let [c, _] = pair_of(&engine, "C");

    engine.select_tile(a).unwrap();
    engine.select_tile(b).unwrap();
    let before = engine.snapshot();

    assert_eq!(engine.select_tile(c).unwrap(), TurnOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
    assert!(!engine.round().tile(c).unwrap().revealed);
}

/// Selections after the win are ignored.
#[test]
fn test_selection_after_win_ignored() {
    let mut engine = engine(&["X"], 6);
    let [x1, x2] = pair_of(&engine, "X");

    engine.select_tile(x1).unwrap();
    let pending = engine.select_tile(x2).unwrap().pending_settle().unwrap();
    engine.settle(pending);

    let before = engine.snapshot();
    assert_eq!(engine.select_tile(x1).unwrap(), TurnOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}

/// Unknown ids fail without touching the round.
#[test]
fn test_unknown_tile_error() {
    let mut engine = engine(&["A", "B"], 7);
    let before = engine.snapshot();

    let err = engine.select_tile(TileId::new(100)).unwrap_err();
    assert_eq!(err, GameError::UnknownTile(TileId::new(100)));
    assert_eq!(engine.snapshot(), before);
    assert!(!engine.round().is_started());
}

/// Clock does not run before the first flip.
#[test]
fn test_clock_waits_for_first_flip() {
    let mut engine = engine(&["A", "B"], 8);
    assert!(!engine.tick());
    assert_eq!(engine.round().elapsed_seconds(), 0);
    assert_eq!(engine.round().phase(), RoundPhase::NotStarted);
}

/// Full eight-pair game, solved with perfect recall.
#[test]
fn test_full_default_game() {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(2024)).unwrap();
    let symbols: Vec<String> = engine
        .config()
        .alphabet
        .symbols()
        .iter()
        .map(|s| s.as_str().to_owned())
        .collect();

    let mut last = None;
    for symbol in &symbols {
        let [first, second] = pair_of(&engine, symbol);
        engine.select_tile(first).unwrap();
        engine.tick();
        let pending = engine.select_tile(second).unwrap().pending_settle().unwrap();
        last = Some(engine.settle(pending));
    }

    assert_eq!(
        last,
        Some(SettleOutcome::Won {
            moves: 8,
            elapsed_seconds: 8
        })
    );
    assert_eq!(engine.snapshot().pairs_label(), "8/8");
}
