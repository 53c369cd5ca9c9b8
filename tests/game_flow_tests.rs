//! Game flow tests - full turns driven through the public controller API

use tui_memory::core::{
    Alphabet, BoardError, FlipOutcome, GameConfig, GameEvent, GameState, Shuffler, SimpleRng,
};
use tui_memory::types::{GameAction, GameStatus, Symbol, TileState, TurnPhase, DEFAULT_PAIR_COUNT};

/// Keeps the dealt order, so a two-symbol alphabet lays out as [A, B, A, B].
struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _symbols: &mut [Symbol]) {}
}

fn abab_game() -> GameState {
    let alphabet = Alphabet::new(['A', 'B']).unwrap();
    GameState::with_parts(GameConfig::default(), alphabet, NoShuffle)
}

fn seeded_game(seed: u32) -> GameState {
    GameState::new(GameConfig::default().with_seed(seed))
}

fn changed(index: usize, state: TileState) -> GameEvent {
    GameEvent::TileChanged { index, state }
}

fn states(game: &GameState) -> Vec<TileState> {
    game.board().tiles().iter().map(|t| t.state()).collect()
}

/// Pairs of board indices sharing a symbol, in order of first appearance.
fn pairs_of(game: &GameState) -> Vec<(usize, usize)> {
    let tiles = game.board().tiles();
    let mut pairs = Vec::new();
    for (i, tile) in tiles.iter().enumerate() {
        if let Some(j) = tiles[i + 1..].iter().position(|t| t.symbol() == tile.symbol()) {
            pairs.push((i, i + 1 + j));
        }
    }
    pairs
}

#[test]
fn test_two_pair_walkthrough() {
    use TileState::*;

    let mut game = abab_game();
    game.take_events();

    // Mismatch: A then B.
    assert_eq!(game.flip_tile(0), Ok(FlipOutcome::Revealed));
    assert_eq!(game.flip_tile(1), Ok(FlipOutcome::Mismatched));
    assert_eq!(game.moves(), 1);
    assert_eq!(game.phase(), TurnPhase::Resolving);
    assert_eq!(
        game.take_events(),
        vec![
            changed(0, FaceUp),
            changed(1, FaceUp),
            GameEvent::Moves { moves: 1 },
        ]
    );

    // Clicks inside the rollback window are dropped.
    assert_eq!(game.flip_tile(2), Ok(FlipOutcome::Rejected));
    assert_eq!(states(&game), vec![FaceUp, FaceUp, FaceDown, FaceDown]);

    assert!(game.take_events().is_empty());

    game.tick(999);
    assert_eq!(states(&game), vec![FaceUp, FaceUp, FaceDown, FaceDown]);
    assert!(game.take_events().is_empty());
    game.tick(1);
    assert_eq!(states(&game), vec![FaceDown; 4]);
    // The timer task was scheduled first, so its tick lands before the rollback.
    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::Timer {
                text: "0:01".to_string()
            },
            changed(0, FaceDown),
            changed(1, FaceDown),
        ]
    );
    assert_eq!(game.phase(), TurnPhase::AwaitingFirstFlip);

    // Match the As.
    assert_eq!(game.flip_tile(0), Ok(FlipOutcome::Revealed));
    assert_eq!(game.flip_tile(2), Ok(FlipOutcome::Matched));
    assert_eq!(game.moves(), 2);
    assert_eq!(game.matched_pairs(), 1);
    assert_eq!(states(&game), vec![Matched, FaceDown, Matched, FaceDown]);
    assert_eq!(
        game.take_events(),
        vec![
            changed(0, FaceUp),
            changed(2, FaceUp),
            GameEvent::Moves { moves: 2 },
            changed(0, Matched),
            changed(2, Matched),
            GameEvent::Pairs {
                text: "1/2".to_string()
            },
        ]
    );

    // Match the Bs and win.
    assert_eq!(game.flip_tile(1), Ok(FlipOutcome::Revealed));
    assert_eq!(game.flip_tile(3), Ok(FlipOutcome::Won));
    assert_eq!(game.moves(), 3);
    assert_eq!(game.status(), GameStatus::Won);
    assert!(!game.timer_running());
    assert_eq!(states(&game), vec![Matched; 4]);

    let completion = game.completion().cloned().unwrap();
    assert_eq!(completion.moves, 3);
    assert_eq!(completion.elapsed, "0:01");

    assert_eq!(
        game.take_events(),
        vec![
            changed(1, FaceUp),
            changed(3, FaceUp),
            GameEvent::Moves { moves: 3 },
            changed(1, Matched),
            changed(3, Matched),
            GameEvent::Pairs {
                text: "2/2".to_string()
            },
            GameEvent::Completed(completion),
        ]
    );

    // Notice follows half a second later.
    game.tick(499);
    assert!(game.take_events().is_empty());
    game.tick(1);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::Congratulations {
            message: "Congratulations! You won! Moves: 3 Time: 0:01".to_string()
        }]
    );

    // Nothing moves after the win.
    assert_eq!(game.flip_tile(0), Ok(FlipOutcome::Rejected));
    game.tick(5000);
    assert_eq!(game.timer_text(), "0:01");
}

#[test]
fn test_out_of_range_flip_is_an_error() {
    let mut game = abab_game();
    assert_eq!(
        game.flip_tile(4),
        Err(BoardError::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert!(!game.apply_action(GameAction::FlipTile(99)));
}

#[test]
fn test_perfect_play_takes_one_move_per_pair() {
    let mut game = seeded_game(2024);
    let pairs = pairs_of(&game);
    assert_eq!(pairs.len(), DEFAULT_PAIR_COUNT);

    for (n, &(a, b)) in pairs.iter().enumerate() {
        assert_ne!(game.status(), GameStatus::Won);
        assert_eq!(game.flip_tile(a), Ok(FlipOutcome::Revealed));
        let expected = if n + 1 == pairs.len() {
            FlipOutcome::Won
        } else {
            FlipOutcome::Matched
        };
        assert_eq!(game.flip_tile(b), Ok(expected));
        game.tick(250);
    }

    assert_eq!(game.moves(), DEFAULT_PAIR_COUNT as u32);
    assert_eq!(game.matched_pairs(), DEFAULT_PAIR_COUNT);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.elapsed_seconds(), 1);
}

#[test]
fn test_rollback_only_touches_the_mismatched_pair() {
    let mut game = seeded_game(7);
    let pairs = pairs_of(&game);

    let (a, b) = pairs[0];
    game.flip_tile(a).unwrap();
    game.flip_tile(b).unwrap();

    // Two tiles from different pairs.
    let (c, _) = pairs[1];
    let (d, _) = pairs[2];
    assert_eq!(game.flip_tile(c), Ok(FlipOutcome::Revealed));
    assert_eq!(game.flip_tile(d), Ok(FlipOutcome::Mismatched));
    let before = states(&game);

    game.tick(1000);
    let after = states(&game);
    for i in 0..after.len() {
        if i == c || i == d {
            assert_eq!(after[i], TileState::FaceDown);
        } else {
            assert_eq!(after[i], before[i], "tile {i} changed");
        }
    }
    assert_eq!(after[a], TileState::Matched);
    assert_eq!(after[b], TileState::Matched);
}

#[test]
fn test_restart_while_resolving_cancels_rollback() {
    let mut game = abab_game();
    game.flip_tile(0).unwrap();
    assert_eq!(game.flip_tile(1), Ok(FlipOutcome::Mismatched));
    game.tick(400);

    game.restart();
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert!(!game.rollback_pending());
    assert_eq!(game.timer_text(), "0:00");

    let events = game.take_events();
    assert!(events.contains(&GameEvent::BoardReset { tiles: 4 }));

    // A flip on the new board must survive the old deadline.
    assert_eq!(game.flip_tile(0), Ok(FlipOutcome::Revealed));
    game.tick(2000);
    assert_eq!(game.board().tile_at(0).unwrap().state(), TileState::FaceUp);
    assert!(!game
        .take_events()
        .iter()
        .any(|e| matches!(e, GameEvent::TileChanged { state: TileState::FaceDown, .. })));
    assert_eq!(game.elapsed_seconds(), 2);
}

#[test]
fn test_restart_deals_from_the_same_rng_stream() {
    let mut a = seeded_game(99);
    let mut b = seeded_game(99);
    assert_eq!(a.board(), b.board());

    a.restart();
    b.restart();
    assert_eq!(a.board(), b.board());
    assert_eq!(a.seed(), 99);
}

#[test]
fn test_timer_counts_whole_seconds_from_first_flip() {
    let mut game = abab_game();
    game.tick(3000);
    assert_eq!(game.timer_text(), "0:00");

    game.flip_tile(0).unwrap();
    for _ in 0..63 {
        game.tick(1000);
    }
    assert_eq!(game.timer_text(), "1:03");

    let timer_events = game
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Timer { .. }))
        .count();
    // Initial reset plus one per second.
    assert_eq!(timer_events, 64);
}

#[test]
fn test_random_clicks_keep_turn_invariants() {
    for seed in 1..=20u32 {
        let mut game = seeded_game(seed);
        let mut input = SimpleRng::new(seed.wrapping_mul(31) + 7);
        let len = game.board().len() as u32;
        let mut last_moves = 0;

        for _ in 0..2000 {
            if input.next_range(4) == 0 {
                game.tick(input.next_range(1200));
            } else {
                let _ = game.flip_tile(input.next_range(len) as usize);
            }

            let tiles = states(&game);
            let face_up = tiles.iter().filter(|s| **s == TileState::FaceUp).count();
            let matched = tiles.iter().filter(|s| **s == TileState::Matched).count();

            assert!(face_up <= 2, "seed {seed}: {face_up} tiles face up");
            assert_eq!(face_up, game.face_up().len());
            assert_eq!(matched, game.matched_pairs() * 2);
            assert!(game.moves() >= last_moves);
            assert!(game.moves() as usize >= game.matched_pairs());
            assert_eq!(
                game.status() == GameStatus::Won,
                game.matched_pairs() == game.pair_count()
            );
            last_moves = game.moves();
        }
    }
}

#[test]
fn test_flipping_a_matched_tile_is_ignored() {
    let mut game = abab_game();
    game.flip_tile(0).unwrap();
    game.flip_tile(2).unwrap();
    game.take_events();

    assert_eq!(game.flip_tile(2), Ok(FlipOutcome::Rejected));
    assert_eq!(game.moves(), 1);
    assert!(game.take_events().is_empty());
}
