use awele_core::engine::config::EngineConfig;
use awele_core::engine::search::MinimaxEngine;
use awele_core::engine::Searcher;
use awele_core::logic::board::{Board, Side};
use awele_core::logic::game::{GameState, GameStatus};
use awele_core::logic::rules;
use std::sync::Arc;

fn engine_with(level: u8, seed: u64) -> MinimaxEngine {
    let config = EngineConfig {
        level,
        ..EngineConfig::default()
    };
    MinimaxEngine::with_seed(Arc::new(config), seed)
}

/// Plays engines against each other until the game decides itself or the
/// ply cap runs out, checking invariants after every move.
fn self_play(level: u8, plies: usize) -> GameState {
    let mut game = GameState::new();
    let mut north = engine_with(level, 1);
    let mut south = engine_with(level, 2);

    for _ in 0..plies {
        if game.status != GameStatus::Playing {
            break;
        }
        let searcher = match game.turn {
            Side::North => &mut north,
            Side::South => &mut south,
        };
        let (hole, _) = match searcher.choose_move(&game.board, game.turn) {
            Some(found) => found,
            None => break,
        };
        game.make_move(hole).expect("engine chose an illegal move");

        assert_eq!(game.board.total_seeds(), 48, "seeds were created or lost");
        for cell in game.board.cells() {
            assert!(*cell >= 0, "negative cell after {:?}", game.last_move);
        }
    }
    game
}

#[test]
fn test_self_play_preserves_every_invariant() {
    let game = self_play(2, 300);
    println!(
        "plies: {}, status: {:?}, stores: {} - {}",
        game.history.len(),
        game.status,
        game.board.store(Side::North),
        game.board.store(Side::South)
    );
}

#[test]
fn test_self_play_at_default_opening_depth() {
    // A handful of plies at a real playing depth, to push the search
    // through positions with full branching.
    let game = self_play(6, 6);
    assert_eq!(game.history.len(), 6);
}

#[test]
fn test_choose_move_is_deterministic_with_a_seed() {
    let mut game = GameState::new();
    game.make_move(2).unwrap();
    game.make_move(9).unwrap();

    let first = engine_with(6, 99)
        .choose_move(&game.board, game.turn)
        .unwrap();
    for _ in 0..3 {
        let again = engine_with(6, 99)
            .choose_move(&game.board, game.turn)
            .unwrap();
        assert_eq!(first.0, again.0);
        assert_eq!(first.1.nodes, again.1.nodes);
    }
}

#[test]
fn test_forced_move_reports_zero_nodes() {
    let board = Board::from_cells([1, 2, 0, 0, 0, 7, 0, 0, 0, 0, 0, 0, 20, 18]);
    assert_eq!(rules::legal_moves(&board, Side::North).len(), 1);

    let (hole, stats) = engine_with(8, 5)
        .choose_move(&board, Side::North)
        .unwrap();
    assert_eq!(hole, 5);
    assert_eq!(stats.nodes, 0);
}

#[test]
fn test_blocked_side_gets_no_move() {
    let board = Board::from_cells([0, 0, 0, 0, 0, 0, 8, 8, 8, 8, 8, 8, 0, 0]);
    assert!(engine_with(4, 5).choose_move(&board, Side::North).is_none());
    assert!(engine_with(4, 5).choose_move(&board, Side::South).is_some());
}

#[test]
fn test_engine_move_is_always_legal() {
    // Drive an engine through a fast game against a scripted opponent and
    // make sure everything it proposes passes the rules.
    let mut game = GameState::new();
    let mut searcher = engine_with(4, 17);

    for _ in 0..60 {
        if game.status != GameStatus::Playing {
            break;
        }
        let hole = match game.turn {
            Side::North => match searcher.choose_move(&game.board, Side::North) {
                Some((hole, _)) => hole,
                None => break,
            },
            // South always plays its lowest legal hole.
            Side::South => match rules::legal_moves(&game.board, Side::South).first() {
                Some(hole) => hole,
                None => break,
            },
        };
        assert!(rules::is_legal(&game.board, hole, game.turn));
        game.make_move(hole).unwrap();
    }
}

#[test]
fn test_uneven_engines_play_a_full_valid_game() {
    // A level-6 engine against a level-2 one over one game, ending in a
    // valid decided or capped state.
    let mut game = GameState::new();
    let mut strong = engine_with(6, 3);
    let mut weak = engine_with(2, 4);

    for _ in 0..200 {
        if game.status != GameStatus::Playing {
            break;
        }
        let searcher = match game.turn {
            Side::North => &mut strong,
            Side::South => &mut weak,
        };
        let (hole, _) = match searcher.choose_move(&game.board, game.turn) {
            Some(found) => found,
            None => break,
        };
        game.make_move(hole).unwrap();
    }
    let banked = game.board.store(Side::North) + game.board.store(Side::South);
    println!(
        "stores after {} plies: {} - {} ({banked} banked)",
        game.history.len(),
        game.board.store(Side::North),
        game.board.store(Side::South)
    );
    assert!(banked <= 48);
}
