//! Drives the engine through the search capability trait.
//!
//! The alpha-beta here is a plain test harness written only against
//! `AdversarialGame`, the way an external search player would use it.

use strictly_pyramid::{AdversarialGame, Cell, GameEngine, Marker};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Minimax value of `state` to `player`, with alpha-beta pruning.
fn alpha_beta<G: AdversarialGame>(
    game: &G,
    state: &G::State,
    player: G::Player,
    mut alpha: i8,
    mut beta: i8,
) -> i8 {
    if game.terminal_test(state) {
        return game.utility(state, player);
    }

    let maximizing = game.to_move(state) == player;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for action in game.legal_moves(state) {
        let value = alpha_beta(game, &game.apply(state, action), player, alpha, beta);
        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

fn value<G: AdversarialGame>(game: &G, state: &G::State, player: G::Player) -> i8 {
    alpha_beta(game, state, player, -1, 1)
}

#[test]
fn test_first_player_forces_win() {
    init_tracing();
    let engine = GameEngine::default();
    let root = engine.initial_state();

    assert_eq!(value(&engine, &root, Marker::X), 1);
    assert_eq!(value(&engine, &root, Marker::O), -1);
}

#[test]
fn test_only_left_corner_of_middle_row_wins() {
    init_tracing();
    let engine = GameEngine::default();
    let root = engine.initial_state();

    let winning: Vec<Cell> = AdversarialGame::legal_moves(&engine, &root)
        .into_iter()
        .filter(|&cell| value(&engine, &AdversarialGame::apply(&engine, &root, cell), Marker::X) == 1)
        .collect();

    assert_eq!(winning, vec![Cell::new(3, 1)]);
}

#[test]
fn test_search_takes_immediate_win() {
    init_tracing();
    let engine = GameEngine::default();
    // X holds (3,1) and (2,1); the apex completes the column.
    let state = engine.replay(&[Cell::new(3, 1), Cell::new(3, 2), Cell::new(2, 1), Cell::new(3, 3)]);

    let after = AdversarialGame::apply(&engine, &state, Cell::new(1, 1));
    assert!(AdversarialGame::terminal_test(&engine, &after));
    assert_eq!(AdversarialGame::utility(&engine, &after, Marker::X), 1);
    assert_eq!(value(&engine, &state, Marker::X), 1);
}

#[test]
fn test_tiny_board_is_drawn() {
    init_tracing();
    // Two cells: nobody can ever make three.
    let engine = GameEngine::from_profile(&[1, 1]).unwrap();
    let root = engine.initial_state();
    assert_eq!(value(&engine, &root, Marker::X), 0);
}
