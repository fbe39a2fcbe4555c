//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;

use crate::board::{Color, Engine, Step};

/// Play up to `moves` random legal moves from the start position.
fn random_game(seed: u64, moves: usize) -> Engine {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Engine::new();
    for _ in 0..moves {
        let legal = engine.legal_steps(0);
        let Some(step) = legal.choose(&mut rng) else {
            break;
        };
        engine.commit_step(step);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Export then load gives back the same FEN and board.
    #[test]
    fn prop_fen_round_trip(seed in any::<u64>(), moves in 0..40usize) {
        let engine = random_game(seed, moves);
        let fen = engine.export_pos_to_fen(0);
        let mut copy = Engine::new();
        prop_assert!(copy.load_board_from_fen(&fen));
        prop_assert_eq!(copy.export_pos_to_fen(0), fen);
        prop_assert_eq!(copy.board(), engine.board());
    }

    /// No legal move leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in any::<u64>(), moves in 0..40usize) {
        let mut engine = random_game(seed, moves);
        let side = engine.position(0).side();
        let legal: Vec<Step> = engine.legal_steps(0);
        for step in &legal {
            engine.move_step(0, step);
            prop_assert!(!engine.board().king_in_check(side), "{} exposes the king", step);
            engine.back_step(0, step);
        }
        prop_assert_eq!(engine.position(0).check_on_table, engine.board().king_in_check(side));
    }

    /// Every legal move is undone exactly.
    #[test]
    fn prop_move_back_restores(seed in any::<u64>(), moves in 0..30usize) {
        let mut engine = random_game(seed, moves);
        let before = engine.export_pos_to_fen(0);
        for step in engine.legal_steps(0) {
            engine.move_step(0, &step);
            engine.back_step(0, &step);
            prop_assert_eq!(engine.export_pos_to_fen(0), before.clone());
        }
    }

    /// Swapping colours negates the material score.
    #[test]
    fn prop_mirror_negates_material(seed in any::<u64>(), moves in 0..30usize) {
        let mut engine = random_game(seed, moves);
        let mut mirror = Engine::new();
        mirror.board = engine.board().mirrored();
        mirror.position_mut(0).white_move = engine.position(0).white_move;
        engine.seed_weights(3500);
        mirror.seed_weights(3500);
        prop_assert_eq!(
            engine.evaluate(0, crate::board::EvalMode::Material),
            -mirror.evaluate(0, crate::board::EvalMode::Material)
        );
        let white_king = engine.board().king_square(Color::White);
        let black_king = mirror.board().king_square(Color::Black);
        prop_assert_eq!(white_king.map(|idx| idx ^ 56), black_king);
    }
}
