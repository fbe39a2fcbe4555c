//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `castling.rs` - Castling rights and transit checks
//! - `draw.rs` - Insufficient material and repetition
//! - `eval.rs` - Weight seeding and evaluation modes
//! - `make_unmake.rs` - Apply/revert correctness
//! - `search.rs` - Mates, stalemates and search termination
//! - `proptest.rs` - Property-based tests

mod castling;
mod perft;
mod proptest;

use crate::board::{Engine, Step};

/// Engine loaded with `fen`; panics on a bad FEN.
pub(super) fn engine_from(fen: &str) -> Engine {
    let mut engine = Engine::new();
    engine
        .try_load_fen(fen)
        .unwrap_or_else(|err| panic!("bad test FEN {fen}: {err}"));
    engine
}

/// Legal move at ply 0 written as `text`.
pub(super) fn find_step(engine: &mut Engine, text: &str) -> Step {
    engine
        .resolve_notation(0, text)
        .unwrap_or_else(|err| panic!("{text}: {err}"))
}

/// Play `moves` in order, each becoming the new ply 0.
pub(super) fn play(engine: &mut Engine, moves: &[&str]) {
    for text in moves {
        let step = find_step(engine, text);
        engine.commit_step(&step);
    }
}
