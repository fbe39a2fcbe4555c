//! The engine value: board, ply stack and search bookkeeping.

use std::fmt;

use super::movegen::worker::PawnKingWorker;
use super::search::EndOfGame;
use super::state::{Board, Position, PositionStack, MAX_EPD};
use super::types::{square_name, Step};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

/// A chess engine instance.
///
/// Owns the board, the per-ply position stack and one worker thread for
/// pawn/king generation. Several engines may coexist; they share nothing.
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) stack: PositionStack,
    pub(crate) endgame: bool,
    pub(crate) nodes: u64,
    pub(crate) best_moves: [Option<Step>; MAX_EPD],
    pub(crate) end_of_game: Option<EndOfGame>,
    pub(crate) worker: PawnKingWorker,
    /// Recycled buffer for main-thread generation.
    pub(crate) scratch: Vec<Step>,
}

impl Engine {
    /// Engine set to the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut engine = Engine {
            board: Board::empty(),
            stack: PositionStack::new(),
            endgame: false,
            nodes: 0,
            best_moves: [None; MAX_EPD],
            end_of_game: None,
            worker: PawnKingWorker::spawn(),
            scratch: Vec::with_capacity(64),
        };
        engine.new_game();
        engine
    }

    /// Forget everything and set up the starting position.
    pub fn new_game(&mut self) {
        self.stack.reset();
        self.clear_best_moves();
        self.end_of_game = None;
        self.nodes = 0;
        self.endgame = false;
        let loaded = self.load_board_from_fen(START_FEN);
        debug_assert!(loaded, "start position must parse");
    }

    /// Read-only view of the board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn position(&self, ply: usize) -> &Position {
        &self.stack[ply]
    }

    /// Mutable ply record, for callers replaying saved games.
    #[inline]
    pub fn position_mut(&mut self, ply: usize) -> &mut Position {
        &mut self.stack[ply]
    }

    /// Nodes visited by the last search.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.endgame
    }

    /// Classification reported by the last `solve`, if the game had ended.
    #[inline]
    #[must_use]
    pub fn end_of_game(&self) -> Option<EndOfGame> {
        self.end_of_game
    }

    #[must_use]
    pub fn check_on_white_king(&self) -> bool {
        self.board.check_on_white_king()
    }

    #[must_use]
    pub fn check_on_black_king(&self) -> bool {
        self.board.check_on_black_king()
    }

    #[must_use]
    pub fn step_to_str(&self, step: &Step) -> String {
        step.to_string()
    }

    #[must_use]
    pub fn square_name(&self, idx: usize) -> String {
        square_name(idx)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("fen", &self.export_pos_to_fen(0))
            .field("endgame", &self.endgame)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_initial_position() {
        let engine = Engine::new();
        assert_eq!(engine.export_pos_to_fen(0), START_FEN);
        assert!(engine.position(0).white_move);
        assert_eq!(engine.end_of_game(), None);
    }

    #[test]
    fn independent_engines() {
        let mut a = Engine::new();
        let b = Engine::new();
        assert!(a.load_board_from_fen("8/8/8/8/8/8/8/K6k w - -"));
        assert_ne!(a.export_pos_to_fen(0), b.export_pos_to_fen(0));
    }
}
