use std::cell::Cell;
use std::ops::{Index, IndexMut};

use super::types::{CastlingRights, Color, Figure, Step, KING, NO_FIG};

/// Capacity of one ply's move list. One extra slot past it holds the null move.
pub const MAX_STEPS: usize = 150;
/// Number of ply records in the search stack.
pub const MAX_DEPTH: usize = 30;
/// Number of best-move slots answering notation queries.
pub const MAX_EPD: usize = 5;

/// Slot index of the null move in every move list.
pub(crate) const NULL_STEP: usize = MAX_STEPS;

/// 64-cell mailbox board with cached king locations.
///
/// The king caches are refreshed lazily: whenever a lookup finds that the
/// cached cell no longer holds the expected king, the board is rescanned.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Figure; 64],
    white_king: Cell<u8>,
    black_king: Cell<u8>,
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [NO_FIG; 64],
            white_king: Cell::new(60),
            black_king: Cell::new(4),
        }
    }

    /// Board holding a copy of `cells`; king caches fill on first lookup.
    #[must_use]
    pub(crate) fn from_cells(cells: [Figure; 64]) -> Self {
        Board {
            cells,
            ..Board::empty()
        }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Figure; 64] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Figure {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, fig: Figure) {
        self.cells[idx] = fig;
    }

    /// Cell of the given side's king, rescanning if the cache is stale.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<usize> {
        let (cache, king) = match color {
            Color::White => (&self.white_king, KING),
            Color::Black => (&self.black_king, -KING),
        };
        let cached = cache.get() as usize;
        if self.cells[cached] == king {
            return Some(cached);
        }
        let found = self.cells.iter().position(|&f| f == king)?;
        cache.set(found as u8);
        Some(found)
    }

    /// Point the king cache at a cell the caller just moved the king to.
    #[inline]
    pub(crate) fn set_king_square(&self, color: Color, idx: usize) {
        match color {
            Color::White => self.white_king.set(idx as u8),
            Color::Black => self.black_king.set(idx as u8),
        }
    }

    /// Board with colours swapped and ranks mirrored.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut out = Board::empty();
        for (idx, &fig) in self.cells.iter().enumerate() {
            out.cells[idx ^ 56] = -fig;
        }
        out
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<usize> for Board {
    type Output = Figure;

    #[inline]
    fn index(&self, idx: usize) -> &Figure {
        &self.cells[idx]
    }
}

/// Per-ply position record.
///
/// Ply `k + 1` is derived from ply `k` by `move_pos`; records are reused in
/// place across searches.
#[derive(Clone, Debug)]
pub struct Position {
    pub white_move: bool,
    pub castling: CastlingRights,
    /// En passant target cell, `0` when none.
    pub en_passant: u8,
    pub steps: [Step; MAX_STEPS + 1],
    pub steps_count: usize,
    pub cur_step: usize,
    pub best: Option<Step>,
    pub check_on_table: bool,
    pub weight_white: i32,
    pub weight_black: i32,
    /// Positional balance, white minus black.
    pub weight_both: i32,
}

impl Position {
    #[must_use]
    pub fn new() -> Self {
        Position {
            white_move: true,
            castling: CastlingRights::none(),
            en_passant: 0,
            steps: [Step::NULL; MAX_STEPS + 1],
            steps_count: 0,
            cur_step: 0,
            best: None,
            check_on_table: false,
            weight_white: 0,
            weight_black: 0,
            weight_both: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn side(&self) -> Color {
        Color::from_white_move(self.white_move)
    }

    /// Generated moves, in their current order.
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Step] {
        &self.steps[..self.steps_count]
    }

    /// The move currently being tried at this ply.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Step {
        &self.steps[self.cur_step]
    }

    #[inline]
    pub(crate) fn current_mut(&mut self) -> &mut Step {
        &mut self.steps[self.cur_step]
    }

    #[inline]
    pub(crate) fn clear_moves(&mut self) {
        self.steps_count = 0;
        self.cur_step = 0;
    }

    /// Append a move. Overflowing the fixed list is an invariant violation.
    #[inline]
    pub(crate) fn push(&mut self, step: Step) {
        assert!(
            self.steps_count < MAX_STEPS,
            "move list overflow: more than {MAX_STEPS} moves generated"
        );
        self.steps[self.steps_count] = step;
        self.steps_count += 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed arena of ply records indexed by search depth.
#[derive(Clone, Debug)]
pub struct PositionStack {
    plies: Vec<Position>,
}

impl PositionStack {
    #[must_use]
    pub fn new() -> Self {
        PositionStack {
            plies: vec![Position::new(); MAX_DEPTH],
        }
    }

    /// Reset every record, keeping the allocation.
    pub fn reset(&mut self) {
        for pos in &mut self.plies {
            *pos = Position::new();
        }
    }

    /// Replace ply 0 with ply 1, the position after ply 0's applied move.
    pub(crate) fn advance(&mut self) {
        self.plies[1].white_move = !self.plies[0].white_move;
        self.plies.swap(0, 1);
    }
}

impl Default for PositionStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for PositionStack {
    type Output = Position;

    #[inline]
    fn index(&self, ply: usize) -> &Position {
        assert!(ply < MAX_DEPTH, "ply {ply} beyond stack capacity {MAX_DEPTH}");
        &self.plies[ply]
    }
}

impl IndexMut<usize> for PositionStack {
    #[inline]
    fn index_mut(&mut self, ply: usize) -> &mut Position {
        assert!(ply < MAX_DEPTH, "ply {ply} beyond stack capacity {MAX_DEPTH}");
        &mut self.plies[ply]
    }
}
