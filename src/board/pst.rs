//! Piece-square tables.
//!
//! Tables are written as the board appears to white (a8 first, h1 last), so
//! they index directly by cell. Slot `KING_ENDGAME` replaces the king table
//! once material drops below the endgame threshold. Black tables mirror the
//! white ones vertically.

use once_cell::sync::Lazy;

use super::types::{Figure, KING};

/// Table slot used for kings in the endgame.
pub(crate) const KING_ENDGAME: usize = KING as usize;

#[rustfmt::skip]
const WHITE_TABLES: [[i16; 64]; 7] = [
    // pawn
    [
          0,   0,   0,   0,   0,   0,   0,   0,
         50,  50,  50,  50,  50,  50,  50,  50,
         10,  10,  20,  30,  30,  20,  10,  10,
          5,   5,  10,  25,  25,  10,   5,   5,
          0,   0,   0,  20,  20,   0,   0,   0,
          5,  -5, -10,   0,   0, -10,  -5,   5,
          5,  10,  10, -20, -20,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    // knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // rook
    [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,  10,  10,  10,  10,  10,  10,   5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          0,   0,   0,   5,   5,   0,   0,   0,
    ],
    // queen
    [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,   5,   5,   5,   0,  -5,
          0,   0,   5,   5,   5,   5,   0,  -5,
        -10,   5,   5,   5,   5,   5,   0, -10,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    // king, middle game
    [
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -10, -20, -20, -20, -20, -20, -20, -10,
         20,  20,   0,   0,   0,   0,  20,  20,
         20,  30,  10,   0,   0,  10,  30,  20,
    ],
    // king, endgame
    [
        -50, -40, -30, -20, -20, -30, -40, -50,
        -30, -20, -10,   0,   0, -10, -20, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -30,   0,   0,   0,   0, -30, -30,
        -50, -30, -30, -30, -30, -30, -30, -50,
    ],
];

static BLACK_TABLES: Lazy<[[i16; 64]; 7]> = Lazy::new(|| {
    let mut tables = [[0i16; 64]; 7];
    for (black, white) in tables.iter_mut().zip(WHITE_TABLES.iter()) {
        for (sq, cell) in black.iter_mut().enumerate() {
            *cell = white[sq ^ 56];
        }
    }
    tables
});

/// Table slot for a figure: `|fig| - 1`, or the endgame king slot.
#[inline]
#[must_use]
pub(crate) fn slot(fig: Figure, endgame: bool) -> usize {
    let kind = fig.unsigned_abs() as usize;
    if endgame && kind == KING as usize {
        KING_ENDGAME
    } else {
        kind - 1
    }
}

/// Positional bonus of a figure on a cell, from its owner's point of view.
#[inline]
#[must_use]
pub(crate) fn value(fig: Figure, endgame: bool, sq: usize) -> i32 {
    let slot = slot(fig, endgame);
    if fig > 0 {
        i32::from(WHITE_TABLES[slot][sq])
    } else {
        i32::from(BLACK_TABLES[slot][sq])
    }
}
