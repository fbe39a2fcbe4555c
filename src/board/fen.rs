use super::engine::Engine;
use super::error::FenError;
use super::state::Board;
use super::types::{fen_char, from_fen_char, square_name, CastlingRights, Color, Square, NO_FIG};

/// Fields of a parsed FEN string, not yet applied to an engine.
struct ParsedFen {
    board: Board,
    white_move: bool,
    castling: CastlingRights,
    en_passant: u8,
}

fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().unwrap_or("");

    let mut board = Board::empty();
    for (rank_idx, rank_str) in placement.split('/').enumerate() {
        if rank_idx >= 8 {
            return Err(FenError::TooManyRanks { rank: rank_idx });
        }
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
                continue;
            }
            let fig = from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                });
            }
            board.set(rank_idx * 8 + file, fig);
            file += 1;
        }
        if file > 8 {
            return Err(FenError::TooManyFiles {
                rank: rank_idx,
                files: file,
            });
        }
    }

    let white_move = match parts.next() {
        Some("w") => true,
        Some("b") => false,
        Some(other) => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
        None => return Err(FenError::MissingSideToMove),
    };

    let mut castling = CastlingRights::none();
    if let Some(field) = parts.next() {
        for c in field.chars() {
            match c {
                'K' => castling.set(Color::White, true),
                'Q' => castling.set(Color::White, false),
                'k' => castling.set(Color::Black, true),
                'q' => castling.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
    }

    let en_passant = match parts.next() {
        None | Some("-") => 0,
        Some(field) => field
            .parse::<Square>()
            .map(|sq| sq.index() as u8)
            .map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?,
    };

    Ok(ParsedFen {
        board,
        white_move,
        castling,
        en_passant,
    })
}

impl Engine {
    /// Load a position from FEN.
    ///
    /// Placement, side to move, castling rights and en passant cell are
    /// read; move counters are accepted and ignored. On success the board
    /// and the ply-0 record are replaced; deeper plies are left alone. On
    /// failure nothing is changed.
    pub fn try_load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parsed = parse_fen(fen)?;
        self.board = parsed.board;

        let root = &mut self.stack[0];
        root.white_move = parsed.white_move;
        root.castling = parsed.castling;
        root.en_passant = parsed.en_passant;
        root.clear_moves();
        root.best = None;
        root.check_on_table = false;
        self.end_of_game = None;
        Ok(())
    }

    /// Boolean form of [`Engine::try_load_fen`].
    pub fn load_board_from_fen(&mut self, fen: &str) -> bool {
        self.try_load_fen(fen).is_ok()
    }

    /// Current board with the side, rights and en passant cell of `ply`.
    #[must_use]
    pub fn export_pos_to_fen(&self, ply: usize) -> String {
        let mut out = String::with_capacity(80);
        for rank in 0..8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in 0..8 {
                let fig = self.board.get(rank * 8 + file);
                match fen_char(fig) {
                    Some(c) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(c);
                    }
                    None => {
                        debug_assert_eq!(fig, NO_FIG);
                        empty += 1;
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }

        let pos = &self.stack[ply];
        out.push_str(if pos.white_move { " w " } else { " b " });
        out.push_str(&pos.castling.to_fen());
        out.push(' ');
        if pos.en_passant == 0 {
            out.push('-');
        } else {
            out.push_str(&square_name(pos.en_passant as usize));
        }
        out
    }
}
