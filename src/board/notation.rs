//! Move text parsing.
//!
//! Accepts the long form produced by `Step`'s `Display` (`Ng1-f3`,
//! `e7xd8=Q+`, `0-0`) as well as short algebraic forms with optional
//! disambiguation (`Nf3`, `exd5`, `R1a3`, `e8=N`). Text is parsed into a
//! [`Notation`] first and then matched against legal moves.

use std::str::FromStr;

use log::debug;

use super::engine::Engine;
use super::error::NotationError;
use super::state::MAX_EPD;
use super::types::{column, from_symbol, row, Figure, MoveType, Square, Step, PAWN};

/// A parsed move text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Castle {
        kingside: bool,
    },
    Move {
        /// Moving figure kind, `None` for pawns.
        figure: Option<Figure>,
        /// Origin file, 1..=8.
        from_file: Option<i8>,
        /// Origin rank, 1..=8.
        from_rank: Option<i8>,
        capture: bool,
        to: Square,
        promotion: Option<MoveType>,
    },
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::Malformed {
            text: text.to_string(),
        };
        let body = text.trim().trim_end_matches(&['+', '#', '!', '?'][..]);
        if body.is_empty() {
            return Err(NotationError::Empty);
        }

        match body {
            "0-0" | "O-O" | "o-o" => return Ok(Notation::Castle { kingside: true }),
            "0-0-0" | "O-O-O" | "o-o-o" => return Ok(Notation::Castle { kingside: false }),
            _ => {}
        }

        let (body, promotion) = match body.split_once('=') {
            Some((head, letter)) => {
                let mut chars = letter.chars();
                let kind = chars
                    .next()
                    .and_then(MoveType::from_promotion_letter)
                    .ok_or_else(malformed)?;
                if chars.next().is_some() {
                    return Err(malformed());
                }
                (head, Some(kind))
            }
            None => (body, None),
        };

        let mut chars: Vec<char> = body.chars().collect();
        let figure = match chars.first().copied().and_then(from_symbol) {
            Some(fig) => {
                chars.remove(0);
                Some(fig)
            }
            None => None,
        };

        if chars.len() < 2 {
            return Err(malformed());
        }
        let target: String = chars.split_off(chars.len() - 2).into_iter().collect();
        let to: Square = target.parse().map_err(|_| malformed())?;

        let mut capture = false;
        if let Some(&sep) = chars.last() {
            if sep == 'x' || sep == '-' || sep == ':' {
                capture = sep != '-';
                chars.pop();
            }
        }

        let (mut from_file, mut from_rank) = (None, None);
        for c in chars {
            match c {
                'a'..='h' if from_file.is_none() && from_rank.is_none() => {
                    from_file = Some((c as u8 - b'a') as i8 + 1);
                }
                '1'..='8' if from_rank.is_none() => {
                    from_rank = Some((c as u8 - b'1') as i8 + 1);
                }
                _ => return Err(malformed()),
            }
        }

        Ok(Notation::Move {
            figure,
            from_file,
            from_rank,
            capture,
            to,
            promotion,
        })
    }
}

impl Notation {
    /// True if `step` is a move this text can describe.
    ///
    /// A pawn reaching the last rank without a promotion suffix is taken to
    /// promote to a queen.
    #[must_use]
    pub fn matches(&self, step: &Step) -> bool {
        match *self {
            Notation::Castle { kingside } => {
                step.kind
                    == if kingside {
                        MoveType::CastleKingside
                    } else {
                        MoveType::CastleQueenside
                    }
            }
            Notation::Move {
                figure,
                from_file,
                from_rank,
                capture,
                to,
                promotion,
            } => {
                let from = step.from as usize;
                step.to as usize == to.index()
                    && !step.kind.is_castle()
                    && step.piece.abs() == figure.unwrap_or(PAWN)
                    && from_file.map_or(true, |f| column(from) == f)
                    && from_rank.map_or(true, |r| row(from) == r)
                    && (!capture || step.is_capture())
                    && match promotion {
                        Some(kind) => step.kind == kind,
                        None => {
                            !step.kind.is_promotion() || step.kind == MoveType::PromoteToQueen
                        }
                    }
            }
        }
    }
}

impl Engine {
    /// First legal move at `ply` matching `text`.
    pub fn resolve_notation(&mut self, ply: usize, text: &str) -> Result<Step, NotationError> {
        let notation: Notation = text.parse()?;
        self.legal_steps(ply)
            .into_iter()
            .find(|step| notation.matches(step))
            .ok_or_else(|| NotationError::NoMatchingMove {
                text: text.to_string(),
            })
    }

    /// Resolve `text` against the root position into best-move slot `slot`.
    ///
    /// The slot is emptied when nothing matches.
    pub fn set_best_move(&mut self, slot: usize, text: &str) -> Result<Step, NotationError> {
        if slot >= MAX_EPD {
            return Err(NotationError::SlotOutOfRange { slot });
        }
        let resolved = self.resolve_notation(0, text);
        self.best_moves[slot] = resolved.as_ref().ok().copied();
        resolved
    }

    /// Boolean form of [`Engine::set_best_move`].
    pub fn getbm(&mut self, slot: usize, text: &str) -> bool {
        match self.set_best_move(slot, text) {
            Ok(_) => true,
            Err(err) => {
                debug!("best move slot {slot}: {err}");
                false
            }
        }
    }

    #[must_use]
    pub fn best_move(&self, slot: usize) -> Option<Step> {
        self.best_moves.get(slot).copied().flatten()
    }

    pub fn clear_best_moves(&mut self) {
        self.best_moves = [None; MAX_EPD];
    }
}
