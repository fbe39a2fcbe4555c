//! Castling rights and transit checks.

use super::{engine_from, find_step, play};
use crate::board::{CastlingRights, Color, MoveType};

fn can_castle_kingside(fen: &str) -> bool {
    let mut engine = engine_from(fen);
    engine
        .legal_steps(0)
        .iter()
        .any(|s| s.kind == MoveType::CastleKingside)
}

#[test]
fn both_sides_castle_from_home() {
    let mut engine = engine_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    let kinds: Vec<_> = engine.legal_steps(0).iter().map(|s| s.kind).collect();
    assert!(kinds.contains(&MoveType::CastleKingside));
    assert!(kinds.contains(&MoveType::CastleQueenside));

    let step = find_step(&mut engine, "0-0");
    engine.commit_step(&step);
    assert_eq!(engine.export_pos_to_fen(0), "r3k2r/8/8/8/8/8/8/R4RK1 b kq -");
}

#[test]
fn rights_flag_is_required() {
    assert!(can_castle_kingside("4k3/8/8/8/8/8/8/4K2R w K -"));
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4K2R w - -"));
}

#[test]
fn attacked_transit_square_forbids_castling() {
    // black rook on f8 covers f1
    assert!(!can_castle_kingside("4kr2/8/8/8/8/8/8/4K2R w K -"));
    // black rook on g8 covers the landing square
    assert!(!can_castle_kingside("4k1r1/8/8/8/8/8/8/4K2R w K -"));
    // a piece in between
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4KB1R w K -"));
}

#[test]
fn no_castling_out_of_check() {
    assert!(!can_castle_kingside("4r1k1/8/8/8/8/8/8/4K2R w K -"));
}

#[test]
fn rook_and_king_moves_drop_rights() {
    let mut engine = engine_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    play(&mut engine, &["Rh1-h2", "Ra8-a7"]);
    let rights: CastlingRights = engine.position(0).castling;
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
    assert!(!rights.has(Color::Black, false));
    assert!(rights.has(Color::Black, true));

    play(&mut engine, &["Ke1-d1"]);
    assert!(!engine.position(0).castling.any_for(Color::White));
    assert!(!engine
        .legal_steps(0)
        .iter()
        .any(|s| s.kind == MoveType::CastleQueenside));
}

#[test]
fn capturing_a_rook_removes_its_right() {
    let mut engine = engine_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    play(&mut engine, &["Ra1xa8"]);
    let rights = engine.position(0).castling;
    assert!(!rights.has(Color::Black, false));
    assert!(rights.has(Color::Black, true));
    assert!(!rights.has(Color::White, false));
}
