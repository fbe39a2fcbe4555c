//! Perft (performance test) for move generation correctness.

use super::engine_from;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6",
        depths: &[(1, 31), (2, 707)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - -",
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -",
        depths: &[(1, 26), (2, 568)],
    },
];

#[test]
fn perft_suite() {
    for pos in TEST_POSITIONS {
        let mut engine = engine_from(pos.fen);
        for &(depth, expected) in pos.depths {
            let nodes = engine.perft(depth);
            assert_eq!(nodes, expected, "{} depth {depth}", pos.name);
        }
        assert_eq!(engine.export_pos_to_fen(0), pos.fen, "{} board restored", pos.name);
    }
}

#[test]
fn legal_steps_match_perft_one() {
    for pos in TEST_POSITIONS {
        let mut engine = engine_from(pos.fen);
        let legal = engine.legal_steps(0).len() as u64;
        assert_eq!(legal, pos.depths[0].1, "{}", pos.name);
    }
}
