use serde::Deserialize;

use pocket_chess::board::{EndOfGame, Engine, SearchConfig, SearchOutcome, MATE};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn problems(kind: &str) -> Vec<Problem> {
    let data = include_str!("data/mate_in_one.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid mate_in_one.json");
    set.problems.into_iter().filter(|p| p.kind == kind).collect()
}

fn load(fen: &str) -> Engine {
    let mut engine = Engine::new();
    assert!(engine.load_board_from_fen(fen), "bad fen: {fen}");
    engine
}

#[test]
fn listed_solutions_mate() {
    for problem in problems("Mate in One") {
        let mut engine = load(&problem.fen);
        let step = engine
            .resolve_notation(0, &problem.moves)
            .unwrap_or_else(|err| panic!("{}: {err}", problem.fen));
        engine.commit_step(&step);
        assert!(
            engine.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn engine_finds_every_mate() {
    for problem in problems("Mate in One") {
        let mut engine = load(&problem.fen);
        let config = SearchConfig::time(0).with_max_level(4);
        let SearchOutcome::Move { step, score, .. } = engine.solve(&config) else {
            panic!("no move for {}", problem.fen);
        };
        assert_eq!(score, MATE - 1, "fen: {} move: {step}", problem.fen);
        engine.commit_step(&step);
        assert!(engine.is_checkmate(), "fen: {} move: {step}", problem.fen);
    }
}

#[test]
fn stalemates_are_recognised() {
    for problem in problems("Stalemate") {
        let mut engine = load(&problem.fen);
        assert!(engine.is_stalemate());
        assert_eq!(
            engine.solve(&SearchConfig::time(0).with_max_level(3)),
            SearchOutcome::GameOver(EndOfGame::Stalemate)
        );
    }
}
