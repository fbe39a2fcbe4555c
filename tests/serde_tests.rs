#![cfg(feature = "serde")]

use pocket_chess::board::{CheckType, MoveType, SearchParams, Step, KNIGHT, NO_FIG};
use pocket_chess::game::GameRecord;

#[test]
fn step_survives_json() {
    let step = Step::new(62, 45, KNIGHT, NO_FIG);
    let json = serde_json::to_string(&step).expect("serialize");
    let back: Step = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, step);
    assert_eq!(back.kind, MoveType::Simple);
    assert_eq!(back.check, CheckType::None);
}

#[test]
fn params_and_records_survive_json() {
    let params = SearchParams {
        null_move: true,
        stable_iterations: Some(3),
        ..SearchParams::default()
    };
    let json = serde_json::to_string(&params).expect("serialize");
    assert_eq!(serde_json::from_str::<SearchParams>(&json).expect("deserialize"), params);

    let record = GameRecord {
        user_plays_white: false,
        steps: vec![Step::new(52, 36, 1, NO_FIG)],
    };
    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(serde_json::from_str::<GameRecord>(&json).expect("deserialize"), record);
}
