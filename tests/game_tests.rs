//! Games played through the controller.

use std::sync::Arc;

use parking_lot::Mutex;

use pocket_chess::board::{EndOfGame, SearchParams, Square, START_FEN};
use pocket_chess::game::{
    EngineJob, EngineTime, GameController, GameRecord, GameStatus, MoveError, RecordError,
};

fn sq(name: &str) -> Square {
    name.parse().expect("square name")
}

fn quick_controller() -> GameController {
    let mut game = GameController::new();
    game.set_time(EngineTime::MIN);
    game.set_params(SearchParams {
        max_level: 2,
        ..SearchParams::default()
    });
    game
}

#[test]
fn user_and_engine_alternate() {
    let mut game = quick_controller();
    assert_eq!(game.new_game(true), Ok(None));
    assert!(game.is_user_turn());

    game.play_user_move(sq("e2"), sq("e4"), None).expect("e2-e4");
    assert!(!game.is_user_turn());
    let reply = game.play_engine_move().expect("engine reply");
    assert!(reply.step.is_some());
    assert!(game.is_user_turn());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn engine_self_play_stays_consistent() {
    let mut game = quick_controller();
    for _ in 0..12 {
        match game.play_engine_move() {
            Ok(report) if report.status.is_over() => break,
            Ok(_) => {}
            Err(err) => panic!("engine move failed: {err}"),
        }
    }
    let fen = game.engine().export_pos_to_fen(0);
    let played = game.history().len();

    game.replay();
    assert_eq!(game.engine().export_pos_to_fen(0), fen);
    assert_eq!(game.history().len(), played);

    let bytes = game.record().to_bytes().expect("encode");
    assert_eq!(bytes.len(), 4 + played * 8);
    let mut copy = quick_controller();
    copy.restore(GameRecord::from_bytes(&bytes).expect("decode"))
        .expect("restore");
    assert_eq!(copy.engine().export_pos_to_fen(0), fen);
}

#[test]
fn finished_game_refuses_more_moves() {
    let mut game = quick_controller();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        game.play_user_move(sq(from), sq(to), None).expect("fool's mate");
    }
    assert_eq!(game.status(), GameStatus::Over(EndOfGame::Checkmate));
    assert_eq!(game.play_engine_move(), Err(MoveError::GameOver));

    game.new_game(true).expect("new game");
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.engine().export_pos_to_fen(0), START_FEN);
}

#[test]
fn corrupt_records_are_rejected() {
    assert_eq!(
        GameRecord::from_bytes(&[1, 0]),
        Err(RecordError::Truncated { needed: 4, found: 2 })
    );
    assert_eq!(
        GameRecord::from_bytes(&[9, 0, 0, 0]),
        Err(RecordError::UnsupportedVersion { found: 9 })
    );
}

#[test]
fn background_job_plays_for_black() {
    let controller = Arc::new(Mutex::new(quick_controller()));
    controller
        .lock()
        .play_user_move(sq("d2"), sq("d4"), None)
        .expect("d2-d4");

    let job = EngineJob::spawn(Arc::clone(&controller)).expect("spawn engine thread");
    let report = job.wait().expect("engine move");
    let step = report.step.expect("a move");
    assert!(step.piece < 0);
    assert_eq!(controller.lock().history().len(), 2);
}

#[test]
fn time_setting_is_clamped() {
    let mut game = GameController::new();
    assert_eq!(game.time(), EngineTime::MAX);
    game.set_time(EngineTime::new(0));
    assert_eq!(game.time(), EngineTime::MIN);
    assert_eq!(game.time().millis(), 15_000);
    game.set_time(game.time().longer().longer());
    assert_eq!(game.time().steps(), 3);
}
