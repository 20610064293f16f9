//! Integration tests for the game session

use blockfall::core::collision;
use blockfall::core::{
    Board, EventSink, GameEvent, PieceQueue, Randomizer, Session, SessionConfig,
};
use blockfall::engine::apply_place;
use blockfall::types::{Command, DropSource, Phase, PieceKind, Rotation, BOARD_WIDTH};

fn scripted(board: Board, pieces: &[PieceKind]) -> Session {
    Session::with_setup(SessionConfig::default(), board, PieceQueue::scripted(pieces))
}

#[test]
fn test_game_lifecycle() {
    let mut session = Session::new(SessionConfig::default().with_seed(12345));
    assert_eq!(session.phase(), Phase::Running);
    assert!(session.active().is_some());

    assert!(session.pause().paused());
    assert!(session.resume().playable());

    session.hard_drop();
    assert_eq!(session.piece_id(), 2);

    let snap = session.restart();
    assert_eq!(snap.episode_id, 1);
    assert_eq!(snap.piece_id, 1);
    assert_eq!(snap.score, 0);
}

#[test]
fn test_gap_row_clears_exactly_one_line() {
    let mut board = Board::new();
    for x in 4..BOARD_WIDTH as i8 - 1 {
        board.set(x, 21, Some(PieceKind::L)).unwrap();
    }
    let mut session = scripted(board, &[PieceKind::I]);

    // Horizontal I fills columns 0-3; column 9 stays open.
    let snap = apply_place(&mut session, 0, Rotation::North).unwrap();
    assert_eq!(snap.clear, None);
    assert_eq!(snap.lines, 0);
    assert_eq!(session.board().occupied_count(), 9);
    let score_before = snap.score;

    // Vertical I (box column 2) drops into the gap.
    let snap = apply_place(&mut session, 7, Rotation::East).unwrap();
    let clear = snap.clear.expect("one row should clear");
    assert_eq!(clear.lines, 1);
    assert_eq!(clear.bonus, 100);
    assert_eq!(snap.lines, 1);
    assert_eq!(snap.score, score_before + 36 + 100);

    // 9 + 4 cells locked, one full row of 10 removed.
    assert_eq!(session.board().occupied_count(), 3);
    assert_eq!(snap.board.len(), session.board().height() as usize);
    for y in 19..22 {
        assert_eq!(session.board().get(9, y), Ok(Some(PieceKind::I)));
    }
}

#[test]
fn test_blocked_spawn_ends_game_until_restart() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 1, Some(PieceKind::Z)).unwrap();
    }
    let mut session = scripted(board, &[PieceKind::O]);
    assert!(session.game_over());

    let before = session.snapshot();
    for cmd in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDrop,
        Command::Tick,
        Command::HardDrop,
        Command::Pause,
        Command::Resume,
    ] {
        assert_eq!(session.apply(cmd), before, "{cmd:?} changed a finished game");
    }

    let snap = session.apply(Command::Restart);
    assert_eq!(snap.phase, Phase::Running);
    assert_eq!(session.board().occupied_count(), 0);
    assert!(snap.active.is_some());
}

#[test]
fn test_hard_drop_matches_repeated_soft_drops() {
    for kind in PieceKind::ALL {
        let mut hard = scripted(Board::new(), &[kind]);
        let mut soft = hard.clone();

        let ghost = hard.ghost_y().unwrap();
        hard.hard_drop();

        let mut steps = 0;
        while !collision::is_grounded(soft.board(), &soft.active().unwrap()) {
            soft.soft_drop(DropSource::Timer);
            steps += 1;
        }
        assert_eq!(soft.active().unwrap().y, ghost, "{kind:?}");
        assert_eq!(soft.score(), 0);

        soft.soft_drop(DropSource::Timer);
        assert_eq!(soft.board(), hard.board(), "{kind:?}");
        assert_eq!(hard.score(), 2 * steps);
    }
}

#[test]
fn test_rotate_against_the_wall_is_rejected() {
    let mut session = scripted(Board::new(), &[PieceKind::I]);
    for _ in 0..3 {
        session.rotate();
    }
    assert_eq!(session.active().unwrap().rotation, Rotation::West);
    for _ in 0..10 {
        session.move_left();
    }
    let pinned = session.active().unwrap();
    assert_eq!(pinned.cells().iter().map(|c| c.0).min(), Some(0));

    let snap = session.rotate();
    assert_eq!(session.active(), Some(pinned));
    assert_eq!(snap.active.unwrap().rotation, Rotation::West);
}

#[test]
fn test_pause_ignores_ticks_and_moves() {
    let mut session = Session::new(SessionConfig::default().with_seed(7));
    session.pause();
    let frozen = session.snapshot();

    for _ in 0..50 {
        session.tick();
        session.move_right();
        session.soft_drop(DropSource::User);
    }
    assert_eq!(session.snapshot(), frozen);

    session.resume();
    session.tick();
    assert_eq!(
        session.active().unwrap().y,
        frozen.active.unwrap().y + 1
    );
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut session = Session::new(SessionConfig::default());
    let mut snap = session.snapshot();
    snap.board[21][0] = Some(PieceKind::Z);
    snap.score = 999;

    assert_eq!(session.board().get(0, 21), Ok(None));
    assert_eq!(session.score(), 0);
    assert_ne!(session.move_left(), snap);
}

#[test]
fn test_same_seed_same_game() {
    for randomizer in [Randomizer::Uniform, Randomizer::Bag] {
        let config = SessionConfig::default()
            .with_seed(424242)
            .with_randomizer(randomizer);
        let mut a = Session::new(config);
        let mut b = Session::new(config);
        for i in 0..200 {
            let cmd = match i % 5 {
                0 => Command::MoveLeft,
                1 => Command::Rotate,
                2 => Command::MoveRight,
                3 => Command::Tick,
                _ => Command::HardDrop,
            };
            assert_eq!(a.apply(cmd), b.apply(cmd));
        }
    }
}

#[test]
fn test_bag_deals_every_piece_per_seven() {
    let config = SessionConfig::default()
        .with_seed(3)
        .with_randomizer(Randomizer::Bag);
    let mut session = Session::new(config);

    // Seven North pieces stack at most 13 rows high.
    let mut dealt = Vec::new();
    for _ in 0..7 {
        dealt.push(session.active().unwrap().kind);
        session.hard_drop();
    }
    assert!(session.is_running());
    dealt.sort_by_key(|k| k.index());
    assert_eq!(dealt, PieceKind::ALL.to_vec());
}

#[derive(Default)]
struct Recorder {
    cleared: u32,
    levels: Vec<u32>,
    over: bool,
}

impl EventSink for Recorder {
    fn on_lines_cleared(&mut self, clear: blockfall::core::ClearResult) {
        self.cleared += clear.lines;
    }

    fn on_level_changed(&mut self, level: u32, _drop_interval_ms: u32) {
        self.levels.push(level);
    }

    fn on_game_over(&mut self, _score: u32, _lines: u32, _level: u32) {
        self.over = true;
    }
}

#[test]
fn test_events_reach_the_sink() {
    let mut session = scripted(Board::new(), &[PieceKind::O]);
    let mut sink = Recorder::default();

    // Five O pieces side by side clear two rows.
    for x in [-1, 1, 3, 5, 7] {
        apply_place(&mut session, x, Rotation::North).unwrap();
        session.dispatch_events(&mut sink);
    }
    assert_eq!(sink.cleared, 2);
    assert_eq!(session.lines(), 2);
    assert!(sink.levels.is_empty());

    // Stack O pieces in one column until the spawn is blocked.
    while !session.game_over() {
        session.hard_drop();
    }
    session.dispatch_events(&mut sink);
    assert!(sink.over);
    assert!(session.take_events().is_empty());
}

#[test]
fn test_events_serialize_for_a_bridge() {
    let mut session = scripted(Board::new(), &[PieceKind::I]);
    for x in [0, 4] {
        apply_place(&mut session, x, Rotation::North).unwrap();
    }
    let snap = session.snapshot();
    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["phase"], "running");
    assert_eq!(json["piece_id"], 3);

    let event = GameEvent::GameOver {
        score: 1,
        lines: 2,
        level: 1,
    };
    let round: GameEvent = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
    assert_eq!(round, event);
}

#[test]
fn test_restart_after_level_up_restores_gravity() {
    let mut session = scripted(Board::new(), &[PieceKind::O]);
    let mut sink = Recorder::default();

    // Each row of five O pieces clears two lines; five rows reach level 2.
    for _ in 0..5 {
        for x in [-1, 1, 3, 5, 7] {
            apply_place(&mut session, x, Rotation::North).unwrap();
        }
    }
    assert_eq!(session.level(), 2);
    let last = session.pause();
    assert_eq!(last.clear, None);

    session.restart();
    session.dispatch_events(&mut sink);
    assert_eq!(sink.cleared, 10);
    assert_eq!(sink.levels, vec![2, 1]);
    assert_eq!(session.drop_interval_ms(), 400);
}
