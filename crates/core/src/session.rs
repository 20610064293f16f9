//! Game session - the state machine that owns a game
//!
//! Ties together the board, the falling piece, the piece queue and scoring.
//! Every public command runs synchronously and returns a fresh
//! [`GameSnapshot`]. Commands sent while the session is not `Running` change
//! nothing and just return the current snapshot; `restart` works from any
//! phase.

use tracing::{debug, info, trace};

use crate::active::ActivePiece;
use crate::board::Board;
use crate::clear::{self, ClearResult};
use crate::collision;
use crate::config::SessionConfig;
use crate::events::{EventSink, GameEvent};
use crate::rng::PieceQueue;
use crate::scoring::{drop_interval_ms, hard_drop_points, level_for_lines, soft_drop_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{Command, DropSource, Phase, PieceKind};

/// Most notifications kept between drains; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 64;

/// One game, from spawn of the first piece to game over.
///
/// Notifications queue up until the host calls [`Session::take_events`] or
/// [`Session::dispatch_events`]. A host that never drains them keeps only the
/// latest [`MAX_PENDING_EVENTS`].
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    queue: PieceQueue,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    /// Increments on every restart
    episode_id: u32,
    /// Count of successfully spawned pieces in this episode
    piece_id: u32,
    /// Clear produced by the command currently being handled
    last_clear: Option<ClearResult>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Start a game on an empty board with the configured randomizer
    pub fn new(config: SessionConfig) -> Self {
        let queue = PieceQueue::new(config.randomizer, config.seed);
        Self::with_setup(config, Board::new(), queue)
    }

    /// Start a game on a prepared board with a given queue.
    ///
    /// The first piece is spawned immediately; if it does not fit, the
    /// session starts in `GameOver`.
    pub fn with_setup(config: SessionConfig, board: Board, mut queue: PieceQueue) -> Self {
        let next = queue.draw();
        let mut session = Self {
            config,
            board,
            active: None,
            next,
            queue,
            phase: Phase::Running,
            score: 0,
            lines: 0,
            level: 1,
            episode_id: 0,
            piece_id: 0,
            last_clear: None,
            events: Vec::new(),
        };
        session.spawn_piece();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        self.active.map(|piece| collision::landing_y(&self.board, &piece))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_cell_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = NextSnapshot::from(self.next);
        out.clear = self.last_clear;
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take every queued notification, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Push every queued notification into `sink`, oldest first
    pub fn dispatch_events(&mut self, sink: &mut (impl EventSink + ?Sized)) {
        for event in self.events.drain(..) {
            event.dispatch(sink);
        }
    }

    /// Apply a command
    pub fn apply(&mut self, command: Command) -> GameSnapshot {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(DropSource::User),
            Command::Tick => self.tick(),
            Command::HardDrop => self.hard_drop(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Restart => self.restart(),
        }
    }

    pub fn move_left(&mut self) -> GameSnapshot {
        self.try_shift(-1);
        self.finish()
    }

    pub fn move_right(&mut self) -> GameSnapshot {
        self.try_shift(1);
        self.finish()
    }

    /// Quarter turn clockwise in place; rejected if it does not fit
    pub fn rotate(&mut self) -> GameSnapshot {
        if let Some(piece) = self.playable_piece() {
            if let Some(turned) = collision::try_rotate(&self.board, &piece) {
                self.active = Some(turned);
            }
        }
        self.finish()
    }

    /// One row down; locks the piece if the row below is blocked
    pub fn soft_drop(&mut self, source: DropSource) -> GameSnapshot {
        if let Some(piece) = self.playable_piece() {
            match collision::try_shift(&self.board, &piece, 0, 1) {
                Some(moved) => {
                    self.active = Some(moved);
                    self.score = self.score.saturating_add(soft_drop_points(source));
                }
                None => self.lock_piece(),
            }
        }
        self.finish()
    }

    /// Gravity step from the host timer
    pub fn tick(&mut self) -> GameSnapshot {
        self.soft_drop(DropSource::Timer)
    }

    /// Drop to the landing row and lock in one step
    pub fn hard_drop(&mut self) -> GameSnapshot {
        if let Some(piece) = self.playable_piece() {
            let distance = collision::drop_distance(&self.board, &piece);
            self.active = Some(piece.shifted(0, distance));
            self.score = self.score.saturating_add(hard_drop_points(distance as u32));
            self.lock_piece();
        }
        self.finish()
    }

    pub fn pause(&mut self) -> GameSnapshot {
        self.last_clear = None;
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            debug!("paused");
        }
        self.finish()
    }

    pub fn resume(&mut self) -> GameSnapshot {
        self.last_clear = None;
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            debug!("resumed");
        }
        self.finish()
    }

    /// Reset everything and start a new episode.
    ///
    /// The piece queue keeps its position, so consecutive episodes get
    /// different pieces while the whole run stays reproducible from the seed.
    /// Undrained notifications are kept, and a level reset is reported as a
    /// `LevelChanged`.
    pub fn restart(&mut self) -> GameSnapshot {
        let episode_id = self.episode_id.wrapping_add(1);
        let mut queue = std::mem::take(&mut self.queue);
        let next = queue.draw();
        let events = std::mem::take(&mut self.events);
        let old_level = self.level;

        *self = Self {
            config: self.config,
            board: Board::new(),
            active: None,
            next,
            queue,
            phase: Phase::Running,
            score: 0,
            lines: 0,
            level: 1,
            episode_id,
            piece_id: 0,
            last_clear: None,
            events,
        };
        if old_level != self.level {
            self.push_event(GameEvent::LevelChanged {
                level: self.level,
                drop_interval_ms: self.drop_interval_ms(),
            });
        }
        info!(episode_id, "restarted");
        self.spawn_piece();
        self.finish()
    }

    /// The active piece, if commands are currently accepted
    fn playable_piece(&mut self) -> Option<ActivePiece> {
        self.last_clear = None;
        if self.phase != Phase::Running {
            return None;
        }
        self.active
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let dropped = self.events.remove(0);
            trace!(?dropped, "event queue full, dropping oldest");
        }
        self.events.push(event);
    }

    fn try_shift(&mut self, dx: i8) {
        if let Some(piece) = self.playable_piece() {
            if let Some(moved) = collision::try_shift(&self.board, &piece, dx, 0) {
                self.active = Some(moved);
            }
        }
    }

    fn finish(&self) -> GameSnapshot {
        self.snapshot()
    }

    /// Spawn the queued piece and draw a new one.
    ///
    /// Returns false (and ends the game) if the spawn cells are blocked.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.next;
        self.next = self.queue.draw();

        let piece = ActivePiece::spawn(kind);
        if !collision::fits(&self.board, &piece) {
            self.active = None;
            self.phase = Phase::GameOver;
            self.push_event(GameEvent::GameOver {
                score: self.score,
                lines: self.lines,
                level: self.level,
            });
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                ?kind,
                "game over: spawn blocked"
            );
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        trace!(?kind, next = ?self.next, piece_id = self.piece_id, "spawned");
        true
    }

    /// Write the active piece into the board, resolve clears, then spawn
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let locked = self
            .board
            .lock_piece(&piece.shape(), piece.x, piece.y, piece.kind);
        debug_assert!(locked, "active piece overlapped the board at lock");
        trace!(kind = ?piece.kind, x = piece.x, y = piece.y, "locked");

        if let Some(result) = clear::resolve(&mut self.board, self.level) {
            self.lines = self.lines.saturating_add(result.lines);
            self.score = self.score.saturating_add(result.bonus);
            self.last_clear = Some(result);
            self.push_event(GameEvent::lines_cleared(result));
            debug!(
                lines = result.lines,
                bonus = result.bonus,
                total = self.lines,
                "lines cleared"
            );

            let level = level_for_lines(self.lines);
            if level != self.level {
                self.level = level;
                let interval = drop_interval_ms(level);
                self.push_event(GameEvent::LevelChanged {
                    level,
                    drop_interval_ms: interval,
                });
                info!(level, drop_interval_ms = interval, "level up");
            }
        }

        self.spawn_piece();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
