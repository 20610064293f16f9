//! Outbound notifications
//!
//! The session queues a [`GameEvent`] whenever something a view may want to
//! react to happens. Callers either pull them with
//! [`Session::take_events`](crate::Session::take_events) or push them into an
//! [`EventSink`] with [`Session::dispatch_events`](crate::Session::dispatch_events).

use serde::{Deserialize, Serialize};

use crate::clear::ClearResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// Rows were removed by a lock
    LinesCleared { lines: u32, bonus: u32 },
    /// Level went up; gravity should now run at `drop_interval_ms`
    LevelChanged { level: u32, drop_interval_ms: u32 },
    /// A freshly spawned piece did not fit
    GameOver { score: u32, lines: u32, level: u32 },
}

impl GameEvent {
    pub fn lines_cleared(clear: ClearResult) -> Self {
        GameEvent::LinesCleared {
            lines: clear.lines,
            bonus: clear.bonus,
        }
    }

    /// Route this event to the matching sink callback
    pub fn dispatch(self, sink: &mut (impl EventSink + ?Sized)) {
        match self {
            GameEvent::LinesCleared { lines, bonus } => {
                sink.on_lines_cleared(ClearResult { lines, bonus })
            }
            GameEvent::LevelChanged {
                level,
                drop_interval_ms,
            } => sink.on_level_changed(level, drop_interval_ms),
            GameEvent::GameOver {
                score,
                lines,
                level,
            } => sink.on_game_over(score, lines, level),
        }
    }
}

/// Receiver for session notifications. Every callback defaults to a no-op.
pub trait EventSink {
    fn on_lines_cleared(&mut self, _clear: ClearResult) {}

    fn on_level_changed(&mut self, _level: u32, _drop_interval_ms: u32) {}

    fn on_game_over(&mut self, _score: u32, _lines: u32, _level: u32) {}
}

/// Drops everything
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {}

/// Collects events back into a list
impl EventSink for Vec<GameEvent> {
    fn on_lines_cleared(&mut self, clear: ClearResult) {
        self.push(GameEvent::lines_cleared(clear));
    }

    fn on_level_changed(&mut self, level: u32, drop_interval_ms: u32) {
        self.push(GameEvent::LevelChanged {
            level,
            drop_interval_ms,
        });
    }

    fn on_game_over(&mut self, score: u32, lines: u32, level: u32) {
        self.push(GameEvent::GameOver {
            score,
            lines,
            level,
        });
    }
}
