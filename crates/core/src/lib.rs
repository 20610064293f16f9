//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of a falling-block puzzle game and nothing else.
//! It has no timers, no rendering and no I/O: a host drives a [`Session`] with
//! commands and draws the [`GameSnapshot`] each command returns.
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid (two hidden spawn rows) with row clearing
//! - [`pieces`]: tetromino catalog, four orientations per kind
//! - [`active`]: the falling piece
//! - [`collision`]: placement legality, drop distance, landing row
//! - [`clear`] and [`scoring`]: line clears, score table, level and gravity
//! - [`rng`]: seeded piece queue (uniform or 7-bag)
//! - [`session`]: the state machine that ties everything together
//! - [`snapshot`]: read-only copy of a session for views
//! - [`events`]: outbound notifications (line clears, level ups, game over)
//! - [`clock`]: gravity accumulator for hosts that need one
//!
//! # Rules
//!
//! - Rotation is a clockwise quarter turn in place; no kicks
//! - Soft drop by the player scores 1 per row, hard drop 2 per row
//! - Line clears score `[0, 100, 300, 500, 800]` times the level
//! - Level is `lines / 10 + 1`; gravity is `max(50, 400 - 30 * (level - 1))` ms
//! - A spawned piece that does not fit ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(12345));
//!
//! session.move_right();
//! session.rotate();
//! let snap = session.hard_drop();
//!
//! assert!(snap.score > 0); // hard drop awards points
//! assert_eq!(snap.piece_id, 2);
//! ```

pub mod active;
pub mod board;
pub mod clear;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use board::Board;
pub use clear::ClearResult;
pub use clock::DropClock;
pub use config::{Randomizer, SessionConfig};
pub use error::{BoardError, CoreError, Result};
pub use events::{EventSink, GameEvent, NoopSink};
pub use pieces::{get_shape, PieceShape};
pub use rng::PieceQueue;
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
