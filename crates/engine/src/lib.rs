//! Placement helpers on top of the core session.
//!
//! Bots and scripted tests think in final placements ("put this piece at
//! column 4, rotated east") rather than in individual key presses. This crate
//! turns such a target into the command sequence a player would send, and
//! can search for a good target with a simple board evaluation.

pub mod features;
pub mod place;
pub mod search;

pub use features::{board_features, BoardFeatures};
pub use place::{apply_place, PlaceError};
pub use search::{best_placement, Placement, Weights};
