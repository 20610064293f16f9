//! Piece queue - where the next piece comes from
//!
//! Two seeded policies, see [`Randomizer`]:
//! - **Uniform**: every draw picks one of the seven kinds with equal odds,
//!   repeats allowed.
//! - **Bag**: the seven kinds are shuffled into a bag and dealt out; a fresh
//!   bag is shuffled once it runs dry, so every block of seven draws is a
//!   permutation.
//!
//! A queue can also be scripted with a fixed, repeating sequence, which is
//! what tests and puzzle setups use.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::Randomizer;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Source {
    Uniform {
        rng: StdRng,
    },
    Bag {
        rng: StdRng,
        bag: ArrayVec<PieceKind, 7>,
    },
    Scripted {
        pieces: Vec<PieceKind>,
        index: usize,
    },
}

/// Seeded piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    source: Source,
}

impl PieceQueue {
    /// Create a queue for a policy and seed. The same pair always deals the
    /// same sequence.
    pub fn new(randomizer: Randomizer, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let source = match randomizer {
            Randomizer::Uniform => Source::Uniform { rng },
            Randomizer::Bag => Source::Bag {
                rng,
                bag: ArrayVec::new(),
            },
        };
        Self { source }
    }

    /// A queue that cycles through `pieces` forever.
    ///
    /// An empty slice falls back to cycling every kind in catalog order.
    pub fn scripted(pieces: &[PieceKind]) -> Self {
        let pieces = if pieces.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            pieces.to_vec()
        };
        Self {
            source: Source::Scripted { pieces, index: 0 },
        }
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform { rng } => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Source::Bag { rng, bag } => {
                if bag.is_empty() {
                    bag.extend(PieceKind::ALL);
                    bag.shuffle(rng);
                }
                // Refilled above, never empty here.
                bag.pop().unwrap_or(PieceKind::I)
            }
            Source::Scripted { pieces, index } => {
                let kind = pieces[*index % pieces.len()];
                *index = (*index + 1) % pieces.len();
                kind
            }
        }
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self.source, Source::Scripted { .. })
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(Randomizer::default(), 1)
    }
}
