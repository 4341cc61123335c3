//! Deterministic dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the same roll sequence
//! - **Scripted**: a die can replay a fixed cycle of faces for tests and
//!   turn replays
//! - **Queryable**: the last total and each die's last face remain readable
//!   until the next roll
//!
//! Rolling is the only source of nondeterminism in the engine; everything
//! else is a pure function of the roll outcome and the current state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A single six-sided die.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. A scripted die cycles through a fixed face list instead.
#[derive(Clone, Debug)]
pub struct Die {
    source: DieSource,
    last: u8,
}

#[derive(Clone, Debug)]
enum DieSource {
    Rng(ChaCha8Rng),
    Script { faces: Vec<u8>, pos: usize },
}

impl Die {
    /// Number of faces on every die.
    pub const FACES: u8 = 6;

    /// Create a seeded die.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            source: DieSource::Rng(ChaCha8Rng::seed_from_u64(seed)),
            last: 0,
        }
    }

    /// Create a die that cycles through `faces` forever.
    ///
    /// Every face must be in `1..=6`.
    #[must_use]
    pub fn scripted(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "Scripted die needs at least one face");
        assert!(
            faces.iter().all(|&f| (1..=Self::FACES).contains(&f)),
            "Scripted faces must be in 1..=6"
        );
        Self {
            source: DieSource::Script { faces, pos: 0 },
            last: 0,
        }
    }

    /// Roll the die, returning a face in `1..=6`.
    pub fn roll(&mut self) -> u8 {
        let face = match &mut self.source {
            DieSource::Rng(rng) => rng.gen_range(1..=Self::FACES),
            DieSource::Script { faces, pos } => {
                let face = faces[*pos];
                *pos = (*pos + 1) % faces.len();
                face
            }
        };
        self.last = face;
        face
    }

    /// The face shown by the most recent roll, or 0 if never rolled.
    #[must_use]
    pub fn last_value(&self) -> u8 {
        self.last
    }
}

/// A set of dice rolled together.
///
/// `roll` rolls every die and returns the sum; the sum and the individual
/// faces stay queryable until the next roll.
#[derive(Clone, Debug)]
pub struct Dice {
    dice: SmallVec<[Die; 2]>,
    last_total: u32,
}

impl Dice {
    /// Create `count` independently seeded dice.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        assert!(count > 0, "Must have at least 1 die");
        let dice = (0..count as u64)
            .map(|i| Die::new(seed.wrapping_add(i.wrapping_mul(0x9E37_79B9_7F4A_7C15))))
            .collect();
        Self {
            dice,
            last_total: 0,
        }
    }

    /// Create a single die that replays `faces` in a cycle.
    #[must_use]
    pub fn scripted(faces: Vec<u8>) -> Self {
        Self::from_dice(vec![Die::scripted(faces)])
    }

    /// Aggregate pre-built dice (e.g. a mix of seeded and scripted).
    #[must_use]
    pub fn from_dice(dice: Vec<Die>) -> Self {
        assert!(!dice.is_empty(), "Must have at least 1 die");
        Self {
            dice: SmallVec::from_vec(dice),
            last_total: 0,
        }
    }

    /// Roll every die and return the sum.
    pub fn roll(&mut self) -> u32 {
        self.last_total = self.dice.iter_mut().map(|d| u32::from(d.roll())).sum();
        self.last_total
    }

    /// The sum of the most recent roll, or 0 if never rolled.
    #[must_use]
    pub fn last_total(&self) -> u32 {
        self.last_total
    }

    /// The face shown by each die in the most recent roll.
    #[must_use]
    pub fn last_values(&self) -> SmallVec<[u8; 2]> {
        self.dice.iter().map(Die::last_value).collect()
    }

    /// Number of dice in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}
