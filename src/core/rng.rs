//! Deterministic random number generation with named streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for dice, deck draws and quiz picks
//!
//! A session derives one stream per randomness domain, so drawing an extra
//! bank card never shifts the dice sequence:
//!
//! ```
//! use bizboard::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut dice = root.for_context("dice");
//! let mut bank = root.for_context("bank");
//!
//! let sum = dice.roll_dice(2, 6);
//! assert!((2..=12).contains(&sum));
//!
//! // Same seed, same context, same stream
//! let mut bank_again = GameRng::new(42).for_context("bank");
//! assert_eq!(bank.gen_range_usize(0..100), bank_again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping a well-distributed sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Sum of `count` dice with `sides` faces each.
    ///
    /// Zero-sided dice contribute nothing.
    pub fn roll_dice(&mut self, count: u8, sides: u8) -> u32 {
        if sides == 0 {
            return 0;
        }
        (0..count)
            .map(|_| self.inner.gen_range(1..=u32::from(sides)))
            .sum()
    }

    /// Uniform pick from `slice`; `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// The per-domain streams a session draws from.
#[derive(Clone, Debug)]
pub struct RngStreams {
    /// Dice rolls when the engine rolls on the player's behalf.
    pub dice: GameRng,
    /// Bank deck draws.
    pub bank: GameRng,
    /// Action deck draws.
    pub action: GameRng,
    /// Question picks.
    pub quiz: GameRng,
}

impl RngStreams {
    /// Derive all streams from one seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            dice: root.for_context("dice"),
            bank: root.for_context("bank"),
            action: root.for_context("action"),
            quiz: root.for_context("quiz"),
        }
    }
}
