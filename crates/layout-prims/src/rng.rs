//! Explicit random stream (uniform floats and bounded integers).
//!
//! Model
//! - A `RandomStream` owns its generator state. There is no process-wide
//!   stream: give each thread (or each sample) its own stream, for example
//!   via `ReplayToken::stream`.
//! - Draws are deterministic for a fixed seed and draw sequence.
//!
//! Bounded draws
//! - `BoundedDraw::Modulo` reduces a 32-bit draw with `% n`, or a 64-bit draw
//!   when `n` exceeds `u32::MAX`, so every value in `[0, n)` is reachable.
//!   This is mildly biased when `n` does not divide the draw range. It is the
//!   default so that sampling orders stay reproducible with existing layouts.
//! - `BoundedDraw::Unbiased` uses rejection sampling (`Rng::gen_range`).
//!
//! Not suitable for cryptographic use in either mode.

use crate::cfg::DEFAULT_SEED;
use crate::error::PrimError;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Reduction used by `RandomStream::bounded_int`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundedDraw {
    #[default]
    Modulo,
    Unbiased,
}

/// Stream configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamCfg {
    pub seed: u64,
    pub bounded: BoundedDraw,
}

impl Default for StreamCfg {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bounded: BoundedDraw::Modulo,
        }
    }
}

/// Caller-owned pseudo-random stream.
#[derive(Clone, Debug)]
pub struct RandomStream {
    rng: StdRng,
    bounded: BoundedDraw,
}

impl RandomStream {
    pub fn new(cfg: StreamCfg) -> Self {
        tracing::trace!(seed = cfg.seed, bounded = ?cfg.bounded, "random stream");
        Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            bounded: cfg.bounded,
        }
    }

    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StreamCfg {
            seed,
            ..StreamCfg::default()
        })
    }

    /// Uniform draw in `[0, 1)` (32-bit resolution).
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        self.rng.next_u32() as f64 / 4_294_967_296.0
    }

    /// Integer in `[0, n-1]`. Rejects `n <= 1`.
    pub fn bounded_int(&mut self, n: usize) -> Result<usize, PrimError> {
        if n <= 1 {
            return Err(PrimError::BoundTooSmall { n });
        }
        Ok(self.draw_below(n))
    }

    /// Pre: `n > 1` (checked by callers).
    #[inline]
    pub(crate) fn draw_below(&mut self, n: usize) -> usize {
        debug_assert!(n > 1);
        match self.bounded {
            BoundedDraw::Modulo if n as u64 > u32::MAX as u64 => {
                (self.rng.next_u64() % n as u64) as usize
            }
            BoundedDraw::Modulo => (self.rng.next_u32() as u64 % n as u64) as usize,
            BoundedDraw::Unbiased => self.rng.gen_range(0..n),
        }
    }
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::new(StreamCfg::default())
    }
}

/// Replay token deriving independent streams from `(seed, index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Stream for this token, with the given bounded-draw mode.
    pub fn stream(self, bounded: BoundedDraw) -> RandomStream {
        RandomStream::new(StreamCfg {
            seed: self.mixed_seed(),
            bounded,
        })
    }

    #[inline]
    fn mixed_seed(self) -> u64 {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)))
    }
}
