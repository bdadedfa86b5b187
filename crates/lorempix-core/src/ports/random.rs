//! Uniform random selection port.
//!
//! Selection randomness is injected rather than hard-wired so tests can
//! script picks and assert distribution properties without flakiness.
//!
//! # Implementations
//!
//! - [`ThreadRandom`] - production pick backed by the thread-local RNG
//! - Scripted doubles in service tests

use rand::Rng;

/// Source of uniform randomness for candidate selection.
pub trait RandomSource: Send + Sync {
    /// Pick an index uniformly from `0..len`.
    ///
    /// `len` must be non-zero; the selector never calls this with an empty
    /// candidate set.
    fn pick_index(&self, len: usize) -> usize;
}

/// Thread-local RNG backed implementation.
///
/// `gen_range` samples by rejection, so the pick is exactly uniform for any
/// `len` with no modulo bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-RNG random source.
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
