//! Seedable randomness source.
//!
//! `Rng` is an injectable, per-call source rather than a bare global, so
//! callers can get deterministic, reproducible draws. A process-wide
//! default lives behind a `Mutex` and backs the crate-root `init`/
//! `init_seed`/`chance` convenience functions for script-style callers who
//! don't want to thread an `Rng` through themselves.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng as _, SeedableRng};
use rand_distr::Bernoulli;

use crate::types::R;

/// A seedable pseudo-random source producing uniform reals in `[0, 1)` and
/// Bernoulli draws.
pub struct Rng {
    inner: rand::rngs::StdRng,
}

impl Rng {
    /// Seeds from a high-resolution wall clock reading.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_nanos() as u64;
        Self::seeded(nanos)
    }

    /// Seeds deterministically from an unsigned integer.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// A uniform real in `[0, 1)`.
    pub fn uniform(&mut self) -> R {
        self.inner.gen::<R>()
    }

    /// A Bernoulli(`p`) draw. `p` outside `[0, 1]` is clamped rather than
    /// left undefined.
    pub fn chance(&mut self, p: R) -> bool {
        let clamped = p.clamp(0.0, 1.0);
        if clamped != p {
            log::debug!("chance(p={p}) clamped to {clamped}");
        }
        self.inner.sample(Bernoulli::new(clamped).expect("clamped probability is in [0, 1]"))
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_RNG: Mutex<Option<Rng>> = Mutex::new(None);

/// Seeds the process-wide default RNG from a high-resolution wall clock.
pub fn init() {
    *DEFAULT_RNG.lock().unwrap() = Some(Rng::new());
}

/// Seeds the process-wide default RNG from `seed`.
pub fn init_seed(seed: u64) {
    *DEFAULT_RNG.lock().unwrap() = Some(Rng::seeded(seed));
}

/// Draws a Bernoulli(`p`) sample from the process-wide default RNG,
/// seeding it from the wall clock first if it hasn't been seeded yet.
pub fn chance(p: R) -> bool {
    let mut guard = DEFAULT_RNG.lock().unwrap();
    guard.get_or_insert_with(Rng::new).chance(p)
}
