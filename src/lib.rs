#![doc = include_str!("../README.md")]

pub mod error;
pub mod gates;
pub mod math;
pub mod measure;
pub mod operator;
pub mod qubit;
pub mod render;
pub mod rng;
pub mod system;
pub mod types;

pub use error::{Error, Result};
pub use gates::{cnot, h, rp, rx, ry, rz, srnot, srswap, swap, x, y, z};
pub use measure::{m, m_with_rng, mx};
pub use qubit::Qubit;
pub use system::System;
pub use types::{deg_to_rad, C, INV_ROOT_2, N, PI, R};

/// Seeds the process-wide default RNG from a high-resolution wall clock.
pub fn init() {
    rng::init();
}

/// Seeds the process-wide default RNG from `seed`.
pub fn init_seed(seed: u64) {
    rng::init_seed(seed);
}

/// Draws a Bernoulli(`p`) sample from the process-wide default RNG.
pub fn chance(p: R) -> bool {
    rng::chance(p)
}

/// The prelude most callers need: `use statevec::prelude::*;`.
pub mod prelude {
    pub use crate::{
        chance, cnot, deg_to_rad, h, init, init_seed, m, mx, rp, rx, ry, rz, srnot, srswap, swap,
        x, y, z, Qubit, System, INV_ROOT_2, PI,
    };
}
