//! Gate application: the public, named surface of single- and two-qubit
//! unitaries.

pub mod single;
pub mod two;

pub use single::{h, rp, rx, ry, rz, srnot, x, y, z};
pub use two::{cnot, srswap, swap};
