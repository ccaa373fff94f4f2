//! Scalar type aliases shared by every module.
//!
//! Kept in one place so the float width or index width can change without
//! touching call sites.

pub use num_complex::Complex;

/// Qubit count / amplitude index width.
pub type N = usize;
/// Real scalar width.
pub type R = f64;
/// Complex amplitude.
pub type C = Complex<R>;

/// `pi`, exposed at crate root per the external-interface contract.
pub const PI: R = std::f64::consts::PI;
/// `1/sqrt(2)`, exposed at crate root per the external-interface contract.
pub const INV_ROOT_2: R = std::f64::consts::FRAC_1_SQRT_2;

/// Converts an angle in degrees to radians.
#[inline]
pub fn deg_to_rad(deg: R) -> R {
    deg * (PI / 180.0)
}
