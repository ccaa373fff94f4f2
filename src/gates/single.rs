//! Fixed and parametrised single-qubit gates.

use crate::error::Result;
use crate::math::{mat_vec_mul, Matrix};
use crate::operator::expand_single;
use crate::qubit::Qubit;
use crate::system::System;
use crate::types::{C, R, INV_ROOT_2};

fn apply(system: &mut System, q: &Qubit, g: &Matrix) -> Result<()> {
    system.check_qubit(q)?;
    let m = expand_single(g, system.count(), q.index());
    let next = mat_vec_mul(&m, system.amplitudes());
    *system.amplitudes_mut() = next;
    log::trace!("applied single-qubit gate to qubit {}", q.index());
    Ok(())
}

fn c(re: R) -> C {
    C::new(re, 0.0)
}

/// The Pauli-X (bit flip) matrix: `[[0,1],[1,0]]`.
pub fn x_matrix() -> Matrix {
    Matrix::from_rows(2, 2, vec![c(0.0), c(1.0), c(1.0), c(0.0)])
}

/// The Pauli-Y matrix: `[[0,-i],[i,0]]`.
pub fn y_matrix() -> Matrix {
    Matrix::from_rows(
        2,
        2,
        vec![c(0.0), C::new(0.0, -1.0), C::new(0.0, 1.0), c(0.0)],
    )
}

/// The Pauli-Z (phase flip) matrix: `[[1,0],[0,-1]]`.
pub fn z_matrix() -> Matrix {
    Matrix::from_rows(2, 2, vec![c(1.0), c(0.0), c(0.0), c(-1.0)])
}

/// The Hadamard matrix: `(1/sqrt(2))*[[1,1],[1,-1]]`.
pub fn h_matrix() -> Matrix {
    Matrix::from_rows(2, 2, vec![c(1.0), c(1.0), c(1.0), c(-1.0)]).scale(c(INV_ROOT_2))
}

/// The square-root-of-NOT matrix: `1/2 * [[1+i,1-i],[1-i,1+i]]`.
pub fn srnot_matrix() -> Matrix {
    let half = C::new(0.5, 0.0);
    Matrix::from_rows(
        2,
        2,
        vec![
            C::new(1.0, 1.0),
            C::new(1.0, -1.0),
            C::new(1.0, -1.0),
            C::new(1.0, 1.0),
        ],
    )
    .scale(half)
}

/// `Rx(theta)`: `[[cos(t/2), -i*sin(t/2)], [-i*sin(t/2), cos(t/2)]]`.
pub fn rx_matrix(theta: R) -> Matrix {
    let (half_sin, half_cos) = (theta / 2.0).sin_cos();
    Matrix::from_rows(
        2,
        2,
        vec![
            c(half_cos),
            C::new(0.0, -half_sin),
            C::new(0.0, -half_sin),
            c(half_cos),
        ],
    )
}

/// `Ry(theta)`: `[[cos(t/2), -sin(t/2)], [sin(t/2), cos(t/2)]]`.
pub fn ry_matrix(theta: R) -> Matrix {
    let (half_sin, half_cos) = (theta / 2.0).sin_cos();
    Matrix::from_rows(2, 2, vec![c(half_cos), c(-half_sin), c(half_sin), c(half_cos)])
}

/// `Rz(theta)`: `diag(e^{-i*t/2}, e^{i*t/2})`.
pub fn rz_matrix(theta: R) -> Matrix {
    let half = theta / 2.0;
    Matrix::from_rows(
        2,
        2,
        vec![
            C::from_polar(1.0, -half),
            c(0.0),
            c(0.0),
            C::from_polar(1.0, half),
        ],
    )
}

/// `Rp(theta)`: `diag(1, e^{i*theta})`, the relative-phase gate.
pub fn rp_matrix(theta: R) -> Matrix {
    Matrix::from_rows(2, 2, vec![c(1.0), c(0.0), c(0.0), C::from_polar(1.0, theta)])
}

/// Applies the Pauli-X gate to `q`.
pub fn x(system: &mut System, q: &Qubit) -> Result<()> {
    apply(system, q, &x_matrix())
}

/// Applies the Pauli-Y gate to `q`.
pub fn y(system: &mut System, q: &Qubit) -> Result<()> {
    apply(system, q, &y_matrix())
}

/// Applies the Pauli-Z gate to `q`.
pub fn z(system: &mut System, q: &Qubit) -> Result<()> {
    apply(system, q, &z_matrix())
}

/// Applies the Hadamard gate to `q`.
pub fn h(system: &mut System, q: &Qubit) -> Result<()> {
    apply(system, q, &h_matrix())
}

/// Applies the square-root-of-NOT gate to `q`.
pub fn srnot(system: &mut System, q: &Qubit) -> Result<()> {
    apply(system, q, &srnot_matrix())
}

/// Applies `Rx(theta)` to `q`.
pub fn rx(system: &mut System, q: &Qubit, theta: R) -> Result<()> {
    apply(system, q, &rx_matrix(theta))
}

/// Applies `Ry(theta)` to `q`.
pub fn ry(system: &mut System, q: &Qubit, theta: R) -> Result<()> {
    apply(system, q, &ry_matrix(theta))
}

/// Applies `Rz(theta)` to `q`.
pub fn rz(system: &mut System, q: &Qubit, theta: R) -> Result<()> {
    apply(system, q, &rz_matrix(theta))
}

/// Applies `Rp(theta)` to `q`.
pub fn rp(system: &mut System, q: &Qubit, theta: R) -> Result<()> {
    apply(system, q, &rp_matrix(theta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::Qubit;
    use crate::types::PI;
    use float_cmp::approx_eq;

    fn approx(a: C, b: C) -> bool {
        approx_eq!(f64, a.re, b.re, epsilon = 1e-9) && approx_eq!(f64, a.im, b.im, epsilon = 1e-9)
    }

    #[test]
    fn x_on_zero_flips_to_one() {
        let mut sys = System::new();
        let q = Qubit::allocate(&mut sys);
        x(&mut sys, &q).unwrap();
        assert!(approx(sys.amplitudes()[0], C::new(0.0, 0.0)));
        assert!(approx(sys.amplitudes()[1], C::new(1.0, 0.0)));
    }

    #[test]
    fn h_then_h_is_identity() {
        let mut sys = System::new();
        let q = Qubit::allocate(&mut sys);
        let before = sys.amplitudes().to_vec();
        h(&mut sys, &q).unwrap();
        h(&mut sys, &q).unwrap();
        for (a, b) in sys.amplitudes().iter().zip(before.iter()) {
            assert!(approx(*a, *b));
        }
    }

    #[test]
    fn rz_full_turn_is_global_minus_identity() {
        let mut sys = System::new();
        let q = Qubit::allocate(&mut sys);
        rz(&mut sys, &q, 2.0 * PI).unwrap();
        assert!(approx(sys.amplitudes()[0], C::new(-1.0, 0.0)));
        assert!(approx(sys.amplitudes()[1], C::new(0.0, 0.0)));
    }

    #[test]
    fn rp_full_turn_is_identity() {
        let mut sys = System::new();
        let q = Qubit::allocate(&mut sys);
        h(&mut sys, &q).unwrap();
        let before = sys.amplitudes().to_vec();
        rp(&mut sys, &q, 2.0 * PI).unwrap();
        for (a, b) in sys.amplitudes().iter().zip(before.iter()) {
            assert!(approx(*a, *b));
        }
    }

    #[test]
    fn rejects_foreign_qubit() {
        let mut sys_a = System::new();
        Qubit::allocate(&mut sys_a);
        let mut sys_b = System::new();
        let qb = Qubit::allocate(&mut sys_b);
        assert!(x(&mut sys_a, &qb).is_err());
    }
}
