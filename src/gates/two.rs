//! Two-qubit gates and the SWAP-conjugation routing that lets them act on
//! any pair of qubits, adjacent or not.

use crate::error::{Error, Result};
use crate::math::{mat_vec_mul, Matrix};
use crate::operator::expand_adjacent_pair;
use crate::qubit::Qubit;
use crate::system::System;
use crate::types::{C, N, R};

fn c(re: R) -> C {
    C::new(re, 0.0)
}

/// `SWAP`: exchanges `|01>` and `|10>`.
pub fn swap_matrix() -> Matrix {
    Matrix::from_rows(
        4,
        4,
        vec![
            c(1.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(1.0),
            c(0.0),
            c(0.0),
            c(1.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(1.0),
        ],
    )
}

/// `SRSWAP`: the square root of [`swap_matrix`].
pub fn srswap_matrix() -> Matrix {
    let one_plus_i = C::new(1.0, 1.0);
    let one_minus_i = C::new(1.0, -1.0);
    Matrix::from_rows(
        4,
        4,
        vec![
            c(2.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            one_plus_i,
            one_minus_i,
            c(0.0),
            c(0.0),
            one_minus_i,
            one_plus_i,
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(2.0),
        ],
    )
    .scale(c(0.5))
}

/// `CNOT`: identity when the control (the high operand) is `|0>`, `X` on
/// the target (the low operand) when the control is `|1>`.
pub fn cnot_matrix() -> Matrix {
    Matrix::from_rows(
        4,
        4,
        vec![
            c(1.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(1.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(0.0),
            c(1.0),
            c(0.0),
            c(0.0),
            c(1.0),
            c(0.0),
        ],
    )
}

/// Physically swaps the amplitudes of the two adjacent positions `lower`
/// and `lower + 1`. Used both as the public `SWAP` gate and internally to
/// route nonadjacent two-qubit gates to adjacent form.
fn swap_adjacent(system: &mut System, lower: N) -> Result<()> {
    let n = system.count();
    let m = expand_adjacent_pair(&swap_matrix(), n, lower)?;
    let next = mat_vec_mul(&m, system.amplitudes());
    *system.amplitudes_mut() = next;
    Ok(())
}

fn apply_adjacent(system: &mut System, g: &Matrix, target: N) -> Result<()> {
    let n = system.count();
    let m = expand_adjacent_pair(g, n, target)?;
    let next = mat_vec_mul(&m, system.amplitudes());
    *system.amplitudes_mut() = next;
    Ok(())
}

/// Applies `g`, defined with operand ordering `(high, low) = (a, b)`, so
/// that its effective action on the register is `g` on the `(a, b)`
/// subsystem and identity elsewhere — routing around nonadjacency by
/// conjugating with chains of [`swap_adjacent`].
fn apply_two(system: &mut System, a: &Qubit, b: &Qubit, g: &Matrix) -> Result<()> {
    system.check_qubit(a)?;
    system.check_qubit(b)?;
    let (i, j) = (a.index(), b.index());
    if i == j {
        return Err(Error::DuplicateOperand);
    }

    if i == j + 1 {
        // a directly above b: already in (high, low) order.
        apply_adjacent(system, g, j)?;
    } else if i + 1 == j {
        // adjacent but inverted: conjugate with a swap to flip the pairing.
        swap_adjacent(system, i)?;
        apply_adjacent(system, g, i)?;
        swap_adjacent(system, i)?;
    } else {
        // nonadjacent: route b to position 0 and a to position 1.
        for k in (1..=j).rev() {
            swap_adjacent(system, k - 1)?;
        }
        let a_prime = if i < j { i + 1 } else { i };
        for k in (2..=a_prime).rev() {
            swap_adjacent(system, k - 1)?;
        }
        apply_adjacent(system, g, 0)?;
        for k in 1..a_prime {
            swap_adjacent(system, k)?;
        }
        for k in 0..j {
            swap_adjacent(system, k)?;
        }
    }

    log::trace!("applied two-qubit gate to qubits {} (high) and {} (low)", i, j);
    Ok(())
}

/// Applies `SWAP` to `a` and `b`.
pub fn swap(system: &mut System, a: &Qubit, b: &Qubit) -> Result<()> {
    apply_two(system, a, b, &swap_matrix())
}

/// Applies `SRSWAP` to `a` and `b`.
pub fn srswap(system: &mut System, a: &Qubit, b: &Qubit) -> Result<()> {
    apply_two(system, a, b, &srswap_matrix())
}

/// Applies `CNOT` with `control` as the high operand and `target` as the
/// low operand.
pub fn cnot(system: &mut System, control: &Qubit, target: &Qubit) -> Result<()> {
    apply_two(system, control, target, &cnot_matrix())
}
