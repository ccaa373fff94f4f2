//! Operator expansion: embeds a 2x2 or 4x4 gate matrix into the full
//! `2^n x 2^n` operator acting on the whole register.

use crate::error::{Error, Result};
use crate::math::{identity_power, kron, Matrix};
use crate::types::N;

/// Expands a single-qubit (2x2) gate `g` to act on qubit `target` of an
/// `n`-qubit register, identity elsewhere.
///
/// Qubit 0 is the least significant bit of the index, so the `target`
/// qubits below contribute the inner (fast-changing) factor of `g`'s
/// Kronecker block, and the `n - target - 1` qubits above wrap the whole
/// thing as the outer factor: `I_above (x) (g (x) I_below)`.
pub fn expand_single(g: &Matrix, n: N, target: N) -> Matrix {
    debug_assert!(target < n);
    let below = identity_power(target);
    let with_gate = kron(g, &below);
    let above = identity_power(n - target - 1);
    kron(&above, &with_gate)
}

/// Expands a two-qubit (4x4) gate `g` to act on the pair `(target, target +
/// 1)` of an `n`-qubit register — `target + 1` is the high operand,
/// `target` the low one. Same inner/outer padding as [`expand_single`].
///
/// Requires `target <= n - 2`; returns [`Error::NoAdjacentPartner`]
/// otherwise.
pub fn expand_adjacent_pair(g: &Matrix, n: N, target: N) -> Result<Matrix> {
    if target + 2 > n {
        return Err(Error::NoAdjacentPartner {
            index: target,
            count: n,
        });
    }
    let below = identity_power(target);
    let with_gate = kron(g, &below);
    let above = identity_power(n - target - 2);
    Ok(kron(&above, &with_gate))
}
