//! Dense complex linear algebra: the layer everything else is built on.
//!
//! Kept in-tree and minimal: just the handful of operations the engine
//! actually needs — element access, matrix multiplication, scalar
//! multiplication, block assignment and the Kronecker product.

mod matrix;

pub use matrix::Matrix;

use crate::types::{C, N};

/// Multiplies a square matrix by a column vector, `M . v`.
///
/// # Panics
/// Panics if `m` is not square or its dimension doesn't match `v.len()`.
pub fn mat_vec_mul(m: &Matrix, v: &[C]) -> Vec<C> {
    assert_eq!(m.cols(), v.len(), "matrix/vector dimension mismatch");
    (0..m.rows())
        .map(|i| (0..m.cols()).map(|j| m[(i, j)] * v[j]).sum())
        .collect()
}

/// Computes the Kronecker (tensor) product of two matrices.
///
/// For `A` of shape `(m, n)` and `B` of shape `(p, q)`, the result `K` has
/// shape `(m*p, n*q)` with `K[i*p + r, j*q + s] = A[i, j] * B[r, s]`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    let (m, n) = (a.rows(), a.cols());
    let (p, q) = (b.rows(), b.cols());
    let mut out = Matrix::zeros(m * p, n * q);

    for i in 0..m {
        for j in 0..n {
            let a_ij = a[(i, j)];
            if a_ij == C::new(0.0, 0.0) {
                continue;
            }
            for r in 0..p {
                for s in 0..q {
                    out[(i * p + r, j * q + s)] = a_ij * b[(r, s)];
                }
            }
        }
    }

    out
}

/// Builds `I2^(x)count`, the identity on `count` qubits, by folding the
/// Kronecker product of `count` copies of the 2x2 identity. Equal to
/// `Matrix::identity(1 << count)`, but operator expansion routes identity
/// padding through `kron` like every other factor rather than
/// special-casing it; the fold direction doesn't matter here since every
/// factor is the same identity.
pub fn identity_power(count: N) -> Matrix {
    let id2 = Matrix::identity(2);
    (0..count).fold(Matrix::identity(1), |acc, _| kron(&acc, &id2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::C;

    fn c(re: f64) -> C {
        C::new(re, 0.0)
    }

    #[test]
    fn kron_shapes_and_values() {
        let a = Matrix::from_rows(2, 2, vec![c(1.0), c(2.0), c(3.0), c(4.0)]);
        let b = Matrix::from_rows(2, 2, vec![c(0.0), c(1.0), c(1.0), c(0.0)]);

        let k = kron(&a, &b);
        assert_eq!((k.rows(), k.cols()), (4, 4));

        // A (x) B, block layout:
        // [ a00*B  a01*B ]
        // [ a10*B  a11*B ]
        assert_eq!(k[(0, 0)], c(0.0));
        assert_eq!(k[(0, 1)], c(1.0));
        assert_eq!(k[(1, 0)], c(1.0));
        assert_eq!(k[(1, 1)], c(0.0));
        assert_eq!(k[(0, 2)], c(0.0));
        assert_eq!(k[(0, 3)], c(2.0));
        assert_eq!(k[(2, 2)], c(0.0));
        assert_eq!(k[(2, 3)], c(3.0));
    }

    #[test]
    fn kron_with_identity_is_block_diagonal_replication() {
        let id2 = Matrix::identity(2);
        let a = Matrix::from_rows(2, 2, vec![c(1.0), c(2.0), c(3.0), c(4.0)]);
        let k = kron(&id2, &a);

        assert_eq!((k.rows(), k.cols()), (4, 4));
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(k[(i, j)], a[(i, j)]);
                assert_eq!(k[(i + 2, j + 2)], a[(i, j)]);
                assert_eq!(k[(i, j + 2)], c(0.0));
                assert_eq!(k[(i + 2, j)], c(0.0));
            }
        }
    }

    #[test]
    fn mat_vec_mul_applies_linear_map() {
        let m = Matrix::from_rows(2, 2, vec![c(0.0), c(1.0), c(1.0), c(0.0)]);
        let v = vec![c(3.0), c(5.0)];
        assert_eq!(mat_vec_mul(&m, &v), vec![c(5.0), c(3.0)]);
    }
}
