//! The quantum register: owner of the joint amplitude vector.

use crate::error::{Error, Result};
use crate::qubit::Qubit;
use crate::types::C;

static NEXT_SYSTEM_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

fn next_system_id() -> u64 {
    NEXT_SYSTEM_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
}

/// The joint register of a set of qubits.
///
/// Owns exactly one amplitude vector of length `2^count`. A `System` is
/// deliberately not [`Clone`]: duplicating a quantum state classically is
/// forbidden by design. [`Qubit`] handles identify a qubit by the system's
/// identity and a stable index rather than holding a Rust reference into
/// it — the only way to mutate a system's state is through a `&mut
/// System`, so a handle can never alias a live mutable borrow; a handle
/// used against a system it was not allocated from is instead a
/// runtime-checked precondition violation.
pub struct System {
    pub(crate) id: u64,
    amplitudes: Vec<C>,
    count: usize,
}

impl System {
    /// Creates an empty system: `count() == 0`, amplitudes `[1+0i]`.
    pub fn new() -> Self {
        Self {
            id: next_system_id(),
            amplitudes: vec![C::new(1.0, 0.0)],
            count: 0,
        }
    }

    /// The current number of qubits.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Read-only access to the amplitude vector, for printing or testing.
    pub fn amplitudes(&self) -> &[C] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut Vec<C> {
        &mut self.amplitudes
    }

    /// Appends a new qubit initialised to `|0>`.
    ///
    /// The new qubit becomes the most significant bit in the index
    /// encoding: `amplitudes' = ZERO (x) amplitudes`, except for the very
    /// first qubit, where the 1-element vector is simply replaced by
    /// `ZERO` rather than Kronecker-multiplied against it.
    pub fn allocate_qubit(&mut self) -> Qubit {
        let index = self.count;

        if self.count == 0 {
            self.amplitudes = vec![C::new(1.0, 0.0), C::new(0.0, 0.0)];
        } else {
            let zero = crate::math::Matrix::from_rows(2, 1, vec![C::new(1.0, 0.0), C::new(0.0, 0.0)]);
            let old = crate::math::Matrix::from_rows(self.amplitudes.len(), 1, self.amplitudes.clone());
            let grown = crate::math::kron(&zero, &old);
            self.amplitudes = (0..grown.rows()).map(|i| grown[(i, 0)]).collect();
        }

        self.count += 1;
        log::trace!("allocated qubit {index}");
        Qubit {
            system_id: self.id,
            index,
        }
    }

    /// Restores the system to its empty post-construction state.
    pub fn reset(&mut self) {
        self.amplitudes = vec![C::new(1.0, 0.0)];
        self.count = 0;
    }

    /// Rescales the amplitude vector so `sum(|a_i|^2) == 1`.
    ///
    /// Measurement already renormalises the surviving partition after
    /// collapse; this is an explicit hook for correcting numerical drift a
    /// long gate sequence may accumulate between measurements. A no-op on
    /// an already-normalised vector, up to floating-point error.
    pub fn renormalize(&mut self) {
        let norm_sqr: f64 = self.amplitudes.iter().map(|a| a.norm_sqr()).sum();
        let scale = 1.0 / norm_sqr.sqrt();
        for a in self.amplitudes.iter_mut() {
            *a = *a * C::new(scale, 0.0);
        }
        log::trace!("renormalized state, scale={scale}");
    }

    /// Checks that `q` was allocated from this system and has a valid
    /// index. Every gate/measurement entry point calls this before
    /// mutating anything, so a precondition violation leaves the state
    /// untouched.
    pub(crate) fn check_qubit(&self, q: &Qubit) -> Result<()> {
        if q.system_id != self.id {
            return Err(Error::ForeignQubit);
        }
        if q.index >= self.count {
            return Err(Error::IndexOutOfRange {
                index: q.index,
                count: self.count,
            });
        }
        Ok(())
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_system_is_empty() {
        let sys = System::new();
        assert_eq!(sys.count(), 0);
        assert_eq!(sys.amplitudes(), &[C::new(1.0, 0.0)]);
    }

    #[test]
    fn allocate_qubit_lifts_state_into_zero_subspace() {
        let mut sys = System::new();
        let _a = sys.allocate_qubit();
        assert_eq!(sys.count(), 1);
        assert_eq!(sys.amplitudes(), &[C::new(1.0, 0.0), C::new(0.0, 0.0)]);

        let _b = sys.allocate_qubit();
        assert_eq!(sys.count(), 2);
        assert_eq!(
            sys.amplitudes(),
            &[
                C::new(1.0, 0.0),
                C::new(0.0, 0.0),
                C::new(0.0, 0.0),
                C::new(0.0, 0.0)
            ]
        );
    }

    #[test]
    fn reset_restores_empty_state() {
        let mut sys = System::new();
        sys.allocate_qubit();
        sys.allocate_qubit();
        sys.reset();
        assert_eq!(sys.count(), 0);
        assert_eq!(sys.amplitudes(), &[C::new(1.0, 0.0)]);
    }

    #[test]
    fn renormalize_restores_unit_norm_after_drift() {
        let mut sys = System::new();
        sys.allocate_qubit();
        // Simulate accumulated floating-point drift directly.
        for a in sys.amplitudes_mut().iter_mut() {
            *a = *a * C::new(1.0001, 0.0);
        }
        sys.renormalize();
        let norm_sqr: f64 = sys.amplitudes().iter().map(|a| a.norm_sqr()).sum();
        assert!((norm_sqr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn check_qubit_rejects_foreign_and_out_of_range_handles() {
        let mut sys_a = System::new();
        let qa = sys_a.allocate_qubit();

        let sys_b = System::new();
        assert_eq!(sys_b.check_qubit(&qa), Err(Error::ForeignQubit));

        // An index that is in range for sys_a, but sys_a has only 1 qubit
        // so index 1 is out of range.
        let bogus = Qubit {
            system_id: sys_a.id,
            index: 1,
        };
        assert_eq!(
            sys_a.check_qubit(&bogus),
            Err(Error::IndexOutOfRange { index: 1, count: 1 })
        );
    }
}
