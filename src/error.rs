//! The crate's single error type.
//!
//! Every operation with a documented precondition returns `Result<T,
//! Error>` rather than panicking, and leaves its `System` untouched on
//! `Err`.

use thiserror::Error;

/// A specialized `Result` type for statevec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A qubit handle's index is not `< count` for its system.
    #[error("qubit index {index} is out of range for a system of {count} qubits")]
    IndexOutOfRange { index: usize, count: usize },

    /// A qubit handle was used with a system other than the one it was
    /// allocated from.
    #[error("qubit handle does not belong to this system")]
    ForeignQubit,

    /// A two-qubit gate was given the same qubit twice.
    #[error("two-qubit gate requires two distinct qubits, got the same qubit twice")]
    DuplicateOperand,

    /// A two-qubit gate was applied to the system's most-significant qubit,
    /// which has no adjacent qubit above it to pair with when expanded.
    #[error("qubit {index} has no adjacent qubit above it in a system of {count} qubits")]
    NoAdjacentPartner { index: usize, count: usize },
}
