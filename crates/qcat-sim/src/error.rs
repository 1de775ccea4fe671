//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while simulating the qubit program.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A rotation angle was NaN or infinite.
    #[error("non-finite rotation parameter `{name}`: {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter (`theta` or `phi`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
