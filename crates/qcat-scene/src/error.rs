//! Error types for the scene crate.

use thiserror::Error;

/// Errors produced while mapping, assembling or rendering a scene.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SceneError {
    /// A qubit amplitude was NaN or infinite.
    #[error("qubit state has a non-finite amplitude")]
    NonFiniteAmplitude,

    /// The inverse-cosine argument fell outside [-1, 1] under the reject policy.
    #[error("polar-angle argument {value} is outside the arccos domain [-1, 1]")]
    NumericDomain {
        /// The out-of-range argument.
        value: f64,
    },

    /// The requested sphere mesh is too dense to allocate.
    #[error("mesh resolution {resolution} exceeds the maximum of {max}")]
    MeshTooLarge {
        /// Requested samples per parameter.
        resolution: usize,
        /// The accepted maximum.
        max: usize,
    },

    /// Writing renderer output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A renderer could not draw the scene.
    #[error("render error: {0}")]
    Render(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
