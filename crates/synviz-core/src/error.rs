//! Error types for synviz.

use thiserror::Error;

/// The main error type for synviz core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A flat coordinate list whose length is not a multiple of three.
    #[error("layer has {0} coordinates, which is not a multiple of 3")]
    MalformedLayer(usize),

    /// Sample spacing is zero, negative or not finite.
    #[error("invalid sample spacing: {0}")]
    InvalidSpacing(f32),

    /// An edge whose endpoints coincide.
    #[error("degenerate edge {index}: endpoints coincide")]
    DegenerateEdge { index: usize },

    /// Sampling would produce more than [`crate::sampler::MAX_SAMPLES`] samples.
    #[error("sampling would produce {count} samples by edge {edge}, above the limit of {limit}")]
    TooManySamples {
        edge: usize,
        count: usize,
        limit: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for synviz core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
