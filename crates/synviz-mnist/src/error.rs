//! Dataset error types.

use thiserror::Error;

/// Errors raised while reading, splitting or writing the dataset.
#[derive(Error, Debug)]
pub enum MnistError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options or archive header could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An IDX file starts with the wrong magic number.
    #[error("bad magic number {actual:#010x}, expected {expected:#010x}")]
    BadMagic { expected: u32, actual: u32 },

    /// Image and label files disagree on the number of samples.
    #[error("{images} images but {labels} labels")]
    CountMismatch { images: usize, labels: usize },

    /// A label is not a valid class index.
    #[error("label {label} of sample {index} is not below {num_classes}")]
    LabelOutOfRange {
        index: usize,
        label: u8,
        num_classes: usize,
    },

    /// A file ends before its header says it should.
    #[error("truncated data: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// An archive is structurally invalid.
    #[error("invalid archive: {0}")]
    BadArchive(String),
}

/// A specialized Result type for dataset operations.
pub type Result<T> = std::result::Result<T, MnistError>;
