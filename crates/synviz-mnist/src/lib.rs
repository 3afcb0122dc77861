//! MNIST preprocessing for synviz.
//!
//! Reads the four IDX files of the dataset, normalizes pixel intensities to
//! `[0, 1]`, groups samples by class and writes one archive per split.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// IDX dimensions are u32 on disk
#![allow(clippy::cast_possible_truncation)]

pub mod archive;
pub mod dataset;
pub mod error;
pub mod idx;
pub mod partition;
pub mod split;

pub use archive::{read_archive, write_archive};
pub use dataset::Dataset;
pub use error::{MnistError, Result};
pub use partition::{ClassBucket, Partition, NUM_CLASSES};
pub use split::{split_all, split_one, SplitFiles, SplitOptions, SplitSummary, TEST, TRAIN};
