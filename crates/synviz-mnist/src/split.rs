//! Splitting the train and test sets.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::archive::write_archive;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::partition::{Partition, NUM_CLASSES};

/// File names of one dataset split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitFiles {
    /// Name used in logs.
    pub name: &'static str,
    /// IDX images file.
    pub images: &'static str,
    /// IDX labels file.
    pub labels: &'static str,
    /// Archive written to the output directory.
    pub archive: &'static str,
}

/// The training split.
pub const TRAIN: SplitFiles = SplitFiles {
    name: "train",
    images: "train-images-idx3-ubyte",
    labels: "train-labels-idx1-ubyte",
    archive: "mnist_train_split.svz",
};

/// The test split.
pub const TEST: SplitFiles = SplitFiles {
    name: "test",
    images: "t10k-images-idx3-ubyte",
    labels: "t10k-labels-idx1-ubyte",
    archive: "mnist_test_split.svz",
};

/// Options of the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Directory holding the four IDX files.
    pub input_dir: PathBuf,
    /// Directory the archives are written to. Created when missing.
    pub output_dir: PathBuf,
    /// Number of classes; every label must be below it.
    pub num_classes: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/mnist"),
            output_dir: PathBuf::from("data/mnist"),
            num_classes: NUM_CLASSES,
        }
    }
}

impl SplitOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

/// Summary of one written split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Split name.
    pub name: &'static str,
    /// Written archive.
    pub path: PathBuf,
    /// Sample count per class.
    pub counts: Vec<usize>,
}

impl SplitSummary {
    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Loads, partitions and archives one split.
pub fn split_one(options: &SplitOptions, files: &SplitFiles) -> Result<SplitSummary> {
    let dataset = Dataset::load(
        options.input_dir.join(files.images),
        options.input_dir.join(files.labels),
        options.num_classes,
    )?;
    log::info!("splitting {} {} samples", dataset.len(), files.name);

    let partition = Partition::split(&dataset, options.num_classes);
    for bucket in &partition.classes {
        log::info!(
            "{} {} samples for class #{}",
            bucket.count(),
            files.name,
            bucket.label
        );
    }

    let path = options.output_dir.join(files.archive);
    write_archive(&path, &partition)?;

    Ok(SplitSummary {
        name: files.name,
        path,
        counts: partition.counts(),
    })
}

/// Splits both the training and the test set.
pub fn split_all(options: &SplitOptions) -> Result<Vec<SplitSummary>> {
    let summaries = [TRAIN, TEST]
        .iter()
        .map(|files| split_one(options, files))
        .collect::<Result<Vec<_>>>()?;
    log::info!("saved split data to {}", options.output_dir.display());
    Ok(summaries)
}
