//! Grouping samples by class.

use crate::dataset::Dataset;

/// Number of classes in MNIST.
pub const NUM_CLASSES: usize = 10;

/// All samples of one class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassBucket {
    /// Class index.
    pub label: u32,
    /// Concatenated pixels of every sample.
    pub images: Vec<f32>,
    /// One label per sample, all equal to `label`.
    pub labels: Vec<u32>,
}

impl ClassBucket {
    /// Creates an empty bucket.
    pub fn new(label: u32) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Number of samples.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the bucket holds no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A dataset split into one bucket per class.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Number of pixels per image.
    pub image_size: usize,
    /// Buckets ordered by label.
    pub classes: Vec<ClassBucket>,
}

impl Partition {
    /// Groups the samples of `dataset` into at least `num_classes` buckets,
    /// keeping the input order within each bucket.
    pub fn split(dataset: &Dataset, num_classes: usize) -> Self {
        let mut classes: Vec<ClassBucket> = (0..num_classes as u32).map(ClassBucket::new).collect();
        for (image, label) in dataset.iter() {
            let index = usize::from(label);
            if index >= classes.len() {
                let next = classes.len() as u32;
                classes.extend((next..=u32::from(label)).map(ClassBucket::new));
            }
            let bucket = &mut classes[index];
            bucket.images.extend_from_slice(image);
            bucket.labels.push(u32::from(label));
        }
        Self {
            image_size: dataset.image_size(),
            classes,
        }
    }

    /// Total number of samples over all classes.
    pub fn total(&self) -> usize {
        self.classes.iter().map(ClassBucket::count).sum()
    }

    /// Sample count of every class, ordered by label.
    pub fn counts(&self) -> Vec<usize> {
        self.classes.iter().map(ClassBucket::count).collect()
    }
}
