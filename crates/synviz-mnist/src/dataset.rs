//! Labeled, normalized image samples.

use std::path::Path;

use crate::error::{MnistError, Result};
use crate::idx::{read_images, read_labels, IdxImages};

/// Images with pixel intensities in `[0, 1]` and one label each.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    image_size: usize,
    images: Vec<f32>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Normalizes raw images and pairs them with their labels.
    ///
    /// Every label must be below `num_classes`.
    pub fn new(images: &IdxImages, labels: Vec<u8>, num_classes: usize) -> Result<Self> {
        if images.len() != labels.len() {
            return Err(MnistError::CountMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        if let Some((index, &label)) = labels
            .iter()
            .enumerate()
            .find(|(_, &l)| usize::from(l) >= num_classes)
        {
            return Err(MnistError::LabelOutOfRange {
                index,
                label,
                num_classes,
            });
        }

        Ok(Self {
            image_size: images.image_size(),
            images: images.pixels.iter().map(|&p| normalize(p)).collect(),
            labels,
        })
    }

    /// Loads an images file and a labels file.
    pub fn load(
        images_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
        num_classes: usize,
    ) -> Result<Self> {
        let images = read_images(images_path)?;
        let labels = read_labels(labels_path)?;
        Self::new(&images, labels, num_classes)
    }

    /// Number of pixels per image.
    pub fn image_size(&self) -> usize {
        self.image_size
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the pixels of sample `index`.
    pub fn image(&self, index: usize) -> &[f32] {
        let start = index * self.image_size;
        &self.images[start..start + self.image_size]
    }

    /// Returns the label of sample `index`.
    pub fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }

    /// Iterates over `(pixels, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[f32], u8)> {
        (0..self.len()).map(|i| (self.image(i), self.label(i)))
    }
}

/// Maps a `u8` intensity to `[0, 1]`.
pub fn normalize(value: u8) -> f32 {
    f32::from(value) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(pixels: Vec<u8>) -> IdxImages {
        IdxImages {
            rows: 1,
            cols: 2,
            pixels,
        }
    }

    #[test]
    fn test_normalize_range() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(255), 1.0);
        assert!((normalize(51) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_new_pairs_images_and_labels() {
        let dataset = Dataset::new(&images(vec![0, 255, 51, 102]), vec![3, 9], 10).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.image_size(), 2);
        assert_eq!(dataset.image(0), &[0.0, 1.0]);
        assert_eq!(dataset.label(1), 9);

        let pairs: Vec<_> = dataset.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].1, 9);
    }

    #[test]
    fn test_count_mismatch() {
        let err = Dataset::new(&images(vec![0, 0, 0, 0]), vec![1], 10).unwrap_err();
        assert!(matches!(
            err,
            MnistError::CountMismatch {
                images: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_label_out_of_range() {
        let err = Dataset::new(&images(vec![0, 0, 0, 0]), vec![1, 10], 10).unwrap_err();
        assert!(matches!(
            err,
            MnistError::LabelOutOfRange {
                index: 1,
                label: 10,
                num_classes: 10
            }
        ));
    }
}
