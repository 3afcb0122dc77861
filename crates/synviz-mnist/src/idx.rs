//! IDX file parsing.
//!
//! IDX files start with a big-endian magic number whose low byte is the
//! number of dimensions, followed by one big-endian `u32` per dimension and
//! the raw `u8` data.

use std::fs;
use std::path::Path;

use crate::error::{MnistError, Result};

/// Magic number of a 3-dimensional `u8` file (images).
pub const IMAGES_MAGIC: u32 = 0x0000_0803;

/// Magic number of a 1-dimensional `u8` file (labels).
pub const LABELS_MAGIC: u32 = 0x0000_0801;

/// A stack of equally sized grayscale images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxImages {
    /// Rows per image.
    pub rows: usize,
    /// Columns per image.
    pub cols: usize,
    /// Row-major pixels of all images, one byte each.
    pub pixels: Vec<u8>,
}

impl IdxImages {
    /// Number of pixels in one image.
    pub fn image_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        if self.image_size() == 0 {
            0
        } else {
            self.pixels.len() / self.image_size()
        }
    }

    /// Returns true if there are no images.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses an images file.
pub fn parse_images(bytes: &[u8]) -> Result<IdxImages> {
    let dims = parse_header(bytes, IMAGES_MAGIC, 3)?;
    let (count, rows, cols) = (dims[0], dims[1], dims[2]);
    let len = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or(MnistError::Truncated {
            expected: usize::MAX,
            actual: bytes.len(),
        })?;
    let data = payload(bytes, 3, len)?;
    Ok(IdxImages {
        rows,
        cols,
        pixels: data.to_vec(),
    })
}

/// Parses a labels file.
pub fn parse_labels(bytes: &[u8]) -> Result<Vec<u8>> {
    let dims = parse_header(bytes, LABELS_MAGIC, 1)?;
    Ok(payload(bytes, 1, dims[0])?.to_vec())
}

/// Reads and parses an images file.
pub fn read_images(path: impl AsRef<Path>) -> Result<IdxImages> {
    let images = parse_images(&fs::read(path.as_ref())?)?;
    log::debug!(
        "read {} images of {}x{} from {}",
        images.len(),
        images.rows,
        images.cols,
        path.as_ref().display()
    );
    Ok(images)
}

/// Reads and parses a labels file.
pub fn read_labels(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let labels = parse_labels(&fs::read(path.as_ref())?)?;
    log::debug!("read {} labels from {}", labels.len(), path.as_ref().display());
    Ok(labels)
}

fn parse_header(bytes: &[u8], magic: u32, dims: usize) -> Result<Vec<usize>> {
    let header_len = 4 * (dims + 1);
    let truncated = MnistError::Truncated {
        expected: header_len,
        actual: bytes.len(),
    };
    if bytes.len() < 4 {
        return Err(truncated);
    }

    let actual = read_u32_be(bytes, 0);
    if actual != magic {
        return Err(MnistError::BadMagic {
            expected: magic,
            actual,
        });
    }
    if bytes.len() < header_len {
        return Err(truncated);
    }

    Ok((1..=dims)
        .map(|i| read_u32_be(bytes, 4 * i) as usize)
        .collect())
}

fn payload(bytes: &[u8], dims: usize, len: usize) -> Result<&[u8]> {
    let start = 4 * (dims + 1);
    let expected = start.saturating_add(len);
    bytes.get(start..expected).ok_or(MnistError::Truncated {
        expected,
        actual: bytes.len(),
    })
}

fn read_u32_be(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Encodes images in IDX format.
pub fn encode_images(images: &IdxImages) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16 + images.pixels.len());
    bytes.extend_from_slice(&IMAGES_MAGIC.to_be_bytes());
    for dim in [images.len(), images.rows, images.cols] {
        bytes.extend_from_slice(&(dim as u32).to_be_bytes());
    }
    bytes.extend_from_slice(&images.pixels);
    bytes
}

/// Encodes labels in IDX format.
pub fn encode_labels(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + labels.len());
    bytes.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}
