//! Split archive format.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! b"SVZA" | u32 version | u32 header length | JSON header | payload
//! ```
//!
//! The payload holds, class after class, `count * image_size` `f32` pixels
//! followed by `count` `u32` labels. Offsets in the header are byte offsets
//! from the start of the payload.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MnistError, Result};
use crate::partition::{ClassBucket, Partition};

/// Magic bytes at the start of every archive.
pub const ARCHIVE_MAGIC: [u8; 4] = *b"SVZA";

/// Current archive format version.
pub const ARCHIVE_VERSION: u32 = 1;

const PREFIX_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ArchiveHeader {
    image_size: usize,
    classes: Vec<ClassEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClassEntry {
    label: u32,
    count: usize,
    images_offset: usize,
    labels_offset: usize,
}

/// Encodes a partition.
pub fn encode_archive(partition: &Partition) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    let mut classes = Vec::with_capacity(partition.classes.len());

    for bucket in &partition.classes {
        let images_offset = payload.len();
        for pixel in &bucket.images {
            payload.extend_from_slice(&pixel.to_le_bytes());
        }
        let labels_offset = payload.len();
        for label in &bucket.labels {
            payload.extend_from_slice(&label.to_le_bytes());
        }
        classes.push(ClassEntry {
            label: bucket.label,
            count: bucket.count(),
            images_offset,
            labels_offset,
        });
    }

    let header = serde_json::to_vec(&ArchiveHeader {
        image_size: partition.image_size,
        classes,
    })?;
    let header_len = u32::try_from(header.len())
        .map_err(|_| MnistError::BadArchive("header too large".to_string()))?;

    let mut bytes = Vec::with_capacity(PREFIX_LEN + header.len() + payload.len());
    bytes.extend_from_slice(&ARCHIVE_MAGIC);
    bytes.extend_from_slice(&ARCHIVE_VERSION.to_le_bytes());
    bytes.extend_from_slice(&header_len.to_le_bytes());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decodes a partition.
pub fn decode_archive(bytes: &[u8]) -> Result<Partition> {
    if bytes.len() < PREFIX_LEN {
        return Err(MnistError::Truncated {
            expected: PREFIX_LEN,
            actual: bytes.len(),
        });
    }
    if bytes[..4] != ARCHIVE_MAGIC {
        return Err(MnistError::BadArchive("missing SVZA magic".to_string()));
    }
    let version = read_u32_le(&bytes[4..8]);
    if version != ARCHIVE_VERSION {
        return Err(MnistError::BadArchive(format!(
            "unsupported version {version}"
        )));
    }

    let header_len = read_u32_le(&bytes[8..12]) as usize;
    let payload_start = PREFIX_LEN + header_len;
    let header_bytes = bytes
        .get(PREFIX_LEN..payload_start)
        .ok_or(MnistError::Truncated {
            expected: payload_start,
            actual: bytes.len(),
        })?;
    let header: ArchiveHeader = serde_json::from_slice(header_bytes)?;
    let payload = &bytes[payload_start..];

    let classes = header
        .classes
        .iter()
        .map(|entry| {
            let pixels = entry
                .count
                .checked_mul(header.image_size)
                .ok_or_else(|| MnistError::BadArchive(format!("class {} too large", entry.label)))?;
            let images = slice(payload, entry.images_offset, pixels, payload_start)?;
            let labels = slice(payload, entry.labels_offset, entry.count, payload_start)?;

            let labels: Vec<u32> = labels.chunks_exact(4).map(read_u32_le).collect();
            if let Some(other) = labels.iter().find(|&&l| l != entry.label) {
                return Err(MnistError::BadArchive(format!(
                    "label {other} stored in class {}",
                    entry.label
                )));
            }

            Ok(ClassBucket {
                label: entry.label,
                images: images
                    .chunks_exact(4)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
                labels,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Partition {
        image_size: header.image_size,
        classes,
    })
}

/// Writes a partition to `path`, creating parent directories.
pub fn write_archive(path: impl AsRef<Path>, partition: &Partition) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encode_archive(partition)?)?;
    Ok(())
}

/// Reads a partition from `path`.
pub fn read_archive(path: impl AsRef<Path>) -> Result<Partition> {
    decode_archive(&fs::read(path)?)
}

/// Returns `count` 4-byte values starting at `offset`.
fn slice(payload: &[u8], offset: usize, count: usize, payload_start: usize) -> Result<&[u8]> {
    let len = count
        .checked_mul(4)
        .ok_or_else(|| MnistError::BadArchive("entry too large".to_string()))?;
    let end = offset.saturating_add(len);
    payload.get(offset..end).ok_or(MnistError::Truncated {
        expected: payload_start.saturating_add(end),
        actual: payload_start + payload.len(),
    })
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
