//! Point layers: the endpoint planes edges are drawn between.

use glam::Vec3;

use crate::error::{CoreError, Result};

/// An ordered set of 3D points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    points: Vec<Vec3>,
}

impl Layer {
    /// Creates a layer from points.
    #[must_use]
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Creates a layer from a flat `x, y, z, x, y, z, ...` slice.
    pub fn from_flat(coords: &[f32]) -> Result<Self> {
        if coords.len() % 3 != 0 {
            return Err(CoreError::MalformedLayer(coords.len()));
        }
        let points = coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { points })
    }

    /// Builds the 3x3 grid used by the default scene.
    ///
    /// Points lie in the plane `x = x`, with Y in {-0.5, 0, 0.5} varying
    /// fastest and Z ordered 0, -0.5, 0.5.
    #[must_use]
    pub fn grid3x3(x: f32) -> Self {
        let mut points = Vec::with_capacity(9);
        for z in [0.0, -0.5, 0.5] {
            for y in [-0.5, 0.0, 0.5] {
                points.push(Vec3::new(x, y, z));
            }
        }
        Self { points }
    }

    /// Returns the points of this layer.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the layer has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Vec3>> for Layer {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}
