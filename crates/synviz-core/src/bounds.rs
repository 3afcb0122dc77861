//! Axis-aligned bounding boxes and view-space depth ranges.

use glam::{Mat4, Vec3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Creates bounds from explicit corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the bounds of a set of points, or `None` if the set is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the eight corners of the box.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Returns the `(nearest, farthest)` view-space depth of the box.
    ///
    /// Depth is measured along the viewing direction (`-z` in a right-handed
    /// view space) and clamped at zero for corners behind the camera.
    #[must_use]
    pub fn near_far_from_view(&self, view: Mat4) -> (f32, f32) {
        let (near, far) = self
            .corners()
            .iter()
            .map(|c| -view.transform_point3(*c).z)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(n, f), d| {
                (n.min(d), f.max(d))
            });
        (near.max(0.0), far.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let pts = [Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 3.0, 0.5)];
        let b = Bounds::from_points(&pts).unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 0.5));
        assert!(Bounds::from_points(&Vec::<Vec3>::new()).is_none());
    }

    #[test]
    fn test_near_far_from_view() {
        let b = Bounds::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let (near, far) = b.near_far_from_view(view);
        assert!((near - 4.0).abs() < 1e-5);
        assert!((far - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_near_clamped_inside_box() {
        let b = Bounds::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let (near, far) = b.near_far_from_view(view);
        assert_eq!(near, 0.0);
        assert!((far - 1.0).abs() < 1e-5);
    }
}
