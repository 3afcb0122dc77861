//! Edge sampling between two parallel point layers.
//!
//! Point `i` of the first layer is joined to point `i` of the second layer
//! by a straight edge. Each edge is discretized into samples placed at arc
//! length `k * spacing` for `k = 0..=n`, where `n = floor(length / spacing)`
//! (with a small tolerance so exact multiples keep their end point).

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{CoreError, Result};
use crate::layer::Layer;

/// Relative tolerance used when counting how many spacings fit on an edge.
const SPACING_EPSILON: f32 = 1e-4;

/// Edges shorter than this are treated as degenerate.
const MIN_EDGE_LENGTH: f32 = f32::EPSILON;

/// Largest sample set a single call to [`EdgeSampler::sample_edges`] may
/// produce.
pub const MAX_SAMPLES: usize = 1 << 22;

/// What to do with an edge whose endpoints coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DegeneratePolicy {
    /// Fail with [`CoreError::DegenerateEdge`].
    #[default]
    Reject,
    /// Emit a single sample at the shared endpoint.
    SinglePoint,
}

/// One sample along an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSample {
    /// World-space position.
    pub position: Vec3,
    /// Index of the edge (and of the layer points) this sample belongs to.
    pub edge: u32,
    /// Parameter along the edge, 0 at the first layer and 1 at the second.
    pub t: f32,
}

/// All samples of one pass over the edges, ordered edge by edge.
pub type SampleSet = Vec<EdgeSample>;

/// Returns how many samples an edge of the given length produces.
///
/// Spacing must be positive and finite; callers are expected to have
/// validated it. Counts too large for `usize` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn samples_per_edge(length: f32, spacing: f32) -> usize {
    if length < MIN_EDGE_LENGTH {
        return 1;
    }
    ((length / spacing + SPACING_EPSILON).floor() as usize).saturating_add(1)
}

/// Samples edges between two layers at a fixed spacing.
#[derive(Debug, Clone)]
pub struct EdgeSampler {
    spacing: f32,
    policy: DegeneratePolicy,
    noise_seed: u64,
    rng: StdRng,
    layer_a: Layer,
    layer_b: Layer,
    samples: SampleSet,
}

impl EdgeSampler {
    /// Creates a sampler with the given spacing between consecutive samples.
    pub fn new(spacing: f32) -> Result<Self> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(CoreError::InvalidSpacing(spacing));
        }
        Ok(Self {
            spacing,
            policy: DegeneratePolicy::default(),
            noise_seed: 0,
            rng: StdRng::seed_from_u64(0),
            layer_a: Layer::default(),
            layer_b: Layer::default(),
            samples: Vec::new(),
        })
    }

    /// Creates a sampler whose spacing is the distance between two reference
    /// points divided into `divisions` parts.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_reference(a: Vec3, b: Vec3, divisions: u32) -> Result<Self> {
        if divisions == 0 {
            return Err(CoreError::InvalidSpacing(f32::INFINITY));
        }
        Self::new(a.distance(b) / divisions as f32)
    }

    /// Sets the policy for zero-length edges.
    #[must_use]
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the seed used by [`EdgeSampler::sample_noise`].
    #[must_use]
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the two layers. They must have the same number of points.
    pub fn set_data(&mut self, layer_a: Layer, layer_b: Layer) -> Result<()> {
        if layer_a.len() != layer_b.len() {
            return Err(CoreError::SizeMismatch {
                expected: layer_a.len(),
                actual: layer_b.len(),
            });
        }
        self.layer_a = layer_a;
        self.layer_b = layer_b;
        self.samples.clear();
        Ok(())
    }

    /// Regenerates the sample set from the current layers.
    ///
    /// On error the previous sample set is left untouched.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn sample_edges(&mut self) -> Result<&[EdgeSample]> {
        let mut samples = Vec::with_capacity(self.expected_sample_count()?);

        for (index, (&start, &end)) in self
            .layer_a
            .points()
            .iter()
            .zip(self.layer_b.points())
            .enumerate()
        {
            let edge = index as u32;
            let length = start.distance(end);

            if length < MIN_EDGE_LENGTH {
                match self.policy {
                    DegeneratePolicy::Reject => return Err(CoreError::DegenerateEdge { index }),
                    DegeneratePolicy::SinglePoint => {
                        samples.push(EdgeSample {
                            position: start,
                            edge,
                            t: 0.0,
                        });
                        continue;
                    }
                }
            }

            let count = samples_per_edge(length, self.spacing);
            samples.extend((0..count).map(|k| {
                let t = (k as f32 * self.spacing / length).min(1.0);
                EdgeSample {
                    position: start.lerp(end, t),
                    edge,
                    t,
                }
            }));
        }

        log::trace!(
            "sampled {} edges into {} points",
            self.edge_count(),
            samples.len()
        );

        self.samples = samples;
        self.rng = StdRng::seed_from_u64(self.noise_seed);
        Ok(&self.samples)
    }

    /// Jitters every sample by up to `strength * spacing` along each axis.
    ///
    /// The jitter is uniform and drawn from a generator reseeded by every
    /// call to [`EdgeSampler::sample_edges`], so the same sequence of calls
    /// produces the same output.
    pub fn sample_noise(&mut self, strength: f32) {
        if !strength.is_finite() || strength <= 0.0 {
            log::warn!("ignoring noise strength {strength}");
            return;
        }
        let bound = strength * self.spacing;
        for sample in &mut self.samples {
            let jitter = Vec3::new(
                self.rng.gen_range(-bound..=bound),
                self.rng.gen_range(-bound..=bound),
                self.rng.gen_range(-bound..=bound),
            );
            sample.position += jitter;
        }
    }

    /// Returns the current sample set.
    #[must_use]
    pub fn samples(&self) -> &[EdgeSample] {
        &self.samples
    }

    /// Returns the number of samples in the current sample set.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns the number of edges (index-aligned point pairs).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.layer_a.len()
    }

    /// Returns the spacing between consecutive samples.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Returns the degenerate-edge policy.
    #[must_use]
    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Returns the bounds of both layers, or `None` if they are empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.layer_a.points().iter().chain(self.layer_b.points()))
    }

    /// Total sample count of the current layers, or
    /// [`CoreError::TooManySamples`] at the first edge that pushes it past
    /// [`MAX_SAMPLES`].
    fn expected_sample_count(&self) -> Result<usize> {
        let mut total = 0usize;
        for (edge, (a, b)) in self
            .layer_a
            .points()
            .iter()
            .zip(self.layer_b.points())
            .enumerate()
        {
            total = total.saturating_add(samples_per_edge(a.distance(*b), self.spacing));
            if total > MAX_SAMPLES {
                return Err(CoreError::TooManySamples {
                    edge,
                    count: total,
                    limit: MAX_SAMPLES,
                });
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_point_layers() -> (Layer, Layer) {
        let ys = [-0.5, 0.0, 0.5];
        let a = ys.iter().map(|&y| Vec3::new(-0.75, y, 0.0)).collect::<Vec<_>>();
        let b = ys.iter().map(|&y| Vec3::new(0.75, y, 0.0)).collect::<Vec<_>>();
        (Layer::new(a), Layer::new(b))
    }

    fn reference_sampler() -> EdgeSampler {
        EdgeSampler::from_reference(Vec3::new(-0.5, -0.3, 0.0), Vec3::new(0.5, -0.3, 0.0), 50)
            .unwrap()
    }

    #[test]
    fn test_reference_spacing() {
        let sampler = reference_sampler();
        assert!((sampler.spacing() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_three_edges_of_length_one_and_a_half() {
        let (a, b) = three_point_layers();
        let mut sampler = reference_sampler();
        sampler.set_data(a, b).unwrap();
        let samples = sampler.sample_edges().unwrap();

        assert_eq!(samples.len(), 3 * 76);
        for edge in 0..3 {
            let edge_samples: Vec<_> = samples.iter().filter(|s| s.edge == edge).collect();
            assert_eq!(edge_samples.len(), 76);
            assert_eq!(edge_samples[0].position.x, -0.75);
            assert!((edge_samples[75].position.x - 0.75).abs() < 1e-4);
        }
    }

    #[test]
    fn test_samples_are_evenly_spaced_and_ordered() {
        let (a, b) = three_point_layers();
        let mut sampler = reference_sampler();
        sampler.set_data(a, b).unwrap();
        let samples = sampler.sample_edges().unwrap();

        for pair in samples.windows(2).filter(|w| w[0].edge == w[1].edge) {
            let step = pair[0].position.distance(pair[1].position);
            assert!((step - 0.02).abs() < 1e-4, "step was {step}");
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn test_mismatched_layers() {
        let mut sampler = reference_sampler();
        let err = sampler
            .set_data(Layer::grid3x3(-0.75), Layer::new(vec![Vec3::ZERO]))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::SizeMismatch {
                expected: 9,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_invalid_spacing() {
        assert!(matches!(
            EdgeSampler::new(0.0),
            Err(CoreError::InvalidSpacing(_))
        ));
        assert!(EdgeSampler::new(-1.0).is_err());
        assert!(EdgeSampler::new(f32::NAN).is_err());
        assert!(EdgeSampler::from_reference(Vec3::ZERO, Vec3::X, 0).is_err());
        assert!(EdgeSampler::from_reference(Vec3::ZERO, Vec3::ZERO, 10).is_err());
    }

    #[test]
    fn test_degenerate_edge_rejected() {
        let mut sampler = reference_sampler();
        let a = Layer::new(vec![Vec3::ZERO, Vec3::Y]);
        let b = Layer::new(vec![Vec3::X, Vec3::Y]);
        sampler.set_data(a, b).unwrap();
        let err = sampler.sample_edges().unwrap_err();
        assert!(matches!(err, CoreError::DegenerateEdge { index: 1 }));
        assert_eq!(sampler.sample_count(), 0);
    }

    #[test]
    fn test_degenerate_edge_single_point() {
        let mut sampler = reference_sampler().with_policy(DegeneratePolicy::SinglePoint);
        let a = Layer::new(vec![Vec3::Y]);
        let b = Layer::new(vec![Vec3::Y]);
        sampler.set_data(a, b).unwrap();
        let samples = sampler.sample_edges().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].position, Vec3::Y);
    }

    #[test]
    fn test_failed_resample_keeps_previous_samples() {
        let (a, b) = three_point_layers();
        let mut sampler = reference_sampler();
        sampler.set_data(a, b).unwrap();
        sampler.sample_edges().unwrap();
        let before = sampler.sample_count();

        sampler.layer_b = sampler.layer_a.clone();
        assert!(sampler.sample_edges().is_err());
        assert_eq!(sampler.sample_count(), before);
    }

    #[test]
    fn test_noise_is_bounded_and_reproducible() {
        let (a, b) = three_point_layers();
        let mut sampler = reference_sampler().with_noise_seed(7);
        sampler.set_data(a, b).unwrap();

        let clean = sampler.sample_edges().unwrap().to_vec();
        sampler.sample_noise(0.5);
        let noisy = sampler.samples().to_vec();

        let bound = 0.5 * sampler.spacing() + 1e-6;
        let mut moved = false;
        for (c, n) in clean.iter().zip(&noisy) {
            let d = (n.position - c.position).abs();
            assert!(d.max_element() <= bound);
            moved |= d.max_element() > 0.0;
        }
        assert!(moved);

        sampler.sample_edges().unwrap();
        sampler.sample_noise(0.5);
        assert_eq!(sampler.samples(), noisy.as_slice());
    }

    #[test]
    fn test_huge_edge_is_rejected() {
        let mut sampler = EdgeSampler::new(0.02).unwrap();
        let a = Layer::new(vec![Vec3::X, Vec3::new(-1e20, 0.0, 0.0)]);
        let b = Layer::new(vec![Vec3::Y, Vec3::new(1e20, 0.0, 0.0)]);
        sampler.set_data(a, b).unwrap();

        let err = sampler.sample_edges().unwrap_err();
        assert!(matches!(
            err,
            CoreError::TooManySamples {
                edge: 1,
                limit: MAX_SAMPLES,
                ..
            }
        ));
        assert_eq!(sampler.sample_count(), 0);
    }

    #[test]
    fn test_tiny_reference_spacing_is_rejected() {
        let (a, b) = three_point_layers();
        let mut sampler = EdgeSampler::from_reference(
            Vec3::new(-0.5, -0.3, 0.0),
            Vec3::new(0.5, -0.3, 0.0),
            u32::MAX,
        )
        .unwrap();
        sampler.set_data(a, b).unwrap();
        assert!(matches!(
            sampler.sample_edges(),
            Err(CoreError::TooManySamples { edge: 0, .. })
        ));
    }

    #[test]
    fn test_total_over_limit_is_rejected() {
        // Each edge stays under the limit on its own.
        let spacing = 1.0;
        let per_edge = MAX_SAMPLES / 2 + 1;
        let length = (per_edge - 1) as f32;
        let a = Layer::new(vec![Vec3::ZERO; 3]);
        let b = Layer::new(vec![Vec3::new(length, 0.0, 0.0); 3]);
        let mut sampler = EdgeSampler::new(spacing).unwrap();
        sampler.set_data(a, b).unwrap();
        assert!(matches!(
            sampler.sample_edges(),
            Err(CoreError::TooManySamples { edge: 1, .. })
        ));
    }

    #[test]
    fn test_saturating_count() {
        assert_eq!(samples_per_edge(f32::MAX, f32::MIN_POSITIVE), usize::MAX);
        assert_eq!(samples_per_edge(1.5, 0.02), 76);
    }

    #[test]
    fn test_noise_ignores_non_positive_strength() {
        let (a, b) = three_point_layers();
        let mut sampler = reference_sampler();
        sampler.set_data(a, b).unwrap();
        let clean = sampler.sample_edges().unwrap().to_vec();
        sampler.sample_noise(0.0);
        sampler.sample_noise(-1.0);
        assert_eq!(sampler.samples(), clean.as_slice());
    }
}
