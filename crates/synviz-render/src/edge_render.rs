//! Edge samples as node data.

use synviz_core::{Bounds, EdgeSample, EdgeSampler};

use crate::node_render::{NodeSource, NodeVertex};

impl From<&EdgeSample> for NodeVertex {
    fn from(sample: &EdgeSample) -> Self {
        let p = sample.position;
        Self {
            // Every edge sample is equally important.
            position: [p.x, p.y, p.z, 1.0],
            attributes: [sample.edge as f32, sample.t, 0.0, 0.0],
        }
    }
}

impl NodeSource for EdgeSampler {
    fn node_count(&self) -> usize {
        self.sample_count()
    }

    fn fill_vertices(&self, out: &mut Vec<NodeVertex>) {
        out.extend(self.samples().iter().map(NodeVertex::from));
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.samples().iter().map(|s| &s.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use synviz_core::Layer;

    fn sampler() -> EdgeSampler {
        let mut sampler = EdgeSampler::new(0.5).unwrap();
        sampler
            .set_data(
                Layer::new(vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0)]),
                Layer::new(vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)]),
            )
            .unwrap();
        sampler.sample_edges().unwrap();
        sampler
    }

    #[test]
    fn test_vertices_follow_samples() {
        let sampler = sampler();
        let mut vertices = Vec::new();
        sampler.fill_vertices(&mut vertices);

        assert_eq!(sampler.node_count(), 10);
        assert_eq!(vertices.len(), 10);
        assert_eq!(vertices[0].position, [-1.0, 0.0, 0.0, 1.0]);
        assert_eq!(vertices[4].position, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(vertices[4].attributes[1], 1.0);
        assert_eq!(vertices[5].attributes[0], 1.0);
        assert_eq!(sampler.max_importance(), 1.0);
    }

    #[test]
    fn test_bounds_cover_samples() {
        let sampler = sampler();
        let bounds = NodeSource::bounds(&sampler).unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_unsampled_has_no_bounds() {
        let sampler = EdgeSampler::new(0.1).unwrap();
        assert_eq!(sampler.node_count(), 0);
        assert!(NodeSource::bounds(&sampler).is_none());
    }
}
