//! The edge scene and the per-frame driver.

use synviz_core::{Bounds, EdgeSampler, Layer, NodePass, PerformanceTracker, ViewerOptions};
use synviz_render::{Frame, NodeRenderer, PassParams, RenderEngine};

use crate::error::Result;

/// Name under which sampling time is recorded.
pub const SAMPLE_EDGES: &str = "sample_edges";

/// Two 3x3 point layers joined by sampled edges.
pub struct Scene {
    sampler: EdgeSampler,
    pass: NodePass,
    params: PassParams,
    noise_strength: Option<f32>,
}

impl Scene {
    /// Builds the scene described by `options` and samples it once.
    pub fn new(options: &ViewerOptions) -> Result<Self> {
        let mut sampler = EdgeSampler::from_reference(
            options.reference_start,
            options.reference_end,
            options.reference_divisions,
        )?
        .with_policy(options.degenerate_policy)
        .with_noise_seed(options.noise_seed);
        sampler.set_data(
            Layer::grid3x3(options.layer_one_x),
            Layer::grid3x3(options.layer_two_x),
        )?;
        sampler.sample_edges()?;

        log::info!(
            "scene: {} edges, {} samples at spacing {:.4}",
            sampler.edge_count(),
            sampler.sample_count(),
            sampler.spacing()
        );

        Ok(Self {
            sampler,
            pass: options.pass,
            params: PassParams {
                sphere_radius: options.sphere_radius,
                show_class: options.show_class,
                options: options.labeled_options.clone(),
            },
            noise_strength: options.noise_strength,
        })
    }

    /// Returns the edge sampler.
    pub fn sampler(&self) -> &EdgeSampler {
        &self.sampler
    }

    /// Returns the pass drawn each frame.
    pub fn pass(&self) -> NodePass {
        self.pass
    }

    /// Selects the pass drawn each frame.
    pub fn set_pass(&mut self, pass: NodePass) {
        if pass != self.pass {
            log::info!("switching to {}", pass.name());
            self.pass = pass;
        }
    }

    /// Returns the pass parameters.
    pub fn params(&self) -> &PassParams {
        &self.params
    }

    /// Returns the bounds of both layers.
    pub fn bounds(&self) -> Option<Bounds> {
        self.sampler.bounds()
    }

    /// Resamples every edge, then applies noise if enabled.
    pub fn update(&mut self, tracker: &mut PerformanceTracker) -> Result<()> {
        let sampler = &mut self.sampler;
        tracker.track(SAMPLE_EDGES, || sampler.sample_edges().map(|_| ()))?;
        if let Some(strength) = self.noise_strength {
            self.sampler.sample_noise(strength);
        }
        Ok(())
    }

    /// Issues the selected pass into `frame`.
    pub fn render(
        &self,
        engine: &RenderEngine,
        renderer: &mut NodeRenderer,
        frame: &Frame,
        tracker: &mut PerformanceTracker,
    ) -> Result<()> {
        let pass = self.pass;
        tracker.track(pass.name(), || {
            renderer.render(pass, engine, frame, &self.sampler, &self.params)
        })?;
        Ok(())
    }
}

/// Runs one frame: clear, resample, draw, present.
pub fn draw_frame(
    engine: &RenderEngine,
    renderer: &mut NodeRenderer,
    scene: &mut Scene,
    tracker: &mut PerformanceTracker,
) -> Result<()> {
    let frame = engine.begin_frame()?;
    engine.clear(&frame);
    scene.update(tracker)?;
    scene.render(engine, renderer, &frame, tracker)?;
    engine.present(frame);
    Ok(())
}
