//! Rendering without a window.
//!
//! Draws a fixed number of frames of the scene into an offscreen target and
//! saves the last one. Useful for batch screenshots and for machines without
//! a display.

use std::path::Path;

use pollster::FutureExt;
use synviz_core::{PerformanceTracker, ViewerOptions};
use synviz_render::{NodeRenderer, RenderEngine};

use crate::app::shader_library;
use crate::error::Result;
use crate::scene::{draw_frame, Scene};

/// Renders `frames` frames (at least one) and returns the RGBA pixels of the
/// last, with the timings collected along the way.
pub fn render_to_image(
    options: &ViewerOptions,
    frames: u32,
) -> Result<(Vec<u8>, PerformanceTracker)> {
    let (engine, tracker) = render_frames(options, frames)?;
    Ok((engine.capture()?, tracker))
}

/// Renders `frames` frames (at least one) and saves the last as a PNG file.
pub fn render_to_file(
    options: &ViewerOptions,
    frames: u32,
    path: impl AsRef<Path>,
) -> Result<PerformanceTracker> {
    let (engine, tracker) = render_frames(options, frames)?;
    engine.save_capture(path)?;
    Ok(tracker)
}

fn render_frames(
    options: &ViewerOptions,
    frames: u32,
) -> Result<(RenderEngine, PerformanceTracker)> {
    let mut engine =
        RenderEngine::new_headless(options.window.width, options.window.height).block_on()?;
    engine.set_background(options.background_color);

    let mut scene = Scene::new(options)?;
    if let Some(bounds) = scene.bounds() {
        engine.camera.look_at_bounds(&bounds);
    }
    let mut renderer = NodeRenderer::new(&engine, &shader_library(options))?;
    let mut tracker = PerformanceTracker::new();

    for _ in 0..frames.max(1) {
        draw_frame(&engine, &mut renderer, &mut scene, &mut tracker)?;
    }
    log::debug!("rendered {} headless frames", frames.max(1));

    Ok((engine, tracker))
}
