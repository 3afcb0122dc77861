//! Configuration options for the viewer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampler::DegeneratePolicy;

/// Which node pass the frame driver issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodePass {
    /// Fixed-size screen-space points.
    Point,
    /// Opaque Phong-shaded sphere impostors.
    Sphere,
    /// Blended sphere impostors with depth-dependent opacity.
    #[default]
    TransparentSphere,
}

impl NodePass {
    /// All passes, in their canonical order.
    pub const ALL: [NodePass; 3] = [NodePass::Point, NodePass::Sphere, NodePass::TransparentSphere];

    /// Returns the pass name used in logs and statistics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NodePass::Point => "render_point",
            NodePass::Sphere => "render_sphere",
            NodePass::TransparentSphere => "render_transparent",
        }
    }
}

/// Window creation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Inner width in physical pixels.
    pub width: u32,
    /// Inner height in physical pixels.
    pub height: u32,
    /// Swap interval: 0 presents immediately, anything else waits for vsync.
    pub swap_interval: u32,
    /// Outer position of the window, if it should be placed explicitly.
    pub position: Option<(i32, i32)>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Testing".to_string(),
            width: 1920,
            height: 1080,
            swap_interval: 1,
            position: Some((0, 0)),
        }
    }
}

/// Global configuration options for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Window settings.
    pub window: WindowOptions,

    /// Node pass drawn every frame.
    pub pass: NodePass,

    /// Sphere impostor radius (world units).
    pub sphere_radius: f32,

    /// Class index highlighted by the sphere passes.
    pub show_class: i32,

    /// Labeled shader options, e.g. `"Base Opacity"`.
    pub labeled_options: HashMap<String, f32>,

    /// X coordinate of the first point layer.
    pub layer_one_x: f32,

    /// X coordinate of the second point layer.
    pub layer_two_x: f32,

    /// First reference point for the sample spacing.
    pub reference_start: Vec3,

    /// Second reference point for the sample spacing.
    pub reference_end: Vec3,

    /// Number of parts the reference distance is divided into.
    pub reference_divisions: u32,

    /// How zero-length edges are handled.
    pub degenerate_policy: DegeneratePolicy,

    /// Per-frame noise strength (relative to the spacing); `None` disables noise.
    pub noise_strength: Option<f32>,

    /// Seed for the noise generator.
    pub noise_seed: u64,

    /// Where timing statistics are read from and written to.
    pub statistics_path: PathBuf,

    /// Directory with WGSL overrides, looked up by logical shader name.
    pub shader_dir: Option<PathBuf>,

    /// Background color.
    pub background_color: Vec3,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            window: WindowOptions::default(),
            pass: NodePass::TransparentSphere,
            sphere_radius: 0.03,
            show_class: 0,
            labeled_options: HashMap::new(),
            layer_one_x: -0.75,
            layer_two_x: 0.75,
            reference_start: Vec3::new(-0.5, -0.3, 0.0),
            reference_end: Vec3::new(0.5, -0.3, 0.0),
            reference_divisions: 50,
            degenerate_policy: DegeneratePolicy::Reject,
            noise_strength: None,
            noise_seed: 0,
            statistics_path: PathBuf::from("statistics.json"),
            shader_dir: None,
            background_color: Vec3::new(0.1, 0.1, 0.1),
        }
    }
}

impl ViewerOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let options = serde_json::from_str(&text)?;
        log::info!("loaded options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Saves options as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_scene() {
        let options = ViewerOptions::default();
        assert_eq!(options.window.width, 1920);
        assert_eq!(options.window.height, 1080);
        assert_eq!(options.window.swap_interval, 1);
        assert_eq!(options.pass, NodePass::TransparentSphere);
        assert_eq!(options.reference_divisions, 50);
        assert!(options.noise_strength.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ViewerOptions =
            serde_json::from_str(r#"{ "pass": "sphere", "window": { "title": "edges" } }"#).unwrap();
        assert_eq!(options.pass, NodePass::Sphere);
        assert_eq!(options.window.title, "edges");
        assert_eq!(options.window.width, 1920);
        assert_eq!(options.sphere_radius, 0.03);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");

        let mut options = ViewerOptions::default();
        options.labeled_options.insert("Base Opacity".into(), 0.25);
        options.noise_strength = Some(0.5);
        options.save(&path).unwrap();

        assert_eq!(ViewerOptions::load(&path).unwrap(), options);
    }

    #[test]
    fn test_pass_names() {
        let names: Vec<_> = NodePass::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["render_point", "render_sphere", "render_transparent"]);
    }
}
