//! synviz: an edge sampling visualization sandbox.
//!
//! Two 3x3 layers of points are joined index by index. Every frame the edges
//! are resampled at a fixed spacing and the samples are drawn with one of
//! three node passes: screen-space points, opaque sphere impostors or
//! transparent sphere impostors.
//!
//! ```no_run
//! use synviz::*;
//!
//! fn main() -> Result<()> {
//!     let options = ViewerOptions {
//!         pass: NodePass::Sphere,
//!         ..ViewerOptions::default()
//!     };
//!     run(options)?;
//!     Ok(())
//! }
//! ```

// Graphics code uses many casts between GPU types (u32, f32, usize)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod error;
pub mod headless;
pub mod scene;

pub use app::{pass_for_key, run, App};
pub use error::{Result, SynvizError};
pub use headless::{render_to_file, render_to_image};
pub use scene::{draw_frame, Scene};

pub use glam::{Mat4, Vec3};
pub use synviz_core::{
    Bounds, EdgeSampler, Layer, NodePass, PerformanceTracker, StatisticsFile, ViewerOptions, WindowOptions,
};
pub use synviz_render::{NodeRenderer, PassParams, RenderEngine, ShaderLibrary};
