//! Core abstractions for synviz.
//!
//! This crate provides the GPU-independent pieces of the viewer:
//! - [`Layer`] point layers and the [`EdgeSampler`] that discretizes the
//!   edges between two layers
//! - [`UniformSet`] typed shader parameters
//! - [`ViewerOptions`] configuration and persisted timing [`statistics`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod error;
pub mod layer;
pub mod options;
pub mod sampler;
pub mod statistics;
pub mod uniforms;

pub use bounds::Bounds;
pub use error::{CoreError, Result};
pub use layer::Layer;
pub use options::{NodePass, ViewerOptions, WindowOptions};
pub use sampler::{
    samples_per_edge, DegeneratePolicy, EdgeSample, EdgeSampler, SampleSet, MAX_SAMPLES,
};
pub use statistics::{PerformanceTracker, StatisticsFile, TimingStats};
pub use uniforms::{UniformLabels, UniformLookupError, UniformSet, UniformType, UniformValue};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3, Vec4};
