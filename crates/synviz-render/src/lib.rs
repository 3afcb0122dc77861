//! Rendering backend for synviz.
//!
//! This crate provides the wgpu-based rendering engine, including:
//! - Windowed and headless render targets
//! - Shader registration and program assembly (WGSL)
//! - Depth and blend presets
//! - The point, sphere and transparent sphere node passes

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Graphics code uses many casts between GPU types (u32, f32, usize)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_lines)]

pub mod buffer;
pub mod camera;
pub mod edge_render;
pub mod engine;
pub mod error;
pub mod node_render;
pub mod preset;
pub mod shader;

pub use buffer::GrowableBuffer;
pub use camera::Camera;
pub use engine::{present_mode_for, Frame, RenderEngine};
pub use error::{RenderError, RenderResult};
pub use node_render::{
    pass_labels, pass_preset, pass_program, pass_uniforms, point_uniforms, sphere_uniforms,
    transparent_uniforms, NodeRenderer, NodeSource, NodeUniforms, NodeVertex, PassParams,
    POINT_SIZE, SPHERE_LABELS, TRANSPARENT_LABELS,
};
pub use preset::{RenderPreset, DEPTH_FORMAT};
pub use shader::{ShaderLibrary, ShaderProgram};
