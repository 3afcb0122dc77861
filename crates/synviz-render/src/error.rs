//! Rendering error types.

use synviz_core::{CoreError, UniformLookupError};
use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create wgpu adapter.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreationFailed(#[from] wgpu::CreateSurfaceError),

    /// Surface configuration failed.
    #[error("surface configuration failed")]
    SurfaceConfigurationFailed,

    /// No shader registered under this logical name.
    #[error("shader '{0}' not found")]
    ShaderNotFound(String),

    /// Reading a shader override from disk failed.
    #[error("failed to load shader '{name}': {source}")]
    ShaderLoadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Shader compilation failed.
    #[error("shader compilation failed: {0}")]
    ShaderCompilationFailed(String),

    /// A pass received a uniform set it cannot pack.
    #[error("invalid uniforms for {pass}: {source}")]
    Uniform {
        pass: &'static str,
        #[source]
        source: UniformLookupError,
    },

    /// Surface lost.
    #[error("surface lost")]
    SurfaceLost,

    /// Surface outdated.
    #[error("surface outdated")]
    SurfaceOutdated,

    /// Out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// Timeout waiting for GPU.
    #[error("timeout waiting for GPU")]
    Timeout,

    /// Reading back a rendered frame failed.
    #[error("GPU buffer mapping failed")]
    BufferMapFailed,

    /// Saving a captured frame failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Core data error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
