//! Viewer error types.

use synviz_core::CoreError;
use synviz_render::RenderError;
use thiserror::Error;

/// Errors that end a viewer run.
#[derive(Error, Debug)]
pub enum SynvizError {
    /// Sampling, options or statistics failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Graphics failure.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The event loop could not be created or run.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

/// A specialized Result type for the viewer.
pub type Result<T> = std::result::Result<T, SynvizError>;
