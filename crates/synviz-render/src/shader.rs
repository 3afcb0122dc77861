//! Shader management.
//!
//! Shaders are registered under logical names such as `node/sample`. A
//! program is assembled from the shared prelude, a vertex shader and a
//! fragment shader. Sources are embedded at compile time and can be
//! overridden by `<dir>/<logical name>.wgsl` files on disk.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{RenderError, RenderResult};

/// Logical name of the prelude shared by all node programs.
pub const NODE_COMMON: &str = "node/common";

const BUILTIN_SHADERS: &[(&str, &str)] = &[
    (NODE_COMMON, include_str!("shaders/node/common.wgsl")),
    ("node/sample", include_str!("shaders/node/sample.wgsl")),
    (
        "node/sample_impostor",
        include_str!("shaders/node/sample_impostor.wgsl"),
    ),
    (
        "node/point_to_sphere_impostor_phong",
        include_str!("shaders/node/point_to_sphere_impostor_phong.wgsl"),
    ),
    (
        "node/point_to_sphere_impostor_transparent",
        include_str!("shaders/node/point_to_sphere_impostor_transparent.wgsl"),
    ),
    (
        "basic/discard_screen_color",
        include_str!("shaders/basic/discard_screen_color.wgsl"),
    ),
];

/// A named vertex/fragment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    /// Program name, used as the debug label.
    pub name: &'static str,
    /// Logical name of the vertex shader.
    pub vertex: &'static str,
    /// Logical name of the fragment shader.
    pub fragment: &'static str,
}

/// Registry of WGSL sources by logical name.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    sources: HashMap<String, Cow<'static, str>>,
    override_dir: Option<PathBuf>,
}

impl ShaderLibrary {
    /// Creates a library holding the built-in shaders.
    #[must_use]
    pub fn new() -> Self {
        let sources = BUILTIN_SHADERS
            .iter()
            .map(|(name, source)| ((*name).to_string(), Cow::Borrowed(*source)))
            .collect();
        Self {
            sources,
            override_dir: None,
        }
    }

    /// Looks for `<dir>/<logical name>.wgsl` before the registered source.
    #[must_use]
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    /// Registers or replaces a source.
    pub fn register(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources
            .insert(name.into(), Cow::Owned(source.into()));
    }

    /// Returns true if a shader with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Returns the source of a shader.
    pub fn source(&self, name: &str) -> RenderResult<Cow<'_, str>> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(format!("{name}.wgsl"));
            if path.is_file() {
                log::debug!("loading shader '{name}' from {}", path.display());
                return std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| RenderError::ShaderLoadFailed {
                        name: name.to_string(),
                        source,
                    });
            }
        }
        self.sources
            .get(name)
            .map(|s| Cow::Borrowed(s.as_ref()))
            .ok_or_else(|| RenderError::ShaderNotFound(name.to_string()))
    }

    /// Assembles the full WGSL source of a program.
    pub fn program_source(&self, program: &ShaderProgram) -> RenderResult<String> {
        let common = self.source(NODE_COMMON)?;
        let vertex = self.source(program.vertex)?;
        let fragment = self.source(program.fragment)?;
        Ok(format!("{common}\n\n{vertex}\n\n{fragment}"))
    }

    /// Compiles a program, reporting validation errors instead of panicking.
    pub fn create_module(
        &self,
        device: &wgpu::Device,
        program: &ShaderProgram,
    ) -> RenderResult<wgpu::ShaderModule> {
        let source = self.program_source(program)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(program.name),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::ShaderCompilationFailed(format!(
                "{}: {error}",
                program.name
            )));
        }

        Ok(module)
    }
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::new()
    }
}
