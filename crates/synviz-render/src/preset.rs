//! Fixed GPU state presets for the node passes.

/// Depth format used by every node pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth and blend state shared by a group of passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPreset {
    /// Depth test and depth write, no blending.
    Opaque,
    /// Depth test without depth write, premultiplied alpha blending.
    Transparent,
}

impl RenderPreset {
    /// Returns the depth-stencil state of this preset.
    #[must_use]
    pub fn depth_stencil(self) -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: self == RenderPreset::Opaque,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    /// Returns the blend state of this preset.
    #[must_use]
    pub fn blend(self) -> Option<wgpu::BlendState> {
        match self {
            RenderPreset::Opaque => Some(wgpu::BlendState::REPLACE),
            RenderPreset::Transparent => Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_writes_depth() {
        let depth = RenderPreset::Opaque.depth_stencil();
        assert!(depth.depth_write_enabled);
        assert_eq!(depth.depth_compare, wgpu::CompareFunction::Less);
        assert_eq!(RenderPreset::Opaque.blend(), Some(wgpu::BlendState::REPLACE));
    }

    #[test]
    fn test_transparent_tests_without_writing() {
        let depth = RenderPreset::Transparent.depth_stencil();
        assert!(!depth.depth_write_enabled);
        assert_eq!(depth.depth_compare, wgpu::CompareFunction::Less);
        let blend = RenderPreset::Transparent.blend().unwrap();
        assert_eq!(blend.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(blend.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }
}
