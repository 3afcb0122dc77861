//! Node rendering passes.
//!
//! Every pass draws the same storage buffer of [`NodeVertex`] records, six
//! vertices per node, with its own program, uniform set and [`RenderPreset`].
//! A pass ends and is submitted before the call returns, so whatever runs
//! next observes its writes.

use std::collections::HashMap;
use std::num::NonZeroU64;

use synviz_core::{Bounds, NodePass, UniformLabels, UniformLookupError, UniformSet};

use crate::buffer::{create_uniform_buffer, GrowableBuffer};
use crate::camera::Camera;
use crate::engine::{Frame, RenderEngine};
use crate::error::{RenderError, RenderResult};
use crate::preset::RenderPreset;
use crate::shader::{ShaderLibrary, ShaderProgram};

/// Side of the screen-space squares drawn by the point pass, in pixels.
pub const POINT_SIZE: f32 = 10.0;

/// Labeled options of the sphere pass.
pub const SPHERE_LABELS: UniformLabels = &[
    ("Size", "object_radius"),
    ("Importance Threshold", "importance_threshold"),
];

/// Labeled options of the transparent sphere pass.
pub const TRANSPARENT_LABELS: UniformLabels = &[
    ("Size", "object_radius"),
    ("Base Opacity", "base_opacity"),
    ("Importance Opacity", "importance_opacity"),
    ("Depth Opacity", "depth_opacity"),
    ("Density Exponent", "opacity_exponent"),
    ("Importance Threshold", "importance_threshold"),
];

const DEFAULT_IMPORTANCE_THRESHOLD: f32 = 0.0;
const DEFAULT_BASE_OPACITY: f32 = 0.4;
const DEFAULT_IMPORTANCE_OPACITY: f32 = 1.0;
const DEFAULT_DEPTH_OPACITY: f32 = 0.5;
const DEFAULT_OPACITY_EXPONENT: f32 = 1.0;

/// GPU layout of one node.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeVertex {
    /// xyz position, w importance.
    pub position: [f32; 4],
    /// x class or edge index, y parameter along the edge.
    pub attributes: [f32; 4],
}

/// A source of nodes to draw.
pub trait NodeSource {
    /// Number of nodes currently available.
    fn node_count(&self) -> usize;

    /// Appends one vertex per node to `out`.
    fn fill_vertices(&self, out: &mut Vec<NodeVertex>);

    /// Largest importance value of the data.
    fn max_importance(&self) -> f32 {
        1.0
    }

    /// Axis-aligned bounds of the nodes, `None` when empty.
    fn bounds(&self) -> Option<Bounds>;
}

/// Per-pass parameters chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PassParams {
    /// Sphere radius in world units.
    pub sphere_radius: f32,
    /// Class drawn highlighted.
    pub show_class: i32,
    /// Labeled option values, keyed by label.
    pub options: HashMap<String, f32>,
}

impl Default for PassParams {
    fn default() -> Self {
        Self {
            sphere_radius: 0.03,
            show_class: 0,
            options: HashMap::new(),
        }
    }
}

/// Returns the program of a pass.
#[must_use]
pub fn pass_program(pass: NodePass) -> ShaderProgram {
    match pass {
        NodePass::Point => ShaderProgram {
            name: "render_point",
            vertex: "node/sample",
            fragment: "basic/discard_screen_color",
        },
        NodePass::Sphere => ShaderProgram {
            name: "render_sphere",
            vertex: "node/sample_impostor",
            fragment: "node/point_to_sphere_impostor_phong",
        },
        NodePass::TransparentSphere => ShaderProgram {
            name: "render_transparent",
            vertex: "node/sample_impostor",
            fragment: "node/point_to_sphere_impostor_transparent",
        },
    }
}

/// Returns the GPU state preset of a pass.
#[must_use]
pub fn pass_preset(pass: NodePass) -> RenderPreset {
    match pass {
        NodePass::Point | NodePass::Sphere => RenderPreset::Opaque,
        NodePass::TransparentSphere => RenderPreset::Transparent,
    }
}

/// Returns the labeled options understood by a pass.
#[must_use]
pub fn pass_labels(pass: NodePass) -> UniformLabels {
    match pass {
        NodePass::Point => &[],
        NodePass::Sphere => SPHERE_LABELS,
        NodePass::TransparentSphere => TRANSPARENT_LABELS,
    }
}

/// Uniforms of the point pass.
#[must_use]
pub fn point_uniforms(camera: &Camera, width: u32, height: u32) -> UniformSet {
    UniformSet::new()
        .with("projection", camera.projection_matrix())
        .with("view", camera.view_matrix())
        .with("screen_width", width as f32)
        .with("screen_height", height as f32)
}

/// Uniforms of the opaque sphere pass.
#[must_use]
pub fn sphere_uniforms(camera: &Camera, importance_max: f32, params: &PassParams) -> UniformSet {
    let mut uniforms = UniformSet::new()
        .with("projection", camera.projection_matrix())
        .with("view", camera.view_matrix())
        .with("object_radius", params.sphere_radius)
        .with("importance_max", importance_max)
        .with("show_class", params.show_class);
    uniforms.apply_labeled(SPHERE_LABELS, &params.options);
    uniforms
}

/// Uniforms of the transparent sphere pass.
///
/// `near` and `far` are the view-space depths of the closest and farthest
/// points of the data.
#[must_use]
pub fn transparent_uniforms(
    camera: &Camera,
    near: f32,
    far: f32,
    importance_max: f32,
    params: &PassParams,
) -> UniformSet {
    let mut uniforms = UniformSet::new()
        .with("projection", camera.projection_matrix())
        .with("view", camera.view_matrix())
        .with("farthest_point_view_z", far)
        .with("nearest_point_view_z", near)
        .with("object_radius", params.sphere_radius)
        .with("importance_max", importance_max)
        .with("show_class", params.show_class);
    uniforms.apply_labeled(TRANSPARENT_LABELS, &params.options);
    uniforms
}

/// Builds the uniform set of `pass` for the given source.
pub fn pass_uniforms<S: NodeSource + ?Sized>(
    pass: NodePass,
    camera: &Camera,
    viewport: (u32, u32),
    source: &S,
    params: &PassParams,
) -> UniformSet {
    match pass {
        NodePass::Point => point_uniforms(camera, viewport.0, viewport.1),
        NodePass::Sphere => sphere_uniforms(camera, source.max_importance(), params),
        NodePass::TransparentSphere => {
            let (near, far) = source
                .bounds()
                .map_or((camera.near, camera.far), |b| {
                    b.near_far_from_view(camera.view_matrix())
                });
            transparent_uniforms(camera, near, far, source.max_importance(), params)
        }
    }
}

/// GPU uniform block shared by all node programs.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct NodeUniforms {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub screen_size: [f32; 2],
    pub point_size: f32,
    pub object_radius: f32,
    pub importance_max: f32,
    pub importance_threshold: f32,
    pub show_class: i32,
    pub _pad0: f32,
    pub nearest_view_z: f32,
    pub farthest_view_z: f32,
    pub base_opacity: f32,
    pub importance_opacity: f32,
    pub depth_opacity: f32,
    pub opacity_exponent: f32,
    pub _pad1: [f32; 2],
}

impl Default for NodeUniforms {
    fn default() -> Self {
        Self {
            projection: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            screen_size: [1.0, 1.0],
            point_size: POINT_SIZE,
            object_radius: 0.0,
            importance_max: 1.0,
            importance_threshold: DEFAULT_IMPORTANCE_THRESHOLD,
            show_class: 0,
            _pad0: 0.0,
            nearest_view_z: 0.0,
            farthest_view_z: 1.0,
            base_opacity: DEFAULT_BASE_OPACITY,
            importance_opacity: DEFAULT_IMPORTANCE_OPACITY,
            depth_opacity: DEFAULT_DEPTH_OPACITY,
            opacity_exponent: DEFAULT_OPACITY_EXPONENT,
            _pad1: [0.0; 2],
        }
    }
}

impl NodeUniforms {
    /// Packs the uniform set of `pass`.
    ///
    /// Every uniform the pass requires must be present with the right type.
    /// Labeled options that were not given keep their defaults.
    pub fn pack(pass: NodePass, uniforms: &UniformSet) -> RenderResult<Self> {
        Self::try_pack(pass, uniforms).map_err(|source| RenderError::Uniform {
            pass: pass.name(),
            source,
        })
    }

    fn try_pack(pass: NodePass, uniforms: &UniformSet) -> Result<Self, UniformLookupError> {
        let mut packed = Self {
            projection: uniforms.mat4("projection")?.to_cols_array_2d(),
            view: uniforms.mat4("view")?.to_cols_array_2d(),
            ..Self::default()
        };

        match pass {
            NodePass::Point => {
                packed.screen_size = [
                    uniforms.float("screen_width")?,
                    uniforms.float("screen_height")?,
                ];
            }
            NodePass::Sphere | NodePass::TransparentSphere => {
                packed.object_radius = uniforms.float("object_radius")?;
                packed.importance_max = uniforms.float("importance_max")?;
                packed.show_class = uniforms.int("show_class")?;
                packed.importance_threshold =
                    uniforms.float_or("importance_threshold", DEFAULT_IMPORTANCE_THRESHOLD)?;
            }
        }

        if pass == NodePass::TransparentSphere {
            packed.nearest_view_z = uniforms.float("nearest_point_view_z")?;
            packed.farthest_view_z = uniforms.float("farthest_point_view_z")?;
            packed.base_opacity = uniforms.float_or("base_opacity", DEFAULT_BASE_OPACITY)?;
            packed.importance_opacity =
                uniforms.float_or("importance_opacity", DEFAULT_IMPORTANCE_OPACITY)?;
            packed.depth_opacity = uniforms.float_or("depth_opacity", DEFAULT_DEPTH_OPACITY)?;
            packed.opacity_exponent =
                uniforms.float_or("opacity_exponent", DEFAULT_OPACITY_EXPONENT)?;
        }

        Ok(packed)
    }
}

/// GPU resources of the node passes.
pub struct NodeRenderer {
    point_pipeline: wgpu::RenderPipeline,
    sphere_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    node_buffer: GrowableBuffer<NodeVertex>,
    bind_group: wgpu::BindGroup,
    vertices: Vec<NodeVertex>,
}

impl NodeRenderer {
    /// Compiles the three node programs for the engine's color format.
    pub fn new(engine: &RenderEngine, shaders: &ShaderLibrary) -> RenderResult<Self> {
        let device = &engine.device;
        let color_format = engine.color_format();

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("node bind group layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<NodeUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                // Node storage buffer
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("node pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let build = |pass: NodePass| -> RenderResult<wgpu::RenderPipeline> {
            let program = pass_program(pass);
            let preset = pass_preset(pass);
            let module = shaders.create_module(device, &program)?;
            log::debug!(
                "built {} pipeline ({} / {})",
                program.name,
                program.vertex,
                program.fragment
            );
            Ok(device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(program.name),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: color_format,
                        blend: preset.blend(),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None, // Don't cull billboards
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(preset.depth_stencil()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            }))
        };

        let point_pipeline = build(NodePass::Point)?;
        let sphere_pipeline = build(NodePass::Sphere)?;
        let transparent_pipeline = build(NodePass::TransparentSphere)?;

        let uniform_buffer =
            create_uniform_buffer(device, &NodeUniforms::default(), Some("node uniforms"));
        let node_buffer = GrowableBuffer::new(device, 1024, "node buffer");
        let bind_group =
            Self::create_bind_group(device, &bind_group_layout, &uniform_buffer, &node_buffer);

        Ok(Self {
            point_pipeline,
            sphere_pipeline,
            transparent_pipeline,
            bind_group_layout,
            uniform_buffer,
            node_buffer,
            bind_group,
            vertices: Vec::new(),
        })
    }

    /// Draws fixed-size screen-space squares.
    pub fn render_point<S: NodeSource + ?Sized>(
        &mut self,
        engine: &RenderEngine,
        frame: &Frame,
        source: &S,
    ) -> RenderResult<()> {
        let uniforms = point_uniforms(&engine.camera, engine.width, engine.height);
        self.draw(NodePass::Point, engine, frame, source, &uniforms)
    }

    /// Draws opaque Phong-shaded sphere impostors.
    pub fn render_sphere<S: NodeSource + ?Sized>(
        &mut self,
        engine: &RenderEngine,
        frame: &Frame,
        source: &S,
        params: &PassParams,
    ) -> RenderResult<()> {
        let uniforms = pass_uniforms(
            NodePass::Sphere,
            &engine.camera,
            engine.dimensions(),
            source,
            params,
        );
        self.draw(NodePass::Sphere, engine, frame, source, &uniforms)
    }

    /// Draws blended sphere impostors whose opacity depends on depth and importance.
    pub fn render_transparent<S: NodeSource + ?Sized>(
        &mut self,
        engine: &RenderEngine,
        frame: &Frame,
        source: &S,
        params: &PassParams,
    ) -> RenderResult<()> {
        let uniforms = pass_uniforms(
            NodePass::TransparentSphere,
            &engine.camera,
            engine.dimensions(),
            source,
            params,
        );
        self.draw(NodePass::TransparentSphere, engine, frame, source, &uniforms)
    }

    /// Runs the selected pass.
    pub fn render<S: NodeSource + ?Sized>(
        &mut self,
        pass: NodePass,
        engine: &RenderEngine,
        frame: &Frame,
        source: &S,
        params: &PassParams,
    ) -> RenderResult<()> {
        match pass {
            NodePass::Point => self.render_point(engine, frame, source),
            NodePass::Sphere => self.render_sphere(engine, frame, source, params),
            NodePass::TransparentSphere => self.render_transparent(engine, frame, source, params),
        }
    }

    /// Number of nodes drawn by the last pass.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_buffer.len()
    }

    fn upload<S: NodeSource + ?Sized>(&mut self, engine: &RenderEngine, source: &S) {
        self.vertices.clear();
        self.vertices.reserve(source.node_count());
        source.fill_vertices(&mut self.vertices);

        if self
            .node_buffer
            .write(&engine.device, &engine.queue, &self.vertices)
        {
            self.bind_group = Self::create_bind_group(
                &engine.device,
                &self.bind_group_layout,
                &self.uniform_buffer,
                &self.node_buffer,
            );
        }
    }

    fn draw<S: NodeSource + ?Sized>(
        &mut self,
        pass: NodePass,
        engine: &RenderEngine,
        frame: &Frame,
        source: &S,
        uniforms: &UniformSet,
    ) -> RenderResult<()> {
        let packed = NodeUniforms::pack(pass, uniforms)?;
        self.upload(engine, source);
        engine
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&packed));

        let vertex_count = u32::try_from(self.node_buffer.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(6);
        let pipeline = match pass {
            NodePass::Point => &self.point_pipeline,
            NodePass::Sphere => &self.sphere_pipeline,
            NodePass::TransparentSphere => &self.transparent_pipeline,
        };

        let mut encoder = engine
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some(pass.name()),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some(pass.name()),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &engine.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if vertex_count > 0 {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.draw(0..vertex_count, 0..1);
            }
        }
        engine.queue.submit(std::iter::once(encoder.finish()));

        Ok(())
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        node_buffer: &GrowableBuffer<NodeVertex>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("node bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: node_buffer.buffer().as_entire_binding(),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};
    use synviz_core::UniformType;

    #[test]
    fn test_node_uniforms_size() {
        assert_eq!(std::mem::size_of::<NodeUniforms>(), 192);
        assert_eq!(std::mem::size_of::<NodeVertex>(), 32);
    }

    #[test]
    fn test_point_uniforms_names() {
        let camera = Camera::new(1.0);
        let set = point_uniforms(&camera, 1920, 1080);
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, ["projection", "screen_height", "screen_width", "view"]);
        assert_eq!(set.type_of("projection"), Some(UniformType::Mat4));
        assert_eq!(set.float("screen_width").unwrap(), 1920.0);
    }

    #[test]
    fn test_sphere_labels_override() {
        let camera = Camera::new(1.0);
        let mut params = PassParams::default();
        params.options.insert("Size".to_string(), 0.1);
        params.options.insert("Importance Threshold".to_string(), 0.25);
        params.options.insert("Unknown".to_string(), 9.0);

        let set = sphere_uniforms(&camera, 1.0, &params);
        assert_eq!(set.float("object_radius").unwrap(), 0.1);
        assert_eq!(set.float("importance_threshold").unwrap(), 0.25);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_pack_point() {
        let camera = Camera::new(2.0);
        let set = point_uniforms(&camera, 800, 400);
        let packed = NodeUniforms::pack(NodePass::Point, &set).unwrap();
        assert_eq!(packed.screen_size, [800.0, 400.0]);
        assert_eq!(packed.point_size, POINT_SIZE);
        assert_eq!(packed.view, camera.view_matrix().to_cols_array_2d());
    }

    #[test]
    fn test_pack_transparent_defaults() {
        let camera = Camera::new(1.0);
        let set = transparent_uniforms(&camera, 1.0, 4.0, 1.0, &PassParams::default());
        let packed = NodeUniforms::pack(NodePass::TransparentSphere, &set).unwrap();
        assert_eq!(packed.nearest_view_z, 1.0);
        assert_eq!(packed.farthest_view_z, 4.0);
        assert_eq!(packed.base_opacity, 0.4);
        assert_eq!(packed.importance_opacity, 1.0);
        assert_eq!(packed.depth_opacity, 0.5);
        assert_eq!(packed.opacity_exponent, 1.0);
        assert_eq!(packed.importance_threshold, 0.0);
        assert_eq!(packed.object_radius, 0.03);
    }

    #[test]
    fn test_pack_missing_uniform() {
        let set = UniformSet::new()
            .with("projection", Mat4::IDENTITY)
            .with("view", Mat4::IDENTITY);
        let err = NodeUniforms::pack(NodePass::Sphere, &set).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Uniform {
                pass: "render_sphere",
                source: UniformLookupError::Missing(ref name),
            } if name == "object_radius"
        ));
    }

    #[test]
    fn test_pack_wrong_type() {
        let camera = Camera::new(1.0);
        let mut set = sphere_uniforms(&camera, 1.0, &PassParams::default());
        set.set("show_class", 1.5_f32);
        let err = NodeUniforms::pack(NodePass::Sphere, &set).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Uniform {
                source: UniformLookupError::WrongType { .. },
                ..
            }
        ));
    }

    struct Fixed(Vec<Vec3>);

    impl NodeSource for Fixed {
        fn node_count(&self) -> usize {
            self.0.len()
        }

        fn fill_vertices(&self, out: &mut Vec<NodeVertex>) {
            out.extend(self.0.iter().map(|p| NodeVertex {
                position: [p.x, p.y, p.z, 1.0],
                attributes: [0.0; 4],
            }));
        }

        fn bounds(&self) -> Option<Bounds> {
            Bounds::from_points(&self.0)
        }
    }

    #[test]
    fn test_transparent_near_far_from_source() {
        let camera = Camera::new(1.0);
        let source = Fixed(vec![Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0)]);
        let set = pass_uniforms(
            NodePass::TransparentSphere,
            &camera,
            (100, 100),
            &source,
            &PassParams::default(),
        );
        let near = set.float("nearest_point_view_z").unwrap();
        let far = set.float("farthest_point_view_z").unwrap();
        assert!((near - 2.0).abs() < 1e-5);
        assert!((far - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_pass_tables() {
        assert_eq!(pass_preset(NodePass::Point), RenderPreset::Opaque);
        assert_eq!(pass_preset(NodePass::Sphere), RenderPreset::Opaque);
        assert_eq!(pass_preset(NodePass::TransparentSphere), RenderPreset::Transparent);
        assert!(pass_labels(NodePass::Point).is_empty());
        assert_eq!(pass_labels(NodePass::TransparentSphere).len(), 6);
        for pass in NodePass::ALL {
            assert_eq!(pass_program(pass).name, pass.name());
        }
    }
}
