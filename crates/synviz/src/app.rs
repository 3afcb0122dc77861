//! Application window and event loop management.

use std::sync::Arc;

use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use synviz_core::{NodePass, PerformanceTracker, StatisticsFile, ViewerOptions};
use synviz_render::{present_mode_for, NodeRenderer, RenderEngine, ShaderLibrary};

use crate::error::{Result, SynvizError};
use crate::scene::{draw_frame, Scene};

/// Radians of orbit per pixel of mouse drag.
const ORBIT_SPEED: f32 = 0.01;

/// Returns the pass selected by a number key.
#[must_use]
pub fn pass_for_key(code: KeyCode) -> Option<NodePass> {
    match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(NodePass::Point),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(NodePass::Sphere),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(NodePass::TransparentSphere),
        _ => None,
    }
}

/// Builds the shader library, honoring the override directory.
pub fn shader_library(options: &ViewerOptions) -> ShaderLibrary {
    match &options.shader_dir {
        Some(dir) => ShaderLibrary::new().with_override_dir(dir),
        None => ShaderLibrary::new(),
    }
}

/// The viewer application state.
pub struct App {
    options: ViewerOptions,
    shaders: ShaderLibrary,
    scene: Scene,
    tracker: PerformanceTracker,
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    renderer: Option<NodeRenderer>,
    error: Option<SynvizError>,
    close_requested: bool,
    // Mouse state for camera control
    mouse_pos: (f64, f64),
    left_mouse_down: bool,
}

impl App {
    /// Creates the application. The window is opened once the event loop resumes.
    pub fn new(options: ViewerOptions) -> Result<Self> {
        let shaders = shader_library(&options);
        let scene = Scene::new(&options)?;
        Ok(Self {
            options,
            shaders,
            scene,
            tracker: PerformanceTracker::new(),
            window: None,
            engine: None,
            renderer: None,
            error: None,
            close_requested: false,
            mouse_pos: (0.0, 0.0),
            left_mouse_down: false,
        })
    }

    /// Timings collected during this run.
    pub fn tracker(&self) -> &PerformanceTracker {
        &self.tracker
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_options = &self.options.window;
        let mut window_attributes = Window::default_attributes()
            .with_title(window_options.title.clone())
            .with_inner_size(PhysicalSize::new(window_options.width, window_options.height));
        if let Some((x, y)) = window_options.position {
            window_attributes = window_attributes.with_position(PhysicalPosition::new(x, y));
        }

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let mut engine = RenderEngine::new_windowed(
            window.clone(),
            present_mode_for(window_options.swap_interval),
        )
        .block_on()?;
        engine.set_background(self.options.background_color);
        if let Some(bounds) = self.scene.bounds() {
            engine.camera.look_at_bounds(&bounds);
        }

        let renderer = NodeRenderer::new(&engine, &self.shaders)?;

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let (Some(engine), Some(renderer)) = (&self.engine, &mut self.renderer) else {
            return Ok(());
        };
        draw_frame(engine, renderer, &mut self.scene, &mut self.tracker)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SynvizError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.open_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(event_loop, e);
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.left_mouse_down = state == ElementState::Pressed;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let delta_x = position.x - self.mouse_pos.0;
                let delta_y = position.y - self.mouse_pos.1;
                self.mouse_pos = (position.x, position.y);

                if self.left_mouse_down {
                    if let Some(engine) = &mut self.engine {
                        engine
                            .camera
                            .orbit(delta_x as f32 * ORBIT_SPEED, delta_y as f32 * ORBIT_SPEED);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(engine) = &mut self.engine {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                    };
                    let distance = engine.camera.position.distance(engine.camera.target);
                    engine.camera.zoom(scroll * distance * 0.1);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        self.close_requested = true;
                    } else if let Some(pass) = pass_for_key(code) {
                        self.scene.set_pass(pass);
                    }
                }
            }
            _ => {}
        }

        if self.close_requested {
            event_loop.exit();
        }
    }
}

/// Opens the viewer and runs it until the window is closed.
///
/// Statistics are read from `options.statistics_path` first and written
/// back, merged with this run's timings, on exit.
pub fn run(options: ViewerOptions) -> Result<PerformanceTracker> {
    let statistics = StatisticsFile::new(&options.statistics_path);
    let mut totals = statistics.read()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(options)?;
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.error.take() {
        return Err(error);
    }

    app.tracker().log_summary();
    totals.merge(app.tracker());
    statistics.write(&totals)?;
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_select_passes() {
        assert_eq!(pass_for_key(KeyCode::Digit1), Some(NodePass::Point));
        assert_eq!(pass_for_key(KeyCode::Digit2), Some(NodePass::Sphere));
        assert_eq!(
            pass_for_key(KeyCode::Digit3),
            Some(NodePass::TransparentSphere)
        );
        assert_eq!(pass_for_key(KeyCode::Numpad2), Some(NodePass::Sphere));
        assert_eq!(pass_for_key(KeyCode::KeyA), None);
    }

    #[test]
    fn test_shader_library_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("basic")).unwrap();
        std::fs::write(dir.path().join("basic/discard_screen_color.wgsl"), "// mine").unwrap();

        let options = ViewerOptions {
            shader_dir: Some(dir.path().to_path_buf()),
            ..ViewerOptions::default()
        };
        let library = shader_library(&options);
        assert_eq!(library.source("basic/discard_screen_color").unwrap(), "// mine");
    }
}
