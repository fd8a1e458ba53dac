//! Event loop shared by the windowed demos
//!
//! A demo implements [`Scene`]; [`run_scene`] owns the window, camera and
//! renderer and calls back into the scene once per frame.
//!
//! Controls:
//! - Arrow keys: Orbit view
//! - Scroll: Zoom
//! - Space: Pause/resume

use crate::{Camera3D, GraphicsContext, GraphicsError, PointInstance, PointRenderer, Segment};
use glam::Vec3;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

/// Something that produces a colored point cloud every frame
pub trait Scene {
    /// Advance the scene by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Points to draw this frame
    fn points(&self) -> &[PointInstance];

    /// Static line segments (axes)
    fn segments(&self) -> Vec<Segment> {
        Vec::new()
    }

    /// Camera target and initial distance
    fn focus(&self) -> (Vec3, f32) {
        (Vec3::ZERO, 10.0)
    }
}

/// Window settings for [`run_scene`]
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub max_points: usize,
}

impl ViewerConfig {
    pub fn new(title: impl Into<String>, max_points: usize) -> Self {
        Self {
            title: title.into(),
            width: 1280,
            height: 720,
            max_points,
        }
    }
}

struct Viewer<S> {
    ctx: GraphicsContext,
    renderer: PointRenderer,
    camera: Camera3D,
    scene: S,
    paused: bool,
    num_lines: u32,
}

impl<S: Scene> Viewer<S> {
    fn new(ctx: GraphicsContext, scene: S, max_points: usize) -> Self {
        let segments = scene.segments();
        let renderer = PointRenderer::new(&ctx, max_points, segments.len());
        let num_lines = renderer.update_lines(&ctx.queue, &segments);

        let mut camera = Camera3D::new(ctx.aspect_ratio());
        let (target, distance) = scene.focus();
        camera.look_at(target, distance);

        Self {
            ctx,
            renderer,
            camera,
            scene,
            paused: false,
            num_lines,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    fn update(&mut self, dt: f32) {
        if !self.paused {
            self.scene.update(dt);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let num_points = self
            .renderer
            .update_points(&self.ctx.queue, self.scene.points());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .render(&mut encoder, &view, num_points, self.num_lines);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            KeyCode::ArrowLeft => self.camera.orbit(-0.1, 0.0),
            KeyCode::ArrowRight => self.camera.orbit(0.1, 0.0),
            KeyCode::ArrowUp => self.camera.orbit(0.0, 0.1),
            KeyCode::ArrowDown => self.camera.orbit(0.0, -0.1),
            _ => {}
        }
    }
}

/// Open a window and drive `scene` until the window is closed
pub fn run_scene<S: Scene + 'static>(config: ViewerConfig, scene: S) -> Result<(), GraphicsError> {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        &config.title,
        config.width,
        config.height,
    ))?;

    let mut viewer = Viewer::new(ctx, scene, config.max_points);
    let mut last_time = std::time::Instant::now();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => viewer.resize(*size),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state,
                            ..
                        },
                    ..
                } => viewer.handle_key(*key, *state),
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => *y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                    };
                    viewer.camera.zoom(scroll);
                }
                WindowEvent::RedrawRequested => {
                    let now = std::time::Instant::now();
                    let dt = (now - last_time).as_secs_f32().min(0.1);
                    last_time = now;

                    viewer.update(dt);
                    match viewer.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => viewer.resize(viewer.ctx.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting");
                            elwt.exit();
                        }
                        Err(e) => log::error!("Render error: {:?}", e),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                viewer.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
