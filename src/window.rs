//! Winit event loop integration.
//!
//! [`WinitApp`] implements `ApplicationHandler`: the GPU context and renderer
//! are created lazily in `resumed` (winit only hands out a window there), and
//! each `RedrawRequested` runs one full frame: advance time, resample the
//! surface, assemble frame parameters, render, request the next redraw.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::render::draw::Renderer;
use crate::render::gpu::GpuContext;
use crate::render::pass;
use crate::scene::Scene;
use crate::sculpture::{surface, topology, SurfaceParams};
use crate::time::Time;

/// How often frame statistics are logged.
const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// Everything that exists only while the window does.
struct RenderState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: Renderer,
}

/// The winit application handler driving the sculpture.
pub struct WinitApp {
    config: AppConfig,
    scene: Scene,
    surface_params: SurfaceParams,
    time: Time,
    last_stats: Instant,
    state: Option<RenderState>,
}

impl WinitApp {
    pub fn new(config: AppConfig) -> Self {
        let scene = Scene::new(config.point_lights);
        Self {
            config,
            scene,
            surface_params: SurfaceParams::default(),
            time: Time::new(),
            last_stats: Instant::now(),
            state: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        self.time.update();
        let t = self.time.elapsed_secs();

        // Grid dimensions were validated at startup, so sampling can only
        // fail if state was corrupted. Treat that as fatal.
        let vertices = match surface::sample(
            &self.surface_params,
            self.config.rings,
            self.config.segments,
            t,
        ) {
            Ok(vertices) => vertices,
            Err(err) => {
                log::error!("surface sampling failed: {err}");
                event_loop.exit();
                return;
            }
        };

        let params = self.scene.assemble(t, state.gpu.surface_size());

        let result = pass::render_frame(&state.gpu, |frame| {
            state.renderer.render(frame, &params, &vertices);
        });
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let size = state.window.inner_size();
                state.gpu.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
                return;
            }
            Err(err) => {
                log::warn!("frame skipped: {err}");
            }
        }

        if self.last_stats.elapsed() >= STATS_INTERVAL {
            log::debug!(
                "frame {} | {:.2} ms | {:.1} fps | {:.1}s elapsed",
                self.time.frame_count(),
                self.time.delta().as_secs_f32() * 1000.0,
                self.time.fps(),
                t
            );
            self.last_stats = Instant::now();
        }

        state.window.request_redraw();
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let gpu = match GpuContext::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(err) => {
                log::error!("GPU initialization failed: {err}");
                event_loop.exit();
                return;
            }
        };

        let indices = match topology::build(self.config.rings, self.config.segments) {
            Ok(indices) => indices,
            Err(err) => {
                log::error!("failed to build mesh topology: {err}");
                event_loop.exit();
                return;
            }
        };
        let vertex_count = (self.config.rings * self.config.segments) as usize;
        let renderer = Renderer::new(&gpu, vertex_count, &indices, self.config.point_lights);

        self.state = Some(RenderState {
            window,
            gpu,
            renderer,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(state) = self.state.as_mut() {
                    state.gpu.resize(size.width, size.height);
                    state.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
