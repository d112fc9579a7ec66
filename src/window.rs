//! Windowed frame loop.
//!
//! Owns the winit application: window creation, event dispatch, and the
//! per-frame sequence (advance the flock, then draw it). Spawn requests
//! arrive as pointer events between frames; boids appended that way are
//! picked up by the next frame's live walk, exactly like the reference
//! canvas loop.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::FlockConfig;
use crate::error::RunError;
use crate::input::Pointer;
use crate::render::{BoidInstance, Renderer};
use crate::simulation::Flock;
use crate::spawn::SpawnLimiter;
use crate::time::Time;

/// Run the windowed simulation. Blocks until the window is closed.
pub fn run(config: FlockConfig) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    // Window or GPU setup failures inside the event loop surface here.
    match app.startup_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: FlockConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    flock: Option<Flock>,
    pointer: Pointer,
    limiter: SpawnLimiter,
    time: Time,
    startup_error: Option<RunError>,
}

impl App {
    fn new(config: FlockConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            flock: None,
            pointer: Pointer::new(),
            limiter: SpawnLimiter::new(),
            time: Time::new(),
            startup_error: None,
        }
    }

    /// Pointer spawn path: append a boid at the cursor, y clamped to the
    /// region like the reference canvas (a drag below the tank spawns on
    /// its bottom edge).
    fn spawn_at_pointer(&mut self) {
        let Some(flock) = self.flock.as_mut() else {
            return;
        };
        if !self.limiter.admit(Instant::now()) {
            return;
        }
        let pos = self.pointer.position();
        let y = pos.y.min(flock.region().height);
        flock.spawn(pos.x, y);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("flock2d")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.startup_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        let renderer = match pollster::block_on(Renderer::new(window)) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.startup_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.renderer = Some(renderer);

        let flock = Flock::new(self.config, size.width as f64, size.height as f64);
        log::info!(
            "flock2d: {} boids in a {}x{} region",
            flock.len(),
            size.width,
            size.height
        );
        self.flock = Some(flock);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.pointer.handle_event(&event) {
            self.spawn_at_pointer();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                if let Some(flock) = &mut self.flock {
                    flock.resize(physical_size.width as f64, physical_size.height as f64);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::KeyD) => {
                            if let Some(renderer) = &mut self.renderer {
                                renderer.toggle_display_mode();
                                log::debug!("display mode: {:?}", renderer.display_mode());
                            }
                        }
                        PhysicalKey::Code(KeyCode::Escape) => {
                            event_loop.exit();
                        }
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.time.update();

                if let (Some(flock), Some(renderer)) = (self.flock.as_mut(), self.renderer.as_mut())
                {
                    flock.step();

                    let instances: Vec<BoidInstance> =
                        flock.boids().iter().map(BoidInstance::from).collect();

                    match renderer.render(&instances) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(winit::dpi::PhysicalSize {
                                width: renderer.config.width,
                                height: renderer.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {e:?}"),
                    }

                    if self.time.frame() % 300 == 0 {
                        log::debug!("{:.1} fps, {} boids", self.time.fps(), flock.len());
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
