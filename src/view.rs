use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::camera::{Camera, Movement};
use crate::clock::Clock;
use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::host::DisplayHost;
use crate::input::{Button, Controller};
use crate::mouse::MouseTracker;
use crate::projection::{Projection, ProjectionMode};
use crate::uniforms::{UniformSink, PROJECTION_UNIFORM, VIEW_POSITION_UNIFORM, VIEW_UNIFORM};

/// One command derived from one pressed key in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Move { direction: Movement, distance: f32 },
    SetProjection(ProjectionMode),
}

#[derive(Debug, Clone, Copy)]
enum Binding {
    Move(Movement),
    Projection(ProjectionMode),
}

/// Keys in evaluation order
const BINDINGS: [(Button, Binding); 8] = [
    (Button::KeyW, Binding::Move(Movement::Forward)),
    (Button::KeyS, Binding::Move(Movement::Backward)),
    (Button::KeyA, Binding::Move(Movement::Left)),
    (Button::KeyD, Binding::Move(Movement::Right)),
    (Button::KeyQ, Binding::Move(Movement::Up)),
    (Button::KeyE, Binding::Move(Movement::Down)),
    (Button::Digit1, Binding::Projection(ProjectionMode::Orthographic)),
    (Button::Digit2, Binding::Projection(ProjectionMode::Perspective)),
];

/// Matrices computed for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub position: Vec3,
}

/// Owns the display window and the camera, turns input into camera motion
/// and publishes the per-frame view state.
///
/// `W` is the host's window handle type.
pub struct ViewController<W = Arc<winit::window::Window>> {
    config: ViewConfig,
    window: Option<W>,
    camera: Camera,
    projection: Projection,
    mouse: MouseTracker,
    clock: Clock,
    frame_delta: f32,
    projection_mode: ProjectionMode,
    camera_speed: f32,
    close_requested: bool,
}

impl<W> ViewController<W> {
    pub fn new(config: ViewConfig) -> Self {
        let mut camera = Camera::from_pose(&config.camera);
        camera.sensitivity = config.mouse_sensitivity;

        Self {
            projection: Projection::from_config(&config),
            window: None,
            camera,
            mouse: MouseTracker::new(),
            clock: Clock::new(),
            frame_delta: 0.0,
            projection_mode: ProjectionMode::default(),
            camera_speed: config.initial_speed.max(config.min_speed),
            close_requested: false,
            config,
        }
    }

    /// Create the display window through `host`.
    ///
    /// On failure the host is terminated, no input is registered and the
    /// caller must not continue rendering.
    pub fn create_display_window<H>(&mut self, host: &mut H, title: &str) -> Result<W>
    where
        H: DisplayHost<Window = W>,
        W: Clone,
    {
        let window = match host.create_window(title, self.config.window_size()) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create display window {title:?}: {e}");
                host.terminate();
                return Err(ViewError::WindowCreation(e.to_string()));
            }
        };

        host.register_input(&window);
        if self.config.alpha_blending {
            host.enable_alpha_blending(&window);
        }

        log::info!(
            "Created display window {title:?} ({}x{})",
            self.config.width,
            self.config.height
        );
        self.window = Some(window.clone());
        Ok(window)
    }

    /// Cursor moved to `(x, y)`; returns the offsets forwarded to the camera
    pub fn on_mouse_move(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (x, y) = (x * self.camera_speed, y * self.camera_speed);
        let (x_offset, y_offset) = self.mouse.sample(x, y);

        self.camera
            .process_mouse_movement(x_offset, y_offset, self.config.constrain_pitch);

        (x_offset, y_offset)
    }

    /// Wheel moved by `y_offset` lines
    pub fn on_scroll(&mut self, y_offset: f32) {
        self.camera_speed =
            (self.camera_speed + self.config.scroll_step * y_offset).max(self.config.min_speed);
        log::debug!("Camera speed {:.2}", self.camera_speed);
    }

    /// Apply this frame's key state. Returns the intents in the order applied.
    pub fn poll_keyboard(&mut self, keys: &dyn Controller) -> Vec<Intent> {
        if keys.is_down(Button::Escape) {
            self.close_requested = true;
        }

        let velocity = self.frame_delta * self.camera_speed;
        let mut intents = Vec::new();

        for (button, binding) in BINDINGS {
            if !keys.is_down(button) {
                continue;
            }

            let intent = match binding {
                Binding::Move(direction) => {
                    self.camera.process_keyboard(direction, velocity);
                    Intent::Move {
                        direction,
                        distance: velocity,
                    }
                }
                Binding::Projection(mode) => {
                    if self.projection_mode != mode {
                        log::debug!("Projection mode {mode:?}");
                    }
                    self.projection_mode = mode;
                    Intent::SetProjection(mode)
                }
            };
            intents.push(intent);
        }

        intents
    }

    /// Per-frame update using the monotonic clock for the frame delta
    pub fn prepare_frame(
        &mut self,
        keys: &dyn Controller,
        sink: Option<&mut dyn UniformSink>,
    ) -> FrameMatrices {
        let delta = self.clock.tick();
        self.advance(delta, keys, sink)
    }

    /// Per-frame update with an explicit frame delta in seconds
    pub fn advance(
        &mut self,
        delta: f32,
        keys: &dyn Controller,
        sink: Option<&mut dyn UniformSink>,
    ) -> FrameMatrices {
        self.frame_delta = delta;
        self.poll_keyboard(keys);

        let frame = FrameMatrices {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(self.projection_mode, self.camera.zoom),
            position: self.camera.position,
        };

        if let Some(sink) = sink {
            sink.set_matrix(VIEW_UNIFORM, frame.view);
            sink.set_matrix(PROJECTION_UNIFORM, frame.projection);
            sink.set_vector(VIEW_POSITION_UNIFORM, frame.position);
        }

        frame
    }

    /// Start frame timing from now. Call once setup is done so the first
    /// frame delta does not include window and renderer creation.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn camera_speed(&self) -> f32 {
        self.camera_speed
    }

    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn mouse(&self) -> &MouseTracker {
        &self.mouse
    }

    /// Set once escape has been seen; the run loop decides when to exit
    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}
