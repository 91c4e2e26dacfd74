use std::fmt::Display;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Host windowing system - creates windows and routes their input
pub trait DisplayHost {
    type Window;
    type Error: Display;

    /// Create a window of the given size
    fn create_window(&mut self, title: &str, size: WindowSize) -> Result<Self::Window, Self::Error>;

    /// Route mouse-move and scroll events for `window` to the view controller
    fn register_input(&mut self, window: &Self::Window);

    /// Blend fragments by source alpha when drawing into `window`
    fn enable_alpha_blending(&mut self, window: &Self::Window);

    /// Shut the toolkit down; nothing is rendered afterwards
    fn terminate(&mut self);
}

/// Winit-backed host, valid for the duration of one event loop callback
pub struct WinitHost<'a> {
    event_loop: &'a ActiveEventLoop,
    input_window: Option<WindowId>,
    alpha_blending: bool,
}

impl<'a> WinitHost<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self {
            event_loop,
            input_window: None,
            alpha_blending: false,
        }
    }

    /// Window whose cursor and wheel events go to the controller
    pub fn input_window(&self) -> Option<WindowId> {
        self.input_window
    }

    pub fn alpha_blending(&self) -> bool {
        self.alpha_blending
    }
}

impl DisplayHost for WinitHost<'_> {
    type Window = Arc<Window>;
    type Error = winit::error::OsError;

    fn create_window(&mut self, title: &str, size: WindowSize) -> Result<Self::Window, Self::Error> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(size.width, size.height));
        self.event_loop.create_window(attributes).map(Arc::new)
    }

    fn register_input(&mut self, window: &Self::Window) {
        self.input_window = Some(window.id());
    }

    fn enable_alpha_blending(&mut self, _window: &Self::Window) {
        self.alpha_blending = true;
    }

    fn terminate(&mut self) {
        self.event_loop.exit();
    }
}
