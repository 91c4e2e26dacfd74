pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod mouse;
pub mod projection;
pub mod renderer;
pub mod uniforms;
pub mod view;

pub use camera::{Camera, Movement};
pub use config::{CameraPose, ViewConfig};
pub use error::ViewError;
pub use host::{DisplayHost, WindowSize, WinitHost};
pub use input::{Button, Controller, WinitController};
pub use projection::ProjectionMode;
pub use uniforms::{UniformSink, UniformTable};
pub use view::{FrameMatrices, Intent, ViewController};
