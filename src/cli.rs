// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "flyview")]
#[command(about = "Free-fly 3D viewport", long_about = None)]
pub struct Cli {
    /// JSON view configuration; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = "flyview")]
    pub title: String,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial camera speed
    #[arg(long)]
    pub speed: Option<f32>,

    /// Disable alpha blending
    #[arg(long = "no-blend", default_value = "false")]
    pub no_blend: bool,
}

impl Cli {
    /// Override `config` with the values given on the command line
    pub fn apply(&self, config: &mut ViewConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }
        if self.no_blend {
            config.alpha_blending = false;
        }
    }
}
