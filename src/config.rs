use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_SENSITIVITY;
use crate::error::{Result, ViewError};
use crate::host::WindowSize;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;
pub const DEFAULT_CAMERA_SPEED: f32 = 1.0;
pub const DEFAULT_SCROLL_STEP: f32 = 0.1;
pub const MIN_CAMERA_SPEED: f32 = 0.1;
pub const DEFAULT_ORTHO_HALF_HEIGHT: f32 = 5.0;

/// Starting pose of the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    pub position: [f32; 3],
    /// Look direction, need not be normalized
    pub front: [f32; 3],
    pub world_up: [f32; 3],
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.5, 5.5, 10.0],
            front: [0.0, -0.5, -2.0],
            world_up: [0.0, 1.0, 0.0],
            zoom: 80.0,
        }
    }
}

/// Viewport configuration. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub near: f32,
    pub far: f32,
    pub initial_speed: f32,
    /// Speed change per scroll line
    pub scroll_step: f32,
    /// Lower bound for the scroll-adjusted speed; must stay positive
    pub min_speed: f32,
    pub ortho_half_height: f32,
    pub mouse_sensitivity: f32,
    pub constrain_pitch: bool,
    pub alpha_blending: bool,
    pub camera: CameraPose,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            initial_speed: DEFAULT_CAMERA_SPEED,
            scroll_step: DEFAULT_SCROLL_STEP,
            min_speed: MIN_CAMERA_SPEED,
            ortho_half_height: DEFAULT_ORTHO_HALF_HEIGHT,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            constrain_pitch: true,
            alpha_blending: true,
            camera: CameraPose::default(),
        }
    }
}

impl ViewConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ViewError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ViewError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded view config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would stall the camera or degenerate the projection.
    /// The camera orbits +Y only, so `world_up` must point up.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ViewError::ConfigInvalid(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("window size {}x{} must be non-zero", self.width, self.height));
        }
        if !(self.min_speed > 0.0) {
            return invalid(format!("min_speed {} must be positive", self.min_speed));
        }
        if !(self.near > 0.0) {
            return invalid(format!("near plane {} must be positive", self.near));
        }
        if !(self.far > self.near) {
            return invalid(format!("far plane {} must be beyond near plane {}", self.far, self.near));
        }
        let up = Vec3::from_array(self.camera.world_up);
        if !up.try_normalize().is_some_and(|up| up.abs_diff_eq(Vec3::Y, 1e-4)) {
            return invalid(format!("world_up {:?} must point along +Y", self.camera.world_up));
        }
        Ok(())
    }

    /// Fixed aspect ratio of the configured window
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn window_size(&self) -> WindowSize {
        WindowSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ViewConfig::default();
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 800);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.far, 100.0);
        assert_eq!(config.initial_speed, 1.0);
        assert_eq!(config.scroll_step, 0.1);
        assert_eq!(config.min_speed, 0.1);
        assert_eq!(config.camera.zoom, 80.0);
    }

    #[test]
    fn aspect_ratio_uses_window_size() {
        let config = ViewConfig::default();
        assert!((config.aspect_ratio() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{ "width": 640, "camera": { "zoom": 60.0 } }"#).unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.camera.zoom, 60.0);
        assert_eq!(config.camera.position, [0.5, 5.5, 10.0]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ViewConfig::load("/definitely/not/here/view.json").unwrap_err();
        assert!(matches!(err, ViewError::ConfigRead { .. }));
    }

    #[test]
    fn load_reports_bad_json() {
        let path = std::env::temp_dir().join(format!("flyview-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();

        let err = ViewConfig::load(&path).unwrap_err();
        assert!(matches!(err, ViewError::ConfigParse { .. }));

        fs::remove_file(&path).ok();
    }

    fn rejected(config: ViewConfig) -> String {
        match config.validate() {
            Err(ViewError::ConfigInvalid(msg)) => msg,
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_min_speed() {
        for min_speed in [0.0, -1.0, f32::NAN] {
            let msg = rejected(ViewConfig { min_speed, ..ViewConfig::default() });
            assert!(msg.contains("min_speed"));
        }
    }

    #[test]
    fn validate_rejects_zero_window_size() {
        rejected(ViewConfig { width: 0, ..ViewConfig::default() });
        rejected(ViewConfig { height: 0, ..ViewConfig::default() });
    }

    #[test]
    fn validate_rejects_bad_clip_planes() {
        rejected(ViewConfig { near: 0.0, ..ViewConfig::default() });
        rejected(ViewConfig { near: -0.5, ..ViewConfig::default() });
        rejected(ViewConfig { far: 0.1, ..ViewConfig::default() });
        rejected(ViewConfig { near: 10.0, far: 5.0, ..ViewConfig::default() });
    }

    #[test]
    fn validate_rejects_tilted_world_up() {
        let mut config = ViewConfig::default();
        config.camera.world_up = [0.0, 0.0, 1.0];
        assert!(rejected(config.clone()).contains("world_up"));

        config.camera.world_up = [0.0, 0.0, 0.0];
        rejected(config.clone());

        // Length does not matter, only direction
        config.camera.world_up = [0.0, 3.0, 0.0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_rejects_negative_min_speed() {
        let path = std::env::temp_dir().join(format!("flyview-neg-{}.json", std::process::id()));
        fs::write(&path, r#"{ "min_speed": -1.0 }"#).unwrap();

        let err = ViewConfig::load(&path).unwrap_err();
        assert!(matches!(err, ViewError::ConfigInvalid(_)));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_round_trips_written_file() {
        let path = std::env::temp_dir().join(format!("flyview-ok-{}.json", std::process::id()));
        let mut config = ViewConfig::default();
        config.initial_speed = 3.0;
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(ViewConfig::load(&path).unwrap(), config);

        fs::remove_file(&path).ok();
    }
}
