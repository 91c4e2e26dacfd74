use glam::Mat4;

use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Fixed projection parameters; the camera supplies the zoom per frame.
/// Matrices use the `[0, 1]` depth range expected by wgpu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub ortho_half_height: f32,
}

impl Projection {
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            aspect: config.aspect_ratio(),
            near: config.near,
            far: config.far,
            ortho_half_height: config.ortho_half_height,
        }
    }

    /// `zoom` is the vertical field of view in degrees (ignored for orthographic)
    pub fn matrix(&self, mode: ProjectionMode, zoom: f32) -> Mat4 {
        match mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(zoom.to_radians(), self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_h = self.ortho_half_height;
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near, self.far)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn projection() -> Projection {
        Projection::from_config(&ViewConfig::default())
    }

    fn ndc(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = projection().matrix(ProjectionMode::Perspective, 80.0);
        assert!((ndc(m, Vec3::new(0.0, 0.0, -0.1)).z).abs() < 1e-4);
        assert!((ndc(m, Vec3::new(0.0, 0.0, -100.0)).z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_uses_zoom_as_vertical_fov() {
        let m = projection().matrix(ProjectionMode::Perspective, 90.0);
        // With a 90 degree FOV the top edge at depth 1 is y = 1
        let top = ndc(m, Vec3::new(0.0, 1.0, -1.0));
        assert!((top.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn orthographic_ignores_depth_for_xy() {
        let m = projection().matrix(ProjectionMode::Orthographic, 80.0);
        let near = ndc(m, Vec3::new(6.25, 5.0, -1.0));
        let far = ndc(m, Vec3::new(6.25, 5.0, -50.0));

        assert!((near.x - 1.0).abs() < 1e-4);
        assert!((near.y - 1.0).abs() < 1e-4);
        assert!((far.x - near.x).abs() < 1e-4);
    }

    #[test]
    fn modes_produce_different_matrices() {
        let p = projection();
        assert_ne!(
            p.matrix(ProjectionMode::Perspective, 80.0),
            p.matrix(ProjectionMode::Orthographic, 80.0)
        );
        assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
    }
}
