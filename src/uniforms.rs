use std::collections::HashMap;

use glam::{Mat4, Vec3};

pub const VIEW_UNIFORM: &str = "view";
pub const PROJECTION_UNIFORM: &str = "projection";
pub const VIEW_POSITION_UNIFORM: &str = "viewPosition";

/// Receiver for named shader values published each frame
pub trait UniformSink {
    fn set_matrix(&mut self, name: &str, value: Mat4);

    fn set_vector(&mut self, name: &str, value: Vec3);
}

/// View uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }
}

impl UniformSink for ViewUniform {
    fn set_matrix(&mut self, name: &str, value: Mat4) {
        match name {
            VIEW_UNIFORM => self.view = value.to_cols_array_2d(),
            PROJECTION_UNIFORM => self.projection = value.to_cols_array_2d(),
            other => log::trace!("ignoring unknown matrix uniform {other:?}"),
        }
    }

    fn set_vector(&mut self, name: &str, value: Vec3) {
        match name {
            VIEW_POSITION_UNIFORM => self.view_position = value.to_array(),
            other => log::trace!("ignoring unknown vector uniform {other:?}"),
        }
    }
}

/// Records every published value by name. Useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct UniformTable {
    matrices: HashMap<String, Mat4>,
    vectors: HashMap<String, Vec3>,
    writes: usize,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix(&self, name: &str) -> Option<Mat4> {
        self.matrices.get(name).copied()
    }

    pub fn vector(&self, name: &str) -> Option<Vec3> {
        self.vectors.get(name).copied()
    }

    /// Total number of set calls received
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.matrices.len() + self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UniformSink for UniformTable {
    fn set_matrix(&mut self, name: &str, value: Mat4) {
        self.matrices.insert(name.to_owned(), value);
        self.writes += 1;
    }

    fn set_vector(&mut self, name: &str, value: Vec3) {
        self.vectors.insert(name.to_owned(), value);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_uniform_layout_matches_wgsl() {
        // two mat4x4<f32> + vec3<f32> padded to 16 bytes
        assert_eq!(std::mem::size_of::<ViewUniform>(), 144);
    }

    #[test]
    fn view_uniform_routes_known_names() {
        let mut uniform = ViewUniform::default();
        let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let projection = Mat4::from_scale(Vec3::splat(2.0));

        uniform.set_matrix(VIEW_UNIFORM, view);
        uniform.set_matrix(PROJECTION_UNIFORM, projection);
        uniform.set_vector(VIEW_POSITION_UNIFORM, Vec3::new(4.0, 5.0, 6.0));

        assert_eq!(uniform.view, view.to_cols_array_2d());
        assert_eq!(uniform.projection, projection.to_cols_array_2d());
        assert_eq!(uniform.view_position, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn view_uniform_ignores_unknown_names() {
        let mut uniform = ViewUniform::default();
        uniform.set_matrix("model", Mat4::from_scale(Vec3::splat(3.0)));
        uniform.set_vector("lightPosition", Vec3::ONE);
        assert_eq!(uniform, ViewUniform::default());
    }

    #[test]
    fn table_records_latest_value() {
        let mut table = UniformTable::new();
        assert!(table.is_empty());

        table.set_vector(VIEW_POSITION_UNIFORM, Vec3::X);
        table.set_vector(VIEW_POSITION_UNIFORM, Vec3::Y);

        assert_eq!(table.vector(VIEW_POSITION_UNIFORM), Some(Vec3::Y));
        assert_eq!(table.len(), 1);
        assert_eq!(table.writes(), 2);
        assert_eq!(table.matrix(VIEW_UNIFORM), None);
    }
}
