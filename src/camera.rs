use glam::{Mat4, Vec3};

use crate::config::CameraPose;

/// Degrees of rotation per unit of mouse offset
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
const PITCH_LIMIT: f32 = 89.0;

/// Discrete translation directions relative to the camera basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera with a yaw/pitch orientation.
///
/// `front`, `right` and `up` are always unit length and mutually orthogonal;
/// they are rebuilt from `yaw`/`pitch` whenever the orientation changes.
/// Yaw and pitch are measured against a +Y world up; `ViewConfig::validate`
/// rejects any other `world_up`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    /// Degrees, measured from +X towards +Z
    yaw: f32,
    /// Degrees, positive looks up
    pitch: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
    pub sensitivity: f32,
}

impl Camera {
    /// Build a camera looking along `front`. Yaw and pitch are recovered from
    /// the direction so later mouse updates continue from the same heading.
    pub fn new(position: Vec3, front: Vec3, world_up: Vec3, zoom: f32) -> Self {
        let front = front.try_normalize().unwrap_or(Vec3::NEG_Z);
        let world_up = world_up.try_normalize().unwrap_or(Vec3::Y);

        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let mut camera = Self {
            position,
            front,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom,
            sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    pub fn from_pose(pose: &CameraPose) -> Self {
        Self::new(
            Vec3::from_array(pose.position),
            Vec3::from_array(pose.front),
            Vec3::from_array(pose.world_up),
            pose.zoom,
        )
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World-to-eye transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate `distance` units in `direction`
    pub fn process_keyboard(&mut self, direction: Movement, distance: f32) {
        let offset = match direction {
            Movement::Forward => self.front,
            Movement::Backward => -self.front,
            Movement::Left => -self.right,
            Movement::Right => self.right,
            Movement::Up => self.up,
            Movement::Down => -self.up,
        };
        self.position += offset * distance;
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Unconstrained pitch can reach the pole where front is parallel to world up
        self.right = self
            .front
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or(self.right);
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_pose(&CameraPose::default())
    }
}
