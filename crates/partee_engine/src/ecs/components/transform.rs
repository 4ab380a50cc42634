//! Transform component
//!
//! Pure data component: position, Euler rotation and scale, with mutators.
//! Its update is a no-op.

use crate::ecs::Component;
use crate::foundation::math::{utils, Mat4, Vec3};

/// Spatial state of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// World space position
    pub position: Vec3,

    /// Euler rotation in radians (about X, Y, Z)
    pub rotation: Vec3,

    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Move by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Set position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Rotate by `delta` radians per axis
    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Set rotation
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Add `delta` to the scale
    pub fn add_scale(&mut self, delta: Vec3) {
        self.scale += delta;
    }

    /// Set scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Convert to transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        utils::trs_matrix(&self.position, &self.rotation, &self.scale)
    }
}
