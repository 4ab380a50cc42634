//! Draw commands
//!
//! Value form of the [`Renderer`](super::Renderer) calls, for renderers that
//! record or forward frames instead of drawing immediately.

use crate::foundation::math::Vec3;

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`Renderer::draw_square`](super::Renderer::draw_square)
    Square {
        /// Center of the square
        position: Vec3,
        /// Edge length
        size: f32,
    },
    /// See [`Renderer::draw_cube`](super::Renderer::draw_cube)
    Cube {
        /// Center of the cube
        position: Vec3,
        /// Per-axis edge lengths
        size: Vec3,
    },
}

impl DrawCommand {
    /// Center of the drawn primitive
    pub fn position(&self) -> Vec3 {
        match self {
            Self::Square { position, .. } | Self::Cube { position, .. } => *position,
        }
    }
}
