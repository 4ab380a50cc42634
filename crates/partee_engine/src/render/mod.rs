//! # Rendering Interface
//!
//! The engine core does not draw anything itself. The render pass hands each
//! visible entity's [`RenderComponent`](crate::ecs::components::RenderComponent)
//! a [`Renderer`], which receives high-level draw calls.
//!
//! ## Design Philosophy
//!
//! The renderer is a passive collaborator that:
//! - Accepts positions and sizes (no transform logic)
//! - Only handles drawing (no lifecycle, input, or timing)

pub mod commands;
pub mod headless;

pub use commands::DrawCommand;
pub use headless::{LogRenderer, RecordingRenderer};

use crate::foundation::math::Vec3;

/// High-level drawing API used by the render pass
pub trait Renderer {
    /// Prepare for a viewport of the given size
    fn initialize(&mut self, _width: u32, _height: u32) {}

    /// Start a frame
    fn clear(&mut self);

    /// Draw a square of edge `size` centered at `position`
    fn draw_square(&mut self, position: Vec3, size: f32);

    /// Draw a cube with per-axis `size` centered at `position`
    fn draw_cube(&mut self, position: Vec3, size: Vec3);

    /// Finish and present a frame
    fn present(&mut self);
}
