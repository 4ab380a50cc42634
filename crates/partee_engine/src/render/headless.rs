//! Renderers without a graphics backend

use super::{DrawCommand, Renderer};
use crate::foundation::math::Vec3;

/// Keeps the draw commands of the frame being built and of the last presented
/// frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    viewport: Option<(u32, u32)>,
    current: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingRenderer {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport passed to `initialize`
    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    /// Commands recorded since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.current
    }

    /// Commands of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of presented frames
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn initialize(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
    }

    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw_square(&mut self, position: Vec3, size: f32) {
        self.current.push(DrawCommand::Square { position, size });
    }

    fn draw_cube(&mut self, position: Vec3, size: Vec3) {
        self.current.push(DrawCommand::Cube { position, size });
    }

    fn present(&mut self) {
        self.presented.clone_from(&self.current);
        self.frames += 1;
    }
}

/// Logs draw calls at debug level and counts them
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    draw_calls: u64,
    frame_draw_calls: u64,
}

impl LogRenderer {
    /// Create a new log renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of presented frames
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Total draw calls across all frames
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl Renderer for LogRenderer {
    fn initialize(&mut self, width: u32, height: u32) {
        log::info!("Headless renderer initialized ({}x{})", width, height);
    }

    fn clear(&mut self) {
        self.frame_draw_calls = 0;
    }

    fn draw_square(&mut self, position: Vec3, size: f32) {
        log::debug!("draw_square at ({:.3}, {:.3}, {:.3}) size {}", position.x, position.y, position.z, size);
        self.frame_draw_calls += 1;
    }

    fn draw_cube(&mut self, position: Vec3, size: Vec3) {
        log::debug!(
            "draw_cube at ({:.3}, {:.3}, {:.3}) size ({}, {}, {})",
            position.x,
            position.y,
            position.z,
            size.x,
            size.y,
            size.z
        );
        self.frame_draw_calls += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        self.draw_calls += self.frame_draw_calls;
        log::trace!("Presented frame {} ({} draw calls)", self.frames, self.frame_draw_calls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_keeps_presented_frame() {
        let mut renderer = RecordingRenderer::new();
        renderer.initialize(800, 600);
        renderer.clear();
        renderer.draw_square(Vec3::new(1.0, 0.0, 0.0), 1.0);
        renderer.present();
        renderer.clear();

        assert_eq!(renderer.viewport(), Some((800, 600)));
        assert!(renderer.commands().is_empty());
        assert_eq!(renderer.last_frame().len(), 1);
        assert_eq!(renderer.last_frame()[0].position(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(renderer.frame_count(), 1);
    }

    #[test]
    fn test_log_renderer_counts_draw_calls() {
        let mut renderer = LogRenderer::new();
        for _ in 0..3 {
            renderer.clear();
            renderer.draw_square(Vec3::zeros(), 1.0);
            renderer.draw_cube(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
            renderer.present();
        }

        assert_eq!(renderer.frame_count(), 3);
        assert_eq!(renderer.draw_calls(), 6);
    }
}
