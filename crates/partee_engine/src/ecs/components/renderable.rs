//! Render component
//!
//! Not advanced by the update pass; the render pass calls
//! [`RenderComponent::render`] once per frame.

use crate::ecs::components::TransformComponent;
use crate::ecs::{Component, ComponentType, EcsError, Entity};
use crate::foundation::math::Vec3;
use crate::render::Renderer;

/// Primitive drawn for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderShape {
    /// Flat square facing the camera
    #[default]
    Square,
    /// Axis-aligned cube
    Cube,
}

/// Draws its owner at the owner's transform
#[derive(Debug, Clone, PartialEq)]
pub struct RenderComponent {
    /// Primitive to draw
    pub shape: RenderShape,
    /// Edge length before transform scale
    pub size: f32,
    /// Hidden components draw nothing
    pub visible: bool,
}

impl Default for RenderComponent {
    fn default() -> Self {
        Self { shape: RenderShape::Square, size: 1.0, visible: true }
    }
}

impl RenderComponent {
    /// Create a visible unit-sized component drawing `shape`
    pub fn new(shape: RenderShape) -> Self {
        Self { shape, ..Default::default() }
    }

    /// Builder pattern: Set size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show or hide
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Issue draw calls for `owner`; returns whether anything was drawn
    pub fn render(&self, owner: &Entity, renderer: &mut dyn Renderer) -> bool {
        if !self.visible {
            return false;
        }
        let Some(transform) = owner.get_component::<TransformComponent>() else {
            return false;
        };

        match self.shape {
            RenderShape::Square => {
                renderer.draw_square(transform.position, self.size * transform.scale.x);
            }
            RenderShape::Cube => {
                renderer.draw_cube(transform.position, transform.scale * self.size);
            }
        }
        true
    }
}

impl Component for RenderComponent {
    fn require_dependencies(&self, owner: &mut Entity) -> Result<(), EcsError> {
        owner.ensure_component::<TransformComponent>()
    }

    fn update_dependencies(&self) -> Vec<ComponentType> {
        vec![ComponentType::of::<TransformComponent>()]
    }
}
