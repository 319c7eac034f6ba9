use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::style::BodyStyle;
use crate::core::physics::{ColliderDesc, PhysicsBody};

/// Fat Entity: one struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by role ("ball", "cage", ...).
    pub tag: String,
    /// Whether this entity is active (inactive entities are not rendered).
    pub active: bool,
    /// Position in world space, synced from physics every step.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Collision footprint, also used to draw the body.
    pub shape: Option<ColliderDesc>,
    /// Visual style. Entities without one are invisible.
    pub style: Option<BodyStyle>,
    /// Physics body handles.
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            shape: None,
            style: None,
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shape(mut self, shape: ColliderDesc) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_style(mut self, style: BodyStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
