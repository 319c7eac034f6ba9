pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent, Notice};
pub use components::entity::Entity;
pub use components::segment::LineSegment;
pub use components::style::{BodyStyle, Rgba, Stroke};
pub use crate::core::events::{EngineEvent, EventBus, SubscriptionId, Topic};
pub use crate::core::physics::{
    PhysicsWorld, PhysicsBody, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial, CollisionPair,
};
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use renderer::instance::{BodyInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::overlay::{OverlayState, OverlayStyle};
