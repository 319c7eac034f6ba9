use glam::Vec2;

use crate::api::types::{EntityId, GameEvent, Notice};
use crate::components::entity::Entity;
use crate::components::style::Rgba;
use crate::core::events::{EngineEvent, EventBus, SubscriptionId};
use crate::core::physics::{BodyDesc, ColliderMaterial, CollisionPair, PhysicsWorld};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::systems::overlay::{OverlayState, OverlayStyle};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in pixels. The runner overrides it with the host viewport.
    pub world_width: f32,
    /// World height in pixels. The runner overrides it with the host viewport.
    pub world_height: f32,
    /// Maximum number of body render instances (default: 256).
    pub max_bodies: usize,
    /// Starting overlay vertex capacity (default: 16384). The runner grows it
    /// when more lines are drawn.
    pub max_overlay_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Gravity in px/s². Y-down, so positive Y pulls toward the floor.
    pub gravity: Vec2,
    /// Clear color of the physics render surface.
    pub background: Rgba,
    /// Stroke settings for the overlay layer.
    pub overlay: OverlayStyle,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_bodies: 256,
            max_overlay_vertices: 16384,
            max_events: 32,
            gravity: Vec2::ZERO,
            background: Rgba::hex(0x0b1020),
            overlay: OverlayStyle::default(),
        }
    }
}

/// The contract every game must fulfill.
///
/// A game sees one [`EngineContext`] per world lifetime. `init` populates a
/// fresh context; `teardown` runs right before that context is dropped.
pub trait Game {
    /// Return engine configuration. Called before every init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Populate a fresh world: spawn bodies, register subscriptions.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Apply this frame's input. Runs once per frame, before physics steps.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Handle an engine event delivered to one of this world's subscriptions.
    fn on_event(&mut self, _ctx: &mut EngineContext, _sub: SubscriptionId, _event: &EngineEvent) {}

    /// Forget every per-world handle. The context is about to be dropped.
    fn teardown(&mut self) {}
}

/// Mutable access to one world lifetime, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    pub overlay: OverlayState,
    pub bus: EventBus,
    pub events: Vec<GameEvent>,
    world_size: Vec2,
    next_id: u32,
    collision_events: Vec<CollisionPair>,
    reset_request: Option<Notice>,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.set_dt(config.fixed_dt);
        Self {
            scene: Scene::new(),
            physics,
            overlay: OverlayState::new(config.overlay),
            bus: EventBus::new(),
            events: Vec::new(),
            world_size: Vec2::new(config.world_width, config.world_height),
            next_id: 1,
            collision_events: Vec::new(),
            reset_request: None,
        }
    }

    /// Width and height of the play area in pixels.
    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, collision events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.collision_events.clear();
    }

    /// Ask the runner to notify the host and rebuild the world from scratch
    /// once the current step finishes. The first request in a frame wins.
    pub fn request_reset(&mut self, notice: Notice) {
        match &self.reset_request {
            None => self.reset_request = Some(notice),
            Some(pending) => log::debug!("reset already pending ({}), ignoring {:?}", pending.message(), notice),
        }
    }

    pub fn reset_requested(&self) -> Option<&Notice> {
        self.reset_request.as_ref()
    }

    pub fn take_reset_request(&mut self) -> Option<Notice> {
        self.reset_request.take()
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// Position, rotation and shape of the entity are taken from the BodyDesc.
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity
            .with_pos(desc.position)
            .with_rotation(desc.rotation)
            .with_shape(desc.collider)
            .with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Despawn an entity, cleaning up its physics body if present.
    pub fn despawn(&mut self, id: EntityId) {
        match self.scene.despawn(id) {
            Some(entity) => {
                if let Some(body) = &entity.body {
                    self.physics.remove_body(body);
                }
            }
            None => log::warn!("despawn of unknown entity {:?}", id),
        }
    }

    /// Current position of an entity, if it exists.
    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        self.scene.get(id).map(|e| e.pos)
    }

    /// Collision events from the most recent physics step.
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Step the physics simulation and sync positions back to entities.
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
