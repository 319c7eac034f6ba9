use cage_engine::*;
use glam::Vec2;

use crate::config::PuzzleConfig;
use crate::drawing::LineDrawing;
use crate::hint::{HintRequest, HintRequester, HintTransport};
use crate::world;

/// Custom event kinds from the host UI
pub const CUSTOM_RELEASE_CAGE: u32 = 1;

/// Game event kinds to the host
pub const EVENT_WIN: f32 = 1.0;
pub const EVENT_CAGE_RELEASED: f32 = 2.0;
pub const EVENT_LINE_ADDED: f32 = 3.0;

/// Handles that belong to one world lifetime.
#[derive(Debug)]
pub struct PuzzleWorld {
    pub ball: EntityId,
    pub goal: EntityId,
    pub cage: Vec<EntityId>,
    pub lines: Vec<LineSegment>,
    pub obstacles: Vec<EntityId>,
    pub drawing: LineDrawing,
    redraw_sub: SubscriptionId,
    win_sub: SubscriptionId,
}

pub struct CageDrop {
    config: PuzzleConfig,
    world: Option<PuzzleWorld>,
}

impl CageDrop {
    pub fn new() -> Self {
        Self::with_config(PuzzleConfig::default())
    }

    pub fn with_config(config: PuzzleConfig) -> Self {
        Self { config, world: None }
    }

    pub fn puzzle_config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Replace the tunables. They apply from the next world build.
    pub fn set_puzzle_config(&mut self, config: PuzzleConfig) {
        self.config = config;
    }

    /// The current world, if one is built.
    pub fn world(&self) -> Option<&PuzzleWorld> {
        self.world.as_ref()
    }

    /// Remove every cage wall. Does nothing once the cage is gone.
    pub fn release_cage(&mut self, ctx: &mut EngineContext) {
        let Some(world) = self.world.as_mut() else {
            return;
        };
        if world.cage.is_empty() {
            return;
        }
        for id in world.cage.drain(..) {
            ctx.despawn(id);
        }
        ctx.emit_event(GameEvent {
            kind: EVENT_CAGE_RELEASED,
            ..GameEvent::default()
        });
        log::info!("cage released");
    }

    /// Freeze the line being drawn and turn it into a solid obstacle.
    pub fn finish_line(&mut self, ctx: &mut EngineContext) {
        let Some(state) = self.world.as_mut() else {
            return;
        };
        let Some(seg) = state.drawing.release() else {
            return;
        };

        state.lines.push(seg);
        let id = world::build_obstacle(ctx, &self.config, &seg);
        state.obstacles.push(id);
        ctx.emit_event(GameEvent {
            kind: EVENT_LINE_ADDED,
            a: seg.midpoint().x,
            b: seg.midpoint().y,
            c: seg.length(),
        });
        log::debug!(
            "line {} from ({}, {}) to ({}, {})",
            state.lines.len(),
            seg.x1,
            seg.y1,
            seg.x2,
            seg.y2
        );
    }

    /// Snapshot of the board for the hint service.
    pub fn hint_request(&self, ctx: &EngineContext, message: impl Into<String>) -> Option<HintRequest> {
        let world = self.world.as_ref()?;
        Some(HintRequest {
            user_message: message.into(),
            ball: ctx.position(world.ball)?.into(),
            goal: ctx.position(world.goal)?.into(),
            lines: world.lines.clone(),
        })
    }

    /// A requester aimed at the configured endpoint, with the board snapshot
    /// it should send. `None` until a world is built.
    pub fn hint_job<T: HintTransport>(
        &self,
        ctx: &EngineContext,
        transport: T,
        message: impl Into<String>,
    ) -> Option<(HintRequester<T>, HintRequest)> {
        let request = self.hint_request(ctx, message)?;
        Some((HintRequester::new(transport, self.config.hint_endpoint.as_str()), request))
    }
}

impl Default for CageDrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CageDrop {
    fn config(&self) -> GameConfig {
        self.config.game_config()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        world::build_bounds(ctx, &self.config);
        let ball = world::build_ball(ctx, &self.config);
        let cage = world::build_cage(ctx, &self.config);
        let goal = world::build_goal(ctx, &self.config);

        let redraw_sub = ctx.bus.subscribe(Topic::AfterUpdate);
        let win_sub = ctx.bus.subscribe(Topic::CollisionStart);

        self.world = Some(PuzzleWorld {
            ball,
            goal,
            cage,
            lines: Vec::new(),
            obstacles: Vec::new(),
            drawing: LineDrawing::Idle,
            redraw_sub,
            win_sub,
        });
        log::info!("puzzle built: {} bodies", ctx.physics.body_count());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    if let Some(world) = self.world.as_mut() {
                        world.drawing.pointer_down(Vec2::new(x, y));
                    }
                }
                InputEvent::PointerMove { x, y } => {
                    if let Some(world) = self.world.as_mut() {
                        world.drawing.pointer_move(Vec2::new(x, y));
                    }
                }
                InputEvent::PointerUp { .. } | InputEvent::PointerLeave { .. } => {
                    self.finish_line(ctx);
                }
                InputEvent::Custom { kind: CUSTOM_RELEASE_CAGE, .. } => {
                    self.release_cage(ctx);
                }
                InputEvent::Custom { kind, .. } => {
                    log::warn!("unknown custom event kind {}", kind);
                }
            }
        }
    }

    fn on_event(&mut self, ctx: &mut EngineContext, sub: SubscriptionId, event: &EngineEvent) {
        let Some(world) = self.world.as_ref() else {
            return;
        };

        match event {
            EngineEvent::AfterUpdate if sub == world.redraw_sub => {
                ctx.overlay.redraw(&world.lines, world.drawing.in_progress());
            }
            EngineEvent::CollisionStart(pair) if sub == world.win_sub => {
                if pair.started && pair.involves_both(world.ball, world.goal) {
                    ctx.emit_event(GameEvent {
                        kind: EVENT_WIN,
                        ..GameEvent::default()
                    });
                    log::info!("ball reached the goal");
                    ctx.request_reset(Notice::Win);
                }
            }
            _ => {}
        }
    }

    fn teardown(&mut self) {
        self.world = None;
    }
}
