use cage_engine::*;
use glam::Vec2;

use crate::config::PuzzleConfig;

pub const TAG_BOUNDS: &str = "bounds";
pub const TAG_BALL: &str = "ball";
pub const TAG_CAGE: &str = "cage";
pub const TAG_GOAL: &str = "goal";
pub const TAG_OBSTACLE: &str = "obstacle";

const BALL_COLOR: u32 = 0xffffff;
const CAGE_FILL: u32 = 0x00ffff;
const CAGE_STROKE: u32 = 0x99ffff;
const CAGE_STROKE_WIDTH: f32 = 2.0;
const GOAL_COLOR: u32 = 0x00ff88;

fn spawn_fixed(
    ctx: &mut EngineContext,
    tag: &str,
    center: Vec2,
    size: Vec2,
    style: Option<BodyStyle>,
) -> EntityId {
    let id = ctx.next_id();
    let mut entity = Entity::new(id).with_tag(tag);
    if let Some(style) = style {
        entity = entity.with_style(style);
    }
    let desc = BodyDesc::fixed(ColliderDesc::rect(size.x, size.y)).with_position(center);
    ctx.spawn_with_body(entity, desc, ColliderMaterial::default())
}

/// Floor plus left and right walls, just outside the visible area.
pub fn build_bounds(ctx: &mut EngineContext, config: &PuzzleConfig) {
    let Vec2 { x: w, y: h } = ctx.world_size();
    let t = config.bounds_thickness;

    spawn_fixed(ctx, TAG_BOUNDS, Vec2::new(w / 2.0, h + t / 2.0), Vec2::new(w, t), None);
    spawn_fixed(ctx, TAG_BOUNDS, Vec2::new(-t / 2.0, h / 2.0), Vec2::new(t, h), None);
    spawn_fixed(ctx, TAG_BOUNDS, Vec2::new(w + t / 2.0, h / 2.0), Vec2::new(t, h), None);
}

pub fn build_ball(ctx: &mut EngineContext, config: &PuzzleConfig) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id)
        .with_tag(TAG_BALL)
        .with_style(BodyStyle::filled(Rgba::hex(BALL_COLOR)));
    let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius: config.ball_radius })
        .with_position(config.ball_start(ctx.world_size()))
        .with_ccd(true);
    let material = ColliderMaterial::default().with_restitution(config.ball_restitution);
    ctx.spawn_with_body(entity, desc, material)
}

/// Four walls around the ball start: top, bottom, left, right.
pub fn build_cage(ctx: &mut EngineContext, config: &PuzzleConfig) -> Vec<EntityId> {
    let center = config.ball_start(ctx.world_size());
    let size = config.cage_size;
    let t = config.cage_thickness;
    let half = size / 2.0;
    let style = BodyStyle::filled(Rgba::hex(CAGE_FILL)).with_stroke(Rgba::hex(CAGE_STROKE), CAGE_STROKE_WIDTH);

    let walls = [
        (Vec2::new(0.0, -half), Vec2::new(size, t)),
        (Vec2::new(0.0, half), Vec2::new(size, t)),
        (Vec2::new(-half, 0.0), Vec2::new(t, size)),
        (Vec2::new(half, 0.0), Vec2::new(t, size)),
    ];
    walls
        .into_iter()
        .map(|(offset, extent)| spawn_fixed(ctx, TAG_CAGE, center + offset, extent, Some(style.clone())))
        .collect()
}

pub fn build_goal(ctx: &mut EngineContext, config: &PuzzleConfig) -> EntityId {
    let center = config.goal_center(ctx.world_size());
    let style = BodyStyle::filled(Rgba::hex(GOAL_COLOR));
    spawn_fixed(ctx, TAG_GOAL, center, Vec2::from(config.goal_size), Some(style))
}

/// Solid body behind a drawn line. Only the overlay shows it.
pub fn build_obstacle(ctx: &mut EngineContext, config: &PuzzleConfig, seg: &LineSegment) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id).with_tag(TAG_OBSTACLE);
    let desc = BodyDesc::fixed(ColliderDesc::rect(seg.length(), config.line_thickness))
        .with_position(seg.midpoint())
        .with_rotation(seg.angle());
    ctx.spawn_with_body(entity, desc, ColliderMaterial::default())
}
