use crate::components::entity::Entity;
use crate::components::style::Rgba;
use crate::core::physics::ColliderDesc;
use crate::renderer::instance::{BodyInstance, RenderBuffer, SHAPE_CIRCLE, SHAPE_RECT};

/// Pack a color as 0xRRGGBB stored in an f32 (exact below 2^24).
pub fn pack_rgb(c: Rgba) -> f32 {
    let channel = |v: f32| ((v.clamp(0.0, 1.0) * 255.0).round() as u32) & 0xff;
    ((channel(c.r) << 16) | (channel(c.g) << 8) | channel(c.b)) as f32
}

/// Build the body render buffer from a set of entities, in scene order.
/// Entities without a style or shape are invisible and skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let (style, shape) = match (&entity.style, entity.shape) {
            (Some(style), Some(shape)) => (style, shape),
            _ => continue,
        };

        let (kind, half_w, half_h) = match shape {
            ColliderDesc::Ball { radius } => (SHAPE_CIRCLE, radius, radius),
            ColliderDesc::Cuboid { half_width, half_height } => (SHAPE_RECT, half_width, half_height),
        };
        let (stroke_width, stroke_rgb) = style
            .stroke
            .map(|s| (s.width, pack_rgb(s.color)))
            .unwrap_or((0.0, 0.0));

        buffer.push(BodyInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            kind,
            half_w,
            half_h,
            fill_r: style.fill.r,
            fill_g: style.fill.g,
            fill_b: style.fill.b,
            fill_a: style.fill.a,
            stroke_width,
            stroke_rgb,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::style::BodyStyle;
    use glam::Vec2;

    #[test]
    fn invisible_bodies_are_skipped() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(200.0, 150.0))
                .with_shape(ColliderDesc::Ball { radius: 14.0 })
                .with_style(BodyStyle::filled(Rgba::WHITE)),
            // Drawn line: solid but only the overlay shows it.
            Entity::new(EntityId(2)).with_shape(ColliderDesc::rect(100.0, 6.0)),
            Entity::new(EntityId(3))
                .with_shape(ColliderDesc::rect(80.0, 6.0))
                .with_style(BodyStyle::filled(Rgba::hex(0x00ffff)).with_stroke(Rgba::hex(0x99ffff), 2.0)),
        ];

        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let ball = buffer.instances[0];
        assert_eq!(ball.kind, SHAPE_CIRCLE);
        assert_eq!((ball.x, ball.y), (200.0, 150.0));
        assert_eq!(ball.half_w, 14.0);
        assert_eq!(ball.stroke_width, 0.0);

        let wall = buffer.instances[1];
        assert_eq!(wall.kind, SHAPE_RECT);
        assert_eq!((wall.half_w, wall.half_h), (40.0, 3.0));
        assert_eq!(wall.stroke_width, 2.0);
        assert_eq!(wall.stroke_rgb, 0x99ffff as f32);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = Entity::new(EntityId(1))
            .with_shape(ColliderDesc::Ball { radius: 1.0 })
            .with_style(BodyStyle::default());
        entity.active = false;

        let mut buffer = RenderBuffer::default();
        build_render_buffer([entity].iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
