/// Linear RGBA color, 0.0..=1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal, as written in CSS.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }
}

/// Outline drawn around a filled body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

/// Body style: how an entity appears on the physics render surface.
/// Entities without a style are invisible there but still collide.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
}

impl BodyStyle {
    pub fn filled(fill: Rgba) -> Self {
        Self { fill, stroke: None }
    }

    pub fn with_stroke(mut self, color: Rgba, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self::filled(Rgba::WHITE)
    }
}
