//! Overlay renderer: the transparent layer above the physics surface that shows
//! player-drawn lines.
//!
//! The overlay keeps no drawing state of its own between redraws. Each
//! [`OverlayState::redraw`] clears everything and re-strokes the segments it is
//! given. The resulting vertex buffer sits after the body section in the shared
//! buffer, so the host always draws it on top of the bodies.

use crate::components::segment::LineSegment;
use crate::components::style::Rgba;
use crate::systems::geometry::{build_segment_strip, strip_to_triangles, STROKE_VERTEX_FLOATS};

/// Stroke settings shared by every overlay line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: Rgba,
    /// Full stroke width in pixels.
    pub line_width: f32,
    /// Glow (shadow blur) radius in pixels.
    pub glow_radius: f32,
    /// Opacity of the glow strip.
    pub glow_alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Rgba::hex(0x66ccff),
            line_width: 4.0,
            glow_radius: 14.0,
            glow_alpha: 0.25,
        }
    }
}

/// Current overlay contents.
pub struct OverlayState {
    pub style: OverlayStyle,
    strokes: Vec<LineSegment>,
    vertices: Vec<f32>,
}

impl OverlayState {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            strokes: Vec::new(),
            vertices: Vec::with_capacity(4096),
        }
    }

    /// Wipe the surface, then stroke every finalized segment followed by the
    /// in-progress one, if any.
    pub fn redraw(&mut self, finalized: &[LineSegment], in_progress: Option<&LineSegment>) {
        self.clear();
        self.strokes.extend_from_slice(finalized);
        self.strokes.extend(in_progress.copied());

        let core_half = self.style.line_width / 2.0;
        let glow_half = core_half + self.style.glow_radius;
        for seg in &self.strokes {
            for (half_width, alpha) in [(glow_half, self.style.glow_alpha), (core_half, 1.0)] {
                let strip = build_segment_strip([seg.x1, seg.y1], [seg.x2, seg.y2], half_width, alpha);
                self.vertices
                    .extend_from_slice(&strip_to_triangles(&strip, STROKE_VERTEX_FLOATS));
            }
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.vertices.clear();
    }

    /// Lines currently on the overlay, in draw order.
    pub fn strokes(&self) -> &[LineSegment] {
        &self.strokes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / STROKE_VERTEX_FLOATS
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new(OverlayStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// One stroke = glow strip + core strip, each 8 strip verts -> 6 triangles.
    const VERTS_PER_STROKE: usize = 2 * 6 * 3;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> LineSegment {
        LineSegment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn default_style_matches_glowing_blue_line() {
        let style = OverlayStyle::default();
        assert_eq!(style.color, Rgba::hex(0x66ccff));
        assert_eq!(style.line_width, 4.0);
        assert_eq!(style.glow_radius, 14.0);
    }

    #[test]
    fn redraw_strokes_finalized_then_in_progress() {
        let mut overlay = OverlayState::default();
        let done = [seg(0.0, 0.0, 10.0, 0.0), seg(0.0, 5.0, 10.0, 5.0)];
        let live = seg(1.0, 1.0, 2.0, 2.0);
        overlay.redraw(&done, Some(&live));

        assert_eq!(overlay.strokes(), &[done[0], done[1], live]);
        assert_eq!(overlay.vertex_count(), 3 * VERTS_PER_STROKE);
    }

    #[test]
    fn redraw_replaces_previous_frame() {
        let mut overlay = OverlayState::default();
        overlay.redraw(&[seg(0.0, 0.0, 10.0, 0.0)], Some(&seg(0.0, 0.0, 1.0, 1.0)));
        overlay.redraw(&[seg(0.0, 0.0, 10.0, 0.0)], None);
        assert_eq!(overlay.strokes().len(), 1);
        assert_eq!(overlay.vertex_count(), VERTS_PER_STROKE);
    }

    #[test]
    fn empty_redraw_clears_surface() {
        let mut overlay = OverlayState::default();
        overlay.redraw(&[seg(0.0, 0.0, 10.0, 0.0)], None);
        overlay.redraw(&[], None);
        assert!(overlay.strokes().is_empty());
        assert_eq!(overlay.vertex_count(), 0);
    }
}
