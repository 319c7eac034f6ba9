use glam::Vec2;
use serde::Serialize;

/// A straight line between two canvas points, as drawn by the player.
/// Serializes as `{"x1":..,"y1":..,"x2":..,"y2":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    /// Zero-length segment anchored at `p`.
    pub fn at(p: Vec2) -> Self {
        Self::new(p, p)
    }

    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }

    /// Move the second endpoint; the first stays where the gesture began.
    pub fn set_end(&mut self, p: Vec2) {
        self.x2 = p.x;
        self.y2 = p.y;
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start() + self.end()) / 2.0
    }

    pub fn length(&self) -> f32 {
        (self.end() - self.start()).length()
    }

    /// Direction from start to end in radians, within -π..=π.
    pub fn angle(&self) -> f32 {
        (self.y2 - self.y1).atan2(self.x2 - self.x1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn horizontal_segment_geometry() {
        let seg = LineSegment::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
        assert_eq!(seg.midpoint(), Vec2::new(150.0, 100.0));
        assert_eq!(seg.angle(), 0.0);
        assert_eq!(seg.length(), 100.0);
    }

    #[test]
    fn downward_segment_points_at_positive_half_pi() {
        let seg = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 30.0));
        assert!((seg.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn zero_length_segment() {
        let seg = LineSegment::at(Vec2::new(50.0, 50.0));
        assert_eq!(seg.length(), 0.0);
        assert_eq!(seg.midpoint(), Vec2::new(50.0, 50.0));
        assert_eq!(seg.angle(), 0.0);
    }

    #[test]
    fn set_end_keeps_start() {
        let mut seg = LineSegment::at(Vec2::new(10.0, 10.0));
        seg.set_end(Vec2::new(40.0, 50.0));
        assert_eq!(seg.start(), Vec2::new(10.0, 10.0));
        assert_eq!(seg.length(), 50.0);
    }

    #[test]
    fn serializes_with_endpoint_names() {
        let seg = LineSegment::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let json = serde_json::to_value(seg).unwrap();
        assert_eq!(json, serde_json::json!({"x1": 1.0, "y1": 2.0, "x2": 3.0, "y2": 4.0}));
    }
}
