use cage_engine::LineSegment;
use glam::Vec2;

/// Pointer gesture state for drawing one line at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineDrawing {
    #[default]
    Idle,
    /// Start stays where the pointer went down; end follows the pointer.
    Drawing(LineSegment),
}

impl LineDrawing {
    /// Begin a new line. A press during a drag restarts it.
    pub fn pointer_down(&mut self, p: Vec2) {
        *self = LineDrawing::Drawing(LineSegment::at(p));
    }

    pub fn pointer_move(&mut self, p: Vec2) {
        if let LineDrawing::Drawing(seg) = self {
            seg.set_end(p);
        }
    }

    /// Freeze the line being drawn. `None` when no drag is active.
    pub fn release(&mut self) -> Option<LineSegment> {
        match std::mem::take(self) {
            LineDrawing::Drawing(seg) => Some(seg),
            LineDrawing::Idle => None,
        }
    }

    pub fn in_progress(&self) -> Option<&LineSegment> {
        match self {
            LineDrawing::Drawing(seg) => Some(seg),
            LineDrawing::Idle => None,
        }
    }
}
