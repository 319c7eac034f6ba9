use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the JS host via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

/// A user-facing notification raised by the game when it asks for a reset.
/// The runner hands it to the host notifier before tearing the world down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The player reached the goal.
    Win,
    /// Free-form message.
    Message(String),
}

impl Notice {
    /// Text shown to the player.
    pub fn message(&self) -> &str {
        match self {
            Notice::Win => "Congrats you win!",
            Notice::Message(text) => text,
        }
    }
}
