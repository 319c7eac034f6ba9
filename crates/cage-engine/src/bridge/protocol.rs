/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Bodies: max_bodies × 12 floats]
/// [Overlay: max_overlay_vertices × 5 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Sections are drawn in order, so the overlay always lands above the bodies.
/// Capacities are written once into the header at init.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::instance::BodyInstance;
use crate::systems::geometry::STROKE_VERTEX_FLOATS;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_WORLD_WIDTH: usize = 2;
pub const HEADER_WORLD_HEIGHT: usize = 3;
pub const HEADER_MAX_BODIES: usize = 4;
pub const HEADER_BODY_COUNT: usize = 5;
pub const HEADER_MAX_OVERLAY_VERTICES: usize = 6;
pub const HEADER_OVERLAY_VERTEX_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_BACKGROUND_RGB: usize = 10;
pub const HEADER_GENERATION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_bodies: usize,
    pub max_overlay_vertices: usize,
    pub max_events: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where overlay vertex data begins.
    pub overlay_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_overlay_vertices: usize, max_events: usize) -> Self {
        let body_data_offset = HEADER_FLOATS;
        let overlay_data_offset = body_data_offset + max_bodies * BodyInstance::FLOATS;
        let event_data_offset = overlay_data_offset + max_overlay_vertices * STROKE_VERTEX_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * GameEvent::FLOATS;

        Self {
            max_bodies,
            max_overlay_vertices,
            max_events,
            body_data_offset,
            overlay_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_bodies, config.max_overlay_vertices, config.max_events)
    }
}
