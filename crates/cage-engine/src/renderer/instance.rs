use bytemuck::{Pod, Zeroable};

/// Shape code written into [`BodyInstance::kind`].
pub const SHAPE_CIRCLE: f32 = 0.0;
pub const SHAPE_RECT: f32 = 1.0;

/// Per-body render data written to the shared buffer for the JS renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// [`SHAPE_CIRCLE`] or [`SHAPE_RECT`].
    pub kind: f32,
    /// Half width, or radius for circles.
    pub half_w: f32,
    /// Half height, or radius for circles.
    pub half_h: f32,
    pub fill_r: f32,
    pub fill_g: f32,
    pub fill_b: f32,
    pub fill_a: f32,
    /// Outline width in pixels (0 = no outline).
    pub stroke_width: f32,
    /// Outline color packed as 0xRRGGBB.
    pub stroke_rgb: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing every visible body for this frame.
pub struct RenderBuffer {
    pub instances: Vec<BodyInstance>,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}
