pub mod geometry;
pub mod overlay;
pub mod render;
