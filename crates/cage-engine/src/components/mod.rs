pub mod entity;
pub mod segment;
pub mod style;
