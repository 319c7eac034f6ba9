pub mod events;
pub mod physics;
pub mod scene;
pub mod time;
