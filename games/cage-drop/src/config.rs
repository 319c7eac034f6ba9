use cage_engine::GameConfig;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hint::DEFAULT_ENDPOINT;

/// Every tunable of the puzzle. Missing JSON fields keep their defaults.
///
/// Relative positions are fractions of the world size, so the same config
/// fits any viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Downward gravity in px/s².
    pub gravity: f32,
    pub ball_radius: f32,
    pub ball_restitution: f32,
    /// Ball start as a fraction of (width, height).
    pub ball_start: [f32; 2],
    /// Outer edge length of the square cage.
    pub cage_size: f32,
    pub cage_thickness: f32,
    /// Thickness of the body behind each drawn line.
    pub line_thickness: f32,
    pub goal_size: [f32; 2],
    /// Goal center as a fraction of (width, height).
    pub goal_position: [f32; 2],
    pub bounds_thickness: f32,
    pub hint_endpoint: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            gravity: 2000.0,
            ball_radius: 14.0,
            ball_restitution: 0.8,
            ball_start: [0.25, 0.25],
            cage_size: 80.0,
            cage_thickness: 6.0,
            line_thickness: 6.0,
            goal_size: [80.0, 20.0],
            goal_position: [0.75, 0.85],
            bounds_thickness: 50.0,
            hint_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl PuzzleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Engine settings for this puzzle. World size is filled in by the runner.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            gravity: Vec2::new(0.0, self.gravity),
            ..GameConfig::default()
        }
    }

    pub fn ball_start(&self, world: Vec2) -> Vec2 {
        Vec2::from(self.ball_start) * world
    }

    pub fn goal_center(&self, world: Vec2) -> Vec2 {
        Vec2::from(self.goal_position) * world
    }
}

/// A puzzle config that could not be parsed.
#[derive(Debug, Error)]
#[error("invalid puzzle config: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PuzzleConfig::from_json(r#"{"ball_radius": 20, "goal_position": [0.5, 0.9]}"#).unwrap();
        assert_eq!(config.ball_radius, 20.0);
        assert_eq!(config.goal_position, [0.5, 0.9]);
        assert_eq!(config.cage_size, 80.0);
        assert_eq!(config.hint_endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = PuzzleConfig::from_json("{ball_radius: 20").unwrap_err();
        assert!(err.to_string().starts_with("invalid puzzle config: "));
        let cause = std::error::Error::source(&err).expect("serde error kept as source");
        assert!(err.to_string().ends_with(&cause.to_string()));

        assert!(PuzzleConfig::from_json(r#"{"gravity": "down"}"#).is_err());
    }

    #[test]
    fn positions_scale_with_world() {
        let config = PuzzleConfig::default();
        let world = Vec2::new(800.0, 600.0);
        assert_eq!(config.ball_start(world), Vec2::new(200.0, 150.0));
        assert_eq!(config.goal_center(world), Vec2::new(600.0, 510.0));
    }

    #[test]
    fn gravity_points_down() {
        assert_eq!(PuzzleConfig::default().game_config().gravity, Vec2::new(0.0, 2000.0));
    }
}
