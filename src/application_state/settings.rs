//! # Settings
//!
//! World and movement configuration, loaded once at startup from an optional
//! `settings.json` next to the binary. Any missing file or malformed field
//! falls back to the built-in defaults with a warning; the sandbox never
//! refuses to start over configuration.

use std::path::Path;

use cgmath::Point3;
use serde::Deserialize;

/// All tunable constants of the sandbox.
///
/// Fields absent from the settings file keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the cubic world grid in blocks.
    pub world_size: usize,
    /// Player spawn position in world space, `[x, y, z]`.
    pub spawn: [f32; 3],
    /// Acceleration applied by movement intent, units per second squared.
    pub walk_acceleration: f32,
    /// Exponential damping factor for horizontal velocity, per second.
    pub damping: f32,
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
    /// Upward velocity set by a jump, units per second.
    pub jump_speed: f32,
    /// Radians of look rotation per pixel of pointer movement.
    pub mouse_sensitivity: f32,
    /// Maximum pick distance for break/place, in blocks.
    pub reach: f32,
    /// Minimum height the player is clamped to (eye height above the floor).
    pub ground_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            world_size: 16,
            spawn: [8.0, 2.0, 8.0],
            walk_acceleration: 50.0,
            damping: 10.0,
            gravity: 9.8,
            jump_speed: 5.0,
            mouse_sensitivity: 0.002,
            reach: 5.0,
            ground_height: 1.0,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file is
    /// absent or malformed.
    ///
    /// # Arguments
    /// * `path` - Location of the JSON settings file
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(error) => {
                    log::warn!("Malformed settings file {:?}: {}", path, error);
                    Settings::default()
                }
            },
            Err(error) => {
                log::warn!(
                    "No settings file at {:?} ({}); using defaults",
                    path,
                    error
                );
                Settings::default()
            }
        }
    }

    /// Returns the spawn position as a point.
    pub fn spawn_position(&self) -> Point3<f32> {
        Point3::new(self.spawn[0], self.spawn[1], self.spawn[2])
    }
}
