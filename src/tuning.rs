//! Data-driven game balance
//!
//! Every gameplay number that is not screen geometry lives here, so a
//! balance pass is a JSON edit rather than a rebuild. Defaults are the
//! canonical values; a missing or malformed file falls back to them
//! with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Player movement ===
    /// Acceleration applied while a directional key is held
    pub movement_accel: f32,
    /// Friction applied against residual motion
    pub movement_decel: f32,
    /// Per-axis speed cap
    pub max_speed: f32,
    /// Speed imparted away from a violated screen bound
    pub bounce_speed: f32,
    /// Player sprite width
    pub player_width: f32,
    /// Seconds between player shots
    pub player_fire_interval: f32,
    /// Rightward speed of player projectiles
    pub player_projectile_speed: f32,

    // === Enemies ===
    /// Enemy sprite width
    pub enemy_width: f32,
    /// Seconds between each enemy's shots
    pub enemy_fire_interval: f32,
    /// Leftward speed of enemy projectiles
    pub enemy_projectile_speed: f32,

    // === Columns ===
    /// Seconds between column spawns
    pub column_spawn_interval: f32,
    /// Enemies per column
    pub column_size: u32,
    /// Vertical gap between column members
    pub column_spacing: f32,
    /// Y of the topmost member at spawn
    pub column_top: f32,
    /// Horizontal drift speed (applied leftward)
    pub column_x_speed: f32,
    /// Vertical oscillation speed
    pub column_y_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            movement_accel: 0.45,
            movement_decel: 0.09,
            max_speed: 5.0,
            bounce_speed: 2.0,
            player_width: 64.0,
            player_fire_interval: 0.5,
            player_projectile_speed: 10.0,

            enemy_width: 64.0,
            enemy_fire_interval: 3.0,
            enemy_projectile_speed: 10.0,

            column_spawn_interval: 20.0,
            column_size: 5,
            column_spacing: 20.0,
            column_top: 50.0,
            column_x_speed: 0.5,
            column_y_speed: 1.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("could not read tuning file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write the current tuning as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("could not write tuning file {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("could not serialize tuning: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_are_canonical() {
        let tuning = Tuning::default();
        assert!((tuning.movement_accel - 0.45).abs() < f32::EPSILON);
        assert!((tuning.max_speed - 5.0).abs() < f32::EPSILON);
        assert_eq!(tuning.column_size, 5);
        assert!((tuning.column_spawn_interval - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert!((tuning.bounce_speed - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut tuning = Tuning::default();
        tuning.max_speed = 7.5;

        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert!((back.max_speed - 7.5).abs() < f32::EPSILON);
    }
}
