//! Game balance values
//!
//! Loaded from JSON so levels can be rebalanced without a rebuild. Every field
//! falls back to its default, so a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Velocity set by a directional press (units per frame)
    pub player_speed: f32,
    /// Added to vertical velocity every idle tick
    pub gravity: f32,
    /// Horizontal wobble amplitude while moving
    pub float_amplitude: f32,
    /// Phase advance of the wobble per tick
    pub float_step: f32,
    pub max_lives: u8,
    pub invulnerability_ms: f64,

    // === Enemies ===
    pub chase_radius: f32,
    /// Must stay below `chase_radius`
    pub contact_radius: f32,
    /// Distance covered per tick while chasing
    pub enemy_speed: f32,
    pub enemy_invulnerability_ms: f64,

    // === Projectile ===
    pub projectile_speed: f32,
    pub projectile_max_distance: f32,
    pub projectile_scale: f32,
    pub projectile_texture: String,

    // === Inventory ===
    pub inventory_size: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            gravity: PLAYER_GRAVITY,
            float_amplitude: FLOAT_AMPLITUDE,
            float_step: FLOAT_STEP,
            max_lives: MAX_LIVES,
            invulnerability_ms: INVULNERABILITY_MS,

            chase_radius: CHASE_RADIUS,
            contact_radius: CONTACT_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_invulnerability_ms: ENEMY_INVULNERABILITY_MS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_max_distance: PROJECTILE_MAX_DISTANCE,
            projectile_scale: PROJECTILE_SCALE,
            projectile_texture: "assets/Object/Bullet/bullet_1.png".to_string(),

            inventory_size: INVENTORY_SIZE,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document and validate it
    pub fn from_json(json: &str) -> SimResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject combinations the simulation cannot honour
    pub fn validate(&self) -> SimResult<()> {
        if !(self.contact_radius > 0.0) {
            return Err(SimError::Tuning("contact_radius must be positive".into()));
        }
        if self.contact_radius >= self.chase_radius {
            return Err(SimError::Tuning(format!(
                "contact_radius ({}) must be smaller than chase_radius ({})",
                self.contact_radius, self.chase_radius
            )));
        }
        if !(self.projectile_max_distance > 0.0) || !(self.projectile_speed > 0.0) {
            return Err(SimError::Tuning(
                "projectile speed and max distance must be positive".into(),
            ));
        }
        if self.max_lives == 0 || self.max_lives > MAX_LIVES {
            return Err(SimError::Tuning(format!(
                "max_lives must be between 1 and {MAX_LIVES}, got {}",
                self.max_lives
            )));
        }
        if self.invulnerability_ms < 0.0 || self.enemy_invulnerability_ms < 0.0 {
            return Err(SimError::Tuning("invulnerability windows cannot be negative".into()));
        }
        Ok(())
    }

    /// Duration of the player's invulnerability window, clamped to be sane
    pub fn invulnerability_window(&self) -> f64 {
        self.invulnerability_ms.max(0.0)
    }
}
