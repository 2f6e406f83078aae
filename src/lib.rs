//! Float Fighter - entity simulation core for a floating 2D side-scroller
//!
//! Core modules:
//! - `sim`: Per-frame simulation (movement, pursuit AI, projectiles, pickups, player state)
//! - `host`: Collaborator contracts (render tree, asset loading, audio, navigation)
//! - `tuning`: Data-driven game balance
//! - `level`: Level layouts (spawn slots for enemies and pickups)
//! - `error`: Error taxonomy shared by the core

pub mod error;
pub mod host;
pub mod level;
pub mod sim;
pub mod tuning;

pub use error::{LoadError, SimError};
pub use level::LevelDef;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Duration of one nominal frame in milliseconds (`delta == 1.0`)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_GRAVITY: f32 = 0.5;
    pub const FLOAT_AMPLITUDE: f32 = 10.0;
    pub const FLOAT_STEP: f32 = 0.1;
    pub const MAX_LIVES: u8 = 3;
    /// Invulnerability window after taking damage (ms)
    pub const INVULNERABILITY_MS: f64 = 2000.0;

    /// Enemy defaults
    pub const CHASE_RADIUS: f32 = 300.0;
    pub const CONTACT_RADIUS: f32 = 100.0;
    pub const ENEMY_SPEED: f32 = 1.85;
    pub const ENEMY_INVULNERABILITY_MS: f64 = 2000.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_MAX_DISTANCE: f32 = 500.0;
    /// Bullet textures are drawn at a tenth of their size
    pub const PROJECTILE_SCALE: f32 = 0.1;

    /// Inventory slots shown under the playfield
    pub const INVENTORY_SIZE: usize = 5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Heading (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
