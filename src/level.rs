//! Level layouts
//!
//! A level is a list of spawn slots. Sprite placement and background layout
//! belong to the renderer; the simulation only needs positions, textures and
//! what each slot spawns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::sim::PickupKind;

/// Enemy spawn slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySlot {
    pub x: f32,
    pub y: f32,
    pub texture: String,
    /// Destroying this enemy clears the level
    #[serde(default)]
    pub boss: bool,
}

/// Pickup spawn slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupSlot {
    pub x: f32,
    pub y: f32,
    pub kind: PickupKind,
    pub texture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub player_texture: String,
    /// Player spawn; defaults to the centre of the screen
    #[serde(default)]
    pub player_spawn: Option<(f32, f32)>,
    #[serde(default)]
    pub enemies: Vec<EnemySlot>,
    #[serde(default)]
    pub pickups: Vec<PickupSlot>,
}

impl LevelDef {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let level = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded level '{}' from {}", level.name, path.display());
        Ok(level)
    }

    /// The shipped opening level: one guarding enemy and the blaster pickup
    pub fn first_level() -> Self {
        Self {
            name: "level-1".to_string(),
            player_texture: "assets/bunny.png".to_string(),
            player_spawn: None,
            enemies: vec![
                EnemySlot {
                    x: 100.0,
                    y: 400.0,
                    texture: "assets/bunny.png".to_string(),
                    boss: false,
                },
                EnemySlot {
                    x: 1400.0,
                    y: 380.0,
                    texture: "assets/Enemy/boss.png".to_string(),
                    boss: true,
                },
            ],
            pickups: vec![PickupSlot {
                x: 600.0,
                y: 420.0,
                kind: PickupKind::Blaster,
                texture: "assets/Object/PowerUp/powerup.png".to_string(),
            }],
        }
    }
}
