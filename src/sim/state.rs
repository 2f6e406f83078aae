//! Game state and the event stream it produces

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::inventory::InventoryItem;
use super::pickup::PickupKind;
use super::player::Player;
use super::world::WorldRegistry;
use crate::host::LoadTicket;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Player lost the last life (terminal)
    Defeated,
    /// Boss destroyed (terminal for the level)
    LevelCleared,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during a tick, for UI, audio and logs
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Fired { origin_x: f32, speed: f32 },
    ProjectileExpired { traveled: f32 },
    EnemyDestroyed { id: EntityId, pos: Vec2, boss: bool },
    BossDefeated,
    PlayerDamaged { lives: u8 },
    /// Contact while the invulnerability window was open
    DamageIgnored,
    PlayerHealed { lives: u8 },
    PickupCollected { id: EntityId, kind: PickupKind },
    InventoryChanged { slot: usize, item: Option<InventoryItem> },
    GameOver,
    LoadFailed { ticket: LoadTicket, reason: String },
}

/// Complete simulation state for one level
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation clock (ms), advanced by `TickInput::delta_ms`
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub world: WorldRegistry,
    /// Name of the level currently built
    pub level_name: Option<String>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state for `tuning`, which must pass [`Tuning::validate`]
    pub fn new(tuning: Tuning) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "invalid tuning: {:?}",
            tuning.validate()
        );
        let player = Player::new(Vec2::ZERO, &tuning);
        Self {
            tuning,
            phase: GamePhase::Playing,
            clock_ms: 0.0,
            time_ticks: 0,
            player,
            world: WorldRegistry::new(),
            level_name: None,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand pending events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
