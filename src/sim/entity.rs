//! Shared "placed in the world" capability
//!
//! Player, enemies, pickups and projectiles all own a sprite that loads
//! asynchronously. Until it arrives the entity has no bounding box and takes
//! no part in the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::error::{SimError, SimResult};
use crate::host::{RenderHost, SpriteInfo};

/// Stable identifier for registry entities (never reused within a run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Entity variants placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
    Pickup,
}

/// Sprite resource state of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Readiness {
    /// Texture requested, not delivered yet
    #[default]
    Loading,
    /// Sprite is on stage
    Ready(SpriteInfo),
    /// Texture failed to load; the entity stays inert
    Failed,
}

impl Readiness {
    pub fn sprite(&self) -> Option<&SpriteInfo> {
        match self {
            Readiness::Ready(sprite) => Some(sprite),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Readiness::Loading)
    }

    /// Flip `Loading` to `Ready` and put the sprite on stage.
    /// Returns false (and leaves the stage alone) for any other state.
    pub fn attach(&mut self, sprite: SpriteInfo, render: &mut impl RenderHost) -> bool {
        if !self.is_loading() {
            return false;
        }
        render.add_entity(sprite.handle);
        *self = Readiness::Ready(sprite);
        true
    }

    /// Permanently disable the entity after a failed load
    pub fn fail(&mut self) {
        if self.is_loading() {
            *self = Readiness::Failed;
        }
    }

    /// Take the sprite off stage; the entity keeps no render handle afterwards
    pub fn detach(&mut self, render: &mut impl RenderHost) {
        if let Readiness::Ready(sprite) = *self {
            render.remove_entity(sprite.handle);
        }
        *self = Readiness::Failed;
    }
}

/// Common view over everything with a position and a sprite
pub trait WorldEntity {
    const KIND: EntityKind;

    fn position(&self) -> Vec2;

    fn readiness(&self) -> &Readiness;

    /// On-screen size of the sprite (texture size unless scaled)
    fn sprite_size(&self) -> Option<Vec2> {
        self.readiness().sprite().map(|s| s.size)
    }

    /// Bounding box, or `None` while the sprite is unavailable
    fn bounds(&self) -> Option<Aabb> {
        self.sprite_size()
            .map(|size| Aabb::from_center(self.position(), size))
    }

    /// Sprite handle, or `ResourceNotReady` while it is still loading or failed
    fn require_ready(&self) -> SimResult<&SpriteInfo> {
        self.readiness()
            .sprite()
            .ok_or(SimError::ResourceNotReady(Self::KIND))
    }
}
