//! One-shot collectibles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Aabb, overlaps};
use super::entity::{EntityId, EntityKind, Readiness, WorldEntity};
use crate::level::PickupSlot;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Unlocks shooting and adds the blaster to the inventory
    Blaster,
    /// Restores one life
    Heart,
}

#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: EntityId,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub texture: String,
    pub readiness: Readiness,
    collected: bool,
}

impl Pickup {
    pub fn new(id: EntityId, slot: &PickupSlot) -> Self {
        Self {
            id,
            kind: slot.kind,
            pos: Vec2::new(slot.x, slot.y),
            texture: slot.texture.clone(),
            readiness: Readiness::Loading,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Test against the player's box and hand back the effect to apply.
    ///
    /// Yields `Some` at most once over the pickup's lifetime; the collected
    /// flag is checked before any overlap test runs.
    pub fn try_collect(&mut self, player: Option<&Aabb>) -> Option<PickupKind> {
        if self.collected {
            return None;
        }
        if !overlaps(player, self.bounds().as_ref()) {
            return None;
        }
        self.collected = true;
        Some(self.kind)
    }
}

impl WorldEntity for Pickup {
    const KIND: EntityKind = EntityKind::Pickup;

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn readiness(&self) -> &Readiness {
        &self.readiness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RenderHandle, SpriteInfo};

    fn pickup(kind: PickupKind) -> Pickup {
        let slot = PickupSlot {
            x: 100.0,
            y: 100.0,
            kind,
            texture: "p.png".into(),
        };
        let mut p = Pickup::new(EntityId(9), &slot);
        p.readiness = Readiness::Ready(SpriteInfo {
            handle: RenderHandle(9),
            size: Vec2::new(20.0, 20.0),
        });
        p
    }

    #[test]
    fn test_collects_once() {
        let mut p = pickup(PickupKind::Blaster);
        let player = Aabb::from_center(Vec2::new(105.0, 100.0), Vec2::new(30.0, 30.0));

        assert_eq!(p.try_collect(Some(&player)), Some(PickupKind::Blaster));
        assert!(p.is_collected());
        for _ in 0..10 {
            assert_eq!(p.try_collect(Some(&player)), None);
        }
        assert!(p.is_collected());
    }

    #[test]
    fn test_no_overlap_no_effect() {
        let mut p = pickup(PickupKind::Heart);
        let player = Aabb::from_center(Vec2::new(300.0, 100.0), Vec2::new(30.0, 30.0));
        assert_eq!(p.try_collect(Some(&player)), None);
        assert!(!p.is_collected());
    }

    #[test]
    fn test_unloaded_sides_never_collect() {
        let mut p = pickup(PickupKind::Blaster);
        assert_eq!(p.try_collect(None), None);

        let mut loading = pickup(PickupKind::Blaster);
        loading.readiness = Readiness::Loading;
        let player = Aabb::from_center(Vec2::new(100.0, 100.0), Vec2::new(30.0, 30.0));
        assert_eq!(loading.try_collect(Some(&player)), None);
        assert!(!loading.is_collected());
    }
}
