//! Live enemies and pickups of the current level
//!
//! The registry is the only source of truth for "is this entity still in the
//! world". Both lists stay in spawn order (ascending id), which is also the
//! collision tie-break order.

use super::enemy::Enemy;
use super::entity::EntityId;
use super::pickup::Pickup;
use crate::level::{EnemySlot, PickupSlot};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct WorldRegistry {
    enemies: Vec<Enemy>,
    pickups: Vec<Pickup>,
    next_id: u32,
}

impl Default for WorldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            pickups: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn_enemy(&mut self, slot: &EnemySlot, tuning: &Tuning) -> EntityId {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, slot, tuning));
        id
    }

    pub fn spawn_pickup(&mut self, slot: &PickupSlot) -> EntityId {
        let id = self.next_entity_id();
        self.pickups.push(Pickup::new(id, slot));
        id
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn pickups_mut(&mut self) -> &mut [Pickup] {
        &mut self.pickups
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn pickup(&self, id: EntityId) -> Option<&Pickup> {
        self.pickups.iter().find(|p| p.id == id)
    }

    pub fn pickup_mut(&mut self, id: EntityId) -> Option<&mut Pickup> {
        self.pickups.iter_mut().find(|p| p.id == id)
    }

    /// Remove an enemy; a second removal of the same id returns `None`
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(idx))
    }

    /// Remove a pickup; a second removal of the same id returns `None`
    pub fn remove_pickup(&mut self, id: EntityId) -> Option<Pickup> {
        let idx = self.pickups.iter().position(|p| p.id == id)?;
        Some(self.pickups.remove(idx))
    }

    /// Empty both lists (ids keep counting up)
    pub fn clear(&mut self) -> (Vec<Enemy>, Vec<Pickup>) {
        (
            std::mem::take(&mut self.enemies),
            std::mem::take(&mut self.pickups),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty() && self.pickups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PickupKind;

    fn enemy_slot(x: f32) -> EnemySlot {
        EnemySlot {
            x,
            y: 0.0,
            texture: "e.png".into(),
            boss: false,
        }
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let tuning = Tuning::default();
        let mut world = WorldRegistry::new();
        let a = world.spawn_enemy(&enemy_slot(0.0), &tuning);
        let p = world.spawn_pickup(&PickupSlot {
            x: 0.0,
            y: 0.0,
            kind: PickupKind::Heart,
            texture: "h.png".into(),
        });
        let b = world.spawn_enemy(&enemy_slot(10.0), &tuning);
        assert!(a < p && p < b);
        let ids: Vec<_> = world.enemies().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_remove_is_exactly_once() {
        let tuning = Tuning::default();
        let mut world = WorldRegistry::new();
        let a = world.spawn_enemy(&enemy_slot(0.0), &tuning);
        let b = world.spawn_enemy(&enemy_slot(10.0), &tuning);

        assert_eq!(world.remove_enemy(a).map(|e| e.id), Some(a));
        assert!(world.remove_enemy(a).is_none());
        assert!(world.enemy(a).is_none());
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].id, b);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let tuning = Tuning::default();
        let mut world = WorldRegistry::new();
        let a = world.spawn_enemy(&enemy_slot(0.0), &tuning);
        let (enemies, pickups) = world.clear();
        assert_eq!(enemies.len(), 1);
        assert!(pickups.is_empty());
        assert!(world.is_empty());
        let b = world.spawn_enemy(&enemy_slot(0.0), &tuning);
        assert_ne!(a, b);
    }
}
