//! Fixed-size item slots shown under the playfield

use serde::{Deserialize, Serialize};

/// Items a pickup can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryItem {
    Blaster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<InventoryItem>>,
}

impl Inventory {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Put `item` in the first free slot, returning the slot index
    pub fn add(&mut self, item: InventoryItem) -> Option<usize> {
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(item);
        Some(slot)
    }

    /// Clear a slot, returning what was in it
    pub fn remove(&mut self, slot: usize) -> Option<InventoryItem> {
        self.slots.get_mut(slot)?.take()
    }

    pub fn contains(&self, item: InventoryItem) -> bool {
        self.slots.contains(&Some(item))
    }

    pub fn slots(&self) -> &[Option<InventoryItem>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_first_free_slot() {
        let mut inv = Inventory::new(2);
        assert_eq!(inv.add(InventoryItem::Blaster), Some(0));
        assert_eq!(inv.add(InventoryItem::Blaster), Some(1));
        assert_eq!(inv.add(InventoryItem::Blaster), None);

        assert_eq!(inv.remove(0), Some(InventoryItem::Blaster));
        assert_eq!(inv.add(InventoryItem::Blaster), Some(0));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut inv = Inventory::new(1);
        assert_eq!(inv.remove(5), None);
        assert!(!inv.contains(InventoryItem::Blaster));
    }
}
