//! Ordered inventory and the single-item selection.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Identifier for the carryable items.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemId {
    Key,
    Beer,
}

impl ItemId {
    /// Label shown in inventory listings.
    pub const fn display_name(self) -> &'static str {
        match self {
            ItemId::Key => "Key",
            ItemId::Beer => "Beer",
        }
    }
}

/// One inventory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: &'static str,
}

impl InventoryItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: id.display_name(),
        }
    }
}

/// Rejected inventory mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },
    #[error("inventory index {index} out of bounds (len {len})")]
    InvalidIndex { index: usize, len: usize },
}

/// Items in acquisition order plus the current selection.
///
/// Duplicates are not prevented here; the rule table keeps them from
/// occurring because every pickup source hides itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryState {
    items: ArrayVec<InventoryItem, { GameConfig::MAX_INVENTORY_SLOTS }>,
    selected: Option<usize>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, preserving acquisition order.
    pub fn push(&mut self, item: InventoryItem) -> Result<(), InventoryError> {
        self.items.try_push(item).map_err(|_| InventoryError::Full {
            capacity: self.items.capacity(),
        })
    }

    /// Removes the item at `index` and repairs the selection: a selection at
    /// the removed index is cleared, one past it shifts down with the items,
    /// one before it is untouched.
    pub fn remove(&mut self, index: usize) -> Result<InventoryItem, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Ok(item)
    }

    /// Selects `index` when in bounds; anything else clears the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.items.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(ids: &[ItemId]) -> InventoryState {
        let mut inventory = InventoryState::new();
        for id in ids {
            inventory.push(InventoryItem::new(*id)).unwrap();
        }
        inventory
    }

    #[test]
    fn push_keeps_acquisition_order() {
        let inventory = filled(&[ItemId::Key, ItemId::Beer]);
        let names: Vec<_> = inventory.items().iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Key", "Beer"]);
    }

    #[test]
    fn push_past_capacity_fails() {
        let mut inventory = InventoryState::new();
        for _ in 0..GameConfig::MAX_INVENTORY_SLOTS {
            inventory.push(InventoryItem::new(ItemId::Beer)).unwrap();
        }
        assert_eq!(
            inventory.push(InventoryItem::new(ItemId::Key)),
            Err(InventoryError::Full {
                capacity: GameConfig::MAX_INVENTORY_SLOTS
            })
        );
    }

    #[test]
    fn select_clamps_out_of_bounds_to_none() {
        let mut inventory = filled(&[ItemId::Key]);
        inventory.select(0);
        assert_eq!(inventory.selected(), Some(0));
        inventory.select(5);
        assert_eq!(inventory.selected(), None);
    }

    #[test]
    fn remove_at_selection_clears_it() {
        let mut inventory = filled(&[ItemId::Key, ItemId::Beer]);
        inventory.select(1);
        inventory.remove(1).unwrap();
        assert_eq!(inventory.selected(), None);
    }

    #[test]
    fn remove_below_selection_shifts_it_down() {
        let mut inventory = filled(&[ItemId::Key, ItemId::Beer]);
        inventory.select(1);
        inventory.remove(0).unwrap();
        assert_eq!(inventory.selected(), Some(0));
        assert_eq!(inventory.selected_item().unwrap().id, ItemId::Beer);
    }

    #[test]
    fn remove_above_selection_leaves_it_alone() {
        let mut inventory = filled(&[ItemId::Key, ItemId::Beer]);
        inventory.select(0);
        inventory.remove(1).unwrap();
        assert_eq!(inventory.selected(), Some(0));
    }

    #[test]
    fn remove_out_of_bounds_is_an_error() {
        let mut inventory = filled(&[ItemId::Key]);
        assert_eq!(
            inventory.remove(3),
            Err(InventoryError::InvalidIndex { index: 3, len: 1 })
        );
    }
}
