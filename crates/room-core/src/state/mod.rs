pub mod clock;
pub mod inventory;
pub mod objects;

pub use clock::GameClock;
pub use inventory::{InventoryError, InventoryItem, InventoryState, ItemId};
pub use objects::{FlagError, ObjectFlag, ObjectId, RoomState};

/// Session phase of a single puzzle run.
///
/// `Won` never transitions back to `Active`; only a full restart leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Created but not started; the clock is disarmed.
    #[default]
    NotStarted,
    /// Running; interactions resolve and the clock accumulates.
    Active,
    /// The door was opened with the key.
    Won,
}

impl GamePhase {
    pub const fn is_active(self) -> bool {
        matches!(self, GamePhase::Active)
    }
}

/// Canonical snapshot of the puzzle state.
///
/// `Default` is the initial configuration: every object flag false (key and
/// beer hidden, sink intact, fridge closed), inventory empty, no selection,
/// clock at zero, phase `NotStarted`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameState {
    /// Per-object flags for the fixed room catalogue.
    pub room: RoomState,
    /// Ordered inventory plus the current selection.
    pub inventory: InventoryState,
    /// Elapsed puzzle time.
    pub clock: GameClock,
    /// Where this run is in its lifecycle.
    pub phase: GamePhase,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the initial configuration exactly, regardless of history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_initial_configuration() {
        let mut state = GameState::new();
        state.phase = GamePhase::Active;
        state.clock.advance(4242);
        state
            .room
            .set_flag(ObjectId::Sink, ObjectFlag::Broken, true)
            .unwrap();
        state
            .inventory
            .push(InventoryItem::new(ItemId::Key))
            .unwrap();
        state.inventory.select(0);

        state.reset();

        assert_eq!(state, GameState::default());
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.inventory.is_empty());
        assert_eq!(state.clock.elapsed_seconds(), 0);
    }

    #[test]
    fn only_active_phase_reports_active() {
        assert!(!GamePhase::NotStarted.is_active());
        assert!(GamePhase::Active.is_active());
        assert!(!GamePhase::Won.is_active());
    }
}
