/// Compile-time capacities shared across the core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Inventory capacity. Nine slots so every slot stays reachable through
    /// the one-digit selection hotkeys (`1`-`9`).
    pub const MAX_INVENTORY_SLOTS: usize = 9;
}
