//! Events delivered from the session to presenters.

use room_core::{InventoryItem, ObjectFlag, ObjectId};

/// One presentation-relevant fact emitted by the session.
///
/// Events describe what to render, not how: the DOM/terminal/whatever layer
/// behind [`EventConsumer`] decides what a revealed key or a ticking clock
/// looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A fresh run began; clock and inventory snapshots follow.
    Started,
    /// The session returned to its initial configuration.
    Reset,
    /// Modal text for the player.
    MessageShown(String),
    /// The clock display changed; payload is the formatted `HH:MM:SS`.
    ClockUpdated(String),
    /// Inventory contents or selection changed.
    InventoryChanged {
        items: Vec<InventoryItem>,
        selected: Option<usize>,
    },
    /// A single object flag changed.
    ObjectChanged {
        object: ObjectId,
        flag: ObjectFlag,
        value: bool,
    },
    /// The door opened with the key. The host must stop generating ticks.
    Won { message: String },
}

/// Receives session events in emission order.
pub trait EventConsumer {
    fn on_event(&mut self, event: &SessionEvent);
}
