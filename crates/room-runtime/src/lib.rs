//! Engine boundary for the escape-room core.
//!
//! Hosts talk to a [`Session`]: input routers call the entry points
//! (`start`, `restart`, `verb`, `select_item`, `tick`), the hit-testing
//! layer answers [`PointerTracker`] queries, and presenters consume the
//! [`SessionEvent`] stream. Dispatch is strictly serialized; a call that
//! lands while another command is in flight queues behind it instead of
//! interleaving state mutation.
pub mod error;
pub mod event;
pub mod session;
pub mod tracker;

pub use error::{Result, SessionError};
pub use event::{EventConsumer, SessionEvent};
pub use session::{ABOUT, Session};
pub use tracker::PointerTracker;
