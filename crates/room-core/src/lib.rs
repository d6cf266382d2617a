//! Pure decision core for the single-room escape puzzle.
//!
//! The crate is split the same way the game is: [`state`] holds the single
//! authoritative [`GameState`], [`rules`] is the interaction resolver that
//! turns `(state, verb, target)` into declarative [`Effects`], and [`engine`]
//! owns the state and applies resolved effects atomically. Nothing in here
//! renders, listens, or ticks; presentation and input live behind the
//! `room-runtime` boundary.
pub mod action;
pub mod config;
pub mod engine;
pub mod rules;
pub mod state;

pub use action::{Interaction, Verb};
pub use config::GameConfig;
pub use engine::{ApplyError, GameEngine};
pub use rules::{Effects, Rule, RULES, StateChange, resolve};
pub use state::{
    FlagError, GameClock, GamePhase, GameState, InventoryError, InventoryItem, InventoryState,
    ItemId, ObjectFlag, ObjectId, RoomState,
};
