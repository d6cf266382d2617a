//! The engine owns the authoritative [`GameState`] and is its only writer.
//!
//! Interactions flow one way: the engine asks the resolver for [`Effects`],
//! applies them to a scratch copy of the state, and commits the copy only
//! when every change went through. A rejected change therefore leaves the
//! observable state untouched, which is what keeps "no visible effect" the
//! worst possible outcome.

mod errors;

pub use errors::ApplyError;

use crate::action::{Interaction, Verb};
use crate::rules::{self, Effects, StateChange};
use crate::state::{GamePhase, GameState, InventoryItem, ObjectId};

/// One independent puzzle run.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for boundaries and tests; mutation stays in here.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Arms a fresh run. Returns false (and changes nothing) unless the game
    /// is in `NotStarted`; a finished run needs an explicit restart first.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::NotStarted {
            return false;
        }
        self.state.reset();
        self.state.phase = GamePhase::Active;
        true
    }

    /// Full reset to the initial configuration, from any phase.
    pub fn restart(&mut self) {
        self.state.reset();
    }

    /// Selects an inventory slot; out-of-bounds clears the selection.
    /// Ignored while the game is not active.
    pub fn select_item(&mut self, index: usize) -> bool {
        if !self.state.phase.is_active() {
            return false;
        }
        self.state.inventory.select(index);
        true
    }

    /// One simulated second from the external tick source. Returns whether
    /// the clock advanced; ticks outside `Active` are dropped.
    pub fn tick(&mut self) -> bool {
        if !self.state.phase.is_active() {
            return false;
        }
        self.state.clock.advance(1);
        true
    }

    /// Resolves and applies one interaction. No target under the cursor, or
    /// an inactive game, yields empty effects and an untouched state.
    pub fn interact(
        &mut self,
        verb: Verb,
        target: Option<ObjectId>,
    ) -> Result<Effects, ApplyError> {
        let Some(target) = target else {
            return Ok(Effects::none());
        };
        let effects = rules::resolve(&self.state, Interaction::new(verb, target));
        self.apply(&effects)?;
        Ok(effects)
    }

    /// Applies effects all-or-nothing: mutations land on a scratch copy that
    /// replaces the state only after every change succeeded.
    fn apply(&mut self, effects: &Effects) -> Result<(), ApplyError> {
        if effects.is_empty() {
            return Ok(());
        }
        let mut next = self.state.clone();
        for change in &effects.changes {
            Self::apply_change(&mut next, change)?;
        }
        if effects.time_delta > 0 {
            next.clock.advance(effects.time_delta);
        }
        if effects.ends_game {
            next.phase = GamePhase::Won;
        }
        self.state = next;
        Ok(())
    }

    fn apply_change(state: &mut GameState, change: &StateChange) -> Result<(), ApplyError> {
        match change {
            StateChange::SetFlag {
                object,
                flag,
                value,
            } => state.room.set_flag(*object, *flag, *value)?,
            StateChange::AddItem(id) => state.inventory.push(InventoryItem::new(*id))?,
            StateChange::RemoveItem(index) => {
                state.inventory.remove(*index)?;
            }
            StateChange::ClearSelection => state.inventory.clear_selection(),
        }
        Ok(())
    }
}
