use crate::state::{FlagError, InventoryError};

/// Errors surfaced while applying resolved effects to the state.
///
/// A correct rule table never produces a rejectable change; these exist so a
/// defective rule is refused wholesale instead of half-applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
