/// Supplies the identifier of whatever currently sits under the player's
/// cursor.
///
/// Implemented by the host's hit-testing layer and queried once per verb
/// dispatch, never polled. Identifiers outside the object catalogue are
/// legitimate answers; the session treats them as "nothing under the
/// cursor".
pub trait PointerTracker {
    fn current_target(&self) -> Option<String>;
}
