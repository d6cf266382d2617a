use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures surfaced through the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Apply(#[from] room_core::ApplyError),
}
