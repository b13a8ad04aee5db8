use thiserror::Error;

use crate::domain::EventKind;
use crate::ports::HostError;

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("handler not found for event_kind={0}")]
    HandlerNotFound(EventKind),

    #[error("handler for {expected} received a {actual} event")]
    EventMismatch { expected: EventKind, actual: EventKind },

    #[error("host operation failed: {0}")]
    Host(#[from] HostError),

    /// The spawned handler task panicked or was cancelled before settling.
    #[error("event handler aborted: {0}")]
    Aborted(String),

    #[error("no tokio runtime is available to drive handlers or timers")]
    NoRuntime,

    #[error("invalid configuration: {0}")]
    Config(String),
}
