//! Unified error types for the portfolio view layer.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! orchestrator's error handling uniform.  All variants are `Copy` so they
//! can be logged, returned and compared without allocation.

use core::fmt;

use crate::app::ports::{Collaborator, TransportError};
use crate::config::ConfigError;
use crate::controllers::modal::ModalKind;
use crate::store::Field;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A selection value lies outside its field's domain.
    /// Programmer error: fatal in strict mode, ignored (prior value kept)
    /// otherwise.
    InvalidSelection { field: Field },
    /// A modal was requested while another one is showing.
    AlreadyOpen { open: ModalKind },
    /// The remote form endpoint could not be reached.  Always recovered
    /// locally through the mail-link fallback.
    SubmissionFailed(TransportError),
    /// An optional rendering collaborator is missing or failed to start.
    CollaboratorUnavailable(Collaborator),
    /// Every timer slot is in use.
    TimersExhausted,
    /// The inbound event queue is full; the event was dropped.
    QueueFull,
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection { field } => write!(f, "invalid selection for {field}"),
            Self::AlreadyOpen { open } => write!(f, "modal already open: {open}"),
            Self::SubmissionFailed(e) => write!(f, "submission failed: {e}"),
            Self::CollaboratorUnavailable(c) => write!(f, "collaborator unavailable: {c}"),
            Self::TimersExhausted => write!(f, "no free timer slots"),
            Self::QueueFull => write!(f, "event queue full"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::SubmissionFailed(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
