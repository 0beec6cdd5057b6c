//! Port traits: the hexagonal boundary between view logic and the page.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PortfolioApp (domain)
//! ```
//!
//! Driven adapters (DOM renderer, local storage, network, page scroll)
//! implement these traits.  The [`PortfolioApp`](super::service::PortfolioApp)
//! consumes them via generics, so the core never touches a browser API
//! directly and runs unchanged under test.
//!
//! Two collaborators are optional and owned by the app once detected:
//! the particle renderer ([`RendererPort`]) and the scroll-reveal library
//! ([`RevealPort`]).  A collaborator that fails to initialise is skipped.

use core::fmt;

use crate::config::RevealConfig;
use crate::effects::particles::{FrameState, SceneDescriptor};

// ───────────────────────────────────────────────────────────────
// View sink (driven adapter: domain → DOM)
// ───────────────────────────────────────────────────────────────

/// Controllers describe DOM updates as [`ViewEvent`](super::events::ViewEvent)s;
/// adapters apply them (browser), log them, or record them (tests).
pub trait ViewSink {
    fn emit(&mut self, event: &super::events::ViewEvent);
}

// ───────────────────────────────────────────────────────────────
// Durable client storage
// ───────────────────────────────────────────────────────────────

/// String key-value storage that survives reloads (`localStorage`).
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key.  Returns `Ok(())` even if the key didn't exist.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Remote submission endpoint
// ───────────────────────────────────────────────────────────────

/// One opaque POST of named string fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub endpoint: String,
    pub fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Fire-and-forget network send.  `Ok` means the request left; the
/// outcome arrives later as `Event::SubmissionSettled`.  An immediate
/// `Err` is treated exactly like a settled failure.
pub trait SubmissionPort {
    fn send(&mut self, request: &SubmissionRequest) -> Result<(), TransportError>;
}

/// Opens a pre-filled local mail composer.
pub trait MailerPort {
    fn open_mail_link(&mut self, link: &str);
}

// ───────────────────────────────────────────────────────────────
// Page-level controls
// ───────────────────────────────────────────────────────────────

pub trait PagePort {
    /// Disable (`true`) or restore (`false`) page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    fn scroll_to_top(&mut self);

    /// Smooth-scroll the window to `offset` px from the top.
    fn scroll_to(&mut self, offset: u32);

    fn open_in_new_tab(&mut self, url: &str);
}

/// Everything the app needs from its host in one bound.
pub trait Platform: ViewSink + StoragePort + SubmissionPort + MailerPort + PagePort {}

impl<T> Platform for T where T: ViewSink + StoragePort + SubmissionPort + MailerPort + PagePort {}

// ───────────────────────────────────────────────────────────────
// Optional rendering collaborators
// ───────────────────────────────────────────────────────────────

/// The 3D engine behind the particle background.
pub trait RendererPort {
    /// Accept the scene once.  An error marks the collaborator unavailable.
    fn init(&mut self, scene: &SceneDescriptor) -> Result<(), CollaboratorError>;

    /// Per-frame hook.
    fn render(&mut self, frame: &FrameState);

    fn resize(&mut self, width: u32, height: u32);

    /// Particle tint as 0xRRGGBB.
    fn set_tint(&mut self, rgb: u32);

    fn set_visible(&mut self, visible: bool);
}

/// The scroll-triggered reveal library.
pub trait RevealPort {
    fn init(&mut self, config: &RevealConfig) -> Result<(), CollaboratorError>;

    fn refresh(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Which optional collaborator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Renderer,
    Reveal,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer => write!(f, "renderer"),
            Self::Reveal => write!(f, "scroll-reveal"),
        }
    }
}

/// Errors from collaborator initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The library is not loaded on this page.
    Missing,
    /// The library is present but refused to start (e.g. no WebGL).
    InitFailed,
}

/// Errors from [`SubmissionPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Network unreachable / request blocked.
    Unreachable,
    /// The request was refused before leaving the page.
    Rejected,
    /// No completion arrived in time.
    TimedOut,
}

/// Errors from [`StoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled (private mode, sandboxed frame).
    Unavailable,
    /// Quota exceeded.
    Full,
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "not loaded"),
            Self::InitFailed => write!(f, "init failed"),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => write!(f, "endpoint unreachable"),
            Self::Rejected => write!(f, "request rejected"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::Full => write!(f, "storage full"),
        }
    }
}
