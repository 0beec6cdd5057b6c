//! Demo and certificate overlays.
//!
//! At most one modal is open.  Opening locks page scroll; closing restores
//! it exactly once.  A second open while one is showing is refused with
//! [`Error::AlreadyOpen`] and leaves the open modal untouched.

use core::fmt;

use log::{info, warn};

use crate::app::events::ViewEvent;
use crate::config::PortfolioConfig;
use crate::error::{Error, Result};

use super::Cx;

const DEMO_FALLBACK: &str = "Demo content not available";
const CERTIFICATE_FALLBACK: &str = "Certificate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Demo,
    Certificate,
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Demo => "demo",
            Self::Certificate => "certificate",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    DemoOpen(String),
    CertificateOpen(String),
}

impl ModalState {
    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            Self::None => None,
            Self::DemoOpen(_) => Some(ModalKind::Demo),
            Self::CertificateOpen(_) => Some(ModalKind::Certificate),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Resolved content for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub kind: ModalKind,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    /// Image source for certificates.
    pub source: Option<String>,
}

impl ModalView {
    pub fn demo(config: &PortfolioConfig, id: &str) -> Self {
        match config.demos.get(id) {
            Some(entry) => Self {
                kind: ModalKind::Demo,
                title: entry.title.clone(),
                body: entry.description.clone(),
                tags: entry.tags.clone(),
                source: None,
            },
            None => Self {
                kind: ModalKind::Demo,
                title: String::new(),
                body: DEMO_FALLBACK.to_owned(),
                tags: Vec::new(),
                source: None,
            },
        }
    }

    pub fn certificate(config: &PortfolioConfig, path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let title = config
            .certificate_titles
            .get(file_name)
            .cloned()
            .unwrap_or_else(|| CERTIFICATE_FALLBACK.to_owned());
        Self {
            kind: ModalKind::Certificate,
            body: String::new(),
            tags: Vec::new(),
            source: Some(path.to_owned()),
            title,
        }
    }
}

/// What an open request produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    Modal,
    /// PDF certificates go to a new tab instead of a modal.
    ExternalTab,
}

pub fn is_pdf(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".pdf")
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    scroll_locked: bool,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn open_demo(&mut self, id: &str, cx: &mut Cx<'_>) -> Result<Opened> {
        self.ensure_closed()?;
        let view = ModalView::demo(cx.config, id);
        self.show(ModalState::DemoOpen(id.to_owned()), view, cx);
        Ok(Opened::Modal)
    }

    pub fn open_certificate(&mut self, path: &str, cx: &mut Cx<'_>) -> Result<Opened> {
        self.ensure_closed()?;
        if is_pdf(path) {
            info!("Modal: opening '{path}' in a new tab");
            cx.platform.open_in_new_tab(path);
            return Ok(Opened::ExternalTab);
        }
        let view = ModalView::certificate(cx.config, path);
        self.show(ModalState::CertificateOpen(path.to_owned()), view, cx);
        Ok(Opened::Modal)
    }

    /// Close whatever is open.  Returns `false` if nothing was.
    pub fn close(&mut self, cx: &mut Cx<'_>) -> bool {
        let Some(kind) = self.state.kind() else {
            return false;
        };
        self.state = ModalState::None;
        if self.scroll_locked {
            self.scroll_locked = false;
            cx.platform.set_scroll_locked(false);
        }
        info!("Modal: closed {kind}");
        cx.emit(ViewEvent::ModalClosed);
        true
    }

    fn ensure_closed(&self) -> Result<()> {
        match self.state.kind() {
            Some(open) => {
                warn!("Modal: {open} already open, request dropped");
                Err(Error::AlreadyOpen { open })
            }
            None => Ok(()),
        }
    }

    fn show(&mut self, state: ModalState, view: ModalView, cx: &mut Cx<'_>) {
        info!("Modal: opened {} '{}'", view.kind, view.title);
        self.state = state;
        if !self.scroll_locked {
            self.scroll_locked = true;
            cx.platform.set_scroll_locked(true);
        }
        cx.emit(ViewEvent::ModalOpened(view));
    }
}
