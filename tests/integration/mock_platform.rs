//! Mock platform for integration tests.
//!
//! Records every port call so tests can assert on the full history of view
//! updates, storage writes, network sends and page control without a
//! browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio::app::events::ViewEvent;
use folio::app::ports::{
    CollaboratorError, MailerPort, PagePort, RendererPort, RevealPort, StorageError, StoragePort,
    SubmissionPort, SubmissionRequest, TransportError, ViewSink,
};
use folio::app::service::{Collaborators, PortfolioApp};
use folio::config::{PortfolioConfig, RevealConfig};
use folio::effects::particles::{FrameState, SceneDescriptor};
use folio::store::{Document, Item};

// ── Platform ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockPlatform {
    pub events: Vec<ViewEvent>,
    pub storage: HashMap<String, String>,
    pub storage_writes: Vec<(String, String)>,
    pub sent: Vec<SubmissionRequest>,
    /// Makes every `send` fail immediately.
    pub reject_sends: Option<TransportError>,
    pub mail_links: Vec<String>,
    pub scroll_locks: Vec<bool>,
    pub tabs: Vec<String>,
    pub scrolled_to_top: u32,
    pub scrolled_to: Vec<u32>,
}

#[allow(dead_code)]
impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: &str) -> Self {
        let mut platform = Self::default();
        platform
            .storage
            .insert("theme-preference".to_owned(), theme.to_owned());
        platform
    }

    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    pub fn contains(&self, event: &ViewEvent) -> bool {
        self.events.contains(event)
    }

    /// Position of the first matching event.
    pub fn position(&self, event: &ViewEvent) -> Option<usize> {
        self.events.iter().position(|e| e == event)
    }

    /// Last value shown for a counter, if any.
    pub fn last_stat(&self, name: &str) -> Option<String> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::StatDisplayed { key, text } if key.name() == name => Some(text.clone()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ViewSink for MockPlatform {
    fn emit(&mut self, event: &ViewEvent) {
        self.events.push(event.clone());
    }
}

impl StoragePort for MockPlatform {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.insert(key.to_owned(), value.to_owned());
        self.storage_writes.push((key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove(key);
        Ok(())
    }
}

impl SubmissionPort for MockPlatform {
    fn send(&mut self, request: &SubmissionRequest) -> Result<(), TransportError> {
        self.sent.push(request.clone());
        match self.reject_sends {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl MailerPort for MockPlatform {
    fn open_mail_link(&mut self, link: &str) {
        self.mail_links.push(link.to_owned());
    }
}

impl PagePort for MockPlatform {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locks.push(locked);
    }

    fn scroll_to_top(&mut self) {
        self.scrolled_to_top += 1;
    }

    fn scroll_to(&mut self, offset: u32) {
        self.scrolled_to.push(offset);
    }

    fn open_in_new_tab(&mut self, url: &str) {
        self.tabs.push(url.to_owned());
    }
}

// ── Collaborators ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RendererLog {
    pub scenes: usize,
    pub frames: usize,
    pub tints: Vec<u32>,
    pub visible: Vec<bool>,
    pub resizes: Vec<(u32, u32)>,
}

pub struct MockRenderer {
    pub log: Rc<RefCell<RendererLog>>,
    pub fail: bool,
}

impl RendererPort for MockRenderer {
    fn init(&mut self, _scene: &SceneDescriptor) -> Result<(), CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError::InitFailed);
        }
        self.log.borrow_mut().scenes += 1;
        Ok(())
    }

    fn render(&mut self, _frame: &FrameState) {
        self.log.borrow_mut().frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().resizes.push((width, height));
    }

    fn set_tint(&mut self, rgb: u32) {
        self.log.borrow_mut().tints.push(rgb);
    }

    fn set_visible(&mut self, visible: bool) {
        self.log.borrow_mut().visible.push(visible);
    }
}

#[derive(Debug, Default)]
pub struct RevealLog {
    pub inits: Vec<RevealConfig>,
    pub refreshes: usize,
}

pub struct MockReveal {
    pub log: Rc<RefCell<RevealLog>>,
    pub missing: bool,
}

impl RevealPort for MockReveal {
    fn init(&mut self, config: &RevealConfig) -> Result<(), CollaboratorError> {
        if self.missing {
            return Err(CollaboratorError::Missing);
        }
        self.log.borrow_mut().inits.push(config.clone());
        Ok(())
    }

    fn refresh(&mut self) {
        self.log.borrow_mut().refreshes += 1;
    }
}

// ── Fixtures ──────────────────────────────────────────────────

pub const DESKTOP: (u32, u32) = (1280, 800);
pub const MOBILE: (u32, u32) = (375, 812);

/// Three projects, four skills and five testimonials.
///
/// The `programming` category holds proficiencies 80, 90 and 70.
pub fn sample_document() -> Document {
    Document::new(vec![
        Item::project("p-robot", &["robotics", "iot"]),
        Item::project("p-web", &["web"]),
        Item::project("p-dash", &["iot", "web"]),
        Item::skill("s-rust", "programming", 80.0, 3.0).featured(),
        Item::skill("s-cpp", "programming", 90.0, 5.0),
        Item::skill("s-py", "programming", 70.0, 4.0),
        Item::skill("s-react", "web", 60.0, 2.0),
        Item::testimonial("t0"),
        Item::testimonial("t1"),
        Item::testimonial("t2"),
        Item::testimonial("t3"),
        Item::testimonial("t4"),
    ])
}

/// Config with the noisy effects off so event logs stay readable.
pub fn quiet_config() -> PortfolioConfig {
    let mut config = PortfolioConfig::default();
    config.features.preloader = false;
    config.features.typewriter = false;
    config.features.cursor = false;
    config
}

#[allow(dead_code)]
pub fn boot(config: PortfolioConfig, platform: &mut MockPlatform) -> PortfolioApp {
    PortfolioApp::new(
        config,
        sample_document(),
        DESKTOP,
        Collaborators::default(),
        platform,
    )
    .expect("boot")
}

#[allow(dead_code)]
pub fn boot_quiet(platform: &mut MockPlatform) -> PortfolioApp {
    boot(quiet_config(), platform)
}
