//! Headless platform.
//!
//! Bundles [`LogViewSink`] and [`MemoryStorage`] with logging stand-ins for
//! the network, mail composer and page controls, so the whole app can run
//! without a browser (smoke runs, fuzzing, demos on a terminal).

use log::info;

use crate::app::events::ViewEvent;
use crate::app::ports::{
    MailerPort, PagePort, StorageError, StoragePort, SubmissionPort, SubmissionRequest,
    TransportError, ViewSink,
};

use super::log_sink::LogViewSink;
use super::memory_storage::MemoryStorage;

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    pub sink: LogViewSink,
    pub storage: MemoryStorage,
    /// Requests that left the page and await `SubmissionSettled`.
    pub sent: Vec<SubmissionRequest>,
    /// Every `send` fails immediately while set.
    pub offline: bool,
    pub scroll_locked: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

impl ViewSink for HeadlessPlatform {
    fn emit(&mut self, event: &ViewEvent) {
        self.sink.emit(event);
    }
}

impl StoragePort for HeadlessPlatform {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove(key)
    }
}

impl SubmissionPort for HeadlessPlatform {
    fn send(&mut self, request: &SubmissionRequest) -> Result<(), TransportError> {
        if self.offline {
            return Err(TransportError::Unreachable);
        }
        info!("NET | POST {} fields={}", request.endpoint, request.fields.len());
        self.sent.push(request.clone());
        Ok(())
    }
}

impl MailerPort for HeadlessPlatform {
    fn open_mail_link(&mut self, link: &str) {
        info!("MAIL | {}", link);
    }
}

impl PagePort for HeadlessPlatform {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        info!("PAGE | scroll_locked={}", locked);
    }

    fn scroll_to_top(&mut self) {
        info!("PAGE | scroll to top");
    }

    fn scroll_to(&mut self, offset: u32) {
        info!("PAGE | scroll to {}px", offset);
    }

    fn open_in_new_tab(&mut self, url: &str) {
        info!("PAGE | new tab {}", url);
    }
}
