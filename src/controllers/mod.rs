//! Widget controllers.
//!
//! Each controller owns one widget's transient state (pending timers,
//! in-flight requests, modal contents).  Persistent selection lives in the
//! store; controllers react to store notifications and to routed events.
//!
//! Everything a controller may touch during a call is bundled in [`Cx`],
//! built by the app for the duration of one dispatch.

pub mod carousel;
pub mod contact;
pub mod filter;
pub mod modal;
pub mod preloader;
pub mod responsive;
pub mod scroll;
pub mod skills;
pub mod theme;

use rand::rngs::StdRng;

use crate::app::events::ViewEvent;
use crate::app::ports::{Platform, ViewSink};
use crate::config::PortfolioConfig;
use crate::events::EventBus;
use crate::scheduler::TimerService;

/// Per-dispatch access to the shared services.
pub struct Cx<'a> {
    pub config: &'a PortfolioConfig,
    pub timers: &'a mut TimerService,
    pub bus: &'a mut EventBus,
    pub rng: &'a mut StdRng,
    pub platform: &'a mut dyn Platform,
}

impl Cx<'_> {
    pub fn emit(&mut self, event: ViewEvent) {
        self.platform.emit(&event);
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }
}
