//! Shared mutable context threaded through every preloader handler.
//!
//! Handlers read the progress and tuning values and write commands; the
//! preloader controller turns the commands into timer and sink calls.

use crate::app::events::ViewEvent;
use crate::config::PreloaderConfig;

/// What to do with the repeating progress ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerCommand {
    #[default]
    Keep,
    Arm,
    Cancel,
}

/// Requests written by handlers, consumed after each FSM call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreloaderCommands {
    pub progress_timer: TimerCommand,
    /// Arm the phase timer with this delay (replacing any live one).
    pub phase_timer: Option<u64>,
    pub emits: Vec<ViewEvent>,
}

impl PreloaderCommands {
    /// Hand the pending commands over and reset.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

pub struct PreloaderContext {
    /// Bar fill, 0–100.
    pub progress: f64,
    pub hide_delay_ms: u64,
    pub removal_ms: u64,
    pub commands: PreloaderCommands,
}

impl PreloaderContext {
    pub fn new(config: &PreloaderConfig) -> Self {
        Self {
            progress: 0.0,
            hide_delay_ms: config.hide_delay_ms,
            removal_ms: config.removal_ms,
            commands: PreloaderCommands::default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}
