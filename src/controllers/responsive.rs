//! Viewport tracking.  Resize bursts are debounced; only the settled size
//! is classified against the breakpoint.

use log::{debug, info};

use crate::app::events::ViewEvent;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{SelectionChange, SelectionValue, ViewportMode};

use super::Cx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledSize {
    pub width: u32,
    pub height: u32,
    pub mode: ViewportMode,
}

pub struct ResponsiveController {
    pending: Option<(u32, u32)>,
    debounce: Option<TimerId>,
}

impl Default for ResponsiveController {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponsiveController {
    pub fn new() -> Self {
        Self {
            pending: None,
            debounce: None,
        }
    }

    /// Record the latest size and restart the debounce window.
    pub fn on_resize(&mut self, width: u32, height: u32, cx: &mut Cx<'_>) {
        debug!("Responsive: resize to {width}x{height}");
        self.pending = Some((width, height));
        cx.timers.cancel_slot(&mut self.debounce);
        self.debounce = cx
            .timers
            .once(TimerPurpose::ResizeDebounce, cx.config.timing.resize_debounce_ms)
            .ok();
    }

    /// The debounce elapsed.  Returns the settled size and its mode.
    pub fn on_timer(&mut self, id: TimerId, cx: &Cx<'_>) -> Option<SettledSize> {
        if self.debounce != Some(id) {
            return None;
        }
        self.debounce = None;
        let (width, height) = self.pending.take()?;
        Some(SettledSize {
            width,
            height,
            mode: ViewportMode::from_width(width, cx.config.breakpoint_px),
        })
    }

    /// Store notification for `viewportMode`.  Returns whether decorative
    /// effects should run, or `None` when the mode did not change.
    pub fn on_selection_changed(&mut self, change: &SelectionChange, cx: &mut Cx<'_>) -> Option<bool> {
        let SelectionValue::Viewport(mode) = change.current else {
            return None;
        };
        if change.is_noop() {
            debug!("Responsive: still {:?}", mode);
            return None;
        }
        info!("Responsive: {:?} mode", mode);
        cx.emit(ViewEvent::PerformanceMode(mode.is_mobile()));
        Some(!mode.is_mobile())
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.debounce);
        self.pending = None;
    }
}
