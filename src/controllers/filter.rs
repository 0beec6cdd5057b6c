//! Project filter buttons.
//!
//! Newly visible cards fade in at once; newly hidden cards fade out and
//! are only removed from layout once their own fade deadline passes.
//! Each card keeps the deadline set when it was first hidden, and one
//! timer is armed for the earliest of them.

use log::{debug, warn};

use crate::app::events::ViewEvent;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{SelectionChange, SelectionValue, ViewStateStore};

use super::Cx;

/// Cards waiting for their fade-out to finish, each with its removal
/// deadline, plus the single timer armed for the earliest deadline.
/// Shared by the project grid and the skill grid.
#[derive(Debug)]
pub struct FadeTracker {
    purpose: TimerPurpose,
    /// `(item index, deadline in ms)`.
    pending: Vec<(usize, u64)>,
    timer: Option<TimerId>,
}

impl FadeTracker {
    pub fn new(purpose: TimerPurpose) -> Self {
        Self {
            purpose,
            pending: Vec::new(),
            timer: None,
        }
    }

    /// Emit fade-in/fade-out for one change and arm the timer for the
    /// earliest pending deadline.
    pub fn begin(&mut self, change: &SelectionChange, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let deadline = cx.now_ms().saturating_add(cx.config.timing.fade_out_ms);
        for &idx in &change.shown {
            self.pending.retain(|(p, _)| *p != idx);
            if let Some(item) = store.item(idx) {
                cx.emit(ViewEvent::ItemShown(item.id.clone()));
            }
        }
        for &idx in &change.hidden {
            // Already fading: keep the original deadline.
            if !self.pending.iter().any(|(p, _)| *p == idx) {
                self.pending.push((idx, deadline));
            }
            if let Some(item) = store.item(idx) {
                cx.emit(ViewEvent::ItemFading(item.id.clone()));
            }
        }
        self.rearm(store, cx);
    }

    /// Handle a fired fade timer.  Stale ids are ignored.
    pub fn on_timer(&mut self, id: TimerId, store: &ViewStateStore, cx: &mut Cx<'_>) -> bool {
        if self.timer != Some(id) {
            debug!("Fade: ignoring stale timer {:?}", id);
            return false;
        }
        self.timer = None;
        self.finish(cx.now_ms(), store, cx);
        self.rearm(store, cx);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.timer);
        self.pending.clear();
    }

    fn rearm(&mut self, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let Some(next) = self.pending.iter().map(|(_, d)| *d).min() else {
            cx.timers.cancel_slot(&mut self.timer);
            return;
        };
        if let Some(live) = self.timer {
            if cx.timers.deadline_of(live) == Some(next) {
                return;
            }
        }
        cx.timers.cancel_slot(&mut self.timer);
        match cx.timers.once(self.purpose, next.saturating_sub(cx.now_ms())) {
            Ok(id) => self.timer = Some(id),
            Err(e) => {
                // Without a timer the fade never completes; remove now.
                warn!("Fade: {e}, removing {} cards immediately", self.pending.len());
                self.finish(u64::MAX, store, cx);
            }
        }
    }

    /// Remove every pending card whose deadline is at or before `now`.
    fn finish(&mut self, now: u64, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, d)| *d <= now);
        self.pending = waiting;
        for (idx, _) in due {
            // A card that came back during the fade stays.
            if store.is_visible(idx) {
                continue;
            }
            if let Some(item) = store.item(idx) {
                cx.emit(ViewEvent::ItemRemoved(item.id.clone()));
            }
        }
    }
}

pub struct FilterController {
    fade: FadeTracker,
    refresh_timer: Option<TimerId>,
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterController {
    pub fn new() -> Self {
        Self {
            fade: FadeTracker::new(TimerPurpose::FilterFade),
            refresh_timer: None,
        }
    }

    /// Store notification for `projectFilter`.
    pub fn on_selection_changed(
        &mut self,
        change: &SelectionChange,
        store: &ViewStateStore,
        cx: &mut Cx<'_>,
    ) {
        let SelectionValue::Filter(filter) = &change.current else {
            return;
        };
        cx.emit(ViewEvent::FilterActivated(filter.clone()));
        self.fade.begin(change, store, cx);

        cx.timers.cancel_slot(&mut self.refresh_timer);
        self.refresh_timer = cx
            .timers
            .once(TimerPurpose::RevealRefresh, cx.config.timing.reveal_refresh_ms)
            .ok();
    }

    pub fn on_fade_timer(&mut self, id: TimerId, store: &ViewStateStore, cx: &mut Cx<'_>) {
        self.fade.on_timer(id, store, cx);
    }

    /// Returns `true` if the fired refresh timer is the live one.
    pub fn on_refresh_timer(&mut self, id: TimerId) -> bool {
        if self.refresh_timer != Some(id) {
            return false;
        }
        self.refresh_timer = None;
        true
    }

    pub fn fade_pending(&self) -> bool {
        self.fade.is_pending()
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        self.fade.teardown(cx);
        cx.timers.cancel_slot(&mut self.refresh_timer);
    }
}
