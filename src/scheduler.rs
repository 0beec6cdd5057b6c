//! Timer Service: named, cancellable tasks on a logical clock.
//!
//! Replaces ad hoc `setTimeout`/`setInterval` chains.  Time only moves
//! when the host calls [`TimerService::advance`] (or the app's stepping
//! loop), so tests can walk through any delay deterministically.  The
//! service notifies a [`TimerDelegate`] when tasks fire; the app
//! implements the delegate to push `Event::TimerFired` onto the bus.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  schedule(purpose, OneShot | Repeating) ──▶ TimerId         │
//! │                                                            │
//! │  advance(ms) ──▶ fire due tasks in deadline order          │
//! │                  (ties broken by arming order)             │
//! │                        │                                   │
//! │                        ▼                                   │
//! │               TimerDelegate::on_timer_fired(id, purpose)   │
//! └────────────────────────────────────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════
//  Task types
// ═══════════════════════════════════════════════════════════════

/// What a timer is for.  Carried back on fire so the owning controller
/// can recognise its own task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    PreloaderProgress,
    PreloaderPhase,
    FilterFade,
    SkillFade,
    RevealRefresh,
    CounterFrame,
    SkillBarFill(usize),
    SkillBarGlow(usize),
    CarouselAdvance,
    ResizeDebounce,
    ThemePulse,
    Typewriter,
    SuccessMessage,
    Notification,
    RainbowEnd,
    PartyEnd,
    ConfettiExpire,
    LogoClickWindow,
}

impl TimerPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreloaderProgress => "preloader-progress",
            Self::PreloaderPhase => "preloader-phase",
            Self::FilterFade => "filter-fade",
            Self::SkillFade => "skill-fade",
            Self::RevealRefresh => "reveal-refresh",
            Self::CounterFrame => "counter-frame",
            Self::SkillBarFill(_) => "skill-bar-fill",
            Self::SkillBarGlow(_) => "skill-bar-glow",
            Self::CarouselAdvance => "carousel-advance",
            Self::ResizeDebounce => "resize-debounce",
            Self::ThemePulse => "theme-pulse",
            Self::Typewriter => "typewriter",
            Self::SuccessMessage => "success-message",
            Self::Notification => "notification",
            Self::RainbowEnd => "rainbow-end",
            Self::PartyEnd => "party-end",
            Self::ConfettiExpire => "confetti-expire",
            Self::LogoClickWindow => "logo-click-window",
        }
    }
}

/// How a task fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fire once after `delay_ms`, then free the slot.
    OneShot { delay_ms: u64 },
    /// Fire every `interval_ms` until cancelled.
    Repeating { interval_ms: u64 },
}

/// Handle to a scheduled task.  The generation makes stale handles inert:
/// cancelling a handle whose slot was recycled does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    slot: u8,
    generation: u32,
}

/// Callback invoked when a task fires.
pub trait TimerDelegate {
    fn on_timer_fired(&mut self, id: TimerId, purpose: TimerPurpose);
}

// ═══════════════════════════════════════════════════════════════
//  Timer service
// ═══════════════════════════════════════════════════════════════

/// Maximum number of live tasks.
const MAX_TIMERS: usize = 64;

/// Internal bookkeeping for a live task.
#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    id: TimerId,
    purpose: TimerPurpose,
    kind: TimerKind,
    deadline_ms: u64,
    /// Arming sequence number (tie-breaker for equal deadlines).
    seq: u64,
}

pub struct TimerService {
    slots: [Option<TimerEntry>; MAX_TIMERS],
    generations: [u32; MAX_TIMERS],
    now_ms: u64,
    next_seq: u64,
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService {
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_TIMERS],
            generations: [0; MAX_TIMERS],
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Arm a task.  Fails with [`Error::TimersExhausted`] if every slot is
    /// live.
    pub fn schedule(&mut self, purpose: TimerPurpose, kind: TimerKind) -> Result<TimerId> {
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            warn!("Timers: no free slot for '{}'", purpose.label());
            return Err(Error::TimersExhausted);
        };

        self.generations[slot] = self.generations[slot].wrapping_add(1);
        let id = TimerId {
            slot: slot as u8,
            generation: self.generations[slot],
        };
        let delay = match kind {
            TimerKind::OneShot { delay_ms } => delay_ms,
            TimerKind::Repeating { interval_ms } => interval_ms.max(1),
        };
        let seq = self.bump_seq();
        self.slots[slot] = Some(TimerEntry {
            id,
            purpose,
            kind,
            deadline_ms: self.now_ms + delay,
            seq,
        });
        debug!(
            "Timers: armed '{}' in slot {} ({:?}, due at {}ms)",
            purpose.label(),
            slot,
            kind,
            self.now_ms + delay
        );
        Ok(id)
    }

    /// Convenience: arm a one-shot.
    pub fn once(&mut self, purpose: TimerPurpose, delay_ms: u64) -> Result<TimerId> {
        self.schedule(purpose, TimerKind::OneShot { delay_ms })
    }

    /// Convenience: arm a repeating task.
    pub fn every(&mut self, purpose: TimerPurpose, interval_ms: u64) -> Result<TimerId> {
        self.schedule(purpose, TimerKind::Repeating { interval_ms })
    }

    /// Cancel a task.  Returns `true` if it was live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let slot = id.slot as usize;
        match self.slots.get(slot) {
            Some(Some(entry)) if entry.id == id => {
                debug!("Timers: cancelled '{}' in slot {}", entry.purpose.label(), slot);
                self.slots[slot] = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel through an `Option` handle and clear it.
    pub fn cancel_slot(&mut self, handle: &mut Option<TimerId>) -> bool {
        handle.take().is_some_and(|id| self.cancel(id))
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        matches!(self.slots.get(id.slot as usize), Some(Some(e)) if e.id == id)
    }

    /// Deadline of a live task.
    pub fn deadline_of(&self, id: TimerId) -> Option<u64> {
        match self.slots.get(id.slot as usize) {
            Some(Some(e)) if e.id == id => Some(e.deadline_ms),
            _ => None,
        }
    }

    /// Number of live tasks.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of live tasks with the given purpose.
    pub fn live_with(&self, purpose: TimerPurpose) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|e| e.purpose == purpose)
            .count()
    }

    /// Logical time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots.iter().flatten().map(|e| e.deadline_ms).min()
    }

    /// Move time forward by `elapsed_ms`, firing every task that falls due
    /// on the way.  Tasks armed by the delegate during this call only fire
    /// if the caller steps again; see [`step`](Self::step).
    pub fn advance(&mut self, elapsed_ms: u64, delegate: &mut dyn TimerDelegate) {
        let target = self.now_ms + elapsed_ms;
        while self.step(target, delegate) {}
        self.now_ms = target;
    }

    /// Fire every task due at the earliest deadline not after `limit_ms`,
    /// moving the clock to that deadline.  Returns `false` when nothing is
    /// due.
    pub fn step(&mut self, limit_ms: u64, delegate: &mut dyn TimerDelegate) -> bool {
        let Some(deadline) = self.next_deadline().filter(|d| *d <= limit_ms) else {
            return false;
        };
        self.now_ms = self.now_ms.max(deadline);

        let mut due: heapless::Vec<TimerEntry, MAX_TIMERS> = self
            .slots
            .iter()
            .flatten()
            .filter(|e| e.deadline_ms == deadline)
            .copied()
            .collect();
        due.sort_unstable_by_key(|e| e.seq);

        for entry in &due {
            let slot = entry.id.slot as usize;
            match entry.kind {
                TimerKind::OneShot { .. } => self.slots[slot] = None,
                TimerKind::Repeating { interval_ms } => {
                    let seq = self.bump_seq();
                    if let Some(live) = self.slots[slot].as_mut() {
                        live.deadline_ms = deadline + interval_ms.max(1);
                        live.seq = seq;
                    }
                }
            }
            info!("Timers: '{}' fired at {}ms", entry.purpose.label(), deadline);
            delegate.on_timer_fired(entry.id, entry.purpose);
        }
        true
    }

    /// Jump the clock to `at_ms` without firing anything (used after a
    /// stepping loop has drained every due task).
    pub fn settle(&mut self, at_ms: u64) {
        self.now_ms = self.now_ms.max(at_ms);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
