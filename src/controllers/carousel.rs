//! Testimonial carousel: one visible slide, wrap-around navigation and a
//! 5 s auto-advance that pauses while the pointer is over the carousel.

use log::{debug, info};

use crate::app::events::ViewEvent;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{SelectionChange, SelectionValue};

use super::Cx;

/// Index after `current`, wrapping to 0.
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (current + 1) % count }
}

/// Index before `current`, wrapping to the last slide.
pub fn previous_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + count - 1) % count
    }
}

pub struct CarouselController {
    count: usize,
    timer: Option<TimerId>,
    paused: bool,
}

impl CarouselController {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            timer: None,
            paused: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Show the current slide and start auto-advance.
    pub fn start(&mut self, index: usize, cx: &mut Cx<'_>) {
        if self.count == 0 {
            return;
        }
        cx.emit(ViewEvent::TestimonialShown(index));
        self.arm(cx);
    }

    /// Store notification for `testimonialIndex`.
    pub fn on_selection_changed(&mut self, change: &SelectionChange, cx: &mut Cx<'_>) {
        if let SelectionValue::Index(i) = change.current {
            cx.emit(ViewEvent::TestimonialShown(i));
        }
    }

    /// Auto-advance fired.  Returns the index to select next.
    pub fn on_timer(&mut self, id: TimerId, current: usize) -> Option<usize> {
        if self.timer != Some(id) || self.paused {
            debug!("Carousel: ignoring stale advance {:?}", id);
            return None;
        }
        Some(next_index(current, self.count))
    }

    pub fn pause(&mut self, cx: &mut Cx<'_>) {
        if self.paused {
            return;
        }
        self.paused = true;
        cx.timers.cancel_slot(&mut self.timer);
        info!("Carousel: paused");
    }

    pub fn resume(&mut self, cx: &mut Cx<'_>) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.arm(cx);
        info!("Carousel: resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.timer);
    }

    /// Exactly one auto-advance task may be live.
    fn arm(&mut self, cx: &mut Cx<'_>) {
        if self.count == 0 {
            return;
        }
        cx.timers.cancel_slot(&mut self.timer);
        self.timer = cx
            .timers
            .every(TimerPurpose::CarouselAdvance, cx.config.timing.carousel_interval_ms)
            .ok();
    }
}
