//! Easing and number interpolation for animated counters.
//!
//! Output is a pure function of elapsed time, so a counter driven by the
//! logical clock renders the same frames on every run.

/// Cubic ease-out: `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Exponential follow: move `current` toward `target` by `rate` of the gap.
pub fn approach(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}

/// Animates one number from `start` to `end` over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTween {
    start: f64,
    end: f64,
    started_at_ms: u64,
    duration_ms: u64,
}

impl NumberTween {
    pub fn new(start: f64, end: f64, started_at_ms: u64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            started_at_ms,
            duration_ms,
        }
    }

    /// `value(t) = start + (end - start) * ease_out_cubic(t)`.
    /// Returns exactly `end` once the window has elapsed.
    pub fn value_at(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.end;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms) as f64;
        let t = elapsed / self.duration_ms as f64;
        self.start + (self.end - self.start) * ease_out_cubic(t)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }

    pub fn end(&self) -> f64 {
        self.end
    }
}

/// Render a counter value: one decimal for fractional metrics, otherwise
/// rounded to an integer.
pub fn format_counter(value: f64, fractional: bool) -> String {
    if fractional {
        format!("{value:.1}")
    } else {
        format!("{}", value.round() as i64)
    }
}
