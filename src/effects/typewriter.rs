//! Hero subtitle that types and deletes a rotating list of roles.

use crate::app::events::ViewEvent;
use crate::config::TypewriterConfig;
use crate::controllers::Cx;
use crate::scheduler::{TimerId, TimerPurpose};

/// Pure typing state.  Each [`step`](Self::step) renders one keystroke and
/// says how long to wait before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self::new()
    }
}

impl TypewriterState {
    pub fn new() -> Self {
        Self {
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Returns the visible text and the delay before the next step.
    pub fn step(&mut self, config: &TypewriterConfig) -> (String, u64) {
        let Some(role) = config.roles.get(self.role) else {
            return (String::new(), config.pause_ms);
        };
        let len = role.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = role.chars().take(self.chars).collect();

        let mut delay = if self.deleting { config.delete_ms } else { config.type_ms };
        if !self.deleting && self.chars == len {
            delay = config.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % config.roles.len();
        }
        (text, delay)
    }
}

pub struct Typewriter {
    state: TypewriterState,
    timer: Option<TimerId>,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Typewriter {
    pub fn new() -> Self {
        Self {
            state: TypewriterState::new(),
            timer: None,
        }
    }

    pub fn start(&mut self, cx: &mut Cx<'_>) {
        if cx.config.typewriter.roles.is_empty() {
            return;
        }
        self.arm(cx.config.typewriter.start_delay_ms, cx);
    }

    pub fn on_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.timer != Some(id) {
            return;
        }
        self.timer = None;
        let (text, delay) = self.state.step(&cx.config.typewriter);
        cx.emit(ViewEvent::TypewriterText(text));
        self.arm(delay, cx);
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.timer);
    }

    fn arm(&mut self, delay_ms: u64, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.timer);
        self.timer = cx.timers.once(TimerPurpose::Typewriter, delay_ms).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TypewriterConfig {
        TypewriterConfig {
            roles: vec!["ab".into(), "c".into()],
            ..TypewriterConfig::default()
        }
    }

    #[test]
    fn types_pauses_deletes_and_rotates() {
        let config = config();
        let mut state = TypewriterState::new();
        let steps: Vec<_> = (0..7).map(|_| state.step(&config)).collect();
        assert_eq!(
            steps,
            vec![
                ("a".to_owned(), 100),
                ("ab".to_owned(), 2000),
                ("a".to_owned(), 50),
                (String::new(), 50),
                ("c".to_owned(), 2000),
                (String::new(), 50),
                ("a".to_owned(), 100),
            ]
        );
    }
}
