//! Dark/light theme: read once at boot, persisted on every change.

use log::{info, warn};

use crate::app::events::ViewEvent;
use crate::app::ports::StoragePort;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{SelectionChange, SelectionValue, Theme};

use super::Cx;

/// Read the stored preference.  Missing, unreadable or unknown values
/// fall back to dark.
pub fn load_preference<S: StoragePort + ?Sized>(storage: &S, key: &str) -> Theme {
    match storage.get(key) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
            warn!("Theme: unknown stored value '{raw}', using dark");
            Theme::Dark
        }),
        Ok(None) => Theme::Dark,
        Err(e) => {
            warn!("Theme: storage unavailable ({e}), using dark");
            Theme::Dark
        }
    }
}

#[derive(Default)]
pub struct ThemeController {
    pulse_timer: Option<TimerId>,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store notification for `theme`.  Returns the applied theme so the
    /// app can retint decorative effects.
    pub fn on_selection_changed(&mut self, change: &SelectionChange, cx: &mut Cx<'_>) -> Option<Theme> {
        let SelectionValue::Theme(theme) = change.current else {
            return None;
        };
        if let Err(e) = cx.platform.set(&cx.config.theme_storage_key, theme.as_str()) {
            warn!("Theme: could not persist '{}': {e}", theme.as_str());
        }
        info!("Theme: applied {}", theme.as_str());
        cx.emit(ViewEvent::ThemeApplied(theme));

        cx.emit(ViewEvent::ThemeTogglePressed(true));
        cx.timers.cancel_slot(&mut self.pulse_timer);
        self.pulse_timer = cx
            .timers
            .once(TimerPurpose::ThemePulse, cx.config.timing.theme_pulse_ms)
            .ok();
        Some(theme)
    }

    pub fn on_pulse_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.pulse_timer != Some(id) {
            return;
        }
        self.pulse_timer = None;
        cx.emit(ViewEvent::ThemeTogglePressed(false));
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.pulse_timer);
    }
}
