//! Hidden extras: the Konami code, the triple-clicked logo, and the toast
//! used to announce them.

use heapless::Deque;
use log::info;
use rand::Rng;

use crate::app::events::ViewEvent;
use crate::controllers::Cx;
use crate::events::Key;
use crate::scheduler::{TimerId, TimerPurpose};

pub const KONAMI: [Key; 10] = [
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Char('b'),
    Key::Char('a'),
];

const KONAMI_MESSAGE: &str = "Konami Code activated! You found the easter egg!";

/// Sliding window over the last ten keys.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    window: Deque<Key, 10>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key.  Returns `true` (and clears the window) when the
    /// window spells the code.
    pub fn push(&mut self, key: Key) -> bool {
        if self.window.is_full() {
            self.window.pop_front();
        }
        let _ = self.window.push_back(key);
        if self.window.iter().eq(KONAMI.iter()) {
            self.window.clear();
            return true;
        }
        false
    }
}

/// One falling confetti square.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub color: String,
    pub left_percent: f64,
    pub rotation_deg: f64,
}

pub fn confetti<R: Rng>(count: usize, colors: &[String], rng: &mut R) -> Vec<ConfettiPiece> {
    if colors.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| ConfettiPiece {
            color: colors[rng.random_range(0..colors.len())].clone(),
            left_percent: rng.random::<f64>() * 100.0,
            rotation_deg: rng.random::<f64>() * 360.0,
        })
        .collect()
}

/// A single toast; a new one replaces the old.
#[derive(Default)]
pub struct Toast {
    timer: Option<TimerId>,
}

impl Toast {
    pub fn show(&mut self, message: &str, cx: &mut Cx<'_>) {
        cx.emit(ViewEvent::Notification(Some(message.to_owned())));
        cx.timers.cancel_slot(&mut self.timer);
        self.timer = cx
            .timers
            .once(TimerPurpose::Notification, cx.config.timing.notification_ms)
            .ok();
    }

    pub fn on_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.timer == Some(id) {
            self.timer = None;
            cx.emit(ViewEvent::Notification(None));
        }
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.timer);
    }
}

#[derive(Default)]
pub struct EasterEggs {
    konami: KonamiDetector,
    logo_clicks: u8,
    logo_window: Option<TimerId>,
    rainbow: Option<TimerId>,
    party: Option<TimerId>,
    confetti: Option<TimerId>,
}

impl EasterEggs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, key: Key, toast: &mut Toast, cx: &mut Cx<'_>) {
        if !self.konami.push(key) {
            return;
        }
        info!("Easter egg: Konami code");
        cx.emit(ViewEvent::RainbowMode(true));
        toast.show(KONAMI_MESSAGE, cx);
        cx.timers.cancel_slot(&mut self.rainbow);
        self.rainbow = cx
            .timers
            .once(TimerPurpose::RainbowEnd, cx.config.easter_eggs.rainbow_ms)
            .ok();
    }

    pub fn on_logo_click(&mut self, cx: &mut Cx<'_>) {
        self.logo_clicks += 1;
        if self.logo_clicks >= cx.config.easter_eggs.logo_clicks {
            self.logo_clicks = 0;
            cx.timers.cancel_slot(&mut self.logo_window);
            self.party(cx);
            return;
        }
        if self.logo_window.is_none() {
            self.logo_window = cx
                .timers
                .once(TimerPurpose::LogoClickWindow, cx.config.easter_eggs.logo_window_ms)
                .ok();
        }
    }

    fn party(&mut self, cx: &mut Cx<'_>) {
        info!("Easter egg: party mode");
        let eggs = &cx.config.easter_eggs;
        let pieces = confetti(eggs.confetti_count, &eggs.confetti_colors, &mut *cx.rng);
        cx.emit(ViewEvent::PartyMode(true));
        cx.emit(ViewEvent::ConfettiBurst(pieces));

        cx.timers.cancel_slot(&mut self.party);
        self.party = cx
            .timers
            .once(TimerPurpose::PartyEnd, cx.config.easter_eggs.party_ms)
            .ok();
        cx.timers.cancel_slot(&mut self.confetti);
        self.confetti = cx
            .timers
            .once(TimerPurpose::ConfettiExpire, cx.config.easter_eggs.confetti_ms)
            .ok();
    }

    /// Route one of this module's timers.  Returns `true` if it was ours.
    pub fn on_timer(&mut self, id: TimerId, purpose: TimerPurpose, cx: &mut Cx<'_>) -> bool {
        let (slot, event) = match purpose {
            TimerPurpose::RainbowEnd => (&mut self.rainbow, Some(ViewEvent::RainbowMode(false))),
            TimerPurpose::PartyEnd => (&mut self.party, Some(ViewEvent::PartyMode(false))),
            TimerPurpose::ConfettiExpire => (&mut self.confetti, Some(ViewEvent::ConfettiCleared)),
            TimerPurpose::LogoClickWindow => (&mut self.logo_window, None),
            _ => return false,
        };
        if *slot != Some(id) {
            return false;
        }
        *slot = None;
        match event {
            Some(event) => cx.emit(event),
            None => self.logo_clicks = 0,
        }
        true
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        for slot in [
            &mut self.logo_window,
            &mut self.rainbow,
            &mut self.party,
            &mut self.confetti,
        ] {
            cx.timers.cancel_slot(slot);
        }
    }
}
