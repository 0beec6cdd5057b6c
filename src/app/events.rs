//! Outbound view events.
//!
//! Controllers and effects emit these through the
//! [`ViewSink`](super::ports::ViewSink) port.  Adapters on the other side
//! decide what to do with them (a browser shell patches the DOM).

use crate::controllers::modal::ModalView;
use crate::effects::easter_eggs::ConfettiPiece;
use crate::store::{Filter, StatKey, Theme};

/// Structured DOM updates emitted by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    // ── Project filter ────────────────────────────────────────
    /// Button carrying this filter became the active one.
    FilterActivated(Filter),
    /// Item entered layout and fades in.
    ItemShown(String),
    /// Item started its fade-out; still in layout.
    ItemFading(String),
    /// Fade-out finished; item left layout.
    ItemRemoved(String),

    // ── Skills ────────────────────────────────────────────────
    SkillTabActivated(Filter),
    /// One frame of an animated statistic.
    StatDisplayed { key: StatKey, text: String },
    SkillBarFilled { id: String, width: f64 },
    SkillBarGlow { id: String, on: bool },
    /// Mobile tap opened or closed a skill card's info panel.
    SkillInfoToggled { id: String, open: bool },

    // ── Testimonials ──────────────────────────────────────────
    TestimonialShown(usize),

    // ── Theme ─────────────────────────────────────────────────
    ThemeApplied(Theme),
    /// Toggle button press animation (scaled down while `true`).
    ThemeTogglePressed(bool),

    // ── Modal ─────────────────────────────────────────────────
    ModalOpened(ModalView),
    ModalClosed,

    // ── Responsive ────────────────────────────────────────────
    PerformanceMode(bool),

    // ── Contact form ──────────────────────────────────────────
    FormSending,
    FormReset,
    FormReady,
    SuccessMessage(bool),

    // ── Scroll ────────────────────────────────────────────────
    /// Page scroll progress, 0.0–1.0.
    ScrollProgress(f64),
    NavbarScrolled(bool),
    BackToTopVisible(bool),
    /// Swap a lazy image's `data-src` into `src`.
    LoadImage(String),

    // ── Preloader ─────────────────────────────────────────────
    /// Progress bar width in percent.
    PreloaderProgress(f64),
    PreloaderHidden,
    PreloaderRemoved,

    // ── Decorative effects ────────────────────────────────────
    CursorMoved { x: f64, y: f64 },
    FollowerMoved { x: f64, y: f64 },
    CursorVisible(bool),
    CursorHover(bool),
    ParticlesVisible(bool),
    TypewriterText(String),
    /// Toast shown (`Some`) or dismissed (`None`).
    Notification(Option<String>),
    RainbowMode(bool),
    PartyMode(bool),
    ConfettiBurst(Vec<ConfettiPiece>),
    ConfettiCleared,
}
