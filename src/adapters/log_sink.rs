//! Log-based view sink adapter.
//!
//! Implements [`ViewSink`] by writing every view update as one structured
//! log line.  Useful for headless runs and as a trace alongside a real DOM
//! adapter.  Per-frame pointer noise goes to `debug!`.

use log::{debug, info};

use crate::app::events::ViewEvent;
use crate::app::ports::ViewSink;

/// Adapter that logs every [`ViewEvent`].
#[derive(Debug, Default)]
pub struct LogViewSink {
    emitted: u64,
}

impl LogViewSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

impl ViewSink for LogViewSink {
    fn emit(&mut self, event: &ViewEvent) {
        self.emitted += 1;
        match event {
            ViewEvent::FilterActivated(f) => info!("FILTER | active={}", f),
            ViewEvent::ItemShown(id) => info!("ITEM | id={} state=shown", id),
            ViewEvent::ItemFading(id) => info!("ITEM | id={} state=fading", id),
            ViewEvent::ItemRemoved(id) => info!("ITEM | id={} state=removed", id),
            ViewEvent::SkillTabActivated(f) => info!("SKILLS | tab={}", f),
            ViewEvent::StatDisplayed { key, text } => info!("STAT | key={} text={}", key, text),
            ViewEvent::SkillBarFilled { id, width } => {
                info!("SKILLBAR | id={} width={:.0}%", id, width)
            }
            ViewEvent::SkillBarGlow { id, on } => info!("SKILLBAR | id={} glow={}", id, on_off(*on)),
            ViewEvent::SkillInfoToggled { id, open } => {
                info!("SKILLCARD | id={} info={}", id, if *open { "open" } else { "closed" })
            }
            ViewEvent::TestimonialShown(i) => info!("CAROUSEL | index={}", i),
            ViewEvent::ThemeApplied(t) => info!("THEME | applied={}", t),
            ViewEvent::ThemeTogglePressed(p) => debug!("THEME | pressed={}", p),
            ViewEvent::ModalOpened(view) => info!(
                "MODAL | open kind={} title={:?} tags={}",
                view.kind,
                view.title,
                view.tags.join(",")
            ),
            ViewEvent::ModalClosed => info!("MODAL | closed"),
            ViewEvent::PerformanceMode(on) => info!("MODE | performance={}", on_off(*on)),
            ViewEvent::FormSending => info!("FORM | state=sending"),
            ViewEvent::FormReset => info!("FORM | reset"),
            ViewEvent::FormReady => info!("FORM | state=ready"),
            ViewEvent::SuccessMessage(shown) => info!("FORM | success_message={}", on_off(*shown)),
            ViewEvent::ScrollProgress(p) => debug!("SCROLL | progress={:.3}", p),
            ViewEvent::NavbarScrolled(s) => info!("SCROLL | navbar_scrolled={}", s),
            ViewEvent::BackToTopVisible(v) => info!("SCROLL | back_to_top={}", v),
            ViewEvent::LoadImage(id) => debug!("IMAGE | id={} state=loading", id),
            ViewEvent::PreloaderProgress(p) => info!("PRELOADER | progress={:.1}%", p),
            ViewEvent::PreloaderHidden => info!("PRELOADER | hidden"),
            ViewEvent::PreloaderRemoved => info!("PRELOADER | removed"),
            ViewEvent::CursorMoved { x, y } => debug!("CURSOR | x={:.0} y={:.0}", x, y),
            ViewEvent::FollowerMoved { x, y } => debug!("FOLLOWER | x={:.1} y={:.1}", x, y),
            ViewEvent::CursorVisible(v) => info!("CURSOR | visible={}", v),
            ViewEvent::CursorHover(h) => debug!("CURSOR | hover={}", h),
            ViewEvent::ParticlesVisible(v) => info!("PARTICLES | visible={}", v),
            ViewEvent::TypewriterText(text) => debug!("TYPEWRITER | text={:?}", text),
            ViewEvent::Notification(Some(msg)) => info!("TOAST | show={:?}", msg),
            ViewEvent::Notification(None) => info!("TOAST | dismissed"),
            ViewEvent::RainbowMode(on) => info!("EGG | rainbow={}", on_off(*on)),
            ViewEvent::PartyMode(on) => info!("EGG | party={}", on_off(*on)),
            ViewEvent::ConfettiBurst(pieces) => info!("EGG | confetti={}", pieces.len()),
            ViewEvent::ConfettiCleared => info!("EGG | confetti cleared"),
        }
    }
}
