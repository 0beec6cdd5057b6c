//! Event Bus: single dispatcher for every inbound signal.
//!
//! Events are produced by:
//! - The host page (pointer, keyboard, scroll, resize, lifecycle, form)
//! - The Timer Service (via [`TimerDelegate`](crate::scheduler::TimerDelegate))
//! - The network collaborator (submission settled)
//! - Controllers deferring a selection write to the next turn
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Host page   │────▶│              │     │                  │
//! │ Timers      │────▶│  Event Queue │────▶│  PortfolioApp    │
//! │ Network     │────▶│  (bounded)   │     │  routes to each  │
//! │ Deferred    │────▶│              │     │  subscriber      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! The bus owns the queue instead of a process-wide static, so every
//! app instance (and every test) gets its own.

use heapless::Deque;
use log::warn;

use crate::app::ports::TransportError;
use crate::controllers::contact::ContactForm;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{Field, SelectionValue};

/// Maximum number of pending events.
const EVENT_QUEUE_CAP: usize = 64;

/// Maximum number of (signal, subscriber) pairs.
const MAX_SUBSCRIPTIONS: usize = 48;

// ── Identities ────────────────────────────────────────────────

/// Every component that can subscribe to the bus or the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerId {
    Filter,
    Skills,
    Carousel,
    Theme,
    Modal,
    Responsive,
    Contact,
    Scroll,
    Preloader,
    Effects,
}

/// Coarse signal class used for subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Pointer,
    Keyboard,
    Scroll,
    Resize,
    Lifecycle,
    Form,
    Network,
    Timer,
    Deferred,
}

/// Page regions that react to hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The testimonial carousel (hover pauses auto-advance).
    Carousel,
    /// Links, buttons and cards (hover grows the cursor).
    Interactive,
}

/// Click targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Project filter button carrying its `data-filter` value.
    FilterButton(String),
    /// Skill category tab carrying its `data-category` value.
    SkillTab(String),
    CarouselNext,
    CarouselPrevious,
    CarouselDot(usize),
    ThemeToggle,
    DemoLink(String),
    Certificate(String),
    ModalClose,
    ModalBackdrop,
    BackToTop,
    BrandLogo,
    /// In-page `#section` link.  `top` is the target's offset from the top
    /// of the document, `None` when nothing matches `href`.
    Anchor { href: String, top: Option<u32> },
    /// A skill card (tapping toggles its info panel on mobile).
    SkillCard(String),
}

/// Keyboard keys the page cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` / `key` string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Escape" => Some(Self::Escape),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            other => {
                let letter = other.strip_prefix("Key").unwrap_or(other);
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

/// A selection write postponed to the next pump turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub field: Field,
    pub value: SelectionValue,
}

// ── Events ────────────────────────────────────────────────────

/// Inbound events.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerMove { x: f64, y: f64 },
    PointerEnter(Region),
    PointerLeave(Region),
    Click(Target),
    KeyDown(Key),
    Scroll {
        offset: f64,
        viewport_height: f64,
        document_height: f64,
    },
    Resize { width: u32, height: u32 },
    /// An item scrolled into view (intersection observer).
    ItemRevealed(String),
    /// A deferred `img[data-src]` scrolled into view.
    ImageRevealed(String),
    /// DOM parsed; widgets may initialise.
    DocumentReady,
    /// All page resources loaded.
    WindowLoaded,
    FormSubmit(ContactForm),
    SubmissionSettled(Result<(), TransportError>),
    TimerFired { id: TimerId, purpose: TimerPurpose },
    Deferred(SelectionRequest),
}

impl Event {
    pub fn signal(&self) -> Signal {
        match self {
            Self::PointerMove { .. } | Self::PointerEnter(_) | Self::PointerLeave(_) | Self::Click(_) => {
                Signal::Pointer
            }
            Self::KeyDown(_) => Signal::Keyboard,
            Self::Scroll { .. } | Self::ItemRevealed(_) | Self::ImageRevealed(_) => Signal::Scroll,
            Self::Resize { .. } => Signal::Resize,
            Self::DocumentReady | Self::WindowLoaded => Signal::Lifecycle,
            Self::FormSubmit(_) => Signal::Form,
            Self::SubmissionSettled(_) => Signal::Network,
            Self::TimerFired { .. } => Signal::Timer,
            Self::Deferred(_) => Signal::Deferred,
        }
    }
}

// ── Bus ───────────────────────────────────────────────────────

pub struct EventBus {
    queue: Deque<Event, EVENT_QUEUE_CAP>,
    subscriptions: heapless::Vec<(Signal, ControllerId), MAX_SUBSCRIPTIONS>,
    dropped: u32,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
            subscriptions: heapless::Vec::new(),
            dropped: 0,
        }
    }

    /// Register `id` for `signal`.  Duplicate registrations are ignored.
    /// Returns `false` if the table is full.
    pub fn subscribe(&mut self, signal: Signal, id: ControllerId) -> bool {
        if self.subscriptions.contains(&(signal, id)) {
            return true;
        }
        if self.subscriptions.push((signal, id)).is_err() {
            warn!("EventBus: subscription table full, {:?}/{:?} dropped", signal, id);
            return false;
        }
        true
    }

    /// Subscribers of `signal`, in subscription order.
    pub fn subscribers(&self, signal: Signal) -> impl Iterator<Item = ControllerId> + '_ {
        self.subscriptions
            .iter()
            .filter(move |(s, _)| *s == signal)
            .map(|(_, id)| *id)
    }

    /// Push an event into the queue.
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        match self.queue.push_back(event) {
            Ok(()) => true,
            Err(event) => {
                self.dropped = self.dropped.saturating_add(1);
                warn!("EventBus: queue full, dropped {:?}", event.signal());
                false
            }
        }
    }

    /// Pop the next event (FIFO).
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Events dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
