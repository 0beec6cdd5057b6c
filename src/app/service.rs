//! Application service: the view-state coordinator.
//!
//! [`PortfolioApp`] owns the store, the event bus, the timer service, every
//! widget controller and the decorative effects.  It exposes a
//! browser-agnostic API: the host feeds it [`Event`]s and logical time,
//! and everything the page should do comes back out through the port
//! traits of a [`Platform`] injected at each call site.
//!
//! ```text
//!   Event ──▶ ┌──────────────────────────────┐ ──▶ ViewSink
//!             │         PortfolioApp          │
//!  advance ──▶│ Bus · Store · Timers · Ctrls  │ ──▶ Storage / Submission
//!             └──────────────────────────────┘      Mailer / Page
//! ```
//!
//! One pump turn pops inbound events in FIFO order and delivers each to the
//! controllers subscribed to its signal.  Store writes made during a turn
//! notify subscribers synchronously; a write that has to happen from inside
//! a notification goes back onto the bus as [`Event::Deferred`].

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::PortfolioConfig;
use crate::controllers::carousel::{self, CarouselController};
use crate::controllers::contact::ContactController;
use crate::controllers::filter::FilterController;
use crate::controllers::modal::{ModalController, ModalState};
use crate::controllers::preloader::PreloaderController;
use crate::controllers::responsive::ResponsiveController;
use crate::controllers::scroll::ScrollController;
use crate::controllers::skills::SkillController;
use crate::controllers::theme::{self, ThemeController};
use crate::controllers::Cx;
use crate::effects::Effects;
use crate::error::{Error, Result};
use crate::events::{ControllerId, Event, EventBus, Region, SelectionRequest, Signal, Target};
use crate::fsm::PhaseId;
use crate::scheduler::{TimerDelegate, TimerId, TimerPurpose, TimerService};
use crate::store::{
    AggregateStats, Document, Field, FieldSet, Filter, ItemKind, Selection, SelectionChange,
    SelectionObserver, SelectionValue, ViewStateStore, ViewportMode,
};

use super::commands::UiCommand;
use super::events::ViewEvent;
use super::ports::{Collaborator, Platform, RendererPort, RevealPort};

/// Bus subscriptions installed at boot.  Timer and deferred-write events
/// are routed by the app itself.
const ROUTES: &[(Signal, ControllerId)] = &[
    (Signal::Lifecycle, ControllerId::Filter),
    (Signal::Pointer, ControllerId::Filter),
    (Signal::Pointer, ControllerId::Skills),
    (Signal::Scroll, ControllerId::Skills),
    (Signal::Pointer, ControllerId::Carousel),
    (Signal::Pointer, ControllerId::Theme),
    (Signal::Pointer, ControllerId::Modal),
    (Signal::Keyboard, ControllerId::Modal),
    (Signal::Resize, ControllerId::Responsive),
    (Signal::Form, ControllerId::Contact),
    (Signal::Network, ControllerId::Contact),
    (Signal::Scroll, ControllerId::Scroll),
    (Signal::Pointer, ControllerId::Scroll),
    (Signal::Lifecycle, ControllerId::Preloader),
    (Signal::Pointer, ControllerId::Effects),
    (Signal::Keyboard, ControllerId::Effects),
    (Signal::Lifecycle, ControllerId::Effects),
];

/// Store subscriptions installed at boot.
const FIELD_ROUTES: &[(ControllerId, Field)] = &[
    (ControllerId::Filter, Field::ProjectFilter),
    (ControllerId::Skills, Field::SkillCategory),
    (ControllerId::Carousel, Field::TestimonialIndex),
    (ControllerId::Theme, Field::Theme),
    (ControllerId::Responsive, Field::ViewportMode),
];

/// Optional page libraries detected by the host.
#[derive(Default)]
pub struct Collaborators {
    pub renderer: Option<Box<dyn RendererPort>>,
    pub reveal: Option<Box<dyn RevealPort>>,
}

/// Scroll-reveal collaborator, initialised once on `DocumentReady`.
enum Reveal {
    Absent,
    Pending(Box<dyn RevealPort>),
    Ready(Box<dyn RevealPort>),
}

struct Controllers {
    filter: FilterController,
    skills: SkillController,
    carousel: CarouselController,
    theme: ThemeController,
    modal: ModalController,
    responsive: ResponsiveController,
    contact: ContactController,
    scroll: ScrollController,
    preloader: Option<PreloaderController>,
}

// ───────────────────────────────────────────────────────────────
// PortfolioApp
// ───────────────────────────────────────────────────────────────

pub struct PortfolioApp {
    config: PortfolioConfig,
    store: ViewStateStore,
    bus: EventBus,
    timers: TimerService,
    rng: StdRng,
    ctl: Controllers,
    effects: Effects,
    reveal: Reveal,
}

impl PortfolioApp {
    /// Validate the config, build the store from the harvested `document`
    /// and boot every enabled widget.
    ///
    /// The persisted theme is read from `platform` and the viewport mode is
    /// derived from `viewport` before anything is painted.
    pub fn new(
        config: PortfolioConfig,
        document: Document,
        viewport: (u32, u32),
        collaborators: Collaborators,
        platform: &mut impl Platform,
    ) -> Result<Self> {
        config.validate()?;

        let theme = theme::load_preference(&*platform, &config.theme_storage_key);
        let mode = ViewportMode::from_width(viewport.0, config.breakpoint_px);

        let document = if config.features.testimonials {
            document
        } else {
            Document::new(
                document
                    .items
                    .into_iter()
                    .filter(|i| i.kind != ItemKind::Testimonial)
                    .collect(),
            )
        };

        let mut store = ViewStateStore::new(document, Selection::new(theme, mode));
        for (id, field) in FIELD_ROUTES {
            store.subscribe(*id, FieldSet::single(*field));
        }

        let mut bus = EventBus::new();
        for (signal, id) in ROUTES {
            bus.subscribe(*signal, *id);
        }

        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let effects = Effects::new(
            &config,
            collaborators.renderer,
            theme,
            viewport,
            !mode.is_mobile(),
            &mut rng,
        );

        let ctl = Controllers {
            filter: FilterController::new(),
            skills: SkillController::new(&store),
            carousel: CarouselController::new(store.testimonial_count()),
            theme: ThemeController::new(),
            modal: ModalController::new(),
            responsive: ResponsiveController::new(),
            contact: ContactController::new(),
            scroll: ScrollController::new(),
            preloader: None,
        };

        let reveal = match collaborators.reveal {
            Some(reveal) => Reveal::Pending(reveal),
            None => Reveal::Absent,
        };

        let mut app = Self {
            config,
            store,
            bus,
            timers: TimerService::new(),
            rng,
            ctl,
            effects,
            reveal,
        };
        app.boot(platform);
        Ok(app)
    }

    // ── Lifecycle ─────────────────────────────────────────────

    fn boot(&mut self, platform: &mut impl Platform) {
        let mut turn = self.turn(platform);
        let selection = turn.store.selection().clone();

        turn.cx.emit(ViewEvent::ThemeApplied(selection.theme));
        turn.cx
            .emit(ViewEvent::PerformanceMode(selection.viewport_mode.is_mobile()));
        turn.ctl.skills.render_initial(turn.store, &mut turn.cx);
        turn.effects.render_initial(&mut turn.cx);

        if turn.cx.config.features.preloader {
            let mut preloader = PreloaderController::new(&turn.cx);
            preloader.start(&mut turn.cx);
            turn.ctl.preloader = Some(preloader);
        }
        turn.ctl
            .carousel
            .start(selection.testimonial_index, &mut turn.cx);

        info!(
            "PortfolioApp started: theme={}, mode={}, {} testimonials",
            selection.theme,
            selection.viewport_mode,
            turn.ctl.carousel.count()
        );
    }

    /// Cancel every live task and close any open modal.
    pub fn shutdown(&mut self, platform: &mut impl Platform) {
        let mut turn = self.turn(platform);
        let cx = &mut turn.cx;
        turn.ctl.modal.close(cx);
        turn.ctl.filter.teardown(cx);
        turn.ctl.skills.teardown(cx);
        turn.ctl.carousel.teardown(cx);
        turn.ctl.theme.teardown(cx);
        turn.ctl.responsive.teardown(cx);
        turn.ctl.contact.teardown(cx);
        if let Some(preloader) = turn.ctl.preloader.as_mut() {
            preloader.teardown(cx);
        }
        turn.effects.teardown(cx);
        while turn.cx.bus.pop().is_some() {}
        info!("PortfolioApp shut down, {} timers live", self.timers.live_count());
    }

    // ── Inbound ───────────────────────────────────────────────

    /// Queue one event and run a pump turn.
    ///
    /// A full queue drops the event and returns [`Error::QueueFull`].
    pub fn dispatch(&mut self, event: Event, platform: &mut impl Platform) -> Result<()> {
        debug!("PortfolioApp: dispatch {:?}", event.signal());
        if !self.bus.push(event) {
            return Err(Error::QueueFull);
        }
        self.pump(platform)
    }

    /// Ask for a selection write on the next pump turn.
    pub fn request_selection(&mut self, field: Field, value: SelectionValue) -> Result<()> {
        if self.bus.push(Event::Deferred(SelectionRequest { field, value })) {
            Ok(())
        } else {
            Err(Error::QueueFull)
        }
    }

    /// Drain the queue, delivering each event to its subscribers.
    pub fn pump(&mut self, platform: &mut impl Platform) -> Result<()> {
        let mut turn = self.turn(platform);
        while let Some(event) = turn.cx.bus.pop() {
            turn.route(event)?;
        }
        Ok(())
    }

    /// Run one high-level command directly.
    pub fn handle_command(&mut self, cmd: UiCommand, platform: &mut impl Platform) -> Result<()> {
        info!("PortfolioApp: command {:?}", cmd);
        self.turn(platform).command(cmd)?;
        self.pump(platform)
    }

    /// Move logical time forward, firing every task that falls due on the
    /// way (including tasks armed by earlier firings) in deadline order.
    pub fn advance(&mut self, elapsed_ms: u64, platform: &mut impl Platform) -> Result<()> {
        let target = self.timers.now_ms().saturating_add(elapsed_ms);
        loop {
            let mut forward = Forward { bus: &mut self.bus };
            if !self.timers.step(target, &mut forward) {
                break;
            }
            self.pump(platform)?;
        }
        self.timers.settle(target);
        Ok(())
    }

    /// One display refresh: particles and cursor follower.
    pub fn animation_frame(&mut self, platform: &mut impl Platform) {
        let mut turn = self.turn(platform);
        turn.effects.frame(&mut turn.cx);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn store(&self) -> &ViewStateStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    pub fn stats(&self) -> AggregateStats {
        self.store.stats()
    }

    pub fn modal(&self) -> &ModalState {
        self.ctl.modal.state()
    }

    /// `None` when the preloader feature is off.
    pub fn preloader_phase(&self) -> Option<PhaseId> {
        self.ctl.preloader.as_ref().map(PreloaderController::phase)
    }

    pub fn timers(&self) -> &TimerService {
        &self.timers
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn is_sending(&self) -> bool {
        self.ctl.contact.is_sending()
    }

    pub fn carousel_paused(&self) -> bool {
        self.ctl.carousel.is_paused()
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn reveal_ready(&self) -> bool {
        matches!(self.reveal, Reveal::Ready(_))
    }

    /// Events dropped because the queue was full.
    pub fn dropped_events(&self) -> u32 {
        self.bus.dropped()
    }

    // ── Internal ──────────────────────────────────────────────

    fn turn<'a>(&'a mut self, platform: &'a mut dyn Platform) -> Turn<'a> {
        Turn {
            cx: Cx {
                config: &self.config,
                timers: &mut self.timers,
                bus: &mut self.bus,
                rng: &mut self.rng,
                platform,
            },
            store: &mut self.store,
            ctl: &mut self.ctl,
            effects: &mut self.effects,
            reveal: &mut self.reveal,
        }
    }
}

/// Forwards fired timers onto the bus.
struct Forward<'a> {
    bus: &'a mut EventBus,
}

impl TimerDelegate for Forward<'_> {
    fn on_timer_fired(&mut self, id: TimerId, purpose: TimerPurpose) {
        if !self.bus.push(Event::TimerFired { id, purpose }) {
            warn!("PortfolioApp: '{}' completion lost", purpose.label());
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Turn: disjoint borrows of the app for one dispatch
// ───────────────────────────────────────────────────────────────

struct Turn<'a> {
    cx: Cx<'a>,
    store: &'a mut ViewStateStore,
    ctl: &'a mut Controllers,
    effects: &'a mut Effects,
    reveal: &'a mut Reveal,
}

impl Turn<'_> {
    fn route(&mut self, event: Event) -> Result<()> {
        match event {
            Event::TimerFired { id, purpose } => return self.on_timer(id, purpose),
            Event::Deferred(req) => return self.select(req.field, req.value),
            _ => {}
        }
        let subscribers: Vec<ControllerId> = self.cx.bus.subscribers(event.signal()).collect();
        for id in subscribers {
            self.deliver(id, &event)?;
        }
        Ok(())
    }

    fn deliver(&mut self, id: ControllerId, event: &Event) -> Result<()> {
        let cx = &mut self.cx;
        match (id, event) {
            (ControllerId::Filter, Event::DocumentReady) => self.init_reveal(),
            (ControllerId::Filter, Event::Click(Target::FilterButton(tag))) => {
                return self.command(UiCommand::FilterProjects(tag.clone()));
            }

            (ControllerId::Skills, Event::Click(Target::SkillTab(tag))) => {
                return self.command(UiCommand::ShowSkillCategory(tag.clone()));
            }
            (ControllerId::Skills, Event::ItemRevealed(item)) => {
                self.ctl.skills.on_item_revealed(item, self.store, cx);
            }
            (ControllerId::Skills, Event::Click(Target::SkillCard(item))) => {
                self.ctl.skills.on_card_tap(item, self.store, cx);
            }

            (ControllerId::Carousel, Event::Click(Target::CarouselNext)) => {
                return self.command(UiCommand::NextTestimonial);
            }
            (ControllerId::Carousel, Event::Click(Target::CarouselPrevious)) => {
                return self.command(UiCommand::PreviousTestimonial);
            }
            (ControllerId::Carousel, Event::Click(Target::CarouselDot(i))) => {
                return self.command(UiCommand::GotoTestimonial(*i));
            }
            (ControllerId::Carousel, Event::PointerEnter(Region::Carousel)) => {
                self.ctl.carousel.pause(cx);
            }
            (ControllerId::Carousel, Event::PointerLeave(Region::Carousel)) => {
                self.ctl.carousel.resume(cx);
            }

            (ControllerId::Theme, Event::Click(Target::ThemeToggle)) => {
                return self.command(UiCommand::ToggleTheme);
            }

            (ControllerId::Modal, Event::Click(Target::DemoLink(demo))) => {
                return self.lenient(UiCommand::OpenDemo(demo.clone()));
            }
            (ControllerId::Modal, Event::Click(Target::Certificate(path))) => {
                return self.lenient(UiCommand::ViewCertificate(path.clone()));
            }
            (
                ControllerId::Modal,
                Event::Click(Target::ModalClose | Target::ModalBackdrop)
                | Event::KeyDown(crate::events::Key::Escape),
            ) => return self.command(UiCommand::CloseModal),

            (ControllerId::Responsive, Event::Resize { width, height }) => {
                self.ctl.responsive.on_resize(*width, *height, cx);
            }

            (ControllerId::Contact, Event::FormSubmit(form)) => {
                self.ctl.contact.submit(form.clone(), cx);
            }
            (ControllerId::Contact, Event::SubmissionSettled(outcome)) => {
                self.ctl.contact.settle(*outcome, cx);
            }

            (
                ControllerId::Scroll,
                Event::Scroll {
                    offset,
                    viewport_height,
                    document_height,
                },
            ) => self
                .ctl
                .scroll
                .on_scroll(*offset, *viewport_height, *document_height, cx),
            (ControllerId::Scroll, Event::Click(Target::BackToTop)) => {
                return self.command(UiCommand::ScrollToTop);
            }
            (ControllerId::Scroll, Event::Click(Target::Anchor { href, top })) => match top {
                Some(top) => return self.command(UiCommand::ScrollToSection { top: *top }),
                None => debug!("PortfolioApp: no section for '{}'", href),
            },
            (ControllerId::Scroll, Event::ImageRevealed(image)) => {
                self.ctl.scroll.on_image_revealed(image, cx);
            }

            (ControllerId::Preloader, Event::WindowLoaded) => {
                if let Some(preloader) = self.ctl.preloader.as_mut() {
                    preloader.on_window_loaded(cx);
                }
            }

            (ControllerId::Effects, Event::DocumentReady) => self.effects.on_document_ready(cx),
            (ControllerId::Effects, Event::PointerMove { x, y }) => {
                self.effects.on_pointer_move(*x, *y, cx);
            }
            (ControllerId::Effects, Event::PointerEnter(Region::Interactive)) => {
                self.effects.on_hover(true, cx);
            }
            (ControllerId::Effects, Event::PointerLeave(Region::Interactive)) => {
                self.effects.on_hover(false, cx);
            }
            (ControllerId::Effects, Event::KeyDown(key)) => self.effects.on_key(*key, cx),
            (ControllerId::Effects, Event::Click(Target::BrandLogo)) => {
                self.effects.on_logo_click(cx);
            }

            _ => {}
        }
        Ok(())
    }

    /// Run a command raised by a click.  A modal request while another
    /// modal is showing is dropped (already logged by the controller).
    fn lenient(&mut self, cmd: UiCommand) -> Result<()> {
        match self.command(cmd) {
            Err(Error::AlreadyOpen { .. }) => Ok(()),
            other => other,
        }
    }

    fn command(&mut self, cmd: UiCommand) -> Result<()> {
        let cx = &mut self.cx;
        match cmd {
            UiCommand::FilterProjects(tag) => {
                self.select(Field::ProjectFilter, SelectionValue::Filter(Filter::parse(&tag)))
            }
            UiCommand::ShowSkillCategory(tag) => {
                self.select(Field::SkillCategory, SelectionValue::Filter(Filter::parse(&tag)))
            }
            UiCommand::NextTestimonial => self.step_testimonial(carousel::next_index),
            UiCommand::PreviousTestimonial => self.step_testimonial(carousel::previous_index),
            UiCommand::GotoTestimonial(index) => {
                self.select(Field::TestimonialIndex, SelectionValue::Index(index))
            }
            UiCommand::ToggleTheme => {
                let next = self.store.selection().theme.toggled();
                self.select(Field::Theme, SelectionValue::Theme(next))
            }
            UiCommand::OpenDemo(demo) => self.ctl.modal.open_demo(&demo, cx).map(|_| ()),
            UiCommand::ViewCertificate(path) => {
                self.ctl.modal.open_certificate(&path, cx).map(|_| ())
            }
            UiCommand::CloseModal => {
                self.ctl.modal.close(cx);
                Ok(())
            }
            UiCommand::ScrollToTop => {
                self.ctl.scroll.scroll_to_top(cx);
                Ok(())
            }
            UiCommand::ScrollToSection { top } => {
                self.ctl.scroll.scroll_to_section(top, cx);
                Ok(())
            }
        }
    }

    fn step_testimonial(&mut self, step: fn(usize, usize) -> usize) -> Result<()> {
        let count = self.ctl.carousel.count();
        if count == 0 {
            return Ok(());
        }
        let index = step(self.store.selection().testimonial_index, count);
        self.select(Field::TestimonialIndex, SelectionValue::Index(index))
    }

    /// Write one selection and notify the store's subscribers.
    ///
    /// An out-of-domain value is an error in strict mode and a logged
    /// no-op otherwise.
    fn select(&mut self, field: Field, value: SelectionValue) -> Result<()> {
        let strict = self.cx.config.strict_selection;
        let mut observers = Observers {
            cx: &mut self.cx,
            ctl: &mut *self.ctl,
            effects: &mut *self.effects,
        };
        match self.store.set_selection(field, value, &mut observers) {
            Ok(_) => Ok(()),
            Err(e @ Error::InvalidSelection { .. }) if !strict => {
                warn!("PortfolioApp: {e}, keeping prior value");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn on_timer(&mut self, id: TimerId, purpose: TimerPurpose) -> Result<()> {
        let cx = &mut self.cx;
        let ctl = &mut *self.ctl;
        match purpose {
            TimerPurpose::PreloaderProgress => {
                if let Some(preloader) = ctl.preloader.as_mut() {
                    preloader.on_progress_timer(id, cx);
                }
            }
            TimerPurpose::PreloaderPhase => {
                if let Some(preloader) = ctl.preloader.as_mut() {
                    preloader.on_phase_timer(id, cx);
                }
            }
            TimerPurpose::FilterFade => ctl.filter.on_fade_timer(id, self.store, cx),
            TimerPurpose::RevealRefresh => {
                if ctl.filter.on_refresh_timer(id) {
                    if let Reveal::Ready(reveal) = &mut *self.reveal {
                        debug!("PortfolioApp: refreshing scroll-reveal");
                        reveal.refresh();
                    }
                }
            }
            TimerPurpose::SkillFade => ctl.skills.on_fade_timer(id, self.store, cx),
            TimerPurpose::CounterFrame => ctl.skills.on_frame_timer(id, cx),
            TimerPurpose::SkillBarFill(slot) => ctl.skills.on_fill_timer(slot, id, self.store, cx),
            TimerPurpose::SkillBarGlow(slot) => ctl.skills.on_glow_timer(slot, id, self.store, cx),
            TimerPurpose::CarouselAdvance => {
                let current = self.store.selection().testimonial_index;
                if let Some(next) = ctl.carousel.on_timer(id, current) {
                    return self.select(Field::TestimonialIndex, SelectionValue::Index(next));
                }
            }
            TimerPurpose::ResizeDebounce => {
                if let Some(settled) = ctl.responsive.on_timer(id, cx) {
                    self.select(Field::ViewportMode, SelectionValue::Viewport(settled.mode))?;
                    self.effects.resize(settled.width, settled.height);
                }
            }
            TimerPurpose::ThemePulse => ctl.theme.on_pulse_timer(id, cx),
            TimerPurpose::SuccessMessage => ctl.contact.on_success_timer(id, cx),
            TimerPurpose::Typewriter
            | TimerPurpose::Notification
            | TimerPurpose::RainbowEnd
            | TimerPurpose::PartyEnd
            | TimerPurpose::ConfettiExpire
            | TimerPurpose::LogoClickWindow => self.effects.on_timer(id, purpose, cx),
        }
        Ok(())
    }

    fn init_reveal(&mut self) {
        if !matches!(*self.reveal, Reveal::Pending(_)) {
            return;
        }
        let Reveal::Pending(mut reveal) = core::mem::replace(self.reveal, Reveal::Absent) else {
            return;
        };
        match reveal.init(&self.cx.config.reveal) {
            Ok(()) => {
                info!("PortfolioApp: scroll-reveal ready");
                *self.reveal = Reveal::Ready(reveal);
            }
            Err(e) => {
                info!(
                    "PortfolioApp: {} ({e}), skipping",
                    Error::CollaboratorUnavailable(Collaborator::Reveal)
                );
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Store notifications
// ───────────────────────────────────────────────────────────────

struct Observers<'p, 'a> {
    cx: &'p mut Cx<'a>,
    ctl: &'p mut Controllers,
    effects: &'p mut Effects,
}

impl SelectionObserver for Observers<'_, '_> {
    fn on_selection_changed(
        &mut self,
        subscriber: ControllerId,
        change: &SelectionChange,
        store: &ViewStateStore,
    ) {
        let cx = &mut *self.cx;
        match subscriber {
            ControllerId::Filter => self.ctl.filter.on_selection_changed(change, store, cx),
            ControllerId::Skills => self.ctl.skills.on_selection_changed(change, store, cx),
            ControllerId::Carousel => self.ctl.carousel.on_selection_changed(change, cx),
            ControllerId::Theme => {
                if let Some(theme) = self.ctl.theme.on_selection_changed(change, cx) {
                    self.effects.on_theme(theme, cx);
                }
            }
            ControllerId::Responsive => {
                if let Some(enabled) = self.ctl.responsive.on_selection_changed(change, cx) {
                    self.effects.set_enabled(enabled, cx);
                }
            }
            other => debug!("PortfolioApp: {:?} has no store hook", other),
        }
    }
}
