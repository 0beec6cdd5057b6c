//! Decorative effects.
//!
//! None of these read or write the selection store.  They run off their
//! own animation-frame loop and their own timers, and each one is optional:
//! a disabled feature or a missing collaborator simply leaves its slot
//! empty.

pub mod cursor;
pub mod easter_eggs;
pub mod particles;
pub mod typewriter;

use log::info;

use crate::app::events::ViewEvent;
use crate::app::ports::RendererPort;
use crate::config::PortfolioConfig;
use crate::controllers::Cx;
use crate::events::Key;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::Theme;

use cursor::CursorFollower;
use easter_eggs::{EasterEggs, Toast};
use particles::ParticleField;
use typewriter::Typewriter;

pub struct Effects {
    particles: Option<ParticleField>,
    cursor: Option<CursorFollower>,
    typewriter: Option<Typewriter>,
    eggs: Option<EasterEggs>,
    toast: Toast,
    viewport: (u32, u32),
    /// Heavy effects run on desktop only.
    enabled: bool,
}

impl Effects {
    /// Build the enabled effects.  A renderer that fails to start leaves
    /// the particle slot empty.
    pub fn new(
        config: &PortfolioConfig,
        renderer: Option<Box<dyn RendererPort>>,
        theme: Theme,
        viewport: (u32, u32),
        enabled: bool,
        rng: &mut rand::rngs::StdRng,
    ) -> Self {
        let features = &config.features;
        let particles = match renderer {
            Some(renderer) if features.particles => {
                ParticleField::attach(renderer, &config.particles, theme, rng)
                    .map_err(|e| info!("Effects: {e}"))
                    .ok()
            }
            Some(_) => None,
            None => {
                if features.particles {
                    info!("Effects: no renderer, particles skipped");
                }
                None
            }
        };

        let mut effects = Self {
            particles,
            cursor: features
                .cursor
                .then(|| CursorFollower::new(config.particles.cursor_follow_rate)),
            typewriter: features.typewriter.then(Typewriter::new),
            eggs: features.easter_eggs.then(EasterEggs::new),
            toast: Toast::default(),
            viewport,
            enabled,
        };
        if let Some(field) = effects.particles.as_mut() {
            field.set_visible(enabled);
        }
        effects
    }

    pub fn has_particles(&self) -> bool {
        self.particles.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paint the initial visibility of cursor and particles.
    pub fn render_initial(&mut self, cx: &mut Cx<'_>) {
        if self.particles.is_some() {
            cx.emit(ViewEvent::ParticlesVisible(self.enabled));
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.set_visible(self.enabled, cx);
        }
    }

    pub fn on_document_ready(&mut self, cx: &mut Cx<'_>) {
        if let Some(typewriter) = self.typewriter.as_mut() {
            typewriter.start(cx);
        }
    }

    pub fn on_theme(&mut self, theme: Theme, cx: &Cx<'_>) {
        if let Some(field) = self.particles.as_mut() {
            field.set_theme(theme, &cx.config.particles);
        }
    }

    /// Switch heavy effects on (desktop) or off (mobile).
    pub fn set_enabled(&mut self, enabled: bool, cx: &mut Cx<'_>) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        info!("Effects: {}", if enabled { "enabled" } else { "performance mode" });
        if let Some(field) = self.particles.as_mut() {
            field.set_visible(enabled);
            cx.emit(ViewEvent::ParticlesVisible(enabled));
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.set_visible(enabled, cx);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        if !self.enabled {
            return;
        }
        if let Some(field) = self.particles.as_mut() {
            field.resize(width, height);
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, cx: &mut Cx<'_>) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.on_move(x, y, cx);
        }
        if let Some(field) = self.particles.as_mut() {
            field.on_pointer(x, y, self.viewport.0, self.viewport.1);
        }
    }

    pub fn on_hover(&mut self, hovering: bool, cx: &mut Cx<'_>) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.set_hover(hovering, cx);
        }
    }

    pub fn on_key(&mut self, key: Key, cx: &mut Cx<'_>) {
        if let Some(eggs) = self.eggs.as_mut() {
            eggs.on_key(key, &mut self.toast, cx);
        }
    }

    pub fn on_logo_click(&mut self, cx: &mut Cx<'_>) {
        if let Some(eggs) = self.eggs.as_mut() {
            eggs.on_logo_click(cx);
        }
    }

    /// Route an effect timer.
    pub fn on_timer(&mut self, id: TimerId, purpose: TimerPurpose, cx: &mut Cx<'_>) {
        match purpose {
            TimerPurpose::Typewriter => {
                if let Some(typewriter) = self.typewriter.as_mut() {
                    typewriter.on_timer(id, cx);
                }
            }
            TimerPurpose::Notification => self.toast.on_timer(id, cx),
            _ => {
                if let Some(eggs) = self.eggs.as_mut() {
                    eggs.on_timer(id, purpose, cx);
                }
            }
        }
    }

    /// One animation frame.
    pub fn frame(&mut self, cx: &mut Cx<'_>) {
        if !self.enabled {
            return;
        }
        let time_s = cx.now_ms() as f64 / 1000.0;
        if let Some(field) = self.particles.as_mut() {
            field.frame(time_s);
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.frame(cx);
        }
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        if let Some(typewriter) = self.typewriter.as_mut() {
            typewriter.teardown(cx);
        }
        if let Some(eggs) = self.eggs.as_mut() {
            eggs.teardown(cx);
        }
        self.toast.teardown(cx);
    }
}
