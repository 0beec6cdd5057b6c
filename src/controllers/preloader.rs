//! Drives the preloader FSM from timers and the window `load` event.

use log::warn;
use rand::Rng;

use crate::fsm::context::{PreloaderContext, TimerCommand};
use crate::fsm::{Fsm, PhaseId, Trigger, states};
use crate::scheduler::{TimerId, TimerPurpose};

use super::Cx;

pub struct PreloaderController {
    fsm: Fsm,
    ctx: PreloaderContext,
    progress_timer: Option<TimerId>,
    phase_timer: Option<TimerId>,
}

impl PreloaderController {
    pub fn new(cx: &Cx<'_>) -> Self {
        Self {
            fsm: Fsm::new(states::build_phase_table(), PhaseId::Loading),
            ctx: PreloaderContext::new(&cx.config.preloader),
            progress_timer: None,
            phase_timer: None,
        }
    }

    pub fn start(&mut self, cx: &mut Cx<'_>) {
        self.fsm.start(&mut self.ctx);
        self.apply(cx);
    }

    pub fn phase(&self) -> PhaseId {
        self.fsm.current_phase()
    }

    pub fn progress(&self) -> f64 {
        self.ctx.progress
    }

    pub fn on_window_loaded(&mut self, cx: &mut Cx<'_>) {
        self.fsm.handle(Trigger::WindowLoaded, &mut self.ctx);
        self.apply(cx);
    }

    pub fn on_progress_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.progress_timer != Some(id) {
            return;
        }
        let max = cx.config.preloader.max_step_percent;
        let step = if max > 0.0 { cx.rng.random_range(0.0..max) } else { 0.0 };
        self.fsm.handle(Trigger::ProgressTick { step }, &mut self.ctx);
        self.apply(cx);
    }

    pub fn on_phase_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.phase_timer != Some(id) {
            return;
        }
        self.phase_timer = None;
        self.fsm.handle(Trigger::PhaseElapsed, &mut self.ctx);
        self.apply(cx);
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.progress_timer);
        cx.timers.cancel_slot(&mut self.phase_timer);
    }

    /// Turn handler commands into timer and sink calls.
    fn apply(&mut self, cx: &mut Cx<'_>) {
        let commands = self.ctx.commands.take();

        match commands.progress_timer {
            TimerCommand::Keep => {}
            TimerCommand::Arm => {
                cx.timers.cancel_slot(&mut self.progress_timer);
                match cx.timers.every(TimerPurpose::PreloaderProgress, cx.config.preloader.tick_ms) {
                    Ok(id) => self.progress_timer = Some(id),
                    Err(e) => warn!("Preloader: {e}, progress bar stays put"),
                }
            }
            TimerCommand::Cancel => {
                cx.timers.cancel_slot(&mut self.progress_timer);
            }
        }

        for event in commands.emits {
            cx.emit(event);
        }

        if commands.phase_timer.is_some() || self.fsm.current_phase() == PhaseId::Removed {
            cx.timers.cancel_slot(&mut self.phase_timer);
        }
        if let Some(delay) = commands.phase_timer {
            match cx.timers.once(TimerPurpose::PreloaderPhase, delay) {
                Ok(id) => self.phase_timer = Some(id),
                Err(e) => {
                    warn!("Preloader: {e}, removing overlay now");
                    self.fsm.force_transition(PhaseId::Removed, &mut self.ctx);
                    self.apply(cx);
                }
            }
        }
    }
}
