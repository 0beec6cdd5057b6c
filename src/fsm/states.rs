//! Concrete phase handlers and table builder.
//!
//! ```text
//!  LOADING ──[window load]──▶ SETTLING ──[hide delay]──▶ FADING
//!     │                                                   │
//!  [tick] progress += rand, capped at 100            [removal]
//!                                                         ▼
//!                                                      REMOVED
//! ```
//!
//! Progress ticks are accepted until the overlay is removed: the bar keeps
//! filling behind the fade just as it would on a slow page.

use super::context::{PreloaderContext, TimerCommand};
use super::{PhaseDescriptor, PhaseId, Trigger};
use crate::app::events::ViewEvent;
use log::{debug, info};

pub fn build_phase_table() -> [PhaseDescriptor; PhaseId::COUNT] {
    [
        PhaseDescriptor {
            id: PhaseId::Loading,
            name: "Loading",
            on_enter: Some(loading_enter),
            on_exit: None,
            on_trigger: loading_trigger,
        },
        PhaseDescriptor {
            id: PhaseId::Settling,
            name: "Settling",
            on_enter: Some(settling_enter),
            on_exit: None,
            on_trigger: settling_trigger,
        },
        PhaseDescriptor {
            id: PhaseId::Fading,
            name: "Fading",
            on_enter: Some(fading_enter),
            on_exit: None,
            on_trigger: fading_trigger,
        },
        PhaseDescriptor {
            id: PhaseId::Removed,
            name: "Removed",
            on_enter: Some(removed_enter),
            on_exit: None,
            on_trigger: removed_trigger,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared
// ═══════════════════════════════════════════════════════════════════════════

fn apply_progress(ctx: &mut PreloaderContext, step: f64) {
    if ctx.is_complete() {
        return;
    }
    ctx.progress = (ctx.progress + step.max(0.0)).min(100.0);
    debug!("Preloader: {:.1}%", ctx.progress);
    ctx.commands.emits.push(ViewEvent::PreloaderProgress(ctx.progress));
    if ctx.is_complete() {
        ctx.commands.progress_timer = TimerCommand::Cancel;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  LOADING
// ═══════════════════════════════════════════════════════════════════════════

fn loading_enter(ctx: &mut PreloaderContext) {
    ctx.progress = 0.0;
    ctx.commands.progress_timer = TimerCommand::Arm;
}

fn loading_trigger(ctx: &mut PreloaderContext, trigger: Trigger) -> Option<PhaseId> {
    match trigger {
        Trigger::ProgressTick { step } => {
            apply_progress(ctx, step);
            None
        }
        Trigger::WindowLoaded => Some(PhaseId::Settling),
        Trigger::PhaseElapsed => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SETTLING
// ═══════════════════════════════════════════════════════════════════════════

fn settling_enter(ctx: &mut PreloaderContext) {
    info!("Preloader: page loaded, hiding in {}ms", ctx.hide_delay_ms);
    ctx.commands.phase_timer = Some(ctx.hide_delay_ms);
}

fn settling_trigger(ctx: &mut PreloaderContext, trigger: Trigger) -> Option<PhaseId> {
    match trigger {
        Trigger::ProgressTick { step } => {
            apply_progress(ctx, step);
            None
        }
        Trigger::PhaseElapsed => Some(PhaseId::Fading),
        Trigger::WindowLoaded => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  FADING
// ═══════════════════════════════════════════════════════════════════════════

fn fading_enter(ctx: &mut PreloaderContext) {
    ctx.commands.emits.push(ViewEvent::PreloaderHidden);
    ctx.commands.phase_timer = Some(ctx.removal_ms);
}

fn fading_trigger(ctx: &mut PreloaderContext, trigger: Trigger) -> Option<PhaseId> {
    match trigger {
        Trigger::ProgressTick { step } => {
            apply_progress(ctx, step);
            None
        }
        Trigger::PhaseElapsed => Some(PhaseId::Removed),
        Trigger::WindowLoaded => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  REMOVED
// ═══════════════════════════════════════════════════════════════════════════

fn removed_enter(ctx: &mut PreloaderContext) {
    ctx.commands.progress_timer = TimerCommand::Cancel;
    ctx.commands.phase_timer = None;
    ctx.commands.emits.push(ViewEvent::PreloaderRemoved);
    info!("Preloader: removed at {:.0}%", ctx.progress);
}

fn removed_trigger(_ctx: &mut PreloaderContext, _trigger: Trigger) -> Option<PhaseId> {
    None
}
