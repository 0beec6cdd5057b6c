//! Function-pointer finite state machine for the preloader overlay.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  PhaseTable                                              │
//! │  ┌──────────┬───────────┬──────────┬──────────────────┐  │
//! │  │ PhaseId  │ on_enter  │ on_exit  │ on_trigger       │  │
//! │  ├──────────┼───────────┼──────────┼──────────────────┤  │
//! │  │ Loading  │ fn(ctx)   │    -     │ fn(ctx, t)->Opt  │  │
//! │  │ Settling │ fn(ctx)   │ fn(ctx)  │ fn(ctx, t)->Opt  │  │
//! │  │ Fading   │ fn(ctx)   │ fn(ctx)  │ fn(ctx, t)->Opt  │  │
//! │  │ Removed  │ fn(ctx)   │    -     │ fn(ctx, t)->Opt  │  │
//! │  └──────────┴───────────┴──────────┴──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each trigger is handed to `on_trigger` for the **current** phase.  If it
//! returns `Some(next)`, the engine runs `on_exit` for the current phase,
//! then `on_enter` for the next.  Handlers never touch timers or sinks
//! directly: they write [`context::PreloaderCommands`] which the owning
//! controller applies after every call.

pub mod context;
pub mod states;

use context::PreloaderContext;
use log::info;

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// Lifecycle of the full-screen loading overlay.
/// Must stay in sync with the table built in [`states::build_phase_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhaseId {
    /// Progress bar filling, waiting for the window `load` event.
    Loading = 0,
    /// Page loaded; overlay lingers briefly.
    Settling = 1,
    /// Overlay fading out.
    Fading = 2,
    /// Overlay detached.  Terminal.
    Removed = 3,
}

impl PhaseId {
    pub const COUNT: usize = 4;

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Loading,
            1 => Self::Settling,
            2 => Self::Fading,
            3 => Self::Removed,
            _ => {
                debug_assert!(false, "invalid phase index: {idx}");
                Self::Removed
            }
        }
    }
}

/// Inputs the machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// The progress timer fired; add `step` percent.
    ProgressTick { step: f64 },
    /// The window finished loading.
    WindowLoaded,
    /// The phase timer armed by `on_enter` elapsed.
    PhaseElapsed,
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit`.
pub type PhaseActionFn = fn(&mut PreloaderContext);

/// Signature for the trigger handler.
/// Returns `Some(next)` to transition, or `None` to stay.
pub type PhaseTriggerFn = fn(&mut PreloaderContext, Trigger) -> Option<PhaseId>;

/// One row of the phase table.
pub struct PhaseDescriptor {
    pub id: PhaseId,
    pub name: &'static str,
    pub on_enter: Option<PhaseActionFn>,
    pub on_exit: Option<PhaseActionFn>,
    pub on_trigger: PhaseTriggerFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    table: [PhaseDescriptor; PhaseId::COUNT],
    current: usize,
    transitions: u32,
}

impl Fsm {
    pub fn new(table: [PhaseDescriptor; PhaseId::COUNT], initial: PhaseId) -> Self {
        Self {
            table,
            current: initial as usize,
            transitions: 0,
        }
    }

    /// Run the initial `on_enter`.  Call once before the first trigger.
    pub fn start(&mut self, ctx: &mut PreloaderContext) {
        info!("Preloader FSM starting in phase: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Feed one trigger to the current phase.
    pub fn handle(&mut self, trigger: Trigger, ctx: &mut PreloaderContext) {
        if let Some(next) = (self.table[self.current].on_trigger)(ctx, trigger) {
            self.transition(next, ctx);
        }
    }

    /// Jump straight to `next`, running exit/enter actions.
    pub fn force_transition(&mut self, next: PhaseId, ctx: &mut PreloaderContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    pub fn current_phase(&self) -> PhaseId {
        PhaseId::from_index(self.current)
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    fn transition(&mut self, next: PhaseId, ctx: &mut PreloaderContext) {
        let next_idx = next as usize;
        info!(
            "Preloader FSM: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }
        self.current = next_idx;
        self.transitions += 1;
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
