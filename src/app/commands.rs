//! Inbound commands to the application service.
//!
//! These are the discrete user actions a controller reacts to.  Clicks
//! arriving on the bus are translated into commands; a host can also
//! issue them directly (inline `onclick` handlers, keyboard shortcuts).

/// Commands that the host can send into the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Activate a project filter button (`"all"` or a tag).
    FilterProjects(String),
    /// Activate a skill category tab (`"all"` or a tag).
    ShowSkillCategory(String),
    NextTestimonial,
    PreviousTestimonial,
    GotoTestimonial(usize),
    ToggleTheme,
    OpenDemo(String),
    ViewCertificate(String),
    CloseModal,
    ScrollToTop,
    /// Smooth-scroll so a section starting `top` px down the page sits
    /// just below the fixed navbar.
    ScrollToSection { top: u32 },
}
