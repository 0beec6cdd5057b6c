//! Scroll progress bar, navbar shading, the back-to-top button, in-page
//! anchor links and lazily loaded images.

use log::debug;

use crate::app::events::ViewEvent;

use super::Cx;

const NAVBAR_THRESHOLD: f64 = 100.0;
const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Fraction of the page scrolled, clamped to `[0, 1]`.  Zero when the page
/// is no taller than the viewport.
pub fn progress(offset: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Default)]
pub struct ScrollController {
    navbar_scrolled: bool,
    back_to_top: bool,
    /// Images whose source has been swapped in.
    loaded_images: Vec<String>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64, document_height: f64, cx: &mut Cx<'_>) {
        cx.emit(ViewEvent::ScrollProgress(progress(
            offset,
            viewport_height,
            document_height,
        )));

        let scrolled = offset > NAVBAR_THRESHOLD;
        if scrolled != self.navbar_scrolled {
            self.navbar_scrolled = scrolled;
            cx.emit(ViewEvent::NavbarScrolled(scrolled));
        }

        let show = offset > BACK_TO_TOP_THRESHOLD;
        if show != self.back_to_top {
            self.back_to_top = show;
            cx.emit(ViewEvent::BackToTopVisible(show));
        }
    }

    pub fn scroll_to_top(&mut self, cx: &mut Cx<'_>) {
        cx.platform.scroll_to_top();
    }

    /// Scroll so a section starting at `top` clears the fixed navbar.
    pub fn scroll_to_section(&mut self, top: u32, cx: &mut Cx<'_>) {
        let offset = top.saturating_sub(cx.config.nav_offset_px);
        debug!("Scroll: section at {top}px, scrolling to {offset}px");
        cx.platform.scroll_to(offset);
    }

    /// A deferred image came into view.  Each image loads once.
    pub fn on_image_revealed(&mut self, id: &str, cx: &mut Cx<'_>) {
        if self.loaded_images.iter().any(|i| i == id) {
            return;
        }
        self.loaded_images.push(id.to_owned());
        cx.emit(ViewEvent::LoadImage(id.to_owned()));
    }
}
