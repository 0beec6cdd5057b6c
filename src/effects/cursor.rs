//! Custom cursor dot plus a trailing follower ring.

use crate::anim::approach;
use crate::app::events::ViewEvent;
use crate::controllers::Cx;

pub struct CursorFollower {
    pointer: [f64; 2],
    follower: [f64; 2],
    rate: f64,
    hovering: bool,
    visible: bool,
}

impl CursorFollower {
    pub fn new(rate: f64) -> Self {
        Self {
            pointer: [0.0, 0.0],
            follower: [0.0, 0.0],
            rate,
            hovering: false,
            visible: true,
        }
    }

    pub fn on_move(&mut self, x: f64, y: f64, cx: &mut Cx<'_>) {
        self.pointer = [x, y];
        if self.visible {
            cx.emit(ViewEvent::CursorMoved { x, y });
        }
    }

    /// Entering or leaving a link, button or card.
    pub fn set_hover(&mut self, hovering: bool, cx: &mut Cx<'_>) {
        if self.hovering != hovering {
            self.hovering = hovering;
            cx.emit(ViewEvent::CursorHover(hovering));
        }
    }

    /// Ease the follower toward the pointer.
    pub fn frame(&mut self, cx: &mut Cx<'_>) {
        if !self.visible {
            return;
        }
        self.follower[0] = approach(self.follower[0], self.pointer[0], self.rate);
        self.follower[1] = approach(self.follower[1], self.pointer[1], self.rate);
        cx.emit(ViewEvent::FollowerMoved {
            x: self.follower[0],
            y: self.follower[1],
        });
    }

    pub fn set_visible(&mut self, visible: bool, cx: &mut Cx<'_>) {
        if self.visible != visible {
            self.visible = visible;
            cx.emit(ViewEvent::CursorVisible(visible));
        }
    }

    pub fn follower(&self) -> [f64; 2] {
        self.follower
    }
}
