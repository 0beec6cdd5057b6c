//! Skill category tabs, animated statistics, skill-bar fills and the
//! tap-to-open info panel on mobile.

use log::{debug, warn};
use rand::Rng;

use crate::anim::{NumberTween, format_counter};
use crate::app::events::ViewEvent;
use crate::scheduler::{TimerId, TimerPurpose};
use crate::store::{ItemKind, SelectionChange, SelectionValue, StatKey, ViewStateStore};

use super::Cx;
use super::filter::FadeTracker;

/// Metrics rendered as counters under the skill grid.
const COUNTERS: [StatKey; 4] = [
    StatKey::Count,
    StatKey::AvgExperience,
    StatKey::SpecialtyCount,
    StatKey::AvgProficiency,
];

#[derive(Debug, Clone, Copy)]
struct Bar {
    item: usize,
    fill_timer: Option<TimerId>,
    glow_timer: Option<TimerId>,
    filled: bool,
    info_open: bool,
}

pub struct SkillController {
    fade: FadeTracker,
    tweens: Vec<(StatKey, NumberTween)>,
    frame_timer: Option<TimerId>,
    bars: Vec<Bar>,
}

impl SkillController {
    pub fn new(store: &ViewStateStore) -> Self {
        let bars = store
            .items()
            .iter()
            .enumerate()
            .filter(|(_, i)| i.kind == ItemKind::Skill)
            .map(|(item, _)| Bar {
                item,
                fill_timer: None,
                glow_timer: None,
                filled: false,
                info_open: false,
            })
            .collect();
        Self {
            fade: FadeTracker::new(TimerPurpose::SkillFade),
            tweens: Vec::new(),
            frame_timer: None,
            bars,
        }
    }

    /// Paint the startup values without animating.
    pub fn render_initial(&self, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let stats = store.stats();
        for key in COUNTERS {
            cx.emit(ViewEvent::StatDisplayed {
                key,
                text: format_counter(stats.get(key), key.is_fractional()),
            });
        }
    }

    /// Store notification for `skillCategory`.
    pub fn on_selection_changed(
        &mut self,
        change: &SelectionChange,
        store: &ViewStateStore,
        cx: &mut Cx<'_>,
    ) {
        let SelectionValue::Filter(filter) = &change.current else {
            return;
        };
        cx.emit(ViewEvent::SkillTabActivated(filter.clone()));
        self.fade.begin(change, store, cx);
        self.animate_stats(change, store, cx);
    }

    /// Restart the counters from whatever they show now toward the new
    /// values.
    fn animate_stats(&mut self, change: &SelectionChange, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let now = cx.now_ms();
        let target = store.stats();
        let duration = cx.config.timing.counter_ms;

        let tweens = COUNTERS
            .iter()
            .map(|&key| {
                let from = self
                    .tweens
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map_or_else(|| change.previous_stats.get(key), |(_, t)| t.value_at(now));
                (key, NumberTween::new(from, target.get(key), now, duration))
            })
            .collect();
        self.tweens = tweens;

        cx.timers.cancel_slot(&mut self.frame_timer);
        match cx.timers.every(TimerPurpose::CounterFrame, cx.config.timing.frame_interval_ms) {
            Ok(id) => self.frame_timer = Some(id),
            Err(e) => {
                warn!("Skills: {e}, showing final counter values");
                self.render_frame(u64::MAX, cx);
                self.tweens.clear();
            }
        }
    }

    pub fn on_frame_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.frame_timer != Some(id) {
            return;
        }
        let now = cx.now_ms();
        self.render_frame(now, cx);
        if self.tweens.iter().all(|(_, t)| t.is_done(now)) {
            debug!("Skills: counters settled");
            cx.timers.cancel_slot(&mut self.frame_timer);
            self.tweens.clear();
        }
    }

    fn render_frame(&self, now: u64, cx: &mut Cx<'_>) {
        for (key, tween) in &self.tweens {
            cx.emit(ViewEvent::StatDisplayed {
                key: *key,
                text: format_counter(tween.value_at(now), key.is_fractional()),
            });
        }
    }

    pub fn on_fade_timer(&mut self, id: TimerId, store: &ViewStateStore, cx: &mut Cx<'_>) {
        self.fade.on_timer(id, store, cx);
    }

    // ── Skill bars ────────────────────────────────────────────

    /// A skill card scrolled into view: schedule its bar fill after a
    /// random stagger.  Each bar fills once.
    pub fn on_item_revealed(&mut self, item_id: &str, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let Some(idx) = store.index_of(item_id) else {
            return;
        };
        let Some(slot) = self.bars.iter().position(|b| b.item == idx) else {
            return;
        };
        let bar = &mut self.bars[slot];
        if bar.filled || bar.fill_timer.is_some() {
            return;
        }
        let timing = &cx.config.timing;
        let delay = if timing.skill_stagger_min_ms < timing.skill_stagger_max_ms {
            cx.rng
                .random_range(timing.skill_stagger_min_ms..timing.skill_stagger_max_ms)
        } else {
            timing.skill_stagger_min_ms
        };
        match cx.timers.once(TimerPurpose::SkillBarFill(slot), delay) {
            Ok(id) => bar.fill_timer = Some(id),
            Err(e) => {
                warn!("Skills: {e}, filling '{item_id}' immediately");
                self.fill(slot, store, cx);
            }
        }
    }

    pub fn on_fill_timer(&mut self, slot: usize, id: TimerId, store: &ViewStateStore, cx: &mut Cx<'_>) {
        match self.bars.get_mut(slot) {
            Some(bar) if bar.fill_timer == Some(id) => bar.fill_timer = None,
            _ => return,
        }
        self.fill(slot, store, cx);
    }

    /// Fill one bar and light its glow.  The glow is skipped when no
    /// timer is left to turn it off.
    fn fill(&mut self, slot: usize, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let Some(bar) = self.bars.get_mut(slot) else {
            return;
        };
        bar.filled = true;

        let Some(item) = store.item(bar.item) else {
            return;
        };
        let width = item.metrics.proficiency.unwrap_or(0.0);
        cx.emit(ViewEvent::SkillBarFilled {
            id: item.id.clone(),
            width,
        });
        match cx
            .timers
            .once(TimerPurpose::SkillBarGlow(slot), cx.config.timing.skill_glow_ms)
        {
            Ok(id) => {
                bar.glow_timer = Some(id);
                cx.emit(ViewEvent::SkillBarGlow {
                    id: item.id.clone(),
                    on: true,
                });
            }
            Err(e) => debug!("Skills: {e}, no glow for '{}'", item.id),
        }
    }

    pub fn on_glow_timer(&mut self, slot: usize, id: TimerId, store: &ViewStateStore, cx: &mut Cx<'_>) {
        let Some(bar) = self.bars.get_mut(slot) else {
            return;
        };
        if bar.glow_timer != Some(id) {
            return;
        }
        bar.glow_timer = None;
        if let Some(item) = store.item(bar.item) {
            cx.emit(ViewEvent::SkillBarGlow {
                id: item.id.clone(),
                on: false,
            });
        }
    }

    /// A tap on a skill card.  On mobile there is no hover, so the tap
    /// toggles the card's info panel; on desktop it does nothing.
    pub fn on_card_tap(&mut self, item_id: &str, store: &ViewStateStore, cx: &mut Cx<'_>) {
        if !store.selection().viewport_mode.is_mobile() {
            return;
        }
        let Some(idx) = store.index_of(item_id) else {
            return;
        };
        let Some(bar) = self.bars.iter_mut().find(|b| b.item == idx) else {
            return;
        };
        bar.info_open = !bar.info_open;
        cx.emit(ViewEvent::SkillInfoToggled {
            id: item_id.to_owned(),
            open: bar.info_open,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.frame_timer.is_some()
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        self.fade.teardown(cx);
        cx.timers.cancel_slot(&mut self.frame_timer);
        for bar in &mut self.bars {
            cx.timers.cancel_slot(&mut bar.fill_timer);
            cx.timers.cancel_slot(&mut bar.glow_timer);
        }
    }
}
