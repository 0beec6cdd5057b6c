//! View-State Store: single source of truth for the page's selections.
//!
//! ```text
//!  Controller ──set_selection──▶ ┌──────────────────────────┐
//!                                │ validate                  │
//!                                │ write field               │
//!                                │ recompute visible[]       │
//!                                │ recompute AggregateStats  │
//!                                └────────────┬─────────────┘
//!                                             │ notify (subscription order)
//!                                             ▼
//!                                 SelectionObserver(&Store)
//! ```
//!
//! Observers are handed a shared `&ViewStateStore`, so a notification
//! handler cannot write a selection synchronously.  A handler that needs
//! a follow-up write pushes `Event::Deferred` onto the bus, which is
//! applied on the next pump turn.

pub mod items;
pub mod selection;
pub mod stats;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::events::ControllerId;

pub use items::{Document, Item, ItemKind, Metrics};
pub use selection::{Field, FieldSet, Filter, Selection, SelectionValue, Theme, ViewportMode};
pub use stats::{AggregateStats, StatKey};

/// Maximum number of subscriptions.
const MAX_SUBSCRIBERS: usize = 16;

// ---------------------------------------------------------------------------
// Change notification
// ---------------------------------------------------------------------------

/// What a successful `set_selection` did.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub field: Field,
    pub previous: SelectionValue,
    pub current: SelectionValue,
    /// Indices of items that went from hidden to visible.
    pub shown: Vec<usize>,
    /// Indices of items that went from visible to hidden.
    pub hidden: Vec<usize>,
    /// Stats before the change (for animating counters).
    pub previous_stats: AggregateStats,
}

impl SelectionChange {
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Receives store notifications.  Called synchronously, once per
/// interested subscriber, in subscription order.
pub trait SelectionObserver {
    fn on_selection_changed(
        &mut self,
        subscriber: ControllerId,
        change: &SelectionChange,
        store: &ViewStateStore,
    );
}

/// Observer that ignores every notification.
pub struct NoObserver;

impl SelectionObserver for NoObserver {
    fn on_selection_changed(&mut self, _: ControllerId, _: &SelectionChange, _: &ViewStateStore) {}
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

pub struct ViewStateStore {
    selection: Selection,
    items: Vec<Item>,
    /// Position of each item among items of the same kind.
    ordinals: Vec<usize>,
    visible: Vec<bool>,
    stats: AggregateStats,
    project_tags: Vec<String>,
    skill_tags: Vec<String>,
    testimonial_count: usize,
    subscriptions: heapless::Vec<(ControllerId, FieldSet), MAX_SUBSCRIBERS>,
}

impl ViewStateStore {
    /// Build the store from the page's items and the startup selection.
    pub fn new(document: Document, selection: Selection) -> Self {
        let items = document.items;

        let mut counters = [0usize; 3];
        let ordinals = items
            .iter()
            .map(|item| {
                let slot = &mut counters[item.kind as usize];
                let ordinal = *slot;
                *slot += 1;
                ordinal
            })
            .collect();

        let project_tags = collect_tags(&items, ItemKind::Project);
        let skill_tags = collect_tags(&items, ItemKind::Skill);
        let testimonial_count = items.iter().filter(|i| i.kind == ItemKind::Testimonial).count();

        let mut store = Self {
            selection,
            items,
            ordinals,
            visible: Vec::new(),
            stats: AggregateStats::default(),
            project_tags,
            skill_tags,
            testimonial_count,
            subscriptions: heapless::Vec::new(),
        };
        store.visible = store.compute_visibility();
        store.stats = AggregateStats::compute(&store.items, &store.visible);
        info!(
            "Store: {} items ({} testimonials), selection {:?}",
            store.items.len(),
            store.testimonial_count,
            store.selection
        );
        store
    }

    // ── Subscriptions ─────────────────────────────────────────

    /// Register interest in `fields`.  Returns `false` if the table is full.
    pub fn subscribe(&mut self, id: ControllerId, fields: FieldSet) -> bool {
        if self.subscriptions.push((id, fields)).is_err() {
            warn!("Store: subscription table full, {:?} not subscribed", id);
            return false;
        }
        true
    }

    // ── Writes ────────────────────────────────────────────────

    /// Validate and apply one selection, recompute derived state and
    /// notify subscribers of `field`.
    ///
    /// On failure nothing changes and no one is notified.
    pub fn set_selection(
        &mut self,
        field: Field,
        value: SelectionValue,
        observer: &mut dyn SelectionObserver,
    ) -> Result<SelectionChange> {
        if !self.accepts(field, &value) {
            return Err(Error::InvalidSelection { field });
        }

        let previous = self.selection.get(field);
        if !self.selection.put(field, value) {
            return Err(Error::InvalidSelection { field });
        }
        let current = self.selection.get(field);

        let mut shown = Vec::new();
        let mut hidden = Vec::new();
        for (idx, item) in self.items.iter().enumerate() {
            if item.kind.driven_by() != field {
                continue;
            }
            let now = items::is_visible(item, self.ordinals[idx], &self.selection);
            match (self.visible[idx], now) {
                (false, true) => shown.push(idx),
                (true, false) => hidden.push(idx),
                _ => {}
            }
            self.visible[idx] = now;
        }

        let previous_stats = self.stats;
        self.stats = AggregateStats::compute(&self.items, &self.visible);

        info!("Store: {} {} -> {}", field, previous, current);
        debug!("Store: +{} -{} visible", shown.len(), hidden.len());

        let change = SelectionChange {
            field,
            previous,
            current,
            shown,
            hidden,
            previous_stats,
        };
        self.notify(&change, observer);
        Ok(change)
    }

    // ── Reads ─────────────────────────────────────────────────

    pub fn get_selection(&self, field: Field) -> SelectionValue {
        self.selection.get(field)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(false)
    }

    /// Current visibility flags, parallel to [`items`](Self::items).
    pub fn visible_set(&self) -> &[bool] {
        &self.visible
    }

    /// Ids of visible items of one kind, in document order.
    pub fn visible_ids(&self, kind: ItemKind) -> Vec<&str> {
        self.items
            .iter()
            .zip(&self.visible)
            .filter(|(i, v)| i.kind == kind && **v)
            .map(|(i, _)| i.id.as_str())
            .collect()
    }

    /// Recompute visibility from the current selection without storing it.
    pub fn compute_visibility(&self) -> Vec<bool> {
        self.items
            .iter()
            .zip(&self.ordinals)
            .map(|(item, ordinal)| items::is_visible(item, *ordinal, &self.selection))
            .collect()
    }

    pub fn testimonial_count(&self) -> usize {
        self.testimonial_count
    }

    /// Tags a filter of `kind` may select (besides `"all"`).
    pub fn tags(&self, kind: ItemKind) -> &[String] {
        match kind {
            ItemKind::Project => &self.project_tags,
            ItemKind::Skill => &self.skill_tags,
            ItemKind::Testimonial => &[],
        }
    }

    /// Whether `value` lies in `field`'s domain.
    pub fn accepts(&self, field: Field, value: &SelectionValue) -> bool {
        match (field, value) {
            (Field::ProjectFilter, SelectionValue::Filter(f)) => self.filter_known(f, ItemKind::Project),
            (Field::SkillCategory, SelectionValue::Filter(f)) => self.filter_known(f, ItemKind::Skill),
            (Field::TestimonialIndex, SelectionValue::Index(i)) => *i < self.testimonial_count,
            (Field::Theme, SelectionValue::Theme(_))
            | (Field::ViewportMode, SelectionValue::Viewport(_)) => true,
            _ => false,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn filter_known(&self, filter: &Filter, kind: ItemKind) -> bool {
        match filter {
            Filter::All => true,
            Filter::Tag(t) => self.tags(kind).iter().any(|known| known == t),
        }
    }

    fn notify(&self, change: &SelectionChange, observer: &mut dyn SelectionObserver) {
        for (id, fields) in &self.subscriptions {
            if fields.contains(change.field) {
                observer.on_selection_changed(*id, change, self);
            }
        }
    }
}

fn collect_tags(items: &[Item], kind: ItemKind) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in items.iter().filter(|i| i.kind == kind).flat_map(|i| &i.tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
