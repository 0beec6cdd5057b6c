//! Page items: project cards, skill cards and testimonials.
//!
//! Items are read once from the rendered document and never change for
//! the session.  Only their derived `visible` flag (held by the store)
//! moves with the selection.

use serde::{Deserialize, Serialize};

use super::selection::{Field, Selection};

/// Which widget an item belongs to.  Decides which selection field its
/// visibility depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Skill,
    Testimonial,
}

impl ItemKind {
    /// The single selection field this kind's visibility reads.
    pub const fn driven_by(self) -> Field {
        match self {
            Self::Project => Field::ProjectFilter,
            Self::Skill => Field::SkillCategory,
            Self::Testimonial => Field::TestimonialIndex,
        }
    }
}

/// Numeric attributes carried by skill cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Bar fill width, 0–100.
    pub proficiency: Option<f64>,
    /// Years of experience.
    pub experience_years: Option<f64>,
    /// Marked as a specialty (`featured` card).
    pub featured: bool,
}

/// One immutable page item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metrics: Metrics,
}

impl Item {
    pub fn project(id: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_owned(),
            kind: ItemKind::Project,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            metrics: Metrics::default(),
        }
    }

    pub fn skill(id: &str, category: &str, proficiency: f64, experience_years: f64) -> Self {
        Self {
            id: id.to_owned(),
            kind: ItemKind::Skill,
            tags: vec![category.to_owned()],
            metrics: Metrics {
                proficiency: Some(proficiency),
                experience_years: Some(experience_years),
                featured: false,
            },
        }
    }

    pub fn testimonial(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            kind: ItemKind::Testimonial,
            tags: Vec::new(),
            metrics: Metrics::default(),
        }
    }

    #[must_use]
    pub fn featured(mut self) -> Self {
        self.metrics.featured = true;
        self
    }
}

/// Visibility as a pure function of the item, its position among items
/// of the same kind, and the selection.
pub fn is_visible(item: &Item, ordinal: usize, selection: &Selection) -> bool {
    match item.kind {
        ItemKind::Project => selection.project_filter.matches(&item.tags),
        ItemKind::Skill => selection.skill_category.matches(&item.tags),
        ItemKind::Testimonial => ordinal == selection.testimonial_index,
    }
}

/// Items as harvested from the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }
}
