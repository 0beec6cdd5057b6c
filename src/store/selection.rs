//! Selection fields and their typed values.
//!
//! Exactly one value per field is live at any time.  Values are validated
//! by the store against each field's domain before they land here.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field identity
// ---------------------------------------------------------------------------

/// The mutually-exclusive UI choices held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Field {
    ProjectFilter = 0,
    SkillCategory = 1,
    TestimonialIndex = 2,
    Theme = 3,
    ViewportMode = 4,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ProjectFilter,
        Field::SkillCategory,
        Field::TestimonialIndex,
        Field::Theme,
        Field::ViewportMode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ProjectFilter => "projectFilter",
            Self::SkillCategory => "skillCategory",
            Self::TestimonialIndex => "testimonialIndex",
            Self::Theme => "theme",
            Self::ViewportMode => "viewportMode",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitmask of fields a subscriber cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    pub const EMPTY: FieldSet = FieldSet(0);
    pub const ALL: FieldSet = FieldSet(0b1_1111);

    pub fn of(fields: &[Field]) -> Self {
        Self(fields.iter().fold(0, |acc, f| acc | f.bit()))
    }

    pub const fn single(field: Field) -> Self {
        Self(field.bit())
    }

    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }
}

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

/// A tag filter: either everything, or items carrying one tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

impl Filter {
    /// Parse the DOM attribute form (`"all"` or a tag name).
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Tag(raw.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Tag(t) => t,
        }
    }

    /// `tag == "all" OR tag ∈ tags`.
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(t) => tags.iter().any(|c| c == t),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour scheme.  Persisted under a fixed storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout mode derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// Widths at or below the breakpoint are mobile.
    pub const fn from_width(width: u32, breakpoint_px: u32) -> Self {
        if width <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        })
    }
}

/// A value for any field.  The store rejects values whose kind does not
/// match the target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Filter(Filter),
    Index(usize),
    Theme(Theme),
    Viewport(ViewportMode),
}

impl fmt::Display for SelectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(v) => write!(f, "{v}"),
            Self::Index(i) => write!(f, "{i}"),
            Self::Theme(t) => write!(f, "{t}"),
            Self::Viewport(m) => write!(f, "{m}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection record
// ---------------------------------------------------------------------------

/// The full set of live selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub project_filter: Filter,
    pub skill_category: Filter,
    pub testimonial_index: usize,
    pub theme: Theme,
    pub viewport_mode: ViewportMode,
}

impl Selection {
    /// Startup defaults: `"all"`, `"all"`, 0, plus the persisted theme and
    /// the viewport-derived mode.
    pub fn new(theme: Theme, viewport_mode: ViewportMode) -> Self {
        Self {
            project_filter: Filter::All,
            skill_category: Filter::All,
            testimonial_index: 0,
            theme,
            viewport_mode,
        }
    }

    pub fn get(&self, field: Field) -> SelectionValue {
        match field {
            Field::ProjectFilter => SelectionValue::Filter(self.project_filter.clone()),
            Field::SkillCategory => SelectionValue::Filter(self.skill_category.clone()),
            Field::TestimonialIndex => SelectionValue::Index(self.testimonial_index),
            Field::Theme => SelectionValue::Theme(self.theme),
            Field::ViewportMode => SelectionValue::Viewport(self.viewport_mode),
        }
    }

    /// Write a value whose kind has already been checked.  Returns `false`
    /// (and writes nothing) on a kind mismatch.
    pub(super) fn put(&mut self, field: Field, value: SelectionValue) -> bool {
        match (field, value) {
            (Field::ProjectFilter, SelectionValue::Filter(v)) => self.project_filter = v,
            (Field::SkillCategory, SelectionValue::Filter(v)) => self.skill_category = v,
            (Field::TestimonialIndex, SelectionValue::Index(i)) => self.testimonial_index = i,
            (Field::Theme, SelectionValue::Theme(t)) => self.theme = t,
            (Field::ViewportMode, SelectionValue::Viewport(m)) => self.viewport_mode = m,
            _ => return false,
        }
        true
    }
}
