//! Aggregate statistics over the visible item set.

use core::fmt;

use super::items::{Item, ItemKind};

/// Named metrics exposed by [`AggregateStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Count,
    AvgExperience,
    AvgProficiency,
    SpecialtyCount,
    VisibleProjects,
}

impl StatKey {
    pub const ALL: [StatKey; 5] = [
        StatKey::Count,
        StatKey::AvgExperience,
        StatKey::AvgProficiency,
        StatKey::SpecialtyCount,
        StatKey::VisibleProjects,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::AvgExperience => "avgExperience",
            Self::AvgProficiency => "avgProficiency",
            Self::SpecialtyCount => "specialtyCount",
            Self::VisibleProjects => "visibleProjects",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Shown with one decimal place rather than as an integer.
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::AvgExperience)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived, read-only summary.  Skill metrics cover visible skill cards;
/// `visible_projects` counts visible project cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateStats {
    pub count: usize,
    /// Mean years of experience, rounded to one decimal.
    pub avg_experience: f64,
    /// Mean proficiency, rounded to the nearest integer.
    pub avg_proficiency: f64,
    pub specialty_count: usize,
    pub visible_projects: usize,
}

impl AggregateStats {
    /// Recompute from scratch.  `visible[i]` belongs to `items[i]`.
    pub fn compute(items: &[Item], visible: &[bool]) -> Self {
        let mut stats = Self::default();
        let mut total_proficiency = 0.0;
        let mut total_experience = 0.0;

        for (item, _) in items.iter().zip(visible).filter(|(_, v)| **v) {
            match item.kind {
                ItemKind::Skill => {
                    stats.count += 1;
                    total_proficiency += item.metrics.proficiency.unwrap_or(0.0);
                    total_experience += item.metrics.experience_years.unwrap_or(0.0);
                    if item.metrics.featured {
                        stats.specialty_count += 1;
                    }
                }
                ItemKind::Project => stats.visible_projects += 1,
                ItemKind::Testimonial => {}
            }
        }

        if stats.count > 0 {
            let n = stats.count as f64;
            stats.avg_proficiency = (total_proficiency / n).round();
            stats.avg_experience = (total_experience / n * 10.0).round() / 10.0;
        }
        stats
    }

    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Count => self.count as f64,
            StatKey::AvgExperience => self.avg_experience,
            StatKey::AvgProficiency => self.avg_proficiency,
            StatKey::SpecialtyCount => self.specialty_count as f64,
            StatKey::VisibleProjects => self.visible_projects as f64,
        }
    }

    /// Lookup by metric name (`"avgProficiency"` etc.).
    pub fn metric(&self, name: &str) -> Option<f64> {
        StatKey::from_name(name).map(|k| self.get(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        StatKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}
