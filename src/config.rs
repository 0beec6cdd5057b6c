//! Page configuration parameters
//!
//! All tunable parameters for the portfolio page.  The three historical
//! page variants differ only in their [`Features`] block.  Values can be
//! supplied as JSON by the host page; missing fields take defaults.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Core page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Which widgets and effects this page variant carries.
    pub features: Features,
    /// Development mode: invalid selections surface as errors instead of
    /// being logged and ignored.
    pub strict_selection: bool,
    /// Viewport width (logical px) at or below which the page is mobile.
    pub breakpoint_px: u32,
    /// Height of the fixed navbar; in-page anchors land this far above
    /// their target.
    pub nav_offset_px: u32,
    /// Durable storage key for the theme preference.
    pub theme_storage_key: String,
    /// Seed for every random choice (progress steps, stagger, scenes).
    pub rng_seed: u64,

    pub timing: Timing,
    pub preloader: PreloaderConfig,
    pub typewriter: TypewriterConfig,
    pub easter_eggs: EasterEggConfig,
    pub particles: ParticleConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,

    /// Demo catalogue keyed by `data-demo` id.
    pub demos: BTreeMap<String, DemoEntry>,
    /// Certificate display titles keyed by file name.
    pub certificate_titles: BTreeMap<String, String>,
}

/// Feature switches replacing the copy-pasted page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub preloader: bool,
    pub cursor: bool,
    pub particles: bool,
    pub typewriter: bool,
    pub testimonials: bool,
    pub easter_eggs: bool,
}

/// Presentation timings (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Hidden items stay in layout this long while fading out.
    pub fade_out_ms: u64,
    /// Delay before asking the reveal library to re-scan after a filter.
    pub reveal_refresh_ms: u64,
    /// Counter animation window.
    pub counter_ms: u64,
    /// Animation frame period on the logical clock.
    pub frame_interval_ms: u64,
    pub carousel_interval_ms: u64,
    pub resize_debounce_ms: u64,
    pub theme_pulse_ms: u64,
    pub notification_ms: u64,
    pub success_message_ms: u64,
    pub skill_stagger_min_ms: u64,
    pub skill_stagger_max_ms: u64,
    pub skill_glow_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    pub tick_ms: u64,
    /// Upper bound (exclusive) of one random progress step, in percent.
    pub max_step_percent: f64,
    /// Delay between window load and the fade-out start.
    pub hide_delay_ms: u64,
    /// Fade-out duration before removal.
    pub removal_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
    pub start_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasterEggConfig {
    pub logo_clicks: u8,
    pub logo_window_ms: u64,
    pub rainbow_ms: u64,
    pub party_ms: u64,
    pub confetti_count: usize,
    pub confetti_ms: u64,
    pub confetti_colors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub shapes: usize,
    pub dark_tint: u32,
    pub light_tint: u32,
    /// Fraction of the remaining distance the camera covers per frame.
    pub camera_follow_rate: f64,
    /// Fraction of the remaining distance the cursor follower covers per frame.
    pub cursor_follow_rate: f64,
}

/// Configuration record handed to the scroll-reveal collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration_ms: u64,
    pub easing: String,
    pub once: bool,
    pub offset_px: u32,
}

/// Remote form endpoint and its field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub name_field: String,
    pub email_field: String,
    pub subject_field: String,
    pub message_field: String,
    /// Address used by the mail-link fallback.
    pub fallback_recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ── Defaults ──────────────────────────────────────────────────

impl Default for PortfolioConfig {
    fn default() -> Self {
        let mut demos = BTreeMap::new();
        demos.insert(
            "fire-robot".to_owned(),
            DemoEntry {
                title: "Fire Detection Robot Demo".to_owned(),
                description: "An autonomous robot that detects fire with multiple sensors \
                              and deploys water sprinklers."
                    .to_owned(),
                tags: ["Arduino Uno", "Flame Sensors", "Water Pump", "Wireless Control"]
                    .map(str::to_owned)
                    .to_vec(),
            },
        );

        let certificate_titles = [
            ("Dean's List Award (Level-3).jpg", "Dean's List Award - Level 3"),
            ("4. Creative IT Certificate.jpg", "Creative IT Institute Certificate"),
            ("7. OPSWAT CIP Certificate.png", "OPSWAT CIP Certificate"),
            ("Ratul Internship Certificate.png", "Professional Internship Certificate"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        Self {
            features: Features::default(),
            strict_selection: false,
            breakpoint_px: 768,
            nav_offset_px: 80,
            theme_storage_key: "theme-preference".to_owned(),
            rng_seed: 0x5EED,
            timing: Timing::default(),
            preloader: PreloaderConfig::default(),
            typewriter: TypewriterConfig::default(),
            easter_eggs: EasterEggConfig::default(),
            particles: ParticleConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            demos,
            certificate_titles,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            preloader: true,
            cursor: true,
            particles: true,
            typewriter: true,
            testimonials: true,
            easter_eggs: true,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fade_out_ms: 300,
            reveal_refresh_ms: 300,
            counter_ms: 1000,
            frame_interval_ms: 16, // ~60 fps
            carousel_interval_ms: 5000,
            resize_debounce_ms: 150,
            theme_pulse_ms: 150,
            notification_ms: 3000,
            success_message_ms: 5000,
            skill_stagger_min_ms: 100,
            skill_stagger_max_ms: 400,
            skill_glow_ms: 1000,
        }
    }
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            max_step_percent: 15.0,
            hide_delay_ms: 1000,
            removal_ms: 500,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            roles: [
                "IoT Engineer",
                "Robotics Engineer",
                "Web Developer",
                "AI Enthusiast",
                "Tech Innovator",
            ]
            .map(str::to_owned)
            .to_vec(),
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
            start_delay_ms: 1000,
        }
    }
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            logo_clicks: 3,
            logo_window_ms: 1000,
            rainbow_ms: 2000,
            party_ms: 5000,
            confetti_count: 50,
            confetti_ms: 3000,
            confetti_colors: ["#6366f1", "#8b5cf6", "#06d6a0", "#f59e0b", "#ef4444"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            shapes: 15,
            dark_tint: 0x6366f1,
            light_tint: 0x3b82f6,
            camera_follow_rate: 0.05,
            cursor_follow_rate: 0.2,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: "ease-in-out".to_owned(),
            once: true,
            offset_px: 100,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://docs.google.com/forms/u/0/d/e/FORM_ID/formResponse".to_owned(),
            name_field: "entry.166786655".to_owned(),
            email_field: "entry.101374180".to_owned(),
            subject_field: "entry.1647048671".to_owned(),
            message_field: "entry.779883203".to_owned(),
            fallback_recipient: "hello@example.com".to_owned(),
        }
    }
}

// ── Loading & validation ──────────────────────────────────────

/// A config field failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The `&'static str` names the field and the rule.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PortfolioConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing portfolio config")?;
        config.validate().context("validating portfolio config")?;
        Ok(config)
    }

    /// Reject values that would stall or spin the timer service.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if self.breakpoint_px == 0 {
            return Err(ConfigError::ValidationFailed("breakpoint_px must be > 0"));
        }
        if t.frame_interval_ms == 0 || t.counter_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "frame_interval_ms and counter_ms must be > 0",
            ));
        }
        if t.carousel_interval_ms == 0 || self.preloader.tick_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "repeating intervals must be > 0",
            ));
        }
        if t.skill_stagger_min_ms > t.skill_stagger_max_ms {
            return Err(ConfigError::ValidationFailed(
                "skill_stagger_min_ms must not exceed skill_stagger_max_ms",
            ));
        }
        if !(self.preloader.max_step_percent > 0.0) {
            return Err(ConfigError::ValidationFailed("max_step_percent must be > 0"));
        }
        if self.features.typewriter
            && (self.typewriter.roles.is_empty() || self.typewriter.roles.iter().any(String::is_empty))
        {
            return Err(ConfigError::ValidationFailed(
                "typewriter needs at least one non-empty role",
            ));
        }
        if self.features.easter_eggs && self.easter_eggs.confetti_colors.is_empty() {
            return Err(ConfigError::ValidationFailed("confetti_colors must not be empty"));
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::ValidationFailed("theme_storage_key must not be empty"));
        }
        Ok(())
    }
}
