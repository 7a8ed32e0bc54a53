//! Marquee configuration system
//!
//! This crate provides centralized configuration for the Marquee runtime,
//! loading tuning values from `marquee.toml` as an alternative to hardcoded
//! constants. Every value has a documented default matching the page's
//! shipped behavior, so a missing or partial file is never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for the Marquee runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Scroll-reveal animation settings.
    pub reveal: RevealConfig,
    /// Navbar and anchor-scroll settings.
    pub nav: NavConfig,
    /// Hero stat counter settings.
    pub counter: CounterConfig,
    /// Decorative cursor-trail settings.
    pub trail: TrailConfig,
}

/// Scroll-reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Base transition duration in milliseconds.
    pub duration_ms: u32,
    /// Delay between staggered children in milliseconds.
    pub stagger_interval_ms: u32,
    /// Visible fraction at which an element counts as entered.
    pub threshold: f64,
    /// Pixels the detection region's lower boundary is pulled inward, so
    /// entries fire slightly before the element fully clears the viewport.
    pub bottom_margin_px: f64,
    /// Cubic-bezier control points for the reveal curve.
    pub easing: [f32; 4],
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            stagger_interval_ms: 100,
            threshold: 0.1,
            bottom_margin_px: 60.0,
            // Smooth deceleration curve
            easing: [0.22, 1.0, 0.36, 1.0],
        }
    }
}

/// Navbar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which the navbar gains its `scrolled` class.
    pub scrolled_after_px: f64,
    /// A section whose top is at or above this viewport offset owns the
    /// active nav link.
    pub active_link_offset_px: f64,
    /// Fixed-header allowance subtracted from anchor-scroll targets.
    pub anchor_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: 60.0,
            active_link_offset_px: 120.0,
            anchor_offset_px: 80.0,
        }
    }
}

/// Hero stat counter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Count-up duration in milliseconds.
    pub duration_ms: u32,
    /// Start offset between counters in a group, in milliseconds.
    pub group_stagger_ms: u32,
    /// Visible fraction of the stats section that triggers the count-up.
    pub trigger_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            group_stagger_ms: 200,
            trigger_threshold: 0.5,
        }
    }
}

/// Cursor-trail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Master switch for the effect.
    pub enabled: bool,
    /// Probability that a pointer move spawns a dot.
    pub spawn_probability: f64,
    /// Dot fade-out time in milliseconds.
    pub lifetime_ms: u32,
    /// Dot diameter in pixels.
    pub dot_size_px: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_probability: 0.15,
            lifetime_ms: 800,
            dot_size_px: 4.0,
        }
    }
}

impl MarqueeConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `marquee.toml` in the current directory, or
    /// return defaults if the file doesn't exist or doesn't parse.
    pub fn load_or_default() -> Self {
        Self::load_from_file("marquee.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over file values, allowing
    /// temporary overrides without editing the config.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("MARQUEE_REVEAL_DURATION_MS") {
            if let Ok(ms) = val.parse::<u32>() {
                self.reveal.duration_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("MARQUEE_REVEAL_THRESHOLD") {
            if let Ok(t) = val.parse::<f64>() {
                self.reveal.threshold = t.clamp(0.0, 1.0);
            }
        }
        if let Ok(val) = std::env::var("MARQUEE_TRAIL") {
            self.trail.enabled = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
