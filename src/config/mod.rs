// SPDX-License-Identifier: MPL-2.0
//! Gallery configuration, stored as a sectioned `gallery.toml`.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Mobile/desktop breakpoint
//! - `[gestures]` - Swipe threshold and settle animation
//! - `[slider]` - Thumb colors
//! - `[diagnostics]` - Activity log capacity
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use product_gallery::config::{self, GalleryConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gestures.swipe_threshold_px = Some(64.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::{Breakpoint, BufferCapacity, SettleDuration, SwipeThreshold};
use crate::error::Result;
use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "gallery.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Widest viewport (CSS px) that still uses the mobile carousel.
    #[serde(
        default = "default_mobile_max_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_max_width: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: default_mobile_max_width(),
        }
    }
}

/// Touch gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Horizontal distance a swipe must exceed to change slide.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Duration of the eased settle transition after a swipe.
    #[serde(
        default = "default_settle_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_duration_ms: Option<u32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            settle_duration_ms: default_settle_duration_ms(),
        }
    }
}

/// Desktop slider appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Thumb color at rest, as `#rrggbb`.
    #[serde(default = "default_thumb_color", skip_serializing_if = "Option::is_none")]
    pub thumb_color: Option<String>,

    /// Thumb color while dragged, as `#rrggbb`.
    #[serde(
        default = "default_thumb_active_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumb_active_color: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            thumb_color: default_thumb_color(),
            thumb_active_color: default_thumb_active_color(),
        }
    }
}

/// Activity diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of activity entries kept per gallery.
    #[serde(
        default = "default_activity_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            activity_capacity: default_activity_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Gallery configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub gestures: GestureConfig,

    #[serde(default)]
    pub slider: SliderConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl GalleryConfig {
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.layout
            .mobile_max_width
            .map_or_else(Breakpoint::default, Breakpoint::new)
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.gestures
            .swipe_threshold_px
            .map_or_else(SwipeThreshold::default, SwipeThreshold::new)
    }

    #[must_use]
    pub fn settle_duration(&self) -> SettleDuration {
        self.gestures
            .settle_duration_ms
            .map_or_else(SettleDuration::default, SettleDuration::new)
    }

    /// Thumb color at rest; unparseable values fall back to the default.
    #[must_use]
    pub fn thumb_color(&self) -> Color {
        self.slider
            .thumb_color
            .as_deref()
            .and_then(parse_hex_color)
            .or_else(|| parse_hex_color(DEFAULT_THUMB_COLOR))
            .unwrap_or(Color::BLACK)
    }

    /// Thumb color while dragged; unparseable values fall back to the default.
    #[must_use]
    pub fn thumb_active_color(&self) -> Color {
        self.slider
            .thumb_active_color
            .as_deref()
            .and_then(parse_hex_color)
            .or_else(|| parse_hex_color(DEFAULT_THUMB_ACTIVE_COLOR))
            .unwrap_or(Color::BLACK)
    }

    #[must_use]
    pub fn activity_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .activity_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into a color.
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_mobile_max_width() -> Option<u32> {
    Some(DEFAULT_MOBILE_MAX_WIDTH)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_settle_duration_ms() -> Option<u32> {
    Some(DEFAULT_SETTLE_DURATION_MS)
}

fn default_thumb_color() -> Option<String> {
    Some(DEFAULT_THUMB_COLOR.to_string())
}

fn default_thumb_active_color() -> Option<String> {
    Some(DEFAULT_THUMB_ACTIVE_COLOR.to_string())
}

fn default_activity_capacity() -> Option<usize> {
    Some(DEFAULT_ACTIVITY_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (GalleryConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (GalleryConfig, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default gallery config");
                    return (
                        GalleryConfig::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (GalleryConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<GalleryConfig> {
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &GalleryConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &GalleryConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &GalleryConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
