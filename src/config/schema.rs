//! Configuration schema types for `patterndex.toml`
//!
//! Defines the structure and validation rules for project configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Color;
use crate::radar::RadarStyle;

/// Largest accepted PNG scale factor.
pub const MAX_SCALE: u32 = 64;

/// Project metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required)
    pub name: String,
    /// Catalogue file or directory
    #[serde(default = "default_catalogue")]
    pub catalogue: PathBuf,
    /// Build output directory
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

fn default_catalogue() -> PathBuf {
    PathBuf::from("data/catalogue.json")
}

fn default_out() -> PathBuf {
    PathBuf::from("build")
}

/// Which artifacts `pdx render` writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Write `{slug}.svg`
    #[serde(default = "default_true")]
    pub svg: bool,
    /// Write `{slug}.png`
    #[serde(default)]
    pub png: bool,
    /// Pixels per canvas unit for PNG output
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Write `{slug}-radar.svg`
    #[serde(default = "default_true")]
    pub radar: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { svg: true, png: false, scale: default_scale(), radar: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_scale() -> u32 {
    1
}

/// Radar chart layout overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Hex color of guides, axes and labels
    #[serde(default = "default_guide_color")]
    pub guide_color: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            guide_color: default_guide_color(),
            radius: default_radius(),
            label_offset: default_label_offset(),
        }
    }
}

fn default_guide_color() -> String {
    "#8bac0f".to_string()
}

fn default_radius() -> f64 {
    80.0
}

fn default_label_offset() -> f64 {
    16.0
}

impl RadarConfig {
    /// Chart style with these overrides applied to the defaults.
    pub fn style(&self) -> RadarStyle {
        let defaults = RadarStyle::default();
        RadarStyle {
            radius: self.radius,
            label_offset: self.label_offset,
            guide: Color::from_hex(&self.guide_color).unwrap_or(defaults.guide),
            ..defaults
        }
    }
}

/// Complete `patterndex.toml` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatterndexConfig {
    /// Project metadata (required)
    pub project: ProjectConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub radar: RadarConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.scale")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "patterndex.toml: '{}' {}", self.field, self.message)
    }
}

impl PatterndexConfig {
    /// Validate the configuration and return every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: String| {
            errors.push(ConfigValidationError { field: field.to_string(), message });
        };

        if self.project.name.is_empty() {
            push("project.name", "must be a non-empty string".to_string());
        }

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            push("render.scale", format!("must be between 1 and {}", MAX_SCALE));
        }

        if !self.render.svg && !self.render.png && !self.render.radar {
            push("render", "disables every output".to_string());
        }

        if let Err(e) = Color::from_hex(&self.radar.guide_color) {
            push("radar.guide_color", format!("is not a hex color: {}", e));
        }

        if !(self.radar.radius.is_finite() && self.radar.radius > 0.0) {
            push("radar.radius", "must be a positive number".to_string());
        }

        if !(self.radar.label_offset.is_finite() && self.radar.label_offset >= 0.0) {
            push("radar.label_offset", "must be zero or positive".to_string());
        }

        // Labels must stay inside the fixed 200-unit view box.
        let half = RadarStyle::default().size / 2.0;
        if self.radar.radius + self.radar.label_offset > half {
            push("radar", format!("radius + label_offset must not exceed {}", half));
        }

        errors
    }
}
