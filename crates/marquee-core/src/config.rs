#![forbid(unsafe_code)]

//! Display configuration and per-submission overrides.
//!
//! [`DisplayConfig`] is fixed for the lifetime of one scroll controller:
//! the runtime merges any [`ConfigOverrides`] into the process defaults,
//! validates the result, and hands the copy to the controller it spawns.
//! Nothing mutates a config while a controller is running.
//!
//! The scroll cadence defaults (`scroll_speed`, `frame_interval`) are
//! tuning knobs, not load-bearing constants; correctness must not depend
//! on their specific values.

use std::fmt;
use std::time::Duration;

use crate::color::Rgb;

/// Immutable display settings for one scroll controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Glyph rendering size in pixels, passed through to the font backend.
    pub font_size: u32,
    /// Pixels the text advances per frame. Must be at least 1.
    pub scroll_speed: u32,
    /// Delay between frames.
    pub frame_interval: Duration,
    /// Extra pixels between lines, on top of the font line height.
    pub line_spacing: u32,
    /// Horizontal inset on each side of the viewport.
    pub margin: u32,
    /// Optional grapheme cap per line, in addition to the pixel budget.
    pub max_chars_per_line: Option<usize>,
    /// Text color.
    pub foreground: Rgb,
    /// Fill color behind the text.
    pub background: Rgb,
}

impl Default for DisplayConfig {
    /// Defaults sized for a 320x240 landscape panel.
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            font_size: 28,
            scroll_speed: 2,
            frame_interval: Duration::from_millis(40),
            line_spacing: 6,
            margin: 10,
            max_chars_per_line: None,
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

impl DisplayConfig {
    /// Horizontal pixel budget available to a wrapped line.
    ///
    /// Never returns 0, so wrapping stays total even for degenerate
    /// margin/width combinations.
    pub fn wrap_budget_px(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin).max(1)
    }

    /// Check that the config can drive a controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.scroll_speed == 0 {
            return Err(ConfigError::ZeroScrollSpeed);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if 2 * self.margin >= self.width {
            return Err(ConfigError::MarginTooWide {
                margin: self.margin,
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Per-submission configuration overrides.
///
/// Every field is optional; unset fields keep the process defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverrides {
    pub font_size: Option<u32>,
    pub scroll_speed: Option<u32>,
    pub frame_interval_ms: Option<u64>,
    pub max_chars_per_line: Option<usize>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl ConfigOverrides {
    /// Merge these overrides into `base`, producing a new config.
    pub fn apply(&self, base: &DisplayConfig) -> DisplayConfig {
        let mut cfg = base.clone();
        if let Some(size) = self.font_size {
            cfg.font_size = size;
        }
        if let Some(speed) = self.scroll_speed {
            cfg.scroll_speed = speed;
        }
        if let Some(ms) = self.frame_interval_ms {
            cfg.frame_interval = Duration::from_millis(ms);
        }
        if let Some(chars) = self.max_chars_per_line {
            cfg.max_chars_per_line = Some(chars);
        }
        if let Some(fg) = self.foreground {
            cfg.foreground = fg;
        }
        if let Some(bg) = self.background {
            cfg.background = bg;
        }
        cfg
    }
}

/// Errors from [`DisplayConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is 0.
    ZeroViewport { width: u32, height: u32 },
    /// A scroll speed of 0 would never advance the text.
    ZeroScrollSpeed,
    /// A zero frame interval would spin without a suspension point.
    ZeroFrameInterval,
    /// Margins consume the whole viewport width.
    MarginTooWide { margin: u32, width: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroViewport { width, height } => {
                write!(f, "viewport must be non-empty, got {width}x{height}")
            }
            Self::ZeroScrollSpeed => write!(f, "scroll speed must be at least 1 px per frame"),
            Self::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
            Self::MarginTooWide { margin, width } => {
                write!(f, "margin {margin} leaves no room in width {width}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(DisplayConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_wrap_budget_subtracts_margins() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.wrap_budget_px(), 300);
    }

    #[test]
    fn wrap_budget_never_zero() {
        let cfg = DisplayConfig {
            width: 10,
            margin: 20,
            ..DisplayConfig::default()
        };
        assert_eq!(cfg.wrap_budget_px(), 1);
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        let base = DisplayConfig::default();

        let cfg = DisplayConfig { width: 0, ..base.clone() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroViewport { .. })));

        let cfg = DisplayConfig { scroll_speed: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroScrollSpeed));

        let cfg = DisplayConfig {
            frame_interval: Duration::ZERO,
            ..base.clone()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFrameInterval));

        let cfg = DisplayConfig {
            margin: 160,
            ..base
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::MarginTooWide { .. })));
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let base = DisplayConfig::default();
        assert_eq!(ConfigOverrides::default().apply(&base), base);
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let base = DisplayConfig::default();
        let overrides = ConfigOverrides {
            scroll_speed: Some(4),
            foreground: Some(Rgb::new(255, 0, 0)),
            ..ConfigOverrides::default()
        };
        let cfg = overrides.apply(&base);
        assert_eq!(cfg.scroll_speed, 4);
        assert_eq!(cfg.foreground, Rgb::new(255, 0, 0));
        assert_eq!(cfg.width, base.width);
        assert_eq!(cfg.frame_interval, base.frame_interval);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn overrides_deserialize_from_partial_json() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r##"{"frame_interval_ms": 25, "background": "#003366"}"##)
                .unwrap();
        assert_eq!(overrides.frame_interval_ms, Some(25));
        assert_eq!(overrides.background, Some(Rgb::new(0, 0x33, 0x66)));
        assert_eq!(overrides.font_size, None);
    }
}
