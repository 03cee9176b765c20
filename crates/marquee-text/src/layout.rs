#![forbid(unsafe_code)]

//! Text layout: wrap, measure, and pre-rasterize a submission.
//!
//! A [`TextLayout`] is built once per submission and is immutable
//! afterwards. Each non-blank line is rasterized here, so the per-frame
//! renderer works on plain data and stays a pure function.

use marquee_core::DisplayConfig;

use crate::font::{FontBackend, LineRaster};
use crate::wrap::{WrapLimits, wrap_line};

/// One laid-out display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    /// The wrapped text of this line.
    pub text: String,
    /// Measured pixel width, used for horizontal centering.
    pub width: u32,
    /// Coverage raster; `None` for blank lines.
    pub raster: Option<LineRaster>,
}

impl LayoutLine {
    fn blank() -> Self {
        Self {
            text: String::new(),
            width: 0,
            raster: None,
        }
    }
}

/// An ordered sequence of display lines with uniform line height.
///
/// Owned exclusively by the scroll controller created for the same
/// submission; never shared across controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    lines: Vec<LayoutLine>,
    line_height: u32,
    total_height: u32,
}

impl TextLayout {
    /// The laid-out lines, top to bottom.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Rendered height of each line, including line spacing.
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Total rendered height of the layout in pixels.
    ///
    /// Always at least one line height: empty input lays out as a
    /// single blank line.
    pub fn total_height(&self) -> u32 {
        self.total_height
    }
}

/// Lay out `text` for the given display.
///
/// Splits on explicit newlines first, preserving blank source lines as
/// zero-content lines, then word-wraps each source line to the config's
/// pixel budget (and optional grapheme cap). Total over all inputs.
pub fn layout(text: &str, config: &DisplayConfig, font: &impl FontBackend) -> TextLayout {
    let limits = WrapLimits {
        max_px: config.wrap_budget_px(),
        max_graphemes: config.max_chars_per_line,
    };
    let measure = |s: &str| font.measure(s, config.font_size);

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(LayoutLine::blank());
            continue;
        }
        for wrapped in wrap_line(raw, limits, &measure) {
            if wrapped.is_empty() {
                lines.push(LayoutLine::blank());
                continue;
            }
            let raster = font.rasterize(&wrapped, config.font_size);
            lines.push(LayoutLine {
                width: raster.width,
                text: wrapped,
                raster: Some(raster),
            });
        }
    }

    let line_height = font.line_height(config.font_size) + config.line_spacing;
    let total_height = lines.len() as u32 * line_height;
    tracing::trace!(
        lines = lines.len(),
        line_height,
        total_height,
        "laid out submission"
    );
    TextLayout {
        lines,
        line_height,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_backend::FixedGrid;

    fn cfg() -> DisplayConfig {
        DisplayConfig {
            font_size: 16,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn empty_input_is_one_blank_line() {
        let layout = layout("", &cfg(), &FixedGrid);
        assert_eq!(layout.lines().len(), 1);
        assert_eq!(layout.lines()[0].text, "");
        assert!(layout.lines()[0].raster.is_none());
        assert_eq!(layout.total_height(), layout.line_height());
    }

    #[test]
    fn blank_source_lines_are_preserved() {
        let layout = layout("one\n\ntwo", &cfg(), &FixedGrid);
        let texts: Vec<&str> = layout.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "", "two"]);
        assert!(layout.lines()[1].raster.is_none());
    }

    #[test]
    fn line_height_includes_spacing() {
        let config = cfg();
        let layout = layout("x", &config, &FixedGrid);
        assert_eq!(
            layout.line_height(),
            FixedGrid.line_height(config.font_size) + config.line_spacing
        );
    }

    #[test]
    fn total_height_is_lines_times_line_height() {
        let layout = layout("a\nb\nc", &cfg(), &FixedGrid);
        assert_eq!(layout.total_height(), 3 * layout.line_height());
    }

    #[test]
    fn wraps_to_grapheme_cap() {
        let config = DisplayConfig {
            max_chars_per_line: Some(5),
            ..cfg()
        };
        let layout = layout("Hello World", &config, &FixedGrid);
        let texts: Vec<&str> = layout.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "World"]);
    }

    #[test]
    fn wraps_to_pixel_budget() {
        // Budget of 4 cells at font 16: cell width 8, budget 32 px.
        let config = DisplayConfig {
            width: 32 + 2 * 10,
            font_size: 16,
            ..cfg()
        };
        let layout = layout("ab cd ef", &config, &FixedGrid);
        let texts: Vec<&str> = layout.lines().iter().map(|l| l.text.as_str()).collect();
        // "ab cd" is 5 cells = 40 px, over budget.
        assert_eq!(texts, vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn line_width_matches_raster() {
        let layout = layout("hello", &cfg(), &FixedGrid);
        let line = &layout.lines()[0];
        let raster = line.raster.as_ref().unwrap();
        assert_eq!(line.width, raster.width);
        assert_eq!(line.width, FixedGrid.measure("hello", 16));
    }

    #[test]
    fn layout_is_idempotent() {
        let config = cfg();
        let a = layout("some text\nwith lines", &config, &FixedGrid);
        let b = layout("some text\nwith lines", &config, &FixedGrid);
        assert_eq!(a, b);
    }
}
