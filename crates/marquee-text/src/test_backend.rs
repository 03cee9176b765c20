#![forbid(unsafe_code)]

//! Deterministic fixed-advance font backend for tests.
//!
//! [`FixedGrid`] treats every grapheme as a solid block of cells: one
//! cell per display-width column, each cell `px / 2` pixels wide and
//! `px` tall. Whitespace advances without coverage. This makes expected
//! widths and pixel positions trivially computable in tests while still
//! exercising grapheme segmentation and wide characters.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::font::{FontBackend, LineRaster};

/// Fixed-advance block-glyph backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGrid;

impl FixedGrid {
    /// Pixel width of one display-width column at size `px`.
    pub fn cell_width(px: u32) -> u32 {
        (px / 2).max(1)
    }

    fn advance(grapheme: &str, px: u32) -> u32 {
        grapheme.width() as u32 * Self::cell_width(px)
    }
}

impl FontBackend for FixedGrid {
    fn measure(&self, text: &str, px: u32) -> u32 {
        text.graphemes(true).map(|g| Self::advance(g, px)).sum()
    }

    fn line_height(&self, px: u32) -> u32 {
        px
    }

    fn rasterize(&self, text: &str, px: u32) -> LineRaster {
        let width = self.measure(text, px);
        let height = self.line_height(px);
        let mut raster = LineRaster::blank(width, height);
        let mut x = 0u32;
        for grapheme in text.graphemes(true) {
            let advance = Self::advance(grapheme, px);
            if !grapheme.trim().is_empty() {
                for y in 0..height {
                    for dx in 0..advance {
                        raster.coverage[(y * width + x + dx) as usize] = 255;
                    }
                }
            }
            x += advance;
        }
        raster
    }
}
