#![forbid(unsafe_code)]

//! Font backend trait and glyph coverage rasters.
//!
//! The engine never loads fonts itself. Measurement and rasterization
//! are supplied by an external backend (a TTF rasterizer on the Pi, a
//! fixed-advance grid in tests) through the [`FontBackend`] trait.
//!
//! # Contract
//! A backend must be deterministic: identical `(text, px)` inputs yield
//! identical measurements and rasters. Frame rendering purity depends on
//! this. `rasterize(text, px).width` must equal `measure(text, px)`.

/// An 8-bit coverage bitmap for one rendered line of text.
///
/// `coverage[y * width + x]` is the glyph alpha at `(x, y)`: 0 is fully
/// transparent, 255 fully opaque. The renderer blends the foreground
/// color over the frame with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRaster {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl LineRaster {
    /// An empty raster with the given dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; (width * height) as usize],
        }
    }

    /// Coverage at `(x, y)`; 0 outside the raster.
    #[inline]
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x < self.width && y < self.height {
            self.coverage[(y * self.width + x) as usize]
        } else {
            0
        }
    }
}

/// External text measurement and rasterization backend.
///
/// `px` is the glyph rendering size from
/// [`DisplayConfig::font_size`](marquee_core::DisplayConfig::font_size).
pub trait FontBackend {
    /// Rendered pixel width of `text` at size `px`.
    fn measure(&self, text: &str, px: u32) -> u32;

    /// Height of one rendered line at size `px`, excluding line spacing.
    fn line_height(&self, px: u32) -> u32;

    /// Rasterize `text` into a coverage bitmap at size `px`.
    fn rasterize(&self, text: &str, px: u32) -> LineRaster;
}

impl<B: FontBackend + ?Sized> FontBackend for &B {
    fn measure(&self, text: &str, px: u32) -> u32 {
        (**self).measure(text, px)
    }

    fn line_height(&self, px: u32) -> u32 {
        (**self).line_height(px)
    }

    fn rasterize(&self, text: &str, px: u32) -> LineRaster {
        (**self).rasterize(text, px)
    }
}
