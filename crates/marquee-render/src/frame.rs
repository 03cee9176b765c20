#![forbid(unsafe_code)]

//! Fixed-size RGB pixel frame.
//!
//! A [`Frame`] matches the display's dimensions exactly and is the unit
//! of delivery to a `FrameSink`. Pixels are row-major RGB888; sinks for
//! RGB565 panels convert per pixel with [`Rgb::to_rgb565`] while
//! streaming the frame out.

use marquee_core::Rgb;
use marquee_text::LineRaster;

/// One complete pixel image at the display's fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Create a frame filled with `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`; `None` outside the frame.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Row-major pixel data, `width * height` entries.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Composite a coverage raster at `(x, y)` in `color`, clipping to
    /// the frame. Negative coordinates clip from the top/left.
    pub fn blit(&mut self, raster: &LineRaster, x: i32, y: i32, color: Rgb) {
        for ry in 0..raster.height {
            let fy = y + ry as i32;
            if fy < 0 {
                continue;
            }
            if fy >= self.height as i32 {
                break;
            }
            for rx in 0..raster.width {
                let fx = x + rx as i32;
                if fx < 0 || fx >= self.width as i32 {
                    continue;
                }
                let cov = raster.coverage_at(rx, ry);
                if cov == 0 {
                    continue;
                }
                let idx = (fy as u32 * self.width + fx as u32) as usize;
                self.pixels[idx] = color.blend_over(self.pixels[idx], cov);
            }
        }
    }
}
