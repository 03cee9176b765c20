#![forbid(unsafe_code)]

//! 24-bit RGB color with hex parsing and coverage blending.
//!
//! Frames are plain RGB888 grids; sinks that drive RGB565 panels convert
//! with [`Rgb::to_rgb565`] at delivery time. Glyph rasters carry 8-bit
//! coverage, so the renderer composites with [`Rgb::blend_over`].

use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style hex color: `#rrggbb` or `#rgb`, leading `#`
    /// optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = |b: u8| -> Result<u8, ColorParseError> {
            match b {
                b'0'..=b'9' => Ok(b - b'0'),
                b'a'..=b'f' => Ok(b - b'a' + 10),
                b'A'..=b'F' => Ok(b - b'A' + 10),
                _ => Err(ColorParseError::BadDigit(b as char)),
            }
        };
        let d = digits.as_bytes();
        match d.len() {
            6 => Ok(Rgb::new(
                hex(d[0])? << 4 | hex(d[1])?,
                hex(d[2])? << 4 | hex(d[3])?,
                hex(d[4])? << 4 | hex(d[5])?,
            )),
            3 => {
                let (r, g, b) = (hex(d[0])?, hex(d[1])?, hex(d[2])?);
                Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    /// Pack into the RGB565 wire format used by ST7789-class panels.
    #[inline]
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xf8) << 8) | ((self.g as u16 & 0xfc) << 3) | (self.b as u16 >> 3)
    }

    /// Composite `self` over `under` with 8-bit coverage.
    ///
    /// `coverage == 255` yields `self`, `coverage == 0` yields `under`.
    #[inline]
    pub fn blend_over(self, under: Rgb, coverage: u8) -> Rgb {
        match coverage {
            0 => under,
            255 => self,
            a => {
                let a = a as u16;
                let mix = |fg: u8, bg: u8| -> u8 {
                    ((fg as u16 * a + bg as u16 * (255 - a) + 127) / 255) as u8
                };
                Rgb::new(mix(self.r, under.r), mix(self.g, under.g), mix(self.b, under.b))
            }
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Errors from [`Rgb::from_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty (or just `#`).
    Empty,
    /// Digit count was neither 3 nor 6.
    BadLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    BadDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::BadLength(n) => write!(f, "expected 3 or 6 hex digits, got {n}"),
            Self::BadDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
