#![forbid(unsafe_code)]

//! Frame delivery seam.
//!
//! A [`FrameSink`] physically presents frames (an SPI panel driver in
//! production, a recording buffer in tests). It is a single-writer
//! resource: exactly one scroll controller owns it at any time, and the
//! runtime hands it from controller to controller by move.
//!
//! Delivery failures are recoverable by default. The controller logs
//! and keeps going so a transient bus hiccup self-heals on the next
//! frame; only a long failure streak is treated as permanent.

use std::fmt;
use std::io;

use marquee_render::Frame;

/// Accepts one rendered frame for physical display.
pub trait FrameSink {
    /// Present `frame`. Failures are non-fatal to the scroll loop.
    fn deliver(&mut self, frame: &Frame) -> Result<(), SinkError>;
}

/// Frame delivery errors.
#[derive(Debug)]
pub enum SinkError {
    /// I/O failure on the underlying device.
    Io(io::Error),
    /// Bus-level failure reported by the panel driver.
    Bus(String),
    /// The display is no longer attached.
    Disconnected,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "sink i/o error: {err}"),
            Self::Bus(msg) => write!(f, "display bus error: {msg}"),
            Self::Disconnected => write!(f, "display disconnected"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
