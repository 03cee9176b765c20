#![forbid(unsafe_code)]

//! Text layout for Marquee: wrapping, measurement, and line rasters.
//!
//! # Role in Marquee
//! `marquee-text` is the layout engine. It turns raw submission text
//! into an immutable [`TextLayout`]: an ordered sequence of display
//! lines, each measured and pre-rasterized, plus the total rendered
//! height the scroll controller needs to know when a cycle completes.
//!
//! # This crate provides
//! - [`FontBackend`] — the external measurement/rasterization seam; the
//!   engine never loads fonts itself.
//! - [`wrap::wrap_line`] — greedy word wrap with grapheme-safe hard
//!   splits for overlong tokens.
//! - [`layout()`] — the total layout function (never fails, for any
//!   input).
//!
//! # How it fits in the system
//! The session manager calls [`layout()`] once per accepted submission
//! and moves the result into the scroll controller it spawns.
//! `marquee-render` then treats the layout as plain data, which keeps
//! per-frame rendering pure.

/// Font backend trait and coverage rasters.
pub mod font;
/// Text layout construction.
pub mod layout;
/// Deterministic fixed-advance backend for tests.
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_backend;
/// Word wrapping.
pub mod wrap;

pub use font::{FontBackend, LineRaster};
pub use layout::{LayoutLine, TextLayout, layout};
