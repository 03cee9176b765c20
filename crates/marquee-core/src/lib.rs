#![forbid(unsafe_code)]

//! Display configuration and color vocabulary for Marquee.
//!
//! # Role in Marquee
//! `marquee-core` is the shared vocabulary of the scrolling-text engine.
//! Layout, rendering, and the runtime all consume [`DisplayConfig`] and
//! [`Rgb`] from here so they can stay free of each other's concerns.
//!
//! # This crate provides
//! - [`DisplayConfig`] for the immutable per-controller display settings.
//! - [`ConfigOverrides`] for per-submission overrides with defaults.
//! - [`Rgb`] with hex parsing, RGB565 conversion, and coverage blending.
//!
//! # How it fits in the system
//! `marquee-text` reads wrap budgets and font sizes from the config,
//! `marquee-render` reads the viewport dimensions and colors, and
//! `marquee-runtime` copies one validated config into each scroll
//! controller it starts. Nothing here is mutated after validation.

/// Color type with hex parsing and blending.
pub mod color;
/// Display configuration and per-submission overrides.
pub mod config;

pub use color::{ColorParseError, Rgb};
pub use config::{ConfigError, ConfigOverrides, DisplayConfig};
