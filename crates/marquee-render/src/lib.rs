#![forbid(unsafe_code)]

//! Render kernel for Marquee: pixel frames and the pure scroll renderer.
//!
//! # Role in Marquee
//! `marquee-render` is the deterministic rendering engine. It turns a
//! [`TextLayout`](marquee_text::TextLayout) and a vertical scroll offset
//! into one [`Frame`] of the display's fixed dimensions.
//!
//! # Primary responsibilities
//! - **Frame**: row-major RGB888 pixel grid with clipped coverage blits.
//! - **render()**: pure function of `(layout, offset, config)`; same
//!   inputs, bit-identical frame.
//!
//! # How it fits in the system
//! The scroll controller in `marquee-runtime` calls [`render()`] once
//! per frame and hands the result to its `FrameSink`. Because rendering
//! is pure and side-effect free, frame content is tested here without
//! any clock or hardware in the loop.

/// Pixel frame type.
pub mod frame;
/// The pure scroll-offset renderer.
pub mod renderer;

pub use frame::Frame;
pub use renderer::render;
