#![forbid(unsafe_code)]

//! Scroll controller: the per-submission render loop.
//!
//! A controller is a three-state machine:
//!
//! ```text
//! Running ──(cancel observed at the frame sleep)──▶ Cancelling ──▶ Terminated
//!    └──(sink failure streak reaches MAX_SINK_FAILURES)─────────▶ Terminated
//! ```
//!
//! Each iteration renders the current offset, delivers the frame, then
//! advances the offset and parks on the cancel signal for one frame
//! interval. That park is the only suspension point: render and
//! delivery always run to completion for the frame in flight, so the
//! panel never shows a half-written frame.
//!
//! The loop has no natural end. Offsets decrease from the viewport
//! height to just past `-(total height)`, then wrap back, repeating
//! until cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use marquee_core::DisplayConfig;
use marquee_render::{Frame, render};
use marquee_text::TextLayout;

use crate::cancel::CancelSignal;
use crate::sink::{FrameSink, SinkError};

/// Consecutive delivery failures treated as a permanently unavailable
/// sink: one second of misses at the default 40 ms cadence.
pub const MAX_SINK_FAILURES: u32 = 25;

/// Observable controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Delivering frames.
    Running,
    /// Cancellation observed; tearing down.
    Cancelling,
    /// Fully stopped; no further frames will be delivered.
    Terminated,
}

/// Why a controller stopped.
#[derive(Debug)]
pub enum ControllerOutcome {
    /// Stopped in response to its cancel trigger.
    Cancelled,
    /// Gave up after [`MAX_SINK_FAILURES`] consecutive delivery errors.
    SinkFailed(SinkError),
}

/// Lock-free cell publishing a [`ControllerState`] across threads.
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(ControllerState::Running as u8))
    }

    pub(crate) fn set(&self, state: ControllerState) {
        self.0.store(state as u8, Ordering::Release);
    }

    pub(crate) fn get(&self) -> ControllerState {
        match self.0.load(Ordering::Acquire) {
            0 => ControllerState::Running,
            1 => ControllerState::Cancelling,
            _ => ControllerState::Terminated,
        }
    }
}

/// Advance the scroll offset by one frame step.
///
/// Offsets strictly decrease by `speed` until the layout has fully
/// scrolled off the top (`offset < -(total_height)`), then wrap back to
/// the starting position below the viewport's bottom edge.
pub fn advance_offset(offset: i32, speed: u32, total_height: u32, viewport_height: u32) -> i32 {
    let next = offset - speed as i32;
    if next < -(total_height as i32) {
        viewport_height as i32
    } else {
        next
    }
}

/// One run of the scroll state machine, tied to exactly one layout.
pub(crate) struct ScrollController<S: FrameSink> {
    layout: TextLayout,
    config: DisplayConfig,
    sink: S,
    cancel: CancelSignal,
    state: Arc<StateCell>,
    session: u64,
}

impl<S: FrameSink> ScrollController<S> {
    pub(crate) fn new(
        layout: TextLayout,
        config: DisplayConfig,
        sink: S,
        cancel: CancelSignal,
        state: Arc<StateCell>,
        session: u64,
    ) -> Self {
        Self {
            layout,
            config,
            sink,
            cancel,
            state,
            session,
        }
    }

    /// Run until cancelled or the sink fails permanently. Returns the
    /// sink so the session manager can hand it to the next controller.
    pub(crate) fn run(mut self) -> (S, ControllerOutcome) {
        let mut offset = self.config.height as i32;
        let mut failure_streak = 0u32;
        tracing::debug!(
            session = self.session,
            total_height = self.layout.total_height(),
            start_offset = offset,
            "scroll controller running"
        );

        loop {
            let frame = render(&self.layout, offset, &self.config);
            match self.sink.deliver(&frame) {
                Ok(()) => failure_streak = 0,
                Err(err) => {
                    failure_streak += 1;
                    tracing::warn!(
                        session = self.session,
                        streak = failure_streak,
                        %err,
                        "frame delivery failed, continuing"
                    );
                    if failure_streak >= MAX_SINK_FAILURES {
                        tracing::error!(
                            session = self.session,
                            "sink unavailable, stopping controller"
                        );
                        self.state.set(ControllerState::Terminated);
                        return (self.sink, ControllerOutcome::SinkFailed(err));
                    }
                }
            }

            offset = advance_offset(
                offset,
                self.config.scroll_speed,
                self.layout.total_height(),
                self.config.height,
            );

            if self.cancel.wait_timeout(self.config.frame_interval) {
                break;
            }
        }

        self.state.set(ControllerState::Cancelling);
        // Leave the panel blank rather than frozen on the old message.
        let blank = Frame::filled(self.config.width, self.config.height, self.config.background);
        if let Err(err) = self.sink.deliver(&blank) {
            tracing::debug!(session = self.session, %err, "teardown clear failed");
        }
        self.state.set(ControllerState::Terminated);
        tracing::debug!(session = self.session, "scroll controller terminated");
        (self.sink, ControllerOutcome::Cancelled)
    }
}
