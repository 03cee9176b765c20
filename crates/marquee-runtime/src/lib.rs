#![forbid(unsafe_code)]

//! Scroll runtime for Marquee: controllers, cancellation, and sessions.
//!
//! # Role in Marquee
//! `marquee-runtime` owns every concurrency concern of the engine. A
//! [`SessionManager`] accepts text submissions, and for each one runs a
//! scroll controller on a dedicated thread that renders successive
//! offsets and delivers frames to a [`FrameSink`] at a fixed cadence.
//!
//! # Guarantees
//! - At most one controller runs at any instant: a new submission
//!   cancels the previous controller and blocks until it has fully
//!   terminated before starting its own.
//! - The sink is a single-writer resource, enforced by move semantics:
//!   the controller thread owns it and returns it on join.
//! - Cancellation is cooperative and observed only at the per-frame
//!   sleep; a frame in flight is always rendered and delivered whole.
//! - Transient delivery failures are logged and survived; only a long
//!   failure streak terminates a controller, and that surfaces on the
//!   next submission.
//!
//! # How it fits in the system
//! The surrounding transport shell (an HTTP handler on the Pi) calls
//! [`SessionManager::submit`] per user submission and `shutdown` on
//! process exit. Layout comes from `marquee-text`, frames from
//! `marquee-render`.

/// Cooperative cancellation primitive.
pub mod cancel;
/// Scroll controller state machine.
pub mod scroll;
/// Session management.
pub mod session;
/// Frame delivery seam.
pub mod sink;

pub use cancel::{CancelSignal, CancelTrigger, cancel_pair};
pub use scroll::{ControllerOutcome, ControllerState, MAX_SINK_FAILURES, advance_offset};
pub use session::{SessionId, SessionManager, SessionStatus, SubmissionResult, SubmitError};
pub use sink::{FrameSink, SinkError};
