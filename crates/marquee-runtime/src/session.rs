#![forbid(unsafe_code)]

//! Session manager: the single point of mutable shared state.
//!
//! One [`SessionManager`] exists per display. Submissions serialize
//! through its session mutex: a new submission cancels the live
//! controller, blocks until it reports terminated, then starts its own
//! controller with the recovered sink. The sink is owned by the running
//! controller's thread and physically handed back through
//! `JoinHandle::join`, so two controllers can never write to it
//! concurrently.
//!
//! Transient sink errors stay inside the controller; only a permanent
//! failure (a full failure streak) surfaces here, as
//! [`SubmitError::SinkUnavailable`] on the next submission.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use marquee_core::{ConfigError, ConfigOverrides, DisplayConfig};
use marquee_text::{FontBackend, layout};

use crate::cancel::{CancelTrigger, cancel_pair};
use crate::scroll::{ControllerOutcome, ControllerState, ScrollController, StateCell};
use crate::sink::{FrameSink, SinkError};

/// Monotonic identifier for one accepted submission.
pub type SessionId = u64;

/// What `submit` reports once the new controller is scheduled.
///
/// Returned as soon as the controller thread is spawned; it does not
/// wait for the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// Identifier of the newly started session.
    pub session: SessionId,
    /// Number of display lines the text laid out into.
    pub lines: usize,
    /// Total rendered height of the layout in pixels.
    pub total_height: u32,
}

/// Errors surfaced by [`SessionManager::submit`].
#[derive(Debug)]
pub enum SubmitError {
    /// The merged configuration failed validation.
    InvalidConfig(ConfigError),
    /// The previous controller found the sink permanently unavailable.
    SinkUnavailable(SinkError),
    /// A controller thread panicked and took the sink with it.
    ControllerPanicked,
    /// The OS refused to spawn the controller thread.
    Spawn(io::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
            Self::SinkUnavailable(err) => write!(f, "display sink unavailable: {err}"),
            Self::ControllerPanicked => write!(f, "scroll controller panicked"),
            Self::Spawn(err) => write!(f, "failed to spawn controller thread: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::SinkUnavailable(err) => Some(err),
            Self::Spawn(err) => Some(err),
            Self::ControllerPanicked => None,
        }
    }
}

impl From<ConfigError> for SubmitError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

/// Snapshot of the manager's current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No controller is running; the sink is parked.
    Idle,
    /// A controller exists for `session` in the given state.
    Active {
        session: SessionId,
        state: ControllerState,
    },
}

/// Handle to the currently running scroll controller.
struct ActiveSession<S> {
    id: SessionId,
    trigger: CancelTrigger,
    state: std::sync::Arc<StateCell>,
    thread: JoinHandle<(S, ControllerOutcome)>,
}

impl<S> ActiveSession<S> {
    /// Signal cancellation and block until the controller reports
    /// terminated, recovering the sink.
    fn stop(self) -> Result<(S, ControllerOutcome), SubmitError> {
        self.trigger.cancel();
        self.thread
            .join()
            .map_err(|_| SubmitError::ControllerPanicked)
    }
}

enum Slot<S> {
    /// No controller; the manager holds the sink.
    Idle(S),
    /// A controller owns the sink.
    Active(ActiveSession<S>),
    /// The sink was lost to a controller panic or spawn failure.
    Lost,
}

/// Owns the session slot and starts/stops scroll controllers.
pub struct SessionManager<S, F> {
    slot: Mutex<Slot<S>>,
    font: F,
    defaults: DisplayConfig,
    next_id: AtomicU64,
}

impl<S, F> SessionManager<S, F>
where
    S: FrameSink + Send + 'static,
    F: FontBackend,
{
    /// Create a manager around a sink and font backend.
    pub fn new(sink: S, font: F, defaults: DisplayConfig) -> Result<Self, ConfigError> {
        defaults.validate()?;
        Ok(Self {
            slot: Mutex::new(Slot::Idle(sink)),
            font,
            defaults,
            next_id: AtomicU64::new(0),
        })
    }

    /// Display `text`, superseding whatever is currently scrolling.
    ///
    /// Serializes with concurrent submissions; none are rejected, they
    /// queue on the session mutex. Overrides are validated before the
    /// live controller is disturbed, so an invalid submission leaves
    /// the current message scrolling.
    pub fn submit(
        &self,
        text: &str,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<SubmissionResult, SubmitError> {
        let config = match overrides {
            Some(o) => o.apply(&self.defaults),
            None => self.defaults.clone(),
        };
        config.validate()?;
        let layout = layout(text, &config, &self.font);

        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let sink = match std::mem::replace(&mut *slot, Slot::Lost) {
            Slot::Idle(sink) => sink,
            Slot::Active(active) => {
                let old = active.id;
                let (sink, outcome) = active.stop()?;
                match outcome {
                    ControllerOutcome::Cancelled => {
                        tracing::debug!(session = old, "superseded controller stopped");
                        sink
                    }
                    ControllerOutcome::SinkFailed(err) => {
                        // Park the sink so a later submission can retry
                        // after the hardware recovers.
                        *slot = Slot::Idle(sink);
                        return Err(SubmitError::SinkUnavailable(err));
                    }
                }
            }
            Slot::Lost => return Err(SubmitError::ControllerPanicked),
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let result = SubmissionResult {
            session: id,
            lines: layout.lines().len(),
            total_height: layout.total_height(),
        };

        let (trigger, signal) = cancel_pair();
        let state = std::sync::Arc::new(StateCell::new());
        let controller = ScrollController::new(
            layout,
            config,
            sink,
            signal,
            std::sync::Arc::clone(&state),
            id,
        );
        let thread = thread::Builder::new()
            .name(format!("marquee-scroll-{id}"))
            .spawn(move || controller.run())
            .map_err(SubmitError::Spawn)?;

        *slot = Slot::Active(ActiveSession {
            id,
            trigger,
            state,
            thread,
        });
        tracing::debug!(
            session = id,
            lines = result.lines,
            total_height = result.total_height,
            "scroll controller scheduled"
        );
        Ok(result)
    }

    /// Stop the active controller, if any, and park the sink.
    ///
    /// Returns `true` if a controller was stopped. Cancelling with no
    /// active controller is a no-op, not an error.
    pub fn cancel_active(&self) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match std::mem::replace(&mut *slot, Slot::Lost) {
            Slot::Active(active) => {
                let id = active.id;
                match active.stop() {
                    Ok((sink, outcome)) => {
                        tracing::debug!(session = id, ?outcome, "controller cancelled");
                        *slot = Slot::Idle(sink);
                        true
                    }
                    Err(_) => {
                        tracing::warn!(session = id, "controller panicked during cancel");
                        false
                    }
                }
            }
            other => {
                *slot = other;
                false
            }
        }
    }

    /// Snapshot the current session state.
    pub fn status(&self) -> SessionStatus {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Slot::Active(active) => SessionStatus::Active {
                session: active.id,
                state: active.state.get(),
            },
            Slot::Idle(_) | Slot::Lost => SessionStatus::Idle,
        }
    }

    /// Tear down any controller and return the sink, so the process
    /// lifecycle can clear the panel on shutdown.
    pub fn shutdown(self) -> Option<S> {
        let slot = self
            .slot
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        match slot {
            Slot::Idle(sink) => Some(sink),
            Slot::Active(active) => active.stop().ok().map(|(sink, _)| sink),
            Slot::Lost => None,
        }
    }
}
