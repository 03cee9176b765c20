#![forbid(unsafe_code)]

//! Cooperative cancellation for scroll controllers.
//!
//! A controller receives a [`CancelSignal`] and parks on
//! [`wait_timeout`](CancelSignal::wait_timeout) between frames; that
//! call doubles as the frame-interval sleep and the sole point where
//! cancellation is observed. The session manager holds the matching
//! [`CancelTrigger`] and fires it when a new submission supersedes the
//! controller.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Create a connected trigger/signal pair.
pub fn cancel_pair() -> (CancelTrigger, CancelSignal) {
    let shared = Arc::new(Shared {
        cancelled: Mutex::new(false),
        condvar: Condvar::new(),
    });
    (
        CancelTrigger {
            shared: Arc::clone(&shared),
        },
        CancelSignal { shared },
    )
}

struct Shared {
    cancelled: Mutex<bool>,
    condvar: Condvar,
}

/// Control side: requests cancellation. Firing is idempotent, and
/// dropping the trigger does not cancel.
pub struct CancelTrigger {
    shared: Arc<Shared>,
}

impl CancelTrigger {
    /// Request cancellation, waking any pending `wait_timeout`.
    pub fn cancel(&self) {
        let mut cancelled = self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        self.shared.condvar.notify_all();
    }
}

/// Controller side: observes cancellation.
pub struct CancelSignal {
    shared: Arc<Shared>,
}

impl CancelSignal {
    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until cancellation or until `duration` elapses.
    ///
    /// Returns `true` if cancelled, `false` on timeout. Spurious
    /// condvar wakes re-wait for the remaining time, so a full
    /// `duration` passes before a `false` return.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let start = Instant::now();
        let mut cancelled = self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if *cancelled {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            let (guard, result) = self
                .shared
                .condvar
                .wait_timeout(cancelled, duration - elapsed)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
            if result.timed_out() && !*cancelled {
                return false;
            }
        }
    }
}
