//! Conditions ending a training session.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// A condition for ending training, checked after every iteration.
///
/// A set of stoppers is combined with logical or: training ends as soon as one of them fires.
/// Closures taking the iteration count and the best error are stoppers too.
pub trait Stopper {
    /// Whether training should end given the number of completed iterations and the best error.
    fn should_stop(&self, iterations: usize, error: f64) -> bool;
}

impl<F> Stopper for F
where
    F: Fn(usize, f64) -> bool,
{
    fn should_stop(&self, iterations: usize, error: f64) -> bool {
        self(iterations, error)
    }
}

/// Stops once the given number of iterations have completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfterIterations(pub usize);

impl Stopper for StopAfterIterations {
    fn should_stop(&self, iterations: usize, _error: f64) -> bool {
        iterations >= self.0
    }
}

/// Stops when the error falls below the given value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhenErrorBelow(pub f64);

impl Stopper for StopWhenErrorBelow {
    fn should_stop(&self, _iterations: usize, error: f64) -> bool {
        error < self.0
    }
}

/// Stops when the error rises above the given value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhenErrorAbove(pub f64);

impl Stopper for StopWhenErrorAbove {
    fn should_stop(&self, _iterations: usize, error: f64) -> bool {
        error > self.0
    }
}

/// A one-shot flag which can be raised from anywhere, e.g. an interrupt handler on another thread.
#[derive(Debug, Clone, Default)]
pub struct Signal(Arc<AtomicBool>);

impl Signal {
    /// Raise the signal.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Check whether the signal is raised without consuming it.
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Stops once its [`Signal`] has been raised.
///
/// The signal is only looked at between iterations and is consumed when it fires, so each raise
/// ends at most one poll.
#[derive(Debug, Clone)]
pub struct StopWhenSignaled {
    signal: Signal,
}

impl StopWhenSignaled {
    /// Create the stopper along with the signal that triggers it.
    pub fn new() -> (Self, Signal) {
        let signal = Signal::default();
        (
            Self {
                signal: signal.clone(),
            },
            signal,
        )
    }

    /// Create a stopper listening to an existing signal.
    pub fn listen(signal: Signal) -> Self {
        Self { signal }
    }
}

impl Stopper for StopWhenSignaled {
    fn should_stop(&self, _iterations: usize, _error: f64) -> bool {
        self.signal.take()
    }
}

/// Stops once a point in time has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAtDeadline {
    deadline: Instant,
}

impl StopAtDeadline {
    /// Stop at the given instant.
    pub fn at(deadline: Instant) -> Self {
        Self { deadline }
    }

    /// Stop once `timeout` has elapsed from now.
    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }
}

impl Stopper for StopAtDeadline {
    fn should_stop(&self, _iterations: usize, _error: f64) -> bool {
        Instant::now() >= self.deadline
    }
}
