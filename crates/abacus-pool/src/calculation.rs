//! A single tracked calculation
//!
//! Each calculation guards its own state behind a per-instance lock, so
//! concurrently running workers never contend with each other. At most
//! one of result/fault is ever recorded.

use parking_lot::Mutex;
use thiserror::Error;

/// Pool-level failures
#[derive(Error, Debug)]
pub enum PoolError<E> {
    /// A worker was torn down before completing. Raised only after every
    /// worker has been joined; the worker index is the first faulty one
    /// in input order.
    #[error("Concurrent computation failed in worker {worker}: {message}")]
    Computation { worker: usize, message: String },

    /// A worker terminated normally but recorded a fault instead of a
    /// result. Wraps the first such fault in input order.
    #[error("Worker {worker} completed without a result")]
    NoResult { worker: usize, fault: E },

    /// A result was read while running, or a fault where none occurred
    #[error("Illegal calculation state: {0}")]
    IllegalState(String),
}

/// Lifecycle state of one calculation
#[derive(Debug)]
pub enum CalculationState<O, E> {
    Pending,
    Running,
    Done(O),
    Faulted(E),
}

/// One unit of work tracked through its lifecycle
pub struct Calculation<I, O, E> {
    input: I,
    state: Mutex<CalculationState<O, E>>,
}

impl<I, O, E> Calculation<I, O, E> {
    pub fn new(input: I) -> Self {
        Calculation {
            input,
            state: Mutex::new(CalculationState::Pending),
        }
    }

    #[inline]
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), CalculationState::Running)
    }

    /// Run the worker over this calculation's input, recording either a
    /// result or a fault. Called exactly once, from the worker thread.
    pub fn execute<F>(&self, worker: &F)
    where
        F: Fn(&I) -> Result<O, E>,
    {
        *self.state.lock() = CalculationState::Running;
        let outcome = worker(&self.input);
        let mut state = self.state.lock();
        *state = match outcome {
            Ok(result) => CalculationState::Done(result),
            Err(fault) => CalculationState::Faulted(fault),
        };
    }

    /// The recorded result. Reading while still running is an illegal
    /// state, not a wait.
    pub fn result(&self) -> Result<O, PoolError<E>>
    where
        O: Clone,
    {
        match &*self.state.lock() {
            CalculationState::Done(result) => Ok(result.clone()),
            CalculationState::Running | CalculationState::Pending => Err(
                PoolError::IllegalState("result read before termination".into()),
            ),
            CalculationState::Faulted(_) => Err(PoolError::IllegalState(
                "result read from a faulted calculation".into(),
            )),
        }
    }

    /// The recorded fault. Reading one where none occurred is an illegal
    /// state.
    pub fn fault(&self) -> Result<E, PoolError<E>>
    where
        E: Clone,
    {
        match &*self.state.lock() {
            CalculationState::Faulted(fault) => Ok(fault.clone()),
            _ => Err(PoolError::IllegalState(
                "no fault recorded for this calculation".into(),
            )),
        }
    }

    /// Consume the calculation after its worker has been joined
    pub fn into_state(self) -> CalculationState<O, E> {
        self.state.into_inner()
    }
}
