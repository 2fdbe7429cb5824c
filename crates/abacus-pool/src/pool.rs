//! Fan-out/join execution
//!
//! One OS thread per input, all started, all joined. No sleep-based
//! synchronization anywhere: joining is the only wait primitive, and
//! nothing surfaces until every worker has terminated.

use std::thread;

use crate::{Calculation, CalculationState, PoolError};

/// Fan out independent calculations and join their results in order
pub struct CalculationPool;

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

impl CalculationPool {
    /// Run `worker` over every input on its own thread.
    ///
    /// All workers are started, then all are joined; a fault in one
    /// never abandons the wait for the rest. After the join, the first
    /// torn-down worker (by input order) surfaces as
    /// [`PoolError::Computation`]; otherwise the first recorded fault
    /// (by input order) surfaces as [`PoolError::NoResult`]; otherwise
    /// results come back positionally matching the inputs.
    pub fn run<I, O, E, F>(inputs: Vec<I>, worker: F) -> Result<Vec<O>, PoolError<E>>
    where
        I: Sync,
        O: Send,
        E: Send,
        F: Fn(&I) -> Result<O, E> + Sync,
    {
        let calculations: Vec<Calculation<I, O, E>> =
            inputs.into_iter().map(Calculation::new).collect();

        let mut first_panic: Option<(usize, String)> = None;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(calculations.len());
            for (index, calculation) in calculations.iter().enumerate() {
                let worker = &worker;
                let spawned = thread::Builder::new()
                    .name(format!("abacus-worker-{}", index))
                    .spawn_scoped(scope, move || calculation.execute(worker));
                match spawned {
                    Ok(handle) => handles.push((index, Some(handle))),
                    // an unspawnable worker is indistinguishable from a
                    // torn-down one; the join below still runs for the rest
                    Err(e) => {
                        if first_panic.is_none() {
                            first_panic = Some((index, e.to_string()));
                        }
                        handles.push((index, None));
                    }
                }
            }

            for (index, handle) in handles {
                let Some(handle) = handle else { continue };
                if let Err(payload) = handle.join() {
                    let message = panic_message(payload);
                    tracing::warn!(worker = index, %message, "pool worker torn down");
                    if first_panic.is_none() {
                        first_panic = Some((index, message));
                    }
                }
            }
        });

        if let Some((worker, message)) = first_panic {
            return Err(PoolError::Computation { worker, message });
        }

        let mut results = Vec::with_capacity(calculations.len());
        for (index, calculation) in calculations.into_iter().enumerate() {
            match calculation.into_state() {
                CalculationState::Done(result) => results.push(result),
                CalculationState::Faulted(fault) => {
                    return Err(PoolError::NoResult {
                        worker: index,
                        fault,
                    });
                }
                CalculationState::Pending | CalculationState::Running => {
                    return Err(PoolError::IllegalState(format!(
                        "worker {} joined without reaching a terminal state",
                        index
                    )));
                }
            }
        }
        Ok(results)
    }
}
