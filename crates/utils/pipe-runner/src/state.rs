use crate::error::RunResult;

/// Contract for the opaque unit of work the runner executes.
///
/// `run_tasks` is blocking by contract: the runner moves the state onto a
/// dedicated worker before calling it. The state is consumed by the
/// invocation, so each run has exclusive access to it.
pub trait RunnableState: Send + 'static {
    fn name(&self) -> &str;

    /// Execute the pipeline's tasks to completion.
    ///
    /// Runs on a blocking worker. Cancellation does not interrupt it; a
    /// cancelled invocation leaves this running in the background and
    /// discards its outcome.
    fn run_tasks(&mut self) -> RunResult<()>;
}

/// Transform applied to the state before the run is scheduled.
///
/// A failing pipe aborts the invocation; the run never starts.
pub type Pipe<S> = Box<dyn FnOnce(&mut S) -> RunResult<()> + Send>;
