use crate::{
    error::{RunError, RunResult},
    scope::ExecScope,
    state::{Pipe, RunnableState},
};
use logger::{debug, warn};
use std::borrow::Cow;

/// Apply an optional pre-step to `state`, then run it raced against
/// cancellation.
///
/// A failing pre-step is returned immediately and the run is never
/// scheduled; otherwise this delegates to [`run_cancellable`].
pub async fn run_with_pipe<S>(
    parent: Option<&ExecScope>,
    mut state: S,
    pipe: Option<Pipe<S>>,
) -> RunResult<()>
where
    S: RunnableState,
{
    if let Some(pipe) = pipe {
        pipe(&mut state)?;
    }

    run_cancellable(parent, state).await
}

/// Run `state` on a blocking worker, raced against the cancellation signal
/// of a scope derived from `parent` (or a fresh root scope).
///
/// The first signal observed wins. If the worker finishes first, its
/// outcome is returned as-is; if the scope resolves first, a cancellation
/// error carrying the reason is returned and the worker is left to finish
/// in the background with its outcome discarded. The derived scope is
/// released when this returns, on every path.
pub async fn run_cancellable<S>(parent: Option<&ExecScope>, state: S) -> RunResult<()>
where
    S: RunnableState,
{
    let scope = match parent {
        Some(parent) => parent.child(),
        None => ExecScope::root(),
    };

    let name = state.name().to_string();
    debug!(pipeline = %name, "scheduling pipeline run");

    let mut state = state;
    let worker = tokio::task::spawn_blocking(move || state.run_tasks());

    // Unbiased select: if the worker and the cancellation signal resolve
    // together, whichever is observed first wins.
    tokio::select! {
        joined = worker => match joined {
            Ok(outcome) => {
                debug!(pipeline = %name, ok = outcome.is_ok(), "pipeline run finished");
                outcome
            }
            Err(e) if e.is_panic() => Err(RunError::panic(name, panic_message(e))),
            Err(e) => Err(RunError::execution(name, e)),
        },
        reason = scope.cancelled() => {
            warn!(pipeline = %name, %reason, "run cancelled, worker left to finish in background");
            Err(RunError::cancelled(name, reason))
        }
    }
}

fn panic_message(err: tokio::task::JoinError) -> Cow<'static, str> {
    match err.try_into_panic() {
        Ok(payload) => {
            if let Some(msg) = payload.downcast_ref::<&'static str>() {
                Cow::Borrowed(*msg)
            } else if let Some(msg) = payload.downcast_ref::<String>() {
                Cow::Owned(msg.clone())
            } else {
                Cow::Borrowed("opaque panic payload")
            }
        }
        Err(err) => Cow::Owned(err.to_string()),
    }
}
