//! Task polling utilities
//!
//! The UI thread never awaits. Background work is spawned on the tokio runtime
//! and its `JoinHandle` is checked once per frame with `poll_task`.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a task
pub enum PollResult<T> {
    /// No task to poll (task was None)
    NoTask,
    /// Task is still running
    Pending,
    /// Task completed with result (may be Ok or join error)
    Complete(Result<T, tokio::task::JoinError>),
}

/// Poll an optional task handle and return its result if finished.
///
/// A finished handle is taken out of `task` only once its result has been
/// read, so a completed result is delivered exactly once and never dropped.
///
/// The read runs outside tokio's cooperative budget: the UI loop lives inside
/// a single `block_on` poll that never yields, so the budget is never refilled.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = task.as_mut() else {
        return PollResult::NoTask;
    };
    if !handle.is_finished() {
        return PollResult::Pending;
    }

    match tokio::task::unconstrained(handle).now_or_never() {
        Some(result) => {
            *task = None;
            PollResult::Complete(result)
        }
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}
