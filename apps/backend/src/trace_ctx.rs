//! Task-local trace id for the request pipeline.
//!
//! The request-trace middleware opens a scope per request; anything that
//! runs inside it (handlers, error responses, log statements) can read
//! the id without threading it through arguments. Solver code never
//! touches this module; the trace id is a web-boundary concern.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the request currently being served, or `"unknown"` when
/// called outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| String::from("unknown"))
}

/// Run `future` with `trace_id` installed as the current task's id.
pub async fn with_trace_id<F>(trace_id: String, future: F) -> F::Output
where
    F: std::future::Future,
{
    TRACE_ID.scope(trace_id, future).await
}
