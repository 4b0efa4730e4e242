//! Fire-and-forget background work.
//!
//! Dispatched tasks run on the local event loop and never block the caller.
//! Their output is delivered on a oneshot channel that the caller may keep to
//! observe completion or drop to ignore it; dropping the receiver does not
//! cancel the task.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use std::future::Future;

use futures::channel::oneshot;

/// Wrap `task` so its output is sent to the returned receiver when it finishes.
pub fn reporting_task<F>(task: F) -> (impl Future<Output = ()>, oneshot::Receiver<F::Output>)
where
    F: Future,
{
    let (tx, rx) = oneshot::channel();
    let driver = async move {
        let output = task.await;
        // Receiver dropped: nobody is listening.
        let _ = tx.send(output);
    };
    (driver, rx)
}

/// Spawn `task` on the local executor and return its ignorable result channel.
pub fn dispatch_background<F>(task: F) -> oneshot::Receiver<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    let (driver, rx) = reporting_task(task);
    leptos::task::spawn_local(driver);
    rx
}
