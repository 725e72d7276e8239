use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Cancellable single-shot schedule for reconnect attempts.
///
/// At most one schedule is outstanding at any time: arming always
/// cancels the previous one first. A schedule fires at most once and
/// either runs its task or is cancelled before the delay elapses.
pub struct ReconnectTimer {
    handle: Option<JoinHandle<()>>,
}

impl ReconnectTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Arm the timer: run `task` once after `delay`, cancelling any
    /// previously armed schedule.
    pub fn arm<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending schedule, if any.
    ///
    /// Guaranteed to prevent the connect attempt the schedule would
    /// have produced, provided it has not fired yet.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Drop the handle without aborting. Called from inside the fired
    /// task itself, so that re-arming does not abort the caller.
    pub(crate) fn forget(&mut self) {
        self.handle = None;
    }

    /// Whether a schedule is currently outstanding.
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for ReconnectTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ReconnectTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
