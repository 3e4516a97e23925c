//! Trailing-edge debounce over tokio tasks.
//!
//! Each [`Debouncer::schedule`] call replaces the pending task. The previous
//! one is aborted while it is still waiting out the delay; once the delay
//! elapses the work is handed to a detached task, so work that already
//! started is never cancelled by a later call.

use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

pub struct Debouncer {
    delay: Duration,
    runtime: Option<Handle>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Spawns onto whichever runtime `schedule` is called from.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            runtime: None,
            pending: Mutex::new(None),
        }
    }

    /// Spawns onto `runtime`, so `schedule` also works from threads outside
    /// any runtime.
    pub fn with_runtime(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime: Some(runtime),
            pending: Mutex::new(None),
        }
    }

    /// Run `work` after the delay unless another call supersedes it first.
    ///
    /// Returns `false`, dropping `work`, when there is no runtime to run it
    /// on.
    pub fn schedule<F>(&self, work: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let runtime =
            self.runtime.clone().or_else(|| Handle::try_current().ok());
        let runtime = match runtime {
            Some(runtime) => runtime,
            None => {
                warn!("no tokio runtime available; debounced work dropped");
                return false;
            }
        };

        let delay = self.delay;
        let detached = runtime.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            detached.spawn(work);
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
        true
    }

    /// Drop the pending task, if any. Returns `true` when one was still
    /// waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
