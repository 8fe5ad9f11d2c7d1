use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Trailing-edge debouncer around a callback taking `A`.
///
/// Clones share the pending invocation, so they behave as one instance.
pub struct Debounced<A> {
    func: Callback<A>,
    wait: Duration,
    runtime: Handle,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

/// Wraps `func` so only the last call within `wait` runs.
///
/// # Panics
///
/// Panics when called outside a tokio runtime; use [`Debounced::with_handle`]
/// to bind a runtime explicitly.
pub fn debounce<A, F>(func: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::with_handle(func, wait, Handle::current())
}

impl<A: Send + 'static> Debounced<A> {
    pub fn with_handle<F>(func: F, wait: Duration, runtime: Handle) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            wait,
            runtime,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Cancels the pending invocation and schedules a new one with `args`.
    pub fn call(&self, args: A) {
        let mut pending = self.pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let func = Arc::clone(&self.func);
        let wait = self.wait;
        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));
    }

    /// Drops the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.pending().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            wait: self.wait,
            runtime: self.runtime.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<A> std::fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced").field("wait", &self.wait).finish()
    }
}
