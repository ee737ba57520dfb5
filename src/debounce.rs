use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::config::DEFAULT_SEARCH_DEBOUNCE_MS;

/// Debouncer
///
/// Rate-limits a callback so that a burst of triggers results in exactly one
/// invocation, with the arguments from the last trigger, no earlier than the
/// delay window after it.
///
/// The debouncer explicitly owns its one pending scheduled task: `trigger`
/// aborts the previous handle and schedules a fresh one, so at most one
/// invocation is ever pending and intermediate arguments are discarded, never
/// queued. The delay is fixed at construction. Every call to `trigger` returns
/// immediately — delivery is delayed scheduling on the tokio timer, not
/// blocking.
///
/// Must be used from within a tokio runtime; the list views trigger it from
/// their (single-threaded) input event handlers.
pub struct Debouncer<T: Send + 'static> {
    action: Arc<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wraps `action` with the default search debounce window (300 ms).
    pub fn new(action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::with_delay(action, Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS))
    }

    /// Wraps `action` with an explicit debounce window.
    pub fn with_delay(action: impl Fn(T) + Send + Sync + 'static, delay: Duration) -> Self {
        Self {
            action: Arc::new(action),
            delay,
            pending: None,
        }
    }

    /// trigger
    ///
    /// Cancels any pending invocation and schedules a new one `delay` in the
    /// future with `args`. Within any burst shorter than the window, only the
    /// final trigger's arguments ever reach the action.
    pub fn trigger(&mut self, args: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action(args);
        }));
    }

    /// Cancels the pending invocation, if any, without scheduling a new one.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// The fixed debounce window.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    /// A dropped debouncer must not fire later; the pending task dies with it.
    fn drop(&mut self) {
        self.cancel();
    }
}
