//! Polling and debounce tasks
//!
//! Each dashboard owns an explicit refresh task started on mount and
//! stopped on teardown, instead of ambient intervals. Search input goes
//! through a debouncer so a burst of keystrokes triggers one recompute.

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Dashboard list/stats refresh period
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Search input settle time
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Cancellable periodic task. The first tick fires immediately so a
/// dashboard refreshes on mount. Dropping the handle stops the task.
pub struct RefreshTask {
    cancel: CancellationToken,
    handle: tokio::task::JoinHandle<()>,
}

impl RefreshTask {
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let cancel = CancellationToken::new();
        let child = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = child.cancelled() => break,
                    _ = interval.tick() => tick().await,
                }
            }
        });
        Self { cancel, handle }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Trailing-edge debouncer: only the last submission within the delay
/// window runs.
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` after the delay, cancelling any pending one
    pub fn submit<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.cancel_pending();
        let token = CancellationToken::new();
        let child = token.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(delay) => action().await,
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
