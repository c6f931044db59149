//! Cooperative shutdown for the ticker loop.
//!
//! The loop observes a [`ShutdownSignal`] at the top of every iteration and
//! while it sleeps. The binary passes [`ShutdownSignal::never`], so a running
//! process only stops when the host kills it.

use tokio::sync::watch;

/// Sending side. Cloneable; any clone can request shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

/// Receiving side observed by the loop.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: Option<watch::Receiver<bool>>,
}

/// Create a connected handle/signal pair.
pub fn channel() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownHandle { tx }, ShutdownSignal { rx: Some(rx) })
}

impl ShutdownHandle {
    pub fn request_shutdown(&self) {
        // send_replace never fails, even with no receivers left
        self.tx.send_replace(true);
    }
}

impl ShutdownSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        Self { rx: None }
    }

    #[inline]
    pub fn shutdown_requested(&self) -> bool {
        self.rx.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    /// Resolve once shutdown has been requested.
    ///
    /// If every handle is dropped without requesting shutdown this stays
    /// pending forever.
    pub async fn wait(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return std::future::pending().await;
        };

        if rx.wait_for(|requested| *requested).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::{assert_pending, assert_ready};

    #[tokio::test]
    async fn test_request_shutdown_is_observed() {
        let (handle, mut signal) = channel();
        assert!(!signal.shutdown_requested());

        handle.request_shutdown();
        assert!(signal.shutdown_requested());

        tokio::time::timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("wait should resolve after shutdown was requested");
    }

    #[test]
    fn test_never_does_not_fire() {
        let mut signal = ShutdownSignal::never();
        assert!(!signal.shutdown_requested());

        let mut wait = tokio_test::task::spawn(signal.wait());
        assert_pending!(wait.poll());
        assert_pending!(wait.poll());
    }

    #[test]
    fn test_wait_wakes_on_request() {
        let (handle, mut signal) = channel();
        let mut wait = tokio_test::task::spawn(signal.wait());
        assert_pending!(wait.poll());

        handle.request_shutdown();
        assert!(wait.is_woken());
        assert_ready!(wait.poll());
    }

    #[test]
    fn test_dropped_handle_does_not_cancel() {
        let (handle, mut signal) = channel();
        let mut wait = tokio_test::task::spawn(signal.wait());
        assert_pending!(wait.poll());

        drop(handle);
        assert_pending!(wait.poll());
    }

    #[tokio::test]
    async fn test_cloned_handle_can_request() {
        let (handle, signal) = channel();
        let clone = handle.clone();
        clone.request_shutdown();
        assert!(signal.shutdown_requested());
    }
}
