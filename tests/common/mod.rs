//! Common test utilities
//!
//! This module is shared across the integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_bot::Notify;

/// Notifier double that records every send attempt.
///
/// Delivery succeeds by default; switch it off with
/// [`RecordingNotifier::set_delivering`] to simulate Telegram rejecting the
/// message. Clones share the same log, so keep one handle for assertions
/// and move the other into the poller.
#[derive(Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    delivering: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            delivering: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Switches whether subsequent sends are accepted.
    pub fn set_delivering(&self, delivering: bool) {
        self.delivering.store(delivering, Ordering::SeqCst);
    }

    /// Snapshot of every text passed to `notify`, delivered or not.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notify for RecordingNotifier {
    async fn notify(&self, text: &str) -> bool {
        self.sent.lock().unwrap().push(text.to_string());
        self.delivering.load(Ordering::SeqCst)
    }
}
