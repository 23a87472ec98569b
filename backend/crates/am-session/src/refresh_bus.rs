use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

/// Process-wide "something changed, reload" counter.
///
/// Every increment wakes every subscriber, including the one that caused it.
/// Subscribers may skip intermediate values.
#[derive(Clone)]
pub struct RefreshBus {
    sender: Arc<watch::Sender<u64>>,
}

impl RefreshBus {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Increment the tick and return the new value
    pub fn trigger_refresh(&self) -> u64 {
        let mut tick = 0;
        self.sender.send_modify(|value| {
            *value += 1;
            tick = *value;
        });
        debug!("Refresh triggered (tick {tick})");
        tick
    }

    pub fn current(&self) -> u64 {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}
