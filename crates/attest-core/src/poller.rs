//! Best-effort unread-notification poller.
//!
//! Drives the dashboard's notification badge: fetch the unread count on a
//! fixed interval and publish it over a watch channel. Fetch failures are
//! logged and skipped as a matter of policy - the badge keeps its last value
//! and the loop keeps running, so a flaky network never kills the widget.
//! Dropping the poller aborts the background task.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::ApiClient;

/// Default polling interval: the badge refreshes twice a minute.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Handle to the polling task. Polling stops when this is dropped.
pub struct UnreadPoller {
    count_rx: watch::Receiver<u64>,
    poke_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl UnreadPoller {
    /// Spawn the polling task. The first fetch happens immediately, then one
    /// per interval tick.
    pub fn spawn(client: ApiClient, interval: Duration) -> Self {
        let (count_tx, count_rx) = watch::channel(0);
        let (poke_tx, poke_rx) = mpsc::channel(1);
        let handle = tokio::spawn(poll_loop(client, interval, count_tx, poke_rx));
        Self {
            count_rx,
            poke_tx,
            handle,
        }
    }

    /// Receiver for published counts. Holds 0 until the first successful
    /// fetch.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.count_rx.clone()
    }

    /// Request an immediate re-poll, e.g. right after marking a notification
    /// read, so the badge converges without waiting out the interval.
    /// Best-effort: when a poke is already pending this is a no-op.
    pub fn poke(&self) {
        let _ = self.poke_tx.try_send(());
    }
}

impl Drop for UnreadPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn poll_loop(
    client: ApiClient,
    interval: Duration,
    count_tx: watch::Sender<u64>,
    mut poke_rx: mpsc::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            poke = poke_rx.recv() => {
                if poke.is_none() {
                    // Poller handle dropped mid-select
                    return;
                }
            }
        }
        match client.notifications().unread_count().await {
            Ok(count) => {
                debug!(count, "unread count updated");
                count_tx.send_replace(count);
            }
            Err(e) => {
                warn!(error = %e, "unread count poll failed, keeping last value");
            }
        }
    }
}
