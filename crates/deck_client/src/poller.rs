use std::time::Duration;

use deck_logging::deck_debug;

use crate::{ClientEvent, Transport};

#[derive(Debug, Clone)]
pub struct PollSettings {
    /// Delay between successful polls.
    pub idle_delay: Duration,
    /// Delay before retrying after a failed poll.
    pub retry_delay: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            idle_delay: Duration::from_millis(200),
            retry_delay: Duration::from_millis(5000),
        }
    }
}

/// Receives events produced by the poll loop and the command tasks.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// Perpetual status loop. A failed poll never surfaces beyond the log; it
/// backs off and retries with the counter of the last accepted snapshot, so
/// stale-but-displayed state is preferred over an error screen.
pub async fn poll_loop(transport: &dyn Transport, settings: &PollSettings, sink: &dyn EventSink) {
    let mut counter = 0;
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        match transport.fetch_status(counter).await {
            Ok(status) => {
                counter = status.counter;
                sink.emit(ClientEvent::Status(status));
                tokio::time::sleep(settings.idle_delay).await;
            }
            Err(err) => {
                deck_debug!("status poll {} failed: {}", cycle, err);
                tokio::time::sleep(settings.retry_delay).await;
            }
        }
    }
}
