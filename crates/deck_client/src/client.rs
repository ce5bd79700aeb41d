use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use deck_logging::deck_warn;

use crate::poller::{poll_loop, ChannelEventSink, EventSink};
use crate::{
    ClientEvent, HttpTransport, PollSettings, Transport, TransportError, TransportSettings,
};

enum ClientCommand {
    Register { name: String },
    Choose { value: String },
    Reveal,
    Clear,
}

/// Configuration for the background client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub transport: TransportSettings,
    pub poll: PollSettings,
}

/// Owns one background thread with a tokio runtime: the perpetual poll task
/// plus one spawned task per mutating call. Commands are fire-and-forget;
/// events come back through [`ClientHandle::try_recv`].
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Mutex<mpsc::Receiver<ClientEvent>>,
}

impl ClientHandle {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let transport = Arc::new(HttpTransport::new(&config.base_url, config.transport)?);
        Ok(Self::with_transport(transport, config.poll))
    }

    /// Builds a handle over any transport; tests substitute scripted ones.
    pub fn with_transport(transport: Arc<dyn Transport>, poll: PollSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            {
                let transport = transport.clone();
                let poll_tx = event_tx.clone();
                runtime.spawn(async move {
                    let sink = ChannelEventSink::new(poll_tx);
                    poll_loop(transport.as_ref(), &poll, &sink).await;
                });
            }
            while let Ok(command) = cmd_rx.recv() {
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), command, &ChannelEventSink::new(event_tx))
                        .await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn register(&self, name: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Register { name: name.into() });
    }

    pub fn choose(&self, value: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Choose {
            value: value.into(),
        });
    }

    pub fn reveal(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Reveal);
    }

    pub fn clear(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Clear);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(transport: &dyn Transport, command: ClientCommand, sink: &dyn EventSink) {
    match command {
        ClientCommand::Register { name } => {
            if let Err(err) = transport.register(&name).await {
                let message = err.rejection().unwrap_or("Unknown error").to_string();
                sink.emit(ClientEvent::RegisterRejected { message });
            }
        }
        ClientCommand::Choose { value } => {
            if let Err(err) = transport.choose(&value).await {
                deck_warn!("choose dropped: {}", err);
            }
        }
        ClientCommand::Reveal => {
            if let Err(err) = transport.reveal().await {
                deck_warn!("reveal dropped: {}", err);
            }
        }
        ClientCommand::Clear => {
            if let Err(err) = transport.clear().await {
                deck_warn!("clear dropped: {}", err);
            }
        }
    }
}
