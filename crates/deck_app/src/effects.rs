use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_client::{ClientConfig, ClientEvent, ClientHandle, StatusResponse, WireUser};
use deck_core::{Effect, Msg, Participant, Snapshot, CLEAR_UNLOCK_DELAY};
use deck_logging::{deck_info, deck_warn};

/// Executes the effects returned by `deck_core::update` and pumps client
/// events back into the message channel.
pub struct EffectRunner {
    client: Arc<ClientHandle>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(config: ClientConfig, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let client = Arc::new(ClientHandle::new(config)?);
        let runner = Self {
            client: client.clone(),
            msg_tx: msg_tx.clone(),
        };
        runner.spawn_event_loop(client, msg_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitRegistration { name } => {
                    deck_info!("register name_len={}", name.len());
                    self.client.register(name);
                }
                Effect::SubmitChoice { value } => {
                    self.client.choose(value.as_str());
                }
                Effect::RequestReveal => {
                    self.client.reveal();
                }
                Effect::RequestClear => {
                    self.client.clear();
                }
                Effect::ScheduleClearUnlock => {
                    // Wall-clock timer, independent of the polling cadence.
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(CLEAR_UNLOCK_DELAY);
                        let _ = msg_tx.send(Msg::ClearUnlockElapsed);
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self, client: Arc<ClientHandle>, msg_tx: mpsc::Sender<Msg>) {
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::Status(status) => Msg::StatusReceived(map_snapshot(status)),
                    ClientEvent::RegisterRejected { message } => {
                        deck_warn!("registration rejected: {}", message);
                        Msg::RegisterRejected(message)
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_snapshot(status: StatusResponse) -> Snapshot {
    Snapshot {
        counter: status.counter,
        users: status.users.into_iter().map(map_user).collect(),
        username: status.username,
        result: status.result,
    }
}

fn map_user(user: WireUser) -> Participant {
    Participant {
        name: user.name,
        card: user.card,
    }
}
