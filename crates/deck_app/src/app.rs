use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use deck_client::{ClientConfig, PollSettings, TransportSettings};
use deck_core::{update, AppState, Msg};

use crate::effects::EffectRunner;
use crate::{input, render};

/// Runs the message pump until the user quits. All state lives in one
/// `AppState` value, replaced wholesale per message.
pub fn run(base_url: &str) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let quit = Arc::new(AtomicBool::new(false));

    let config = ClientConfig {
        base_url: base_url.to_string(),
        transport: TransportSettings::default(),
        poll: PollSettings::default(),
    };
    let runner = EffectRunner::new(config, msg_tx.clone())?;
    input::spawn(msg_tx, quit.clone());

    let mut state = AppState::new();
    render::print(&state.view());

    while !quit.load(Ordering::Relaxed) {
        let msg = match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => msg,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects);
        if state.consume_dirty() {
            render::print(&state.view());
        }
    }
    Ok(())
}
