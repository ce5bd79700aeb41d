use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::StatusReceived(snapshot) => {
            // The lock must arm in the same transition that makes the result
            // visible, and the unlock must be scheduled exactly once per
            // reveal edge, independent of polling jitter.
            let just_revealed = state.apply_snapshot(snapshot);
            if just_revealed {
                vec![Effect::ScheduleClearUnlock]
            } else {
                Vec::new()
            }
        }
        Msg::RegisterSubmitted(name) => {
            if name.trim().is_empty() {
                Vec::new()
            } else {
                // No optimistic "registered" state: the transition happens
                // only when a later snapshot carries the username back.
                vec![Effect::SubmitRegistration { name }]
            }
        }
        Msg::RegisterRejected(message) => {
            state.set_register_error(message);
            Vec::new()
        }
        Msg::CardChosen(value) => {
            if state.select_card(value) {
                vec![Effect::SubmitChoice { value }]
            } else {
                Vec::new()
            }
        }
        Msg::RevealClicked => {
            if state.can_reveal() {
                vec![Effect::RequestReveal]
            } else {
                Vec::new()
            }
        }
        Msg::ClearClicked => {
            if state.can_clear() {
                vec![Effect::RequestClear]
            } else {
                Vec::new()
            }
        }
        Msg::ClearUnlockElapsed => {
            state.release_clear_lock();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
