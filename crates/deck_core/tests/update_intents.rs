use std::sync::Once;

use deck_core::{update, AppState, CardValue, Effect, Msg, Participant, Snapshot};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(deck_logging::initialize_for_tests);
}

fn user(name: &str, card: Option<&str>) -> Participant {
    Participant {
        name: name.to_string(),
        card: card.map(str::to_string),
    }
}

fn registered(users: Vec<Participant>, result: Option<&str>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::StatusReceived(Snapshot {
            counter: 1,
            users,
            username: Some("Alice".to_string()),
            result: result.map(str::to_string),
        }),
    );
    state
}

#[test]
fn whitespace_only_name_is_a_local_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::RegisterSubmitted("   \t".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state, next);
}

#[test]
fn register_emits_submission_without_state_change() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::RegisterSubmitted("Alice".to_string()));

    assert_eq!(
        effects,
        vec![Effect::SubmitRegistration {
            name: "Alice".to_string(),
        }]
    );
    assert_eq!(state, next);
}

#[test]
fn rejection_message_is_surfaced_verbatim() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::RegisterRejected("name taken".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.view().register_error.as_deref(), Some("name taken"));
    assert!(state.view().register_form_visible);
}

#[test]
fn choose_is_idempotent_per_value() {
    init_logging();
    let state = registered(vec![user("Alice", None)], None);

    let (state, effects) = update(state, Msg::CardChosen(CardValue::Five));
    assert_eq!(
        effects,
        vec![Effect::SubmitChoice {
            value: CardValue::Five,
        }]
    );

    // Re-clicking the selected card issues nothing.
    let (next, effects) = update(state.clone(), Msg::CardChosen(CardValue::Five));
    assert!(effects.is_empty());
    assert_eq!(state, next);

    // A different card replaces the selection and issues one call.
    let (state, effects) = update(next, Msg::CardChosen(CardValue::Coffee));
    assert_eq!(
        effects,
        vec![Effect::SubmitChoice {
            value: CardValue::Coffee,
        }]
    );
    let selected: Vec<_> = state
        .view()
        .cards
        .iter()
        .filter(|card| card.selected)
        .map(|card| card.value)
        .collect();
    assert_eq!(selected, vec![CardValue::Coffee]);
}

#[test]
fn choose_is_ignored_once_revealed() {
    init_logging();
    let state = registered(vec![user("Alice", Some("5"))], Some("5"));
    let (next, effects) = update(state.clone(), Msg::CardChosen(CardValue::Two));

    assert!(effects.is_empty());
    assert_eq!(state, next);
}

#[test]
fn reveal_requires_at_least_one_card() {
    init_logging();
    let state = registered(vec![user("Alice", None), user("Bob", None)], None);
    let (state, effects) = update(state, Msg::RevealClicked);
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::StatusReceived(Snapshot {
            counter: 2,
            users: vec![user("Alice", None), user("Bob", Some("8"))],
            username: Some("Alice".to_string()),
            result: None,
        }),
    );
    let (_, effects) = update(state, Msg::RevealClicked);
    assert_eq!(effects, vec![Effect::RequestReveal]);
}

#[test]
fn reveal_is_ignored_once_revealed() {
    init_logging();
    let state = registered(vec![user("Alice", Some("5"))], Some("5"));
    let (_, effects) = update(state, Msg::RevealClicked);
    assert!(effects.is_empty());
}

#[test]
fn clear_respects_the_post_reveal_lock() {
    init_logging();
    let state = registered(vec![user("Alice", Some("5"))], None);
    let (state, effects) = update(
        state,
        Msg::StatusReceived(Snapshot {
            counter: 2,
            users: vec![user("Alice", Some("5"))],
            username: Some("Alice".to_string()),
            result: Some("5".to_string()),
        }),
    );
    assert_eq!(effects, vec![Effect::ScheduleClearUnlock]);

    // Locked: the click must not double-fire during the reveal transition.
    let (state, effects) = update(state, Msg::ClearClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::ClearUnlockElapsed);
    let (_, effects) = update(state, Msg::ClearClicked);
    assert_eq!(effects, vec![Effect::RequestClear]);
}

#[test]
fn clear_is_ignored_without_a_result() {
    init_logging();
    let state = registered(vec![user("Alice", Some("5"))], None);
    let (_, effects) = update(state, Msg::ClearClicked);
    assert!(effects.is_empty());
}

#[test]
fn update_is_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
