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

fn snapshot(
    counter: u64,
    users: Vec<Participant>,
    username: Option<&str>,
    result: Option<&str>,
) -> Snapshot {
    Snapshot {
        counter,
        users,
        username: username.map(str::to_string),
        result: result.map(str::to_string),
    }
}

fn voting_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::StatusReceived(snapshot(
            1,
            vec![user("Alice", Some("5"))],
            Some("Alice"),
            None,
        )),
    );
    state
}

#[test]
fn snapshot_counter_becomes_the_accepted_counter() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::StatusReceived(snapshot(7, Vec::new(), None, None)),
    );

    assert_eq!(state.counter(), 7);
    assert!(effects.is_empty());
}

#[test]
fn reveal_edge_locks_clear_and_schedules_one_unlock() {
    init_logging();
    let state = voting_state();

    let (state, effects) = update(
        state,
        Msg::StatusReceived(snapshot(
            2,
            vec![user("Alice", Some("5"))],
            Some("Alice"),
            Some("5"),
        )),
    );

    assert_eq!(effects, vec![Effect::ScheduleClearUnlock]);
    let view = state.view();
    assert!(view.clear_visible);
    assert!(!view.clear_enabled);
    assert!(!view.reveal_visible);
}

#[test]
fn repeated_result_snapshot_is_a_fixed_point() {
    init_logging();
    let state = voting_state();
    let revealed = snapshot(
        2,
        vec![user("Alice", Some("5"))],
        Some("Alice"),
        Some("5"),
    );

    let (first, effects) = update(state, Msg::StatusReceived(revealed.clone()));
    assert_eq!(effects, vec![Effect::ScheduleClearUnlock]);

    // Same snapshot again: no second unlock, no state movement.
    let (second, effects) = update(first.clone(), Msg::StatusReceived(revealed));
    assert!(effects.is_empty());
    assert_eq!(first, second);
}

#[test]
fn result_supersedes_pending_selection() {
    init_logging();
    let state = voting_state();
    let (state, _) = update(state, Msg::CardChosen(CardValue::Five));
    assert!(state.view().cards.iter().any(|card| card.selected));

    let (state, _) = update(
        state,
        Msg::StatusReceived(snapshot(
            2,
            vec![user("Alice", Some("5"))],
            Some("Alice"),
            Some("5"),
        )),
    );

    let view = state.view();
    assert!(view.cards.iter().all(|card| !card.selected));
    assert!(view.cards.iter().all(|card| !card.enabled));
}

#[test]
fn selection_survives_polls_without_result() {
    init_logging();
    let state = voting_state();
    let (state, _) = update(state, Msg::CardChosen(CardValue::Eight));

    // The server has not caught up yet; the optimistic selection stays.
    let (state, effects) = update(
        state,
        Msg::StatusReceived(snapshot(
            2,
            vec![user("Alice", Some("5"))],
            Some("Alice"),
            None,
        )),
    );

    assert!(effects.is_empty());
    let selected: Vec<_> = state
        .view()
        .cards
        .iter()
        .filter(|card| card.selected)
        .map(|card| card.value)
        .collect();
    assert_eq!(selected, vec![CardValue::Eight]);
}

#[test]
fn unlock_applies_after_arbitrarily_many_intervening_snapshots() {
    init_logging();
    let state = voting_state();
    let (mut state, effects) = update(
        state,
        Msg::StatusReceived(snapshot(
            2,
            vec![user("Alice", Some("5"))],
            Some("Alice"),
            Some("5"),
        )),
    );
    assert_eq!(effects, vec![Effect::ScheduleClearUnlock]);

    // Several 200ms polls land before the 1000ms timer fires.
    for counter in 3..8 {
        let (next, effects) = update(
            state,
            Msg::StatusReceived(snapshot(
                counter,
                vec![user("Alice", Some("5"))],
                Some("Alice"),
                Some("5"),
            )),
        );
        assert!(effects.is_empty());
        state = next;
        assert!(!state.view().clear_enabled);
    }

    let (state, effects) = update(state, Msg::ClearUnlockElapsed);
    assert!(effects.is_empty());
    assert!(state.view().clear_enabled);
}

#[test]
fn unlock_without_pending_lock_is_harmless() {
    init_logging();
    let state = voting_state();
    let (next, effects) = update(state.clone(), Msg::ClearUnlockElapsed);

    assert!(effects.is_empty());
    assert_eq!(state.view(), next.view());
}
