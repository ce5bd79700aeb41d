use crate::card::{CardValue, DECK};
use crate::view_model::{AppViewModel, CardView, PlayerRowView};

/// Authoritative session state as reported by the server at one poll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Server-assigned revision token, monotonically non-decreasing.
    pub counter: u64,
    /// All participants in join order.
    pub users: Vec<Participant>,
    /// The name the server associates with this client, once registered.
    pub username: Option<String>,
    /// The revealed aggregate, once the round has been revealed.
    pub result: Option<String>,
}

/// One participant row. `card` is a server-supplied display token; other
/// players' cards are opaque to this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub card: Option<String>,
}

/// Where this client stands in the session, derived from the latest
/// accepted snapshot. Transitions are observed, never assumed: the client
/// only moves when a snapshot confirms the new condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No confirmed registration yet.
    #[default]
    Unregistered,
    /// Registered, round in progress.
    Voting,
    /// Registered and the round result is visible.
    Revealed,
}

/// The client's entire mutable state. Handlers replace it wholesale via
/// [`crate::update`]; there are no partial in-place edits across suspension
/// points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    counter: u64,
    users: Vec<Participant>,
    username: Option<String>,
    result: Option<String>,
    selected_card: Option<CardValue>,
    clear_button_disabled: bool,
    register_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter of the most recently accepted snapshot. This is the value a
    /// poll sends back to the server, never an optimistic one.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn session(&self) -> SessionState {
        match (&self.username, &self.result) {
            (None, _) => SessionState::Unregistered,
            (Some(_), None) => SessionState::Voting,
            (Some(_), Some(_)) => SessionState::Revealed,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let has_any_card = self.users.iter().any(|user| user.card.is_some());
        AppViewModel {
            session: self.session(),
            players: self
                .users
                .iter()
                .map(|user| PlayerRowView {
                    name: user.name.clone(),
                    card: user.card.clone(),
                })
                .collect(),
            result: self.result.clone(),
            cards: if self.username.is_some() {
                DECK.iter()
                    .map(|&value| CardView {
                        value,
                        selected: self.selected_card == Some(value),
                        enabled: self.result.is_none(),
                    })
                    .collect()
            } else {
                Vec::new()
            },
            reveal_visible: self.result.is_none() && !self.users.is_empty(),
            reveal_enabled: self.result.is_none() && has_any_card,
            clear_visible: self.result.is_some(),
            clear_enabled: self.result.is_some() && !self.clear_button_disabled,
            register_form_visible: self.username.is_none(),
            register_error: self.register_error.clone(),
        }
    }

    /// Reconciles a server snapshot into local state. Returns true when this
    /// snapshot is the first to carry a result (the reveal edge); the edge
    /// also arms the clear-button lock.
    pub(crate) fn apply_snapshot(&mut self, snapshot: Snapshot) -> bool {
        let just_revealed = self.result.is_none() && snapshot.result.is_some();
        // A reveal always supersedes a pending local selection.
        let next_selected = if snapshot.result.is_some() {
            None
        } else {
            self.selected_card
        };
        let changed = self.counter != snapshot.counter
            || self.users != snapshot.users
            || self.username != snapshot.username
            || self.result != snapshot.result
            || self.selected_card != next_selected
            || just_revealed;

        self.counter = snapshot.counter;
        self.users = snapshot.users;
        self.username = snapshot.username;
        self.result = snapshot.result;
        self.selected_card = next_selected;
        self.clear_button_disabled = self.clear_button_disabled || just_revealed;
        if changed {
            self.dirty = true;
        }
        just_revealed
    }

    /// Optimistic card selection. Returns false when the click is a no-op,
    /// either because the round is already revealed or the card is already
    /// selected.
    pub(crate) fn select_card(&mut self, value: CardValue) -> bool {
        if self.result.is_some() || self.selected_card == Some(value) {
            return false;
        }
        self.selected_card = Some(value);
        self.dirty = true;
        true
    }

    pub(crate) fn set_register_error(&mut self, message: String) {
        self.register_error = Some(message);
        self.dirty = true;
    }

    /// Drops the post-reveal clear lock unconditionally. The unlock timer
    /// operates on whatever state exists when it fires, regardless of how
    /// many snapshots were reconciled in between.
    pub(crate) fn release_clear_lock(&mut self) {
        if self.clear_button_disabled {
            self.dirty = true;
        }
        self.clear_button_disabled = false;
    }

    pub(crate) fn can_reveal(&self) -> bool {
        self.result.is_none() && self.users.iter().any(|user| user.card.is_some())
    }

    pub(crate) fn can_clear(&self) -> bool {
        self.result.is_some() && !self.clear_button_disabled
    }

    /// Takes the render-coalescing flag; true means the visible state moved
    /// since the last render.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
