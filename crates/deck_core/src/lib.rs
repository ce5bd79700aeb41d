//! Deck core: pure session state machine and view-model helpers.
mod card;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use card::{CardValue, DECK};
pub use effect::{Effect, CLEAR_UNLOCK_DELAY};
pub use msg::Msg;
pub use state::{AppState, Participant, SessionState, Snapshot};
pub use update::update;
pub use view_model::{AppViewModel, CardView, PlayerRowView, NAME_LIMIT};
