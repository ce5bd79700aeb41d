use crate::{CardValue, SessionState};

/// Registration input length cap, enforced by the input surface.
pub const NAME_LIMIT: usize = 20;

/// Projection of [`crate::AppState`] for rendering. Pure and reproducible:
/// the same state always projects to the same view, whatever the rendering
/// technology.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub players: Vec<PlayerRowView>,
    pub result: Option<String>,
    /// The card grid; empty while unregistered.
    pub cards: Vec<CardView>,
    pub reveal_visible: bool,
    pub reveal_enabled: bool,
    pub clear_visible: bool,
    pub clear_enabled: bool,
    pub register_form_visible: bool,
    pub register_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRowView {
    pub name: String,
    pub card: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub value: CardValue,
    pub selected: bool,
    pub enabled: bool,
}
