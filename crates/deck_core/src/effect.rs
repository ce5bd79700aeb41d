use std::time::Duration;

use crate::CardValue;

/// Hold-off before the clear control becomes clickable after a reveal.
pub const CLEAR_UNLOCK_DELAY: Duration = Duration::from_millis(1000);

/// Side effects requested by [`crate::update`]. The runner executes them
/// outside the pure state transition; none of them feed a result back except
/// through later messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the chosen display name to the register endpoint.
    SubmitRegistration { name: String },
    /// POST the chosen card to the choose endpoint, fire-and-forget.
    SubmitChoice { value: CardValue },
    /// Ask the server to reveal the round, fire-and-forget.
    RequestReveal,
    /// Ask the server to clear the round, fire-and-forget.
    RequestClear,
    /// Arrange for `Msg::ClearUnlockElapsed` after [`CLEAR_UNLOCK_DELAY`].
    ScheduleClearUnlock,
}
