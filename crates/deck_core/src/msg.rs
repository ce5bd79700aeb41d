use crate::{CardValue, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A status poll completed and delivered a fresh server snapshot.
    StatusReceived(Snapshot),
    /// User submitted the registration form with a display name.
    RegisterSubmitted(String),
    /// The register endpoint turned the name down; shown verbatim.
    RegisterRejected(String),
    /// User clicked a card in the grid.
    CardChosen(CardValue),
    /// User clicked the reveal control.
    RevealClicked,
    /// User clicked the clear control.
    ClearClicked,
    /// The post-reveal lock timer elapsed.
    ClearUnlockElapsed,
    /// Fallback for placeholder wiring.
    NoOp,
}
