//! Local user-interaction events emitted by widget adapters.

use super::protocol::ChangeValue;

/// One user interaction on a widget, as observed by its adapter.
///
/// Every event is forwarded upstream exactly once, in the order it
/// occurred; there is no buffering or coalescing.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Activation with no payload (button press).
    Click,

    /// The raw value after a single edit, fired on every keystroke.
    ValueInput { value: String },

    /// A committed value, fired on pointer-up or blur.
    ValueChange { value: ChangeValue },
}
