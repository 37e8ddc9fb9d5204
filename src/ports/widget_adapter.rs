//! WidgetAdapter port - Interface to the rendering layer.
//!
//! The synchronization core never touches visuals. Each rendered widget is
//! represented by an adapter that knows how to apply authoritative state
//! and, for interactive kinds, where to report user interactions.

use crate::domain::{ElementState, Interaction, WidgetKind};

/// Callback invoked by an adapter for every local interaction.
pub type InteractionListener = Box<dyn Fn(Interaction) + Send + Sync>;

/// Port to one rendered widget.
///
/// Implementations should be:
/// - **Idempotent** - Applying the same state twice leaves the same visuals
/// - **Quick** - `apply` runs inline with inbound message dispatch
/// - **Kind-stable** - `kind()` never changes for a live adapter
///
/// # Example
///
/// ```ignore
/// struct ButtonAdapter { label: RenderHandle }
///
/// impl WidgetAdapter for ButtonAdapter {
///     fn kind(&self) -> WidgetKind {
///         WidgetKind::Button
///     }
///
///     fn apply(&self, state: &ElementState) {
///         if let ElementState::Button { text } = state {
///             self.label.set_text(text);
///         }
///     }
/// }
/// ```
pub trait WidgetAdapter: Send + Sync {
    /// The widget kind this adapter renders. Updates declaring a different
    /// kind are discarded before `apply` is reached.
    fn kind(&self) -> WidgetKind;

    /// Apply authoritative state to the visuals.
    ///
    /// Called for the widget's `init` snapshot and for every subsequent
    /// update addressed to it, in arrival order.
    fn apply(&self, state: &ElementState);
}

/// Capability: emits interaction events.
///
/// Interactive adapters accept a listener at attach time and invoke it for
/// every local interaction, in the order interactions occur. Display-only
/// kinds simply don't implement this trait.
pub trait InteractionSource: Send + Sync {
    /// Register the listener. Called once, when the widget is attached;
    /// a subsequent call replaces the previous listener.
    fn on_interaction(&self, listener: InteractionListener);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the ports are object-safe
    #[allow(dead_code)]
    fn assert_adapter_object_safe(_: &dyn WidgetAdapter) {}

    #[allow(dead_code)]
    fn assert_source_object_safe(_: &dyn InteractionSource) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn listener_is_send_sync() {
        assert_send_sync::<InteractionListener>();
    }
}
