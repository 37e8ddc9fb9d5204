//! Error taxonomy for the synchronization core.
//!
//! None of these are fatal: the system degrades to "stale UI, retrying"
//! rather than tearing anything down. Malformed frames and misaddressed
//! updates are logged and discarded; a lost channel triggers reconnection.

use thiserror::Error;

use super::element::WidgetKind;
use super::identity::WidgetIdentity;

/// Non-fatal conditions raised while synchronizing widget state.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// An inbound frame failed to parse. Logged; the channel stays open.
    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    /// An update addressed a widget nothing is registered under. Expected
    /// during the window between a server push and client-side attachment.
    #[error("no widget registered under '{id}'")]
    UnknownIdentity { id: WidgetIdentity },

    /// An update's kind does not match the registered adapter's kind.
    #[error("update of kind '{message_kind}' targets '{id}' which is registered as '{adapter_kind}'")]
    KindMismatch {
        id: WidgetIdentity,
        adapter_kind: WidgetKind,
        message_kind: WidgetKind,
    },

    /// The transport closed or errored; reconnection follows after the
    /// configured delay.
    #[error("channel lost: {reason}")]
    ChannelLost { reason: String },
}
