//! Wire protocol for widget state synchronization.
//!
//! Defines the JSON text frames exchanged with the server:
//! - Server → Client: full state snapshots (`init`) and single-widget updates
//! - Client → Server: user interactions (clicks, edits, committed changes)

use serde::{Deserialize, Serialize};

use super::element::ElementState;
use super::errors::SyncError;
use super::identity::WidgetIdentity;

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be received from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Full widget state, sent once per connection. The client rebuilds
    /// everything from this; nothing survives a reconnect.
    Init { elements: Vec<ElementSnapshot> },

    /// Authoritative state for a single widget.
    Update {
        id: WidgetIdentity,
        element: ElementState,
    },
}

/// One widget's state paired with its identity, as carried inside `init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: WidgetIdentity,
    #[serde(flatten)]
    pub state: ElementState,
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// A button was clicked.
    Click { id: WidgetIdentity },

    /// A text input changed; sent on every edit with the raw value.
    Input { id: WidgetIdentity, value: String },

    /// A value was committed (pointer-up, blur).
    Change { id: WidgetIdentity, value: ChangeValue },
}

/// Committed value of a `change` interaction.
///
/// Checkbox and radio commit a bool, slider and number a number, and
/// anything else a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

// ============================================
// Framing
// ============================================

/// Decode an inbound JSON frame.
///
/// A frame that does not parse is a [`SyncError::MalformedMessage`]; the
/// caller logs it and keeps the channel open.
pub fn decode(frame: &str) -> Result<ServerMessage, SyncError> {
    serde_json::from_str(frame).map_err(|e| SyncError::MalformedMessage {
        reason: e.to_string(),
    })
}

/// Encode an outbound message to a JSON frame.
pub fn encode(message: &ClientMessage) -> String {
    serde_json::to_string(message).expect("outbound message serialization should not fail")
}
