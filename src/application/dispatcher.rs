//! Update dispatcher routing inbound messages to widget adapters.
//!
//! # Message Flow
//!
//! ```text
//! decoded ServerMessage
//!          │
//!          ▼
//! ┌───────────────────┐    init: one apply per element
//! │  UpdateDispatcher │───────────────────────────────┐
//! └───────────────────┘                               │
//!          │ update                                   │
//!          ▼                                          ▼
//!   resolve adapter via WidgetRegistry ── miss? discard (logged)
//!          │
//!          ▼
//!   kind matches? ── no? discard (logged)
//!          │ yes
//!          ▼
//!   adapter.apply(state)
//! ```
//!
//! Misses and mismatches are benign: the server may push before the client
//! has attached the widget, or the page may render a stale layout. Neither
//! tears anything down.

use std::sync::Arc;

use crate::domain::{ElementState, ServerMessage, SyncError, WidgetIdentity};

use super::registry::WidgetRegistry;

/// Routes decoded server messages to the right adapter.
///
/// Dispatch is idempotent: applying the same update twice yields the same
/// adapter state, so replays after reconnection are harmless.
pub struct UpdateDispatcher {
    registry: Arc<WidgetRegistry>,
}

impl UpdateDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<WidgetRegistry>) -> Self {
        Self { registry }
    }

    /// Handle one inbound message.
    ///
    /// `init` applies each contained element as if it were an individual
    /// update, in sequence order.
    pub async fn handle(&self, message: ServerMessage) {
        match message {
            ServerMessage::Init { elements } => {
                tracing::debug!(count = elements.len(), "applying initial widget state");
                for snapshot in elements {
                    self.apply(&snapshot.id, &snapshot.state).await;
                }
            }
            ServerMessage::Update { id, element } => {
                self.apply(&id, &element).await;
            }
        }
    }

    async fn apply(&self, id: &WidgetIdentity, state: &ElementState) {
        match self.try_apply(id, state).await {
            Ok(()) => {}
            Err(error @ SyncError::UnknownIdentity { .. }) => {
                tracing::warn!(%error, "discarding update");
            }
            Err(error) => {
                tracing::debug!(%error, "discarding update");
            }
        }
    }

    async fn try_apply(&self, id: &WidgetIdentity, state: &ElementState) -> Result<(), SyncError> {
        let adapter = self
            .registry
            .lookup(id)
            .await
            .ok_or_else(|| SyncError::UnknownIdentity { id: id.clone() })?;

        if adapter.kind() != state.kind() {
            return Err(SyncError::KindMismatch {
                id: id.clone(),
                adapter_kind: adapter.kind(),
                message_kind: state.kind(),
            });
        }

        adapter.apply(state);
        Ok(())
    }
}
