//! The client context object hosts construct and wire widgets through.
//!
//! There is no global instance: the host builds a [`SyncClient`] with a
//! transport and config, spawns the returned [`ConnectionManager`], and
//! attaches widget adapters as they appear in the render tree.
//!
//! # Example
//!
//! ```ignore
//! let transport = Box::new(WsTransport::new(url));
//! let (client, manager) = SyncClient::new(transport, ConnectionConfig::default());
//! tokio::spawn(manager.run());
//!
//! let form = client.scope("form");
//! form.attach_interactive("submit", submit_button).await;
//! form.attach("status", status_text).await;
//! ```

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::ConnectionConfig;
use crate::domain::{ScopePath, WidgetIdentity};
use crate::ports::{InteractionSource, Transport, WidgetAdapter};

use super::connection::{ConnectionHandle, ConnectionManager, ConnectionState};
use super::dispatcher::UpdateDispatcher;
use super::forwarder::InteractionForwarder;
use super::registry::WidgetRegistry;

/// Explicit context tying the registry, forwarder, and connection together.
///
/// Cheap to clone; all clones share the same registry and connection.
#[derive(Clone)]
pub struct SyncClient {
    registry: Arc<WidgetRegistry>,
    forwarder: Arc<InteractionForwarder>,
    connection: ConnectionHandle,
}

impl SyncClient {
    /// Build a client over the given transport.
    ///
    /// Returns the client plus the [`ConnectionManager`] whose
    /// [`run`](ConnectionManager::run) future the host must drive (usually
    /// by spawning it).
    pub fn new(transport: Box<dyn Transport>, config: ConnectionConfig) -> (Self, ConnectionManager) {
        let registry = Arc::new(WidgetRegistry::new());
        let dispatcher = UpdateDispatcher::new(Arc::clone(&registry));
        let manager = ConnectionManager::new(transport, dispatcher, &config);
        let connection = manager.handle();
        let forwarder = Arc::new(InteractionForwarder::new(connection.clone()));

        (
            Self {
                registry,
                forwarder,
                connection,
            },
            manager,
        )
    }

    /// Attach a display-only widget under an already-resolved identity.
    pub async fn attach<A>(&self, identity: impl Into<WidgetIdentity>, adapter: Arc<A>)
    where
        A: WidgetAdapter + 'static,
    {
        self.registry.register(identity.into(), adapter).await;
    }

    /// Attach an interactive widget: registers the adapter and wires its
    /// interaction events into the outbound path.
    pub async fn attach_interactive<A>(&self, identity: impl Into<WidgetIdentity>, adapter: Arc<A>)
    where
        A: WidgetAdapter + InteractionSource + 'static,
    {
        let identity = identity.into();
        self.forwarder.subscribe(identity.clone(), adapter.as_ref());
        self.registry.register(identity, adapter).await;
    }

    /// A handle scoped under `name`: identities attached through it are
    /// prefixed, so separate UI sections can reuse local ids.
    pub fn scope(&self, name: &str) -> ScopedClient {
        ScopedClient {
            client: self.clone(),
            path: ScopePath::root().child(name),
        }
    }

    /// The shared widget registry.
    pub fn registry(&self) -> &Arc<WidgetRegistry> {
        &self.registry
    }

    /// Handle for manual sends and connection checks.
    pub fn connection(&self) -> &ConnectionHandle {
        &self.connection
    }

    /// Subscribe to connection-status transitions.
    pub fn subscribe_status(&self) -> watch::Receiver<ConnectionState> {
        self.connection.subscribe()
    }
}

/// A [`SyncClient`] view that qualifies every local id under a scope path.
#[derive(Clone)]
pub struct ScopedClient {
    client: SyncClient,
    path: ScopePath,
}

impl ScopedClient {
    /// Nest a further scope. Empty names are transparent.
    pub fn scope(&self, name: &str) -> ScopedClient {
        ScopedClient {
            client: self.client.clone(),
            path: self.path.child(name),
        }
    }

    /// Attach a display-only widget under `path.local_id`.
    pub async fn attach<A>(&self, local_id: &str, adapter: Arc<A>)
    where
        A: WidgetAdapter + 'static,
    {
        self.client.attach(self.path.qualify(local_id), adapter).await;
    }

    /// Attach an interactive widget under `path.local_id`.
    pub async fn attach_interactive<A>(&self, local_id: &str, adapter: Arc<A>)
    where
        A: WidgetAdapter + InteractionSource + 'static,
    {
        self.client
            .attach_interactive(self.path.qualify(local_id), adapter)
            .await;
    }

    /// The scope path this view qualifies under.
    pub fn path(&self) -> &ScopePath {
        &self.path
    }
}
