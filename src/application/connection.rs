//! Connection lifecycle management.
//!
//! Owns the duplex channel: dialing, serving an established channel, and
//! reconnecting after loss.
//!
//! ```text
//! Connecting --[handshake ok]--> Open
//! Connecting --[connect failed]--> Closed
//! Open --[channel closed or errored]--> Closed
//! Closed --[fixed delay elapsed]--> Connecting
//! ```
//!
//! Reconnection is attempted forever at a fixed delay; there is no backoff
//! growth and no retry cap. Outbound sends are permitted only while `Open`
//! and are otherwise dropped, never queued for later delivery.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::config::ConnectionConfig;
use crate::domain::protocol::{self, ClientMessage};
use crate::domain::SyncError;
use crate::ports::{MessageChannel, Transport};

use super::dispatcher::UpdateDispatcher;

/// Connection lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// A connect attempt is in flight.
    Connecting,

    /// The channel is established; sends flow through.
    Open,

    /// The channel is gone; a reconnect is scheduled.
    Closed,
}

impl ConnectionState {
    /// Whether outbound sends are permitted in this state.
    pub fn allows_sends(&self) -> bool {
        matches!(self, ConnectionState::Open)
    }

    /// Whether the connection is currently established.
    pub fn is_open(&self) -> bool {
        matches!(self, ConnectionState::Open)
    }
}

/// Cloneable handle for submitting outbound messages and observing status.
#[derive(Clone)]
pub struct ConnectionHandle {
    outbound_tx: mpsc::Sender<String>,
    state_rx: watch::Receiver<ConnectionState>,
}

impl ConnectionHandle {
    /// Submit one outbound message.
    ///
    /// While the connection is `Open`, messages are transmitted in call
    /// order. In any other state the message is dropped, not queued; a
    /// host needing at-least-once delivery of interactions must layer its
    /// own replay on top.
    pub fn send(&self, message: &ClientMessage) {
        let state = *self.state_rx.borrow();
        if !state.allows_sends() {
            tracing::trace!(?state, "dropping outbound message while not connected");
            return;
        }

        let frame = protocol::encode(message);
        if self.outbound_tx.try_send(frame).is_err() {
            tracing::debug!("outbound buffer full, dropping message");
        }
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Whether the connection is currently established.
    pub fn is_connected(&self) -> bool {
        self.state().is_open()
    }

    /// Subscribe to state transitions (for connection-status indicators).
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }
}

/// Drives the connection lifecycle and dispatches inbound frames.
///
/// The manager runs as a single task: one loop `select!`s between the
/// inbound frame stream and the outbound queue, so inbound messages are
/// dispatched strictly in arrival order and outbound sends strictly in
/// call order.
pub struct ConnectionManager {
    transport: Box<dyn Transport>,
    dispatcher: UpdateDispatcher,
    reconnect_delay: Duration,
    state_tx: watch::Sender<ConnectionState>,
    outbound_rx: mpsc::Receiver<String>,
    handle: ConnectionHandle,
}

impl ConnectionManager {
    /// Create a manager dialing through the given transport.
    pub fn new(
        transport: Box<dyn Transport>,
        dispatcher: UpdateDispatcher,
        config: &ConnectionConfig,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
        let (outbound_tx, outbound_rx) = mpsc::channel(config.outbound_capacity);

        let handle = ConnectionHandle {
            outbound_tx,
            state_rx,
        };

        Self {
            transport,
            dispatcher,
            reconnect_delay: config.reconnect_delay(),
            state_tx,
            outbound_rx,
            handle,
        }
    }

    /// Get a handle for sends and status observation.
    pub fn handle(&self) -> ConnectionHandle {
        self.handle.clone()
    }

    /// Run the connection forever.
    ///
    /// There is no protocol-level stop: the host ends the lifecycle by
    /// dropping this future (select against a shutdown signal, or abort
    /// the task it was spawned on).
    pub async fn run(mut self) {
        loop {
            self.state_tx.send_replace(ConnectionState::Connecting);

            match self.transport.connect().await {
                Ok(channel) => {
                    tracing::debug!("channel established");
                    self.state_tx.send_replace(ConnectionState::Open);

                    let lost = self.serve(channel).await;
                    tracing::debug!(error = %lost, "channel lost");
                }
                Err(error) => {
                    tracing::debug!(%error, "connect attempt failed");
                }
            }

            self.state_tx.send_replace(ConnectionState::Closed);
            self.discard_pending();

            tokio::time::sleep(self.reconnect_delay).await;
        }
    }

    /// Serve one established channel until it is lost.
    async fn serve(&mut self, mut channel: Box<dyn MessageChannel>) -> SyncError {
        loop {
            tokio::select! {
                inbound = channel.recv() => match inbound {
                    Some(Ok(frame)) => match protocol::decode(&frame) {
                        Ok(message) => self.dispatcher.handle(message).await,
                        // Malformed frames are logged; the channel stays open.
                        Err(error) => tracing::warn!(%error, "discarding inbound frame"),
                    },
                    Some(Err(error)) => {
                        return SyncError::ChannelLost {
                            reason: error.to_string(),
                        }
                    }
                    None => {
                        return SyncError::ChannelLost {
                            reason: "peer closed the channel".to_string(),
                        }
                    }
                },
                outbound = self.outbound_rx.recv() => {
                    // The manager keeps its own handle, so the queue never closes.
                    if let Some(frame) = outbound {
                        if let Err(error) = channel.send(frame).await {
                            return SyncError::ChannelLost {
                                reason: error.to_string(),
                            };
                        }
                    }
                }
            }
        }
    }

    /// Drop messages accepted before the channel closed. Sends are
    /// fire-and-forget; nothing is replayed on the next connection.
    fn discard_pending(&mut self) {
        while self.outbound_rx.try_recv().is_ok() {
            tracing::trace!("discarding outbound message accepted before the channel closed");
        }
    }
}
