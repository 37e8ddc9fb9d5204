//! In-memory duplex transport.
//!
//! Backs tests and same-process embedding without any real I/O. Each
//! [`Transport::connect`] call produces a fresh channel pair: the client
//! half goes to the connection manager, the server half is queued for
//! [`MemoryListener::accept`]. Dropping an endpoint closes its channel,
//! which the client observes as a clean close.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::ServerMessage;
use crate::ports::{MessageChannel, Transport, TransportError};

/// Per-channel frame buffer.
const FRAME_BUFFER: usize = 64;

/// Connect attempts queued but not yet accepted.
const ACCEPT_BACKLOG: usize = 8;

/// Create a connected transport/listener pair.
pub fn pair() -> (MemoryTransport, MemoryListener) {
    let (accept_tx, accept_rx) = mpsc::channel(ACCEPT_BACKLOG);
    (
        MemoryTransport { accept_tx },
        MemoryListener { accept_rx },
    )
}

/// Client side: a [`Transport`] whose connections land on the paired
/// [`MemoryListener`].
pub struct MemoryTransport {
    accept_tx: mpsc::Sender<MemoryEndpoint>,
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn connect(&self) -> Result<Box<dyn MessageChannel>, TransportError> {
        let (client_tx, server_rx) = mpsc::channel(FRAME_BUFFER);
        let (server_tx, client_rx) = mpsc::channel(FRAME_BUFFER);

        let endpoint = MemoryEndpoint {
            outbound: server_tx,
            inbound: server_rx,
        };

        self.accept_tx.try_send(endpoint).map_err(|_| {
            TransportError::Connect("no listener accepting connections".to_string())
        })?;

        Ok(Box::new(MemoryChannel {
            outbound: client_tx,
            inbound: client_rx,
        }))
    }
}

/// Server side: yields one [`MemoryEndpoint`] per client connect.
pub struct MemoryListener {
    accept_rx: mpsc::Receiver<MemoryEndpoint>,
}

impl MemoryListener {
    /// Wait for the next connection. Returns `None` once the paired
    /// transport is dropped.
    pub async fn accept(&mut self) -> Option<MemoryEndpoint> {
        self.accept_rx.recv().await
    }
}

/// The server half of one established channel. Dropping it closes the
/// channel cleanly from the client's point of view.
pub struct MemoryEndpoint {
    outbound: mpsc::Sender<String>,
    inbound: mpsc::Receiver<String>,
}

impl MemoryEndpoint {
    /// Push a raw frame to the client.
    pub async fn send(&self, frame: impl Into<String>) -> Result<(), TransportError> {
        self.outbound
            .send(frame.into())
            .await
            .map_err(|_| TransportError::Channel("client went away".to_string()))
    }

    /// Push a protocol message to the client as a JSON frame.
    pub async fn send_message(&self, message: &ServerMessage) -> Result<(), TransportError> {
        let frame = serde_json::to_string(message)
            .map_err(|e| TransportError::Channel(e.to_string()))?;
        self.send(frame).await
    }

    /// Receive the next frame from the client. `None` once the client
    /// dropped its half.
    pub async fn recv(&mut self) -> Option<String> {
        self.inbound.recv().await
    }
}

struct MemoryChannel {
    outbound: mpsc::Sender<String>,
    inbound: mpsc::Receiver<String>,
}

#[async_trait]
impl MessageChannel for MemoryChannel {
    async fn send(&mut self, frame: String) -> Result<(), TransportError> {
        self.outbound
            .send(frame)
            .await
            .map_err(|_| TransportError::Channel("peer endpoint dropped".to_string()))
    }

    async fn recv(&mut self) -> Option<Result<String, TransportError>> {
        self.inbound.recv().await.map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frames_flow_both_ways() {
        let (transport, mut listener) = pair();

        let mut channel = transport.connect().await.unwrap();
        let mut endpoint = listener.accept().await.unwrap();

        endpoint.send("down").await.unwrap();
        assert_eq!(channel.recv().await.unwrap().unwrap(), "down");

        channel.send("up".to_string()).await.unwrap();
        assert_eq!(endpoint.recv().await.unwrap(), "up");
    }

    #[tokio::test]
    async fn dropping_the_endpoint_closes_the_channel() {
        let (transport, mut listener) = pair();

        let mut channel = transport.connect().await.unwrap();
        let endpoint = listener.accept().await.unwrap();
        drop(endpoint);

        assert!(channel.recv().await.is_none());
    }

    #[tokio::test]
    async fn connect_fails_once_the_listener_is_gone() {
        let (transport, listener) = pair();
        drop(listener);

        let result = transport.connect().await;
        assert!(matches!(result, Err(TransportError::Connect(_))));
    }

    #[tokio::test]
    async fn each_connect_yields_a_fresh_endpoint() {
        let (transport, mut listener) = pair();

        let _first = transport.connect().await.unwrap();
        let _second = transport.connect().await.unwrap();

        assert!(listener.accept().await.is_some());
        assert!(listener.accept().await.is_some());
    }
}
