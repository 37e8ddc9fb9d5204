//! Transport port - Interface to the duplex message channel.
//!
//! The core assumes only a message-oriented duplex channel carrying text
//! frames. Connecting yields a fresh channel; the channel reports loss and
//! clean closure, and the connection manager decides when to dial again.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by transport implementations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint is not a usable URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Establishing the channel failed.
    #[error("connect failed: {0}")]
    Connect(String),

    /// An established channel broke mid-use.
    #[error("channel error: {0}")]
    Channel(String),
}

/// Port for dialing the server.
///
/// One transport instance is dialed repeatedly over the client's lifetime,
/// once per (re)connection attempt.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Establish a fresh channel. A successful return is the handshake;
    /// the connection counts as open from this moment.
    async fn connect(&self) -> Result<Box<dyn MessageChannel>, TransportError>;
}

/// One established duplex channel carrying text frames.
///
/// Frames are delivered in order in both directions. The channel is used
/// from a single task; implementations don't need internal synchronization.
#[async_trait]
pub trait MessageChannel: Send {
    /// Transmit one frame.
    async fn send(&mut self, frame: String) -> Result<(), TransportError>;

    /// Receive the next frame.
    ///
    /// Returns `None` when the peer closed the channel cleanly; an `Err`
    /// means the channel broke. Either way the channel is finished.
    async fn recv(&mut self) -> Option<Result<String, TransportError>>;
}
