//! WebSocket transport over tokio-tungstenite.
//!
//! Text frames map one-to-one onto protocol frames. WebSocket control
//! frames (ping/pong) are handled by the library; binary frames are not
//! part of the protocol and are skipped.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::ports::{MessageChannel, Transport, TransportError};

/// [`Transport`] dialing a WebSocket endpoint.
pub struct WsTransport {
    url: Url,
}

impl WsTransport {
    /// Dial the given endpoint on every connect attempt.
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse and dial an endpoint such as `ws://127.0.0.1:3000/ws`.
    pub fn parse(endpoint: &str) -> Result<Self, TransportError> {
        let url = Url::parse(endpoint)
            .map_err(|e| TransportError::InvalidEndpoint(e.to_string()))?;
        Ok(Self::new(url))
    }

    /// The endpoint this transport dials.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn connect(&self) -> Result<Box<dyn MessageChannel>, TransportError> {
        let (stream, _response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(Box::new(WsChannel { stream }))
    }
}

struct WsChannel {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

#[async_trait]
impl MessageChannel for WsChannel {
    async fn send(&mut self, frame: String) -> Result<(), TransportError> {
        self.stream
            .send(Message::Text(frame))
            .await
            .map_err(|e| TransportError::Channel(e.to_string()))
    }

    async fn recv(&mut self) -> Option<Result<String, TransportError>> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Some(Ok(text)),
                Some(Ok(Message::Close(_))) => return None,
                // Control and binary frames are not protocol frames.
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Some(Err(TransportError::Channel(e.to_string()))),
                None => return None,
            }
        }
    }
}
