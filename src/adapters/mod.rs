//! Adapters - Implementations of the transport port.
//!
//! - `memory` - In-process duplex channel for tests and embedding
//! - `websocket` - WebSocket client over tokio-tungstenite

pub mod memory;
pub mod websocket;

pub use memory::{MemoryEndpoint, MemoryListener, MemoryTransport};
pub use websocket::WsTransport;
