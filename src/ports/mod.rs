//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the synchronization core and the outside world. Adapters implement them.
//!
//! - `WidgetAdapter` - Applies authoritative state to one rendered widget
//! - `InteractionSource` - Emits a widget's local interaction events
//! - `Transport` / `MessageChannel` - The duplex message channel

mod transport;
mod widget_adapter;

pub use transport::{MessageChannel, Transport, TransportError};
pub use widget_adapter::{InteractionListener, InteractionSource, WidgetAdapter};
