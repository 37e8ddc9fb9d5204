//! Domain layer: identities, widget state, the wire protocol, and errors.
//!
//! # Module Organization
//!
//! - `identity` - Hierarchical widget identity resolution and scope paths
//! - `element` - Widget kinds and their kind-specific synchronized state
//! - `protocol` - JSON wire messages and framing
//! - `interaction` - Local user-interaction events
//! - `errors` - Non-fatal error taxonomy

pub mod element;
pub mod errors;
pub mod identity;
pub mod interaction;
pub mod protocol;

pub use element::{ElementState, WidgetKind};
pub use errors::SyncError;
pub use identity::{ScopePath, WidgetIdentity};
pub use interaction::Interaction;
pub use protocol::{ChangeValue, ClientMessage, ElementSnapshot, ServerMessage};
