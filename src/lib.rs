//! UiLink - client-side state synchronization for server-driven widget UIs.
//!
//! The server owns authoritative widget state; this crate keeps locally
//! rendered widgets in step with it over a duplex message channel. Inbound
//! `init` and `update` messages are dispatched to registered widget
//! adapters, local interactions are forwarded upstream, and a lost
//! connection is re-established automatically at a fixed delay.
//!
//! Rendering and transport stay behind ports: hosts supply per-kind
//! widget adapters and a transport (or use the bundled WebSocket one).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
