//! Client configuration module
//!
//! Configuration is plain data constructed by the host application; this
//! crate never reads the environment on its own. All structs deserialize
//! with serde so hosts can source them from whatever config layer they use.
//!
//! # Example
//!
//! ```
//! use uilink::config::ConnectionConfig;
//!
//! let config = ConnectionConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

mod connection;
mod error;

pub use connection::ConnectionConfig;
pub use error::ValidationError;
