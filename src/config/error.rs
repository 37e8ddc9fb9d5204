//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid reconnect delay")]
    InvalidReconnectDelay,

    #[error("Invalid outbound buffer capacity")]
    InvalidOutboundCapacity,
}
