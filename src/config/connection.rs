//! Connection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Connection lifecycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// Delay between losing the channel and the next connect attempt, in
    /// milliseconds. The delay is fixed: no backoff growth, no retry cap.
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,

    /// Buffer size for outbound messages awaiting transmission. Messages
    /// beyond capacity are dropped, never queued across reconnects.
    #[serde(default = "default_outbound_capacity")]
    pub outbound_capacity: usize,
}

impl ConnectionConfig {
    /// Reconnect delay as a [`Duration`]
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    /// Validate connection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reconnect_delay_ms == 0 || self.reconnect_delay_ms > 300_000 {
            return Err(ValidationError::InvalidReconnectDelay);
        }
        if self.outbound_capacity == 0 {
            return Err(ValidationError::InvalidOutboundCapacity);
        }
        Ok(())
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: default_reconnect_delay_ms(),
            outbound_capacity: default_outbound_capacity(),
        }
    }
}

fn default_reconnect_delay_ms() -> u64 {
    2000
}

fn default_outbound_capacity() -> usize {
    64
}
