//! Interaction forwarder bridging widget adapters to the outbound channel.
//!
//! At attach time the forwarder registers a listener with the adapter;
//! from then on every local interaction becomes exactly one outbound
//! message tagged with the widget's resolved identity, in event order.
//! There is no buffering or coalescing, and messages raised while the
//! connection is down are dropped by the connection handle.

use crate::domain::{ClientMessage, Interaction, WidgetIdentity};
use crate::ports::InteractionSource;

use super::connection::ConnectionHandle;

/// Captures local interaction events and submits them upstream.
pub struct InteractionForwarder {
    connection: ConnectionHandle,
}

impl InteractionForwarder {
    /// Create a forwarder that submits through the given handle.
    pub fn new(connection: ConnectionHandle) -> Self {
        Self { connection }
    }

    /// Wire one interactive widget into the outbound path.
    ///
    /// Called once per widget, at attach time.
    pub fn subscribe(&self, identity: WidgetIdentity, source: &dyn InteractionSource) {
        let connection = self.connection.clone();
        source.on_interaction(Box::new(move |interaction| {
            let message = outbound_message(&identity, interaction);
            connection.send(&message);
        }));
    }
}

/// Build the outbound message for one interaction.
fn outbound_message(id: &WidgetIdentity, interaction: Interaction) -> ClientMessage {
    match interaction {
        Interaction::Click => ClientMessage::Click { id: id.clone() },
        Interaction::ValueInput { value } => ClientMessage::Input {
            id: id.clone(),
            value,
        },
        Interaction::ValueChange { value } => ClientMessage::Change {
            id: id.clone(),
            value,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChangeValue;

    #[test]
    fn click_maps_to_click_message() {
        let id = WidgetIdentity::new("form.submit");
        assert_eq!(
            outbound_message(&id, Interaction::Click),
            ClientMessage::Click {
                id: WidgetIdentity::new("form.submit")
            }
        );
    }

    #[test]
    fn value_input_carries_the_raw_value() {
        let id = WidgetIdentity::new("form.name");
        assert_eq!(
            outbound_message(
                &id,
                Interaction::ValueInput {
                    value: "Ann".to_string()
                }
            ),
            ClientMessage::Input {
                id: WidgetIdentity::new("form.name"),
                value: "Ann".to_string(),
            }
        );
    }

    #[test]
    fn value_change_carries_the_committed_value() {
        let id = WidgetIdentity::new("opts.volume");
        assert_eq!(
            outbound_message(
                &id,
                Interaction::ValueChange {
                    value: ChangeValue::Number(75.0)
                }
            ),
            ClientMessage::Change {
                id: WidgetIdentity::new("opts.volume"),
                value: ChangeValue::Number(75.0),
            }
        );
    }
}
