use crate::core::{Message, Observer};
use crate::formatting::{MessageFormatter, PlainTextFormatter};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Logs every WhatsApp message it receives; other channels are ignored.
pub struct WhatsAppObserver;

#[async_trait]
impl Observer for WhatsAppObserver {
    fn name(&self) -> &str {
        "whatsapp"
    }

    async fn handle(&self, message: &Message) -> Result<()> {
        if let Message::WhatsApp(_) = message {
            info!(
                rendered = %PlainTextFormatter.format(message),
                "whatsapp message received"
            );
        }
        Ok(())
    }
}
