use crate::core::{Message, Observer};
use crate::formatting::{MessageFormatter, PlainTextFormatter};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Logs every email message it receives; other channels are ignored.
pub struct EmailObserver;

#[async_trait]
impl Observer for EmailObserver {
    fn name(&self) -> &str {
        "email"
    }

    async fn handle(&self, message: &Message) -> Result<()> {
        if let Message::Email(_) = message {
            info!(
                rendered = %PlainTextFormatter.format(message),
                "email message received"
            );
        }
        Ok(())
    }
}
