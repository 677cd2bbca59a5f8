use crate::core::Message;

/// A trait for rendering a message into a single human-readable line.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, message: &Message) -> String;
}

/// Renders the channel-specific fields of a message as plain text.
pub struct PlainTextFormatter;

impl MessageFormatter for PlainTextFormatter {
    fn format(&self, message: &Message) -> String {
        match message {
            Message::Email(email) => format!(
                "[{}] {} -> {} \"{}\": {}",
                email.timestamp.to_rfc3339(),
                email.sender,
                email.recipient,
                email.subject,
                email.body
            ),
            Message::WhatsApp(whatsapp) => format!(
                "[{}] {} -> {}: {}",
                whatsapp.timestamp.to_rfc3339(),
                whatsapp.sender,
                whatsapp.recipient,
                whatsapp.body
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EmailMessage, WhatsAppMessage};
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_email_with_subject() {
        let message = Message::Email(EmailMessage {
            id: None,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            sender: "a@example.com".to_string(),
            recipient: "b@example.com".to_string(),
            subject: "Hi".to_string(),
            body: "hello".to_string(),
        });

        let line = PlainTextFormatter.format(&message);
        assert!(line.contains("a@example.com -> b@example.com"));
        assert!(line.contains("\"Hi\""));
        assert!(line.contains("2026-01-01T12:00:00"));
    }

    #[test]
    fn formats_whatsapp_without_subject() {
        let message = Message::WhatsApp(WhatsAppMessage {
            id: None,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            sender: "+1".to_string(),
            recipient: "+2".to_string(),
            body: "ping".to_string(),
        });

        let line = PlainTextFormatter.format(&message);
        assert!(line.contains("+1 -> +2: ping"));
        assert!(!line.contains('"'));
    }
}
