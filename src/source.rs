//! The demo message source: picks a channel at random on every call.

use crate::core::{EmailMessage, Message, MessageSource, WhatsAppMessage};
use chrono::Utc;
use rand::Rng;

/// Generates one message per call, choosing the channel by a uniform
/// binary draw.
pub struct RandomMessageSource;

impl MessageSource for RandomMessageSource {
    fn generate(&self) -> Message {
        if rand::rng().random_bool(0.5) {
            whatsapp_message()
        } else {
            email_message()
        }
    }
}

fn whatsapp_message() -> Message {
    Message::WhatsApp(WhatsAppMessage {
        id: None,
        timestamp: Utc::now(),
        sender: "+390000000".to_string(),
        recipient: "+39111111".to_string(),
        body: "Reply YES to this number if you received this correctly".to_string(),
    })
}

fn email_message() -> Message {
    Message::Email(EmailMessage {
        id: None,
        timestamp: Utc::now(),
        sender: "publisher@example.com".to_string(),
        recipient: "observer@example.com".to_string(),
        subject: "New notification".to_string(),
        body: "We have a new notification for you, check your phone".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Channel;

    #[test]
    fn generates_both_channels_eventually() {
        let source = RandomMessageSource;
        let mut seen_email = false;
        let mut seen_whatsapp = false;
        // 64 uniform draws; the chance of a one-sided run is negligible.
        for _ in 0..64 {
            match source.generate().channel() {
                Channel::Email => seen_email = true,
                Channel::WhatsApp => seen_whatsapp = true,
            }
            if seen_email && seen_whatsapp {
                return;
            }
        }
        panic!("expected both channels within 64 draws (email: {seen_email}, whatsapp: {seen_whatsapp})");
    }

    #[test]
    fn generated_messages_carry_no_id() {
        let source = RandomMessageSource;
        assert!(source.generate().id().is_none());
    }
}
