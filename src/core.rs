//! Core domain types and service traits for pollcast
//!
//! This module defines the message model and the trait contracts that
//! govern component interactions throughout the application.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The delivery channel a message is destined for.
///
/// The discriminator is derived from the [`Message`] variant and is never
/// stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Email,
    WhatsApp,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::WhatsApp => write!(f, "whatsapp"),
        }
    }
}

/// A notification destined for an email inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailMessage {
    /// Optional correlation identifier. The generator leaves this unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the message was produced.
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// A notification destined for a WhatsApp number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatsAppMessage {
    /// Optional correlation identifier. The generator leaves this unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the message was produced.
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    pub body: String,
}

/// One notification, tagged by its channel.
///
/// The set of channels is closed; observer dispatch is a match over the
/// variants rather than a runtime type test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "channel")]
pub enum Message {
    Email(EmailMessage),
    WhatsApp(WhatsAppMessage),
}

impl Message {
    /// The channel this message belongs to.
    pub fn channel(&self) -> Channel {
        match self {
            Message::Email(_) => Channel::Email,
            Message::WhatsApp(_) => Channel::WhatsApp,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Message::Email(m) => m.timestamp,
            Message::WhatsApp(m) => m.timestamp,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Message::Email(m) => &m.body,
            Message::WhatsApp(m) => &m.body,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Message::Email(m) => m.id.as_deref(),
            Message::WhatsApp(m) => m.id.as_deref(),
        }
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// Handles messages delivered by the publisher.
///
/// Implementations act only on the channel variant they understand and
/// silently ignore the rest. Delivery to a single observer within one tick
/// is sequential, so implementations need not be re-entrant.
#[async_trait]
pub trait Observer: Send + Sync {
    /// A unique, descriptive name for the observer (e.g., "email").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Processes one delivered message.
    ///
    /// # Returns
    /// * `Ok(())` if the message was handled (or ignored as foreign)
    /// * `Err` if handling failed; the publisher logs the failure and
    ///   continues with the remaining observers
    async fn handle(&self, message: &Message) -> Result<()>;
}

/// Produces one message per poll tick.
pub trait MessageSource: Send + Sync {
    /// Generates a fresh message. Never fails and retains no state
    /// between calls besides the source of randomness.
    fn generate(&self) -> Message;
}
