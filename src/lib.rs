//! Pollcast - a polling publish/subscribe notifier
//!
//! This library provides a publisher that polls a message source at a fixed
//! interval and fans each generated message out to a dynamic set of
//! channel-specific observers.

pub mod cli;
pub mod config;
pub mod core;
pub mod formatting;
pub mod observers;
pub mod publisher;
pub mod source;

// Re-export core types for convenience
pub use crate::core::{Channel, EmailMessage, Message, MessageSource, Observer, WhatsAppMessage};
pub use publisher::{PollingPublisher, PublisherError};
pub use source::RandomMessageSource;
