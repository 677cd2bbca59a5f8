//! Channel-specific observer implementations.
//!
//! Each observer acts only on the message variant for its own channel and
//! silently ignores the rest, so every observer can subscribe to the full
//! message stream.

pub mod email;
pub mod whatsapp;

pub use email::EmailObserver;
pub use whatsapp::WhatsAppObserver;
