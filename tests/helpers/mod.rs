//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use pollcast::{EmailMessage, Message, MessageSource, Observer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A deterministic source that always produces the same email message.
pub struct FixedSource;

impl MessageSource for FixedSource {
    fn generate(&self) -> Message {
        Message::Email(EmailMessage {
            id: None,
            timestamp: Utc::now(),
            sender: "publisher@example.com".to_string(),
            recipient: "observer@example.com".to_string(),
            subject: "tick".to_string(),
            body: "tick".to_string(),
        })
    }
}

/// Counts how many messages it was handed.
pub struct CountingObserver {
    calls: AtomicUsize,
}

impl CountingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Observer for CountingObserver {
    fn name(&self) -> &str {
        "counting"
    }

    async fn handle(&self, _message: &Message) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Records every message it was handed, in delivery order.
pub struct RecordingObserver {
    received: Mutex<Vec<Message>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Observer for RecordingObserver {
    fn name(&self) -> &str {
        "recording"
    }

    async fn handle(&self, message: &Message) -> Result<()> {
        self.received.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails on every message.
pub struct FailingObserver;

#[async_trait]
impl Observer for FailingObserver {
    fn name(&self) -> &str {
        "failing"
    }

    async fn handle(&self, _message: &Message) -> Result<()> {
        Err(anyhow!("handler blew up"))
    }
}
