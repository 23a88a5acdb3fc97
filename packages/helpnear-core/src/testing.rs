//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use this crate without
//! making real AI calls, touching a real store, or reading the wall
//! clock.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::common::InteractionId;
use crate::error::{ChannelResult, HistoryError, HistoryResult, OutreachError, Result};
use crate::traits::{Clock, ComposeTarget, GenerativeService, HistoryStore, OutreachChannel};
use crate::types::NewInteraction;

/// Record of a call made to [`MockGenerator`].
#[derive(Debug, Clone)]
pub struct MockGenerationCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub schema: serde_json::Value,
}

/// A mock generative service with deterministic, configurable behavior.
///
/// Clones share call history and configuration, so a test can keep a
/// handle for assertions while the generator owns another.
#[derive(Default, Clone)]
pub struct MockGenerator {
    response: Arc<RwLock<Option<String>>>,
    fail: Arc<RwLock<bool>>,
    latency: Arc<RwLock<Option<Duration>>>,
    calls: Arc<RwLock<Vec<MockGenerationCall>>>,
}

impl MockGenerator {
    /// Create a mock with no canned response (calls fail until one is set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose calls always fail.
    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.fail.write().unwrap() = true;
        mock
    }

    /// Set the canned response returned by every call.
    pub fn with_response(self, response: serde_json::Value) -> Self {
        *self.response.write().unwrap() = Some(response.to_string());
        self
    }

    /// Set a raw (possibly non-JSON) canned response.
    pub fn with_raw_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(response.into());
        self
    }

    /// Delay every call, for supersession tests.
    pub fn with_latency(self, latency: Duration) -> Self {
        *self.latency.write().unwrap() = Some(latency);
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<MockGenerationCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl GenerativeService for MockGenerator {
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        self.calls.write().unwrap().push(MockGenerationCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            schema,
        });

        let latency = *self.latency.read().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        if *self.fail.read().unwrap() {
            return Err(OutreachError::Generation("mock generation failure".into()));
        }

        self.response
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| OutreachError::Generation("no canned response configured".into()))
    }
}

/// A history store whose writes always fail.
///
/// For verifying that persistence failures never withhold artifacts.
#[derive(Default, Clone)]
pub struct FailingHistory {
    attempts: Arc<RwLock<usize>>,
}

impl FailingHistory {
    /// Create a new failing store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create attempts made against this store.
    pub fn attempts(&self) -> usize {
        *self.attempts.read().unwrap()
    }
}

#[async_trait]
impl HistoryStore for FailingHistory {
    async fn create(&self, _record: NewInteraction) -> HistoryResult<InteractionId> {
        *self.attempts.write().unwrap() += 1;
        Err(HistoryError::Store("mock store failure".into()))
    }
}

/// What a [`RecordingChannel`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Copied(String),
    Shared(String),
    Called(String),
    Composed { target: ComposeTarget, body: String },
}

/// An outreach channel that records every request instead of touching
/// the platform.
#[derive(Default, Clone)]
pub struct RecordingChannel {
    events: Arc<RwLock<Vec<ChannelEvent>>>,
}

impl RecordingChannel {
    /// Create a new recording channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    pub fn events(&self) -> Vec<ChannelEvent> {
        self.events.read().unwrap().clone()
    }
}

impl OutreachChannel for RecordingChannel {
    fn copy(&self, text: &str) -> ChannelResult<()> {
        self.events
            .write()
            .unwrap()
            .push(ChannelEvent::Copied(text.to_string()));
        Ok(())
    }

    fn share(&self, text: &str) -> ChannelResult<()> {
        self.events
            .write()
            .unwrap()
            .push(ChannelEvent::Shared(text.to_string()));
        Ok(())
    }

    fn call(&self, number: &str) -> ChannelResult<()> {
        self.events
            .write()
            .unwrap()
            .push(ChannelEvent::Called(number.to_string()));
        Ok(())
    }

    fn compose(&self, target: &ComposeTarget, body: &str) -> ChannelResult<()> {
        self.events.write().unwrap().push(ChannelEvent::Composed {
            target: target.clone(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to the given instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
