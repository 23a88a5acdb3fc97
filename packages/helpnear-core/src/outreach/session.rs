//! Per-session generation supersession: last request wins.

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{OutreachError, Result};
use crate::traits::{GenerativeService, HistoryStore};
use crate::types::Provider;

use super::generator::{ContactGenerator, GeneratedContact};

/// Wraps a [`ContactGenerator`] with a last-request-wins policy.
///
/// Starting a new generation cancels the one still in flight; the
/// superseded call resolves to
/// [`OutreachError::Cancelled`](crate::error::OutreachError::Cancelled)
/// and its result is discarded. There is no queue: at most one
/// generation per session is live at a time.
pub struct OutreachSession<A: GenerativeService, H: HistoryStore> {
    generator: ContactGenerator<A, H>,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<A: GenerativeService, H: HistoryStore> OutreachSession<A, H> {
    /// Create a session around a generator.
    pub fn new(generator: ContactGenerator<A, H>) -> Self {
        Self {
            generator,
            in_flight: Mutex::new(None),
        }
    }

    /// Generate artifacts, superseding any in-flight request.
    pub async fn generate(&self, provider: &Provider, situation: &str) -> Result<GeneratedContact> {
        let token = CancellationToken::new();
        if let Some(previous) = self
            .in_flight
            .lock()
            .unwrap()
            .replace(token.clone())
        {
            debug!("superseding in-flight generation");
            previous.cancel();
        }

        tokio::select! {
            result = self.generator.generate(provider, situation) => result,
            _ = token.cancelled() => Err(OutreachError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::stores::MemoryHistory;
    use crate::testing::MockGenerator;
    use crate::types::Category;

    fn artifacts_json() -> serde_json::Value {
        serde_json::json!({
            "call_script": "Hello",
            "message_template": "Hi",
            "checklist": ["a", "b", "c", "d", "e"],
            "questions": ["q1", "q2", "q3"]
        })
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_older() {
        let ai = MockGenerator::new()
            .with_response(artifacts_json())
            .with_latency(Duration::from_millis(200));
        let session = Arc::new(OutreachSession::new(ContactGenerator::new(
            ai,
            MemoryHistory::new(),
        )));
        let provider = Provider::new("City Clinic", Category::Medical);

        let first = {
            let session = Arc::clone(&session);
            let provider = provider.clone();
            tokio::spawn(async move { session.generate(&provider, "first request").await })
        };

        // Let the first request reach its select before superseding it
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = session.generate(&provider, "second request").await;
        assert!(second.is_ok());

        let first = first.await.unwrap();
        assert!(matches!(first, Err(OutreachError::Cancelled)));
    }

    #[tokio::test]
    async fn test_single_request_completes_normally() {
        let session = OutreachSession::new(ContactGenerator::new(
            MockGenerator::new().with_response(artifacts_json()),
            MemoryHistory::new(),
        ));
        let provider = Provider::new("City Clinic", Category::Medical);

        let result = session.generate(&provider, "just one request").await;

        assert!(result.is_ok());
    }
}
