//! Generative text service abstraction.

use async_trait::async_trait;

use crate::error::Result;

/// A schema-constrained generative text service.
///
/// Implementations wrap a specific LLM provider and are asked to emit an
/// object matching the supplied JSON-schema document. The caller is
/// responsible for validating the returned string against its own types;
/// transport failures surface as
/// [`OutreachError::Generation`](crate::error::OutreachError::Generation).
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Generate structured output conforming to `schema`.
    ///
    /// Returns the raw JSON string produced by the service.
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String>;
}
