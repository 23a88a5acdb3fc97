//! Contact artifact generation with history recording.

use tracing::{debug, error, warn};

use crate::common::InteractionId;
use crate::error::{HistoryError, OutreachError, Result};
use crate::traits::{GenerativeService, HistoryStore};
use crate::types::{ContactArtifacts, NewInteraction, Provider, ProviderSnapshot};

use super::prompts::{artifacts_schema, format_contact_prompt, CONTACT_SYSTEM_PROMPT};

/// The result of one successful generation.
///
/// The artifacts are always present; the history outcome rides alongside
/// them so a failed write is observable without withholding the
/// artifacts from the caller.
#[derive(Debug)]
pub struct GeneratedContact {
    pub artifacts: ContactArtifacts,
    pub history: std::result::Result<InteractionId, HistoryError>,
}

/// Builds the generation request, validates the response, and records
/// the interaction.
///
/// The generator performs no retries: a failed generation call
/// propagates and the caller decides whether to resubmit.
pub struct ContactGenerator<A: GenerativeService, H: HistoryStore> {
    ai: A,
    history: H,
}

impl<A: GenerativeService, H: HistoryStore> ContactGenerator<A, H> {
    /// Create a new generator.
    pub fn new(ai: A, history: H) -> Self {
        Self { ai, history }
    }

    /// Generate outreach artifacts for one provider and situation.
    ///
    /// Empty or whitespace-only situation text is rejected before any
    /// external call. The untrimmed text is what gets embedded in the
    /// prompt and recorded in history. A malformed response fails as a
    /// whole; no partial artifacts are ever surfaced. The history write
    /// is awaited so its failure can be observed and logged, but it
    /// never blocks the artifacts from reaching the caller.
    pub async fn generate(&self, provider: &Provider, situation: &str) -> Result<GeneratedContact> {
        if situation.trim().is_empty() {
            return Err(OutreachError::EmptySituation);
        }

        let snapshot = ProviderSnapshot::from(provider);
        let prompt = format_contact_prompt(&snapshot, situation);

        debug!(
            provider = %provider.name,
            situation_length = situation.len(),
            "requesting contact artifacts"
        );

        let raw = self
            .ai
            .generate_structured(CONTACT_SYSTEM_PROMPT, &prompt, artifacts_schema())
            .await?;

        let artifacts: ContactArtifacts = serde_json::from_str(&raw)?;

        if !(5..=8).contains(&artifacts.checklist.len()) {
            warn!(
                items = artifacts.checklist.len(),
                "checklist length outside requested range"
            );
        }
        if !(3..=5).contains(&artifacts.questions.len()) {
            warn!(
                items = artifacts.questions.len(),
                "question count outside requested range"
            );
        }

        let record = NewInteraction::from_generation(
            situation,
            provider.category,
            provider.id,
            &artifacts,
        );

        let history = self.history.create(record).await;
        if let Err(e) = &history {
            error!(error = %e, provider = %provider.name, "failed to record interaction");
        }

        Ok(GeneratedContact { artifacts, history })
    }
}
