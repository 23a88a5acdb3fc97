//! Interaction history entries - one durable record per completed
//! assisted-contact generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{InteractionId, ProviderId};

use super::artifacts::ContactArtifacts;
use super::provider::Category;

/// A history entry submitted for persistence.
///
/// The store assigns the id and creation timestamp; see
/// [`InteractionRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInteraction {
    pub situation_text: String,
    pub category: Category,
    pub provider_id: ProviderId,
    pub call_script: String,
    pub message_template: String,
    pub checklist: Vec<String>,
    pub questions: Vec<String>,
}

impl NewInteraction {
    /// Build a record from the inputs and outputs of one generation.
    pub fn from_generation(
        situation_text: impl Into<String>,
        category: Category,
        provider_id: ProviderId,
        artifacts: &ContactArtifacts,
    ) -> Self {
        Self {
            situation_text: situation_text.into(),
            category,
            provider_id,
            call_script: artifacts.call_script.clone(),
            message_template: artifacts.message_template.clone(),
            checklist: artifacts.checklist.clone(),
            questions: artifacts.questions.clone(),
        }
    }
}

/// A persisted history entry.
///
/// Created exactly once per successful generation; never updated or
/// deleted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub id: InteractionId,
    pub situation_text: String,
    pub category: Category,
    pub provider_id: ProviderId,
    pub call_script: String,
    pub message_template: String,
    pub checklist: Vec<String>,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl InteractionRecord {
    /// Materialize a submitted record with store-assigned identity.
    pub fn assign(new: NewInteraction, id: InteractionId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            situation_text: new.situation_text,
            category: new.category,
            provider_id: new.provider_id,
            call_script: new.call_script,
            message_template: new.message_template,
            checklist: new.checklist,
            questions: new.questions,
            created_at,
        }
    }
}
