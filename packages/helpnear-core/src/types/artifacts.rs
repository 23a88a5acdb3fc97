//! Outreach artifacts - the structured output of the assisted-contact
//! generation, plus the provider snapshot embedded in the request.

use serde::{Deserialize, Serialize};

use super::provider::{BudgetTier, Category, Provider};

/// The slice of a provider profile that the generation request embeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSnapshot {
    pub name: String,
    pub category: Category,
    pub languages: Vec<String>,
    pub budget: Option<BudgetTier>,
}

impl From<&Provider> for ProviderSnapshot {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.name.clone(),
            category: provider.category,
            languages: provider.languages.clone(),
            budget: provider.budget,
        }
    }
}

/// The four outreach artifacts produced by one generation.
///
/// All four fields are required: this type deliberately carries no serde
/// defaults, so a response missing any field (or carrying one of the
/// wrong shape) fails deserialization instead of surfacing a partially
/// populated result. Held in memory for display only; never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactArtifacts {
    /// Polite, structured call script (guidance: at most 8 lines).
    pub call_script: String,

    /// SMS/email message template (guidance: at most 500 characters).
    pub message_template: String,

    /// Preparation steps or documents (guidance: 5-8 items).
    pub checklist: Vec<String>,

    /// Clarification questions to ask the provider (guidance: 3-5).
    pub questions: Vec<String>,
}

impl ContactArtifacts {
    /// Checklist as a bulleted text block, ready for share/copy.
    pub fn checklist_text(&self) -> String {
        bulleted(&self.checklist)
    }

    /// Questions as a bulleted text block, ready for share/copy.
    pub fn questions_text(&self) -> String {
        bulleted(&self.questions)
    }
}

/// Subject line for a provider inquiry email.
pub fn inquiry_subject(provider_name: &str) -> String {
    format!("Inquiry - {}", provider_name)
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\u{2022} {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
