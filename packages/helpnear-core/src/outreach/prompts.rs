//! LLM prompt and schema for assisted-contact generation.

use crate::types::ProviderSnapshot;

/// System preamble for the contact-artifact generation.
pub const CONTACT_SYSTEM_PROMPT: &str =
    "You are an AI assistant helping someone contact a service provider.";

/// Instruction template for the contact-artifact generation.
///
/// `{name}`, `{category}`, `{languages}`, `{budget}`, and `{situation}`
/// are substituted by [`format_contact_prompt`]; absent provider
/// attributes render as `Not specified`.
pub const CONTACT_PROMPT: &str = r#"Provider: {name}
Category: {category}
Languages: {languages}
Budget: {budget}
User situation: {situation}

Generate helpful content in this JSON format:
{
  "call_script": "A polite, structured call script (max 8 lines). Include greeting, purpose, key details to mention, and polite closing.",
  "message_template": "A concise message template for SMS/email (max 500 characters). Be clear and respectful.",
  "checklist": ["5-8 bullet points of steps or documents the user should prepare/bring"],
  "questions": ["3-5 clarification questions the user should ask the provider"]
}

Make the content appropriate for the provider category and user's specific situation."#;

/// Fill the instruction template for one provider and situation.
///
/// The situation text is embedded verbatim; it is user-supplied and
/// untrusted, which the schema-constrained response format accounts for.
pub fn format_contact_prompt(provider: &ProviderSnapshot, situation: &str) -> String {
    let languages = if provider.languages.is_empty() {
        "Not specified".to_string()
    } else {
        provider.languages.join(", ")
    };
    let budget = provider
        .budget
        .map(|tier| tier.to_string())
        .unwrap_or_else(|| "Not specified".to_string());

    CONTACT_PROMPT
        .replace("{name}", &provider.name)
        .replace("{category}", &provider.category.to_string())
        .replace("{languages}", &languages)
        .replace("{budget}", &budget)
        .replace("{situation}", situation)
}

/// JSON-schema document for the four-field artifact response.
///
/// All four fields are required; the generation service is asked for
/// strict conformance so a malformed response fails validation instead
/// of rendering partially.
pub fn artifacts_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "call_script": { "type": "string" },
            "message_template": { "type": "string" },
            "checklist": { "type": "array", "items": { "type": "string" } },
            "questions": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["call_script", "message_template", "checklist", "questions"],
        "additionalProperties": false
    })
}
