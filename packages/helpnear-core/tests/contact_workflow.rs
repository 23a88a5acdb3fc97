//! Integration tests for the assisted-contact workflow.
//!
//! These tests verify the full pipeline:
//! 1. Match providers against criteria
//! 2. Generate artifacts for the chosen provider
//! 3. Record the interaction
//! 4. Keep persistence failures away from the artifacts

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use helpnear_core::{
    testing::{FailingHistory, FixedClock, MockGenerator},
    BudgetTier, Category, ContactGenerator, FilterCriteria, FilterEngine, MatchService,
    MemoryDirectory, MemoryHistory, OutreachError, OutreachSession, Provider,
};

/// Helper to build a valid canned artifact response.
fn artifacts_json() -> serde_json::Value {
    serde_json::json!({
        "call_script": "Hello, my name is Alex. I'm calling about a same-day appointment...",
        "message_template": "Hi, I'm looking for a same-day appointment. Could you let me know availability?",
        "checklist": ["ID card", "Insurance card", "List of medications", "Referral letter", "Payment method"],
        "questions": ["Do you take walk-ins?", "What are your fees?", "Which languages do you speak?"]
    })
}

/// Helper for a Monday-noon clock (2024-01-01 was a Monday).
fn monday_noon() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn clinic() -> Provider {
    Provider::new("City Clinic", Category::Medical)
        .with_description("Walk-in clinic for urgent care")
        .with_language("EN")
        .with_budget(BudgetTier::Medium)
        .with_phone("+420123456789")
        .with_hours("monday", "08:00-20:00")
}

#[tokio::test]
async fn test_match_then_generate_then_record() {
    let directory = MemoryDirectory::with_providers(vec![
        clinic(),
        Provider::new("Night Pharmacy", Category::Medical).with_hours("monday", "Closed"),
    ]);
    let service = MatchService::new(directory, FilterEngine::unranked(), Arc::new(monday_noon()));

    let criteria = FilterCriteria::new()
        .with_category(Category::Medical)
        .open_now();
    let results = service.search(&criteria).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "City Clinic");

    let history = MemoryHistory::new();
    let generator = ContactGenerator::new(
        MockGenerator::new().with_response(artifacts_json()),
        history.clone(),
    );

    let contact = generator
        .generate(&results[0], "I need a same-day appointment")
        .await
        .unwrap();

    assert_eq!(contact.artifacts.checklist.len(), 5);
    assert_eq!(contact.artifacts.questions.len(), 3);

    let records = history.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].provider_id, results[0].id);
    assert_eq!(records[0].category, Category::Medical);
    assert_eq!(records[0].situation_text, "I need a same-day appointment");
    assert_eq!(records[0].call_script, contact.artifacts.call_script);
}

#[tokio::test]
async fn test_empty_situation_never_reaches_the_backend() {
    let ai = MockGenerator::new().with_response(artifacts_json());
    let generator = ContactGenerator::new(ai.clone(), MemoryHistory::new());

    let result = generator.generate(&clinic(), "").await;
    assert!(matches!(result, Err(OutreachError::EmptySituation)));

    let result = generator.generate(&clinic(), " \n\t ").await;
    assert!(matches!(result, Err(OutreachError::EmptySituation)));

    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn test_prompt_embeds_the_situation_verbatim() {
    let ai = MockGenerator::new().with_response(artifacts_json());
    let generator = ContactGenerator::new(ai.clone(), MemoryHistory::new());

    generator
        .generate(&clinic(), "I broke my arm and speak only English")
        .await
        .unwrap();

    let calls = ai.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0]
        .user_prompt
        .contains("User situation: I broke my arm and speak only English"));
    assert!(calls[0].user_prompt.contains("Provider: City Clinic"));
    assert_eq!(
        calls[0].schema["required"],
        serde_json::json!(["call_script", "message_template", "checklist", "questions"])
    );
}

#[tokio::test]
async fn test_missing_questions_field_yields_no_artifacts_and_no_record() {
    let history = MemoryHistory::new();
    let generator = ContactGenerator::new(
        MockGenerator::new().with_response(serde_json::json!({
            "call_script": "Hello...",
            "message_template": "Hi...",
            "checklist": ["ID card", "Insurance", "Meds", "Referral", "Payment"]
        })),
        history.clone(),
    );

    let result = generator.generate(&clinic(), "help me").await;

    assert!(matches!(result, Err(OutreachError::Schema(_))));
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_persistence_failure_still_returns_artifacts() {
    let store = FailingHistory::new();
    let generator = ContactGenerator::new(
        MockGenerator::new().with_response(artifacts_json()),
        store.clone(),
    );

    let contact = generator
        .generate(&clinic(), "I need a same-day appointment")
        .await
        .unwrap();

    // Artifacts reach the caller; the failure is observable separately
    assert_eq!(contact.artifacts.checklist.len(), 5);
    assert!(contact.history.is_err());
    assert_eq!(store.attempts(), 1);
}

#[tokio::test]
async fn test_generation_failure_is_retryable_with_fresh_state() {
    let history = MemoryHistory::new();
    let generator = ContactGenerator::new(MockGenerator::failing(), history.clone());

    let result = generator.generate(&clinic(), "help me").await;

    assert!(matches!(result, Err(OutreachError::Generation(_))));
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_session_discards_superseded_generation() {
    let ai = MockGenerator::new()
        .with_response(artifacts_json())
        .with_latency(Duration::from_millis(200));
    let history = MemoryHistory::new();
    let session = Arc::new(OutreachSession::new(ContactGenerator::new(
        ai,
        history.clone(),
    )));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.generate(&clinic(), "first situation").await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = session.generate(&clinic(), "second situation").await.unwrap();
    assert!(second.history.is_ok());

    let first = first.await.unwrap();
    assert!(matches!(first, Err(OutreachError::Cancelled)));

    // Only the winning request left a history entry
    let records = history.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].situation_text, "second situation");
}

#[tokio::test]
async fn test_language_scenario() {
    let directory = MemoryDirectory::with_providers(vec![
        Provider::new("A", Category::Medical)
            .with_language("EN")
            .with_language("CZ"),
        Provider::new("B", Category::Medical).with_language("RU"),
    ]);
    let service = MatchService::new(directory, FilterEngine::unranked(), Arc::new(monday_noon()));

    let results = service
        .search(&FilterCriteria::new().with_language("EN"))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "A");
}
