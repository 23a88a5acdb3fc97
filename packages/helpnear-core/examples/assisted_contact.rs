//! Assisted Contact - Reference Wiring
//!
//! This example walks the full pipeline with the bundled in-memory
//! implementations: seed a directory, match providers against criteria,
//! generate outreach artifacts for the best match, and inspect the
//! recorded history entry.
//!
//! The generative service here is the mock from `helpnear_core::testing`;
//! swap in `helpnear_core::ai::OpenAI::from_env()?` to run against a real
//! backend.
//!
//! ```bash
//! cargo run --example assisted_contact
//! ```

use std::sync::Arc;

use chrono::Datelike;

use helpnear_core::{
    testing::{MockGenerator, RecordingChannel},
    types::inquiry_subject,
    week_overview, BudgetTier, Category, Clock, ComposeTarget, ContactGenerator, FilterCriteria,
    FilterEngine, MatchService, MemoryDirectory, MemoryHistory, OutreachChannel, Provider,
    SystemClock,
};

fn seed_directory() -> MemoryDirectory {
    MemoryDirectory::with_providers(vec![
        Provider::new("City Clinic", Category::Medical)
            .with_description("Walk-in clinic for urgent care")
            .with_tag("clinic")
            .with_language("EN")
            .with_language("CZ")
            .with_budget(BudgetTier::Medium)
            .verified()
            .accepts_walkins()
            .with_phone("+420123456789")
            .with_email("info@cityclinic.example")
            .with_address("Main St 1, Prague")
            .with_hours("monday", "08:00-20:00")
            .with_hours("tuesday", "08:00-20:00")
            .with_hours("saturday", "Closed"),
        Provider::new("Helping Hands", Category::SocialSupport)
            .with_description("Food bank and social counselling")
            .with_language("EN")
            .with_budget(BudgetTier::Low)
            .with_phone("+420987654321")
            .with_address("Green Ave 12, Prague")
            .with_hours("monday", "10:00-16:00"),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helpnear_core=debug".into()),
        )
        .init();

    // 1. Match providers against the user's constraints
    let service = MatchService::new(
        seed_directory(),
        FilterEngine::unranked(),
        Arc::new(SystemClock),
    );
    let criteria = FilterCriteria::new().with_language("EN");
    let results = service.search(&criteria).await?;

    println!("{} provider(s) matched:", results.len());
    for provider in &results {
        println!("  - {} ({})", provider.name, provider.category.label());
    }

    let Some(chosen) = results.first() else {
        println!("No results; adjust the criteria.");
        return Ok(());
    };

    println!("\nOpening hours for {}:", chosen.name);
    for day in week_overview(&chosen.open_hours, SystemClock.now().weekday()) {
        let marker = if day.is_today { " (Today)" } else { "" };
        println!("  {:<9}{} {}", day.label, marker, day.hours);
    }

    // 2. Generate outreach artifacts for the chosen provider
    let history = MemoryHistory::new();
    let ai = MockGenerator::new().with_response(serde_json::json!({
        "call_script": "Hello, my name is Alex. I'm calling to ask about a same-day appointment.\nI have an urgent issue and speak English.\nThank you for your time.",
        "message_template": "Hi, I'm looking for a same-day appointment for an urgent issue. Could you let me know your availability today? Thank you!",
        "checklist": ["ID card", "Insurance card", "List of current medications", "Referral letter if available", "Payment method"],
        "questions": ["Do you take walk-ins today?", "What documents do I need?", "What are the expected fees?"]
    }));
    let generator = ContactGenerator::new(ai, history.clone());

    let contact = generator
        .generate(chosen, "I need a same-day appointment for an urgent issue, I speak English")
        .await?;

    println!("\nCall script:\n{}", contact.artifacts.call_script);
    println!("\nMessage template:\n{}", contact.artifacts.message_template);
    println!("\nChecklist:\n{}", contact.artifacts.checklist_text());
    println!("\nQuestions:\n{}", contact.artifacts.questions_text());

    // 3. Hand artifacts to the platform through the channel capability
    let channel = RecordingChannel::new();
    channel.copy(&contact.artifacts.call_script)?;
    if let Some(email) = &chosen.email {
        channel.compose(
            &ComposeTarget::Email {
                address: email.clone(),
                subject: inquiry_subject(&chosen.name),
            },
            &contact.artifacts.message_template,
        )?;
    }
    println!("\nChannel events: {}", channel.events().len());

    // 4. The interaction is durably recorded
    match contact.history {
        Ok(id) => println!("Recorded interaction {}", id),
        Err(e) => println!("History write failed (artifacts kept): {}", e),
    }
    println!("History entries: {}", history.len());

    Ok(())
}
