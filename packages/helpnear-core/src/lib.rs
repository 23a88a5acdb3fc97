//! HelpNear Core - Provider Matching & Assisted Contact
//!
//! The decision-making core of HelpNear, an app that helps people find
//! nearby assistance providers (medical, social support, repair,
//! volunteers) and prepares them to make contact.
//!
//! # Design Philosophy
//!
//! - Pure, deterministic matching: distance and clock are injected, so
//!   the filter engine has no hidden inputs
//! - Schema-constrained generation: outreach artifacts either validate
//!   as a whole or fail as a whole, never partially
//! - Isolated persistence: a failed history write is logged and
//!   surfaced, but never withholds generated artifacts
//! - Library handles decisions, the app shell handles platform I/O
//!
//! # Usage
//!
//! ```rust,ignore
//! use helpnear_core::{
//!     ContactGenerator, FilterCriteria, FilterEngine, MatchService, MemoryDirectory,
//!     MemoryHistory, SystemClock,
//! };
//! use helpnear_core::ai::OpenAI;
//!
//! // Match providers against the user's constraints
//! let service = MatchService::new(directory, FilterEngine::unranked(), Arc::new(SystemClock));
//! let results = service.search(&FilterCriteria::new().open_now()).await?;
//!
//! // Generate outreach artifacts for the chosen provider
//! let generator = ContactGenerator::new(OpenAI::from_env()?, MemoryHistory::new());
//! let contact = generator.generate(&results[0], "I need a same-day appointment").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Infrastructure abstractions (directory, AI, history, clock, channel)
//! - [`types`] - Domain data types
//! - [`hours`] - Opening-hours evaluation
//! - [`matching`] - Filter/search/sort engine
//! - [`outreach`] - Assisted-contact generation workflow
//! - [`stores`] - In-memory reference implementations
//! - [`ai`] - Reference OpenAI client
//! - [`testing`] - Mock implementations for tests

pub mod ai;
pub mod common;
pub mod error;
pub mod hours;
pub mod matching;
pub mod outreach;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use common::{InteractionId, ProviderId};
pub use error::{ChannelError, DirectoryError, HistoryError, OutreachError};
pub use hours::{is_open_at, week_overview, weekday_key, DayHours, CLOSED_MARKER};
pub use matching::{FilterEngine, MatchService};
pub use outreach::{ContactGenerator, GeneratedContact, OutreachSession};
pub use stores::{MemoryDirectory, MemoryHistory};
pub use traits::{
    Clock, ComposeTarget, GenerativeService, HistoryStore, OutreachChannel, ProviderDirectory,
    SystemClock,
};
pub use types::{
    BudgetTier, Category, ContactArtifacts, FilterCriteria, InteractionRecord, NewInteraction,
    Provider, ProviderSnapshot,
};
