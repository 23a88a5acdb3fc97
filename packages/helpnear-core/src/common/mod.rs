//! Shared infrastructure used across domain modules.

pub mod id;

pub use id::{Id, InteractionId, ProviderId};
