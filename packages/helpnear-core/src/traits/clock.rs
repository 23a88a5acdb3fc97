//! Clock abstraction for deterministic time handling.

use chrono::NaiveDateTime;

/// Source of the current local wall-clock instant.
///
/// Open-now evaluation depends on the user's local weekday and time, so
/// the clock is injected rather than read ambiently; tests supply fixed
/// instants.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
