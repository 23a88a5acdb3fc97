//! Platform outreach channel abstraction.
//!
//! Clipboard, share sheet, dialer, and message composition are thin
//! platform I/O. The core only ever talks to this capability; the UI
//! shell supplies the real implementation, tests use
//! [`RecordingChannel`](crate::testing::RecordingChannel).

use crate::error::ChannelResult;

/// Destination for a composed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeTarget {
    /// SMS to a phone number.
    Phone(String),
    /// Email to an address, with a subject line.
    Email { address: String, subject: String },
}

/// Injected platform capability for getting content to the provider.
pub trait OutreachChannel: Send + Sync {
    /// Copy text to the clipboard.
    fn copy(&self, text: &str) -> ChannelResult<()>;

    /// Hand text to the platform share sheet.
    fn share(&self, text: &str) -> ChannelResult<()>;

    /// Start a phone call.
    fn call(&self, number: &str) -> ChannelResult<()>;

    /// Compose an SMS or email with the given body.
    ///
    /// How much of the body the target can carry is up to the platform
    /// implementation (an `sms:` link may drop it, `mailto:` keeps it).
    fn compose(&self, target: &ComposeTarget, body: &str) -> ChannelResult<()>;
}
