//! Structured session events
//!
//! Dispatch outcomes are reported to an injected sink instead of being
//! scattered across ad-hoc writes, so tests and tooling can assert on what
//! a session did without scraping log output. Human-readable logging stays
//! in `tracing`.

use std::sync::{Arc, Mutex, PoisonError};

use crate::session::SessionMode;

/// One observable step in a session's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A line was dispatched under this command name
    CommandReceived { name: String },
    /// A line produced no tokens and was rejected
    SyntaxRejected,
    /// The command name was outside the dispatch table
    UnknownCommand { name: String },
    /// MODE negotiation succeeded
    ModeNegotiated { mode: SessionMode },
    /// MODE negotiation failed; the previous mode is untouched
    ModeRejected,
    /// AUTHINFO USER recorded a pending username
    AuthPending { username: String },
    /// Credentials accepted; the session is now authenticated
    AuthAccepted { username: String },
    /// Credentials rejected
    AuthRejected { username: String },
    /// QUIT handled; the session is closing
    Closing,
}

/// Receives session events.
///
/// Called inline during dispatch, so implementations must be cheap and must
/// not block.
pub trait EventSink: Send + Sync {
    fn record(&self, event: SessionEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: SessionEvent) {}
}

/// Sink that stores events in memory for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingSink {
    /// Create a sink ready to share with a session.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.lock().clone()
    }

    /// Number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SessionEvent>> {
        // A panic while holding the lock only ever comes from a failed test
        // assertion; the data is still usable.
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: SessionEvent) {
        self.lock().push(event);
    }
}
