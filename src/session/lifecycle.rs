//! Session lifecycle state

/// Connection-level lifecycle of a session.
///
/// The transition table is intentionally small:
///
/// ```text
/// AwaitingCommand ──QUIT──> Closing
/// ```
///
/// `Closing` is terminal. A closing session dispatches nothing further and
/// the transport tears the connection down once queued replies are flushed.
/// Multi-step exchanges (AUTHINFO) do not need their own state here; they
/// ride on session fields while the lifecycle stays `AwaitingCommand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Reading and dispatching commands
    #[default]
    AwaitingCommand,
    /// QUIT handled; flush replies and disconnect
    Closing,
}

impl LifecycleState {
    /// Check if the session still accepts commands
    #[inline]
    #[must_use]
    pub const fn is_awaiting_command(self) -> bool {
        matches!(self, Self::AwaitingCommand)
    }

    /// Check if the session is shutting down
    #[inline]
    #[must_use]
    pub const fn is_closing(self) -> bool {
        matches!(self, Self::Closing)
    }
}
