//! Command classification for dispatch

/// Commands the daemon dispatches on.
///
/// Classification happens on the normalized (uppercased) name produced by
/// [`parse`](super::parse); everything outside the table is `Unknown` and
/// rejected with a single diagnostic reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NntpCommand {
    /// QUIT - close the session
    Quit,
    /// MODE - negotiate reader or streaming operation
    Mode,
    /// CAPABILITIES - list supported extensions
    Capabilities,
    /// AUTHINFO - client authentication exchange
    AuthInfo,
    /// Anything else, including every article command this daemon does not serve
    Unknown,
}

impl NntpCommand {
    /// Classify a normalized command name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "QUIT" => Self::Quit,
            "MODE" => Self::Mode,
            "CAPABILITIES" => Self::Capabilities,
            "AUTHINFO" => Self::AuthInfo,
            _ => Self::Unknown,
        }
    }
}
