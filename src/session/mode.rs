//! Negotiated session mode

/// Operating mode negotiated with the MODE command.
///
/// A fresh session has no mode; the session tracks `Option<SessionMode>`
/// and only a successful negotiation sets it. Re-negotiating at any point
/// is allowed and the permission check runs fresh each time, so the reply
/// can differ between attempts. A rejected negotiation never touches the
/// current mode.
///
/// # Examples
///
/// ```
/// use nntp_daemon::session::SessionMode;
///
/// assert_eq!(SessionMode::from_arg("reader"), Some(SessionMode::Reader));
/// assert_eq!(SessionMode::from_arg("STREAM"), Some(SessionMode::Stream));
/// assert_eq!(SessionMode::from_arg("FOO"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Interactive news reading (MODE READER, RFC 3977)
    Reader,
    /// Article streaming feed (MODE STREAM, RFC 4644)
    Stream,
}

impl SessionMode {
    /// Parse a MODE argument, case-insensitively.
    #[must_use]
    pub fn from_arg(arg: &str) -> Option<Self> {
        if arg.eq_ignore_ascii_case("READER") {
            Some(Self::Reader)
        } else if arg.eq_ignore_ascii_case("STREAM") {
            Some(Self::Stream)
        } else {
            None
        }
    }

    /// Check if this is reader mode
    #[inline]
    #[must_use]
    pub const fn is_reader(self) -> bool {
        matches!(self, Self::Reader)
    }

    /// Check if this is streaming mode
    #[inline]
    #[must_use]
    pub const fn is_stream(self) -> bool {
        matches!(self, Self::Stream)
    }

    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reader => "READER",
            Self::Stream => "STREAM",
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
