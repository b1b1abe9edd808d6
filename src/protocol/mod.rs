//! NNTP wire vocabulary
//!
//! Reply text lives in [`replies`]; [`ReplyLine`] is the unit a session
//! hands back to the transport.

pub mod replies;

use std::borrow::Cow;

/// One outbound protocol line, without its CRLF terminator.
///
/// The transport appends the terminator when writing. Keeping it out of the
/// value lets tests compare reply text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyLine(Cow<'static, str>);

impl ReplyLine {
    /// Reply text, terminator excluded
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ReplyLine {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }
}

impl From<String> for ReplyLine {
    #[inline]
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl PartialEq<&str> for ReplyLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for ReplyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
