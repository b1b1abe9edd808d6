//! NNTP reply text constants and construction helpers
//!
//! Every reply the daemon can produce lives here, terminator excluded; the
//! transport appends CRLF on write. Reply text is part of the wire contract
//! and compared byte-for-byte by clients and tests, so nothing here is
//! formatted ad hoc.

use super::ReplyLine;

// Greetings (sent once, before the first command)

/// Greeting when the client may post (200)
pub const GREETING_POSTING_ALLOWED: &str = "200 Posting allowed";

/// Greeting when posting requires authentication first (201)
pub const GREETING_POSTING_PROHIBITED: &str = "201 Posting not allowed";

// Dispatch errors

/// Blank or all-whitespace command line (501)
pub const SYNTAX_ERROR: &str = "501 Syntax error";

/// Command name outside the dispatch table (500)
pub const UNKNOWN_COMMAND: &str = "500 Unknown Command";

/// MODE with two or more arguments (500)
pub const TOO_MANY_ARGUMENTS: &str = "500 too many arguments";

/// MODE with no argument (500)
pub const WRONG_ARGUMENTS: &str = "500 wrong arguments";

/// MODE with an unrecognized mode name (500)
pub const UNKNOWN_MODE: &str = "500 Unknown mode";

// Lifecycle

/// QUIT acknowledged; the connection closes after this line (205)
pub const QUITTING: &str = "205 quitting";

// Mode negotiation

/// MODE READER accepted, posting permitted (200)
pub const READER_POSTING_PERMITTED: &str = "200 Posting is permitted";

/// MODE READER accepted, posting prohibited (201)
pub const READER_POSTING_PROHIBITED: &str = "201 Posting is not permitted";

/// MODE STREAM accepted (203, RFC 4644)
pub const STREAMING_ENABLED: &str = "203 Streaming enabled";

/// MODE STREAM refused without posting permission (483)
pub const STREAMING_DENIED: &str = "483 Streaming Denied";

// Authentication (RFC 4643)

/// AUTHINFO USER acknowledged, password expected next (381)
pub const AUTH_PASSWORD_REQUIRED: &str = "381 Password required";

/// Credentials accepted (281)
pub const AUTH_ACCEPTED: &str = "281 Authentication accepted";

/// Credentials rejected; the client must restart from USER (481)
pub const AUTH_REJECTED: &str = "481 Authentication rejected";

/// AUTHINFO PASS arrived before AUTHINFO USER (482)
pub const AUTH_OUT_OF_SEQUENCE: &str = "482 Authentication commands issued out of sequence";

/// No verifier installed, or the session is already authenticated (502)
pub const AUTH_UNAVAILABLE: &str = "502 Authentication unavailable";

// Capabilities (RFC 3977 §5.2)

/// Header of the multi-line capability block (101)
pub const CAPABILITIES_FOLLOW: &str = "101 Capability list follows";

/// Terminator line of every multi-line block
pub const MULTILINE_TERMINATOR: &str = ".";

/// Build the CAPABILITIES reply block.
///
/// `AUTHINFO USER` is advertised only while authentication can still
/// succeed, which the caller knows and this module does not.
///
/// # Examples
/// ```
/// use nntp_daemon::protocol::replies::capability_list;
///
/// let block = capability_list(false);
/// assert_eq!(block.first().unwrap().as_str(), "101 Capability list follows");
/// assert_eq!(block.last().unwrap().as_str(), ".");
/// ```
#[must_use]
pub fn capability_list(advertise_auth: bool) -> Vec<ReplyLine> {
    let mut block: Vec<ReplyLine> = vec![
        CAPABILITIES_FOLLOW.into(),
        "VERSION 2".into(),
        format!(
            "IMPLEMENTATION {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .into(),
        "READER".into(),
        "STREAMING".into(),
    ];
    if advertise_auth {
        block.push("AUTHINFO USER".into());
    }
    block.push(MULTILINE_TERMINATOR.into());
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-line replies carrying a status code
    const STATUS_REPLIES: &[&str] = &[
        GREETING_POSTING_ALLOWED,
        GREETING_POSTING_PROHIBITED,
        SYNTAX_ERROR,
        UNKNOWN_COMMAND,
        TOO_MANY_ARGUMENTS,
        WRONG_ARGUMENTS,
        UNKNOWN_MODE,
        QUITTING,
        READER_POSTING_PERMITTED,
        READER_POSTING_PROHIBITED,
        STREAMING_ENABLED,
        STREAMING_DENIED,
        AUTH_PASSWORD_REQUIRED,
        AUTH_ACCEPTED,
        AUTH_REJECTED,
        AUTH_OUT_OF_SEQUENCE,
        AUTH_UNAVAILABLE,
        CAPABILITIES_FOLLOW,
    ];

    #[test]
    fn test_all_status_replies_start_with_code() {
        for reply in STATUS_REPLIES {
            let bytes = reply.as_bytes();
            assert!(bytes.len() > 4, "reply too short: {reply:?}");
            assert!(
                bytes[..3].iter().all(u8::is_ascii_digit) && bytes[3] == b' ',
                "reply must start with a three-digit code and a space: {reply:?}"
            );
        }
    }

    #[test]
    fn test_no_reply_carries_terminator() {
        for reply in STATUS_REPLIES {
            assert!(!reply.contains('\r'), "embedded CR in {reply:?}");
            assert!(!reply.contains('\n'), "embedded LF in {reply:?}");
        }
    }

    #[test]
    fn test_wire_contract_exact_text() {
        // These strings are protocol, not presentation
        assert_eq!(SYNTAX_ERROR, "501 Syntax error");
        assert_eq!(UNKNOWN_COMMAND, "500 Unknown Command");
        assert_eq!(TOO_MANY_ARGUMENTS, "500 too many arguments");
        assert_eq!(WRONG_ARGUMENTS, "500 wrong arguments");
        assert_eq!(UNKNOWN_MODE, "500 Unknown mode");
        assert_eq!(QUITTING, "205 quitting");
        assert_eq!(READER_POSTING_PERMITTED, "200 Posting is permitted");
        assert_eq!(READER_POSTING_PROHIBITED, "201 Posting is not permitted");
        assert_eq!(STREAMING_ENABLED, "203 Streaming enabled");
        assert_eq!(STREAMING_DENIED, "483 Streaming Denied");
        assert_eq!(GREETING_POSTING_ALLOWED, "200 Posting allowed");
        assert_eq!(GREETING_POSTING_PROHIBITED, "201 Posting not allowed");
    }

    #[test]
    fn test_capability_list_shape() {
        let block = capability_list(false);
        assert_eq!(block[0], CAPABILITIES_FOLLOW);
        assert_eq!(*block.last().unwrap(), MULTILINE_TERMINATOR);

        let lines: Vec<&str> = block.iter().map(|l| l.as_str()).collect();
        assert!(lines.contains(&"VERSION 2"));
        assert!(lines.contains(&"READER"));
        assert!(lines.contains(&"STREAMING"));
        assert!(!lines.contains(&"AUTHINFO USER"));
    }

    #[test]
    fn test_capability_list_advertises_auth() {
        let block = capability_list(true);
        let lines: Vec<&str> = block.iter().map(|l| l.as_str()).collect();
        assert!(lines.contains(&"AUTHINFO USER"));
        // Terminator stays last even with the extra line
        assert_eq!(*block.last().unwrap(), MULTILINE_TERMINATOR);
    }

    #[test]
    fn test_capability_list_names_implementation() {
        let block = capability_list(false);
        assert!(
            block
                .iter()
                .any(|l| l.as_str().starts_with("IMPLEMENTATION nntp-daemon "))
        );
    }
}
