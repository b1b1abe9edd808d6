//! Per-connection protocol state machine
//!
//! [`ClientSession`] consumes command lines and produces reply lines. It
//! never touches the socket: the transport in `server` feeds it one line at
//! a time and writes back whatever it returns, then polls [`should_close`]
//! to learn when to disconnect. Keeping I/O out of here is what makes every
//! dispatch rule testable with plain function calls.
//!
//! [`should_close`]: ClientSession::should_close

use std::sync::Arc;

use tracing::debug;

use crate::auth::CredentialVerifier;
use crate::command::{self, NntpCommand, ParsedCommand};
use crate::events::{EventSink, NoopSink, SessionEvent};
use crate::protocol::ReplyLine;
use crate::protocol::replies;
use crate::session::{LifecycleState, SessionMode};

/// Protocol state for one client connection.
///
/// A session is owned by exactly one connection task and never shared, so
/// state lives in plain fields. Every mutation happens inside
/// [`handle_line`](Self::handle_line), synchronously.
///
/// Posting permission is the session's central predicate: a client may post
/// when it has authenticated, or when no credential verifier is installed
/// at all. The predicate is evaluated fresh wherever it is needed; it is
/// never cached, so authenticating mid-session immediately changes what
/// MODE replies say.
///
/// # Examples
///
/// ```
/// use nntp_daemon::session::ClientSession;
///
/// let mut session = ClientSession::new();
/// assert_eq!(session.greeting(), "200 Posting allowed");
///
/// let replies = session.handle_line("MODE READER");
/// assert_eq!(replies[0].as_str(), "200 Posting is permitted");
///
/// let replies = session.handle_line("QUIT");
/// assert_eq!(replies[0].as_str(), "205 quitting");
/// assert!(session.should_close());
/// ```
pub struct ClientSession {
    lifecycle: LifecycleState,
    mode: Option<SessionMode>,
    authenticated: bool,
    /// Exclusively owned; installing a replacement drops the previous one
    verifier: Option<Box<dyn CredentialVerifier>>,
    /// Username from AUTHINFO USER, consumed by AUTHINFO PASS
    pending_user: Option<String>,
    events: Arc<dyn EventSink>,
}

impl std::fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSession")
            .field("lifecycle", &self.lifecycle)
            .field("mode", &self.mode)
            .field("authenticated", &self.authenticated)
            .field("verifier", &self.verifier.is_some())
            .finish_non_exhaustive()
    }
}

impl ClientSession {
    /// Create a session with no verifier and no event sink.
    ///
    /// Without a verifier, posting is allowed unconditionally.
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Arc::new(NoopSink))
    }

    /// Create a session that reports to the given event sink.
    #[must_use]
    pub fn with_events(events: Arc<dyn EventSink>) -> Self {
        Self {
            lifecycle: LifecycleState::AwaitingCommand,
            mode: None,
            authenticated: false,
            verifier: None,
            pending_user: None,
            events,
        }
    }

    /// Install a credential verifier, dropping any previous one.
    ///
    /// With a verifier installed, posting is denied until the client
    /// completes the AUTHINFO exchange.
    pub fn install_verifier(&mut self, verifier: Box<dyn CredentialVerifier>) {
        self.verifier = Some(verifier);
    }

    /// Greeting line the transport sends before reading any command.
    #[must_use]
    pub fn greeting(&self) -> &'static str {
        if self.posting_allowed() {
            replies::GREETING_POSTING_ALLOWED
        } else {
            replies::GREETING_POSTING_PROHIBITED
        }
    }

    /// Whether the client may post: authenticated, or no verifier installed.
    #[must_use]
    pub fn posting_allowed(&self) -> bool {
        self.authenticated || self.verifier.is_none()
    }

    /// Negotiated mode, if any.
    #[must_use]
    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    /// True after a successful AUTHINFO exchange.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// True once QUIT has been handled.
    ///
    /// The transport polls this after delivering each line; the QUIT reply
    /// is already queued by then, so it always reaches the peer before the
    /// connection drops.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.lifecycle.is_closing()
    }

    /// Dispatch one command line (terminator already stripped).
    ///
    /// Returns the replies to send, in order. Every recognized protocol
    /// error is answered with a diagnostic reply and leaves the session
    /// open; QUIT is the only way a command closes it. A session that is
    /// already closing returns nothing.
    pub fn handle_line(&mut self, line: &str) -> Vec<ReplyLine> {
        if !self.lifecycle.is_awaiting_command() {
            return Vec::new();
        }

        let Some(cmd) = command::parse(line) else {
            self.events.record(SessionEvent::SyntaxRejected);
            return vec![replies::SYNTAX_ERROR.into()];
        };

        self.events.record(SessionEvent::CommandReceived {
            name: cmd.name.clone(),
        });

        match NntpCommand::classify(&cmd.name) {
            NntpCommand::Quit => self.handle_quit(),
            NntpCommand::Mode => self.handle_mode(&cmd),
            NntpCommand::Capabilities => self.handle_capabilities(),
            NntpCommand::AuthInfo => self.handle_authinfo(&cmd),
            NntpCommand::Unknown => {
                debug!(command = %cmd.name, "unknown command");
                self.events.record(SessionEvent::UnknownCommand { name: cmd.name });
                vec![replies::UNKNOWN_COMMAND.into()]
            }
        }
    }

    /// QUIT ignores its arguments: whatever the client typed, it wants out.
    fn handle_quit(&mut self) -> Vec<ReplyLine> {
        self.lifecycle = LifecycleState::Closing;
        self.events.record(SessionEvent::Closing);
        vec![replies::QUITTING.into()]
    }

    fn handle_mode(&mut self, cmd: &ParsedCommand<'_>) -> Vec<ReplyLine> {
        let arg = match cmd.args.as_slice() {
            [arg] => *arg,
            [] => {
                self.events.record(SessionEvent::ModeRejected);
                return vec![replies::WRONG_ARGUMENTS.into()];
            }
            _ => {
                self.events.record(SessionEvent::ModeRejected);
                return vec![replies::TOO_MANY_ARGUMENTS.into()];
            }
        };

        let Some(mode) = SessionMode::from_arg(arg) else {
            debug!(argument = %arg, "unknown mode");
            self.events.record(SessionEvent::ModeRejected);
            return vec![replies::UNKNOWN_MODE.into()];
        };

        self.mode = Some(mode);
        self.events.record(SessionEvent::ModeNegotiated { mode });

        let reply = match (mode, self.posting_allowed()) {
            (SessionMode::Reader, true) => replies::READER_POSTING_PERMITTED,
            (SessionMode::Reader, false) => replies::READER_POSTING_PROHIBITED,
            (SessionMode::Stream, true) => replies::STREAMING_ENABLED,
            (SessionMode::Stream, false) => replies::STREAMING_DENIED,
        };
        vec![reply.into()]
    }

    /// CAPABILITIES ignores its arguments, like QUIT.
    fn handle_capabilities(&self) -> Vec<ReplyLine> {
        let advertise_auth = self.verifier.is_some() && !self.authenticated;
        replies::capability_list(advertise_auth)
    }

    fn handle_authinfo(&mut self, cmd: &ParsedCommand<'_>) -> Vec<ReplyLine> {
        if self.verifier.is_none() || self.authenticated {
            return vec![replies::AUTH_UNAVAILABLE.into()];
        }

        match cmd.args.as_slice() {
            [sub, name] if sub.eq_ignore_ascii_case("USER") => {
                // Reissuing USER replaces any pending name
                self.pending_user = Some((*name).to_string());
                self.events.record(SessionEvent::AuthPending {
                    username: (*name).to_string(),
                });
                vec![replies::AUTH_PASSWORD_REQUIRED.into()]
            }
            [sub, pass] if sub.eq_ignore_ascii_case("PASS") => {
                let Some(username) = self.pending_user.take() else {
                    return vec![replies::AUTH_OUT_OF_SEQUENCE.into()];
                };

                if self.verify(&username, pass) {
                    self.authenticated = true;
                    debug!(username = %username, "authentication accepted");
                    self.events.record(SessionEvent::AuthAccepted { username });
                    vec![replies::AUTH_ACCEPTED.into()]
                } else {
                    debug!(username = %username, "authentication rejected");
                    self.events.record(SessionEvent::AuthRejected { username });
                    // pending_user stays consumed; the client restarts from USER
                    vec![replies::AUTH_REJECTED.into()]
                }
            }
            _ => vec![replies::SYNTAX_ERROR.into()],
        }
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        self.verifier
            .as_ref()
            .is_some_and(|v| v.check(username, password))
    }
}

impl Default for ClientSession {
    fn default() -> Self {
        Self::new()
    }
}
