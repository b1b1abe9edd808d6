//! Connection transport
//!
//! Owns the socket for one client: reads command lines, feeds them to the
//! session, writes the replies back. All protocol decisions live in
//! [`ClientSession`]; this module only moves bytes and enforces transport
//! limits (line length, idle timeout).

use std::net::SocketAddr;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::constants::{buffer, timeout as timeouts};
use crate::protocol::ReplyLine;
use crate::session::ClientSession;

/// Why a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disconnect {
    /// Client sent QUIT and the session closed cleanly
    Quit,
    /// Client closed its side of the connection
    Eof,
    /// Client sent a line longer than the command limit
    OversizedLine,
    /// No complete line arrived within the read timeout
    IdleTimeout,
}

impl Disconnect {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Eof => "eof",
            Self::OversizedLine => "oversized line",
            Self::IdleTimeout => "idle timeout",
        }
    }
}

impl std::fmt::Display for Disconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drive one client connection to completion.
///
/// Sends the greeting, then loops: read a line, dispatch it, write the
/// replies. Returns how the connection ended; transport I/O failures
/// propagate as errors.
pub async fn run_session<S>(
    stream: S,
    peer: SocketAddr,
    mut session: ClientSession,
) -> Result<Disconnect>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (read_half, mut write_half) = tokio::io::split(stream);
    let mut reader = BufReader::with_capacity(buffer::READER_CAPACITY, read_half);

    write_replies(&mut write_half, &[ReplyLine::from(session.greeting())]).await?;

    let mut line = String::with_capacity(buffer::COMMAND);
    let reason = loop {
        line.clear();

        // Fresh limit per command so one long line cannot eat into the next
        let mut limited = (&mut reader).take(buffer::COMMAND as u64);
        let n = match timeout(timeouts::CLIENT_READ, limited.read_line(&mut line)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                debug!(%peer, "client idle, disconnecting");
                break Disconnect::IdleTimeout;
            }
        };

        if n == 0 {
            break Disconnect::Eof;
        }

        if !line.ends_with('\n') {
            // Either the limit cut the line short or the peer vanished mid-line
            if n >= buffer::COMMAND {
                warn!(%peer, length = n, "command line exceeds limit, disconnecting");
                break Disconnect::OversizedLine;
            }
            break Disconnect::Eof;
        }

        let stripped = line.trim_end_matches(['\r', '\n']);
        let replies = session.handle_line(stripped);
        write_replies(&mut write_half, &replies).await?;

        if session.should_close() {
            break Disconnect::Quit;
        }
    };

    write_half.shutdown().await?;
    Ok(reason)
}

/// Batch reply lines into one write, CRLF-terminated.
async fn write_replies<W>(writer: &mut W, replies: &[ReplyLine]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if replies.is_empty() {
        return Ok(());
    }

    let mut payload = String::with_capacity(buffer::REPLY_INITIAL);
    for reply in replies {
        payload.push_str(reply.as_str());
        payload.push_str("\r\n");
    }

    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_peer() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    async fn read_reply_line<R: AsyncBufReadExt + Unpin>(reader: &mut R) -> String {
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        line
    }

    #[tokio::test]
    async fn test_greeting_sent_before_any_command() {
        let (client, server) = tokio::io::duplex(1024);
        let task = tokio::spawn(run_session(server, test_peer(), ClientSession::new()));

        let mut client = BufReader::new(client);
        assert_eq!(
            read_reply_line(&mut client).await,
            "200 Posting allowed\r\n"
        );

        drop(client);
        assert_eq!(task.await.unwrap().unwrap(), Disconnect::Eof);
    }

    #[tokio::test]
    async fn test_quit_replies_then_closes() {
        let (client, server) = tokio::io::duplex(1024);
        let task = tokio::spawn(run_session(server, test_peer(), ClientSession::new()));

        let mut client = BufReader::new(client);
        read_reply_line(&mut client).await; // greeting

        client.get_mut().write_all(b"QUIT\r\n").await.unwrap();
        assert_eq!(read_reply_line(&mut client).await, "205 quitting\r\n");

        // Server closes its side after the reply
        let mut rest = String::new();
        client.read_to_string(&mut rest).await.unwrap();
        assert!(rest.is_empty());

        assert_eq!(task.await.unwrap().unwrap(), Disconnect::Quit);
    }

    #[tokio::test]
    async fn test_oversized_line_disconnects_without_reply() {
        let (client, server) = tokio::io::duplex(4096);
        let task = tokio::spawn(run_session(server, test_peer(), ClientSession::new()));

        let mut client = BufReader::new(client);
        read_reply_line(&mut client).await; // greeting

        let long_line = [b'A'; 600];
        client.get_mut().write_all(&long_line).await.unwrap();
        client.get_mut().write_all(b"\r\n").await.unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Disconnect::OversizedLine);
    }

    #[tokio::test]
    async fn test_lines_without_crlf_still_dispatch() {
        let (client, server) = tokio::io::duplex(1024);
        let task = tokio::spawn(run_session(server, test_peer(), ClientSession::new()));

        let mut client = BufReader::new(client);
        read_reply_line(&mut client).await; // greeting

        // Bare LF is tolerated even though the protocol specifies CRLF
        client.get_mut().write_all(b"MODE READER\n").await.unwrap();
        assert_eq!(
            read_reply_line(&mut client).await,
            "200 Posting is permitted\r\n"
        );

        drop(client);
        assert_eq!(task.await.unwrap().unwrap(), Disconnect::Eof);
    }
}
