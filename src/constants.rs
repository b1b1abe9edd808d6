//! Constants used throughout the NNTP daemon
//!
//! This module centralizes protocol limits and listener defaults
//! to improve maintainability and reduce duplication.

use std::time::Duration;

/// Buffer size constants
pub mod buffer {
    /// Maximum accepted command line size, terminator included (512 bytes)
    ///
    /// RFC 3977 limits command lines to 512 octets; anything longer is a
    /// misbehaving peer and the transport disconnects it.
    pub const COMMAND: usize = 512;

    /// BufReader capacity for client command parsing (4KB)
    /// Large enough that a full command line always arrives in one refill
    pub const READER_CAPACITY: usize = 4096;

    /// Initial capacity for the per-dispatch reply accumulation buffer
    /// Sized for the multi-line CAPABILITIES block, the largest reply
    pub const REPLY_INITIAL: usize = 256;

    /// Verify the reader can hold a whole command line at compile time
    const _READER_FITS_COMMAND: () = assert!(
        READER_CAPACITY >= COMMAND,
        "READER_CAPACITY must cover a full command line"
    );
}

/// Timeout constants
pub mod timeout {
    use super::Duration;

    /// Idle timeout waiting for the next command from a client
    pub const CLIENT_READ: Duration = Duration::from_secs(300);
}

/// Listener defaults
pub mod listen {
    /// Default listen host (all interfaces)
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    /// Default listen port (unprivileged NNTP)
    pub const DEFAULT_PORT: u16 = 1119;
}

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizes() {
        // Reader capacity must cover any single command line
        assert!(buffer::READER_CAPACITY >= buffer::COMMAND);

        // Command limit matches the RFC 3977 line length
        assert_eq!(buffer::COMMAND, 512);

        // Reply buffer starts small but non-zero
        assert!(buffer::REPLY_INITIAL > 0);
    }

    #[test]
    fn test_timeouts() {
        assert!(timeout::CLIENT_READ.as_secs() > 0);
    }

    #[test]
    fn test_listen_defaults() {
        assert!(!listen::DEFAULT_HOST.is_empty());
        assert_ne!(listen::DEFAULT_PORT, 0);
    }
}
