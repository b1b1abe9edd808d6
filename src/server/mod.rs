//! TCP server
//!
//! Binds the configured listen address and runs one session task per
//! accepted connection. The server holds the pieces every session is built
//! from: the credential set (if authentication is configured) and the event
//! sink.

mod connection;

pub use connection::{Disconnect, run_session};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::auth::StaticCredentials;
use crate::config::Config;
use crate::events::{EventSink, NoopSink};
use crate::session::ClientSession;

/// Accept loop plus the template each connection's session is cloned from.
pub struct NntpServer {
    config: Config,
    credentials: Option<StaticCredentials>,
    events: Arc<dyn EventSink>,
}

impl std::fmt::Debug for NntpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NntpServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}


impl NntpServer {
    /// Build a server from configuration.
    ///
    /// Fails if the configured credentials are invalid: a daemon that would
    /// silently lock every client out should not start.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_events(config, Arc::new(NoopSink))
    }

    /// Build a server that reports session events to the given sink.
    pub fn with_events(config: Config, events: Arc<dyn EventSink>) -> Result<Self> {
        let credentials = if config.auth.is_enabled() {
            let verifier = StaticCredentials::new(config.auth.credential_pairs())
                .context("invalid [auth] credentials in configuration")?;
            Some(verifier)
        } else {
            None
        };

        Ok(Self {
            config,
            credentials,
            events,
        })
    }

    /// Fresh session for one accepted connection.
    #[must_use]
    pub fn new_session(&self) -> ClientSession {
        let mut session = ClientSession::with_events(Arc::clone(&self.events));
        if let Some(credentials) = &self.credentials {
            session.install_verifier(Box::new(credentials.clone()));
        }
        session
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("NNTP daemon listening on {}", addr);
        Ok(listener)
    }

    /// Accept connections until the surrounding task is dropped.
    pub async fn run(self: Arc<Self>, listener: TcpListener) {
        loop {
            match listener.accept().await {
                Ok((stream, addr)) => {
                    let server = Arc::clone(&self);
                    tokio::spawn(async move {
                        if let Err(e) = server.handle_client(stream, addr).await {
                            error!("Error handling client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                }
            }
        }
    }

    async fn handle_client(&self, stream: TcpStream, addr: SocketAddr) -> Result<()> {
        info!("Client {} connected", addr);
        let session = self.new_session();
        let reason = connection::run_session(stream, addr, session).await?;
        info!("Client {} disconnected ({})", addr, reason);
        Ok(())
    }
}
