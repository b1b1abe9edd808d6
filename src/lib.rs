//! NNTP daemon front-end
//!
//! A line-oriented NNTP server front-end: it greets clients, dispatches
//! commands, negotiates reader/streaming mode, and authenticates clients
//! with AUTHINFO USER/PASS.
//!
//! The crate is split along a sans-io seam:
//!
//! - [`session`] holds all protocol state and decisions; it maps command
//!   lines to reply lines with no I/O at all
//! - [`server`] owns sockets: it binds the listener, reads lines, and
//!   writes whatever the session returns
//!
//! Everything around that seam is support: [`command`] parses and
//! classifies lines, [`protocol`] carries the reply text, [`auth`] checks
//! credentials, [`config`] loads the TOML file, and [`events`] lets tests
//! and tooling observe a session from the outside.

pub mod auth;
pub mod command;
pub mod config;
pub mod constants;
pub mod events;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod session;
pub mod types;

pub use config::{Config, create_default_config, load_config};
pub use server::NntpServer;
pub use session::ClientSession;
