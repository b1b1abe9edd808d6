//! Command processing module
//!
//! Tokenizes raw command lines and classifies them for dispatch, without
//! coupling to session state.

mod classifier;
mod parser;

pub use classifier::NntpCommand;
pub use parser::{ParsedCommand, parse};
