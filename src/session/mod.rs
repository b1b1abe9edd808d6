//! Client session state
//!
//! The session layer is sans-io: [`ClientSession`] turns command lines into
//! reply lines, and the `server` module owns the socket around it.

mod client;
mod lifecycle;
mod mode;

pub use client::ClientSession;
pub use lifecycle::LifecycleState;
pub use mode::SessionMode;
