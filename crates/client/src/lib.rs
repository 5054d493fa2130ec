//! Arena bot client.
//!
//! - [`config`]: environment and command-line configuration
//! - [`logging`]: subscriber setup
//! - [`runner`]: TCP connection, handshake and the message loop

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{BotConfig, CliArgs};
pub use runner::{Session, connect};
