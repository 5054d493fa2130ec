//! Binary wire codec for the game server channel.
//!
//! The server and the agent exchange a stream of tagged messages. This crate
//! owns the byte-level format:
//!
//! - [`Wire`]: symmetric encode/decode for primitives and model types
//! - [`ServerMessage`]: messages the server sends (constants, order requests,
//!   finish, debug updates)
//! - [`ClientMessage`]: the agent's replies
//! - [`write_handshake`]: session preamble written once after connecting
//!
//! All numbers are little-endian and fixed width. Strings, sequences and maps
//! carry an `i32` length prefix. Any malformed input surfaces as a
//! [`ProtocolError`]; there is no partial recovery within a connection.

pub mod error;
pub mod message;
mod model;
pub mod wire;

pub use error::{ProtocolError, Result};
pub use message::{ClientMessage, ServerMessage, write_handshake};
pub use wire::Wire;
