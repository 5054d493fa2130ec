//! Tagged protocol messages.
//!
//! | Tag | Server message    | Client message      |
//! |-----|-------------------|---------------------|
//! | 0   | `UpdateConstants` | (debug drawing, unsupported) |
//! | 1   | `GetOrder`        | `OrderMessage`      |
//! | 2   | `Finish`          | `DebugUpdateDone`   |
//! | 3   | `DebugUpdate`     | `RequestDebugState` |

use std::fmt;
use std::io::{Read, Write};

use game_core::{Constants, Game, Order};

use crate::error::{ProtocolError, Result};
use crate::wire::Wire;

/// Messages sent by the game server.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    /// Match rules. Sent once before the first order request.
    UpdateConstants { constants: Constants },
    /// Request for this tick's order.
    GetOrder {
        player_view: Game,
        /// Whether the debug channel may be used while answering.
        debug_available: bool,
    },
    /// The match is over; the session ends after this message.
    Finish,
    /// The viewer moved to another tick. Answered with
    /// [`ClientMessage::DebugUpdateDone`].
    DebugUpdate { displayed_tick: i32 },
}

impl ServerMessage {
    pub const fn tag(&self) -> i32 {
        match self {
            ServerMessage::UpdateConstants { .. } => 0,
            ServerMessage::GetOrder { .. } => 1,
            ServerMessage::Finish => 2,
            ServerMessage::DebugUpdate { .. } => 3,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ServerMessage::UpdateConstants { .. } => "UpdateConstants",
            ServerMessage::GetOrder { .. } => "GetOrder",
            ServerMessage::Finish => "Finish",
            ServerMessage::DebugUpdate { .. } => "DebugUpdate",
        }
    }
}

impl Wire for ServerMessage {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let message = match i32::read_from(reader)? {
            0 => ServerMessage::UpdateConstants {
                constants: Wire::read_from(reader)?,
            },
            1 => ServerMessage::GetOrder {
                player_view: Wire::read_from(reader)?,
                debug_available: Wire::read_from(reader)?,
            },
            2 => ServerMessage::Finish,
            3 => ServerMessage::DebugUpdate {
                displayed_tick: Wire::read_from(reader)?,
            },
            tag => {
                return Err(ProtocolError::UnexpectedTag {
                    message: "ServerMessage",
                    tag,
                });
            }
        };
        tracing::trace!(message = message.name(), "decoded server message");
        Ok(message)
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.tag().write_to(writer)?;
        match self {
            ServerMessage::UpdateConstants { constants } => constants.write_to(writer),
            ServerMessage::GetOrder {
                player_view,
                debug_available,
            } => {
                player_view.write_to(writer)?;
                debug_available.write_to(writer)
            }
            ServerMessage::Finish => Ok(()),
            ServerMessage::DebugUpdate { displayed_tick } => displayed_tick.write_to(writer),
        }
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::UpdateConstants { constants } => {
                write!(f, "ServerMessage::UpdateConstants {{ constants: {constants:?} }}")
            }
            ServerMessage::GetOrder {
                player_view,
                debug_available,
            } => write!(
                f,
                "ServerMessage::GetOrder {{ player_view: {player_view:?}, debug_available: {debug_available} }}"
            ),
            ServerMessage::Finish => write!(f, "ServerMessage::Finish {{ }}"),
            ServerMessage::DebugUpdate { displayed_tick } => {
                write!(f, "ServerMessage::DebugUpdate {{ displayed_tick: {displayed_tick} }}")
            }
        }
    }
}

/// Messages sent by the agent.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientMessage {
    /// Answer to [`ServerMessage::GetOrder`].
    OrderMessage { order: Order },
    /// Answer to [`ServerMessage::DebugUpdate`].
    DebugUpdateDone,
    /// Asks the server for the current debug state.
    RequestDebugState,
}

impl ClientMessage {
    pub const fn tag(&self) -> i32 {
        match self {
            ClientMessage::OrderMessage { .. } => 1,
            ClientMessage::DebugUpdateDone => 2,
            ClientMessage::RequestDebugState => 3,
        }
    }
}

impl Wire for ClientMessage {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match i32::read_from(reader)? {
            1 => Ok(ClientMessage::OrderMessage {
                order: Wire::read_from(reader)?,
            }),
            2 => Ok(ClientMessage::DebugUpdateDone),
            3 => Ok(ClientMessage::RequestDebugState),
            tag => Err(ProtocolError::UnexpectedTag {
                message: "ClientMessage",
                tag,
            }),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.tag().write_to(writer)?;
        match self {
            ClientMessage::OrderMessage { order } => order.write_to(writer),
            ClientMessage::DebugUpdateDone | ClientMessage::RequestDebugState => Ok(()),
        }
    }
}

impl fmt::Display for ClientMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientMessage::OrderMessage { order } => {
                write!(f, "ClientMessage::OrderMessage {{ order: {order:?} }}")
            }
            ClientMessage::DebugUpdateDone => write!(f, "ClientMessage::DebugUpdateDone {{ }}"),
            ClientMessage::RequestDebugState => {
                write!(f, "ClientMessage::RequestDebugState {{ }}")
            }
        }
    }
}

/// Protocol version triple announced right after the token.
const HANDSHAKE_VERSION: [i32; 3] = [1, 0, 1];

/// Writes the session preamble: the player token followed by the protocol
/// version, then flushes.
pub fn write_handshake<W: Write + ?Sized>(writer: &mut W, token: &str) -> Result<()> {
    token.to_owned().write_to(writer)?;
    for part in HANDSHAKE_VERSION {
        part.write_to(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_server_tag_is_fatal() {
        let mut bytes = Vec::new();
        9i32.write_to(&mut bytes).unwrap();
        let err = ServerMessage::read_from(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::UnexpectedTag {
                message: "ServerMessage",
                tag: 9
            }
        ));
    }

    #[test]
    fn tag_is_written_first() {
        let mut bytes = Vec::new();
        ServerMessage::DebugUpdate { displayed_tick: 7 }
            .write_to(&mut bytes)
            .unwrap();
        assert_eq!(bytes, vec![3, 0, 0, 0, 7, 0, 0, 0]);
    }

    #[test]
    fn finish_has_empty_payload() {
        let mut bytes = Vec::new();
        ServerMessage::Finish.write_to(&mut bytes).unwrap();
        assert_eq!(bytes, vec![2, 0, 0, 0]);
    }

    #[test]
    fn handshake_layout() {
        let mut bytes = Vec::new();
        write_handshake(&mut bytes, "tk").unwrap();
        assert_eq!(
            bytes,
            vec![2, 0, 0, 0, b't', b'k', 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn display_dump() {
        assert_eq!(
            ServerMessage::DebugUpdate { displayed_tick: 5 }.to_string(),
            "ServerMessage::DebugUpdate { displayed_tick: 5 }"
        );
        assert_eq!(
            ClientMessage::DebugUpdateDone.to_string(),
            "ClientMessage::DebugUpdateDone { }"
        );
    }
}
