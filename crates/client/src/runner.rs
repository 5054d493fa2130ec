//! Session runner: connection, handshake and message loop.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::thread;

use agent::{Agent, Blueprint};
use anyhow::{Context, Result, bail};
use game_protocol::{ClientMessage, ServerMessage, Wire, write_handshake};
use tracing::{debug, info, trace, warn};

use crate::config::BotConfig;

/// Connects to the server, retrying while the connection is refused.
pub fn connect(config: &BotConfig) -> Result<TcpStream> {
    let address = (config.host.as_str(), config.port);
    loop {
        match TcpStream::connect(address) {
            Ok(stream) => {
                stream.set_nodelay(true).context("Failed to set TCP_NODELAY")?;
                info!("Connected to {}:{}", config.host, config.port);
                return Ok(stream);
            }
            Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => {
                warn!(
                    "Connection to {}:{} refused; retrying in {:?}",
                    config.host, config.port, config.reconnect_delay
                );
                thread::sleep(config.reconnect_delay);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to connect to {}:{}", config.host, config.port));
            }
        }
    }
}

/// One match against the server.
///
/// A new [`Agent`] is built each time the server sends match constants.
pub struct Session<'a, R, W> {
    reader: R,
    writer: W,
    blueprint: &'a Blueprint,
    agent: Option<Agent>,
}

impl<'a, R: Read, W: Write> Session<'a, R, W> {
    pub fn new(reader: R, writer: W, blueprint: &'a Blueprint) -> Self {
        Self {
            reader,
            writer,
            blueprint,
            agent: None,
        }
    }

    /// Announces the player token and protocol version.
    pub fn handshake(&mut self, token: &str) -> Result<()> {
        write_handshake(&mut self.writer, token).context("Failed to send handshake")?;
        debug!("Handshake sent");
        Ok(())
    }

    /// Serves messages until the server finishes the match.
    ///
    /// Returns the number of orders sent.
    pub fn run(&mut self) -> Result<u64> {
        loop {
            let message =
                ServerMessage::read_from(&mut self.reader).context("Failed to read server message")?;
            trace!(message = message.name(), "received");

            match message {
                ServerMessage::UpdateConstants { constants } => {
                    info!(
                        weapons = constants.weapons.len(),
                        obstacles = constants.obstacles.len(),
                        "Match constants received"
                    );
                    self.agent = Some(Agent::new(constants, self.blueprint));
                }
                ServerMessage::GetOrder {
                    player_view,
                    debug_available,
                } => {
                    let Some(agent) = self.agent.as_mut() else {
                        bail!("Order requested before match constants");
                    };
                    let order = agent.get_order(player_view, debug_available);
                    self.send(&ClientMessage::OrderMessage { order })?;
                }
                ServerMessage::DebugUpdate { displayed_tick } => {
                    if let Some(agent) = self.agent.as_mut() {
                        agent.debug_update(displayed_tick);
                    }
                    self.send(&ClientMessage::DebugUpdateDone)?;
                }
                ServerMessage::Finish => {
                    let ticks = match self.agent.as_mut() {
                        Some(agent) => {
                            agent.finish();
                            agent.ticks()
                        }
                        None => 0,
                    };
                    return Ok(ticks);
                }
            }
        }
    }

    fn send(&mut self, message: &ClientMessage) -> Result<()> {
        message
            .write_to(&mut self.writer)
            .context("Failed to write client message")?;
        self.writer.flush().context("Failed to flush client message")?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use agent::NodeCatalog;
    use game_content::TopologyLoader;
    use game_core::{Constants, Game, PlayerId, Unit, UnitId, Vec2, Zone};
    use game_protocol::ProtocolError;

    use super::*;

    fn blueprint() -> Blueprint {
        let topology = TopologyLoader::parse(
            r#"(main_tree: "Main", trees: {"Main": Action(name: "GoCenter")})"#,
        )
        .unwrap();
        Blueprint::resolve(&topology, &NodeCatalog::builtin()).unwrap()
    }

    fn get_order() -> ServerMessage {
        ServerMessage::GetOrder {
            player_view: Game {
                my_id: PlayerId(1),
                units: vec![Unit {
                    id: UnitId(3),
                    player_id: PlayerId(1),
                    position: Vec2::new(0.0, -5.0),
                    direction: Vec2::new(1.0, 0.0),
                    ..Unit::default()
                }],
                zone: Zone {
                    current_radius: 50.0,
                    ..Zone::default()
                },
                ..Game::default()
            },
            debug_available: false,
        }
    }

    fn encode(messages: &[ServerMessage]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for message in messages {
            message.write_to(&mut bytes).unwrap();
        }
        bytes
    }

    fn decode_all(mut bytes: &[u8]) -> Vec<ClientMessage> {
        let mut messages = Vec::new();
        while !bytes.is_empty() {
            messages.push(ClientMessage::read_from(&mut bytes).unwrap());
        }
        messages
    }

    fn constants() -> ServerMessage {
        ServerMessage::UpdateConstants {
            constants: Constants {
                max_unit_forward_speed: 2.0,
                unit_radius: 1.0,
                ..Constants::default()
            },
        }
    }

    #[test]
    fn answers_orders_and_debug_updates() {
        let blueprint = blueprint();
        let input = encode(&[
            constants(),
            get_order(),
            ServerMessage::DebugUpdate { displayed_tick: 4 },
            get_order(),
            ServerMessage::Finish,
        ]);

        let mut session = Session::new(input.as_slice(), Vec::new(), &blueprint);
        assert_eq!(session.run().unwrap(), 2);

        let (_, output) = session.into_parts();
        let replies = decode_all(&output);
        assert_eq!(replies.len(), 3);
        assert!(matches!(replies[1], ClientMessage::DebugUpdateDone));

        let ClientMessage::OrderMessage { order } = &replies[0] else {
            panic!("expected an order, got {}", replies[0]);
        };
        let directive = &order.unit_orders[&UnitId(3)];
        assert_eq!(directive.target_velocity, Vec2::new(0.0, 2.0));
        assert_eq!(directive.target_direction, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn order_before_constants_is_an_error() {
        let blueprint = blueprint();
        let input = encode(&[get_order()]);

        let mut session = Session::new(input.as_slice(), Vec::new(), &blueprint);
        let err = session.run().unwrap_err();
        assert!(err.to_string().contains("before match constants"));
    }

    #[test]
    fn unknown_tag_aborts_the_session() {
        let blueprint = blueprint();
        let mut input = encode(&[constants()]);
        input.extend_from_slice(&42i32.to_le_bytes());

        let mut session = Session::new(input.as_slice(), Vec::new(), &blueprint);
        let err = session.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProtocolError>(),
            Some(ProtocolError::UnexpectedTag { tag: 42, .. })
        ));
    }

    #[test]
    fn closed_stream_is_an_error() {
        let blueprint = blueprint();
        let input = encode(&[constants()]);

        let mut session = Session::new(input.as_slice(), Vec::new(), &blueprint);
        let err = session.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProtocolError>(),
            Some(ProtocolError::Truncated)
        ));
    }

    #[test]
    fn handshake_precedes_messages() {
        let blueprint = blueprint();
        let mut session = Session::new(&[][..], Vec::new(), &blueprint);
        session.handshake("0000000000000000").unwrap();

        let (_, output) = session.into_parts();
        assert_eq!(&output[..4], &16i32.to_le_bytes());
        assert_eq!(&output[output.len() - 12..], &[1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0]);
    }
}
