//! Arena bot entry point.
//!
//! ```bash
//! bot 127.0.0.1 31001 0000000000000000 --topology assets/behavior/main.ron
//! ```

use agent::{Blueprint, NodeCatalog};
use anyhow::{Context, Result};
use bot_client::logging::setup_logging;
use bot_client::{BotConfig, CliArgs, Session, connect};
use clap::Parser;
use std::io::{BufReader, BufWriter};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = BotConfig::from_env().with_args(args);

    let _guard = setup_logging(config.log_dir.as_deref())?;

    // Topology errors are reported before the server is contacted.
    let catalog = NodeCatalog::builtin();
    let blueprint = Blueprint::load(&config.topology, &catalog)
        .with_context(|| format!("Invalid topology {}", config.topology.display()))?;

    let stream = connect(&config)?;
    let reader = BufReader::new(stream.try_clone().context("Failed to clone TCP stream")?);
    let writer = BufWriter::new(stream);

    let mut session = Session::new(reader, writer, &blueprint);
    session.handshake(&config.token)?;
    let orders = session.run()?;

    tracing::info!(orders, "Session finished");
    Ok(())
}
