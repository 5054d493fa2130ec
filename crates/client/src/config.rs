//! Bot configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Positional arguments match the order the game launcher passes them in.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bot", version, about = "Behavior-tree bot for the arena")]
pub struct CliArgs {
    /// Server host
    pub host: Option<String>,

    /// Server port
    pub port: Option<u16>,

    /// Player token
    pub token: Option<String>,

    /// Behavior topology (RON)
    #[arg(long)]
    pub topology: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct BotConfig {
    pub host: String,
    pub port: u16,
    pub token: String,
    pub topology: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub reconnect_delay: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 31001,
            token: "0000000000000000".to_owned(),
            topology: PathBuf::from("assets/behavior/main.ron"),
            log_dir: None,
            reconnect_delay: Duration::from_millis(1000),
        }
    }
}

impl BotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_HOST` - Server host (default: 127.0.0.1)
    /// - `BOT_PORT` - Server port (default: 31001)
    /// - `BOT_TOKEN` - Player token (default: 0000000000000000)
    /// - `BOT_TOPOLOGY` - Behavior topology file (default: assets/behavior/main.ron)
    /// - `BOT_LOG_DIR` - Directory for a log file (default: stderr only)
    /// - `BOT_RECONNECT_DELAY_MS` - Delay between connection attempts (default: 1000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("BOT_HOST") {
            config.host = host;
        }
        if let Some(port) = read_var::<u16>(&lookup, "BOT_PORT") {
            config.port = port;
        }
        if let Some(token) = lookup("BOT_TOKEN") {
            config.token = token;
        }
        if let Some(path) = lookup("BOT_TOPOLOGY") {
            config.topology = PathBuf::from(path);
        }
        config.log_dir = lookup("BOT_LOG_DIR").map(PathBuf::from);
        if let Some(ms) = read_var::<u64>(&lookup, "BOT_RECONNECT_DELAY_MS") {
            config.reconnect_delay = Duration::from_millis(ms);
        }

        config
    }

    /// Command-line arguments take precedence over the environment.
    pub fn with_args(mut self, args: CliArgs) -> Self {
        if let Some(host) = args.host {
            self.host = host;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(token) = args.token {
            self.token = token;
        }
        if let Some(topology) = args.topology {
            self.topology = topology;
        }
        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
