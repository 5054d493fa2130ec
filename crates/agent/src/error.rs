//! Configuration errors raised while building an agent.
//!
//! Tactical misses during a tick are not errors: nodes report them as
//! [`behavior_tree::Status::Failure`].

use thiserror::Error;

use crate::blackboard::PortType;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid behavior topology")]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Load(anyhow::Error),
}

/// A topology that does not match the node catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("main tree `{0}` is not defined")]
    MissingMainTree(String),

    #[error("unknown node `{node}` in tree `{tree}`")]
    UnknownNode { tree: String, node: String },

    #[error("node `{node}` has no port named `{port}`")]
    UnknownPort { node: String, port: String },

    #[error("blackboard key `{key}` is used as {first} and as {second}")]
    KeyTypeMismatch {
        key: String,
        first: PortType,
        second: PortType,
    },

    #[error("port `{port}` of `{node}` expects {expected}, found a {found} literal")]
    LiteralTypeMismatch {
        node: String,
        port: String,
        expected: PortType,
        found: PortType,
    },

    #[error("output port `{port}` of `{node}` must be bound to a blackboard key")]
    OutputBoundToLiteral { node: String, port: String },

    #[error("{kind} in tree `{tree}` has no children")]
    EmptyComposite { tree: String, kind: &'static str },

    #[error("Retry in tree `{tree}` must allow at least one attempt")]
    ZeroRetryAttempts { tree: String },

    #[error("subtree `{0}` is not defined")]
    UnknownSubTree(String),

    #[error("subtree `{0}` references itself")]
    RecursiveSubTree(String),
}
