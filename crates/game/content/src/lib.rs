//! Data-driven content definitions and loaders.
//!
//! This crate houses the behavior topology format and its RON loader:
//! - Named trees of control nodes and action leaves
//! - Port bindings to blackboard keys or literal values
//!
//! Content is resolved against the node catalog by the agent and never
//! appears in game state.

pub mod topology;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use topology::{NodeSpec, PortBinding, Topology};

#[cfg(feature = "loaders")]
pub use loaders::TopologyLoader;
