//! Behavior-tree agent for the top-down arena.
//!
//! - [`NodeCatalog`]: tactical leaves registered under stable names with
//!   their declared ports
//! - [`Blueprint`]: a topology resolved against the catalog. All names,
//!   ports and subtree references are checked here, never while ticking
//! - [`DecisionEngine`]: one evaluation of the resolved tree per tick
//! - [`Agent`]: turns a snapshot into an order for the controlled unit
//!
//! Nodes share data through a typed [`Blackboard`] that lives for one tick.

pub mod blackboard;
pub mod catalog;
pub mod context;
pub mod controller;
pub mod engine;
pub mod error;
pub mod nodes;
pub mod tuning;

#[cfg(test)]
mod testing;

pub use blackboard::{Blackboard, InputPort, OutputPort, PortData, PortType, PortValue, SlotId};
pub use catalog::{NodeCatalog, NodeEntry, NodeFactory, PortDirection, PortMap, PortSpec};
pub use context::TickContext;
pub use controller::Agent;
pub use engine::{Blueprint, DecisionEngine, EngineState};
pub use error::{AgentError, Result, TopologyError};
