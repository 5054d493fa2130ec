//! Behavior topology format.
//!
//! A topology names one or more trees and marks one of them as the entry
//! point. In RON:
//!
//! ```ron
//! (
//!     main_tree: "Main",
//!     trees: {
//!         "Main": Fallback([
//!             Action(name: "Dodge"),
//!             Sequence([
//!                 Action(name: "GetClosestTarget", ports: {"id": Key("target")}),
//!                 Action(name: "Shoot", ports: {"id": Key("target")}),
//!             ]),
//!             SubTree("Roam"),
//!         ]),
//!         "Roam": Action(name: "GoCenter"),
//!     },
//! )
//! ```

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Topology {
    /// Tree ticked as the root.
    pub main_tree: String,
    pub trees: BTreeMap<String, NodeSpec>,
}

impl Topology {
    pub fn main(&self) -> Option<&NodeSpec> {
        self.trees.get(&self.main_tree)
    }
}

/// One node of a tree definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeSpec {
    Sequence(Vec<NodeSpec>),
    #[cfg_attr(feature = "serde", serde(alias = "Selector"))]
    Fallback(Vec<NodeSpec>),
    Inverter(Box<NodeSpec>),
    ForceSuccess(Box<NodeSpec>),
    ForceFailure(Box<NodeSpec>),
    /// Re-ticks a failing child within one tick.
    Retry { attempts: u32, child: Box<NodeSpec> },
    /// Inlines another tree of the same topology.
    SubTree(String),
    /// Leaf from the node catalog.
    Action {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        ports: BTreeMap<String, PortBinding>,
    },
}

impl NodeSpec {
    /// Shorthand for an action with no ports.
    pub fn action(name: impl Into<String>) -> Self {
        NodeSpec::Action {
            name: name.into(),
            ports: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NodeSpec::Sequence(_) => "Sequence",
            NodeSpec::Fallback(_) => "Fallback",
            NodeSpec::Inverter(_) => "Inverter",
            NodeSpec::ForceSuccess(_) => "ForceSuccess",
            NodeSpec::ForceFailure(_) => "ForceFailure",
            NodeSpec::Retry { .. } => "Retry",
            NodeSpec::SubTree(_) => "SubTree",
            NodeSpec::Action { .. } => "Action",
        }
    }
}

/// Where a port reads or writes its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortBinding {
    /// Blackboard entry shared with other nodes.
    Key(String),
    /// Literal 2-D vector. Input ports only.
    Vec2(f64, f64),
    /// Literal unit id. Input ports only.
    Id(i32),
}
