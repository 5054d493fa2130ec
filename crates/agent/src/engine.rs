//! Topology resolution and the per-tick decision engine.
//!
//! Resolution walks the main tree of a [`Topology`], inlining subtrees, and
//! checks every node name, port and blackboard key against a
//! [`NodeCatalog`]. The result is a [`Blueprint`]: a tree with every leaf
//! factory and port binding already looked up. Instantiating a blueprint
//! cannot fail, so a new tree can be built whenever the match constants
//! change without re-validating.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use behavior_tree::{Composite, Decorator, NodeId, Status, Tree, TreeBuilder};
use game_content::{NodeSpec, PortBinding, Topology, TopologyLoader};
use game_core::{UnitId, Vec2};
use tracing::{info, trace, warn};

use crate::blackboard::{Blackboard, PortType, PortValue, SlotId};
use crate::catalog::{NodeCatalog, NodeEntry, PortDirection, PortMap, PortSpec};
use crate::context::TickContext;
use crate::error::{AgentError, TopologyError};

#[derive(Debug, Clone)]
enum Resolved {
    Composite(Composite, Vec<Resolved>),
    Decorator(Decorator, Box<Resolved>),
    Leaf { entry: NodeEntry, ports: PortMap },
}

/// A topology validated against a node catalog.
#[derive(Debug, Clone)]
pub struct Blueprint {
    main_tree: String,
    root: Resolved,
    slots: Vec<(String, PortType)>,
    leaves: usize,
}

impl Blueprint {
    /// Resolves `topology` against `catalog`.
    ///
    /// Only trees reachable from the main tree are resolved. Each subtree
    /// reference gets its own copy of the subtree's nodes.
    pub fn resolve(topology: &Topology, catalog: &NodeCatalog) -> Result<Self, TopologyError> {
        let main_tree = topology.main_tree.as_str();
        let main = topology
            .main()
            .ok_or_else(|| TopologyError::MissingMainTree(topology.main_tree.clone()))?;

        let mut resolver = Resolver {
            topology,
            catalog,
            slots: Vec::new(),
            stack: vec![main_tree],
            visited: BTreeSet::from([main_tree]),
            leaves: 0,
        };
        let root = resolver.node(main_tree, main)?;

        for name in topology.trees.keys() {
            if !resolver.visited.contains(name.as_str()) {
                warn!(tree = %name, "tree is never referenced from the main tree");
            }
        }

        Ok(Self {
            main_tree: topology.main_tree.clone(),
            root,
            slots: resolver.slots,
            leaves: resolver.leaves,
        })
    }

    /// Loads a RON topology from `path` and resolves it.
    pub fn load(path: &Path, catalog: &NodeCatalog) -> crate::Result<Self> {
        let topology = TopologyLoader::load(path).map_err(AgentError::Load)?;
        let blueprint = Self::resolve(&topology, catalog)?;
        info!(
            path = %path.display(),
            main_tree = %blueprint.main_tree,
            leaves = blueprint.leaves,
            keys = blueprint.slots.len(),
            "Behavior topology loaded"
        );
        Ok(blueprint)
    }

    pub fn main_tree(&self) -> &str {
        &self.main_tree
    }

    /// Number of leaves after subtree expansion.
    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    /// Blackboard keys with their inferred types, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, PortType)> + '_ {
        self.slots.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// An empty blackboard with one slot per key.
    pub fn blackboard(&self) -> Blackboard {
        Blackboard::with_slots(self.slots())
    }

    /// Builds a fresh tree with idle nodes.
    pub fn instantiate(&self) -> Tree<TickContext> {
        let mut builder = TreeBuilder::new();
        let root = build(&mut builder, &self.root);
        builder.build(root)
    }
}

fn build(builder: &mut TreeBuilder<TickContext>, node: &Resolved) -> NodeId {
    match node {
        Resolved::Composite(kind, children) => {
            let ids: Vec<NodeId> = children.iter().map(|c| build(builder, c)).collect();
            builder.composite(*kind, ids)
        }
        Resolved::Decorator(kind, child) => {
            let id = build(builder, child);
            builder.decorator(*kind, id)
        }
        Resolved::Leaf { entry, ports } => builder.boxed_leaf(entry.name, entry.instantiate(ports)),
    }
}

struct Resolver<'a> {
    topology: &'a Topology,
    catalog: &'a NodeCatalog,
    slots: Vec<(String, PortType)>,
    /// Subtrees currently being expanded, outermost first.
    stack: Vec<&'a str>,
    visited: BTreeSet<&'a str>,
    leaves: usize,
}

impl<'a> Resolver<'a> {
    fn node(&mut self, tree: &'a str, spec: &'a NodeSpec) -> Result<Resolved, TopologyError> {
        match spec {
            NodeSpec::Sequence(children) => self.composite(tree, spec, Composite::Sequence, children),
            NodeSpec::Fallback(children) => self.composite(tree, spec, Composite::Selector, children),
            NodeSpec::Inverter(child) => self.decorator(tree, Decorator::Inverter, child),
            NodeSpec::ForceSuccess(child) => self.decorator(tree, Decorator::AlwaysSucceed, child),
            NodeSpec::ForceFailure(child) => self.decorator(tree, Decorator::AlwaysFail, child),
            NodeSpec::Retry { attempts, child } => {
                if *attempts == 0 {
                    return Err(TopologyError::ZeroRetryAttempts {
                        tree: tree.to_owned(),
                    });
                }
                self.decorator(tree, Decorator::Retry { attempts: *attempts }, child)
            }
            NodeSpec::SubTree(name) => self.subtree(name),
            NodeSpec::Action { name, ports } => self.action(tree, name, ports),
        }
    }

    fn composite(
        &mut self,
        tree: &'a str,
        spec: &NodeSpec,
        kind: Composite,
        children: &'a [NodeSpec],
    ) -> Result<Resolved, TopologyError> {
        if children.is_empty() {
            return Err(TopologyError::EmptyComposite {
                tree: tree.to_owned(),
                kind: spec.kind(),
            });
        }
        let children = children
            .iter()
            .map(|child| self.node(tree, child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Resolved::Composite(kind, children))
    }

    fn decorator(
        &mut self,
        tree: &'a str,
        kind: Decorator,
        child: &'a NodeSpec,
    ) -> Result<Resolved, TopologyError> {
        let child = self.node(tree, child)?;
        Ok(Resolved::Decorator(kind, Box::new(child)))
    }

    fn subtree(&mut self, name: &'a str) -> Result<Resolved, TopologyError> {
        let (name, spec) = self
            .topology
            .trees
            .get_key_value(name)
            .ok_or_else(|| TopologyError::UnknownSubTree(name.to_owned()))?;
        let name = name.as_str();
        if self.stack.contains(&name) {
            return Err(TopologyError::RecursiveSubTree(name.to_owned()));
        }

        trace!(subtree = name, "expanding");
        self.stack.push(name);
        self.visited.insert(name);
        let resolved = self.node(name, spec);
        self.stack.pop();
        resolved
    }

    fn action(
        &mut self,
        tree: &str,
        name: &str,
        bindings: &BTreeMap<String, PortBinding>,
    ) -> Result<Resolved, TopologyError> {
        let entry = *self
            .catalog
            .get(name)
            .ok_or_else(|| TopologyError::UnknownNode {
                tree: tree.to_owned(),
                node: name.to_owned(),
            })?;

        let mut ports = PortMap::new();
        for (port, binding) in bindings {
            let spec = *entry.port(port).ok_or_else(|| TopologyError::UnknownPort {
                node: name.to_owned(),
                port: port.clone(),
            })?;

            match binding {
                PortBinding::Key(key) => {
                    let slot = self.slot(key, spec.port_type)?;
                    ports.bind_entry(spec.name, slot);
                }
                PortBinding::Vec2(x, y) => {
                    let value = PortValue::Vec2(Vec2::new(*x, *y));
                    check_literal(name, &spec, value)?;
                    ports.bind_literal(spec.name, value);
                }
                PortBinding::Id(id) => {
                    let value = PortValue::Id(UnitId(*id));
                    check_literal(name, &spec, value)?;
                    ports.bind_literal(spec.name, value);
                }
            }
        }

        self.leaves += 1;
        Ok(Resolved::Leaf { entry, ports })
    }

    /// Finds or creates the slot for `key`, fixing its type on first use.
    fn slot(&mut self, key: &str, port_type: PortType) -> Result<SlotId, TopologyError> {
        if let Some(index) = self.slots.iter().position(|(name, _)| name == key) {
            let first = self.slots[index].1;
            if first != port_type {
                return Err(TopologyError::KeyTypeMismatch {
                    key: key.to_owned(),
                    first,
                    second: port_type,
                });
            }
            return Ok(SlotId(index));
        }

        self.slots.push((key.to_owned(), port_type));
        Ok(SlotId(self.slots.len() - 1))
    }
}

fn check_literal(node: &str, spec: &PortSpec, value: PortValue) -> Result<(), TopologyError> {
    if spec.direction == PortDirection::Output {
        return Err(TopologyError::OutputBoundToLiteral {
            node: node.to_owned(),
            port: spec.name.to_owned(),
        });
    }
    if value.port_type() != spec.port_type {
        return Err(TopologyError::LiteralTypeMismatch {
            node: node.to_owned(),
            port: spec.name.to_owned(),
            expected: spec.port_type,
            found: value.port_type(),
        });
    }
    Ok(())
}

/// Engine state. A tick always runs to completion, so callers only ever
/// observe `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum EngineState {
    Idle,
    Ticking,
}

/// Evaluates a resolved tree once per tick.
pub struct DecisionEngine {
    tree: Tree<TickContext>,
    state: EngineState,
}

impl DecisionEngine {
    pub fn new(blueprint: &Blueprint) -> Self {
        Self {
            tree: blueprint.instantiate(),
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Evaluates the tree from the root and returns the root outcome.
    pub fn tick(&mut self, ctx: &mut TickContext) -> Status {
        self.state = EngineState::Ticking;
        let status = self.tree.tick(ctx);
        self.state = EngineState::Idle;
        trace!(?status, "root");
        status
    }

    /// Interrupts every running node.
    pub fn halt(&mut self) {
        self.tree.halt();
    }
}
