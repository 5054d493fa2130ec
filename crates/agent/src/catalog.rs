//! Node catalog: tactical leaves registered under stable names.
//!
//! Each entry declares its ports and a factory that builds a fresh leaf from
//! resolved [`PortMap`] bindings. Topologies can only refer to nodes and
//! ports listed here.

use std::collections::BTreeMap;
use std::fmt;

use behavior_tree::Behavior;

use crate::blackboard::{InputPort, OutputPort, PortData, PortType, PortValue, SlotId};
use crate::context::TickContext;
use crate::nodes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PortDirection {
    Input,
    Output,
}

/// A port declared by a catalog node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSpec {
    pub name: &'static str,
    pub direction: PortDirection,
    pub port_type: PortType,
}

impl PortSpec {
    pub const fn input(name: &'static str, port_type: PortType) -> Self {
        Self {
            name,
            direction: PortDirection::Input,
            port_type,
        }
    }

    pub const fn output(name: &'static str, port_type: PortType) -> Self {
        Self {
            name,
            direction: PortDirection::Output,
            port_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Binding {
    Literal(PortValue),
    Entry(SlotId),
}

/// Port bindings of one node instance, keyed by port name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortMap {
    bindings: BTreeMap<&'static str, Binding>,
}

impl PortMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_literal(&mut self, port: &'static str, value: PortValue) -> &mut Self {
        self.bindings.insert(port, Binding::Literal(value));
        self
    }

    pub fn bind_entry(&mut self, port: &'static str, slot: SlotId) -> &mut Self {
        self.bindings.insert(port, Binding::Entry(slot));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Typed view of an input port. Missing bindings and literals of another
    /// type come back as [`InputPort::Unbound`].
    pub fn input<T: PortData>(&self, port: &str) -> InputPort<T> {
        match self.bindings.get(port) {
            Some(Binding::Literal(value)) => {
                T::from_value(*value).map_or(InputPort::Unbound, InputPort::Literal)
            }
            Some(Binding::Entry(slot)) => InputPort::Entry(*slot),
            None => InputPort::Unbound,
        }
    }

    pub fn output<T: PortData>(&self, port: &str) -> OutputPort<T> {
        match self.bindings.get(port) {
            Some(Binding::Entry(slot)) => OutputPort::entry(*slot),
            _ => OutputPort::unbound(),
        }
    }
}

/// Builds a fresh leaf from its resolved bindings.
pub type NodeFactory = fn(&PortMap) -> Box<dyn Behavior<TickContext>>;

#[derive(Clone, Copy)]
pub struct NodeEntry {
    pub name: &'static str,
    pub ports: &'static [PortSpec],
    factory: NodeFactory,
}

impl NodeEntry {
    pub fn port(&self, name: &str) -> Option<&PortSpec> {
        self.ports.iter().find(|p| p.name == name)
    }

    pub fn instantiate(&self, ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        (self.factory)(ports)
    }
}

impl fmt::Debug for NodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeEntry")
            .field("name", &self.name)
            .field("ports", &self.ports)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct NodeCatalog {
    entries: BTreeMap<&'static str, NodeEntry>,
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NodeCatalog {
    /// A catalog with no nodes.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The tactical nodes shipped with the agent.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        nodes::register_builtin(&mut catalog);
        catalog
    }

    /// Registers `name`, replacing and returning any previous entry.
    pub fn register(
        &mut self,
        name: &'static str,
        ports: &'static [PortSpec],
        factory: NodeFactory,
    ) -> Option<NodeEntry> {
        self.entries.insert(
            name,
            NodeEntry {
                name,
                ports,
                factory,
            },
        )
    }

    pub fn get(&self, name: &str) -> Option<&NodeEntry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use behavior_tree::Status;
    use game_core::{UnitId, Vec2};

    use super::*;

    #[test]
    fn builtin_lists_every_tactical_node() {
        let catalog = NodeCatalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(
            names,
            vec![
                "AvoidZone",
                "Dodge",
                "GetClosestTarget",
                "GoCenter",
                "GoToTarget",
                "Look",
                "Move",
                "Shoot"
            ]
        );
    }

    #[test]
    fn look_declares_vector_and_id_inputs() {
        let catalog = NodeCatalog::builtin();
        let look = catalog.get("Look").unwrap();
        assert_eq!(
            look.port("vector"),
            Some(&PortSpec::input("vector", PortType::Vec2))
        );
        assert_eq!(look.port("id"), Some(&PortSpec::input("id", PortType::Id)));
        assert_eq!(look.port("target"), None);
    }

    #[test]
    fn literal_of_other_type_reads_as_unbound() {
        let mut ports = PortMap::new();
        ports.bind_literal("vector", PortValue::Id(UnitId(3)));
        assert_eq!(ports.input::<Vec2>("vector"), InputPort::Unbound);
        assert_eq!(ports.input::<UnitId>("vector"), InputPort::Literal(UnitId(3)));
        assert!(!ports.output::<UnitId>("vector").is_bound());
    }

    struct Idle;
    impl Behavior<TickContext> for Idle {
        fn tick(&mut self, _ctx: &mut TickContext) -> Status {
            Status::Running
        }
    }

    fn idle(_ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Idle)
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut catalog = NodeCatalog::empty();
        assert!(catalog.register("Idle", &[], idle).is_none());
        assert!(catalog.register("Idle", &[], idle).is_some());
        assert_eq!(catalog.len(), 1);
    }
}
