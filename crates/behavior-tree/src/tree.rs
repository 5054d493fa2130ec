//! Arena storage and the tick / halt walk.
//!
//! A [`Tree`] owns every node in flat vectors. Control nodes refer to their
//! children by [`NodeId`]; composite child lists are contiguous runs in a
//! shared edge vector. Leaves are boxed [`Behavior`]s kept apart from the
//! node table so that the walk can borrow a leaf mutably while the tree
//! itself is being traversed.

use crate::{Behavior, Composite, Decorator, Status};

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Half-open range into the edge vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChildRange {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Shape {
    Composite(Composite, ChildRange),
    Decorator(Decorator, NodeId),
    Leaf(usize),
}

pub(crate) struct Node {
    pub(crate) shape: Shape,
    pub(crate) name: String,
    pub(crate) last: Option<Status>,
}

/// An immutable-shape behavior tree with mutable leaf state.
pub struct Tree<C> {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<NodeId>,
    pub(crate) leaves: Vec<Box<dyn Behavior<C>>>,
    pub(crate) root: NodeId,
}

impl<C> Tree<C> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display name given when the node was added.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Status returned by the node on its most recent tick, if it was ticked
    /// since the last halt.
    pub fn last_status(&self, id: NodeId) -> Option<Status> {
        self.nodes[id.0].last
    }

    /// Evaluates the whole tree once.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.tick_node(self.root, ctx)
    }

    /// Interrupts every running node.
    pub fn halt(&mut self) {
        self.halt_node(self.root);
    }

    pub(crate) fn child(&self, edge: usize) -> NodeId {
        self.edges[edge]
    }

    pub(crate) fn tick_node(&mut self, id: NodeId, ctx: &mut C) -> Status {
        let shape = self.nodes[id.0].shape;
        let status = match shape {
            Shape::Composite(kind, children) => kind.tick(self, children, ctx),
            Shape::Decorator(kind, child) => kind.tick(self, child, ctx),
            Shape::Leaf(leaf) => self.leaves[leaf].tick(ctx),
        };
        self.nodes[id.0].last = Some(status);
        status
    }

    pub(crate) fn halt_node(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        let was_running = node.last == Some(Status::Running);
        let shape = node.shape;
        node.last = None;
        if !was_running {
            return;
        }
        match shape {
            Shape::Composite(_, children) => self.halt_children(children.start, children.end),
            Shape::Decorator(_, child) => self.halt_node(child),
            Shape::Leaf(leaf) => self.leaves[leaf].halt(),
        }
    }

    /// Halts the children stored at `edges[from..to]`.
    pub(crate) fn halt_children(&mut self, from: usize, to: usize) {
        for edge in from..to {
            let child = self.child(edge);
            self.halt_node(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::TreeBuilder;

    #[derive(Default)]
    struct Trace {
        ticks: Vec<&'static str>,
        running: bool,
    }

    /// Runs while `ctx.running` is set, then succeeds.
    struct Busy(&'static str);
    impl Behavior<Trace> for Busy {
        fn tick(&mut self, ctx: &mut Trace) -> Status {
            ctx.ticks.push(self.0);
            if ctx.running {
                Status::Running
            } else {
                Status::Success
            }
        }
    }

    struct Recorder {
        label: &'static str,
        status: Status,
        halted: Arc<Mutex<Vec<&'static str>>>,
    }
    impl Behavior<Trace> for Recorder {
        fn tick(&mut self, ctx: &mut Trace) -> Status {
            ctx.ticks.push(self.label);
            self.status
        }

        fn halt(&mut self) {
            self.halted.lock().unwrap().push(self.label);
        }
    }

    #[test]
    fn records_last_status_per_node() {
        let mut builder = TreeBuilder::new();
        let busy = builder.leaf("busy", Busy("busy"));
        let root = builder.sequence(vec![busy]);
        let mut tree = builder.build(root);

        let mut ctx = Trace {
            running: true,
            ..Trace::default()
        };
        assert_eq!(tree.tick(&mut ctx), Status::Running);
        assert_eq!(tree.last_status(busy), Some(Status::Running));
        assert_eq!(tree.name(busy), "busy");

        tree.halt();
        assert_eq!(tree.last_status(busy), None);
        assert_eq!(tree.last_status(tree.root()), None);
    }

    #[test]
    fn halt_reaches_running_leaf_only() {
        let halted = Arc::new(Mutex::new(Vec::new()));
        let mut builder = TreeBuilder::new();
        let done = builder.leaf(
            "done",
            Recorder {
                label: "done",
                status: Status::Success,
                halted: halted.clone(),
            },
        );
        let busy = builder.leaf(
            "busy",
            Recorder {
                label: "busy",
                status: Status::Running,
                halted: halted.clone(),
            },
        );
        let root = builder.sequence(vec![done, busy]);
        let mut tree = builder.build(root);

        let mut ctx = Trace::default();
        tree.tick(&mut ctx);
        tree.halt();

        assert_eq!(ctx.ticks, vec!["done", "busy"]);
        assert_eq!(*halted.lock().unwrap(), vec!["busy"]);
    }
}
