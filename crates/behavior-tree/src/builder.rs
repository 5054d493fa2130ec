//! Bottom-up construction of a [`Tree`].
//!
//! Children are added before their parent; every `add` method returns the
//! [`NodeId`] to pass to the parent. Instead of nesting `Box::new(...)` calls,
//! a tree reads as:
//!
//! ```rust,ignore
//! let mut b = TreeBuilder::new();
//! let dodge = b.leaf("Dodge", Dodge::new(..));
//! let center = b.leaf("GoCenter", GoCenter::new(..));
//! let root = b.selector(vec![dodge, center]);
//! let tree = b.build(root);
//! ```

use crate::tree::{ChildRange, Node, Shape};
use crate::{Behavior, Composite, Decorator, NodeId, Tree};

pub struct TreeBuilder<C> {
    nodes: Vec<Node>,
    edges: Vec<NodeId>,
    leaves: Vec<Box<dyn Behavior<C>>>,
}

impl<C: 'static> Default for TreeBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> TreeBuilder<C> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            leaves: Vec::new(),
        }
    }

    fn push(&mut self, shape: Shape, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            shape,
            name,
            last: None,
        });
        id
    }

    /// Adds a leaf node.
    #[inline]
    pub fn leaf(&mut self, name: impl Into<String>, behavior: impl Behavior<C> + 'static) -> NodeId {
        self.boxed_leaf(name, Box::new(behavior))
    }

    pub fn boxed_leaf(&mut self, name: impl Into<String>, behavior: Box<dyn Behavior<C>>) -> NodeId {
        let leaf = self.leaves.len();
        self.leaves.push(behavior);
        self.push(Shape::Leaf(leaf), name.into())
    }

    /// Adds a composite node over already-added children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A composite with no children is
    /// meaningless and likely indicates a programming error.
    pub fn composite(&mut self, kind: Composite, children: Vec<NodeId>) -> NodeId {
        assert!(
            !children.is_empty(),
            "{} must have at least one child",
            kind.name()
        );
        let start = self.edges.len();
        self.edges.extend(children);
        let range = ChildRange {
            start,
            end: self.edges.len(),
        };
        self.push(Shape::Composite(kind, range), kind.name().to_owned())
    }

    /// Adds a decorator node over an already-added child.
    pub fn decorator(&mut self, kind: Decorator, child: NodeId) -> NodeId {
        if let Decorator::Retry { attempts } = kind {
            assert!(attempts > 0, "Retry must allow at least one attempt");
        }
        self.push(Shape::Decorator(kind, child), kind.name().to_owned())
    }

    /// Creates a sequence node.
    #[inline]
    pub fn sequence(&mut self, children: Vec<NodeId>) -> NodeId {
        self.composite(Composite::Sequence, children)
    }

    /// Creates a selector node.
    #[inline]
    pub fn selector(&mut self, children: Vec<NodeId>) -> NodeId {
        self.composite(Composite::Selector, children)
    }

    /// Creates an inverter node.
    #[inline]
    pub fn inverter(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::Inverter, child)
    }

    /// Creates an always-succeed node.
    #[inline]
    pub fn always_succeed(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::AlwaysSucceed, child)
    }

    /// Creates an always-fail node.
    #[inline]
    pub fn always_fail(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::AlwaysFail, child)
    }

    /// Creates a retry node.
    #[inline]
    pub fn retry(&mut self, attempts: u32, child: NodeId) -> NodeId {
        self.decorator(Decorator::Retry { attempts }, child)
    }

    /// Finishes the tree with `root` as its entry point.
    ///
    /// # Panics
    ///
    /// Panics if `root` was not created by this builder.
    pub fn build(self, root: NodeId) -> Tree<C> {
        assert!(root.0 < self.nodes.len(), "root node does not exist");
        Tree {
            nodes: self.nodes,
            edges: self.edges,
            leaves: self.leaves,
            root,
        }
    }
}
