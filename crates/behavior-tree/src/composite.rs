//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Composite::Sequence`] (AND logic) and
//! [`Composite::Selector`] (OR logic, also known as fallback).
//!
//! Both kinds are reactive: every tick restarts from the first child, so a
//! higher-priority child can take over from one that returned `Running` on
//! the previous tick. Children after the one that decided the outcome are
//! halted.

use crate::Status;
use crate::tree::{ChildRange, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    /// Executes child behaviors in order until one fails.
    ///
    /// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
    /// - If a child returns `Running`, the sequence stops and returns `Running`
    /// - If a child returns `Success`, the sequence **continues** to the next child
    /// - If all children return `Success`, the sequence returns `Success`
    Sequence,

    /// Executes child behaviors in order until one succeeds.
    ///
    /// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
    /// - If a child returns `Running`, the selector stops and returns `Running`
    /// - If a child returns `Failure`, the selector **continues** to the next child
    /// - If all children return `Failure`, the selector returns `Failure`
    Selector,
}

impl Composite {
    pub fn name(self) -> &'static str {
        match self {
            Composite::Sequence => "Sequence",
            Composite::Selector => "Selector",
        }
    }

    /// Status that makes this composite continue with the next child.
    fn passes(self) -> Status {
        match self {
            Composite::Sequence => Status::Success,
            Composite::Selector => Status::Failure,
        }
    }

    pub(crate) fn tick<C>(self, tree: &mut Tree<C>, children: ChildRange, ctx: &mut C) -> Status {
        for edge in children.start..children.end {
            let child = tree.child(edge);
            let status = tree.tick_node(child, ctx);
            if status != self.passes() {
                // Short-circuit
                tree.halt_children(edge + 1, children.end);
                return status;
            }
        }
        self.passes()
    }
}
