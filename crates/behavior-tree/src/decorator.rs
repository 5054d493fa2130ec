//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! `Running` always passes through unchanged.

use crate::Status;
use crate::tree::{NodeId, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decorator {
    /// Swaps `Success` and `Failure`.
    ///
    /// This is analogous to a logical NOT (!) operation.
    Inverter,

    /// Turns `Failure` into `Success`.
    ///
    /// This is useful for:
    /// - Optional behaviors that shouldn't cause a sequence to fail
    /// - Error suppression in non-critical paths
    AlwaysSucceed,

    /// Turns `Success` into `Failure`.
    AlwaysFail,

    /// Re-ticks a failing child within the same tick, up to `attempts` times
    /// in total. Fails once every attempt failed.
    Retry { attempts: u32 },
}

impl Decorator {
    pub fn name(self) -> &'static str {
        match self {
            Decorator::Inverter => "Inverter",
            Decorator::AlwaysSucceed => "AlwaysSucceed",
            Decorator::AlwaysFail => "AlwaysFail",
            Decorator::Retry { .. } => "Retry",
        }
    }

    pub(crate) fn tick<C>(self, tree: &mut Tree<C>, child: NodeId, ctx: &mut C) -> Status {
        match self {
            Decorator::Inverter => tree.tick_node(child, ctx).invert(),
            Decorator::AlwaysSucceed => match tree.tick_node(child, ctx) {
                Status::Running => Status::Running,
                _ => Status::Success,
            },
            Decorator::AlwaysFail => match tree.tick_node(child, ctx) {
                Status::Running => Status::Running,
                _ => Status::Failure,
            },
            Decorator::Retry { attempts } => {
                for _ in 0..attempts {
                    let status = tree.tick_node(child, ctx);
                    if status != Status::Failure {
                        return status;
                    }
                }
                Status::Failure
            }
        }
    }
}
