//! Core behavior traits.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for leaf nodes. The trait is generic over a context type `C`,
//! allowing nodes to access game state and make decisions.
//!
//! Leaves that distinguish their first tick from the following ones implement
//! [`StatefulAction`] and are wrapped in [`Stateful`].

use crate::Status;

/// A behavior tree leaf that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   game state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Running` if the goal is not reached yet
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Interrupts a behavior that returned `Running` on its last tick.
    ///
    /// Called by the tree when the parent stops selecting this node.
    fn halt(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn halt(&mut self) {
        (**self).halt()
    }
}

/// A leaf with a distinct start step.
///
/// `on_start` runs when the node is ticked while idle. If it returns
/// `Running`, later ticks call `on_running` until a terminal status is
/// returned or the node is halted.
pub trait StatefulAction<C>: Send + Sync {
    fn on_start(&mut self, ctx: &mut C) -> Status;

    /// Defaults to repeating the start step.
    fn on_running(&mut self, ctx: &mut C) -> Status {
        self.on_start(ctx)
    }

    fn on_halted(&mut self) {}
}

/// Adapts a [`StatefulAction`] to the [`Behavior`] interface.
#[derive(Debug, Default)]
pub struct Stateful<A> {
    action: A,
    running: bool,
}

impl<A> Stateful<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            running: false,
        }
    }

    /// Whether the last tick returned `Running`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn action(&self) -> &A {
        &self.action
    }
}

impl<C, A: StatefulAction<C>> Behavior<C> for Stateful<A> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = if self.running {
            self.action.on_running(ctx)
        } else {
            self.action.on_start(ctx)
        };
        self.running = status.is_running();
        status
    }

    fn halt(&mut self) {
        if self.running {
            self.running = false;
            self.action.on_halted();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Countdown {
        starts: u32,
        halts: u32,
    }

    impl StatefulAction<u32> for Countdown {
        fn on_start(&mut self, ctx: &mut u32) -> Status {
            self.starts += 1;
            self.on_running(ctx)
        }

        fn on_running(&mut self, ctx: &mut u32) -> Status {
            if *ctx == 0 {
                return Status::Success;
            }
            *ctx -= 1;
            Status::Running
        }

        fn on_halted(&mut self) {
            self.halts += 1;
        }
    }

    #[test]
    fn start_runs_once_until_completion() {
        let mut node = Stateful::new(Countdown::default());
        let mut remaining = 2;

        assert_eq!(node.tick(&mut remaining), Status::Running);
        assert_eq!(node.tick(&mut remaining), Status::Running);
        assert_eq!(node.tick(&mut remaining), Status::Success);
        assert_eq!(node.action().starts, 1);
        assert!(!node.is_running());
    }

    #[test]
    fn halt_only_reaches_running_actions() {
        let mut node = Stateful::new(Countdown::default());
        node.halt();
        assert_eq!(node.action().halts, 0);

        let mut remaining = 5;
        node.tick(&mut remaining);
        node.halt();
        assert_eq!(node.action().halts, 1);

        // Restarted after the halt.
        node.tick(&mut remaining);
        assert_eq!(node.action().starts, 2);
    }
}
