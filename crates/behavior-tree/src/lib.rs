//! Lightweight behavior tree library for real-time, per-tick decision making.
//!
//! Trees are built once and ticked repeatedly by an external clock. A tick
//! never blocks: leaves report [`Status::Running`] when their goal is not yet
//! reached and are evaluated again on the next tick.
//!
//! - **Arena layout**: nodes, child lists and leaves live in flat vectors
//! - **Reactive control flow**: composites restart from their first child on
//!   every tick and halt children that are no longer selected
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for leaf nodes
//! - [`StatefulAction`]: start / keep running / halted contract, adapted to
//!   [`Behavior`] by [`Stateful`]
//! - [`Status`]: Running, Success or Failure
//! - Composite kinds: [`Composite::Sequence`], [`Composite::Selector`]
//! - Decorator kinds: [`Decorator::Inverter`], [`Decorator::AlwaysSucceed`],
//!   [`Decorator::AlwaysFail`], [`Decorator::Retry`]
//! - [`TreeBuilder`] assembles a [`Tree`] bottom-up

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Stateful, StatefulAction};
pub use builder::TreeBuilder;
pub use composite::Composite;
pub use decorator::Decorator;
pub use status::Status;
pub use tree::{NodeId, Tree};
