//! Tactical leaf nodes.
//!
//! Every node reads the snapshot through [`TickContext`](crate::TickContext)
//! and writes into the order being built for the controlled unit. A missing
//! precondition (unbound port, no weapon, unknown target) is reported as
//! `Failure`; nothing here panics.
//!
//! - [`steering`]: `Move`, `Dodge`, `AvoidZone`, `GoCenter`
//! - [`targeting`]: `GetClosestTarget`, `GoToTarget`, `Look`
//! - [`combat`]: `Shoot`

pub mod combat;
pub mod steering;
pub mod targeting;

pub use combat::Shoot;
pub use steering::{AvoidZone, Dodge, GoCenter, Move};
pub use targeting::{GetClosestTarget, GoToTarget, Look};

use crate::catalog::NodeCatalog;

/// Registers every tactical node under its topology name.
pub fn register_builtin(catalog: &mut NodeCatalog) {
    catalog.register("Move", Move::PORTS, Move::build);
    catalog.register("Dodge", &[], Dodge::build);
    catalog.register("AvoidZone", &[], AvoidZone::build);
    catalog.register("GoCenter", &[], GoCenter::build);
    catalog.register("GetClosestTarget", GetClosestTarget::PORTS, GetClosestTarget::build);
    catalog.register("GoToTarget", GoToTarget::PORTS, GoToTarget::build);
    catalog.register("Look", Look::PORTS, Look::build);
    catalog.register("Shoot", Shoot::PORTS, Shoot::build);
}
