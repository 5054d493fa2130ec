//! Weapon use.

use behavior_tree::{Behavior, Status};
use game_core::{ActionOrder, UnitId};
use tracing::debug;

use crate::blackboard::{InputPort, PortType};
use crate::catalog::{PortMap, PortSpec};
use crate::context::TickContext;

/// Aims and fires the equipped weapon.
///
/// Fails when the unit is unarmed or out of ammo for its weapon. The `id`
/// port names the intended target; firing itself does not depend on it.
pub struct Shoot {
    id: InputPort<UnitId>,
}

impl Shoot {
    pub const PORTS: &'static [PortSpec] = &[PortSpec::input("id", PortType::Id)];

    pub fn new(id: InputPort<UnitId>) -> Self {
        Self { id }
    }

    pub fn build(ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Self::new(ports.input("id")))
    }
}

impl Behavior<TickContext> for Shoot {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        match ctx.me.equipped_ammo() {
            Some(ammo) if ammo > 0 => {
                if let Some(target) = self.id.get(&ctx.blackboard) {
                    debug!(%target, ammo, "Shoot");
                }
                ctx.order.action = Some(ActionOrder::Aim { shoot: true });
                Status::Success
            }
            _ => Status::Failure,
        }
    }
}
