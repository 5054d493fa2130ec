//! Target selection and approach.

use behavior_tree::{Behavior, Stateful, StatefulAction, Status};
use game_core::{UnitId, Vec2, normalize_velocity};
use tracing::debug;

use crate::blackboard::{InputPort, OutputPort, PortType};
use crate::catalog::{PortMap, PortSpec};
use crate::context::TickContext;
use crate::tuning::{LOOK_COS_THRESHOLD, SHOOT_RANGE_RATIO};

/// Writes the id of the nearest enemy to the `id` port.
///
/// Fails when there are no enemies. Equal distances resolve to the lowest id.
pub struct GetClosestTarget {
    id: OutputPort<UnitId>,
}

impl GetClosestTarget {
    pub const PORTS: &'static [PortSpec] = &[PortSpec::output("id", PortType::Id)];

    pub fn new(id: OutputPort<UnitId>) -> Self {
        Self { id }
    }

    pub fn build(ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Self::new(ports.output("id")))
    }
}

impl Behavior<TickContext> for GetClosestTarget {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        let position = ctx.me.position;
        let closest = ctx
            .enemies()
            .map(|enemy| ((enemy.position - position).sqr_length(), enemy.id))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let Some((distance_sq, id)) = closest else {
            return Status::Failure;
        };

        if !self.id.set(&mut ctx.blackboard, id) {
            debug!("GetClosestTarget: port `id` is not bound");
        }
        debug!(target = %id, distance = distance_sq.sqrt(), "GetClosestTarget");
        Status::Success
    }
}

/// Closes in on the enemy named by the `id` port.
///
/// Needs an equipped weapon. Succeeds once the target is within
/// [`SHOOT_RANGE_RATIO`] of the weapon range, otherwise runs toward it and
/// reports `Running`.
pub struct GoToTarget {
    id: InputPort<UnitId>,
}

impl GoToTarget {
    pub const PORTS: &'static [PortSpec] = &[PortSpec::input("id", PortType::Id)];

    pub fn new(id: InputPort<UnitId>) -> Self {
        Self { id }
    }

    pub fn build(ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Stateful::new(Self::new(ports.input("id"))))
    }
}

impl StatefulAction<TickContext> for GoToTarget {
    fn on_start(&mut self, ctx: &mut TickContext) -> Status {
        let Some(shoot_range) = ctx
            .equipped_weapon()
            .map(|weapon| weapon.range() * SHOOT_RANGE_RATIO)
        else {
            return Status::Failure;
        };
        let Some(id) = self.id.get(&ctx.blackboard) else {
            debug!("GoToTarget: no value on port `id`");
            return Status::Failure;
        };
        let Some(target) = ctx.enemy(id).map(|enemy| enemy.position) else {
            debug!(target = %id, "GoToTarget: target is gone");
            return Status::Failure;
        };

        let to_target = target - ctx.me.position;
        if to_target.sqr_length() <= shoot_range * shoot_range {
            return Status::Success;
        }

        ctx.order.target_velocity = normalize_velocity(to_target, ctx.max_speed());
        Status::Running
    }
}

/// Turns toward a direction.
///
/// The direction is the offset to the enemy on the `id` port when it has a
/// value, otherwise the `vector` port. The normalized direction becomes the
/// order's target direction. Succeeds once the unit already faces it
/// (cosine above [`LOOK_COS_THRESHOLD`]), otherwise `Running`.
pub struct Look {
    vector: InputPort<Vec2>,
    id: InputPort<UnitId>,
}

impl Look {
    pub const PORTS: &'static [PortSpec] = &[
        PortSpec::input("vector", PortType::Vec2),
        PortSpec::input("id", PortType::Id),
    ];

    pub fn new(vector: InputPort<Vec2>, id: InputPort<UnitId>) -> Self {
        Self { vector, id }
    }

    pub fn build(ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Stateful::new(Self::new(
            ports.input("vector"),
            ports.input("id"),
        )))
    }

    fn desired(&self, ctx: &TickContext) -> Option<Vec2> {
        if let Some(id) = self.id.get(&ctx.blackboard) {
            return ctx.enemy(id).map(|enemy| enemy.position - ctx.me.position);
        }
        self.vector.get(&ctx.blackboard)
    }
}

impl StatefulAction<TickContext> for Look {
    fn on_start(&mut self, ctx: &mut TickContext) -> Status {
        let Some(desired) = self.desired(ctx).filter(|v| !v.is_zero()) else {
            debug!("Look: nothing to look at");
            return Status::Failure;
        };

        let desired = desired.normalized();
        ctx.order.target_direction = desired;
        if desired.dot(ctx.me.direction) > LOOK_COS_THRESHOLD {
            Status::Success
        } else {
            Status::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ME, context, game, unit};

    fn armed(position: Vec2) -> game_core::Unit {
        let mut me = unit(ME.0, 1, position);
        me.weapon = Some(0);
        me.ammo = vec![5];
        me
    }

    #[test]
    fn closest_target_picks_nearest_enemy() {
        let mut ctx = context(game(vec![
            unit(ME.0, 1, Vec2::ZERO),
            unit(10, 2, Vec2::new(5.0, 0.0)),
            unit(11, 3, Vec2::new(0.0, 3.0)),
            unit(12, 4, Vec2::new(-10.0, 0.0)),
        ]));
        let target = ctx.blackboard.slot("target").unwrap();
        let mut node = GetClosestTarget::new(OutputPort::entry(target));

        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.blackboard.get::<UnitId>(target), Some(UnitId(11)));
    }

    #[test]
    fn closest_target_fails_without_enemies() {
        let mut ctx = context(game(vec![unit(ME.0, 1, Vec2::ZERO)]));
        let target = ctx.blackboard.slot("target").unwrap();
        let mut node = GetClosestTarget::new(OutputPort::entry(target));

        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.blackboard.get::<UnitId>(target), None);
    }

    #[test]
    fn closest_target_breaks_ties_by_id() {
        let mut ctx = context(game(vec![
            unit(ME.0, 1, Vec2::ZERO),
            unit(21, 2, Vec2::new(0.0, 4.0)),
            unit(20, 3, Vec2::new(4.0, 0.0)),
        ]));
        let target = ctx.blackboard.slot("target").unwrap();

        GetClosestTarget::new(OutputPort::entry(target)).tick(&mut ctx);
        assert_eq!(ctx.blackboard.get::<UnitId>(target), Some(UnitId(20)));
    }

    #[test]
    fn go_to_target_requires_weapon() {
        let mut ctx = context(game(vec![
            unit(ME.0, 1, Vec2::ZERO),
            unit(10, 2, Vec2::new(50.0, 0.0)),
        ]));
        let mut node = Stateful::new(GoToTarget::new(InputPort::Literal(UnitId(10))));

        assert_eq!(node.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn go_to_target_runs_until_in_shoot_range() {
        // Weapon range 30, shoot range 20.
        let mut ctx = context(game(vec![
            armed(Vec2::ZERO),
            unit(10, 2, Vec2::new(50.0, 0.0)),
        ]));
        let mut node = Stateful::new(GoToTarget::new(InputPort::Literal(UnitId(10))));

        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.order.target_velocity, Vec2::new(10.0, 0.0));

        ctx.begin(game(vec![armed(Vec2::ZERO), unit(10, 2, Vec2::new(20.0, 0.0))]));
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.order.target_velocity, Vec2::ZERO);
    }

    #[test]
    fn go_to_target_fails_on_stale_id() {
        let mut ctx = context(game(vec![armed(Vec2::ZERO)]));
        let mut node = Stateful::new(GoToTarget::new(InputPort::Literal(UnitId(10))));

        assert_eq!(node.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn look_prefers_target_over_vector() {
        let mut ctx = context(game(vec![
            unit(ME.0, 1, Vec2::ZERO),
            unit(10, 2, Vec2::new(0.0, 8.0)),
        ]));
        let mut node = Stateful::new(Look::new(
            InputPort::Literal(Vec2::new(1.0, 0.0)),
            InputPort::Literal(UnitId(10)),
        ));

        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.order.target_direction, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn look_succeeds_when_aligned() {
        let mut ctx = context(game(vec![unit(ME.0, 1, Vec2::ZERO)]));
        let mut node = Stateful::new(Look::new(
            InputPort::Literal(Vec2::new(5.0, 0.1)),
            InputPort::Unbound,
        ));

        assert_eq!(node.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn look_fails_without_ports_or_target() {
        let mut ctx = context(game(vec![unit(ME.0, 1, Vec2::ZERO)]));

        let mut unbound = Stateful::new(Look::new(InputPort::Unbound, InputPort::Unbound));
        assert_eq!(unbound.tick(&mut ctx), Status::Failure);

        let mut stale = Stateful::new(Look::new(
            InputPort::Literal(Vec2::new(1.0, 0.0)),
            InputPort::Literal(UnitId(99)),
        ));
        assert_eq!(stale.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.order.target_direction, Vec2::ZERO);
    }
}
