//! Steering nodes: set the target velocity of the order.

use behavior_tree::{Behavior, Status};
use game_core::{Vec2, normalize_velocity, ray_circle_intersect_normal_vector};
use tracing::debug;

use crate::blackboard::{InputPort, PortType};
use crate::catalog::{PortMap, PortSpec};
use crate::context::TickContext;
use crate::tuning::ZONE_PADDING;

/// Runs at full speed along the `vector` port.
///
/// Fails when the port has no value or the vector has no direction.
pub struct Move {
    vector: InputPort<Vec2>,
}

impl Move {
    pub const PORTS: &'static [PortSpec] = &[PortSpec::input("vector", PortType::Vec2)];

    pub fn new(vector: InputPort<Vec2>) -> Self {
        Self { vector }
    }

    pub fn build(ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Self::new(ports.input("vector")))
    }
}

impl Behavior<TickContext> for Move {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        let Some(vector) = self.vector.get(&ctx.blackboard) else {
            debug!("Move: no value on port `vector`");
            return Status::Failure;
        };
        if vector.is_zero() {
            return Status::Failure;
        }

        ctx.order.target_velocity = normalize_velocity(vector, ctx.max_speed());
        Status::Success
    }
}

/// Steps off the path of incoming enemy projectiles.
///
/// Every projectile not fired by this player is treated as an infinite ray.
/// The outward normals of all rays crossing the unit's circle are summed and
/// the unit runs along the sum. Fails, leaving the order untouched, when no
/// projectile threatens the unit.
pub struct Dodge;

impl Dodge {
    pub fn build(_ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(Dodge)
    }
}

impl Behavior<TickContext> for Dodge {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        let mut escape = Vec2::ZERO;
        let mut first = None;
        let mut threats = 0;

        for projectile in &ctx.game.projectiles {
            if projectile.shooter_player_id == ctx.game.my_id || projectile.velocity.is_zero() {
                continue;
            }

            let (intersects, normal) = ray_circle_intersect_normal_vector(
                projectile.position,
                projectile.velocity,
                ctx.me.position,
                ctx.constants.unit_radius,
            );
            if intersects {
                escape += normal;
                first.get_or_insert(normal);
                threats += 1;
            }
        }

        let Some(first) = first else {
            return Status::Failure;
        };
        // Opposite normals can cancel out; fall back to the first one.
        if escape.is_zero() {
            escape = first;
        }

        ctx.order.target_velocity = normalize_velocity(escape, ctx.max_speed());
        debug!(threats, velocity = %ctx.order.target_velocity, "Dodge");
        Status::Success
    }
}

/// Heads for the zone center when the unit is too close to the boundary.
///
/// Succeeds when the distance to the boundary is below the unit radius plus
/// [`ZONE_PADDING`], fails otherwise.
pub struct AvoidZone;

impl AvoidZone {
    pub fn build(_ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(AvoidZone)
    }
}

impl Behavior<TickContext> for AvoidZone {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        let zone = ctx.game.zone;
        let to_center = zone.current_center - ctx.me.position;
        let margin = zone.current_radius - to_center.length();

        if margin >= ctx.constants.unit_radius + ZONE_PADDING {
            return Status::Failure;
        }

        ctx.order.target_velocity = if to_center.is_zero() {
            Vec2::ZERO
        } else {
            normalize_velocity(to_center, ctx.max_speed())
        };
        debug!(margin, "AvoidZone");
        Status::Success
    }
}

/// Runs toward the zone center and faces it. Always succeeds.
///
/// At the center itself the unit stops and keeps its current facing.
pub struct GoCenter;

impl GoCenter {
    pub fn build(_ports: &PortMap) -> Box<dyn Behavior<TickContext>> {
        Box::new(GoCenter)
    }
}

impl Behavior<TickContext> for GoCenter {
    fn tick(&mut self, ctx: &mut TickContext) -> Status {
        let direction = ctx.game.zone.current_center - ctx.me.position;
        if direction.is_zero() {
            ctx.order.target_velocity = Vec2::ZERO;
            ctx.order.target_direction = ctx.me.direction;
        } else {
            ctx.order.target_velocity = normalize_velocity(direction, ctx.max_speed());
            ctx.order.target_direction = direction;
        }
        Status::Success
    }
}
