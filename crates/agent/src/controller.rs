//! Agent controller: one order per order request.

use behavior_tree::Status;
use game_core::{Constants, Game, Order};
use tracing::{debug, debug_span, info, warn};

use crate::context::TickContext;
use crate::engine::{Blueprint, DecisionEngine};

/// Drives the decision engine for the units of one player.
///
/// An agent is built per match from the constants the server sends and a
/// resolved topology.
pub struct Agent {
    engine: DecisionEngine,
    context: TickContext,
    ticks: u64,
}

impl Agent {
    pub fn new(constants: Constants, blueprint: &Blueprint) -> Self {
        Self {
            engine: DecisionEngine::new(blueprint),
            context: TickContext::new(constants, blueprint.blackboard()),
            ticks: 0,
        }
    }

    /// Number of order requests handled so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Decides this tick's order.
    ///
    /// The order is empty when the snapshot holds no controlled unit or the
    /// root of the tree fails. Otherwise it holds the directive for the
    /// controlled unit only.
    pub fn get_order(&mut self, game: Game, debug_available: bool) -> Order {
        let _span = debug_span!("tick", tick = game.current_tick, debug_available).entered();
        self.ticks += 1;

        if !self.context.begin(game) {
            warn!("No controlled unit in snapshot; skipping tick");
            self.engine.halt();
            return Order::empty();
        }

        let status = self.engine.tick(&mut self.context);
        debug!(
            ?status,
            unit = %self.context.me.id,
            enemies = self.context.enemy_count(),
            "Tree evaluated"
        );

        match status {
            Status::Failure => Order::empty(),
            Status::Running | Status::Success => {
                Order::single(self.context.me.id, self.context.order.clone())
            }
        }
    }

    /// The viewer switched to `displayed_tick`.
    pub fn debug_update(&mut self, displayed_tick: i32) {
        debug!(displayed_tick, "Debug update");
    }

    /// The match is over.
    pub fn finish(&mut self) {
        self.engine.halt();
        info!(ticks = self.ticks, "Match finished");
    }
}

#[cfg(test)]
mod tests {
    use game_content::TopologyLoader;
    use game_core::{ActionOrder, PlayerId, UnitId, Vec2};

    use super::*;
    use crate::catalog::NodeCatalog;
    use crate::testing::{ME, constants, game, unit};

    fn agent(ron: &str) -> Agent {
        let topology = TopologyLoader::parse(ron).unwrap();
        let blueprint = Blueprint::resolve(&topology, &NodeCatalog::builtin()).unwrap();
        Agent::new(constants(), &blueprint)
    }

    const ENGAGE: &str = r#"(
        main_tree: "Main",
        trees: {
            "Main": Sequence([
                Action(name: "GetClosestTarget", ports: {"id": Key("target")}),
                Action(name: "Shoot", ports: {"id": Key("target")}),
            ]),
        },
    )"#;

    #[test]
    fn failure_yields_empty_order() {
        let mut agent = agent(ENGAGE);
        let order = agent.get_order(game(vec![unit(ME.0, 1, Vec2::ZERO)]), false);

        assert!(order.is_empty());
        assert_eq!(agent.ticks(), 1);
    }

    #[test]
    fn success_orders_controlled_unit_only() {
        let mut agent = agent(ENGAGE);
        let mut me = unit(ME.0, 1, Vec2::ZERO);
        me.weapon = Some(0);
        me.ammo = vec![3];

        let order = agent.get_order(game(vec![me, unit(9, 2, Vec2::new(4.0, 0.0))]), true);

        assert_eq!(order.unit_orders.len(), 1);
        let directive = &order.unit_orders[&ME];
        assert_eq!(directive.action, Some(ActionOrder::Aim { shoot: true }));
        assert!(!order.unit_orders.contains_key(&UnitId(9)));
    }

    #[test]
    fn missing_controlled_unit_yields_empty_order() {
        let mut agent = agent(ENGAGE);
        let mut snapshot = game(vec![unit(9, 2, Vec2::ZERO)]);
        snapshot.my_id = PlayerId(1);

        assert!(agent.get_order(snapshot, false).is_empty());
    }

    #[test]
    fn order_does_not_leak_between_ticks() {
        let mut agent = agent(
            r#"(main_tree: "Main", trees: {"Main": ForceSuccess(Action(name: "Dodge"))})"#,
        );
        let mut first = game(vec![unit(ME.0, 1, Vec2::new(0.5, 0.0))]);
        first.projectiles.push(game_core::Projectile {
            shooter_player_id: PlayerId(2),
            position: Vec2::new(0.0, 10.0),
            velocity: Vec2::new(0.0, -20.0),
            ..game_core::Projectile::default()
        });

        let order = agent.get_order(first, false);
        assert_eq!(order.unit_orders[&ME].target_velocity, Vec2::new(10.0, 0.0));

        let order = agent.get_order(game(vec![unit(ME.0, 1, Vec2::new(0.5, 0.0))]), false);
        assert_eq!(order.unit_orders[&ME].target_velocity, Vec2::ZERO);
    }
}
