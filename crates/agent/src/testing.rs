//! Snapshot fixtures shared by unit tests.

use game_core::{Constants, Game, PlayerId, Unit, UnitId, Vec2, WeaponProperties, Zone};

use crate::blackboard::{Blackboard, PortType};
use crate::context::TickContext;

pub(crate) const ME: UnitId = UnitId(1);

/// Unit radius 1, forward speed 10, one weapon with range 30.
pub(crate) fn constants() -> Constants {
    Constants {
        ticks_per_second: 30.0,
        unit_radius: 1.0,
        max_unit_forward_speed: 10.0,
        weapons: vec![WeaponProperties {
            name: "Pistol".into(),
            projectile_speed: 30.0,
            projectile_life_time: 1.0,
            ..WeaponProperties::default()
        }],
        ..Constants::default()
    }
}

/// Unarmed unit facing +x.
pub(crate) fn unit(id: i32, player: i32, position: Vec2) -> Unit {
    Unit {
        id: UnitId(id),
        player_id: PlayerId(player),
        health: 100.0,
        position,
        direction: Vec2::new(1.0, 0.0),
        ..Unit::default()
    }
}

/// Snapshot seen by player 1 with a zone of radius 100 around the origin.
pub(crate) fn game(units: Vec<Unit>) -> Game {
    Game {
        my_id: PlayerId(1),
        units,
        zone: Zone {
            current_center: Vec2::ZERO,
            current_radius: 100.0,
            next_center: Vec2::ZERO,
            next_radius: 80.0,
        },
        ..Game::default()
    }
}

/// Context after `begin`, with `target` (id) and `point` (vector) slots.
pub(crate) fn context(game: Game) -> TickContext {
    let blackboard = Blackboard::with_slots([("target", PortType::Id), ("point", PortType::Vec2)]);
    let mut ctx = TickContext::new(constants(), blackboard);
    assert!(ctx.begin(game), "fixture needs a controlled unit");
    ctx
}
