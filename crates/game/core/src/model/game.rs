use crate::geometry::Vec2;

use super::ids::{PlayerId, UnitId};
use super::unit::{Projectile, Unit};

/// Everything the controlled player can observe during one tick.
///
/// Fields are listed in wire order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Game {
    /// Player this agent plays for.
    pub my_id: PlayerId,
    pub players: Vec<Player>,
    pub current_tick: i32,
    pub units: Vec<Unit>,
    pub loot: Vec<Loot>,
    pub projectiles: Vec<Projectile>,
    pub zone: Zone,
    pub sounds: Vec<Sound>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub kills: i32,
    pub damage: f64,
    pub place: i32,
    pub score: f64,
}

/// The shrinking safe area. Outside of it units take damage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Zone {
    pub current_center: Vec2,
    /// Never grows during a match.
    pub current_radius: f64,
    pub next_center: Vec2,
    pub next_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loot {
    pub id: i32,
    pub position: Vec2,
    pub item: Item,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    Weapon { type_index: i32 },
    ShieldPotions { amount: i32 },
    Ammo { weapon_type_index: i32, amount: i32 },
}

/// A sound heard by one of our units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sound {
    pub type_index: i32,
    pub unit_id: UnitId,
    pub position: Vec2,
}
