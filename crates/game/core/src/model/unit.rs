use crate::geometry::Vec2;

use super::ids::{PlayerId, UnitId};

/// A unit on the battlefield, as seen in the current tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub player_id: PlayerId,
    pub health: f64,
    pub shield: f64,
    pub extra_lives: i32,
    pub position: Vec2,
    /// Set while the unit is still spawning.
    pub remaining_spawn_time: Option<f64>,
    pub velocity: Vec2,
    /// Facing direction, unit length.
    pub direction: Vec2,
    /// Aim progress in `[0, 1]`.
    pub aim: f64,
    pub action: Option<Action>,
    pub health_regeneration_start_tick: i32,
    /// Index into [`crate::Constants::weapons`] of the equipped weapon.
    pub weapon: Option<i32>,
    pub next_shot_tick: i32,
    /// Ammo count per weapon type, indexed like [`crate::Constants::weapons`].
    pub ammo: Vec<i32>,
    pub shield_potions: i32,
}

impl Unit {
    /// Ammo left for the equipped weapon, or `None` when unarmed.
    ///
    /// A weapon index with no matching ammo slot counts as empty.
    pub fn equipped_ammo(&self) -> Option<i32> {
        let weapon = self.weapon?;
        let slot = usize::try_from(weapon).ok()?;
        Some(self.ammo.get(slot).copied().unwrap_or(0))
    }
}

/// A long-running action a unit is busy with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub finish_tick: i32,
    pub action_type: ActionType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionType {
    Looting,
    UseShieldPotion,
}

/// A projectile in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub id: i32,
    pub weapon_type_index: i32,
    pub shooter_id: UnitId,
    pub shooter_player_id: PlayerId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub life_time: f64,
}
