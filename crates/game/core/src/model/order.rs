use std::collections::BTreeMap;

use crate::geometry::Vec2;

use super::ids::UnitId;

/// Directives for every unit the agent controls this tick.
///
/// An empty order is valid and means "no directive".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    pub unit_orders: BTreeMap<UnitId, UnitOrder>,
}

impl Order {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(unit: UnitId, order: UnitOrder) -> Self {
        Self {
            unit_orders: BTreeMap::from([(unit, order)]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unit_orders.is_empty()
    }
}

/// Steering, facing and an optional action for one unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitOrder {
    pub target_velocity: Vec2,
    pub target_direction: Vec2,
    pub action: Option<ActionOrder>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOrder {
    Pickup { loot: i32 },
    UseShieldPotion,
    DropShieldPotions { amount: i32 },
    DropWeapon,
    DropAmmo { weapon_type_index: i32, amount: i32 },
    /// Aim the equipped weapon, firing when `shoot` is set.
    Aim { shoot: bool },
}
