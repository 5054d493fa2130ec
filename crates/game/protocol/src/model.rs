//! Wire layouts for the `game-core` model.
//!
//! Struct fields are written in declaration order with no padding or
//! framing. Enums are an `i32` tag followed by the variant's fields.

use std::io::{Read, Write};

use game_core::{
    Action, ActionOrder, ActionType, Constants, Game, Item, Loot, Obstacle, Order, Player,
    PlayerId, Projectile, Sound, SoundProperties, Unit, UnitId, UnitOrder, Vec2, WeaponProperties,
    Zone,
};

use crate::error::{ProtocolError, Result};
use crate::wire::Wire;

impl Wire for Vec2 {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Vec2::new(f64::read_from(reader)?, f64::read_from(reader)?))
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.x.write_to(writer)?;
        self.y.write_to(writer)
    }
}

impl Wire for UnitId {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(UnitId(i32::read_from(reader)?))
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.0.write_to(writer)
    }
}

impl Wire for PlayerId {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(PlayerId(i32::read_from(reader)?))
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.0.write_to(writer)
    }
}

// ============================================================================
// Constants
// ============================================================================

impl Wire for WeaponProperties {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            name: Wire::read_from(reader)?,
            rounds_per_second: Wire::read_from(reader)?,
            spread: Wire::read_from(reader)?,
            aim_time: Wire::read_from(reader)?,
            aim_field_of_view: Wire::read_from(reader)?,
            aim_rotation_speed: Wire::read_from(reader)?,
            aim_movement_speed_modifier: Wire::read_from(reader)?,
            projectile_speed: Wire::read_from(reader)?,
            projectile_damage: Wire::read_from(reader)?,
            projectile_life_time: Wire::read_from(reader)?,
            shot_sound_type_index: Wire::read_from(reader)?,
            projectile_hit_sound_type_index: Wire::read_from(reader)?,
            max_inventory_ammo: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.name.write_to(writer)?;
        self.rounds_per_second.write_to(writer)?;
        self.spread.write_to(writer)?;
        self.aim_time.write_to(writer)?;
        self.aim_field_of_view.write_to(writer)?;
        self.aim_rotation_speed.write_to(writer)?;
        self.aim_movement_speed_modifier.write_to(writer)?;
        self.projectile_speed.write_to(writer)?;
        self.projectile_damage.write_to(writer)?;
        self.projectile_life_time.write_to(writer)?;
        self.shot_sound_type_index.write_to(writer)?;
        self.projectile_hit_sound_type_index.write_to(writer)?;
        self.max_inventory_ammo.write_to(writer)
    }
}

impl Wire for Obstacle {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: Wire::read_from(reader)?,
            position: Wire::read_from(reader)?,
            radius: Wire::read_from(reader)?,
            can_see_through: Wire::read_from(reader)?,
            can_shoot_through: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.id.write_to(writer)?;
        self.position.write_to(writer)?;
        self.radius.write_to(writer)?;
        self.can_see_through.write_to(writer)?;
        self.can_shoot_through.write_to(writer)
    }
}

impl Wire for SoundProperties {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            name: Wire::read_from(reader)?,
            distance: Wire::read_from(reader)?,
            offset: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.name.write_to(writer)?;
        self.distance.write_to(writer)?;
        self.offset.write_to(writer)
    }
}

impl Wire for Constants {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            ticks_per_second: Wire::read_from(reader)?,
            team_size: Wire::read_from(reader)?,
            initial_zone_radius: Wire::read_from(reader)?,
            zone_speed: Wire::read_from(reader)?,
            zone_damage_per_second: Wire::read_from(reader)?,
            spawn_time: Wire::read_from(reader)?,
            spawn_collision_damage_per_second: Wire::read_from(reader)?,
            looting_time: Wire::read_from(reader)?,
            bot_players: Wire::read_from(reader)?,
            unit_radius: Wire::read_from(reader)?,
            unit_health: Wire::read_from(reader)?,
            health_regeneration_per_second: Wire::read_from(reader)?,
            health_regeneration_delay: Wire::read_from(reader)?,
            max_shield: Wire::read_from(reader)?,
            spawn_shield: Wire::read_from(reader)?,
            extra_lives: Wire::read_from(reader)?,
            last_respawn_zone_radius: Wire::read_from(reader)?,
            field_of_view: Wire::read_from(reader)?,
            view_distance: Wire::read_from(reader)?,
            view_blocking: Wire::read_from(reader)?,
            rotation_speed: Wire::read_from(reader)?,
            spawn_movement_speed: Wire::read_from(reader)?,
            max_unit_forward_speed: Wire::read_from(reader)?,
            max_unit_backward_speed: Wire::read_from(reader)?,
            unit_acceleration: Wire::read_from(reader)?,
            friendly_fire: Wire::read_from(reader)?,
            kill_score: Wire::read_from(reader)?,
            damage_score_multiplier: Wire::read_from(reader)?,
            score_per_place: Wire::read_from(reader)?,
            weapons: Wire::read_from(reader)?,
            starting_weapon: Wire::read_from(reader)?,
            starting_weapon_ammo: Wire::read_from(reader)?,
            max_shield_potions_in_inventory: Wire::read_from(reader)?,
            shield_per_potion: Wire::read_from(reader)?,
            shield_potion_use_time: Wire::read_from(reader)?,
            sounds: Wire::read_from(reader)?,
            steps_sound_type_index: Wire::read_from(reader)?,
            steps_sound_travel_distance: Wire::read_from(reader)?,
            weapon_pickup_sound_type_index: Wire::read_from(reader)?,
            ammo_pickup_sound_type_index: Wire::read_from(reader)?,
            shield_potion_pickup_sound_type_index: Wire::read_from(reader)?,
            shield_potion_use_sound_type_index: Wire::read_from(reader)?,
            obstacles: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.ticks_per_second.write_to(writer)?;
        self.team_size.write_to(writer)?;
        self.initial_zone_radius.write_to(writer)?;
        self.zone_speed.write_to(writer)?;
        self.zone_damage_per_second.write_to(writer)?;
        self.spawn_time.write_to(writer)?;
        self.spawn_collision_damage_per_second.write_to(writer)?;
        self.looting_time.write_to(writer)?;
        self.bot_players.write_to(writer)?;
        self.unit_radius.write_to(writer)?;
        self.unit_health.write_to(writer)?;
        self.health_regeneration_per_second.write_to(writer)?;
        self.health_regeneration_delay.write_to(writer)?;
        self.max_shield.write_to(writer)?;
        self.spawn_shield.write_to(writer)?;
        self.extra_lives.write_to(writer)?;
        self.last_respawn_zone_radius.write_to(writer)?;
        self.field_of_view.write_to(writer)?;
        self.view_distance.write_to(writer)?;
        self.view_blocking.write_to(writer)?;
        self.rotation_speed.write_to(writer)?;
        self.spawn_movement_speed.write_to(writer)?;
        self.max_unit_forward_speed.write_to(writer)?;
        self.max_unit_backward_speed.write_to(writer)?;
        self.unit_acceleration.write_to(writer)?;
        self.friendly_fire.write_to(writer)?;
        self.kill_score.write_to(writer)?;
        self.damage_score_multiplier.write_to(writer)?;
        self.score_per_place.write_to(writer)?;
        self.weapons.write_to(writer)?;
        self.starting_weapon.write_to(writer)?;
        self.starting_weapon_ammo.write_to(writer)?;
        self.max_shield_potions_in_inventory.write_to(writer)?;
        self.shield_per_potion.write_to(writer)?;
        self.shield_potion_use_time.write_to(writer)?;
        self.sounds.write_to(writer)?;
        self.steps_sound_type_index.write_to(writer)?;
        self.steps_sound_travel_distance.write_to(writer)?;
        self.weapon_pickup_sound_type_index.write_to(writer)?;
        self.ammo_pickup_sound_type_index.write_to(writer)?;
        self.shield_potion_pickup_sound_type_index.write_to(writer)?;
        self.shield_potion_use_sound_type_index.write_to(writer)?;
        self.obstacles.write_to(writer)
    }
}

// ============================================================================
// Snapshot
// ============================================================================

impl Wire for ActionType {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match i32::read_from(reader)? {
            0 => Ok(ActionType::Looting),
            1 => Ok(ActionType::UseShieldPotion),
            tag => Err(ProtocolError::UnexpectedTag {
                message: "ActionType",
                tag,
            }),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let tag: i32 = match self {
            ActionType::Looting => 0,
            ActionType::UseShieldPotion => 1,
        };
        tag.write_to(writer)
    }
}

impl Wire for Action {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            finish_tick: Wire::read_from(reader)?,
            action_type: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.finish_tick.write_to(writer)?;
        self.action_type.write_to(writer)
    }
}

impl Wire for Unit {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: Wire::read_from(reader)?,
            player_id: Wire::read_from(reader)?,
            health: Wire::read_from(reader)?,
            shield: Wire::read_from(reader)?,
            extra_lives: Wire::read_from(reader)?,
            position: Wire::read_from(reader)?,
            remaining_spawn_time: Wire::read_from(reader)?,
            velocity: Wire::read_from(reader)?,
            direction: Wire::read_from(reader)?,
            aim: Wire::read_from(reader)?,
            action: Wire::read_from(reader)?,
            health_regeneration_start_tick: Wire::read_from(reader)?,
            weapon: Wire::read_from(reader)?,
            next_shot_tick: Wire::read_from(reader)?,
            ammo: Wire::read_from(reader)?,
            shield_potions: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.id.write_to(writer)?;
        self.player_id.write_to(writer)?;
        self.health.write_to(writer)?;
        self.shield.write_to(writer)?;
        self.extra_lives.write_to(writer)?;
        self.position.write_to(writer)?;
        self.remaining_spawn_time.write_to(writer)?;
        self.velocity.write_to(writer)?;
        self.direction.write_to(writer)?;
        self.aim.write_to(writer)?;
        self.action.write_to(writer)?;
        self.health_regeneration_start_tick.write_to(writer)?;
        self.weapon.write_to(writer)?;
        self.next_shot_tick.write_to(writer)?;
        self.ammo.write_to(writer)?;
        self.shield_potions.write_to(writer)
    }
}

impl Wire for Projectile {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: Wire::read_from(reader)?,
            weapon_type_index: Wire::read_from(reader)?,
            shooter_id: Wire::read_from(reader)?,
            shooter_player_id: Wire::read_from(reader)?,
            position: Wire::read_from(reader)?,
            velocity: Wire::read_from(reader)?,
            life_time: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.id.write_to(writer)?;
        self.weapon_type_index.write_to(writer)?;
        self.shooter_id.write_to(writer)?;
        self.shooter_player_id.write_to(writer)?;
        self.position.write_to(writer)?;
        self.velocity.write_to(writer)?;
        self.life_time.write_to(writer)
    }
}

impl Wire for Player {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: Wire::read_from(reader)?,
            kills: Wire::read_from(reader)?,
            damage: Wire::read_from(reader)?,
            place: Wire::read_from(reader)?,
            score: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.id.write_to(writer)?;
        self.kills.write_to(writer)?;
        self.damage.write_to(writer)?;
        self.place.write_to(writer)?;
        self.score.write_to(writer)
    }
}

impl Wire for Zone {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            current_center: Wire::read_from(reader)?,
            current_radius: Wire::read_from(reader)?,
            next_center: Wire::read_from(reader)?,
            next_radius: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.current_center.write_to(writer)?;
        self.current_radius.write_to(writer)?;
        self.next_center.write_to(writer)?;
        self.next_radius.write_to(writer)
    }
}

impl Wire for Item {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match i32::read_from(reader)? {
            0 => Ok(Item::Weapon {
                type_index: Wire::read_from(reader)?,
            }),
            1 => Ok(Item::ShieldPotions {
                amount: Wire::read_from(reader)?,
            }),
            2 => Ok(Item::Ammo {
                weapon_type_index: Wire::read_from(reader)?,
                amount: Wire::read_from(reader)?,
            }),
            tag => Err(ProtocolError::UnexpectedTag {
                message: "Item",
                tag,
            }),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        match self {
            Item::Weapon { type_index } => {
                0i32.write_to(writer)?;
                type_index.write_to(writer)
            }
            Item::ShieldPotions { amount } => {
                1i32.write_to(writer)?;
                amount.write_to(writer)
            }
            Item::Ammo {
                weapon_type_index,
                amount,
            } => {
                2i32.write_to(writer)?;
                weapon_type_index.write_to(writer)?;
                amount.write_to(writer)
            }
        }
    }
}

impl Wire for Loot {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: Wire::read_from(reader)?,
            position: Wire::read_from(reader)?,
            item: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.id.write_to(writer)?;
        self.position.write_to(writer)?;
        self.item.write_to(writer)
    }
}

impl Wire for Sound {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            type_index: Wire::read_from(reader)?,
            unit_id: Wire::read_from(reader)?,
            position: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.type_index.write_to(writer)?;
        self.unit_id.write_to(writer)?;
        self.position.write_to(writer)
    }
}

impl Wire for Game {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            my_id: Wire::read_from(reader)?,
            players: Wire::read_from(reader)?,
            current_tick: Wire::read_from(reader)?,
            units: Wire::read_from(reader)?,
            loot: Wire::read_from(reader)?,
            projectiles: Wire::read_from(reader)?,
            zone: Wire::read_from(reader)?,
            sounds: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.my_id.write_to(writer)?;
        self.players.write_to(writer)?;
        self.current_tick.write_to(writer)?;
        self.units.write_to(writer)?;
        self.loot.write_to(writer)?;
        self.projectiles.write_to(writer)?;
        self.zone.write_to(writer)?;
        self.sounds.write_to(writer)
    }
}

// ============================================================================
// Orders
// ============================================================================

impl Wire for ActionOrder {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match i32::read_from(reader)? {
            0 => Ok(ActionOrder::Pickup {
                loot: Wire::read_from(reader)?,
            }),
            1 => Ok(ActionOrder::UseShieldPotion),
            2 => Ok(ActionOrder::DropShieldPotions {
                amount: Wire::read_from(reader)?,
            }),
            3 => Ok(ActionOrder::DropWeapon),
            4 => Ok(ActionOrder::DropAmmo {
                weapon_type_index: Wire::read_from(reader)?,
                amount: Wire::read_from(reader)?,
            }),
            5 => Ok(ActionOrder::Aim {
                shoot: Wire::read_from(reader)?,
            }),
            tag => Err(ProtocolError::UnexpectedTag {
                message: "ActionOrder",
                tag,
            }),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        match self {
            ActionOrder::Pickup { loot } => {
                0i32.write_to(writer)?;
                loot.write_to(writer)
            }
            ActionOrder::UseShieldPotion => 1i32.write_to(writer),
            ActionOrder::DropShieldPotions { amount } => {
                2i32.write_to(writer)?;
                amount.write_to(writer)
            }
            ActionOrder::DropWeapon => 3i32.write_to(writer),
            ActionOrder::DropAmmo {
                weapon_type_index,
                amount,
            } => {
                4i32.write_to(writer)?;
                weapon_type_index.write_to(writer)?;
                amount.write_to(writer)
            }
            ActionOrder::Aim { shoot } => {
                5i32.write_to(writer)?;
                shoot.write_to(writer)
            }
        }
    }
}

impl Wire for UnitOrder {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            target_velocity: Wire::read_from(reader)?,
            target_direction: Wire::read_from(reader)?,
            action: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.target_velocity.write_to(writer)?;
        self.target_direction.write_to(writer)?;
        self.action.write_to(writer)
    }
}

impl Wire for Order {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            unit_orders: Wire::read_from(reader)?,
        })
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.unit_orders.write_to(writer)
    }
}
