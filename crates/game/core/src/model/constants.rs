use crate::geometry::Vec2;

/// Match-wide rules, received once before the first tick.
///
/// Fields are listed in wire order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constants {
    pub ticks_per_second: f64,
    /// Units per team at the start of the match.
    pub team_size: i32,
    pub initial_zone_radius: f64,
    pub zone_speed: f64,
    pub zone_damage_per_second: f64,
    pub spawn_time: f64,
    /// Damage per second to a unit spawning inside another body.
    pub spawn_collision_damage_per_second: f64,
    /// Seconds needed to pick up loot.
    pub looting_time: f64,
    pub bot_players: i32,
    pub unit_radius: f64,
    pub unit_health: f64,
    pub health_regeneration_per_second: f64,
    /// Seconds without damage before health starts regenerating.
    pub health_regeneration_delay: f64,
    pub max_shield: f64,
    pub spawn_shield: f64,
    pub extra_lives: i32,
    /// Below this zone radius units no longer respawn.
    pub last_respawn_zone_radius: f64,
    /// Degrees, without aiming.
    pub field_of_view: f64,
    pub view_distance: f64,
    pub view_blocking: bool,
    /// Degrees per second, without aiming.
    pub rotation_speed: f64,
    pub spawn_movement_speed: f64,
    pub max_unit_forward_speed: f64,
    pub max_unit_backward_speed: f64,
    pub unit_acceleration: f64,
    pub friendly_fire: bool,
    pub kill_score: f64,
    pub damage_score_multiplier: f64,
    pub score_per_place: f64,
    pub weapons: Vec<WeaponProperties>,
    pub starting_weapon: Option<i32>,
    pub starting_weapon_ammo: i32,
    pub max_shield_potions_in_inventory: i32,
    pub shield_per_potion: f64,
    pub shield_potion_use_time: f64,
    pub sounds: Vec<SoundProperties>,
    pub steps_sound_type_index: Option<i32>,
    /// Distance at which steps are always heard.
    pub steps_sound_travel_distance: f64,
    pub weapon_pickup_sound_type_index: Option<i32>,
    pub ammo_pickup_sound_type_index: Option<i32>,
    pub shield_potion_pickup_sound_type_index: Option<i32>,
    pub shield_potion_use_sound_type_index: Option<i32>,
    pub obstacles: Vec<Obstacle>,
}

impl Constants {
    /// Looks up a weapon by the index units and projectiles refer to it with.
    pub fn weapon(&self, index: i32) -> Option<&WeaponProperties> {
        usize::try_from(index).ok().and_then(|i| self.weapons.get(i))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeaponProperties {
    pub name: String,
    pub rounds_per_second: f64,
    pub spread: f64,
    pub aim_time: f64,
    pub aim_field_of_view: f64,
    pub aim_rotation_speed: f64,
    pub aim_movement_speed_modifier: f64,
    pub projectile_speed: f64,
    pub projectile_damage: f64,
    pub projectile_life_time: f64,
    pub shot_sound_type_index: Option<i32>,
    pub projectile_hit_sound_type_index: Option<i32>,
    pub max_inventory_ammo: i32,
}

impl WeaponProperties {
    /// Distance a projectile travels before it expires.
    #[inline]
    pub fn range(&self) -> f64 {
        self.projectile_speed * self.projectile_life_time
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoundProperties {
    pub name: String,
    /// Distance at which the sound is always heard.
    pub distance: f64,
    /// Position error, relative to the distance to the source.
    pub offset: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obstacle {
    pub id: i32,
    pub position: Vec2,
    pub radius: f64,
    pub can_see_through: bool,
    pub can_shoot_through: bool,
}
