//! World model and geometry shared by the decision agent.
//!
//! `game-core` defines the per-tick snapshot the game server sends (units,
//! projectiles, the shrinking zone, match constants) and the order the agent
//! answers with. It also hosts the small geometry kernel the tactical nodes
//! build on.
//!
//! Nothing in this crate performs I/O. Encoding to and from the wire format is
//! implemented in `game-protocol`.
pub mod geometry;
pub mod model;

pub use geometry::{
    EPSILON, Vec2, nearly_equal, normalize_velocity, ray_circle_intersect_normal_vector,
    ray_point_orthogonal_intersect,
};
pub use model::{
    Action, ActionOrder, ActionType, Constants, Game, Item, Loot, Obstacle, Order, Player,
    PlayerId, Projectile, Sound, SoundProperties, Unit, UnitId, UnitOrder, WeaponProperties,
    Zone,
};
