//! Snapshot model delivered by the game server and the order sent back.
//!
//! # Lifecycle
//!
//! - [`Constants`] arrive once per match and never change afterwards.
//! - [`Game`] is a fresh snapshot for every tick; nothing in it is carried
//!   over to the next tick.
//! - [`Order`] is built once per tick by the agent and discarded after it has
//!   been sent.

mod constants;
mod game;
mod ids;
mod order;
mod unit;

pub use constants::{Constants, Obstacle, SoundProperties, WeaponProperties};
pub use game::{Game, Item, Loot, Player, Sound, Zone};
pub use ids::{PlayerId, UnitId};
pub use order::{ActionOrder, Order, UnitOrder};
pub use unit::{Action, ActionType, Projectile, Unit};
