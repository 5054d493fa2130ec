//! Geometry kernel: vector arithmetic plus the ray/circle queries that drive
//! steering and projectile avoidance. All functions are pure.

mod intersect;
mod vec2;

pub use intersect::{
    normalize_velocity, ray_circle_intersect_normal_vector, ray_point_orthogonal_intersect,
};
pub use vec2::{EPSILON, Vec2, nearly_equal};
