//! Ray and circle queries used for steering and projectile avoidance.
//!
//! Rays here are infinite lines through `ray_pos` with direction `ray_dir`:
//! a circle behind the origin is treated the same as one ahead of it.

use super::vec2::{Vec2, nearly_equal};

/// Scales `v` to length `max_speed`, keeping its direction.
///
/// # Precondition
///
/// `v` must be non-zero. A zero vector yields `NaN` components; steering
/// code checks [`Vec2::is_zero`] before calling this.
#[inline]
pub fn normalize_velocity(v: Vec2, max_speed: f64) -> Vec2 {
    v.normalized() * max_speed
}

/// Returns the point on the line through `ray_pos` along `ray_dir` that is
/// closest to `point` (the foot of the perpendicular from `point`).
///
/// A vertical direction (`ray_dir.x == 0`) is answered directly since the
/// slope is undefined there.
pub fn ray_point_orthogonal_intersect(ray_pos: Vec2, ray_dir: Vec2, point: Vec2) -> Vec2 {
    if nearly_equal(ray_dir.x, 0.0) {
        return Vec2::new(ray_pos.x, point.y);
    }

    // Projection keeps horizontal rays (zero slope) well-defined as well.
    let t = (point - ray_pos).dot(ray_dir) / ray_dir.sqr_length();
    ray_pos + ray_dir * t
}

/// Tests whether the line through `ray_pos` along `ray_dir` crosses the
/// circle at `center` with `radius`.
///
/// Returns `(intersects, normal)` where `normal` points from the foot of the
/// perpendicular towards `center`, i.e. the direction a body at `center`
/// should move to get off the line. `intersects` is `true` iff the foot lies
/// strictly inside the circle.
///
/// # Degenerate case
///
/// When the line passes exactly through `center` there is no unique normal.
/// The function then reports an intersection and returns the ray direction
/// rotated by 90 degrees: an arbitrary vector orthogonal to the ray. Either
/// side is an equally valid escape.
pub fn ray_circle_intersect_normal_vector(
    ray_pos: Vec2,
    ray_dir: Vec2,
    center: Vec2,
    radius: f64,
) -> (bool, Vec2) {
    let foot = ray_point_orthogonal_intersect(ray_pos, ray_dir, center);
    if center.nearly_eq(foot) {
        return (true, ray_dir.perpendicular());
    }

    let normal = center - foot;
    (normal.sqr_length() < radius * radius, normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_velocity_scales_to_speed() {
        let v = normalize_velocity(Vec2::new(3.0, 4.0), 10.0);
        assert!(v.nearly_eq(Vec2::new(6.0, 8.0)));
    }

    #[test]
    fn orthogonal_foot_on_vertical_ray() {
        let foot = ray_point_orthogonal_intersect(
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(7.0, 3.0),
        );
        assert_eq!(foot, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn orthogonal_foot_on_horizontal_ray() {
        let foot = ray_point_orthogonal_intersect(
            Vec2::new(0.0, 1.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(3.0, 9.0),
        );
        assert!(foot.nearly_eq(Vec2::new(3.0, 1.0)));
    }

    #[test]
    fn orthogonal_foot_on_diagonal_ray() {
        let foot = ray_point_orthogonal_intersect(
            Vec2::ZERO,
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
        );
        assert!(foot.nearly_eq(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn circle_ahead_is_hit() {
        let (hit, normal) = ray_circle_intersect_normal_vector(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(10.0, 0.5),
            1.0,
        );
        assert!(hit);
        assert!(normal.nearly_eq(Vec2::new(0.0, 0.5)));
    }

    #[test]
    fn tangent_circle_is_not_hit() {
        let (hit, _) = ray_circle_intersect_normal_vector(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(10.0, 1.0),
            1.0,
        );
        assert!(!hit);
    }

    #[test]
    fn circle_behind_origin_is_hit() {
        let (hit, _) = ray_circle_intersect_normal_vector(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(-10.0, -0.5),
            1.0,
        );
        assert!(hit);
    }

    #[test]
    fn ray_through_center_returns_orthogonal_escape() {
        let dir = Vec2::new(3.0, 1.0);
        let (hit, normal) =
            ray_circle_intersect_normal_vector(Vec2::ZERO, dir, Vec2::new(6.0, 2.0), 1.0);
        assert!(hit);
        assert!(!normal.is_zero());
        assert!(nearly_equal(normal.dot(dir), 0.0));
    }
}
