//! Two-dimensional vector arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Tolerance used by [`nearly_equal`] and [`Vec2::nearly_eq`].
pub const EPSILON: f64 = 0.00001;

/// Returns `true` if `a` lies strictly within [`EPSILON`] of `b`.
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    a > b - EPSILON && a < b + EPSILON
}

/// A point or direction in world coordinates.
///
/// Equality via `==` is exact so snapshots survive a wire round trip
/// bit-for-bit. Geometric code that needs tolerance uses [`Vec2::nearly_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn sqr_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.sqr_length().sqrt()
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero-length vector becomes `(NaN, NaN)`; callers must check
    /// [`Vec2::is_zero`] first when the input may be degenerate.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self
    }

    /// Returns a unit-length copy of this vector. Same precondition as
    /// [`Vec2::normalize`].
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotates the vector by +90 degrees.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns `true` if both components are within [`EPSILON`] of zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.nearly_eq(Self::ZERO)
    }

    #[inline]
    pub fn nearly_eq(self, other: Self) -> bool {
        nearly_equal(self.x, other.x) && nearly_equal(self.y, other.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_pythagorean_triple() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.sqr_length(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn normalize_in_place_and_by_value_agree() {
        let v = Vec2::new(-6.0, 8.0);
        let mut w = v;
        w.normalize();
        assert!(w.nearly_eq(v.normalized()));
        assert!(nearly_equal(w.length(), 1.0));
    }

    #[test]
    fn normalize_zero_is_nan() {
        let v = Vec2::ZERO.normalized();
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn arithmetic_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let v = Vec2::new(2.5, -7.0);
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn nearly_equal_is_strict() {
        assert!(nearly_equal(1.0, 1.0 + EPSILON / 2.0));
        assert!(!nearly_equal(1.0, 1.0 + EPSILON * 2.0));
    }
}
