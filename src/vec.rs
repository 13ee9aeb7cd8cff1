//! 2D vector type
//!
//! Screen-space convention: x grows right, y grows down, angles are radians
//! measured from +x towards +y.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A point or direction in 2D space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from integer coordinates (e.g. a cursor position)
    pub fn from_i32(x: i32, y: i32) -> Self {
        Self::new(x as f64, y as f64)
    }

    /// Vector of length `len` pointing at `angle`
    pub fn from_polar(len: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * len, sin * len)
    }

    #[inline]
    pub fn xy(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Narrow to the `(f32, f32)` tuples the pixel buffer works with
    #[inline]
    pub fn as_f32(self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn len2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn len(self) -> f64 {
        self.len2().sqrt()
    }

    pub fn dist2(self, other: Self) -> f64 {
        (other - self).len2()
    }

    pub fn dist(self, other: Self) -> f64 {
        (other - self).len()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle of this vector relative to +x, in (-pi, pi]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle needed to rotate `self` onto `other`
    pub fn angle_to(self, other: Self) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(self) -> Self {
        let len = self.len();
        if len > f64::EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    pub fn with_len(self, len: f64) -> Self {
        self.normalized() * len
    }

    /// Shorten to at most `max` while keeping direction
    pub fn clamp_len(self, max: f64) -> Self {
        if self.len2() > max * max {
            self.with_len(max)
        } else {
            self
        }
    }

    pub fn rotate(self, rad: f64) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Perpendicular, rotated a quarter turn
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Projection of `self` onto `other`; zero if `other` is zero
    pub fn project_onto(self, other: Self) -> Self {
        let len2 = other.len2();
        if len2 > f64::EPSILON {
            other * (self.dot(other) / len2)
        } else {
            Self::ZERO
        }
    }

    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        v.xy()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

/// Component-wise product
impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_arithmetic() {
        let mut a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        a += b;
        assert_eq!(a, Vec2::new(4.0, 1.0));
        a /= 2.0;
        assert_eq!(a, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn test_len_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.len(), 5.0);
        assert!((v.normalized().len() - 1.0).abs() < EPS);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert!((v.with_len(10.0).len() - 10.0).abs() < EPS);
        assert!((v.clamp_len(1.0).len() - 1.0).abs() < EPS);
        assert_eq!(v.clamp_len(100.0), v);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vec2::X.rotate(FRAC_PI_2);
        assert!(v.approx_eq(Vec2::Y, EPS));
        assert!(Vec2::X.perp().approx_eq(Vec2::Y, EPS));
    }

    #[test]
    fn test_polar_and_angles() {
        let v = Vec2::from_polar(2.0, PI);
        assert!(v.approx_eq(Vec2::new(-2.0, 0.0), EPS));
        assert!((Vec2::Y.angle() - FRAC_PI_2).abs() < EPS);
        assert!((Vec2::X.angle_to(Vec2::Y) - FRAC_PI_2).abs() < EPS);
        assert!((Vec2::Y.angle_to(Vec2::X) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_projection() {
        let v = Vec2::new(2.0, 3.0);
        assert!(v.project_onto(Vec2::new(5.0, 0.0)).approx_eq(Vec2::new(2.0, 0.0), EPS));
        assert_eq!(v.project_onto(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_dist_and_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(6.0, 8.0);
        assert_eq!(a.dist(b), 10.0);
        assert_eq!(a.dist2(b), 100.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(3.0, 4.0));
    }
}
