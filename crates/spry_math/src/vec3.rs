use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::DVec3;

/// A three component double precision vector.
///
/// Used for points, directions and surface normals alike.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with a flipped Y term:
    /// `(y1*z2 - z1*y2, x1*z2 - z1*x2, x1*y2 - y1*x2)`.
    ///
    /// The Y component is the negation of the right-handed cross product.
    /// Camera code built on this convention expects it unchanged.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.x * other.z - self.z * other.x,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.norm().sqrt()
    }

    /// Normalize in place. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            *self /= norm.sqrt();
        }
    }

    /// Return a unit length copy. A zero vector is returned unchanged.
    #[inline]
    pub fn normalized(mut self) -> Vec3 {
        self.normalize();
        self
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_in_place_operations() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_norm_and_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.norm(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_cross_flipped_y_term() {
        // X x Y is +Z in both conventions
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);

        // Z x X is +Y right-handed, -Y here
        assert_eq!(Vec3::Z.cross(Vec3::X), -Vec3::Y);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let expected = Vec3::new(2.0 * 6.0 - 3.0 * 5.0, 1.0 * 6.0 - 3.0 * 4.0, 1.0 * 5.0 - 2.0 * 4.0);
        assert_eq!(a.cross(b), expected);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let once = v.normalized();
            let twice = once.normalized();

            assert!((once.length() - 1.0).abs() < 1e-12);
            assert!((once - twice).length() < 1e-12);
        }
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vec3::new(1.5, -2.0, 0.25);
        let g: DVec3 = v.into();
        assert_eq!(g, DVec3::new(1.5, -2.0, 0.25));
        assert_eq!(Vec3::from(g), v);
    }
}
