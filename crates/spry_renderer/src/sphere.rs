//! Sphere primitive.

use crate::{Hittable, Rgba};
use spry_math::Vec3;

/// A solid colored sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Rgba,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, color: Rgba) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

impl Hittable for Sphere {
    /// Geometric ray-sphere test. `direction` is expected to be unit length.
    ///
    /// A sphere whose center projects behind the origin is reported as a miss
    /// even if part of it still reaches in front.
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let to_center = self.center - origin;
        let projection = to_center.dot(direction);
        if projection < 0.0 {
            return None;
        }

        let distance_squared = to_center.dot(to_center) - projection * projection;
        let radius_squared = self.radius * self.radius;
        if distance_squared > radius_squared {
            return None;
        }

        let half_chord = (radius_squared - distance_squared).sqrt();
        let t0 = projection - half_chord;
        let t1 = projection + half_chord;

        if t0 < t1 && t0 > 0.0 {
            Some(t0)
        } else if t1 > 0.0 {
            // Origin inside the sphere, take the exit point
            Some(t1)
        } else {
            None
        }
    }

    fn color(&self) -> Rgba {
        self.color
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(z: f64) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, Rgba::rgb(128, 64, 32))
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = unit_sphere_at(-5.0);
        let distance = sphere.intersect(Vec3::ZERO, -Vec3::Z);

        // distance to center minus radius
        assert_eq!(distance, Some(4.0));
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -0.5), 2.0, Rgba::WHITE);
        let distance = sphere.intersect(Vec3::ZERO, -Vec3::Z).unwrap();

        assert!(distance > 0.0);
        assert!((distance - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = unit_sphere_at(-5.0);
        assert_eq!(sphere.intersect(Vec3::ZERO, Vec3::Z), None);
    }

    #[test]
    fn test_sphere_miss_passing_beside() {
        let sphere = unit_sphere_at(-5.0);
        let direction = Vec3::new(1.0, 0.0, -1.0).normalized();
        assert_eq!(sphere.intersect(Vec3::ZERO, direction), None);
    }

    #[test]
    fn test_sphere_center_behind_origin() {
        // Origin inside the sphere but past its center: treated as a miss
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.5), 2.0, Rgba::WHITE);
        assert_eq!(sphere.intersect(Vec3::ZERO, -Vec3::Z), None);
    }

    #[test]
    fn test_sphere_surface_normal() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0, Rgba::WHITE);

        let normal = sphere.surface_normal(Vec3::new(1.0, 4.0, 3.0));
        assert_eq!(normal, Vec3::Y);

        let normal = sphere.surface_normal(Vec3::new(3.0, 4.0, 3.0));
        assert!((normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_color() {
        assert_eq!(unit_sphere_at(0.0).color(), Rgba::rgb(128, 64, 32));
    }
}
