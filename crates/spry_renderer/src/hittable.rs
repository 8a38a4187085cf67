//! Hittable trait and nearest-hit search over a scene.

use crate::Rgba;
use spry_math::Vec3;

/// Trait for surfaces that rays can intersect.
pub trait Hittable: Send + Sync {
    /// Distance along `direction` from `origin` to the nearest visible
    /// intersection, or `None` if the ray misses.
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64>;

    /// Intrinsic color of the surface.
    fn color(&self) -> Rgba;

    /// Unit length outward normal at a point on the surface.
    fn surface_normal(&self, point: Vec3) -> Vec3;
}

/// Result of tracing a ray through the scene.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance to the hit, `f64::INFINITY` on a miss
    pub distance: f64,
    /// The object that was hit
    pub object: Option<&'a dyn Hittable>,
}

impl<'a> Intersection<'a> {
    /// An intersection that hit nothing.
    pub fn miss() -> Self {
        Self {
            distance: f64::INFINITY,
            object: None,
        }
    }

    /// Whether the ray hit an object.
    pub fn is_hit(&self) -> bool {
        self.object.is_some()
    }
}

/// Find the nearest object along a ray.
///
/// Scans every object in order. On equal distances the earlier object wins,
/// so results only depend on the scene ordering when distances tie exactly.
pub fn trace<'a>(
    origin: Vec3,
    direction: Vec3,
    objects: &'a [Box<dyn Hittable>],
) -> Intersection<'a> {
    let mut nearest = Intersection::miss();

    for object in objects {
        if let Some(distance) = object.intersect(origin, direction) {
            if distance < nearest.distance {
                nearest = Intersection {
                    distance,
                    object: Some(object.as_ref()),
                };
            }
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    fn sphere(z: f64, color: Rgba) -> Box<dyn Hittable> {
        Box::new(Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, color))
    }

    #[test]
    fn test_trace_empty_scene() {
        let objects: Vec<Box<dyn Hittable>> = Vec::new();
        let hit = trace(Vec3::ZERO, -Vec3::Z, &objects);

        assert!(!hit.is_hit());
        assert_eq!(hit.distance, f64::INFINITY);
    }

    #[test]
    fn test_trace_nearest_regardless_of_order() {
        let near = Rgba::rgb(255, 0, 0);
        let far = Rgba::rgb(0, 0, 255);

        let forward = vec![sphere(-5.0, near), sphere(-10.0, far)];
        let reversed = vec![sphere(-10.0, far), sphere(-5.0, near)];

        for objects in [&forward, &reversed] {
            let hit = trace(Vec3::ZERO, -Vec3::Z, objects);
            assert!(hit.is_hit());
            assert!((hit.distance - 4.0).abs() < 1e-12);
            assert_eq!(hit.object.map(|o| o.color()), Some(near));
        }
    }

    #[test]
    fn test_trace_tie_keeps_first() {
        let first = Rgba::rgb(10, 20, 30);
        let second = Rgba::rgb(40, 50, 60);
        let objects = vec![sphere(-5.0, first), sphere(-5.0, second)];

        let hit = trace(Vec3::ZERO, -Vec3::Z, &objects);
        assert_eq!(hit.object.map(|o| o.color()), Some(first));
    }

    #[test]
    fn test_trace_miss() {
        let objects = vec![sphere(-5.0, Rgba::WHITE)];
        let hit = trace(Vec3::ZERO, Vec3::Y, &objects);

        assert!(!hit.is_hit());
        assert_eq!(hit.distance, f64::INFINITY);
    }
}
