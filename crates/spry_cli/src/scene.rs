//! Demo scene construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spry_renderer::{Hittable, Light, PointLight, Rgba, Sphere, Vec3};

/// Number of spheres in the random scene.
pub const SPHERE_COUNT: usize = 40;

/// Objects and lights handed to the renderer every frame.
pub struct Scene {
    pub objects: Vec<Box<dyn Hittable>>,
    pub lights: Vec<Box<dyn Light>>,
}

/// Scatter random spheres through a 20 unit cube around the origin.
pub fn random_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);

    let objects = (0..SPHERE_COUNT)
        .map(|_| {
            let center = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let radius = rng.gen_range(0.5..2.5);
            let color = Rgba::rgb(rng.gen(), rng.gen(), rng.gen());
            Box::new(Sphere::new(center, radius, color)) as Box<dyn Hittable>
        })
        .collect();

    let lights: Vec<Box<dyn Light>> = vec![Box::new(PointLight::new(
        Vec3::new(0.0, 20.0, 0.0),
        Rgba::WHITE,
    ))];

    log::info!("Created {} objects and {} lights", SPHERE_COUNT, lights.len());

    Scene { objects, lights }
}
