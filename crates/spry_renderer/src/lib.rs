//! Spry renderer - a minimal CPU ray tracer.
//!
//! One primary ray per pixel, nearest-hit search over a flat list of
//! objects, and placeholder shading that mixes the object color with its
//! surface normal. The caller owns the camera and scene and calls [`render`]
//! once per frame.

mod camera;
mod color;
mod hittable;
mod light;
mod options;
mod renderer;
mod sphere;

pub use camera::{Camera, POLE_LIMIT};
pub use color::{direction_to_color, Rgba};
pub use hittable::{trace, Hittable, Intersection};
pub use light::{Light, PointLight};
pub use options::{ConfigError, RenderError, RenderOptions};
pub use renderer::{cast_ray, render, Framebuffer, REFLECT_RATIO};
pub use sphere::Sphere;

/// Re-export math types from spry_math
pub use spry_math::{Matrix4x4, Vec3};
