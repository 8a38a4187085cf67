//! Scene lights.
//!
//! Lights are carried through `render` and `cast_ray` but the current shading
//! does not sample them yet.

use crate::Rgba;
use spry_math::Vec3;

/// A light source in the scene.
pub trait Light: Send + Sync {
    /// World space position of the light.
    fn position(&self) -> Vec3;

    /// Emitted color.
    fn color(&self) -> Rgba;
}

/// An omnidirectional point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgba,
}

impl PointLight {
    pub fn new(position: Vec3, color: Rgba) -> Self {
        Self { position, color }
    }
}

impl Light for PointLight {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn color(&self) -> Rgba {
        self.color
    }
}
