//! Primary ray generation, shading and the render loop.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use spry_math::{Matrix4x4, Vec3};

use crate::hittable::trace;
use crate::{direction_to_color, Camera, Hittable, Light, RenderError, RenderOptions, Rgba};

/// Weight of the normal-derived reflection color in the final shade.
pub const REFLECT_RATIO: f64 = 0.4;

/// Compute the color seen along a ray.
///
/// Misses show the ray direction as a color. Hits mix the object's color
/// with its surface normal shown the same way. Lights and `depth` are
/// accepted for future bounces and lighting but do not affect the result.
pub fn cast_ray(
    origin: Vec3,
    direction: Vec3,
    objects: &[Box<dyn Hittable>],
    _lights: &[Box<dyn Light>],
    _options: &RenderOptions,
    _depth: u32,
) -> Rgba {
    let hit = trace(origin, direction, objects);
    let Some(object) = hit.object else {
        return direction_to_color(direction);
    };

    let point = origin + direction * hit.distance;
    let normal = object.surface_normal(point);
    let reflect_color = direction_to_color(normal);

    object.color().mix(reflect_color, REFLECT_RATIO)
}

/// Maps pixel coordinates to world space ray directions for one render.
struct Viewport<'a> {
    to_world: &'a Matrix4x4,
    width: u32,
    height: u32,
    scale: f64,
    aspect_ratio: f64,
}

impl<'a> Viewport<'a> {
    fn new(camera: &'a Camera, options: &RenderOptions) -> Self {
        Self {
            to_world: camera.to_world(),
            width: options.width,
            height: options.height,
            scale: (options.field_of_view * 0.5).to_radians().tan(),
            aspect_ratio: options.aspect_ratio(),
        }
    }

    /// Unit direction through the center of pixel (`col`, `row`), rows
    /// counting down from the top.
    fn direction(&self, col: u32, row: u32) -> Vec3 {
        // The half width is an integer division, matching the column offset
        let offset = 2 * (i64::from(col) - i64::from(self.width / 2)) + 1;
        let x = offset as f64 / f64::from(self.width - 1) * self.scale;
        let y = (1.0 - f64::from(2 * row + 1) / f64::from(self.height)) * self.scale
            / self.aspect_ratio;

        self.to_world
            .transform_direction(Vec3::new(x, y, -1.0))
            .normalized()
    }
}

/// RGBA framebuffer filled by a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an `image` buffer for display or saving.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.get(x, y).into())
        })
    }

    /// Save as an image file, format chosen from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.to_image().save(path)
    }
}

/// Render the scene as seen from `camera`.
///
/// Rows are traced in parallel. Camera and scene are only read, and every
/// row writes to its own slice of the framebuffer, so the image is the same
/// as a serial row-major scan.
pub fn render(
    camera: &Camera,
    objects: &[Box<dyn Hittable>],
    lights: &[Box<dyn Light>],
    options: &RenderOptions,
) -> Result<Framebuffer, RenderError> {
    options.validate()?;

    let start = Instant::now();
    let viewport = Viewport::new(camera, options);
    let origin = camera.to_world().transform_point(Vec3::ZERO);

    let mut framebuffer = Framebuffer::new(options.width, options.height);
    framebuffer
        .pixels
        .par_chunks_mut(options.width as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            let row = row as u32;
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let direction = viewport.direction(col as u32, row);
                *pixel = cast_ray(origin, direction, objects, lights, options, options.depth);
            }
        });

    log::debug!(
        "Rendered {}x{} with {} objects in {:?}",
        options.width,
        options.height,
        objects.len(),
        start.elapsed()
    );

    Ok(framebuffer)
}
