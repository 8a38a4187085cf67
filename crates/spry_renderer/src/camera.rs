//! Camera with a camera-to-world transform.
//!
//! The transform rows are laid out as
//!
//! ```text
//! Rx Ry Rz 0    right
//! Ux Uy Uz 0    up
//! Bx By Bz 0    back (the camera looks down -Z in its own space)
//! Tx Ty Tz 1    position
//! ```

use spry_math::{Matrix4x4, Vec3};

const RIGHT: usize = 0;
const UP: usize = 1;
const BACK: usize = 2;
const POSITION: usize = 3;

/// Largest |back.y| the camera may pitch to before `turn_up` stops.
pub const POLE_LIMIT: f64 = 0.95;

/// Camera for generating primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    to_world: Matrix4x4,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    pub fn new() -> Self {
        Self::from_transform(Matrix4x4::IDENTITY)
    }

    /// Create a camera from an existing camera-to-world transform.
    ///
    /// The upper 3x3 block should be orthonormal; this is not checked.
    pub fn from_transform(to_world: Matrix4x4) -> Self {
        Self { to_world }
    }

    /// The camera-to-world transform.
    #[inline]
    pub fn to_world(&self) -> &Matrix4x4 {
        &self.to_world
    }

    /// World space position of the camera.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.to_world.row3(POSITION)
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.to_world.row3(RIGHT)
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.to_world.row3(UP)
    }

    #[inline]
    pub fn back(&self) -> Vec3 {
        self.to_world.row3(BACK)
    }

    /// Viewing direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        -self.back()
    }

    /// Yaw about the world Y axis. Positive angles turn left.
    pub fn turn_left(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();

        for row in [RIGHT, UP, BACK] {
            let r = &mut self.to_world.e[row];
            let (x, z) = (r[0], r[2]);
            r[0] = x * cos + z * sin;
            r[2] = z * cos - x * sin;
        }
    }

    /// Pitch about the camera's right axis. Positive angles look up.
    ///
    /// Once the back row's Y component is past `POLE_LIMIT`, turning further
    /// toward that pole does nothing, and a single step never pitches beyond
    /// the limit.
    pub fn turn_up(&mut self, radians: f64) {
        let back_y = self.to_world.e[BACK][1];
        if back_y > POLE_LIMIT && radians < 0.0 {
            // Already looking down
            return;
        }
        if back_y < -POLE_LIMIT && radians > 0.0 {
            // Already looking up
            return;
        }

        // The right axis stays horizontal, so pitching by `radians` changes
        // the forward elevation by exactly `radians`.
        let elevation = (-back_y).clamp(-1.0, 1.0).asin();
        let max_elevation = POLE_LIMIT.asin();
        let radians = if radians > 0.0 {
            radians.min((max_elevation - elevation).max(0.0))
        } else {
            radians.max((-max_elevation - elevation).min(0.0))
        };

        let (sin, cos) = radians.sin_cos();
        let u = self.to_world.e[RIGHT][0];
        let w = self.to_world.e[RIGHT][2];

        // Rotation about the axis (u, 0, w)
        for row in [UP, BACK] {
            let r = &mut self.to_world.e[row];
            let (x, y, z) = (r[0], r[1], r[2]);
            let along = u * x + w * z;
            r[0] = u * along * (1.0 - cos) + x * cos - w * y * sin;
            r[1] = y * cos + (w * x - u * z) * sin;
            r[2] = w * along * (1.0 - cos) + z * cos + u * y * sin;
        }
    }

    /// Move along the viewing direction. Negative distances move backward.
    pub fn move_forward(&mut self, distance: f64) {
        self.translate(self.forward() * distance);
    }

    /// Move along the camera's left axis. Negative distances move right.
    pub fn move_left(&mut self, distance: f64) {
        self.translate(self.right() * -distance);
    }

    /// Move along the camera's right axis. Negative distances move left.
    pub fn move_right(&mut self, distance: f64) {
        self.translate(self.right() * distance);
    }

    /// Move along the world Y axis.
    pub fn move_up(&mut self, distance: f64) {
        self.translate(Vec3::Y * distance);
    }

    fn translate(&mut self, offset: Vec3) {
        let position = self.position() + offset;
        self.to_world.set_row3(POSITION, position);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
