//! 8-bit RGBA colors.

use bytemuck::{Pod, Zeroable};
use spry_math::Vec3;

/// An 8-bit per channel color, laid out as it is in the framebuffer.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Mix `other` into `self` per RGB channel, keeping this color's alpha.
    ///
    /// Each channel is `other * ratio + self * (1 - ratio)`, narrowed back to
    /// a byte by truncation.
    pub fn mix(self, other: Rgba, ratio: f64) -> Rgba {
        let channel = |own: u8, theirs: u8| -> u8 {
            (f64::from(theirs) * ratio + f64::from(own) * (1.0 - ratio)) as u8
        };

        Rgba::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            self.a,
        )
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Map a unit vector from [-1, 1] per component to an opaque color in
/// [0, 255].
#[inline]
pub fn direction_to_color(v: Vec3) -> Rgba {
    let channel = |c: f64| (c * 127.5 + 127.5) as u8;
    Rgba::rgb(channel(v.x), channel(v.y), channel(v.z))
}
