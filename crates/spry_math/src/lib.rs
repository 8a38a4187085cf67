//! Spry math - double precision vector and matrix algebra.
//!
//! `Matrix4x4` uses the row-vector convention: points are multiplied on the
//! left (`v * M`), basis vectors live in rows and the translation sits in the
//! last row. Conversions to and from `glam` keep transforms equivalent.

mod matrix;
mod vec3;

pub use matrix::Matrix4x4;
pub use vec3::Vec3;

// Re-export glam for interop with the wider ecosystem
pub use glam;
