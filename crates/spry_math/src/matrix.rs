// 4x4 affine transforms in the row-vector convention.
//
// Rows 0-2 hold the basis vectors, row 3 holds the translation and the
// homogeneous weight. A point is transformed as `v * M`.

use std::ops::Mul;

use glam::DMat4;

use crate::Vec3;

/// Pivots below this magnitude mark the matrix as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Row-major 4x4 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    pub e: [[f64; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4 {
        e: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Matrix4x4 = Matrix4x4 { e: [[0.0; 4]; 4] };

    /// Create a matrix from its rows.
    pub const fn new(e: [[f64; 4]; 4]) -> Self {
        Self { e }
    }

    /// Read the first three components of a row as a vector.
    #[inline]
    pub fn row3(&self, row: usize) -> Vec3 {
        Vec3::new(self.e[row][0], self.e[row][1], self.e[row][2])
    }

    /// Overwrite the first three components of a row.
    #[inline]
    pub fn set_row3(&mut self, row: usize, v: Vec3) {
        self.e[row][0] = v.x;
        self.e[row][1] = v.y;
        self.e[row][2] = v.z;
    }

    pub fn transpose(&self) -> Matrix4x4 {
        let mut result = Matrix4x4::ZERO;
        for (i, row) in self.e.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                result.e[j][i] = *value;
            }
        }
        result
    }

    pub fn transpose_in_place(&mut self) {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let upper = self.e[i][j];
                self.e[i][j] = self.e[j][i];
                self.e[j][i] = upper;
            }
        }
    }

    /// Transform a point, including translation and the homogeneous divide.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let e = &self.e;
        let x = v.x * e[0][0] + v.y * e[1][0] + v.z * e[2][0] + e[3][0];
        let y = v.x * e[0][1] + v.y * e[1][1] + v.z * e[2][1] + e[3][1];
        let z = v.x * e[0][2] + v.y * e[1][2] + v.z * e[2][2] + e[3][2];
        let w = v.x * e[0][3] + v.y * e[1][3] + v.z * e[2][3] + e[3][3];

        Vec3::new(x / w, y / w, z / w)
    }

    /// Transform a direction by the upper 3x3 block only.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        let e = &self.e;
        Vec3::new(
            v.x * e[0][0] + v.y * e[1][0] + v.z * e[2][0],
            v.x * e[0][1] + v.y * e[1][1] + v.z * e[2][1],
            v.x * e[0][2] + v.y * e[1][2] + v.z * e[2][2],
        )
    }

    /// Invert with Gauss-Jordan elimination and partial pivoting.
    ///
    /// A singular matrix yields `IDENTITY` instead of an error so that a
    /// malformed camera transform never stops the renderer.
    pub fn inverse(&self) -> Matrix4x4 {
        let mut m = self.e;
        let mut result = Matrix4x4::IDENTITY.e;

        // Forward elimination
        for i in 0..4 {
            let mut pivot = i;
            let mut pivot_size = m[i][i].abs();
            for (j, row) in m.iter().enumerate().skip(i + 1) {
                let candidate = row[i].abs();
                if candidate > pivot_size {
                    pivot = j;
                    pivot_size = candidate;
                }
            }

            if pivot_size < SINGULAR_EPSILON {
                return Matrix4x4::IDENTITY;
            }

            if pivot != i {
                m.swap(i, pivot);
                result.swap(i, pivot);
            }

            for j in (i + 1)..4 {
                let factor = m[j][i] / m[i][i];
                for k in 0..4 {
                    m[j][k] -= factor * m[i][k];
                    result[j][k] -= factor * result[i][k];
                }
            }
        }

        // Backward substitution
        for i in (0..4).rev() {
            let diagonal = m[i][i];
            for k in 0..4 {
                m[i][k] /= diagonal;
                result[i][k] /= diagonal;
            }

            for j in 0..i {
                let factor = m[j][i];
                for k in 0..4 {
                    m[j][k] -= factor * m[i][k];
                    result[j][k] -= factor * result[i][k];
                }
            }
        }

        Matrix4x4::new(result)
    }

    /// Replace this matrix with its inverse and return the new value.
    pub fn invert(&mut self) -> Matrix4x4 {
        *self = self.inverse();
        *self
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.e[i][j] = self.e[i][0] * rhs.e[0][j]
                    + self.e[i][1] * rhs.e[1][j]
                    + self.e[i][2] * rhs.e[2][j]
                    + self.e[i][3] * rhs.e[3][j];
            }
        }
        result
    }
}

// glam stores columns and multiplies column vectors, so our rows become its
// columns and the two describe the same transform.
impl From<Matrix4x4> for DMat4 {
    fn from(m: Matrix4x4) -> Self {
        DMat4::from_cols_array_2d(&m.e)
    }
}

impl From<DMat4> for Matrix4x4 {
    fn from(m: DMat4) -> Self {
        Matrix4x4::new(m.to_cols_array_2d())
    }
}
