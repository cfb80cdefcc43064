//! 3x3 matrices for the linearized similarity transform.
//!
//! The seven-parameter model is a first-order linearization, so the rotation
//! matrix it needs is not built from sines and cosines: for small angles the
//! off-diagonal entries are the radian angles themselves and the diagonal
//! stays 1. [`Matrix3::linearized_rotation`] builds exactly that matrix; no
//! orthogonality correction is applied anywhere.

use crate::Point3d;

/// A 3x3 matrix in row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    elements: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Creates the identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a row-major 3x3 array.
    pub fn from_rows(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the linearized (small-angle) rotation matrix from rotation
    /// angles about the X, Y and Z axes, in radians:
    ///
    /// ```text
    /// | 1    wz  -wy |
    /// | -wz  1    wx |
    /// | wy  -wx   1  |
    /// ```
    ///
    /// Valid only for angles small enough that second-order terms are
    /// negligible (arcsecond-scale frame rotations qualify).
    pub fn linearized_rotation(wx: f64, wy: f64, wz: f64) -> Self {
        Self::from_rows([[1.0, wz, -wy], [-wz, 1.0, wx], [wy, -wx, 1.0]])
    }

    /// Returns the element at row `i`, column `j` (0-based).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.elements[i][j]
    }

    /// Returns a reference to the underlying row-major array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Applies the matrix to a point (standard matrix-column-vector product).
    pub fn apply(&self, p: &Point3d) -> Point3d {
        let e = &self.elements;
        Point3d::new(
            e[0][0] * p.x + e[0][1] * p.y + e[0][2] * p.z,
            e[1][0] * p.x + e[1][1] * p.y + e[1][2] * p.z,
            e[2][0] * p.x + e[2][1] * p.y + e[2][2] * p.z,
        )
    }
}
