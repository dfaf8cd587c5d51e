//! Fixed-size 3x3 matrix for rotations and linear transforms.
//!
//! [`Mat3`] carries every operation that only makes sense at 3x3:
//! determinant, adjugate inversion, Euler-angle rotation and vector
//! transform. The dynamic [`Matrix`](crate::Matrix) converts into it
//! before running any of these.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use simul8_math::{Mat3, Vec3};
//!
//! let mut m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [0.0, 0.0, 8.0],
//! ]);
//! m.invert();
//! assert_eq!(m * Vec3::new(2.0, 4.0, 8.0), Vec3::ONE);
//! ```

use crate::Vec3;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};
use tracing::debug;

/// A 3x3 matrix of `f64`.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or [`Mat3::from_cols`]
/// to construct from component arrays.
///
/// # Example
///
/// ```rust
/// use simul8_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Builds the rotation matrix for Euler angles `(x, y, z)` in radians.
    ///
    /// ```text
    /// | cY*cZ             cY*sZ             -sY   |
    /// | sX*sY*cZ - cX*sZ  sX*sY*sZ + cX*cZ  sX*cY |
    /// | cX*sY*cZ + sX*sZ  cX*sY*sZ - sX*cZ  cX*cY |
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use simul8_math::{Mat3, Vec3};
    ///
    /// assert_eq!(Mat3::from_euler_angles(Vec3::ZERO), Mat3::IDENTITY);
    /// ```
    pub fn from_euler_angles(angles: Vec3) -> Self {
        let (sin_x, cos_x) = angles.x.sin_cos();
        let (sin_y, cos_y) = angles.y.sin_cos();
        let (sin_z, cos_z) = angles.z.sin_cos();

        Self::from_rows([
            [cos_y * cos_z, cos_y * sin_z, -sin_y],
            [
                sin_x * sin_y * cos_z - cos_x * sin_z,
                sin_x * sin_y * sin_z + cos_x * cos_z,
                sin_x * cos_y,
            ],
            [
                cos_x * sin_y * cos_z + sin_x * sin_z,
                cos_x * sin_y * sin_z - sin_x * cos_z,
                cos_x * cos_y,
            ],
        ])
    }

    /// Overwrites all nine entries with the rotation for `angles`.
    ///
    /// See [`Mat3::from_euler_angles`].
    #[inline]
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        *self = Self::from_euler_angles(angles);
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        let inv_det = 1.0 / det;

        // Adjugate (transposed cofactors) scaled by 1/det
        Some(Self::from_rows([
            [
                (e * i - f * h) * inv_det,
                (c * h - b * i) * inv_det,
                (b * f - c * e) * inv_det,
            ],
            [
                (f * g - d * i) * inv_det,
                (a * i - c * g) * inv_det,
                (c * d - a * f) * inv_det,
            ],
            [
                (d * h - e * g) * inv_det,
                (g * b - a * h) * inv_det,
                (a * e - b * d) * inv_det,
            ],
        ]))
    }

    /// Inverts this matrix in place.
    ///
    /// A singular matrix (determinant exactly zero) is left unchanged and
    /// no error is reported. Check [`Mat3::determinant`] beforehand to
    /// tell the two outcomes apart.
    ///
    /// ```rust
    /// use simul8_math::Mat3;
    ///
    /// let singular = Mat3::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [2.0, 4.0, 6.0],
    ///     [1.0, 1.0, 1.0],
    /// ]);
    /// let mut m = singular;
    /// m.invert();
    /// assert_eq!(m, singular);
    /// ```
    pub fn invert(&mut self) {
        match self.inverse() {
            Some(inv) => *self = inv,
            None => debug!("invert: determinant is zero, matrix left unchanged"),
        }
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Multiplies every entry by `s` in place.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f64) {
        self.m.iter_mut().flatten().for_each(|x| *x *= s);
    }

    /// Divides every entry by `s` in place.
    ///
    /// `s == 0.0` leaves the matrix unchanged.
    #[inline]
    pub fn divide_scalar(&mut self, s: f64) {
        if s == 0.0 {
            debug!("divide_scalar: zero divisor, matrix left unchanged");
            return;
        }
        self.m.iter_mut().flatten().for_each(|x| *x /= s);
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:.6}, {:.6}, {:.6}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f64
impl Mul<f64> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f64) -> Self {
        self.multiply_scalar(rhs);
        self
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f64; 3] {
        &mut self.m[i]
    }
}

impl From<glam::DMat3> for Mat3 {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::from_glam(m)
    }
}
