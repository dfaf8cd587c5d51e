//! Dense row-major matrix with runtime dimensions.
//!
//! [`Matrix`] supports the shape-generic operations (add, subtract,
//! multiply, transpose, scalar scaling) for any `rows x columns`. The
//! operations that are only defined at 3x3 (determinant, inversion, Euler
//! rotation, vector transform) check the shape and return
//! [`Error::Shape`] otherwise, then run on [`Mat3`].
//!
//! Binary operations allocate a new matrix and never touch their operands.
//! In-place operations mutate the receiver.
//!
//! # Usage
//!
//! ```rust
//! use simul8_math::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
//! let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])?;
//!
//! let c = a.multiply(&b)?;
//! assert_eq!(c.row(0), &[58.0, 64.0]);
//! assert_eq!(c.row(1), &[139.0, 154.0]);
//!
//! // 2x3 + 3x2 is rejected
//! assert!(a.add(&b).is_err());
//! # Ok::<(), simul8_core::Error>(())
//! ```

use crate::{Mat3, Vec3};
use simul8_core::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// A `rows x columns` grid of `f64`, zero-filled on construction.
///
/// Dimensions are fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix {
    rows: usize,
    columns: usize,
    /// Row-major elements, `rows * columns` long.
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    ///
    /// Either dimension may be zero, which yields an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .expect("matrix size overflows usize");
        Self {
            rows,
            columns,
            data: vec![0.0; len],
        }
    }

    /// Creates a matrix from row-major `data`.
    ///
    /// # Errors
    ///
    /// [`Error::DataLength`] unless `data` holds exactly `rows * columns`
    /// elements.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(Error::data_length(rows, columns, data.len()));
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Creates a matrix from a list of rows.
    ///
    /// All rows must have the same length. An empty list gives a 0x0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::ragged_rows(columns, i, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the element at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.columns {
            Some(self.data[row * self.columns + col])
        } else {
            None
        }
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn zip_with(&self, other: &Self, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.shape() != other.shape() {
            debug!(op, left = ?self.shape(), right = ?other.shape(), "dimension mismatch");
            return Err(Error::dimension_mismatch(op, self.shape(), other.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Matrix product `self * other`, shaped `self.rows() x other.columns()`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `self.columns() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            debug!(left = ?self.shape(), right = ?other.shape(), "multiply: dimension mismatch");
            return Err(Error::dimension_mismatch("multiply", self.shape(), other.shape()));
        }
        trace!(
            rows = self.rows,
            inner = self.columns,
            columns = other.columns,
            "multiply"
        );

        let mut result = Self::new(self.rows, other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                for k in 0..self.columns {
                    result[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }
        Ok(result)
    }

    /// Returns the `columns x rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.columns, self.rows);
        for i in 0..self.rows {
            for j in 0..self.columns {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Views this matrix as a [`Mat3`], or fails with [`Error::Shape`].
    fn to_mat3(&self, op: &'static str) -> Result<Mat3> {
        if self.shape() != (3, 3) {
            return Err(Error::shape(op, (3, 3), self.shape()));
        }
        let mut m = Mat3::ZERO;
        for (i, row) in m.m.iter_mut().enumerate() {
            row.copy_from_slice(self.row(i));
        }
        Ok(m)
    }

    fn store_mat3(&mut self, m: &Mat3) {
        for (dst, src) in self.data.iter_mut().zip(m.m.iter().flatten()) {
            *dst = *src;
        }
    }

    /// Determinant of a 3x3 matrix.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] unless the matrix is 3x3.
    pub fn determinant(&self) -> Result<f64> {
        Ok(self.to_mat3("determinant")?.determinant())
    }

    /// Inverts a 3x3 matrix in place.
    ///
    /// A zero determinant leaves the matrix unchanged and still returns
    /// `Ok(())`; see [`Mat3::invert`].
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] unless the matrix is 3x3.
    pub fn invert(&mut self) -> Result<()> {
        let mut m = self.to_mat3("invert")?;
        m.invert();
        self.store_mat3(&m);
        Ok(())
    }

    /// Overwrites a 3x3 matrix with the rotation for Euler `angles`.
    ///
    /// See [`Mat3::from_euler_angles`] for the convention.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] unless the matrix is 3x3.
    pub fn set_euler_angles(&mut self, angles: Vec3) -> Result<()> {
        if self.shape() != (3, 3) {
            return Err(Error::shape("set_euler_angles", (3, 3), self.shape()));
        }
        self.store_mat3(&Mat3::from_euler_angles(angles));
        Ok(())
    }

    /// Computes `self * v` for a 3x3 matrix.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] unless the matrix is 3x3.
    pub fn multiply_vector(&self, v: Vec3) -> Result<Vec3> {
        Ok(self.to_mat3("multiply_vector")?.transform(v))
    }

    /// Multiplies every element by `s` in place.
    pub fn multiply_scalar(&mut self, s: f64) {
        self.data.iter_mut().for_each(|x| *x *= s);
    }

    /// Divides every element by `s` in place.
    ///
    /// `s == 0.0` leaves the matrix unchanged.
    pub fn divide_scalar(&mut self, s: f64) {
        if s == 0.0 {
            debug!("divide_scalar: zero divisor, matrix left unchanged");
            return;
        }
        self.data.iter_mut().for_each(|x| *x /= s);
    }
}

// Rejects payloads where `data.len() != rows * columns`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Repr {
            rows: usize,
            columns: usize,
            data: Vec<f64>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Matrix::from_vec(repr.rows, repr.columns, repr.data).map_err(serde::de::Error::custom)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.columns,
            "Matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.columns,
            "Matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.columns
        );
        &mut self.data[row * self.columns + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.6}", x)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl From<Mat3> for Matrix {
    fn from(m: Mat3) -> Self {
        Self {
            rows: 3,
            columns: 3,
            data: m.m.iter().flatten().copied().collect(),
        }
    }
}

impl TryFrom<&Matrix> for Mat3 {
    type Error = Error;

    fn try_from(m: &Matrix) -> Result<Self> {
        m.to_mat3("into Mat3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_new_zero_filled() {
        let a = Matrix::new(3, 3);
        assert_eq!(a.shape(), (3, 3));
        assert!(a.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_new_size_overflow() {
        let _ = Matrix::new(usize::MAX, 2);
    }

    #[test]
    fn test_from_vec() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(a.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(
            Matrix::from_vec(3, 3, vec![1.0]).unwrap_err(),
            Error::data_length(3, 3, 1)
        );
        assert!(Matrix::from_vec(usize::MAX, 2, Vec::new()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let json = serde_json::to_string(&a).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_wrong_length() {
        let err = serde_json::from_str::<Matrix>(r#"{"rows":3,"columns":3,"data":[1.0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("needs 9 elements"));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, Error::ragged_rows(2, 1, 1));
    }

    #[test]
    fn test_get() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.get(1, 0), Some(3.0));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a[(0, 1)], 2.0);
    }

    #[test]
    fn test_add() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(a.add(&b).unwrap(), m(&[&[6.0, 8.0], &[10.0, 12.0]]));
        // operands untouched
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    }

    #[test]
    fn test_subtract() {
        let a = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.subtract(&b).unwrap(), m(&[&[4.0, 4.0], &[4.0, 4.0]]));
    }

    #[test]
    fn test_add_mismatch() {
        let a = Matrix::new(2, 2);
        let b = Matrix::new(2, 3);
        let err = a.add(&b).unwrap_err();
        assert!(err.is_dimension_error());
        assert!(a.subtract(&b).unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_multiply() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, m(&[&[58.0, 64.0], &[139.0, 154.0]]));
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = Matrix::new(2, 3);
        let err = a.multiply(&a).unwrap_err();
        assert_eq!(err, Error::dimension_mismatch("multiply", (2, 3), (2, 3)));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_empty_matrix() {
        let e = Matrix::new(0, 4);
        assert_eq!(e.transpose().shape(), (4, 0));
        assert_eq!(e.add(&e).unwrap(), e);
        let p = e.multiply(&Matrix::new(4, 2)).unwrap();
        assert_eq!(p.shape(), (0, 2));
        let q = Matrix::new(2, 0).multiply(&Matrix::new(0, 2)).unwrap();
        assert_eq!(q, Matrix::new(2, 2));
    }

    #[test]
    fn test_determinant() {
        let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
        assert_eq!(a.determinant().unwrap(), 1.0);
    }

    #[test]
    fn test_three_by_three_only() {
        let mut a = Matrix::new(2, 2);
        assert!(a.determinant().unwrap_err().is_shape_error());
        assert!(a.invert().unwrap_err().is_shape_error());
        assert!(a.set_euler_angles(Vec3::ZERO).unwrap_err().is_shape_error());
        assert!(a.multiply_vector(Vec3::ONE).unwrap_err().is_shape_error());
        assert!(Mat3::try_from(&a).is_err());
        assert_eq!(a, Matrix::new(2, 2));
    }

    #[test]
    fn test_invert() {
        let mut a = m(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
        let original = a.clone();
        a.invert().unwrap();
        let expected = m(&[&[-24.0, 18.0, 5.0], &[20.0, -15.0, -4.0], &[-5.0, 4.0, 1.0]]);
        for (x, y) in a.as_slice().iter().zip(expected.as_slice()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
        let product = original.multiply(&a).unwrap();
        for (x, y) in product.as_slice().iter().zip(Matrix::identity(3).as_slice()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invert_singular_unchanged() {
        let mut a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let before = a.clone();
        assert_eq!(a.determinant().unwrap(), 0.0);
        a.invert().unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn test_set_euler_angles_zero() {
        let mut a = m(&[&[9.0, 9.0, 9.0], &[9.0, 9.0, 9.0], &[9.0, 9.0, 9.0]]);
        a.set_euler_angles(Vec3::ZERO).unwrap();
        assert_eq!(a, Matrix::identity(3));
    }

    #[test]
    fn test_multiply_vector() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let v = a.multiply_vector(Vec3::new(1.0, 0.0, -1.0)).unwrap();
        assert_eq!(v, Vec3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn test_scalar_ops() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.multiply_scalar(2.0);
        assert_eq!(a, m(&[&[2.0, 4.0], &[6.0, 8.0]]));
        a.divide_scalar(4.0);
        assert_eq!(a, m(&[&[0.5, 1.0], &[1.5, 2.0]]));
    }

    #[test]
    fn test_divide_by_zero_noop() {
        let mut a = m(&[&[1.0, -2.0], &[3.0, 0.0]]);
        let before = a.clone();
        a.divide_scalar(0.0);
        assert_eq!(a, before);
        assert!(a.as_slice().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_mat3_conversions() {
        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let dynamic = Matrix::from(m3);
        assert_eq!(dynamic.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(Mat3::try_from(&dynamic).unwrap(), m3);
    }

    #[test]
    fn test_display() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.5]]);
        assert_eq!(
            a.to_string(),
            "[1.000000, 2.000000]\n[3.000000, 4.500000]"
        );
    }
}
