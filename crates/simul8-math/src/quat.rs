//! Quaternion type for orientation.
//!
//! [`Quat`] stores a real part `w` and imaginary parts `x`, `y`, `z`.
//! Multiplication is the Hamilton product, which does not commute.
//!
//! # Inversion
//!
//! [`Quat::inverse`] panics on a zero-norm quaternion. Callers that cannot
//! guarantee a non-zero norm should use [`Quat::checked_inverse`] or test
//! [`Quat::norm`] first.
//!
//! ```rust
//! use simul8_math::Quat;
//!
//! let i = Quat::new(0.0, 1.0, 0.0, 0.0);
//! let j = Quat::new(0.0, 0.0, 1.0, 0.0);
//! assert_eq!(i.mul(j), Quat::new(0.0, 0.0, 0.0, 1.0));
//! assert_eq!(j.mul(i), Quat::new(0.0, 0.0, 0.0, -1.0));
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion `w + xi + yj + zk` with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// Real part
    pub w: f64,
    /// i component
    pub x: f64,
    /// j component
    pub y: f64,
    /// k component
    pub z: f64,
}

impl Quat {
    /// Identity rotation `1 + 0i + 0j + 0k`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Zero quaternion. Not invertible.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its real and imaginary parts.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    /// Hamilton product `self * other`.
    #[inline]
    pub fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
        )
    }

    /// Euclidean norm over all four components.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Negates the imaginary parts.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse `conjugate / norm²`.
    ///
    /// # Panics
    ///
    /// Panics if the norm is exactly zero.
    #[inline]
    pub fn inverse(self) -> Self {
        match self.checked_inverse() {
            Some(inv) => inv,
            None => panic!("cannot invert a quaternion with zero norm"),
        }
    }

    /// Like [`Quat::inverse`], but returns `None` for a zero-norm input.
    #[inline]
    pub fn checked_inverse(self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return None;
        }
        let norm_sq = norm * norm;
        let c = self.conjugate();
        Some(Self::new(c.w / norm_sq, c.x / norm_sq, c.y / norm_sq, c.z / norm_sq))
    }

    /// Converts to glam DQuat.
    #[inline]
    pub fn to_glam(self) -> glam::DQuat {
        glam::DQuat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DQuat.
    #[inline]
    pub fn from_glam(q: glam::DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6} + {:.6}i + {:.6}j + {:.6}k)",
            self.w, self.x, self.y, self.z
        )
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Quat::add(self, rhs)
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Quat::sub(self, rhs)
    }
}

// Hamilton product
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Quat::mul(self, rhs)
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl From<glam::DQuat> for Quat {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::DQuat {
    #[inline]
    fn from(q: Quat) -> glam::DQuat {
        q.to_glam()
    }
}
