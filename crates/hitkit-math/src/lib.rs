#![warn(missing_docs)]

//! Vector algebra for the hitkit intersection predicates.
//!
//! Thin wrappers around nalgebra: a [`Vector`] type plus the handful of
//! free functions the intersection code is written in terms of, and the
//! [`Tolerance`] used for the ray/plane parallel test.

use nalgebra::{Matrix2, Vector3};
use serde::{Deserialize, Serialize};

/// A vector (or point) in 3D space.
pub type Vector = Vector3<f64>;

/// A 2x2 matrix, used for Cramer's rule.
pub type Mat2 = Matrix2<f64>;

/// Dot product `ax*bx + ay*by + az*bz`.
#[inline]
pub fn dot(a: &Vector, b: &Vector) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: &Vector, b: &Vector) -> Vector {
    Vector::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean length.
#[inline]
pub fn magnitude(a: &Vector) -> f64 {
    dot(a, a).sqrt()
}

/// Unit vector pointing along `a`.
///
/// The zero vector has no direction; every component of the result is NaN
/// in that case. Callers that can see a zero vector must check first.
#[inline]
pub fn normalize(a: &Vector) -> Vector {
    let m = magnitude(a);
    Vector::new(a.x / m, a.y / m, a.z / m)
}

/// Scalar multiple `t * a`.
#[inline]
pub fn scale(t: f64, a: &Vector) -> Vector {
    Vector::new(t * a.x, t * a.y, t * a.z)
}

/// Componentwise sum.
#[inline]
pub fn add(a: &Vector, b: &Vector) -> Vector {
    Vector::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Componentwise difference `a - b`.
#[inline]
pub fn sub(a: &Vector, b: &Vector) -> Vector {
    Vector::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Determinant `ad - bc` of `[[a, b], [c, d]]`.
#[inline]
pub fn det2(m: &Mat2) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Index (0 = x, 1 = y, 2 = z) of the component with the largest magnitude.
///
/// Ties go to the lowest index.
pub fn dominant_axis(a: &Vector) -> usize {
    a.iamax()
}

/// Tolerance used when deciding whether a ray runs parallel to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Largest `|cos|` between ray direction and plane normal that still
    /// counts as parallel.
    pub parallel: f64,
}

impl Tolerance {
    /// Only an exactly-zero cosine counts as parallel.
    pub const EXACT: Self = Self { parallel: 0.0 };

    /// Treats near-grazing rays (`|cos| <= 1e-12`) as parallel.
    pub const RELAXED: Self = Self { parallel: 1e-12 };

    /// Check whether a direction/normal cosine means "parallel".
    #[inline]
    pub fn is_parallel(&self, cos: f64) -> bool {
        cos.abs() <= self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}
