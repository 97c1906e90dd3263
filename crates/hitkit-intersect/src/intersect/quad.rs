//! Ray-quad intersection via two triangles.

use hitkit_math::{Tolerance, Vector};
use serde::{Deserialize, Serialize};

use super::{Intersect, Triangle};
use crate::error::Result;
use crate::Ray;

/// A planar, convex quadrilateral with vertices in winding order.
///
/// Planarity, convexity and winding are assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// First vertex.
    pub a: Vector,
    /// Second vertex.
    pub b: Vector,
    /// Third vertex.
    pub c: Vector,
    /// Fourth vertex.
    pub d: Vector,
}

impl Quad {
    /// Create a quad.
    pub fn new(a: Vector, b: Vector, c: Vector, d: Vector) -> Self {
        Self { a, b, c, d }
    }

    /// Create a quad, rejecting it if either half is a degenerate triangle.
    pub fn try_new(a: Vector, b: Vector, c: Vector, d: Vector) -> Result<Self> {
        Triangle::try_new(a, b, d)?;
        Triangle::try_new(b, c, d)?;
        Ok(Self::new(a, b, c, d))
    }

    /// The two triangles `(a, b, d)` and `(b, c, d)` covering the quad.
    pub fn triangles(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.a, self.b, self.d),
            Triangle::new(self.b, self.c, self.d),
        ]
    }
}

impl Intersect for Quad {
    fn intersect_with(&self, ray: &Ray, tol: &Tolerance) -> bool {
        let [first, second] = self.triangles();
        first.intersect_with(ray, tol) || second.intersect_with(ray, tol)
    }
}
