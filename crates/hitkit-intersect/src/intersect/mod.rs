//! Ray-primitive intersection predicates.
//!
//! Every primitive implements [`Intersect`]. [`Primitive`] wraps the three
//! concrete shapes so heterogeneous lists can be loaded and checked.

mod quad;
mod sphere;
mod triangle;

pub use quad::Quad;
pub use sphere::Sphere;
pub use triangle::Triangle;

use hitkit_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Ray;

/// A shape that can be tested against a ray.
pub trait Intersect {
    /// True iff the ray meets the shape at some `t >= 0`, using `tol` to
    /// decide when a ray runs parallel to a plane.
    fn intersect_with(&self, ray: &Ray, tol: &Tolerance) -> bool;

    /// [`Intersect::intersect_with`] with the default (exact) tolerance.
    fn intersect(&self, ray: &Ray) -> bool {
        self.intersect_with(ray, &Tolerance::default())
    }
}

/// Any of the supported primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    /// A closed triangle.
    Triangle(Triangle),
    /// A planar convex quadrilateral.
    Quad(Quad),
    /// A sphere surface.
    Sphere(Sphere),
}

impl Primitive {
    /// Short lowercase name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Triangle(_) => "triangle",
            Primitive::Quad(_) => "quad",
            Primitive::Sphere(_) => "sphere",
        }
    }

    /// Run the same checks as the `try_new` constructors.
    pub fn validate(&self) -> Result<()> {
        match self {
            Primitive::Triangle(t) => Triangle::try_new(t.a, t.b, t.c).map(|_| ()),
            Primitive::Quad(q) => Quad::try_new(q.a, q.b, q.c, q.d).map(|_| ()),
            Primitive::Sphere(s) => Sphere::try_new(s.center, s.radius).map(|_| ()),
        }
    }
}

impl Intersect for Primitive {
    fn intersect_with(&self, ray: &Ray, tol: &Tolerance) -> bool {
        match self {
            Primitive::Triangle(t) => t.intersect_with(ray, tol),
            Primitive::Quad(q) => q.intersect_with(ray, tol),
            Primitive::Sphere(s) => s.intersect_with(ray, tol),
        }
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<Quad> for Primitive {
    fn from(q: Quad) -> Self {
        Primitive::Quad(q)
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}
