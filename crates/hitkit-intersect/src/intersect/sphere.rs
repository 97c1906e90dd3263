//! Ray-sphere intersection (quadratic root signs).

use hitkit_math::{dot, sub, Tolerance, Vector};
use serde::{Deserialize, Serialize};

use super::Intersect;
use crate::error::{GeometryError, Result};
use crate::Ray;

/// A sphere surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point.
    pub center: Vector,
    /// Radius, expected to be positive.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere without validating the radius.
    pub fn new(center: Vector, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create a sphere, rejecting non-finite or non-positive radii.
    pub fn try_new(center: Vector, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            log::debug!("rejecting sphere at {:?} with radius {}", center, radius);
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius))
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains(&self, point: &Vector) -> bool {
        let offset = sub(point, &self.center);
        dot(&offset, &offset) <= self.radius * self.radius
    }
}

impl Intersect for Sphere {
    /// Root signs of `a t^2 + b t + c = 0` decide the answer; the roots
    /// themselves are never computed. The tolerance is unused.
    ///
    /// A zero direction makes `a = 0` and is not supported: the divisions
    /// produce NaN or infinity and the result is whatever falls out.
    fn intersect_with(&self, ray: &Ray, _tol: &Tolerance) -> bool {
        let d = &ray.direction;
        let oc = sub(&ray.origin, &self.center);

        // |oc + t*d|^2 = r^2
        let a = dot(d, d);
        let b = 2.0 * dot(d, &oc);
        let c = dot(&oc, &oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return false;
        }

        // Vieta: t1 * t2 = c / a, t1 + t2 = -b / a
        let product = c / a;
        if product <= 0.0 {
            // Roots of opposite sign, or one is zero: origin inside or on the sphere
            return true;
        }

        // Same sign; hit iff both are positive
        -b / a > 0.0
    }
}
