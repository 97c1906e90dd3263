//! Ray representation.

use hitkit_math::{add, scale, Vector};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept exactly as given; it is not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vector,
    /// Direction of travel.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray. A zero direction is accepted but unsupported by
    /// the intersection tests; use [`Ray::try_new`] to reject it.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Create a new ray, rejecting a zero direction.
    pub fn try_new(origin: Vector, direction: Vector) -> Result<Self> {
        if direction == Vector::zeros() {
            log::debug!("rejecting ray at {:?} with zero direction", origin);
            return Err(GeometryError::DegenerateRay);
        }
        Ok(Self::new(origin, direction))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Vector {
        add(&self.origin, &scale(t, &self.direction))
    }

    /// The same line travelled the other way from the same origin.
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.direction)
    }
}
