//! Error types for the checked constructors.

use thiserror::Error;

/// Geometry rejected by a `try_new` constructor or [`crate::Primitive::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Ray direction is the zero vector.
    #[error("ray direction is the zero vector")]
    DegenerateRay,

    /// Triangle vertices are collinear or coincident, so there is no plane.
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    /// Sphere radius is not a finite positive number.
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
