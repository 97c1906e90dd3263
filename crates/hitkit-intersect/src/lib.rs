#![warn(missing_docs)]

//! Boolean ray-primitive intersection tests.
//!
//! Each primitive answers one question: does the half-line
//! `origin + t * direction`, `t >= 0`, touch it? Hit points and normals
//! are not reported.
//!
//! # Architecture
//!
//! - [`Ray`] - origin and (unnormalized) direction
//! - [`Triangle`], [`Quad`], [`Sphere`] - the primitives
//! - [`Intersect`] - the predicate trait, also implemented by [`Primitive`]
//! - [`GeometryError`] - returned by the checked constructors only
//!
//! # Example
//!
//! ```
//! use hitkit_intersect::{Intersect, Ray, Sphere};
//! use hitkit_math::Vector;
//!
//! let sphere = Sphere::new(Vector::zeros(), 1.0);
//! let ray = Ray::new(Vector::new(0.0, 2.0, 0.0), Vector::new(0.0, 0.0, 1.0));
//! assert!(!sphere.intersect(&ray));
//! ```

pub mod error;
pub mod intersect;
mod ray;

pub use error::{GeometryError, Result};
pub use intersect::{Intersect, Primitive, Quad, Sphere, Triangle};
pub use ray::Ray;
