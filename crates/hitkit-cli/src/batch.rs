//! Batch files: a list of primitives and a list of rays, checked pairwise.

use std::fs;
use std::path::Path;

use hitkit_intersect::{Intersect, Primitive, Ray};
use hitkit_math::Tolerance;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Primitives and rays to check against each other.
///
/// ```json
/// {
///   "primitives": [{"type": "Sphere", "center": [0, 0, 0], "radius": 1}],
///   "rays": [{"origin": [0, 2, 0], "direction": [0, 0, 1]}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Shapes to test.
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    /// Rays to test.
    #[serde(default)]
    pub rays: Vec<Ray>,
}

/// Outcome of one ray against one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckRow {
    /// Ray index in the batch.
    pub ray: usize,
    /// Primitive index in the batch.
    pub primitive: usize,
    /// Primitive kind.
    pub kind: &'static str,
    /// Whether they intersect.
    pub hit: bool,
}

impl Batch {
    /// Parse a batch from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a batch file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let batch = Self::from_json(&json)?;
        log::info!(
            "loaded {} primitives and {} rays from {}",
            batch.primitives.len(),
            batch.rays.len(),
            path.display()
        );
        Ok(batch)
    }

    /// Reject degenerate primitives and zero-direction rays.
    pub fn validate(&self) -> Result<()> {
        for (index, prim) in self.primitives.iter().enumerate() {
            prim.validate().map_err(|source| CheckError::InvalidPrimitive {
                index,
                kind: prim.kind(),
                source,
            })?;
        }
        for (index, ray) in self.rays.iter().enumerate() {
            Ray::try_new(ray.origin, ray.direction)
                .map_err(|source| CheckError::InvalidRay { index, source })?;
        }
        Ok(())
    }

    /// Check every ray against every primitive.
    ///
    /// Rows are ordered by ray, then primitive.
    pub fn check(&self, tol: &Tolerance) -> Vec<CheckRow> {
        let per_ray: Vec<Vec<CheckRow>> = self
            .rays
            .par_iter()
            .enumerate()
            .map(|(ray_idx, ray)| {
                self.primitives
                    .iter()
                    .enumerate()
                    .map(|(prim_idx, prim)| {
                        let hit = prim.intersect_with(ray, tol);
                        log::trace!("ray {} x {} {}: {}", ray_idx, prim.kind(), prim_idx, hit);
                        CheckRow {
                            ray: ray_idx,
                            primitive: prim_idx,
                            kind: prim.kind(),
                            hit,
                        }
                    })
                    .collect()
            })
            .collect();

        per_ray.into_iter().flatten().collect()
    }
}
