//! Ray-triangle intersection (plane hit + barycentric containment).

use hitkit_math::{cross, det2, dominant_axis, dot, normalize, scale, sub, Mat2, Tolerance, Vector};
use serde::{Deserialize, Serialize};

use super::Intersect;
use crate::error::{GeometryError, Result};
use crate::Ray;

/// A closed triangle with vertices `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex; the barycentric origin.
    pub a: Vector,
    /// Second vertex.
    pub b: Vector,
    /// Third vertex.
    pub c: Vector,
}

impl Triangle {
    /// Create a triangle without checking that it spans a plane.
    pub fn new(a: Vector, b: Vector, c: Vector) -> Self {
        Self { a, b, c }
    }

    /// Create a triangle, rejecting collinear or coincident vertices.
    pub fn try_new(a: Vector, b: Vector, c: Vector) -> Result<Self> {
        let tri = Self::new(a, b, c);
        if tri.edge_cross() == Vector::zeros() {
            log::debug!("rejecting degenerate triangle {:?}", tri);
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(tri)
    }

    fn edge_cross(&self) -> Vector {
        cross(&sub(&self.c, &self.a), &sub(&self.b, &self.a))
    }

    /// Unit normal `normalize((c - a) x (b - a))`.
    ///
    /// NaN for a degenerate triangle.
    pub fn normal(&self) -> Vector {
        normalize(&self.edge_cross())
    }

    /// Unsigned distance from `point` to the triangle's plane.
    pub fn distance_to_plane(&self, point: &Vector) -> f64 {
        dot(&self.normal(), &sub(point, &self.a)).abs()
    }

    /// Whether `point` lies exactly on the triangle's plane.
    pub fn in_plane(&self, point: &Vector) -> bool {
        dot(&sub(point, &self.a), &self.normal()) == 0.0
    }

    /// Whether the ray starts on the plane or initially moves towards it.
    ///
    /// Steps half the origin-plane distance along the direction and checks
    /// that the distance shrank. This ignores the triangle's bounds.
    pub fn faces(&self, ray: &Ray) -> bool {
        if self.in_plane(&ray.origin) {
            return true;
        }

        let distance = self.distance_to_plane(&ray.origin);
        let step = scale(distance / 2.0, &normalize(&ray.direction));
        let moved = ray.origin + step;

        self.distance_to_plane(&moved) < distance
    }

    /// Barycentric point-in-triangle test for a point on the plane.
    ///
    /// Solves `p - a = beta (b - a) + gamma (c - a)` by Cramer's rule on the
    /// two axes left after dropping the normal's dominant component, so
    /// the 2x2 system is never singular for a non-degenerate triangle.
    /// Edges and vertices count as inside.
    pub fn contains(&self, point: &Vector) -> bool {
        let (i, j) = match dominant_axis(&self.edge_cross()) {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };

        let pa = sub(point, &self.a);
        let ba = sub(&self.b, &self.a);
        let ca = sub(&self.c, &self.a);

        let denom = det2(&Mat2::new(ba[i], ca[i], ba[j], ca[j]));
        let beta = det2(&Mat2::new(pa[i], ca[i], pa[j], ca[j])) / denom;
        let gamma = det2(&Mat2::new(ba[i], pa[i], ba[j], pa[j])) / denom;

        beta >= 0.0 && gamma >= 0.0 && beta + gamma <= 1.0
    }
}

impl Intersect for Triangle {
    /// A ray lying in the triangle's plane counts as parallel and misses.
    fn intersect_with(&self, ray: &Ray, tol: &Tolerance) -> bool {
        let normal = self.normal();
        let cos = dot(&ray.direction, &normal);

        if tol.is_parallel(cos) {
            return false;
        }

        // (origin + t * direction - a) . n = 0
        let t = dot(&sub(&self.a, &ray.origin), &normal) / cos;

        // Plane is behind the origin
        if t < 0.0 {
            return false;
        }

        let hit = self.contains(&ray.at(t));
        log::trace!("triangle {:?} t={} hit={}", self, t, hit);
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z)
    }

    fn ray(origin: Vector, direction: Vector) -> Ray {
        Ray::new(origin, direction)
    }

    fn xy_triangle() -> Triangle {
        Triangle::new(v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_ray_hits_vertex_from_below() {
        let tri = Triangle::new(v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(1.0, 0.0, 1.0));
        assert!(tri.intersect(&ray(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0))));
    }

    #[test]
    fn test_triangle_parallel_to_ray() {
        let tri = Triangle::new(v(2.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 0.0, 1.0));
        assert!(!tri.intersect(&ray(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0))));
    }

    #[test]
    fn test_slanted_triangle_corner_hit() {
        let tri = Triangle::new(v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0))));
    }

    #[test]
    fn test_vertical_triangle_misses() {
        let tri = Triangle::new(v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(0.5, 0.5, 1.0));
        assert!(!tri.intersect(&ray(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0))));
    }

    #[test]
    fn test_origin_on_plane() {
        let tri = xy_triangle();
        let up = v(0.0, 0.0, 1.0);
        assert!(!tri.intersect(&ray(v(2.0, 0.0, 0.0), up)));
        assert!(!tri.intersect(&ray(v(0.0, 2.0, 0.0), up)));
        assert!(!tri.intersect(&ray(v(-1.0, -1.0, 0.0), up)));
        assert!(!tri.intersect(&ray(v(1.0, 1.0, 0.0), up)));
        assert!(tri.intersect(&ray(v(0.25, 0.25, 0.0), up)));
    }

    #[test]
    fn test_plane_behind_origin() {
        let tri = xy_triangle();
        assert!(!tri.intersect(&ray(v(0.25, 0.25, 0.5), v(0.0, 0.0, 1.0))));
        assert!(tri.intersect(&ray(v(0.25, 0.25, 0.5), v(0.0, 0.0, -1.0))));
    }

    #[test]
    fn test_edges_and_vertices_inside() {
        let tri = xy_triangle();
        assert!(tri.contains(&v(0.5, 0.5, 0.0)));
        assert!(tri.contains(&v(0.0, 0.0, 0.0)));
        assert!(tri.contains(&v(1.0, 0.0, 0.0)));
        assert!(tri.contains(&v(0.5, 0.0, 0.0)));
        assert!(!tri.contains(&v(0.6, 0.6, 0.0)));
    }

    #[test]
    fn test_vertical_plane_containment() {
        // Lies in x = 0; an x,y-only barycentric solve would be singular here.
        let tri = Triangle::new(v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray(v(-1.0, 0.25, 0.25), v(1.0, 0.0, 0.0))));
        assert!(!tri.intersect(&ray(v(-1.0, 0.75, 0.75), v(1.0, 0.0, 0.0))));
        assert!(!tri.intersect(&ray(v(1.0, 0.25, 0.25), v(1.0, 0.0, 0.0))));
    }

    #[test]
    fn test_parallel_rays_never_hit() {
        let tri = Triangle::new(v(-1.0, -1.0, 2.0), v(3.0, 0.0, 2.0), v(0.0, 4.0, 2.0));
        let origins = [v(0.0, 0.0, 2.0), v(0.0, 0.0, 0.0), v(5.0, -3.0, 7.0)];
        let dirs = [v(1.0, 0.0, 0.0), v(0.0, -1.0, 0.0), v(0.3, 0.7, 0.0)];
        for o in origins {
            for d in dirs {
                assert!(!tri.intersect(&ray(o, d)));
            }
        }
    }

    #[test]
    fn test_relaxed_tolerance_rejects_grazing_ray() {
        let tri = xy_triangle();
        let grazing = ray(v(0.25, 0.25, 1e-14), v(0.1, 0.0, -1e-14));
        assert!(tri.intersect(&grazing));
        assert!(!tri.intersect_with(&grazing, &Tolerance::RELAXED));
    }

    #[test]
    fn test_normal() {
        let n = Triangle::new(v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(1.0, 0.0, 1.0)).normal();
        assert!(n.x.abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);
        assert!((n.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_plane() {
        let tri = xy_triangle();
        let cases = [
            (v(1.0, 0.0, 0.0), 0.0),
            (v(100.0, 0.0, 0.0), 0.0),
            (v(0.0, 0.0, 1.0), 1.0),
            (v(0.0, 0.0, 25.0), 25.0),
            (v(18273981.0, 23.0, -32.0), 32.0),
            (v(23.2, 2333.3, 15.3), 15.3),
        ];
        for (point, expected) in cases {
            assert!((tri.distance_to_plane(&point) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_in_plane() {
        let tri = xy_triangle();
        assert!(tri.in_plane(&v(7.0, -3.0, 0.0)));
        assert!(!tri.in_plane(&v(0.0, 0.0, 0.1)));
    }

    #[test]
    fn test_faces() {
        let tri = Triangle::new(v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0));
        assert!(tri.faces(&ray(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0))));
        assert!(!tri.faces(&ray(v(0.0, 0.0, 1.0), v(0.0, 0.0, 1.0))));
        assert!(tri.faces(&ray(v(0.0, 0.0, 1.0), v(0.0, 0.0, -1.0))));
        assert!(!tri.faces(&ray(v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0))));
    }

    #[test]
    fn test_try_new() {
        let err = Triangle::try_new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0));
        assert_eq!(err, Err(GeometryError::DegenerateTriangle));
        assert!(Triangle::try_new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)).is_ok());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0));
        assert!(!tri.intersect(&ray(v(0.0, 0.0, -1.0), v(0.0, 0.0, 1.0))));
    }
}
