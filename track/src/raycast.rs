use crate::TrackMesh;

use glam::Vec3;
use utils::{Ray, VecUtils};

/// Determinants below this are treated as a ray parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Where a ray hit a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray direction, in units of the direction's length.
    pub distance: f32,
    pub point: Vec3,
    /// Unit normal of the hit triangle, always pointing into the upper half space.
    pub normal: Vec3,
}

/// Anything a ray can be cast against.
pub trait MeshRaycast {
    /// Returns the hit closest to the ray origin, if any. Hits behind the origin are ignored.
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

/// Möller–Trumbore ray/triangle intersection. Both faces of the triangle are hit. Returns the
/// distance along the ray.
fn intersect_triangle(ray: &Ray, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.dir.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.pos - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

fn upward_normal([a, b, c]: [Vec3; 3]) -> Vec3 {
    let normal = (b - a).cross(c - a).normalize_or(Vec3::Y);
    normal.flip(normal.y < 0.0)
}

impl MeshRaycast for TrackMesh {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let mut closest: Option<(f32, [Vec3; 3])> = None;
        for tri in self.triangles() {
            let Some(t) = intersect_triangle(ray, tri) else {
                continue;
            };
            if closest.map_or(true, |(best, _)| t < best) {
                closest = Some((t, tri));
            }
        }

        closest.map(|(distance, tri)| RayHit {
            distance,
            point: ray.at(distance),
            normal: upward_normal(tri),
        })
    }
}
