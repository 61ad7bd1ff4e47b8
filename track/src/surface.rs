use crate::shape::{Cut, TrackProfile, TrackShape};
use crate::{
    FigureEight, GeometryResult, HeightProfile, MeshRaycast, RayHit, Ring, TrackMesh, Waypoints,
};

use utils::Ray;

/// A generated track: the mesh crafts drive on and the waypoints along its centerline. Created
/// once when a track is selected and never modified afterwards.
#[derive(Debug, Clone)]
pub struct TrackSurface {
    shape: TrackShape,
    mesh: TrackMesh,
    waypoints: Waypoints,
}

impl TrackSurface {
    /// Validates the shape and generates its mesh and waypoints. There is one waypoint per cross
    /// track segment.
    pub fn generate(shape: TrackShape) -> GeometryResult<Self> {
        shape.validate()?;
        let cuts = shape.compute_cuts();

        let edges: Vec<_> = cuts.iter().map(|c| (c.inner, c.outer)).collect();
        let mesh = TrackMesh::closed_strip(&edges);
        let waypoints = Waypoints::from_vec(cuts.iter().map(|c: &Cut| c.center).collect());

        log::info!(
            "generated {} track: {} vertices, {} triangles, {} waypoints, {:.1} units per lap",
            shape.name(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            waypoints.len(),
            waypoints.compute_length(),
        );

        Ok(Self {
            shape,
            mesh,
            waypoints,
        })
    }

    pub fn ring(
        radius: f32,
        width: f32,
        segments: u32,
        height_amplitude: f32,
    ) -> GeometryResult<Self> {
        Self::generate(Ring::new(radius, width, segments, height_amplitude).into())
    }

    pub fn figure_eight(
        loop_radius: f32,
        width: f32,
        segments_per_loop: u32,
        height_amplitude: f32,
        height_profile: HeightProfile,
    ) -> GeometryResult<Self> {
        let shape = FigureEight::new(
            loop_radius,
            width,
            segments_per_loop,
            height_amplitude,
            height_profile,
        );
        Self::generate(shape.into())
    }

    pub fn shape(&self) -> &TrackShape {
        &self.shape
    }

    pub fn mesh(&self) -> &TrackMesh {
        &self.mesh
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    /// Hands over the mesh and waypoints, e.g. to move the mesh into a renderer.
    pub fn into_parts(self) -> (TrackMesh, Waypoints) {
        (self.mesh, self.waypoints)
    }
}

impl MeshRaycast for TrackSurface {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.mesh.raycast(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample, GeometryError};
    use approx::assert_relative_eq;
    use glam::Vec3;
    use std::collections::HashSet;

    fn assert_closed_strip(surface: &TrackSurface, segments: usize) {
        let mesh = surface.mesh();
        assert_eq!(surface.waypoints().len(), segments);
        assert_eq!(mesh.vertex_count(), segments * 2);
        assert_eq!(mesh.indices.len(), segments * 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
        // every segment connects to the next one, the last one to the first
        for (s, quad) in mesh.indices.chunks_exact(6).enumerate() {
            let next = (s + 1) % segments;
            let used: HashSet<u32> = quad.iter().copied().collect();
            let expected: HashSet<u32> = [s * 2, s * 2 + 1, next * 2, next * 2 + 1]
                .iter()
                .map(|&i| i as u32)
                .collect();
            assert_eq!(used, expected);
        }
    }

    #[test]
    fn ring_topology() {
        for segments in [3, 4, 17, 100] {
            let surface = TrackSurface::ring(50.0, 10.0, segments, 5.0).unwrap();
            assert_closed_strip(&surface, segments as usize);
        }
    }

    #[test]
    fn figure_eight_topology() {
        let surface =
            TrackSurface::figure_eight(50.0, 8.0, 12, 5.0, HeightProfile::Cosine).unwrap();
        assert_closed_strip(&surface, 24);
    }

    #[test]
    fn ring_winding_faces_up() {
        let surface = TrackSurface::ring(50.0, 10.0, 16, 0.0).unwrap();
        for [a, b, c] in surface.mesh().triangles() {
            assert!((b - a).cross(c - a).y > 0.0);
        }
    }

    #[test]
    fn figure_eight_winding_faces_up() {
        let surface =
            TrackSurface::figure_eight(50.0, 8.0, 24, 0.0, HeightProfile::Cosine).unwrap();
        for [a, b, c] in surface.mesh().triangles() {
            assert!((b - a).cross(c - a).y > 0.0);
        }
    }

    #[test]
    fn waypoints_follow_direction_of_travel() {
        let surface = TrackSurface::ring(50.0, 10.0, 8, 0.0).unwrap();
        let w = surface.waypoints();
        // counter clockwise around y, starting on the x axis
        assert_relative_eq!(w[0].x, 50.0);
        assert_relative_eq!(w[2].z, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn rejects_segments_below_minimum() {
        assert!(matches!(
            TrackSurface::ring(50.0, 10.0, 2, 5.0),
            Err(GeometryError::TooFewSegments { .. })
        ));
        assert!(matches!(
            TrackSurface::figure_eight(50.0, 10.0, 0, 5.0, HeightProfile::Cosine),
            Err(GeometryError::TooFewSegments { .. })
        ));
    }

    #[test]
    fn samples_ring_surface_along_centerline() {
        let surface = TrackSurface::ring(100.0, 20.0, 64, 10.0).unwrap();
        let w = surface.waypoints();
        for i in 0..w.len() {
            // stay clear of the edges shared between triangles
            let query = w[i].lerp(w[w.next_index(i)], 0.3);
            let s = sample(&surface, query, 100.0);
            assert!(!s.miss);
            assert_relative_eq!(s.height, query.y, epsilon = 0.2);
            assert!(s.normal.y > 0.9);
        }
    }

    #[test]
    fn figure_eight_crossing_keeps_branch() {
        let surface =
            TrackSurface::figure_eight(100.0, 10.0, 32, 20.0, HeightProfile::Cosine).unwrap();
        let crossing = Vec3::new(0.5, 0.0, 0.3);

        let upper = sample(&surface, crossing + Vec3::Y * 18.0, 100.0);
        assert_relative_eq!(upper.height, 20.0, epsilon = 0.5);
        let lower = sample(&surface, crossing - Vec3::Y * 18.0, 100.0);
        assert_relative_eq!(lower.height, -20.0, epsilon = 0.5);
    }

    #[test]
    fn into_parts_moves_buffers_out() {
        let surface = TrackSurface::generate(TrackShape::default()).unwrap();
        let (mesh, waypoints) = surface.into_parts();
        assert_eq!(mesh.vertex_count(), waypoints.len() * 2);
    }
}
