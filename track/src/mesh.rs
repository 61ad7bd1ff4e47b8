use glam::{Vec2, Vec3};

/// A vertex laid out the way it is uploaded to the gpu.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TrackVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    /// Placeholder up normal. The real surface normal is sampled at runtime.
    pub normal: [f32; 3],
}

impl TrackVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.into(),
            uv: uv.into(),
            normal: Vec3::Y.into(),
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Triangle mesh of a track. Every index references a vertex in `vertices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackMesh {
    pub vertices: Vec<TrackVertex>,
    pub indices: Vec<u32>,
}

impl TrackMesh {
    /// Builds a mesh from raw positions and triangle indices. Uvs are left at zero.
    pub fn from_triangles(positions: &[Vec3], indices: Vec<u32>) -> Self {
        let vertices = positions
            .iter()
            .map(|&p| TrackVertex::new(p, Vec2::ZERO))
            .collect();
        Self { vertices, indices }
    }

    /// Builds a closed strip from cross track cuts given as (inner, outer) edge points. Cut `i`
    /// becomes vertices `2i` (inner) and `2i + 1` (outer), and is connected to cut `i + 1` by two
    /// triangles. The last cut is connected back to the first.
    pub fn closed_strip(cuts: &[(Vec3, Vec3)]) -> Self {
        let n = cuts.len() as u32;
        let mut vertices = Vec::with_capacity(cuts.len() * 2);
        let mut indices = Vec::with_capacity(cuts.len() * 6);

        for (i, &(inner, outer)) in cuts.iter().enumerate() {
            let u = i as f32 / n as f32;
            vertices.push(TrackVertex::new(inner, Vec2::new(u, 0.0)));
            vertices.push(TrackVertex::new(outer, Vec2::new(u, 1.0)));
        }

        for i in 0..n {
            let curr_inner = i * 2;
            let curr_outer = curr_inner + 1;
            let next_inner = ((i + 1) % n) * 2;
            let next_outer = next_inner + 1;
            indices.extend_from_slice(&[
                curr_inner, next_inner, curr_outer, //
                curr_outer, next_inner, next_outer,
            ]);
        }

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].pos(),
                self.vertices[tri[1] as usize].pos(),
                self.vertices[tri[2] as usize].pos(),
            ]
        })
    }

    /// Vertex data as bytes, ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, ready for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
