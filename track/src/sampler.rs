use crate::{MeshRaycast, RayHit};

use glam::Vec3;
use utils::Ray;

/// Ground height and normal under a position. Computed fresh every tick, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    pub normal: Vec3,
    /// Neither ray hit the surface. Height is then the query height and the normal points up.
    pub miss: bool,
}

/// Samples the surface under (or over) `pos` by casting one ray down from `ray_offset` above the
/// query and one ray up from `ray_offset` below it. `ray_offset` must exceed the largest height
/// variation of the track.
///
/// `pos.y` is the height the caller was last at. When both rays hit, the hit closest to that
/// height wins, which is what keeps a craft on its own branch where a track crosses itself.
/// Equally close hits resolve to the one found from above.
pub fn sample<M: MeshRaycast + ?Sized>(mesh: &M, pos: Vec3, ray_offset: f32) -> SurfaceSample {
    let from_above = mesh.raycast(&Ray::down_from(pos, ray_offset));
    let from_below = mesh.raycast(&Ray::up_from(pos, ray_offset));

    let closest = |hit: &RayHit| (hit.point.y - pos.y).abs();
    let hit = match (from_above, from_below) {
        (Some(above), Some(below)) => {
            if closest(&above) <= closest(&below) {
                above
            } else {
                below
            }
        }
        (Some(hit), None) | (None, Some(hit)) => hit,
        (None, None) => {
            log::trace!("no surface under ({:.2}, {:.2})", pos.x, pos.z);
            return SurfaceSample {
                height: pos.y,
                normal: Vec3::Y,
                miss: true,
            };
        }
    };

    SurfaceSample {
        height: hit.point.y,
        normal: hit.normal,
        miss: false,
    }
}
