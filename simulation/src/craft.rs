use crate::orientation::Orientation;
use crate::params::FlightParams;

use glam::{Mat4, Quat, Vec3};
use track::{MeshRaycast, SurfaceSample};
use utils::math::{DirXZ, Mat4Utils};

/// Snapshot of a craft handed to the outside after a tick has completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftPose {
    pub position: Vec3,
    /// Degrees, 0 along +z and 90 along +x.
    pub heading: f32,
    pub orientation: Quat,
    pub speed: f32,
}

impl CraftPose {
    /// The planar direction the craft is heading in.
    pub fn forward(&self) -> DirXZ {
        DirXZ::from_heading(self.heading)
    }

    /// Model matrix for rendering. `yaw_offset` is applied in model space before the orientation,
    /// turning the forward axis of the model onto +z.
    pub fn model_matrix(&self, yaw_offset: f32) -> Mat4 {
        let rotation = self.orientation * Quat::from_rotation_y(yaw_offset.to_radians());
        Mat4::from_pose(rotation, self.position)
    }
}

/// A craft hovering over a track surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Craft {
    pub position: Vec3,
    pub heading: f32,
    pub speed: f32,
    orientation: Orientation,
    /// Surface height found the previous tick. Used as the reference height when sampling, so a
    /// craft stays on its own branch where the track crosses itself.
    surface_height: f32,
}

impl Craft {
    /// Places a craft `clearance` above `ground`, at rest, with identity orientation.
    pub fn new(ground: Vec3, heading: f32, clearance: f32) -> Self {
        Self {
            position: ground + Vec3::Y * clearance,
            heading,
            speed: 0.0,
            orientation: Orientation::default(),
            surface_height: ground.y,
        }
    }

    /// Places a craft on waypoint `from` facing waypoint `towards`.
    pub fn facing(from: Vec3, towards: Vec3, clearance: f32) -> Self {
        let heading = DirXZ::from(towards - from).heading();
        Self::new(from, heading, clearance)
    }

    pub fn pose(&self) -> CraftPose {
        CraftPose {
            position: self.position,
            heading: self.heading,
            orientation: self.orientation.current(),
            speed: self.speed,
        }
    }

    pub fn orientation(&self) -> Quat {
        self.orientation.current()
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }

    /// Snaps the craft onto the surface under its current (x, z) and moves its orientation one
    /// smoothing step towards the surface frame. Must run after the position of this tick has
    /// been updated.
    pub fn align_to_surface<M: MeshRaycast + ?Sized>(
        &mut self,
        surface: &M,
        params: &FlightParams,
    ) -> SurfaceSample {
        let query = Vec3::new(self.position.x, self.surface_height, self.position.z);
        let sample = track::sample(surface, query, params.ray_offset);

        self.surface_height = sample.height;
        self.position.y = sample.height + params.clearance;
        self.orientation
            .update(sample.normal, self.heading, params.smoothing);

        sample
    }
}
