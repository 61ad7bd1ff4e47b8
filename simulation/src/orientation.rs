//! Orients crafts along the surface they fly over.
//!
//! A surface normal and a heading are turned into an orthonormal frame. The heading alone gives a
//! planar forward estimate, which is tilted onto the surface by going through the right vector:
//! `right = up x forward`, then `forward = right x up`. The resulting rotation is applied with a
//! first order low pass filter so abrupt normal changes between ticks do not snap the craft.

use glam::{Mat3, Quat, Vec3};
use utils::consts::DIR_EPSILON;
use utils::math::DirXZ;

/// Right handed orthonormal frame. `up` is the surface normal and `forward` lies in the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Frame {
    /// Builds the frame for a craft with the given heading in degrees standing on a surface with
    /// the given normal. Returns `None` when the normal is parallel to the heading, in which case
    /// no right vector exists.
    pub fn new(normal: Vec3, heading: f32) -> Option<Self> {
        let up = normal.try_normalize()?;
        let initial_forward: Vec3 = DirXZ::from_heading(heading).into();

        let right = up.cross(initial_forward);
        if right.length() < DIR_EPSILON {
            return None;
        }
        let right = right.normalize();
        let forward = right.cross(up).normalize();

        Some(Self { right, up, forward })
    }

    /// Rotation matrix with the columns right, up and forward.
    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_cols(self.right, self.up, self.forward)
    }

    pub fn rotation(self) -> Quat {
        Quat::from_mat3(&self.to_mat3()).normalize()
    }
}

/// The frame that aligns a craft with the surface. See [`Frame::new`].
pub fn build_frame(normal: Vec3, heading: f32) -> Option<Frame> {
    Frame::new(normal, heading)
}

/// Rotates `current` the fraction `alpha` of the way towards `target` along the shortest arc.
pub fn smooth(current: Quat, target: Quat, alpha: f32) -> Quat {
    current.slerp(target, alpha).normalize()
}

/// Low pass filtered orientation of a craft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    current: Quat,
    /// Most recent frame that could be built. Degenerate samples keep steering towards it.
    target: Quat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::snapped(Quat::IDENTITY)
    }
}

impl Orientation {
    /// An orientation already at rest at `rotation`.
    pub fn snapped(rotation: Quat) -> Self {
        Self {
            current: rotation,
            target: rotation,
        }
    }

    pub fn current(&self) -> Quat {
        self.current
    }

    /// Moves one tick towards the frame of `normal` and `heading`. If the frame is degenerate the
    /// previous target is held.
    pub fn update(&mut self, normal: Vec3, heading: f32, alpha: f32) {
        match build_frame(normal, heading) {
            Some(frame) => self.target = frame.rotation(),
            None => log::trace!("degenerate frame for normal {normal} at heading {heading}"),
        }
        self.current = smooth(self.current, self.target, alpha);
    }
}
