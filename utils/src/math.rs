//! Contains utils for math as traits that are implemented for different math
//! types.

use glam::*;

mod dir;
mod mat;
mod vec;

pub use dir::DirXZ;
pub use mat::{Mat3Utils, Mat4Utils};
pub use vec::VecUtils;

/// Defines functions associated with angle computations. Angles are given in degrees unless the
/// function name says otherwise.
pub trait Angle {
    /// Wraps the angle into [0, 360).
    fn deg_normalize(self) -> Self;
}

impl Angle for f32 {
    fn deg_normalize(self) -> Self {
        self.rem_euclid(360.0)
    }
}

/// Represents a 3 dimensional ray. The direction is not required to be normalized.
#[derive(Copy, Clone, Default, Debug)]
pub struct Ray {
    pub pos: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Ray { pos, dir }
    }

    /// A ray starting `offset` above `pos` pointing straight down.
    pub fn down_from(pos: Vec3, offset: f32) -> Self {
        Ray::new(pos + Vec3::Y * offset, Vec3::NEG_Y)
    }

    /// A ray starting `offset` below `pos` pointing straight up.
    pub fn up_from(pos: Vec3, offset: f32) -> Self {
        Ray::new(pos - Vec3::Y * offset, Vec3::Y)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.pos + self.dir * t
    }
}
