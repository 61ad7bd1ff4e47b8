use std::ops::{Deref, Mul};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DIR, DIR_EPSILON};

use super::vec::VecUtils;

/// Represents a direction in the xz plane that is always guaranteed to be normalized.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirXZ(Vec3);

impl Default for DirXZ {
    fn default() -> Self {
        Self(DEFAULT_DIR)
    }
}

impl From<Vec3> for DirXZ {
    fn from(value: Vec3) -> Self {
        let vec = value.xz();
        if vec.length_squared() < DIR_EPSILON * DIR_EPSILON {
            return Self(DEFAULT_DIR);
        }
        Self(vec.normalize())
    }
}

impl From<DirXZ> for Vec3 {
    fn from(value: DirXZ) -> Self {
        value.0
    }
}

impl Deref for DirXZ {
    type Target = Vec3;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DirXZ {
    /// The direction a heading points in. A heading of 0 degrees points along +z and 90 degrees
    /// along +x.
    pub fn from_heading(heading: f32) -> Self {
        let (sin, cos) = heading.to_radians().sin_cos();
        Vec3::new(sin, 0.0, cos).into()
    }

    /// The heading in degrees in (-180, 180] corresponding to this direction.
    pub fn heading(self) -> f32 {
        self.0.x.atan2(self.0.z).to_degrees()
    }
}

impl Mul<f32> for DirXZ {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Self::Output {
        self.0 * rhs
    }
}
