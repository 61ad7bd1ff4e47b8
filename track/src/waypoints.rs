use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Centerline points of a closed track, ordered along the direction of travel. The point after
/// the last one is the first one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoints(Vec<Vec3>);

impl core::ops::Deref for Waypoints {
    type Target = [Vec3];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Waypoints {
    pub fn from_vec(vec: Vec<Vec3>) -> Self {
        Self(vec)
    }

    /// Index of the waypoint following `index`, wrapping around at the end of the loop.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.0.len()
    }

    /// Starting waypoint for craft `k` out of `n`, spreading the craft evenly around the loop.
    pub fn spawn_index(&self, k: usize, n: usize) -> usize {
        let count = self.0.len();
        if n == 0 || count == 0 {
            return 0;
        }
        (k * (count / n)) % count
    }

    /// Length of the closed loop through all waypoints.
    pub fn compute_length(&self) -> f32 {
        let mut result = 0.;
        for i in 0..self.0.len() {
            result += (self.0[i] - self.0[self.next_index(i)]).length();
        }
        result
    }
}
