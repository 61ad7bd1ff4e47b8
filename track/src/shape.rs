mod figure_eight;
mod ring;

pub use figure_eight::{FigureEight, HeightProfile};
pub use ring::Ring;

use crate::GeometryResult;

use enum_dispatch::enum_dispatch;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One cross section of a track: the centerline point and the two edge points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    pub center: Vec3,
    pub inner: Vec3,
    pub outer: Vec3,
}

#[enum_dispatch]
pub trait TrackProfile {
    /// Number of cross track segments, which is also the number of waypoints.
    fn segment_count(&self) -> u32;

    /// Checks the parameters. Must succeed before [`TrackProfile::compute_cuts`] is called.
    fn validate(&self) -> GeometryResult<()>;

    /// Returns one cut per segment ordered along the direction of travel.
    fn compute_cuts(&self) -> Vec<Cut>;
}

/// The kinds of track that can be generated.
#[enum_dispatch(TrackProfile)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackShape {
    Ring(Ring),
    FigureEight(FigureEight),
}

impl Default for TrackShape {
    fn default() -> Self {
        TrackShape::Ring(Ring::default())
    }
}

impl TrackShape {
    pub fn name(&self) -> &'static str {
        match self {
            TrackShape::Ring(_) => "ring",
            TrackShape::FigureEight(_) => "figure eight",
        }
    }
}
