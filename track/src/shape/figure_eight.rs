use super::{Cut, TrackProfile};
use crate::error::{finite, positive};
use crate::{GeometryError, GeometryResult};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use utils::consts::{DIR_EPSILON, MIN_TRACK_SEGMENTS, TANGENT_DT};
use utils::VecUtils;

/// How the height of a figure eight varies with the curve parameter t.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightProfile {
    /// `cos(t)`. The two branches meet the crossing at t = 0 and t = pi at opposite heights, which
    /// makes the crossing an over/underpass.
    #[default]
    Cosine,
    /// `sin(2t)`. Both branches cross at height zero, so the track intersects itself.
    DoubleSine,
}

impl HeightProfile {
    pub fn height(self, t: f32, amplitude: f32) -> f32 {
        match self {
            HeightProfile::Cosine => amplitude * t.cos(),
            HeightProfile::DoubleSine => amplitude * (2.0 * t).sin(),
        }
    }
}

/// A lemniscate shaped track crossing itself at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureEight {
    pub loop_radius: f32,
    pub width: f32,
    /// Segments in each of the two loops, the track has twice as many in total.
    pub segments_per_loop: u32,
    pub height_amplitude: f32,
    pub height_profile: HeightProfile,
}

impl Default for FigureEight {
    fn default() -> Self {
        Self {
            loop_radius: 500.0,
            width: 100.0,
            segments_per_loop: 50,
            height_amplitude: 50.0,
            height_profile: HeightProfile::default(),
        }
    }
}

impl FigureEight {
    pub fn new(
        loop_radius: f32,
        width: f32,
        segments_per_loop: u32,
        height_amplitude: f32,
        height_profile: HeightProfile,
    ) -> Self {
        Self {
            loop_radius,
            width,
            segments_per_loop,
            height_amplitude,
            height_profile,
        }
    }

    /// Position on the centerline for the curve parameter t in [0, 2pi).
    pub fn centerline(&self, t: f32) -> Vec3 {
        let mut pos = self.horizontal(t);
        pos.y = self.height_profile.height(t, self.height_amplitude);
        pos
    }

    fn horizontal(&self, t: f32) -> Vec3 {
        let (sin, cos) = t.sin_cos();
        Vec3::new(self.loop_radius * sin, 0.0, self.loop_radius * sin * cos)
    }
}

/// Horizontal direction from the centerline towards the inner edge, given the forward difference
/// along the curve. Tangents too short to normalize keep the previous perpendicular.
pub(crate) fn strip_perpendicular(tangent: Vec3, previous: Vec3) -> Vec3 {
    let tangent = tangent.xz();
    let length = tangent.length();
    if length > DIR_EPSILON {
        (tangent / length).right_hand()
    } else {
        previous
    }
}

impl TrackProfile for FigureEight {
    fn segment_count(&self) -> u32 {
        self.segments_per_loop.saturating_mul(2)
    }

    fn validate(&self) -> GeometryResult<()> {
        if self.segments_per_loop < MIN_TRACK_SEGMENTS {
            return Err(GeometryError::TooFewSegments {
                segments: self.segments_per_loop,
                min: MIN_TRACK_SEGMENTS,
            });
        }
        positive("loop radius", self.loop_radius)?;
        positive("width", self.width)?;
        finite("height amplitude", self.height_amplitude)?;
        Ok(())
    }

    fn compute_cuts(&self) -> Vec<Cut> {
        let total = self.segment_count();
        let half_width = self.width / 2.0;
        let mut perp = Vec3::X;

        (0..total)
            .map(|i| {
                let t = i as f32 / total as f32 * TAU;
                let center = self.centerline(t);
                let tangent = self.horizontal(t + TANGENT_DT) - self.horizontal(t);
                perp = strip_perpendicular(tangent, perp);
                Cut {
                    center,
                    inner: center + perp * half_width,
                    outer: center - perp * half_width,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn crossing_separates_under_cosine_profile() {
        let track = FigureEight::new(100.0, 10.0, 16, 20.0, HeightProfile::Cosine);
        let (a, b) = (track.centerline(0.0), track.centerline(PI));
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
        assert_relative_eq!(a.y, 20.0);
        assert_relative_eq!(b.y, -20.0, epsilon = 1e-4);
    }

    #[test]
    fn crossing_coincides_under_double_sine_profile() {
        let track = FigureEight::new(100.0, 10.0, 16, 20.0, HeightProfile::DoubleSine);
        let (a, b) = (track.centerline(0.0), track.centerline(PI));
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
    }

    #[test]
    fn cuts_span_track_width() {
        let track = FigureEight::new(100.0, 10.0, 16, 20.0, HeightProfile::Cosine);
        let cuts = track.compute_cuts();
        assert_eq!(cuts.len(), 32);
        for cut in cuts {
            assert_relative_eq!((cut.inner - cut.outer).length(), 10.0, epsilon = 1e-3);
            assert_relative_eq!(cut.inner.y, cut.center.y);
            assert_relative_eq!((cut.inner - cut.center).dot(Vec3::Y), 0.0);
        }
    }

    #[test]
    fn degenerate_tangent_keeps_previous_perpendicular() {
        let previous = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(strip_perpendicular(Vec3::ZERO, previous), previous);
        assert_eq!(strip_perpendicular(Vec3::new(0.0, 3.0, 0.0), previous), previous);

        let perp = strip_perpendicular(Vec3::new(2.0, 0.0, 0.0), previous);
        assert_relative_eq!(perp.z, 1.0);
        assert_relative_eq!(perp.x, 0.0);
    }

    #[test]
    fn rejects_too_few_segments_per_loop() {
        let track = FigureEight::new(100.0, 10.0, 2, 20.0, HeightProfile::Cosine);
        assert!(matches!(
            track.validate(),
            Err(GeometryError::TooFewSegments { segments: 2, .. })
        ));
    }
}
