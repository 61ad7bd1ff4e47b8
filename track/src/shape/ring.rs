use super::{Cut, TrackProfile};
use crate::error::{finite, positive};
use crate::{GeometryError, GeometryResult};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use utils::consts::MIN_TRACK_SEGMENTS;

/// A circular track around the origin whose height rises and falls twice per lap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ring {
    /// Distance from the origin to the centerline.
    pub radius: f32,
    pub width: f32,
    pub segments: u32,
    pub height_amplitude: f32,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            radius: 500.0,
            width: 200.0,
            segments: 100,
            height_amplitude: 50.0,
        }
    }
}

impl Ring {
    pub fn new(radius: f32, width: f32, segments: u32, height_amplitude: f32) -> Self {
        Self {
            radius,
            width,
            segments,
            height_amplitude,
        }
    }

    /// Height of the track at the given angle in degrees.
    pub fn height_at(&self, angle: f32) -> f32 {
        self.height_amplitude * (2.0 * angle.to_radians()).sin()
    }
}

impl TrackProfile for Ring {
    fn segment_count(&self) -> u32 {
        self.segments
    }

    fn validate(&self) -> GeometryResult<()> {
        if self.segments < MIN_TRACK_SEGMENTS {
            return Err(GeometryError::TooFewSegments {
                segments: self.segments,
                min: MIN_TRACK_SEGMENTS,
            });
        }
        positive("radius", self.radius)?;
        positive("width", self.width)?;
        finite("height amplitude", self.height_amplitude)?;
        if self.width >= 2.0 * self.radius {
            return Err(GeometryError::WidthExceedsRing {
                width: self.width,
                radius: self.radius,
            });
        }
        Ok(())
    }

    fn compute_cuts(&self) -> Vec<Cut> {
        let angle_step = 360.0 / self.segments as f32;
        let half_width = self.width / 2.0;

        (0..self.segments)
            .map(|i| {
                let angle = i as f32 * angle_step;
                let (sin, cos) = angle.to_radians().sin_cos();
                let radial = Vec3::new(cos, 0.0, sin);
                let height = Vec3::Y * self.height_at(angle);
                Cut {
                    center: radial * self.radius + height,
                    inner: radial * (self.radius - half_width) + height,
                    outer: radial * (self.radius + half_width) + height,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use utils::VecUtils;

    #[test]
    fn rejects_degenerate_rings() {
        assert_eq!(
            Ring::new(10.0, 2.0, 2, 1.0).validate(),
            Err(GeometryError::TooFewSegments {
                segments: 2,
                min: 3
            })
        );
        assert!(Ring::new(-1.0, 2.0, 8, 1.0).validate().is_err());
        assert!(Ring::new(10.0, 0.0, 8, 1.0).validate().is_err());
        assert!(Ring::new(10.0, 2.0, 8, f32::NAN).validate().is_err());
        assert!(Ring::new(10.0, 20.0, 8, 1.0).validate().is_err());
        assert!(Ring::new(10.0, 2.0, 3, 0.0).validate().is_ok());
    }

    #[test]
    fn cuts_lie_on_circles_at_sine_height() {
        let ring = Ring::new(100.0, 20.0, 8, 10.0);
        let cuts = ring.compute_cuts();
        assert_eq!(cuts.len(), 8);

        // segment 1 sits at 45 degrees, where sin(2 * angle) peaks
        let cut = cuts[1];
        assert_relative_eq!(cut.center.y, 10.0, epsilon = 1e-4);
        assert_relative_eq!(cut.center.xz().length(), 100.0, epsilon = 1e-3);
        assert_relative_eq!(cut.inner.xz().length(), 90.0, epsilon = 1e-3);
        assert_relative_eq!(cut.outer.xz().length(), 110.0, epsilon = 1e-3);
        assert_eq!(cut.inner.y, cut.center.y);
        assert_eq!(cut.outer.y, cut.center.y);
    }
}
