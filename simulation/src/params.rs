//! Tunable constants of the flight model. Rates are per tick, angles in degrees.

use crate::error::{positive, ParamsError, ParamsResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Turn inputs with a smaller magnitude than this are ignored.
    pub deadzone: f32,
    /// Heading change in degrees per tick at full turn input.
    pub turn_rate: f32,
    /// Speed gained per tick while the throttle is held.
    pub acceleration: f32,
    /// Speed lost per tick while the throttle is released.
    pub deceleration: f32,
    /// Additional speed lost per tick while the brake is held.
    pub brake: f32,
    pub max_speed: f32,
    /// Height a craft hovers above the sampled surface.
    pub clearance: f32,
    /// Fraction of the way the orientation is rotated towards the surface frame each tick.
    pub smoothing: f32,
    /// Distance above and below a craft the surface rays start from. Must exceed the height
    /// variation of the track.
    pub ray_offset: f32,
    /// Yaw in degrees applied to exported transforms to turn model space forward onto +z.
    pub model_yaw_offset: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            deadzone: 0.1,
            turn_rate: 2.0,
            acceleration: 0.05,
            deceleration: 0.02,
            brake: 0.1,
            max_speed: 5.0,
            clearance: 2.0,
            smoothing: 0.1,
            ray_offset: 100.0,
            model_yaw_offset: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcParams {
    pub count: usize,
    /// Constant speed every npc flies at.
    pub speed: f32,
    /// An npc has reached its target waypoint once it is closer than this to the point hovering
    /// `clearance` above it.
    pub arrival_threshold: f32,
}

impl Default for NpcParams {
    fn default() -> Self {
        Self {
            count: 3,
            speed: 2.0,
            arrival_threshold: 5.0,
        }
    }
}

impl FlightParams {
    pub fn validate(&self) -> ParamsResult<()> {
        positive("max speed", self.max_speed)?;
        positive("ray offset", self.ray_offset)?;
        Ok(())
    }
}

impl NpcParams {
    /// Npc speeds are exported like player speeds, so they share the player's speed range.
    pub fn validate(&self, flight: &FlightParams) -> ParamsResult<()> {
        if !(0.0..=flight.max_speed).contains(&self.speed) {
            return Err(ParamsError::NpcSpeedOutOfRange {
                speed: self.speed,
                max_speed: flight.max_speed,
            });
        }
        positive("npc arrival threshold", self.arrival_threshold)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let flight = FlightParams::default();
        assert_eq!(flight.validate(), Ok(()));
        assert_eq!(NpcParams::default().validate(&flight), Ok(()));
    }

    #[test]
    fn npc_speed_must_be_reachable() {
        let flight = FlightParams::default();
        for speed in [30.0, -1.0, f32::NAN] {
            let npc = NpcParams {
                speed,
                ..NpcParams::default()
            };
            assert!(
                matches!(
                    npc.validate(&flight),
                    Err(ParamsError::NpcSpeedOutOfRange { .. })
                ),
                "{speed}"
            );
        }
        let at_max = NpcParams {
            speed: flight.max_speed,
            ..NpcParams::default()
        };
        assert_eq!(at_max.validate(&flight), Ok(()));
    }

    #[test]
    fn arrival_threshold_must_be_positive() {
        let flight = FlightParams::default();
        let npc = NpcParams {
            arrival_threshold: 0.0,
            ..NpcParams::default()
        };
        assert_eq!(
            npc.validate(&flight),
            Err(ParamsError::NotPositive {
                name: "npc arrival threshold",
                value: 0.0
            })
        );
        let npc = NpcParams {
            arrival_threshold: flight.clearance,
            ..NpcParams::default()
        };
        assert_eq!(npc.validate(&flight), Ok(()));
    }

    #[test]
    fn flight_needs_positive_max_speed() {
        let flight = FlightParams {
            max_speed: -1.0,
            ..FlightParams::default()
        };
        assert!(flight.validate().is_err());
    }
}
