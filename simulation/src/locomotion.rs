//! Moves the player craft according to the control signals of a tick.

use crate::craft::Craft;
use crate::params::FlightParams;

use track::MeshRaycast;
use utils::input::ControlSignals;
use utils::math::DirXZ;
use utils::Angle;

/// Turn inputs smaller in magnitude than `deadzone` are treated as no input.
pub fn apply_deadzone(turn: f32, deadzone: f32) -> f32 {
    if turn.abs() < deadzone {
        0.0
    } else {
        turn
    }
}

/// Speed after one tick of throttle and brake. Never negative and never above the max speed.
pub fn update_speed(speed: f32, throttle: bool, brake: bool, params: &FlightParams) -> f32 {
    let mut speed = if throttle {
        speed + params.acceleration
    } else {
        (speed - params.deceleration).max(0.0)
    };
    if brake {
        speed = (speed - params.brake).max(0.0);
    }
    speed.min(params.max_speed)
}

/// Heading in degrees after one tick of turning, wrapped into [0, 360).
pub fn steer(heading: f32, turn: f32, params: &FlightParams) -> f32 {
    let turn = apply_deadzone(turn, params.deadzone);
    (heading + turn * params.turn_rate).deg_normalize()
}

/// Advances the player one tick: heading, then planar position, then surface alignment, then speed.
pub fn update_player<M: MeshRaycast + ?Sized>(
    craft: &mut Craft,
    controls: &ControlSignals,
    surface: &M,
    params: &FlightParams,
) {
    craft.heading = steer(craft.heading, controls.turn, params);
    craft.position += DirXZ::from_heading(craft.heading) * craft.speed;
    craft.align_to_surface(surface, params);
    craft.speed = update_speed(craft.speed, controls.throttle, controls.brake, params);
}
