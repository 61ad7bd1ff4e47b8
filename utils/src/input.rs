//! Defines all types associated with the input signals the simulation consumes. Where the signals
//! come from (gamepad, keyboard, a replayed script) is up to the caller.

use serde::{Deserialize, Serialize};

/// Enum containing all boolean actions that can be held during a tick.
#[derive(EnumString, Display, PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Throttle,
    Brake,
    Confirm,
    Exit,
}

/// The signals sampled once per tick and handed to the simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ControlSignals {
    /// Analog turn axis in [-1, 1]. Positive turns towards +x when heading along +z.
    pub turn: f32,
    pub throttle: bool,
    pub brake: bool,
    /// Menu confirm. Edge triggered: only true on the tick the button went down.
    pub confirm: bool,
    pub quit: bool,
}

impl ControlSignals {
    /// Builds the signals for a tick from the turn axis and the actions currently held.
    pub fn from_actions(turn: f32, actions: &[Action]) -> Self {
        actions.iter().fold(
            Self {
                turn: turn.clamp(-1.0, 1.0),
                ..Self::default()
            },
            |signals, action| match action {
                Action::Throttle => Self {
                    throttle: true,
                    ..signals
                },
                Action::Brake => Self {
                    brake: true,
                    ..signals
                },
                Action::Confirm => Self {
                    confirm: true,
                    ..signals
                },
                Action::Exit => Self {
                    quit: true,
                    ..signals
                },
            },
        )
    }
}
