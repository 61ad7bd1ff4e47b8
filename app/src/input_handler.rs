//! Handles the input system for surface racer. Input reaches the simulation as [`ControlSignals`]
//! once per tick. The shipped source replays a recorded script.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use utils::input::{Action, ControlSignals};
use utils::loader;

/// Anything that can be polled for the signals of the next tick.
pub trait InputSource {
    fn poll(&mut self) -> ControlSignals;
}

fn one_tick() -> u32 {
    1
}

/// A turn axis value and a set of actions held for a number of ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStep {
    #[serde(default = "one_tick")]
    pub ticks: u32,
    #[serde(default)]
    pub turn: f32,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// This type corresponds to the structure of the yaml files that define input scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<InputStep>,
}

impl InputScript {
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a script relative to the res directory.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let file = loader::load_string(path)?;
        let script = Self::from_yaml(&file)?;
        log::info!("loaded input script {path} with {} steps", script.steps.len());
        Ok(script)
    }

    /// Total number of ticks the script covers.
    pub fn len_ticks(&self) -> u64 {
        self.steps.iter().map(|step| step.ticks as u64).sum()
    }
}

pub struct InputHandler {
    /// Steps left to replay. `None` gives no input forever.
    steps: Option<VecDeque<InputStep>>,
    /// Ticks the front step still has to be held for.
    remaining: u32,
    /// Whether confirm was held last tick. Confirm is only reported on the tick it goes down.
    confirm_held: bool,
}

impl InputHandler {
    pub fn from_script(script: InputScript) -> Self {
        let mut steps: VecDeque<_> = script.steps.into();
        steps.retain(|step| step.ticks > 0);
        let remaining = steps.front().map_or(0, |step| step.ticks);
        Self {
            steps: Some(steps),
            remaining,
            confirm_held: false,
        }
    }

    /// An input source that never touches the controls and never quits.
    pub fn idle() -> Self {
        Self {
            steps: None,
            remaining: 0,
            confirm_held: false,
        }
    }

    /// Returns the step to apply this tick, moving on to the next step when the current one has
    /// been held long enough.
    fn next_step(&mut self) -> Option<&InputStep> {
        let steps = self.steps.as_mut()?;
        if self.remaining == 0 {
            steps.pop_front();
            self.remaining = steps.front()?.ticks;
        }
        self.remaining -= 1;
        steps.front()
    }
}

impl InputSource for InputHandler {
    fn poll(&mut self) -> ControlSignals {
        if self.steps.is_none() {
            return ControlSignals::default();
        }
        let Some(step) = self.next_step() else {
            return ControlSignals {
                quit: true,
                ..ControlSignals::default()
            };
        };

        let mut signals = ControlSignals::from_actions(step.turn, &step.actions);
        let confirm_down = signals.confirm;
        signals.confirm = confirm_down && !self.confirm_held;
        self.confirm_held = confirm_down;
        signals
    }
}
