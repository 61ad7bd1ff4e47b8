use simulation::{
    CraftPose, FlightParams, NpcParams, ParamsResult, SimController, SimData, SimHandler,
};
use track::TrackSurface;
use utils::input::ControlSignals;

/// Game state above the simulation. Besides ticking the simulation it only handles pausing.
pub struct State {
    sim: SimHandler,
}

impl State {
    pub fn new(
        surface: TrackSurface,
        flight: FlightParams,
        npc: NpcParams,
    ) -> ParamsResult<Self> {
        Ok(Self {
            sim: SimHandler::new(surface, flight, npc)?,
        })
    }

    pub fn update(&mut self, controls: &ControlSignals) {
        if controls.confirm {
            self.toggle_pause();
        }
        self.sim.update(controls);
    }

    fn toggle_pause(&mut self) {
        if self.sim.is_paused() {
            self.sim.unpause();
            log::info!("resumed");
        } else {
            self.sim.pause();
            log::info!("paused");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.sim.is_paused()
    }

    pub fn sim(&self) -> &SimHandler {
        &self.sim
    }

    /// Poses after the latest tick, player first.
    pub fn poses(&self) -> Vec<CraftPose> {
        self.sim.craft_poses()
    }
}
