//! Flight model for crafts hovering over a generated track: orientation, player locomotion, npc
//! navigation and the state owning all of it.

mod craft;
mod error;
pub mod locomotion;
mod navigator;
pub mod orientation;
mod params;
mod sim_handler;

pub use craft::{Craft, CraftPose};
pub use error::{ParamsError, ParamsResult};
pub use navigator::{spawn_npcs, NpcCraft};
pub use orientation::{build_frame, smooth, Frame, Orientation};
pub use params::{FlightParams, NpcParams};
pub use sim_handler::{CraftInstance, SimHandler};

pub trait SimController {
    fn pause(&mut self);
    fn unpause(&mut self);
    fn is_paused(&self) -> bool;
}

/// Read access to the outcome of the latest tick, for rendering or recording.
pub trait SimData {
    /// The player first, then the npcs in order.
    fn craft_poses(&self) -> Vec<CraftPose>;
    /// Same order as [`SimData::craft_poses`].
    fn craft_instances(&self) -> Vec<CraftInstance>;
}
