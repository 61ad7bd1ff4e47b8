use crate::craft::{Craft, CraftPose};
use crate::locomotion;
use crate::navigator::{spawn_npcs, NpcCraft};
use crate::params::{FlightParams, NpcParams};
use crate::{ParamsResult, SimController, SimData};

use glam::Mat3;
use track::TrackSurface;
use utils::input::ControlSignals;
use utils::math::{Mat3Utils, Mat4Utils};

/// Per craft transform in the layout instanced renderers consume.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CraftInstance {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
}

impl CraftInstance {
    fn new(pose: &CraftPose, yaw_offset: f32) -> Self {
        let model = pose.model_matrix(yaw_offset);
        Self {
            model: model.to_4x4(),
            normal: Mat3::from_mat4(model).to_3x3(),
        }
    }
}

/// Owns the track and every craft on it. Nothing outside the handler mutates a craft, and the
/// surface is read only once generated.
#[derive(Debug, Clone)]
pub struct SimHandler {
    surface: TrackSurface,
    player: Craft,
    npcs: Vec<NpcCraft>,
    flight: FlightParams,
    npc_params: NpcParams,
    paused: bool,
    ticks: u64,
}

impl SimHandler {
    /// Puts the player on the first waypoint facing the second and spreads the npcs around the
    /// loop. Fails if the params are out of range.
    pub fn new(
        surface: TrackSurface,
        flight: FlightParams,
        npc_params: NpcParams,
    ) -> ParamsResult<Self> {
        flight.validate()?;
        npc_params.validate(&flight)?;

        let waypoints = surface.waypoints();
        let player = Craft::facing(
            waypoints[0],
            waypoints[waypoints.next_index(0)],
            flight.clearance,
        );
        let npcs = spawn_npcs(waypoints, npc_params.count, &flight);
        log::info!(
            "spawned player at {} and {} npcs on the {} track",
            player.position,
            npcs.len(),
            surface.shape().name()
        );

        Ok(Self {
            surface,
            player,
            npcs,
            flight,
            npc_params,
            paused: false,
            ticks: 0,
        })
    }

    /// Advances one tick. The player moves first, then the npcs in order. All poses are final
    /// when this returns.
    pub fn update(&mut self, controls: &ControlSignals) {
        if self.paused {
            return;
        }

        locomotion::update_player(&mut self.player, controls, &self.surface, &self.flight);
        for npc in self.npcs.iter_mut() {
            npc.update(
                self.surface.waypoints(),
                &self.surface,
                &self.flight,
                &self.npc_params,
            );
        }
        self.ticks += 1;
    }

    pub fn surface(&self) -> &TrackSurface {
        &self.surface
    }

    pub fn player(&self) -> &Craft {
        &self.player
    }

    pub fn npcs(&self) -> &[NpcCraft] {
        &self.npcs
    }

    /// Number of ticks simulated while unpaused.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl SimController for SimHandler {
    fn pause(&mut self) {
        self.paused = true;
    }

    fn unpause(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl SimData for SimHandler {
    fn craft_poses(&self) -> Vec<CraftPose> {
        std::iter::once(&self.player)
            .chain(self.npcs.iter().map(|npc| &npc.craft))
            .map(Craft::pose)
            .collect()
    }

    fn craft_instances(&self) -> Vec<CraftInstance> {
        self.craft_poses()
            .iter()
            .map(|pose| CraftInstance::new(pose, self.flight.model_yaw_offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Mat4, Vec3};

    fn handler() -> SimHandler {
        let surface = TrackSurface::ring(500.0, 200.0, 100, 50.0).unwrap();
        SimHandler::new(surface, FlightParams::default(), NpcParams::default()).unwrap()
    }

    #[test]
    fn player_spawns_on_first_waypoint() {
        let sim = handler();
        let first = sim.surface().waypoints()[0];
        let player = sim.player();
        assert_eq!(player.position, first + Vec3::Y * 2.0);
        assert_eq!(player.speed, 0.0);
        // ring runs counter clockwise from +x, so the second waypoint lies towards +z
        assert!(player.heading.abs() < 10.0);
        assert_eq!(sim.npcs().len(), 3);
        assert_eq!(sim.craft_poses().len(), 4);
    }

    #[test]
    fn paused_handler_does_not_advance() {
        let mut sim = handler();
        let controls = ControlSignals {
            throttle: true,
            turn: 1.0,
            ..ControlSignals::default()
        };
        sim.pause();
        assert!(sim.is_paused());
        let before = sim.craft_poses();
        for _ in 0..10 {
            sim.update(&controls);
        }
        assert_eq!(sim.craft_poses(), before);
        assert_eq!(sim.ticks(), 0);

        sim.unpause();
        sim.update(&controls);
        assert_ne!(sim.craft_poses(), before);
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn instances_carry_pose_translation() {
        let mut sim = handler();
        sim.update(&ControlSignals::default());
        let poses = sim.craft_poses();
        let instances = sim.craft_instances();
        assert_eq!(instances.len(), poses.len());
        for (pose, instance) in poses.iter().zip(instances.iter()) {
            assert_relative_eq!(instance.model[3][0], pose.position.x);
            assert_relative_eq!(instance.model[3][1], pose.position.y);
            assert_relative_eq!(instance.model[3][2], pose.position.z);
            assert_eq!(instance.model[3][3], 1.0);
        }
        assert_eq!(
            bytemuck::cast_slice::<CraftInstance, u8>(&instances).len(),
            instances.len() * 100
        );
    }

    #[test]
    fn yaw_offset_only_changes_rotation() {
        let sim = handler();
        let pose = sim.craft_poses()[0];
        let raw = Mat4::from_pose(pose.orientation, pose.position);
        let offset = pose.model_matrix(90.0);
        assert_eq!(raw.w_axis, offset.w_axis);
        assert!(raw.x_axis.abs_diff_eq(offset.z_axis, 1e-6));
    }

    #[test]
    fn rejects_npcs_faster_than_max_speed() {
        let surface = TrackSurface::ring(500.0, 200.0, 100, 50.0).unwrap();
        let npc = NpcParams {
            speed: 30.0,
            ..NpcParams::default()
        };
        let result = SimHandler::new(surface, FlightParams::default(), npc);
        assert_eq!(
            result.err(),
            Some(crate::ParamsError::NpcSpeedOutOfRange {
                speed: 30.0,
                max_speed: 5.0
            })
        );
    }

    #[test]
    fn npc_speed_stays_in_range() {
        let mut sim = handler();
        for _ in 0..100 {
            sim.update(&ControlSignals::default());
        }
        for pose in sim.craft_poses() {
            assert!((0.0..=5.0).contains(&pose.speed), "{}", pose.speed);
        }
    }
}
