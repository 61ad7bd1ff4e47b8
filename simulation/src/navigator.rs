//! Steers npc crafts from waypoint to waypoint around the track.

use crate::craft::Craft;
use crate::params::{FlightParams, NpcParams};

use glam::Vec3;
use track::{MeshRaycast, Waypoints};
use utils::math::DirXZ;

/// A craft without analog input that follows the waypoints of the track at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcCraft {
    pub craft: Craft,
    /// Index of the waypoint last reached. The npc flies towards the one after it.
    current_waypoint: usize,
}

impl NpcCraft {
    /// Spawns npc `k` out of `n` on its share of the loop, facing the waypoint after it.
    pub fn spawn(waypoints: &Waypoints, k: usize, n: usize, params: &FlightParams) -> Self {
        let current_waypoint = waypoints.spawn_index(k, n);
        let next = waypoints.next_index(current_waypoint);
        let craft = Craft::facing(
            waypoints[current_waypoint],
            waypoints[next],
            params.clearance,
        );

        Self {
            craft,
            current_waypoint,
        }
    }

    pub fn current_waypoint(&self) -> usize {
        self.current_waypoint
    }

    pub fn target_waypoint(&self, waypoints: &Waypoints) -> usize {
        waypoints.next_index(self.current_waypoint)
    }

    /// Advances the npc one tick towards the point hovering `clearance` above its target waypoint
    /// and aligns it with the surface. The step is `speed` long, or the remaining distance when
    /// the hover point is closer, so the npc stops on it instead of passing it. Arrival is
    /// measured against the hover point.
    pub fn update<M: MeshRaycast + ?Sized>(
        &mut self,
        waypoints: &Waypoints,
        surface: &M,
        flight: &FlightParams,
        npc: &NpcParams,
    ) {
        let target_index = self.target_waypoint(waypoints);
        let target = waypoints[target_index] + Vec3::Y * flight.clearance;

        let to_target = target - self.craft.position;
        let distance = to_target.length();
        if let Some(dir) = to_target.try_normalize() {
            self.craft.heading = DirXZ::from(dir).heading();
            self.craft.position += dir * npc.speed.min(distance);
        }
        self.craft.speed = npc.speed;
        self.craft.align_to_surface(surface, flight);

        if self.craft.position.distance(target) < npc.arrival_threshold {
            log::debug!("npc reached waypoint {target_index}");
            self.current_waypoint = target_index;
        }
    }
}

/// Spawns `count` npcs spread evenly around the loop.
pub fn spawn_npcs(waypoints: &Waypoints, count: usize, params: &FlightParams) -> Vec<NpcCraft> {
    (0..count)
        .map(|k| NpcCraft::spawn(waypoints, k, count, params))
        .collect()
}
