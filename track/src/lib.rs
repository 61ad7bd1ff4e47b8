//! Procedural race track geometry and the queries crafts use to stay glued to it.
//!
//! A [`TrackShape`] describes a closed track parametrically. Generating it yields a
//! [`TrackSurface`]: an upload-ready [`TrackMesh`] together with the [`Waypoints`] along its
//! centerline. The surface is immutable once generated and is only ever read, either by a renderer
//! or through [`sample`] which finds the ground height and normal under a position.

mod error;
mod mesh;
mod raycast;
mod sampler;
mod shape;
mod surface;
mod waypoints;

pub use error::{GeometryError, GeometryResult};
pub use mesh::{TrackMesh, TrackVertex};
pub use raycast::{MeshRaycast, RayHit};
pub use sampler::{sample, SurfaceSample};
pub use shape::{FigureEight, HeightProfile, Ring, TrackProfile, TrackShape};
pub use surface::TrackSurface;
pub use waypoints::Waypoints;
