//! This crate defines utilities that any other crate can utilize. This crate
//! should not depend on any other crates in the workspace.

// for use in input enums
extern crate strum;
#[macro_use]
extern crate strum_macros;

pub mod consts;
pub mod input;
pub mod loader;
pub mod math;
pub mod time;

pub use math::{Angle, Ray, VecUtils};
