use glam::Vec3;

/// Direction used whenever a horizontal direction cannot be derived, e.g. from a zero vector.
pub const DEFAULT_DIR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Smallest vector length that is still considered a usable direction.
pub const DIR_EPSILON: f32 = 1e-6;

/// Fewest cross-track segments a closed track strip can be built from.
pub const MIN_TRACK_SEGMENTS: u32 = 3;

/// Parameter step used when estimating curve tangents by forward difference.
pub const TANGENT_DT: f32 = 1e-3;
