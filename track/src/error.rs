use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A closed strip needs at least `min` segments, fewer would fold onto itself.
    #[error("a track needs at least {min} segments, got {segments}")]
    TooFewSegments { segments: u32, min: u32 },

    /// A dimension of the track is not a usable number.
    #[error("track {name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    /// The inner edge of a ring would pass through its center.
    #[error("track width {width} must be smaller than twice the ring radius {radius}")]
    WidthExceedsRing { width: f32, radius: f32 },
}

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Checks that a dimension is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f32) -> GeometryResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

/// Checks that a dimension is finite. Zero and negative values are allowed.
pub(crate) fn finite(name: &'static str, value: f32) -> GeometryResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}
