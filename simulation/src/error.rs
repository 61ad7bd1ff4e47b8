use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A tunable is not a usable number.
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// Npcs fly at a constant speed, which has to be one a craft can reach.
    #[error("npc speed {speed} must lie in [0, {max_speed}]")]
    NpcSpeedOutOfRange { speed: f32, max_speed: f32 },
}

pub type ParamsResult<T> = std::result::Result<T, ParamsError>;

pub(crate) fn positive(name: &'static str, value: f32) -> ParamsResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}
