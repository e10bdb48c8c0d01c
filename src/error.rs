use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

/// Boundary errors for a solve. Anything that would make the very first
/// derivative evaluation non-finite is rejected here; extreme-but-finite
/// inputs still integrate and may overflow per IEEE-754.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("mass must be nonzero (the drag term divides by m)")]
    ZeroMass,

    #[error("non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("invalid time step dt = {dt} (must be positive and finite)")]
    InvalidTimeStep { dt: f64 },
}

pub(crate) fn ensure_finite(value: f64, what: &'static str) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFinite { what, value })
    }
}
