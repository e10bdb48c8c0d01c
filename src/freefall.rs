use nalgebra::Vector2;

use crate::error::{ensure_finite, SimError, SimResult};
use crate::integrator::OdeSystem;

// ---------------------------------------------------------------------------
// Free fall with quadratic drag
// ---------------------------------------------------------------------------

/// Parameters of a body falling under gravity and quadratic drag:
///
///   dx/dt = v
///   dv/dt = g - (cd/m) * v^2
///
/// Positive v points along the fall direction, so gravity accelerates the
/// body and drag opposes it. State layout: component 0 = position x,
/// component 1 = velocity v.
#[derive(Debug, Clone, Copy)]
pub struct FreeFall {
    pub g: f64,  // gravitational acceleration, m/s^2
    pub cd: f64, // drag coefficient, kg/m
    pub m: f64,  // mass, kg
}

impl FreeFall {
    /// Reject parameter sets whose very first derivative evaluation would be
    /// non-finite. Checked once at the solve boundary, never in the loop.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.g, "g")?;
        ensure_finite(self.cd, "cd")?;
        ensure_finite(self.m, "m")?;
        if self.m == 0.0 {
            return Err(SimError::ZeroMass);
        }
        Ok(())
    }

    /// Asymptotic fall speed where drag balances gravity: sqrt(g*m/cd).
    /// Meaningful for g, cd, m > 0; otherwise NaN per IEEE-754.
    pub fn terminal_velocity(&self) -> f64 {
        (self.g * self.m / self.cd).sqrt()
    }
}

impl OdeSystem<2> for FreeFall {
    fn derivative(&self, y: &Vector2<f64>) -> Vector2<f64> {
        let v = y[1];
        Vector2::new(v, self.g - (self.cd / self.m) * v * v)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
