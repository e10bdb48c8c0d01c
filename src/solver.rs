use nalgebra::Vector2;
use tracing::debug;

use crate::error::{ensure_finite, SimError, SimResult};
use crate::freefall::FreeFall;
use crate::integrator::propagate;

// ---------------------------------------------------------------------------
// Trajectory output
// ---------------------------------------------------------------------------

/// Position and velocity series sampled at t = 0, dt, 2dt, ..., nt*dt.
/// Both series hold nt + 1 samples; index 0 is the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub v: Vec<f64>,
    pub dt: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Simulated time of sample i.
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn final_position(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    pub fn final_velocity(&self) -> f64 {
        self.v[self.v.len() - 1]
    }
}

// ---------------------------------------------------------------------------
// Solve boundary
// ---------------------------------------------------------------------------

/// Integrate free fall with quadratic drag across `nt` RK4 steps of size `dt`.
///
/// Returns position and velocity at t = 0, dt, ..., nt*dt (nt + 1 samples
/// each). Parameters are validated here, at the boundary: zero mass,
/// non-finite scalars, and non-positive dt are errors. Non-finite values
/// arising mid-integration from extreme-but-valid inputs propagate per
/// IEEE-754 and show up in the returned series.
#[allow(clippy::too_many_arguments)]
pub fn solve_freefall_rk4(
    x0: f64,
    v0: f64,
    nt: usize,
    dt: f64,
    g: f64,
    cd: f64,
    m: f64,
) -> SimResult<Trajectory> {
    ensure_finite(x0, "x0")?;
    ensure_finite(v0, "v0")?;
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimeStep { dt });
    }
    let sys = FreeFall { g, cd, m };
    sys.validate()?;

    debug!(x0, v0, nt, dt, g, cd, m, "starting free-fall RK4 solve");

    let states = propagate(&sys, Vector2::new(x0, v0), nt, dt);

    let mut x = Vec::with_capacity(states.len());
    let mut v = Vec::with_capacity(states.len());
    for y in &states {
        x.push(y[0]);
        v.push(y[1]);
    }

    let traj = Trajectory { x, v, dt };
    debug!(
        samples = traj.len(),
        x_final = traj.final_position(),
        v_final = traj.final_velocity(),
        "solve complete"
    );

    Ok(traj)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
