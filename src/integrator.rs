use nalgebra::SVector;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta over a fixed-size state vector
// ---------------------------------------------------------------------------

/// A first-order autonomous ODE system y' = F(y) on an N-dimensional state.
///
/// The stepping kernel is written against this trait so the same code
/// integrates any fixed-size system; `FreeFall` supplies the concrete
/// two-state instantiation.
pub trait OdeSystem<const N: usize> {
    fn derivative(&self, y: &SVector<f64, N>) -> SVector<f64, N>;
}

/// Single RK4 step: advance y by dt.
pub fn rk4_step<const N: usize, S: OdeSystem<N>>(
    sys: &S,
    y: &SVector<f64, N>,
    dt: f64,
) -> SVector<f64, N> {
    let k1 = sys.derivative(y);
    let k2 = sys.derivative(&(y + k1 * (dt * 0.5)));
    let k3 = sys.derivative(&(y + k2 * (dt * 0.5)));
    let k4 = sys.derivative(&(y + k3 * dt));

    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

/// Advance y0 across `nt` fixed steps of size dt.
/// Returns the full trajectory: nt + 1 states including the initial one.
pub fn propagate<const N: usize, S: OdeSystem<N>>(
    sys: &S,
    y0: SVector<f64, N>,
    nt: usize,
    dt: f64,
) -> Vec<SVector<f64, N>> {
    let mut states = Vec::with_capacity(nt + 1);
    states.push(y0);

    let mut y = y0;
    for _ in 0..nt {
        y = rk4_step(sys, &y, dt);
        states.push(y);
    }

    states
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector1;

    /// dy/dt = y, exact solution y(t) = y0 * e^t.
    struct Exponential;

    impl OdeSystem<1> for Exponential {
        fn derivative(&self, y: &Vector1<f64>) -> Vector1<f64> {
            *y
        }
    }

    #[test]
    fn matches_exponential_closed_form() {
        let states = propagate(&Exponential, Vector1::new(1.0), 100, 0.01);
        assert_relative_eq!(states[100][0], 1.0_f64.exp(), max_relative = 1e-8);
    }

    #[test]
    fn fourth_order_convergence() {
        // Halving dt must shrink the global error by roughly 2^4.
        let err = |nt: usize| {
            let dt = 1.0 / nt as f64;
            let states = propagate(&Exponential, Vector1::new(1.0), nt, dt);
            (states[nt][0] - 1.0_f64.exp()).abs()
        };
        let ratio = err(10) / err(20);
        assert!(ratio > 12.0, "error ratio {ratio} too small for 4th order");
    }

    #[test]
    fn zero_steps_returns_initial_state_only() {
        let states = propagate(&Exponential, Vector1::new(2.5), 0, 0.1);
        assert_eq!(states.len(), 1);
        assert_eq!(states[0][0], 2.5);
    }

    #[test]
    fn trajectory_length_is_nt_plus_one() {
        let states = propagate(&Exponential, Vector1::new(1.0), 37, 0.01);
        assert_eq!(states.len(), 38);
    }
}
