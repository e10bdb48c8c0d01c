pub mod error;
pub mod freefall;
pub mod integrator;
pub mod solver;

// Common surface at the crate root
pub use error::{SimError, SimResult};
pub use freefall::FreeFall;
pub use integrator::{propagate, rk4_step, OdeSystem};
pub use solver::{solve_freefall_rk4, Trajectory};
