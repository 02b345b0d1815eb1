pub mod adaptive;
pub mod integrator;
pub mod runner;

pub use integrator::{euler_step, rk4_step, Method};
pub use runner::integrate;
