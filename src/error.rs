/// Errors raised while configuring or building a simulation.
///
/// Numerical blow-ups inside a trajectory (e.g. a vanishing double-pendulum
/// denominator) are not errors: NaN and infinities flow into the output.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PendulumError {
    /// Pendulum length must be strictly positive.
    #[error("invalid pendulum length {0} (must be > 0)")]
    InvalidLength(f64),
    /// Bob mass must be strictly positive.
    #[error("invalid pendulum mass {0} (must be > 0)")]
    InvalidMass(f64),
    /// An initial condition was NaN or infinite.
    #[error("parameter `{0}` is not finite")]
    NonFiniteParameter(&'static str),
    /// The time grid needs at least two samples.
    #[error("invalid sample count {0} (need at least 2)")]
    InvalidSampleCount(usize),
    #[error("invalid simulation duration {0} s (must be > 0)")]
    InvalidDuration(f64),
    #[error("invalid gravitational acceleration {0} m/s^2 (must be > 0)")]
    InvalidGravity(f64),
    /// Adaptive integrator tolerances must be finite and positive.
    #[error("invalid adaptive integrator tolerances")]
    InvalidTolerance,
    /// Member `index` is of a different kind than member 0.
    #[error("pendulum system mixes single and double pendulums (member {index})")]
    MixedSystem { index: usize },
    /// Member `index` was integrated on a different time grid than member 0.
    #[error("pendulum system members use different time grids (member {index})")]
    MismatchedGrid { index: usize },
    /// The adaptive solver failed on the output interval starting at `t`.
    #[error("adaptive integrator failed after t = {t:.6} s: {reason}")]
    Integration { t: f64, reason: String },
}

pub type Result<T> = std::result::Result<T, PendulumError>;
