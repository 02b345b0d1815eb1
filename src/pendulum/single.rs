use nalgebra::DMatrix;

use crate::angle::wrap_angle;
use crate::dynamics::{SimConfig, SinglePendulumModel, SingleState};
use crate::error::Result;
use crate::sim::{self, Method};
use super::params::PendulumParams;

// ---------------------------------------------------------------------------
// Single pendulum: rod of length l hanging from a pivot at the origin
// ---------------------------------------------------------------------------

/// A simple pendulum with its full trajectory computed at construction.
///
/// Immutable once built; rebuild with a new config or method to re-run.
#[derive(Debug, Clone)]
pub struct Pendulum {
    params: PendulumParams,
    method: Method,
    config: SimConfig,
    trajectory: Vec<SingleState>,
    position: DMatrix<f64>, // N x 2: (x, y)
}

impl Pendulum {
    pub fn new(params: PendulumParams, config: &SimConfig, method: Method) -> Result<Self> {
        params.validate()?;
        let model = SinglePendulumModel { length: params.length, gravity: config.gravity };
        let initial = SingleState::new(params.theta_rad(), params.omega);
        let trajectory = sim::integrate(&model, initial, config, method)?;
        let position = single_positions(&trajectory, params.length);

        Ok(Self {
            params,
            method,
            config: config.clone(),
            trajectory,
            position,
        })
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn length(&self) -> f64 {
        self.params.length
    }

    pub fn mass(&self) -> f64 {
        self.params.mass
    }

    /// Initial angle, radians.
    pub fn theta0(&self) -> f64 {
        self.params.theta_rad()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// States [theta, omega] at every grid point.
    pub fn trajectory(&self) -> &[SingleState] {
        &self.trajectory
    }

    /// (2, N) view: row 0 is theta, row 1 is omega.
    pub fn states(&self) -> DMatrix<f64> {
        DMatrix::from_fn(2, self.trajectory.len(), |r, c| self.trajectory[c][r])
    }

    /// (N, 2) bob positions, columns (x, y), pivot at the origin.
    pub fn position(&self) -> &DMatrix<f64> {
        &self.position
    }

    /// (wrapped theta, omega) pairs for a phase-space plot.
    pub fn phase_space(&self) -> Vec<[f64; 2]> {
        self.trajectory.iter().map(|s| [wrap_angle(s[0]), s[1]]).collect()
    }
}

/// x = l sin(theta), y = -l cos(theta) for every state.
pub fn single_positions(trajectory: &[SingleState], length: f64) -> DMatrix<f64> {
    let mut pos = DMatrix::zeros(trajectory.len(), 2);
    for (i, s) in trajectory.iter().enumerate() {
        let (sin, cos) = s[0].sin_cos();
        pos[(i, 0)] = length * sin;
        pos[(i, 1)] = -length * cos;
    }
    pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
