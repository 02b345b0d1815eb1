use nalgebra::DMatrix;

use crate::angle::wrap_angle;
use crate::dynamics::{DoublePendulumModel, DoubleState, SimConfig};
use crate::error::Result;
use crate::sim::{self, Method};
use super::params::PendulumParams;
use super::single::Pendulum;

/// Which rod of a double pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Upper,
    Lower,
}

// ---------------------------------------------------------------------------
// Double pendulum: lower rod hangs from the upper bob
// ---------------------------------------------------------------------------

/// Two-link pendulum integrated with the coupled model.
///
/// The state layout is [theta1, theta2, omega1, omega2]; both angles are
/// measured from the downward vertical. Positions are relative to the shared
/// pivot at the origin.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    upper: PendulumParams,
    lower: PendulumParams,
    method: Method,
    config: SimConfig,
    trajectory: Vec<DoubleState>,
    position: DMatrix<f64>, // N x 4: (x1, x2, y1, y2)
}

impl DoublePendulum {
    pub fn new(
        upper: PendulumParams,
        lower: PendulumParams,
        config: &SimConfig,
        method: Method,
    ) -> Result<Self> {
        upper.validate()?;
        lower.validate()?;

        let model = DoublePendulumModel {
            length1: upper.length,
            length2: lower.length,
            mass1: upper.mass,
            mass2: lower.mass,
            gravity: config.gravity,
        };
        let initial = DoubleState::new(upper.theta_rad(), lower.theta_rad(), upper.omega, lower.omega);
        let trajectory = sim::integrate(&model, initial, config, method)?;
        let position = double_positions(&trajectory, upper.length, lower.length);

        Ok(Self {
            upper,
            lower,
            method,
            config: config.clone(),
            trajectory,
            position,
        })
    }

    /// Build from two existing pendulums, using only their parameters.
    ///
    /// `p1` hangs from the pivot and `p2` from the tip of `p1`. Their own
    /// single-pendulum trajectories are not reused.
    pub fn from_pendulums(
        p1: &Pendulum,
        p2: &Pendulum,
        config: &SimConfig,
        method: Method,
    ) -> Result<Self> {
        Self::new(*p1.params(), *p2.params(), config, method)
    }

    pub fn link(&self, link: Link) -> &PendulumParams {
        match link {
            Link::Upper => &self.upper,
            Link::Lower => &self.lower,
        }
    }

    /// Combined length l1 + l2, for sizing the drawing area.
    pub fn length(&self) -> f64 {
        self.upper.length + self.lower.length
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn trajectory(&self) -> &[DoubleState] {
        &self.trajectory
    }

    /// (4, N) view with rows theta1, theta2, omega1, omega2.
    pub fn states(&self) -> DMatrix<f64> {
        DMatrix::from_fn(4, self.trajectory.len(), |r, c| self.trajectory[c][r])
    }

    /// (N, 4) positions, columns (x1, x2, y1, y2).
    pub fn position(&self) -> &DMatrix<f64> {
        &self.position
    }

    /// (wrapped theta, omega) pairs of one link.
    pub fn phase_space(&self, link: Link) -> Vec<[f64; 2]> {
        let (angle, rate) = match link {
            Link::Upper => (0, 2),
            Link::Lower => (1, 3),
        };
        self.trajectory
            .iter()
            .map(|s| [wrap_angle(s[angle]), s[rate]])
            .collect()
    }
}

/// Both bob positions for every state; the lower bob is offset from the upper one.
pub fn double_positions(trajectory: &[DoubleState], length1: f64, length2: f64) -> DMatrix<f64> {
    let mut pos = DMatrix::zeros(trajectory.len(), 4);
    for (i, s) in trajectory.iter().enumerate() {
        let (sin1, cos1) = s[0].sin_cos();
        let (sin2, cos2) = s[1].sin_cos();
        let x1 = length1 * sin1;
        let y1 = -length1 * cos1;
        pos[(i, 0)] = x1;
        pos[(i, 1)] = x1 + length2 * sin2;
        pos[(i, 2)] = y1;
        pos[(i, 3)] = y1 - length2 * cos2;
    }
    pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::error::PendulumError;

    fn link(theta: f64) -> PendulumParams {
        PendulumParams::new(1.0, 2.0, theta, 0.0)
    }

    #[test]
    fn initial_row_is_analytic_position() {
        let config = SimConfig::default();
        let dp = DoublePendulum::new(link(120.0), link(120.0), &config, Method::RungeKutta4).unwrap();
        assert_eq!(dp.position().shape(), (1000, 4));

        let th = 120_f64.to_radians();
        let row = dp.position().row(0);
        assert_relative_eq!(row[0], th.sin());
        assert_relative_eq!(row[1], 2.0 * th.sin());
        assert_relative_eq!(row[2], -th.cos());
        assert_relative_eq!(row[3], -2.0 * th.cos());
    }

    #[test]
    fn rod_lengths_are_preserved() {
        let config = SimConfig { duration: 10.0, samples: 400, ..Default::default() };
        let upper = PendulumParams::new(1.2, 1.0, 90.0, 0.0);
        let lower = PendulumParams::new(0.6, 3.0, -45.0, 1.0);
        let dp = DoublePendulum::new(upper, lower, &config, Method::Adaptive).unwrap();
        for row in dp.position().row_iter() {
            let (x1, x2, y1, y2) = (row[0], row[1], row[2], row[3]);
            assert_relative_eq!(x1.hypot(y1), 1.2, epsilon = 1e-12);
            assert_relative_eq!((x2 - x1).hypot(y2 - y1), 0.6, epsilon = 1e-12);
        }
    }

    #[test]
    fn states_view_is_transposed_trajectory() {
        let config = SimConfig { duration: 1.0, samples: 11, ..Default::default() };
        let dp = DoublePendulum::new(link(30.0), link(-20.0), &config, Method::Euler).unwrap();
        let states = dp.states();
        assert_eq!(states.shape(), (4, 11));
        for (c, s) in dp.trajectory().iter().enumerate() {
            for r in 0..4 {
                assert_eq!(states[(r, c)], s[r]);
            }
        }
        assert_eq!(dp.phase_space(Link::Lower)[0][1], 0.0);
    }

    #[test]
    fn built_from_pendulums_uses_their_parameters() {
        let config = SimConfig { duration: 2.0, samples: 50, ..Default::default() };
        let p1 = Pendulum::new(link(120.0), &config, Method::RungeKutta4).unwrap();
        let p2 = Pendulum::new(PendulumParams::new(0.5, 1.0, 60.0, 0.3), &config, Method::RungeKutta4).unwrap();
        let a = DoublePendulum::from_pendulums(&p1, &p2, &config, Method::RungeKutta4).unwrap();
        let b = DoublePendulum::new(*p1.params(), *p2.params(), &config, Method::RungeKutta4).unwrap();
        assert_eq!(a.trajectory(), b.trajectory());
        assert_eq!(a.length(), 1.5);
        assert_eq!(a.link(Link::Lower).omega, 0.3);
    }

    #[test]
    fn invalid_lower_mass_rejected() {
        let config = SimConfig::default();
        let bad = PendulumParams::new(1.0, 0.0, 10.0, 0.0);
        let err = DoublePendulum::new(link(10.0), bad, &config, Method::RungeKutta4);
        assert!(matches!(err, Err(PendulumError::InvalidMass(_))));
    }
}
