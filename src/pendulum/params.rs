use serde::Deserialize;

use crate::error::{PendulumError, Result};

// ---------------------------------------------------------------------------
// Physical parameters and initial conditions of one rod + bob
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PendulumParams {
    pub length: f64, // m, > 0
    pub mass: f64,   // kg, > 0
    #[serde(alias = "theta_deg")]
    pub theta: f64, // initial angle from the downward vertical, degrees
    #[serde(default)]
    pub omega: f64, // initial angular velocity, rad/s
}

impl PendulumParams {
    pub fn new(length: f64, mass: f64, theta_deg: f64, omega: f64) -> Self {
        Self { length, mass, theta: theta_deg, omega }
    }

    /// Initial angle in radians.
    pub fn theta_rad(&self) -> f64 {
        self.theta.to_radians()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(PendulumError::InvalidLength(self.length));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PendulumError::InvalidMass(self.mass));
        }
        if !self.theta.is_finite() {
            return Err(PendulumError::NonFiniteParameter("theta"));
        }
        if !self.omega.is_finite() {
            return Err(PendulumError::NonFiniteParameter("omega"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_are_converted() {
        let p = PendulumParams::new(1.0, 1.0, 180.0, 0.0);
        assert_relative_eq!(p.theta_rad(), std::f64::consts::PI);
    }

    #[test]
    fn rejects_non_physical_values() {
        assert_eq!(
            PendulumParams::new(0.0, 1.0, 10.0, 0.0).validate(),
            Err(PendulumError::InvalidLength(0.0))
        );
        assert_eq!(
            PendulumParams::new(1.0, -2.0, 10.0, 0.0).validate(),
            Err(PendulumError::InvalidMass(-2.0))
        );
        assert_eq!(
            PendulumParams::new(1.0, 1.0, f64::NAN, 0.0).validate(),
            Err(PendulumError::NonFiniteParameter("theta"))
        );
        assert!(PendulumParams::new(f64::NAN, 1.0, 0.0, 0.0).validate().is_err());
        assert!(PendulumParams::new(1.0, 1.0, 0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn length_and_mass_must_be_finite() {
        assert_eq!(
            PendulumParams::new(f64::INFINITY, 1.0, 10.0, 0.0).validate(),
            Err(PendulumError::InvalidLength(f64::INFINITY))
        );
        assert_eq!(
            PendulumParams::new(1.0, f64::NEG_INFINITY, 10.0, 0.0).validate(),
            Err(PendulumError::InvalidMass(f64::NEG_INFINITY))
        );
        assert!(matches!(
            PendulumParams::new(1.0, f64::NAN, 10.0, 0.0).validate(),
            Err(PendulumError::InvalidMass(m)) if m.is_nan()
        ));
    }

    #[test]
    fn omega_defaults_to_zero() {
        let p: PendulumParams = serde_yaml::from_str("length: 1.5\nmass: 2.0\ntheta: 30").unwrap();
        assert_eq!(p, PendulumParams::new(1.5, 2.0, 30.0, 0.0));
    }
}
