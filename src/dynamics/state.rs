use nalgebra::{DVector, Vector2, Vector4};
use serde::Deserialize;

use crate::error::{PendulumError, Result};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2

// ---------------------------------------------------------------------------
// State vectors
// ---------------------------------------------------------------------------

/// Single pendulum state: [theta, omega].
pub type SingleState = Vector2<f64>;

/// Double pendulum state: [theta1, theta2, omega1, omega2].
pub type DoubleState = Vector4<f64>;

// ---------------------------------------------------------------------------
// Adaptive integrator tolerances
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            rtol: 1.49012e-8,
            atol: 1.49012e-8,
        }
    }
}

impl Tolerances {
    pub fn validate(&self) -> Result<()> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) || !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(PendulumError::InvalidTolerance);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// Shared time grid and environment for one simulation run.
///
/// Every entity receives this explicitly at construction, so several runs
/// with different resolutions can coexist in one process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub duration: f64,  // total simulated time, s
    pub samples: usize, // number of grid points N, including t = 0
    pub gravity: f64,   // m/s^2
    pub tolerances: Tolerances,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: 30.0,
            samples: 1000,
            gravity: G0,
            tolerances: Tolerances::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(PendulumError::InvalidSampleCount(self.samples));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(PendulumError::InvalidDuration(self.duration));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(PendulumError::InvalidGravity(self.gravity));
        }
        self.tolerances.validate()
    }

    /// Fixed timestep: T / (N - 1).
    pub fn dt(&self) -> f64 {
        self.duration / (self.samples - 1) as f64
    }

    /// Time of grid point `i`.
    pub fn time_at(&self, i: usize) -> f64 {
        // Pin the last sample to exactly T so the grid ends where it should.
        if i + 1 == self.samples {
            self.duration
        } else {
            i as f64 * self.dt()
        }
    }

    /// All N timestamps from 0 to T inclusive.
    pub fn time_grid(&self) -> DVector<f64> {
        DVector::from_fn(self.samples, |i, _| self.time_at(i))
    }
}
