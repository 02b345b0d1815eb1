use nalgebra::SVector;

use crate::dynamics::state::{DoubleState, SingleState};

// ---------------------------------------------------------------------------
// Derivative model interface
// ---------------------------------------------------------------------------

/// Time derivative of a `D`-dimensional state vector.
///
/// Each model carries its own physical constants, so the integrators never
/// have to guess how many constants a model needs. `t` is part of the
/// signature for uniformity; both pendulum models are autonomous and ignore it.
pub trait DerivativeModel<const D: usize> {
    fn derivative(&self, state: &SVector<f64, D>, t: f64) -> SVector<f64, D>;
}

/// Which dynamics a model (or an entity built on one) follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Single,
    Double,
}

// ---------------------------------------------------------------------------
// Single pendulum: theta'' = -(g/l) sin(theta)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePendulumModel {
    pub length: f64,  // m
    pub gravity: f64, // m/s^2
}

impl DerivativeModel<2> for SinglePendulumModel {
    fn derivative(&self, state: &SingleState, _t: f64) -> SingleState {
        SingleState::new(state[1], -(self.gravity / self.length) * state[0].sin())
    }
}

// ---------------------------------------------------------------------------
// Double pendulum (two point masses on massless rigid rods)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulumModel {
    pub length1: f64, // upper rod, m
    pub length2: f64, // lower rod, m
    pub mass1: f64,   // upper bob, kg
    pub mass2: f64,   // lower bob, kg
    pub gravity: f64, // m/s^2
}

impl DerivativeModel<4> for DoublePendulumModel {
    /// State order is [theta1, theta2, omega1, omega2].
    ///
    /// The denominators are not guarded: if they vanish the result is
    /// infinite or NaN and is returned as is.
    fn derivative(&self, state: &DoubleState, _t: f64) -> DoubleState {
        let (th1, th2, w1, w2) = (state[0], state[1], state[2], state[3]);
        let Self { length1: l1, length2: l2, mass1: m1, mass2: m2, gravity: g } = *self;

        let delta = th2 - th1;
        let (sin_d, cos_d) = delta.sin_cos();
        let m_total = m1 + m2;

        let alpha1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + m2 * l2 * w2 * w2 * sin_d
            - m_total * g * th1.sin())
            / (m_total * l1 - m2 * l1 * cos_d * cos_d);

        let alpha2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d
            + m_total * (g * th1.sin() * cos_d - l1 * w1 * w1 * sin_d - g * th2.sin()))
            / (m_total * l2 - m2 * l2 * cos_d * cos_d);

        DoubleState::new(w1, w2, alpha1, alpha2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
