use nalgebra::SVector;
use serde::Deserialize;

use crate::dynamics::DerivativeModel;

/// Signature shared by the fixed-step integrators.
pub type StepFn<M, const D: usize> = fn(&SVector<f64, D>, f64, f64, &M) -> SVector<f64, D>;

// ---------------------------------------------------------------------------
// Integration method selection
// ---------------------------------------------------------------------------

/// How a pendulum entity advances its state across the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Explicit (forward) Euler, first order.
    Euler,
    /// Classical 4th-order Runge-Kutta.
    #[serde(alias = "rk4")]
    #[value(name = "rk4", alias = "runge_kutta4")]
    RungeKutta4,
    /// Runge-Kutta-Fehlberg 7(8) with adaptive internal steps; the reference solution.
    #[default]
    Adaptive,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::RungeKutta4 => "rk4",
            Method::Adaptive => "adaptive",
        }
    }

    /// Single fixed step, or `None` for the adaptive method which owns its own stepping.
    pub fn fixed_step<M, const D: usize>(&self) -> Option<StepFn<M, D>>
    where
        M: DerivativeModel<D>,
    {
        match self {
            Method::Euler => Some(euler_step::<M, D> as StepFn<M, D>),
            Method::RungeKutta4 => Some(rk4_step::<M, D> as StepFn<M, D>),
            Method::Adaptive => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed-step integrators
// ---------------------------------------------------------------------------

/// Explicit Euler step: f' = f + dt * f_dot(f, t).
pub fn euler_step<M, const D: usize>(
    state: &SVector<f64, D>,
    t: f64,
    dt: f64,
    model: &M,
) -> SVector<f64, D>
where
    M: DerivativeModel<D>,
{
    state + model.derivative(state, t) * dt
}

/// Single RK4 step: advance state from t to t + dt.
pub fn rk4_step<M, const D: usize>(
    state: &SVector<f64, D>,
    t: f64,
    dt: f64,
    model: &M,
) -> SVector<f64, D>
where
    M: DerivativeModel<D>,
{
    let k1 = model.derivative(state, t) * dt;
    let k2 = model.derivative(&(state + k1 * 0.5), t + dt * 0.5) * dt;
    let k3 = model.derivative(&(state + k2 * 0.5), t + dt * 0.5) * dt;
    let k4 = model.derivative(&(state + k3), t + dt) * dt;

    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
