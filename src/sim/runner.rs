use nalgebra::SVector;

use crate::dynamics::{DerivativeModel, SimConfig};
use crate::error::Result;
use super::adaptive;
use super::integrator::Method;

// ---------------------------------------------------------------------------
// Trajectory over the shared time grid
// ---------------------------------------------------------------------------

/// Integrate `model` from `initial` across the N-point grid of `config`.
///
/// Returns exactly `config.samples` states; index 0 is `initial` and index
/// N-1 is the state at `config.duration`. Fixed-step methods take one step
/// per grid interval; the adaptive method hands the whole grid to the reference solver.
pub fn integrate<M, const D: usize>(
    model: &M,
    initial: SVector<f64, D>,
    config: &SimConfig,
    method: Method,
) -> Result<Vec<SVector<f64, D>>>
where
    M: DerivativeModel<D>,
{
    config.validate()?;

    let Some(step) = method.fixed_step::<M, D>() else {
        let times = config.time_grid();
        return adaptive::integrate_grid(model, &initial, times.as_slice(), &config.tolerances);
    };

    let dt = config.dt();
    let mut trajectory = Vec::with_capacity(config.samples);
    let mut state = initial;
    trajectory.push(state);

    for j in 0..config.samples - 1 {
        state = step(&state, config.time_at(j), dt, model);
        trajectory.push(state);
    }

    Ok(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
