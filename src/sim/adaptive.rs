//! Adaptive reference integrator.
//!
//! Drives the `rkf78` Runge-Kutta-Fehlberg 7(8) solver across an output grid:
//! one solver call per grid interval, each ending exactly on the next output
//! time, with the solver choosing its own internal steps to meet the requested
//! tolerances.

use std::cell::Cell;

use nalgebra::SVector;
use rkf78::{OdeSystem, Rkf78};

use crate::dynamics::{DerivativeModel, Tolerances};
use crate::error::{PendulumError, Result};

// ---------------------------------------------------------------------------
// Model adapter
// ---------------------------------------------------------------------------

/// Exposes a `DerivativeModel` as an `rkf78` right-hand side.
struct Rhs<'a, M> {
    model: &'a M,
    singular: Cell<bool>, // a derivative came back NaN or infinite
}

impl<M, const D: usize> OdeSystem<D> for Rhs<'_, M>
where
    M: DerivativeModel<D>,
{
    fn rhs(&self, t: f64, y: &[f64; D], dydt: &mut [f64; D]) {
        let d = self.model.derivative(&SVector::from(*y), t);
        if d.iter().any(|v| !v.is_finite()) {
            self.singular.set(true);
        }
        dydt.copy_from_slice(d.as_slice());
    }
}

fn is_finite<const D: usize>(v: &SVector<f64, D>) -> bool {
    v.iter().all(|x| x.is_finite())
}

// ---------------------------------------------------------------------------
// Grid integration
// ---------------------------------------------------------------------------

/// Integrate from `initial` at `times[0]` and return the state at every
/// entry of `times` (which must be increasing).
///
/// Once the state or its derivative stops being finite the remaining samples
/// are filled with NaN, so a singular model propagates into the trajectory
/// instead of failing the run. Any other solver failure is an error.
pub fn integrate_grid<M, const D: usize>(
    model: &M,
    initial: &SVector<f64, D>,
    times: &[f64],
    tol: &Tolerances,
) -> Result<Vec<SVector<f64, D>>>
where
    M: DerivativeModel<D>,
{
    let mut trajectory = Vec::with_capacity(times.len());
    if times.is_empty() {
        return Ok(trajectory);
    }

    let rhs = Rhs { model, singular: Cell::new(false) };
    let mut solver = Rkf78::new(rkf78::Tolerances::new(tol.atol, tol.rtol));
    let mut y = *initial;
    trajectory.push(y);

    for w in times.windows(2) {
        let (t, t_out) = (w[0], w[1]);
        if !is_finite(&y) || !is_finite(&model.derivative(&y, t)) {
            break;
        }

        let y0: [f64; D] = y.into();
        match solver.integrate(&rhs, t, &y0, t_out, t_out - t) {
            Ok((_, yf)) => y = SVector::from(yf),
            Err(_) if rhs.singular.get() => break,
            Err(e) => {
                return Err(PendulumError::Integration { t, reason: format!("{e:?}") });
            }
        }
        trajectory.push(y);
    }

    trajectory.resize(times.len(), SVector::repeat(f64::NAN));
    Ok(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
