use nalgebra::{DMatrix, DVector};

use crate::dynamics::{ModelKind, SimConfig};
use crate::error::{PendulumError, Result};
use crate::pendulum::{DoublePendulum, Link, Pendulum};

// ---------------------------------------------------------------------------
// System member
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Member {
    Single(Pendulum),
    Double(DoublePendulum),
}

impl Member {
    pub fn kind(&self) -> ModelKind {
        match self {
            Member::Single(_) => ModelKind::Single,
            Member::Double(_) => ModelKind::Double,
        }
    }

    /// Rod length (total length for a double pendulum).
    pub fn length(&self) -> f64 {
        match self {
            Member::Single(p) => p.length(),
            Member::Double(p) => p.length(),
        }
    }

    /// (N, 2) or (N, 4) position array.
    pub fn position(&self) -> &DMatrix<f64> {
        match self {
            Member::Single(p) => p.position(),
            Member::Double(p) => p.position(),
        }
    }

    /// (wrapped theta, omega) per sample; the lower link for a double pendulum.
    pub fn phase_space(&self) -> Vec<[f64; 2]> {
        match self {
            Member::Single(p) => p.phase_space(),
            Member::Double(p) => p.phase_space(Link::Lower),
        }
    }

    pub fn config(&self) -> &SimConfig {
        match self {
            Member::Single(p) => p.config(),
            Member::Double(p) => p.config(),
        }
    }
}

impl From<Pendulum> for Member {
    fn from(p: Pendulum) -> Self {
        Member::Single(p)
    }
}

impl From<DoublePendulum> for Member {
    fn from(p: DoublePendulum) -> Self {
        Member::Double(p)
    }
}

// ---------------------------------------------------------------------------
// System: pendulums animated together
// ---------------------------------------------------------------------------

/// A set of already-integrated pendulums sharing one time grid.
///
/// All members must be the same kind (all single or all double) and share
/// the same time grid, so that row `i` of every position array is the same
/// instant.
#[derive(Debug, Clone)]
pub struct PendulumSystem {
    members: Vec<Member>,
    has_double: bool,
    positions: Vec<DMatrix<f64>>,
}

impl PendulumSystem {
    pub fn new(members: Vec<Member>) -> Result<Self> {
        if let Some(first) = members.first() {
            let kind = first.kind();
            let grid = (first.config().samples, first.config().duration);
            for (index, m) in members.iter().enumerate().skip(1) {
                if m.kind() != kind {
                    return Err(PendulumError::MixedSystem { index });
                }
                if (m.config().samples, m.config().duration) != grid {
                    return Err(PendulumError::MismatchedGrid { index });
                }
            }
        }

        let has_double = members.iter().any(|m| matches!(m, Member::Double(_)));
        let positions = members.iter().map(|m| m.position().clone()).collect();

        Ok(Self { members, has_double, positions })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True if the members are double pendulums.
    pub fn has_double(&self) -> bool {
        self.has_double
    }

    /// One position array per member, in member order.
    pub fn positions(&self) -> &[DMatrix<f64>] {
        &self.positions
    }

    /// Longest member, for the drawing bounds.
    pub fn max_length(&self) -> f64 {
        self.members.iter().map(Member::length).fold(0.0, f64::max)
    }

    /// Timestamps shared by every member.
    pub fn time_grid(&self) -> DVector<f64> {
        self.members
            .first()
            .map_or_else(|| DVector::zeros(0), |m| m.config().time_grid())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
