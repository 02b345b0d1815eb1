//! Scenario files: a simulation run described in YAML.
//!
//! ```yaml
//! config:
//!   duration: 30.0      # s
//!   samples: 1000       # grid points, including t = 0
//!   gravity: 9.80665    # m/s^2
//! method: rk4           # euler | rk4 | adaptive (default)
//! pendulums:
//!   - kind: double
//!     upper: { length: 1.0, mass: 2.0, theta: 120.0 }
//!     lower: { length: 1.0, mass: 2.0, theta: 120.0, omega: 0.0 }
//! ```
//!
//! Every `config` field is optional. Angles are in degrees, angular
//! velocities in rad/s.

use serde::Deserialize;

use crate::dynamics::SimConfig;
use crate::error::Result;
use crate::pendulum::{presets, DoublePendulum, Pendulum, PendulumParams};
use crate::sim::Method;
use crate::system::{Member, PendulumSystem};

/// One system member as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendulumSpec {
    Single(PendulumParams),
    Double {
        upper: PendulumParams,
        lower: PendulumParams,
    },
}

impl PendulumSpec {
    /// Integrate this member on the given grid.
    pub fn build(&self, config: &SimConfig, method: Method) -> Result<Member> {
        Ok(match self {
            PendulumSpec::Single(p) => Pendulum::new(*p, config, method)?.into(),
            PendulumSpec::Double { upper, lower } => {
                DoublePendulum::new(*upper, *lower, config, method)?.into()
            }
        })
    }
}

/// Top-level scenario loaded from YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub config: SimConfig,
    #[serde(default)]
    pub method: Method,
    pub pendulums: Vec<PendulumSpec>,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// The classic equal-link double pendulum released at 120 degrees.
    pub fn classic_double() -> Self {
        let link = presets::classic_link();
        Self {
            config: SimConfig::default(),
            method: Method::default(),
            pendulums: vec![PendulumSpec::Double { upper: link, lower: link }],
        }
    }

    /// Validate, integrate every member and aggregate them.
    pub fn build(&self) -> Result<PendulumSystem> {
        self.config.validate()?;
        let members = self
            .pendulums
            .iter()
            .map(|spec| spec.build(&self.config, self.method))
            .collect::<Result<Vec<_>>>()?;
        PendulumSystem::new(members)
    }
}
