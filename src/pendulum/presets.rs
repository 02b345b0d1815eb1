use crate::dynamics::SimConfig;
use crate::error::Result;
use crate::sim::Method;
use super::double::DoublePendulum;
use super::params::PendulumParams;

/// One link of the classic double pendulum: l = 1 m, m = 2 kg, at rest at 120 degrees.
pub fn classic_link() -> PendulumParams {
    PendulumParams::new(1.0, 2.0, 120.0, 0.0)
}

/// Two classic links, one hanging from the other.
pub fn classic_double(config: &SimConfig, method: Method) -> Result<DoublePendulum> {
    DoublePendulum::new(classic_link(), classic_link(), config, method)
}
