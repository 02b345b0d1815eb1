pub mod angle;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod pendulum;
pub mod scenario;
pub mod sim;
pub mod system;

pub use error::{PendulumError, Result};

pub mod types {
    pub use crate::dynamics::state::{DoubleState, SimConfig, SingleState, Tolerances, G0};
    pub use crate::pendulum::{DoublePendulum, Pendulum, PendulumParams};
    pub use crate::sim::Method;
    pub use crate::system::{Member, PendulumSystem};
}
