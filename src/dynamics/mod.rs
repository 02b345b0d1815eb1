pub mod model;
pub mod state;

pub use model::{DerivativeModel, DoublePendulumModel, ModelKind, SinglePendulumModel};
pub use state::{DoubleState, SimConfig, SingleState, Tolerances, G0};
