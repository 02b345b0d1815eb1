pub mod double;
pub mod params;
pub mod presets;
pub mod single;

pub use double::{DoublePendulum, Link};
pub use params::PendulumParams;
pub use single::Pendulum;
