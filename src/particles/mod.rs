//! The particle store that holds the state of every simulated body can be found here.
pub mod new;
pub mod properties;
pub mod velocities;

pub use new::{Particle, Particles};
