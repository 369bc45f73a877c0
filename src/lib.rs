//! Lennard-Jones particles in a non-periodic cubic domain, advanced with
//! velocity Verlet and a cell list that limits force evaluation to nearby pairs.
extern crate nalgebra as na;

pub mod cells;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod domain;
pub mod errors;
pub mod integrator;
pub mod math;
pub mod particles;
pub mod potentials;
pub mod records;
pub mod simulation;
pub mod writers;

pub use config::SimulationConfig;
pub use errors::{Result, SimError};
pub use simulation::Simulation;
