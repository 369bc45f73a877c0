//! Pair potentials and the managers that decide which pairs they act on.
pub mod lennard_jones;
pub mod managers;
pub mod potential;

pub use lennard_jones::LennardJones;
pub use managers::{AllPairsManager, CellListManager};
pub use potential::{PairPotential, PotentialManager};
