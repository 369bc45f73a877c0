//! Spatial cell decomposition used to restrict pair interactions to nearby particles.
pub mod grid;
pub mod list;

pub use grid::{CellGrid, Offset3, HALF_SHELL_OFFSETS};
pub use list::CellList;
