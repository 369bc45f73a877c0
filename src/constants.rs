/// Lower and upper bound of the cubic domain on every axis.
pub const DEFAULT_BOUNDARIES: (f64, f64) = (-1.0, 1.0);

pub const DEFAULT_TIME_STEP: f64 = 0.0001;

/// Lennard-Jones well depth (epsilon).
pub const DEFAULT_POTENTIAL_DEPTH: f64 = 1.0;

/// Cell width in units of the minimum distance (sigma).
pub const DEFAULT_CUTOFF_FACTOR: f64 = 2.5;

/// Upper bound on the number of cells in the neighbour grid.
pub const MAX_CELL_COUNT: usize = 1 << 22;

pub const DEFAULT_PARTICLE_MASS: f64 = 1.0;

pub const DEFAULT_PARTICLES_OUT: &str = "bin/simulation.txt";
pub const DEFAULT_INTEGRALS_OUT: &str = "bin/integrals.txt";
