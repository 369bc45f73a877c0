//! Run configuration for a simulation, validated before any particle exists.
use crate::{
    constants::{
        DEFAULT_BOUNDARIES, DEFAULT_CUTOFF_FACTOR, DEFAULT_POTENTIAL_DEPTH, DEFAULT_TIME_STEP,
    },
    errors::{Result, SimError},
};

/// Scalar parameters that fully describe a run.
///
/// [`SimulationConfig::for_particles`] fills in the reference configuration;
/// the `with_*` setters override individual values. Nothing is checked until
/// [`SimulationConfig::validate`], which [`crate::simulation::Simulation::new`] calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// lower and upper bound, identical on all three axes
    pub boundaries: (f64, f64),
    pub n_particles: usize,
    pub time_step: f64,
    /// Lennard-Jones sigma
    pub min_distance: f64,
    /// Lennard-Jones epsilon
    pub potential_depth: f64,
    /// cell width = cutoff_factor * min_distance
    pub cutoff_factor: f64,
    /// `None` seeds the generator from system entropy
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Reference configuration for `n_particles` particles.
    ///
    /// The minimum distance follows the density-derived default `(1/N)^(1/3)`;
    /// an empty system is treated as `N = 1` so the grid stays well defined.
    pub fn for_particles(n_particles: usize) -> Self {
        Self {
            boundaries: DEFAULT_BOUNDARIES,
            n_particles,
            time_step: DEFAULT_TIME_STEP,
            min_distance: Self::default_min_distance(n_particles),
            potential_depth: DEFAULT_POTENTIAL_DEPTH,
            cutoff_factor: DEFAULT_CUTOFF_FACTOR,
            seed: None,
        }
    }

    pub fn default_min_distance(n_particles: usize) -> f64 {
        (1.0 / n_particles.max(1) as f64).cbrt()
    }

    pub fn with_boundaries(mut self, lower: f64, upper: f64) -> Self {
        self.boundaries = (lower, upper);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_potential_depth(mut self, potential_depth: f64) -> Self {
        self.potential_depth = potential_depth;
        self
    }

    pub fn with_cutoff_factor(mut self, cutoff_factor: f64) -> Self {
        self.cutoff_factor = cutoff_factor;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn domain_width(&self) -> f64 {
        self.boundaries.1 - self.boundaries.0
    }

    /// Width of one cell of the neighbour grid.
    pub fn cutoff(&self) -> f64 {
        self.cutoff_factor * self.min_distance
    }

    pub fn validate(&self) -> Result<()> {
        let (lower, upper) = self.boundaries;
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(SimError::InvalidDomain { lower, upper });
        }
        if !is_positive(self.time_step) {
            return Err(SimError::InvalidTimeStep {
                value: self.time_step,
            });
        }
        if !is_positive(self.min_distance) {
            return Err(SimError::InvalidMinimumDistance {
                value: self.min_distance,
            });
        }
        if !is_positive(self.cutoff_factor) {
            return Err(SimError::InvalidCutoffFactor {
                value: self.cutoff_factor,
            });
        }
        if !is_positive(self.potential_depth) {
            return Err(SimError::InvalidPotentialDepth {
                value: self.potential_depth,
            });
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
