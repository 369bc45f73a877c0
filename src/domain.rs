use crate::{
    config::SimulationConfig,
    errors::{Result, SimError},
    math::Vec3,
};

/// Non-periodic cubic domain with the same bounds on every axis.
///
/// Particles are free to leave the nominal boundaries; the domain only defines
/// where initial positions are drawn and where the cell grid is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    lower: f64,
    upper: f64,
    n_particles: usize,
}

impl Domain {
    pub fn new(lower: f64, upper: f64, n_particles: usize) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(SimError::InvalidDomain { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            n_particles,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let (lower, upper) = config.boundaries;
        Self::new(lower, upper, config.n_particles)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn boundaries(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles
    }

    pub fn contains(&self, position: &Vec3) -> bool {
        position
            .iter()
            .all(|&x| x >= self.lower && x <= self.upper)
    }
}
