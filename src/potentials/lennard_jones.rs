use crate::{config::SimulationConfig, math::Vec3, potentials::potential::PairPotential};

/// 12-6 Lennard-Jones pair potential without truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self { epsilon, sigma }
    }

    /// Well depth from `potential_depth`, length scale from `min_distance`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.potential_depth, config.min_distance)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Separation of the potential minimum, `2^(1/6) σ`.
    pub fn equilibrium_distance(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }

    // (σ/r)^12 and (σ/r)^6 from the squared separation
    fn powers(&self, r2: f64) -> (f64, f64) {
        // NaN separations from a diverged run pass through to the diagnostics
        debug_assert!(r2 != 0.0, "Lennard-Jones pair at zero separation");
        let attraction = (self.sigma * self.sigma / r2).powi(3);
        (attraction * attraction, attraction)
    }
}

impl PairPotential for LennardJones {
    fn potential(&self, r_ij: &Vec3) -> f64 {
        let (repulsion, attraction) = self.powers(r_ij.norm_squared());
        4.0 * self.epsilon * (repulsion - attraction)
    }

    fn force(&self, r_ij: &Vec3) -> Vec3 {
        let r2 = r_ij.norm_squared();
        let (repulsion, attraction) = self.powers(r2);
        (24.0 * self.epsilon * (2.0 * repulsion - attraction) / r2) * r_ij
    }

    fn potential_and_force(&self, r_ij: &Vec3) -> (f64, Vec3) {
        let r2 = r_ij.norm_squared();
        let (repulsion, attraction) = self.powers(r2);
        let potential = 4.0 * self.epsilon * (repulsion - attraction);
        let force = (24.0 * self.epsilon * (2.0 * repulsion - attraction) / r2) * r_ij;
        (potential, force)
    }
}
