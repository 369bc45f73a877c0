use crate::{
    cells::CellList,
    particles::Particles,
    potentials::potential::{accumulate_pair, pair_energy, PairPotential, PotentialManager},
};

/// Evaluates only pairs of particles that share a cell or sit in adjacent cells.
#[derive(Debug, Clone)]
pub struct CellListManager<P> {
    potential: P,
}

impl<P: PairPotential> CellListManager<P> {
    pub fn new(potential: P) -> Self {
        Self { potential }
    }

    pub fn potential(&self) -> &P {
        &self.potential
    }
}

impl<P: PairPotential> PotentialManager for CellListManager<P> {
    fn compute_accelerations(&self, particles: &mut Particles, cells: &CellList) -> f64 {
        particles.accelerations.fill(0.0);
        let mut potential_energy = 0.0;
        cells.for_each_pair(|i, j| {
            potential_energy += accumulate_pair(&self.potential, particles, i, j);
        });
        potential_energy
    }

    fn potential_energy(&self, particles: &Particles, cells: &CellList) -> f64 {
        let mut potential_energy = 0.0;
        cells.for_each_pair(|i, j| {
            potential_energy += pair_energy(&self.potential, particles, i, j);
        });
        potential_energy
    }
}

/// Brute-force O(N²) reference over every unique pair; the cell list is ignored.
#[derive(Debug, Clone)]
pub struct AllPairsManager<P> {
    potential: P,
}

impl<P: PairPotential> AllPairsManager<P> {
    pub fn new(potential: P) -> Self {
        Self { potential }
    }

    pub fn potential(&self) -> &P {
        &self.potential
    }

    pub fn total_potential_energy(&self, particles: &Particles) -> f64 {
        let n = particles.n_particles;
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| pair_energy(&self.potential, particles, i, j))
            .sum()
    }
}

impl<P: PairPotential> PotentialManager for AllPairsManager<P> {
    fn compute_accelerations(&self, particles: &mut Particles, _cells: &CellList) -> f64 {
        particles.accelerations.fill(0.0);
        let n = particles.n_particles;
        let mut potential_energy = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                potential_energy += accumulate_pair(&self.potential, particles, i, j);
            }
        }
        potential_energy
    }

    fn potential_energy(&self, particles: &Particles, _cells: &CellList) -> f64 {
        self.total_potential_energy(particles)
    }
}
