use crate::{cells::CellList, math::Vec3, particles::Particles};

/// Pairwise interaction evaluated on the separation `r_ij = r_i - r_j`.
pub trait PairPotential: Send + Sync {
    fn potential(&self, r_ij: &Vec3) -> f64;

    /// Force on particle `i` due to particle `j`. Particle `j` feels the negation.
    fn force(&self, r_ij: &Vec3) -> Vec3;

    fn potential_and_force(&self, r_ij: &Vec3) -> (f64, Vec3) {
        (self.potential(r_ij), self.force(r_ij))
    }
}

/// Strategy that decides which pairs interact and accumulates their forces.
pub trait PotentialManager {
    /// Overwrites `particles.accelerations` with the net pair force over mass
    /// and returns the potential energy of the pairs that were visited.
    fn compute_accelerations(&self, particles: &mut Particles, cells: &CellList) -> f64;

    /// Potential energy over the same pairs, without touching accelerations.
    fn potential_energy(&self, particles: &Particles, cells: &CellList) -> f64;
}

/// Applies the pair `(i, j)` to the acceleration table and returns its energy.
pub(crate) fn accumulate_pair<P: PairPotential + ?Sized>(
    potential: &P,
    particles: &mut Particles,
    i: usize,
    j: usize,
) -> f64 {
    let r_ij = particles.positions.column(i) - particles.positions.column(j);
    let (u_ij, force_ij) = potential.potential_and_force(&r_ij);

    let (m_i, m_j) = (particles.masses[i], particles.masses[j]);
    {
        let mut a_i = particles.accelerations.column_mut(i);
        a_i += force_ij / m_i;

        let mut a_j = particles.accelerations.column_mut(j);
        a_j -= force_ij / m_j;
    }
    u_ij
}

pub(crate) fn pair_energy<P: PairPotential + ?Sized>(
    potential: &P,
    particles: &Particles,
    i: usize,
    j: usize,
) -> f64 {
    let r_ij = particles.positions.column(i) - particles.positions.column(j);
    potential.potential(&r_ij)
}
