use crate::{cells::CellList, particles::Particles, potentials::PotentialManager};

/// Velocity Verlet with a cell-list rebuild between drift and force evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVerlet {
    dt: f64,
}

impl VelocityVerlet {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// Advances every particle by one time step and returns the potential
    /// energy of the pairs the manager evaluated.
    ///
    /// `particles.accelerations` must hold the accelerations of the current
    /// positions when this is called; they are left holding the accelerations
    /// of the new positions.
    pub fn step<M: PotentialManager + ?Sized>(
        &self,
        particles: &mut Particles,
        cells: &mut CellList,
        manager: &M,
    ) -> f64 {
        let half_dt = 0.5 * self.dt;

        particles.velocities += &particles.accelerations * half_dt;
        particles.positions += &particles.velocities * self.dt;

        cells.rebuild(&particles.positions);
        let potential_energy = manager.compute_accelerations(particles, cells);

        particles.velocities += &particles.accelerations * half_dt;

        potential_energy
    }
}
