use na::{DVector, Matrix3xX};

use crate::{
    errors::{Result, SimError},
    math::Vec3,
};

/// Owned snapshot of a single particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub mass: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
}

/// Column-wise particle store.
///
/// Column `i` of every matrix belongs to the particle with id `i`. Columns are
/// never reordered: spatial sorting happens on an index permutation held by
/// [`crate::cells::CellList`], so ids stay stable for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Particles {
    pub n_particles: usize,
    pub positions: Matrix3xX<f64>,
    pub velocities: Matrix3xX<f64>,
    pub accelerations: Matrix3xX<f64>,
    pub masses: DVector<f64>,
}

impl Particles {
    pub fn new_zeroes(n_particles: usize, mass: f64) -> Self {
        Self {
            n_particles,
            positions: Matrix3xX::zeros(n_particles),
            velocities: Matrix3xX::zeros(n_particles),
            accelerations: Matrix3xX::zeros(n_particles),
            masses: DVector::from_element(n_particles, mass),
        }
    }

    /// Builds a store from explicit positions and velocities with zero acceleration.
    pub fn from_state(positions: &[Vec3], velocities: &[Vec3], mass: f64) -> Result<Self> {
        if positions.len() != velocities.len() {
            return Err(SimError::ParticleCountMismatch {
                expected: positions.len(),
                found: velocities.len(),
            });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { value: mass });
        }

        let n_particles = positions.len();
        let mut this = Self::new_zeroes(n_particles, mass);
        this.positions = Matrix3xX::from_fn(n_particles, |row, col| positions[col][row]);
        this.velocities = Matrix3xX::from_fn(n_particles, |row, col| velocities[col][row]);
        Ok(this)
    }

    pub fn is_empty(&self) -> bool {
        self.n_particles == 0
    }

    pub fn position(&self, id: usize) -> Vec3 {
        self.positions.column(id).into_owned()
    }

    pub fn velocity(&self, id: usize) -> Vec3 {
        self.velocities.column(id).into_owned()
    }

    pub fn particle(&self, id: usize) -> Particle {
        Particle {
            id,
            mass: self.masses[id],
            position: self.position(id),
            velocity: self.velocity(id),
            acceleration: self.accelerations.column(id).into_owned(),
        }
    }

    /// Particles in id order.
    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.n_particles).map(|id| self.particle(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zeroes_is_at_rest() {
        let particles = Particles::new_zeroes(3, 2.0);
        assert_eq!(particles.n_particles, 3);
        assert_eq!(particles.positions.ncols(), 3);
        assert!(particles.velocities.iter().all(|&v| v == 0.0));
        assert!(particles.masses.iter().all(|&m| m == 2.0));
    }

    #[test]
    fn from_state_keeps_ids_in_order() {
        let positions = [Vec3::new(0.1, 0.2, 0.3), Vec3::new(-0.5, 0.0, 0.5)];
        let velocities = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)];
        let particles = Particles::from_state(&positions, &velocities, 1.5).unwrap();

        let snapshot: Vec<Particle> = particles.iter().collect();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].id, 1);
        assert_eq!(snapshot[1].position, positions[1]);
        assert_eq!(snapshot[0].velocity, velocities[0]);
        assert_eq!(snapshot[0].acceleration, Vec3::zeros());
        assert_eq!(snapshot[0].mass, 1.5);
    }

    #[test]
    fn from_state_rejects_mismatched_lengths() {
        let err = Particles::from_state(&[Vec3::zeros()], &[], 1.0).unwrap_err();
        assert!(matches!(
            err,
            SimError::ParticleCountMismatch {
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn empty_store() {
        let particles = Particles::from_state(&[], &[], 1.0).unwrap();
        assert!(particles.is_empty());
        assert_eq!(particles.iter().count(), 0);
    }
}
