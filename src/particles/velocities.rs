use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::{
    domain::Domain,
    errors::{Result, SimError},
    particles::new::Particles,
};

impl Particles {
    /// Creates `domain.n_particles()` particles of equal `mass`.
    ///
    /// Positions are uniform inside the domain bounds, velocity components are
    /// standard-normal draws rescaled by one common factor so that the total
    /// kinetic energy equals `target_kinetic_energy`. Accelerations start at zero
    /// and ids follow creation order.
    pub fn create_uniform_from_normal_distribution<R: Rng + ?Sized>(
        domain: &Domain,
        target_kinetic_energy: f64,
        mass: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { value: mass });
        }
        if !(target_kinetic_energy.is_finite() && target_kinetic_energy >= 0.0) {
            return Err(SimError::InvalidTargetEnergy {
                value: target_kinetic_energy,
            });
        }

        let mut this = Self::new_zeroes(domain.n_particles(), mass);
        this.initialise_positions(domain, rng);
        this.initialise_velocities(rng);
        this.rescale_to_kinetic_energy(target_kinetic_energy);
        Ok(this)
    }

    fn initialise_positions<R: Rng + ?Sized>(&mut self, domain: &Domain, rng: &mut R) {
        let (lower, upper) = domain.boundaries();
        for x in self.positions.iter_mut() {
            *x = rng.random_range(lower..=upper);
        }
    }

    fn initialise_velocities<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for v in self.velocities.iter_mut() {
            *v = StandardNormal.sample(rng);
        }
    }

    /// Scales every velocity by the same factor so the kinetic energy hits `target`.
    pub fn rescale_to_kinetic_energy(&mut self, target: f64) {
        let kinetic_energy = self.kinetic_energy();
        if kinetic_energy <= 0.0 {
            if target > 0.0 {
                warn!("cannot rescale a system at rest to kinetic energy {target}");
            }
            return;
        }

        let lambda = (target / kinetic_energy).sqrt();
        debug!("rescaling velocities by {lambda:.6} (kinetic energy {kinetic_energy:.6} -> {target})");
        self.velocities *= lambda;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    fn domain(n: usize) -> Domain {
        Domain::new(-1.0, 1.0, n).unwrap()
    }

    #[test]
    fn hits_target_kinetic_energy() {
        let mut rng = SmallRng::seed_from_u64(7);
        let particles =
            Particles::create_uniform_from_normal_distribution(&domain(50), 12.5, 1.0, &mut rng)
                .unwrap();
        assert_eq!(particles.n_particles, 50);
        assert_relative_eq!(particles.kinetic_energy(), 12.5, max_relative = 1e-12);
    }

    #[test]
    fn positions_inside_bounds_and_accelerations_zero() {
        let mut rng = SmallRng::seed_from_u64(11);
        let domain = domain(200);
        let particles =
            Particles::create_uniform_from_normal_distribution(&domain, 1.0, 2.0, &mut rng)
                .unwrap();
        for particle in particles.iter() {
            assert!(domain.contains(&particle.position), "{:?}", particle.position);
            assert_eq!(particle.acceleration.norm(), 0.0);
            assert_eq!(particle.mass, 2.0);
        }
    }

    #[test]
    fn same_seed_same_state() {
        let a = Particles::create_uniform_from_normal_distribution(
            &domain(16),
            3.0,
            1.0,
            &mut SmallRng::seed_from_u64(42),
        )
        .unwrap();
        let b = Particles::create_uniform_from_normal_distribution(
            &domain(16),
            3.0,
            1.0,
            &mut SmallRng::seed_from_u64(42),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rescaling_keeps_momentum_direction() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut particles =
            Particles::create_uniform_from_normal_distribution(&domain(20), 1.0, 1.0, &mut rng)
                .unwrap();
        let before = particles.linear_momentum();
        particles.rescale_to_kinetic_energy(4.0);
        let after = particles.linear_momentum();

        // kinetic energy 1 -> 4 scales every velocity by 2
        assert_relative_eq!(after, before * 2.0, epsilon = 1e-12);
        assert_relative_eq!(particles.kinetic_energy(), 4.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_target_stops_everything() {
        let mut rng = SmallRng::seed_from_u64(5);
        let particles =
            Particles::create_uniform_from_normal_distribution(&domain(4), 0.0, 1.0, &mut rng)
                .unwrap();
        assert_eq!(particles.kinetic_energy(), 0.0);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = Particles::create_uniform_from_normal_distribution(&domain(4), -1.0, 1.0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidTargetEnergy { .. }));

        let err = Particles::create_uniform_from_normal_distribution(&domain(4), 1.0, 0.0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidMass { .. }));
    }
}
