use crate::{math::Vec3, particles::new::Particles};

impl Particles {
    pub fn total_mass(&self) -> f64 {
        self.masses.sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .column_iter()
            .zip(self.masses.iter())
            .map(|(velocity, &mass)| 0.5 * mass * velocity.norm_squared())
            .sum()
    }

    /// Mass-weighted mean position; the origin for an empty store.
    pub fn center_of_mass(&self) -> Vec3 {
        let total_mass = self.total_mass();
        if total_mass <= 0.0 {
            return Vec3::zeros();
        }
        // (3 × n) * (n × 1) = (3 × 1)
        (&self.positions * &self.masses) / total_mass
    }

    pub fn linear_momentum(&self) -> Vec3 {
        &self.velocities * &self.masses
    }

    /// Total angular momentum about the coordinate origin.
    pub fn angular_momentum(&self) -> Vec3 {
        self.positions
            .column_iter()
            .zip(self.velocities.column_iter())
            .zip(self.masses.iter())
            .fold(Vec3::zeros(), |total, ((r_i, v_i), &mass)| {
                total + r_i.cross(&v_i) * mass
            })
    }
}
