//! Conserved quantities of the particle system and their drift over a run.
use crate::{
    cells::CellList,
    math::{relative_drift, Vec3},
    particles::Particles,
    potentials::PotentialManager,
};

/// Snapshot of the integrals of motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrals {
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub center_of_mass: Vec3,
    pub linear_momentum: Vec3,
    /// about the coordinate origin
    pub angular_momentum: Vec3,
}

impl Integrals {
    /// Measures the current state; the potential energy covers whatever pairs
    /// `manager` evaluates.
    pub fn measure<M: PotentialManager + ?Sized>(
        particles: &Particles,
        cells: &CellList,
        manager: &M,
    ) -> Self {
        Self {
            kinetic_energy: particles.kinetic_energy(),
            potential_energy: manager.potential_energy(particles, cells),
            center_of_mass: particles.center_of_mass(),
            linear_momentum: particles.linear_momentum(),
            angular_momentum: particles.angular_momentum(),
        }
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }

    pub fn is_finite(&self) -> bool {
        self.total_energy().is_finite()
            && self.linear_momentum.iter().all(|p| p.is_finite())
            && self.angular_momentum.iter().all(|l| l.is_finite())
    }
}

/// Deviation of the current integrals from a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationReport {
    /// |E - E₀| / |E₀|, absolute when E₀ is zero
    pub energy_error: f64,
    pub momentum_error: Vec3,
    pub angular_momentum_error: Vec3,
}

impl ConservationReport {
    pub fn is_violated(&self, energy_tol: f64, momentum_tol: f64, angular_momentum_tol: f64) -> bool {
        self.energy_error > energy_tol
            || self.momentum_error.norm() > momentum_tol
            || self.angular_momentum_error.norm() > angular_momentum_tol
    }
}

#[derive(Debug, Clone)]
pub struct ConservationMonitor {
    baseline: Integrals,
}

impl ConservationMonitor {
    pub fn new(baseline: Integrals) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &Integrals {
        &self.baseline
    }

    pub fn check(&self, current: &Integrals) -> ConservationReport {
        ConservationReport {
            energy_error: self.energy_drift(current),
            momentum_error: current.linear_momentum - self.baseline.linear_momentum,
            angular_momentum_error: current.angular_momentum - self.baseline.angular_momentum,
        }
    }

    pub fn energy_drift(&self, current: &Integrals) -> f64 {
        relative_drift(current.total_energy(), self.baseline.total_energy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cells::CellGrid,
        domain::Domain,
        potentials::{AllPairsManager, LennardJones},
    };
    use approx::assert_relative_eq;

    fn integrals(kinetic_energy: f64, potential_energy: f64, p: Vec3) -> Integrals {
        Integrals {
            kinetic_energy,
            potential_energy,
            center_of_mass: Vec3::zeros(),
            linear_momentum: p,
            angular_momentum: Vec3::zeros(),
        }
    }

    #[test]
    fn measure_sums_kinetic_and_pair_energy() {
        let lj = LennardJones::new(1.0, 0.3);
        let r = lj.equilibrium_distance();
        let particles = Particles::from_state(
            &[Vec3::zeros(), Vec3::new(r, 0.0, 0.0)],
            &[Vec3::new(0.0, 1.0, 0.0), Vec3::zeros()],
            2.0,
        )
        .unwrap();
        let domain = Domain::new(-1.0, 1.0, 2).unwrap();
        let cells = CellList::new(CellGrid::new(&domain, 0.75).unwrap());

        let measured = Integrals::measure(&particles, &cells, &AllPairsManager::new(lj));
        assert_relative_eq!(measured.kinetic_energy, 1.0, epsilon = 1e-12);
        assert_relative_eq!(measured.potential_energy, -1.0, max_relative = 1e-12);
        assert_relative_eq!(measured.total_energy(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(measured.linear_momentum, Vec3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(measured.center_of_mass, Vec3::new(0.5 * r, 0.0, 0.0), epsilon = 1e-12);
        assert!(measured.is_finite());
    }

    #[test]
    fn monitor_reports_relative_energy_drift() {
        let monitor = ConservationMonitor::new(integrals(1.0, -11.0, Vec3::zeros()));
        let report = monitor.check(&integrals(1.2, -11.1, Vec3::new(0.0, 0.0, 1e-3)));

        assert_relative_eq!(report.energy_error, 0.01, epsilon = 1e-12);
        assert!(!report.is_violated(0.02, 1e-2, 1e-2));
        assert!(report.is_violated(0.005, 1e-2, 1e-2));
        assert!(report.is_violated(0.02, 1e-4, 1e-2));
    }

    #[test]
    fn non_finite_energy_is_flagged() {
        assert!(!integrals(f64::NAN, 0.0, Vec3::zeros()).is_finite());
        assert!(!integrals(0.0, 0.0, Vec3::new(f64::INFINITY, 0.0, 0.0)).is_finite());
    }
}
