use log::{info, trace};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    cells::{CellGrid, CellList},
    config::SimulationConfig,
    diagnostics::Integrals,
    domain::Domain,
    errors::{Result, SimError},
    integrator::VelocityVerlet,
    particles::Particles,
    potentials::{AllPairsManager, CellListManager, LennardJones, PotentialManager},
    records::{IntegralRecord, ParticleRecord},
};

/// Owns the particle store, the cell list and the record buffers of one run.
///
/// Each [`Simulation::step`] appends one [`ParticleRecord`] per particle and a
/// single [`IntegralRecord`]; the buffers grow until taken with
/// [`Simulation::take_particle_records`] and [`Simulation::take_integral_records`].
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    domain: Domain,
    integrator: VelocityVerlet,
    forces: CellListManager<LennardJones>,
    reference: AllPairsManager<LennardJones>,
    particles: Particles,
    cells: CellList,
    rng: SmallRng,
    step_count: usize,
    accelerations_primed: bool,
    particle_records: Vec<ParticleRecord>,
    integral_records: Vec<IntegralRecord>,
}

impl Simulation {
    /// Validates `config` and prepares an empty run; particles are created by
    /// [`Simulation::initialize`].
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let domain = Domain::from_config(&config)?;
        let grid = CellGrid::new(&domain, config.cutoff())?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::rng().random()),
        };
        let potential = LennardJones::from_config(&config);

        info!(
            "simulation of {} particles in [{}, {}]^3, {} cells per axis (cell width {:.6})",
            config.n_particles,
            domain.lower(),
            domain.upper(),
            grid.cells_per_axis(),
            grid.cell_width()
        );

        Ok(Self {
            integrator: VelocityVerlet::new(config.time_step),
            forces: CellListManager::new(potential),
            reference: AllPairsManager::new(potential),
            particles: Particles::new_zeroes(0, 1.0),
            cells: CellList::new(grid),
            rng,
            step_count: 0,
            accelerations_primed: false,
            particle_records: Vec::new(),
            integral_records: Vec::new(),
            domain,
            config,
        })
    }

    /// Starts from an explicit particle state instead of a random one.
    pub fn with_particles(config: SimulationConfig, particles: Particles) -> Result<Self> {
        if particles.n_particles != config.n_particles {
            return Err(SimError::ParticleCountMismatch {
                expected: config.n_particles,
                found: particles.n_particles,
            });
        }
        let mut this = Self::new(config)?;
        this.load(particles);
        Ok(this)
    }

    /// Draws a fresh random state with total kinetic energy `target_kinetic_energy`.
    ///
    /// Resets the step counter and discards any buffered records.
    pub fn initialize(&mut self, target_kinetic_energy: f64, mass: f64) -> Result<()> {
        let particles = Particles::create_uniform_from_normal_distribution(
            &self.domain,
            target_kinetic_energy,
            mass,
            &mut self.rng,
        )?;
        info!(
            "initialized {} particles with kinetic energy {:.6}",
            particles.n_particles,
            particles.kinetic_energy()
        );
        self.load(particles);
        Ok(())
    }

    fn load(&mut self, particles: Particles) {
        self.particles = particles;
        self.cells.rebuild(&self.particles.positions);
        self.step_count = 0;
        self.accelerations_primed = false;
        self.particle_records.clear();
        self.integral_records.clear();
    }

    /// Advances the run by one time step and buffers its records.
    pub fn step(&mut self) {
        if !self.accelerations_primed {
            // the first half kick needs the forces of the initial positions
            self.cells.rebuild(&self.particles.positions);
            self.forces
                .compute_accelerations(&mut self.particles, &self.cells);
            self.accelerations_primed = true;
        }

        self.integrator
            .step(&mut self.particles, &mut self.cells, &self.forces);
        self.step_count += 1;

        trace!(
            "step {}: {} particles outside the domain",
            self.step_count,
            self.particles_outside_domain()
        );

        self.record();
    }

    fn record(&mut self) {
        let step = self.step_count;
        self.particle_records
            .extend(self.particles.iter().map(|particle| ParticleRecord {
                step,
                id: particle.id,
                position: particle.position,
                velocity: particle.velocity,
            }));

        let integrals = self.integrals();
        self.integral_records.push(IntegralRecord {
            step,
            total_energy: integrals.total_energy(),
            linear_momentum: integrals.linear_momentum,
            angular_momentum: integrals.angular_momentum,
        });
    }

    fn particles_outside_domain(&self) -> usize {
        self.particles
            .iter()
            .filter(|particle| !self.domain.contains(&particle.position))
            .count()
    }

    /// Integrals of the current state, with the potential energy summed over all pairs.
    pub fn integrals(&self) -> Integrals {
        Integrals::measure(&self.particles, &self.cells, &self.reference)
    }

    /// Potential energy restricted to the pairs the integrator sees.
    pub fn cell_potential_energy(&self) -> f64 {
        self.forces.potential_energy(&self.particles, &self.cells)
    }

    pub fn particle_records_since_last_flush(&self) -> &[ParticleRecord] {
        &self.particle_records
    }

    pub fn integral_records_since_last_flush(&self) -> &[IntegralRecord] {
        &self.integral_records
    }

    pub fn take_particle_records(&mut self) -> Vec<ParticleRecord> {
        std::mem::take(&mut self.particle_records)
    }

    pub fn take_integral_records(&mut self) -> Vec<IntegralRecord> {
        std::mem::take(&mut self.integral_records)
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn cells(&self) -> &CellList {
        &self.cells
    }

    pub fn grid(&self) -> &CellGrid {
        self.cells.grid()
    }

    pub fn potential(&self) -> &LennardJones {
        self.forces.potential()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }
}
