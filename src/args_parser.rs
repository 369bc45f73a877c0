use std::path::PathBuf;

use clap::Parser;

use cellmd::{
    config::SimulationConfig,
    constants::{
        DEFAULT_CUTOFF_FACTOR, DEFAULT_INTEGRALS_OUT, DEFAULT_PARTICLES_OUT,
        DEFAULT_POTENTIAL_DEPTH, DEFAULT_TIME_STEP,
    },
};

pub const USAGE: &str = "usage: cellmd [Number of particles] [Number of time steps] [Target energy]";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Number of particles
    pub n_particles: usize,

    /// Number of time steps
    pub n_steps: usize,

    /// Target total kinetic energy of the initial state
    pub target_energy: f64,

    /// Seed for the random initial state; drawn from system entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    pub time_step: f64,

    /// Lennard-Jones sigma [default: (1/N)^(1/3)]
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Lennard-Jones epsilon
    #[arg(long, default_value_t = DEFAULT_POTENTIAL_DEPTH)]
    pub potential_depth: f64,

    /// Cell width in units of the minimum distance
    #[arg(long, default_value_t = DEFAULT_CUTOFF_FACTOR)]
    pub cutoff_factor: f64,

    #[arg(long, default_value = DEFAULT_PARTICLES_OUT)]
    pub particles_out: PathBuf,

    #[arg(long, default_value = DEFAULT_INTEGRALS_OUT)]
    pub integrals_out: PathBuf,
}

impl Args {
    pub fn to_config(&self) -> SimulationConfig {
        let config = SimulationConfig::for_particles(self.n_particles)
            .with_time_step(self.time_step)
            .with_potential_depth(self.potential_depth)
            .with_cutoff_factor(self.cutoff_factor)
            .with_seed(self.seed);
        match self.min_distance {
            Some(min_distance) => config.with_min_distance(min_distance),
            None => config,
        }
    }
}
