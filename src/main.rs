mod args_parser;

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use log::{info, warn};

use cellmd::{
    constants::DEFAULT_PARTICLE_MASS, diagnostics::ConservationMonitor, simulation::Simulation,
    writers::RecordWriter,
};

use crate::args_parser::{Args, USAGE};

const RULE: &str = "-----------------------------------------------------------------------------";

fn main() -> Result<()> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.print()?,
                _ => {
                    eprintln!("{err}");
                    println!("{USAGE}");
                }
            }
            return Ok(());
        }
    };

    let config = args.to_config();
    let mut simulation = Simulation::new(config).context("invalid simulation setup")?;
    print_banner(&simulation, &args);

    simulation
        .initialize(args.target_energy, DEFAULT_PARTICLE_MASS)
        .context("failed to create the initial particle state")?;
    let monitor = ConservationMonitor::new(simulation.integrals());

    let mut particles_out = RecordWriter::create(&args.particles_out)?;
    particles_out.write_particle_header(args.n_particles, args.n_steps)?;
    let mut integrals_out = RecordWriter::create(&args.integrals_out)?;
    integrals_out.write_integral_header(args.n_steps, simulation.config().time_step)?;

    let start = Instant::now();
    let mut stdout = io::stdout();
    let mut last_percent = None;
    print!("Status:   0% done - current step: 0");
    stdout.flush()?;

    for step in 1..=args.n_steps {
        simulation.step();

        particles_out
            .write_particle_records(&simulation.take_particle_records())
            .with_context(|| format!("writing {}", args.particles_out.display()))?;
        integrals_out
            .write_integral_records(&simulation.take_integral_records())
            .with_context(|| format!("writing {}", args.integrals_out.display()))?;

        let percent = (100 * step) / args.n_steps;
        if last_percent != Some(percent) || step == args.n_steps {
            print!("\rStatus: {percent:>3}% done - current step: {step}");
            stdout.flush()?;
            last_percent = Some(percent);
        }
    }
    println!();

    particles_out.flush()?;
    integrals_out.flush()?;
    let elapsed = start.elapsed();

    let integrals = simulation.integrals();
    if !integrals.is_finite() {
        warn!("integrals of motion are no longer finite; the time step is likely too large");
    }
    info!(
        "relative energy drift after {} steps: {:.3e}",
        simulation.step_count(),
        monitor.energy_drift(&integrals)
    );

    println!("Computation time: {:.3} s", elapsed.as_secs_f64());
    println!("{RULE}");
    Ok(())
}

fn print_banner(simulation: &Simulation, args: &Args) {
    let config = simulation.config();
    let grid = simulation.grid();
    let (lower, upper) = config.boundaries;

    println!("{RULE}");
    println!("particles             {}", config.n_particles);
    println!("boundaries            [{lower}, {upper}]");
    println!("domain width          {}", config.domain_width());
    println!("minimum distance      {}", config.min_distance);
    println!("cutoff distance       {}", config.cutoff());
    println!("potential depth       {}", config.potential_depth);
    println!("target kinetic energy {}", args.target_energy);
    println!("time steps            {}", args.n_steps);
    println!("time step size        {}", config.time_step);
    println!("cells per axis        {}", grid.cells_per_axis());
    println!("maximum cell index    {}", grid.max_cell_index());
    println!("{RULE}");
}
