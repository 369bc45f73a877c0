//! Cell list bookkeeping while a random system evolves.

use std::collections::HashSet;

use cellmd::{Simulation, SimulationConfig};

fn assert_cells_consistent(simulation: &Simulation) {
    let cells = simulation.cells();
    let grid = cells.grid();
    let particles = simulation.particles();

    assert_eq!(cells.ranges().len(), grid.max_cell_index() + 1);

    let mut covered = Vec::new();
    for (cell, range) in cells.ranges().iter().enumerate() {
        if let Some(range) = range {
            assert_eq!(cells.particles_in(cell), &cells.order()[range.clone()]);
        }
        for &id in cells.particles_in(cell) {
            assert_eq!(grid.cell_id_of(&particles.position(id)), cell);
            covered.push(id);
        }
    }
    covered.sort_unstable();
    assert_eq!(covered, (0..particles.n_particles).collect::<Vec<_>>());
}

#[test]
fn every_rebuild_files_each_particle_once() {
    let config = SimulationConfig::for_particles(300).with_seed(Some(77));
    let mut simulation = Simulation::new(config).unwrap();
    simulation.initialize(50.0, 1.0).unwrap();
    assert_cells_consistent(&simulation);

    for _ in 0..25 {
        simulation.step();
        assert_cells_consistent(&simulation);
    }
}

#[test]
fn unique_pairs_cover_the_neighbour_candidates() {
    let config = SimulationConfig::for_particles(150).with_seed(Some(3));
    let mut simulation = Simulation::new(config).unwrap();
    simulation.initialize(1.0, 1.0).unwrap();
    let cells = simulation.cells();

    let mut pairs = HashSet::new();
    cells.for_each_pair(|i, j| {
        assert!(pairs.insert((i.min(j), i.max(j))), "pair ({i}, {j}) visited twice");
    });

    for id in 0..150 {
        let candidates = cells.neighbour_candidates(id);
        assert!(!candidates.contains(&id));
        for other in candidates {
            assert!(pairs.contains(&(id.min(other), id.max(other))));
        }
    }
    let candidate_total: usize = (0..150).map(|id| cells.neighbour_candidates(id).len()).sum();
    assert_eq!(candidate_total, 2 * pairs.len());
}
