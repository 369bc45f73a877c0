use std::ops::Range;

use log::debug;
use na::Matrix3xX;

use crate::cells::grid::CellGrid;

/// Particle ids bucketed by cell.
///
/// After [`CellList::rebuild`] the `order` vector is a permutation of all ids
/// sorted by `(cell id, particle id)`, and `ranges[c]` is the slice of `order`
/// holding the members of cell `c`, or `None` when the cell is empty. The
/// particle store itself is never reordered.
#[derive(Debug, Clone)]
pub struct CellList {
    grid: CellGrid,
    cell_ids: Vec<usize>,
    order: Vec<usize>,
    ranges: Vec<Option<Range<usize>>>,
}

impl CellList {
    pub fn new(grid: CellGrid) -> Self {
        let ranges = vec![None; grid.cell_count()];
        Self {
            grid,
            cell_ids: Vec::new(),
            order: Vec::new(),
            ranges,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Reassigns every particle to its current cell.
    pub fn rebuild(&mut self, positions: &Matrix3xX<f64>) {
        let grid = &self.grid;
        self.cell_ids.clear();
        self.cell_ids
            .extend(positions.column_iter().map(|r| grid.cell_id(r[0], r[1], r[2])));

        let cell_ids = &self.cell_ids;
        self.order.clear();
        self.order.extend(0..cell_ids.len());
        self.order.sort_unstable_by_key(|&id| (cell_ids[id], id));

        self.ranges.iter_mut().for_each(|range| *range = None);
        let mut occupied = 0;
        let mut start = 0;
        while start < self.order.len() {
            let cell = cell_ids[self.order[start]];
            let len = self.order[start..]
                .iter()
                .take_while(|&&id| cell_ids[id] == cell)
                .count();
            self.ranges[cell] = Some(start..start + len);
            start += len;
            occupied += 1;
        }

        debug!(
            "cell list rebuilt: {} particles in {occupied} of {} cells",
            self.order.len(),
            self.ranges.len()
        );
    }

    /// Particle ids sorted by `(cell id, particle id)`.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn ranges(&self) -> &[Option<Range<usize>>] {
        &self.ranges
    }

    pub fn range(&self, cell: usize) -> Option<Range<usize>> {
        self.ranges.get(cell).cloned().flatten()
    }

    /// Members of `cell` in ascending id order; empty for unoccupied or unknown cells.
    pub fn particles_in(&self, cell: usize) -> &[usize] {
        match self.range(cell) {
            Some(range) => &self.order[range],
            None => &[],
        }
    }

    pub fn cell_of(&self, id: usize) -> Option<usize> {
        self.cell_ids.get(id).copied()
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .filter_map(|(cell, range)| range.as_ref().map(|_| cell))
    }

    /// Every particle in the 27-cell block around `id`'s cell, excluding `id`.
    pub fn neighbour_candidates(&self, id: usize) -> Vec<usize> {
        let Some(cell) = self.cell_of(id) else {
            return Vec::new();
        };
        self.grid
            .neighbours(cell)
            .flat_map(|neighbour| self.particles_in(neighbour).iter().copied())
            .filter(|&other| other != id)
            .collect()
    }

    /// Calls `f` exactly once for each unordered pair of particles in the same
    /// or adjacent cells.
    pub fn for_each_pair<F: FnMut(usize, usize)>(&self, mut f: F) {
        for cell in self.occupied_cells() {
            let members = self.particles_in(cell);
            for (k, &i) in members.iter().enumerate() {
                for &j in &members[k + 1..] {
                    f(i, j);
                }
            }
            for neighbour in self.grid.forward_neighbours(cell) {
                let others = self.particles_in(neighbour);
                for &i in members {
                    for &j in others {
                        f(i, j);
                    }
                }
            }
        }
    }
}
