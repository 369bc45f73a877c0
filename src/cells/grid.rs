use crate::{
    config::SimulationConfig,
    constants::MAX_CELL_COUNT,
    domain::Domain,
    errors::{Result, SimError},
    math::Vec3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset3 {
    pub dx: isize,
    pub dy: isize,
    pub dz: isize,
}

const fn offset(dx: isize, dy: isize, dz: isize) -> Offset3 {
    Offset3 { dx, dy, dz }
}

// 13 forward neighbour offsets of a 3D cell-linked list. For any two adjacent
// cells exactly one lies in the half shell of the other.
pub const HALF_SHELL_OFFSETS: [Offset3; 13] = [
    offset(1, 0, 0),
    offset(-1, 1, 0),
    offset(0, 1, 0),
    offset(1, 1, 0),
    offset(-1, -1, 1),
    offset(0, -1, 1),
    offset(1, -1, 1),
    offset(-1, 0, 1),
    offset(0, 0, 1),
    offset(1, 0, 1),
    offset(-1, 1, 1),
    offset(0, 1, 1),
    offset(1, 1, 1),
];

/// Uniform, non-periodic grid of cubic cells anchored at the domain's lower bound.
///
/// A cell id is the linear index `(iz * M + iy) * M + ix` of its axis indices,
/// where `M` is [`CellGrid::cells_per_axis`]. Coordinates beyond the domain are
/// clamped onto the outermost cells, so every position has a valid id.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    lower: f64,
    cell_width: f64,
    cells_per_axis: usize,
}

impl CellGrid {
    pub fn new(domain: &Domain, cell_width: f64) -> Result<Self> {
        if !(cell_width.is_finite() && cell_width > 0.0) {
            return Err(SimError::InvalidCellWidth { value: cell_width });
        }
        // saturates to usize::MAX for widths far below the domain size
        let cells_per_axis = ((domain.width() / cell_width).floor() as usize).max(1);
        match cells_per_axis.checked_pow(3) {
            Some(count) if count <= MAX_CELL_COUNT => {}
            _ => {
                return Err(SimError::GridTooLarge {
                    cells_per_axis,
                    max_cells: MAX_CELL_COUNT,
                })
            }
        }
        Ok(Self {
            lower: domain.lower(),
            cell_width,
            cells_per_axis,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(&Domain::from_config(config)?, config.cutoff())
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cells_per_axis(&self) -> usize {
        self.cells_per_axis
    }

    pub fn cell_count(&self) -> usize {
        self.cells_per_axis.pow(3)
    }

    /// Largest valid cell id.
    pub fn max_cell_index(&self) -> usize {
        self.cell_count() - 1
    }

    pub fn axis_index(&self, x: f64) -> usize {
        // the float-to-int cast saturates, which maps anything below the lower bound to 0
        let index = ((x - self.lower) / self.cell_width).floor() as usize;
        index.min(self.cells_per_axis - 1)
    }

    pub fn axis_indices(&self, x: f64, y: f64, z: f64) -> [usize; 3] {
        [self.axis_index(x), self.axis_index(y), self.axis_index(z)]
    }

    pub fn cell_id(&self, x: f64, y: f64, z: f64) -> usize {
        self.linear_index(self.axis_indices(x, y, z))
    }

    pub fn cell_id_of(&self, position: &Vec3) -> usize {
        self.cell_id(position.x, position.y, position.z)
    }

    pub fn linear_index(&self, [cx, cy, cz]: [usize; 3]) -> usize {
        let m = self.cells_per_axis;
        (cz * m + cy) * m + cx
    }

    pub fn axis_indices_of(&self, cell: usize) -> [usize; 3] {
        let m = self.cells_per_axis;
        [cell % m, (cell / m) % m, cell / (m * m)]
    }

    fn shifted(&self, [cx, cy, cz]: [usize; 3], offset: Offset3) -> Option<usize> {
        let shift = |c: usize, d: isize| {
            c.checked_add_signed(d)
                .filter(|&shifted| shifted < self.cells_per_axis)
        };
        Some(self.linear_index([
            shift(cx, offset.dx)?,
            shift(cy, offset.dy)?,
            shift(cz, offset.dz)?,
        ]))
    }

    /// The cell itself and its up to 26 adjacent cells, in ascending id order.
    /// Offsets that leave the grid are skipped.
    pub fn neighbours(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let axes = self.axis_indices_of(cell);
        (-1isize..=1)
            .flat_map(|dz| {
                (-1isize..=1).flat_map(move |dy| (-1isize..=1).map(move |dx| offset(dx, dy, dz)))
            })
            .filter_map(move |offset| self.shifted(axes, offset))
    }

    /// Adjacent cells reached through [`HALF_SHELL_OFFSETS`].
    pub fn forward_neighbours(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let axes = self.axis_indices_of(cell);
        HALF_SHELL_OFFSETS
            .iter()
            .filter_map(move |&offset| self.shifted(axes, offset))
    }
}
