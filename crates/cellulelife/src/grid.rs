use crate::components::{Cellule, LifeState};

/// Wrap a possibly out-of-range coordinate onto a torus of size `range`.
fn wrap(coord: isize, range: isize) -> usize {
    coord.rem_euclid(range) as usize
}

/// The board. Row-major flat storage: index = row * width + column.
/// Edges wrap around, so every cell has exactly eight neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    pub width: usize,
    pub height: usize,
    cellules: Vec<Cellule>,
}

impl LifeGrid {
    /// An empty (all dead) board.
    pub fn new(width: usize, height: usize) -> Self {
        LifeGrid {
            width,
            height,
            cellules: vec![Cellule::dead(); width * height],
        }
    }

    /// Build a board from existing cells. Missing cells are dead, extra cells
    /// are dropped.
    pub fn with_cellules(width: usize, height: usize, mut cellules: Vec<Cellule>) -> Self {
        cellules.resize(width * height, Cellule::dead());
        LifeGrid {
            width,
            height,
            cellules,
        }
    }

    #[inline]
    pub fn idx(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    #[inline]
    fn wrapped_idx(&self, row: isize, column: isize) -> usize {
        let row = wrap(row, self.height as isize);
        let column = wrap(column, self.width as isize);
        row * self.width + column
    }

    pub fn len(&self) -> usize {
        self.cellules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cellules.is_empty()
    }

    pub fn cellules(&self) -> &[Cellule] {
        &self.cellules
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Cellule> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.cellules.get(self.idx(row, column))
    }

    /// Replace all cells, keeping the board dimensions.
    pub fn set_cellules(&mut self, cellules: Vec<Cellule>) {
        *self = Self::with_cellules(self.width, self.height, cellules);
    }

    /// Flip the cell at a flat index. Returns the new state, or `None` if the
    /// index is off the board.
    pub fn toggle(&mut self, index: usize) -> Option<LifeState> {
        let cellule = self.cellules.get_mut(index)?;
        cellule.toggle();
        Some(cellule.life_state)
    }

    pub fn alive_count(&self) -> usize {
        self.cellules.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of live cells among the eight wrapped neighbours of (row, column).
    pub fn alive_neighbors(&self, row: usize, column: usize) -> usize {
        let (row, column) = (row as isize, column as isize);
        let mut count = 0;
        for d_row in -1..=1 {
            for d_column in -1..=1 {
                if d_row == 0 && d_column == 0 {
                    continue;
                }
                if self.cellules[self.wrapped_idx(row + d_row, column + d_column)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation with the B3/S23 rules.
    pub fn step(&mut self) {
        if self.cellules.is_empty() {
            return;
        }
        let mut next = self.cellules.clone();
        for row in 0..self.height {
            for column in 0..self.width {
                let neighbors = self.alive_neighbors(row, column);
                let i = self.idx(row, column);
                let alive = self.cellules[i].is_alive();
                match (alive, neighbors) {
                    (true, n) if !(2..=3).contains(&n) => next[i].set_dead(),
                    (false, 3) => next[i].set_alive(),
                    _ => {}
                }
            }
        }
        self.cellules = next;
    }

    /// `"0"`/`"1"` per cell, row-major. This is the wire format of a board.
    pub fn serialize(&self) -> String {
        self.cellules
            .iter()
            .map(|c| if c.is_alive() { '1' } else { '0' })
            .collect()
    }

    /// Packed bitset of the live cells, used to compare generations cheaply.
    pub fn snapshot(&self) -> Vec<u64> {
        let mut bits = vec![0u64; self.cellules.len().div_ceil(64)];
        for (i, cellule) in self.cellules.iter().enumerate() {
            if cellule.is_alive() {
                bits[i / 64] |= 1 << (i % 64);
            }
        }
        bits
    }
}
