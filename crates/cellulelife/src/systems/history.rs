use std::collections::HashSet;

use crate::grid::LifeGrid;

/// Generations seen since the last clear. A generation that repeats any
/// earlier one means the board has entered a cycle (or froze) and the run
/// can never produce anything new.
#[derive(Debug, Default, Clone)]
pub struct History {
    previous_steps: HashSet<Vec<u64>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current generation. Returns true if it was already seen.
    pub fn is_in_endless_loop(&mut self, grid: &LifeGrid) -> bool {
        !self.previous_steps.insert(grid.snapshot())
    }

    pub fn clear_previous_steps(&mut self) {
        self.previous_steps.clear();
    }

    pub fn len(&self) -> usize {
        self.previous_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previous_steps.is_empty()
    }
}
