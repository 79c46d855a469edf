use serde::{Deserialize, Serialize};

use crate::components::{Cellule, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A named starting pattern. High scores are only compared between runs of
/// the same seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub label: String,
    pub cellules: Vec<Cellule>,
}

impl Seed {
    fn build(label: &str, width: usize, height: usize, alive: impl Fn(i64, i64) -> bool) -> Seed {
        let mut cellules = Vec::with_capacity(width * height);
        for row in 0..height as i64 {
            for column in 0..width as i64 {
                cellules.push(if alive(row, column) {
                    Cellule::alive()
                } else {
                    Cellule::dead()
                });
            }
        }
        Seed {
            label: label.to_string(),
            cellules,
        }
    }
}

/// A horizontal line of 13 cells across the middle of the board.
pub fn seed_middle_line_starter(width: usize, height: usize) -> Seed {
    let middle_row = (height / 2) as i64;
    let middle_column = (width / 2) as i64;
    Seed::build("Middle Line", width, height, |row, column| {
        row == middle_row && (column - middle_column).abs() < 7
    })
}

/// A 3x8 block with two holes in its middle row, which settles into a
/// pentadecathlon.
pub fn seed_pentadecathlon(width: usize, height: usize) -> Seed {
    let middle_row = (height / 2) as i64;
    let middle_column = (width / 2) as i64;
    Seed::build("Pentadecathlon", width, height, |row, column| {
        let in_block = (row - middle_row).abs() <= 1
            && column > middle_column - 5
            && column < middle_column + 4;
        let is_hole =
            row == middle_row && (column == middle_column - 3 || column == middle_column + 2);
        in_block && !is_hole
    })
}

/// The R-pentomino, centered.
pub fn seed_r_pentomino(width: usize, height: usize) -> Seed {
    let middle_row = (height / 2) as i64;
    let middle_column = (width / 2) as i64;
    Seed::build("R-Pentomino", width, height, |row, column| {
        matches!(
            (row - middle_row, column - middle_column),
            (-1, 0) | (-1, 1) | (0, -1) | (0, 0) | (1, 0)
        )
    })
}

/// All seeds for a board of the given size, in menu order.
pub fn seeds_for(width: usize, height: usize) -> Vec<Seed> {
    vec![
        seed_middle_line_starter(width, height),
        seed_pentadecathlon(width, height),
        seed_r_pentomino(width, height),
    ]
}

/// All seeds for the default board.
pub fn get_seeds() -> Vec<Seed> {
    seeds_for(DEFAULT_WIDTH, DEFAULT_HEIGHT)
}
