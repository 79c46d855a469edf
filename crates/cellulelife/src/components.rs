use serde::{Deserialize, Serialize};

/// Whether a cellule is currently part of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LifeState {
    Dead = 0,
    Alive = 1,
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cellule {
    pub life_state: LifeState,
}

impl Cellule {
    pub const fn alive() -> Self {
        Cellule {
            life_state: LifeState::Alive,
        }
    }

    pub const fn dead() -> Self {
        Cellule {
            life_state: LifeState::Dead,
        }
    }

    pub fn is_alive(self) -> bool {
        self.life_state == LifeState::Alive
    }

    pub fn set_alive(&mut self) {
        self.life_state = LifeState::Alive;
    }

    pub fn set_dead(&mut self) {
        self.life_state = LifeState::Dead;
    }

    pub fn toggle(&mut self) {
        self.life_state = match self.life_state {
            LifeState::Alive => LifeState::Dead,
            LifeState::Dead => LifeState::Alive,
        };
    }
}

impl Default for Cellule {
    fn default() -> Self {
        Cellule::dead()
    }
}

/// Default board dimensions.
pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 40;

/// Size of one cell on the canvas backing store, in pixels.
pub const BASE_CELLULE_SIZE: f32 = 20.0;

/// A run is cut off after this many generations.
pub const MAX_STEPS: u32 = 4000;

/// Generations per second at startup, and the fallback refresh rate until
/// the frame rate has been measured.
pub const DEFAULT_RATE: f64 = 60.0;
pub const DEFAULT_MAX_FPS: i64 = 60;
pub const MIN_RATE: f64 = 1.0;

/// Maximum number of characters in a high-score name.
pub const MAX_NAME_LEN: usize = 4;

/// Number of entries in each seed's high-score table.
pub const HIGH_SCORE_TABLE_SIZE: usize = 20;

/// Id of the canvas element the module draws on.
pub const CANVAS_ID: &str = "game-board";
