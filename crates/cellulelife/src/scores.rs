use serde::{Deserialize, Serialize};

/// A cell the player flipped before the run started.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridModification {
    pub step_index: u32,
    pub grid_index: usize,
}

/// Final board of a run in wire form: one `0`/`1` per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedGameState {
    pub cellules: String,
    pub active: bool,
    pub cellules_width: usize,
    pub cellules_height: usize,
}

/// Body of `POST API_URL_SUBMIT_RESULT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResultPayload {
    pub game_state: SerializedGameState,
    pub step_count: u32,
    pub active_count: u32,
    pub modifications: Vec<GridModification>,
    pub seed_label: String,
    pub user_name: String,
}

/// One row of the high-score list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub game_state: SerializedGameState,
    pub step_count: u32,
    pub active_count: u32,
    pub modifications: Vec<GridModification>,
    pub seed_label: String,
    pub user_name: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body of `GET API_URL_GET_HIGH_SCORES`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: Vec<ScoreEntry>,
}

/// Body returned by a result submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub message: String,
}
