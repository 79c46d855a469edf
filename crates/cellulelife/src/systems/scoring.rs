use std::cmp::Reverse;

use crate::components::HIGH_SCORE_TABLE_SIZE;
use crate::scores::ScoreEntry;

/// The parts of a finished run that decide whether it makes a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome<'a> {
    pub seed_label: &'a str,
    pub modification_count: usize,
    pub step_count: u32,
    pub active_count: u32,
}

/// Only runs of the same seed with the same number of edits compete.
fn competitors<'s>(scores: &'s [ScoreEntry], run: &RunOutcome<'_>) -> Vec<&'s ScoreEntry> {
    scores
        .iter()
        .filter(|score| {
            score.seed_label == run.seed_label
                && score.modifications.len() == run.modification_count
        })
        .collect()
}

/// A Life score is a run that lasted longer than the weakest of the top
/// entries, or any run while the table still has room.
pub fn is_life_high_score(scores: &[ScoreEntry], run: &RunOutcome<'_>) -> bool {
    let mut table = competitors(scores, run);
    if table.len() < HIGH_SCORE_TABLE_SIZE {
        return true;
    }
    table.sort_by_key(|score| Reverse(score.step_count));
    table
        .get(HIGH_SCORE_TABLE_SIZE - 1)
        .map_or(true, |weakest| run.step_count > weakest.step_count)
}

/// A Death score is a run that left fewer cells alive than the weakest of
/// the top entries, or any run while the table still has room.
pub fn is_death_high_score(scores: &[ScoreEntry], run: &RunOutcome<'_>) -> bool {
    let mut table = competitors(scores, run);
    if table.len() < HIGH_SCORE_TABLE_SIZE {
        return true;
    }
    table.sort_by_key(|score| score.active_count);
    table
        .get(HIGH_SCORE_TABLE_SIZE - 1)
        .map_or(true, |weakest| run.active_count < weakest.active_count)
}
