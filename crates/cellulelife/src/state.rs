use bytemuck::{Pod, Zeroable};

use crate::components::{
    BASE_CELLULE_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_FPS, DEFAULT_RATE, DEFAULT_WIDTH, MAX_NAME_LEN,
    MAX_STEPS, MIN_RATE,
};
use crate::grid::LifeGrid;
use crate::host::HostContext;
use crate::scores::{
    GridModification, ResultResponse, ScoreEntry, SendResultPayload, SerializedGameState,
};
use crate::seeds::{get_seeds, Seed};
use crate::systems::fps::FpsDetector;
use crate::systems::history::History;
use crate::systems::palette::{Color, GradientManager, DEAD_COLOR};
use crate::systems::scoring::{is_death_high_score, is_life_high_score, RunOutcome};

/// Where the current run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SessionPhase {
    /// Seed loaded, cells can be flipped.
    Editing = 0,
    Playing = 1,
    /// Ended by the player. Only the modal can reset it.
    Stopped = 2,
    /// Ended by a loop or the step limit. Waiting for the modal.
    Finished = 3,
}

/// Network work for the runtime to carry out. The state only queues it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetRequest {
    FetchScores { url: String },
    SubmitResult { url: String, payload: SendResultPayload },
}

/// One cell quad, 8 floats = 32 bytes. Same layout as the engine's
/// `QuadInstance`: position, size, RGBA in 0..1.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CellInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CellInstance {
    fn new(x: f32, y: f32, size: f32, color: Color) -> Self {
        CellInstance {
            x,
            y,
            width: size,
            height: size,
            r: color.red / 255.0,
            g: color.green / 255.0,
            b: color.blue / 255.0,
            a: 1.0,
        }
    }
}

/// Everything one page session needs: the board, the run in progress, the
/// high-score table and the pending network work.
pub struct AppState {
    ctx: HostContext,
    grid: LifeGrid,
    history: History,
    seeds: Vec<Seed>,
    seed_index: usize,
    phase: SessionPhase,
    step_count: u32,
    active_count: u32,
    modifications: Vec<GridModification>,
    has_life_high_score: bool,
    has_death_high_score: bool,
    user_name: String,
    user_name_is_valid: bool,
    has_no_network: bool,
    rate: f64,
    max_fps: i64,
    last_step_ms: f64,
    fps: FpsDetector,
    previous_scores: Vec<ScoreEntry>,
    outbox: Vec<NetRequest>,
    gradient: GradientManager,
    render_buffer: Vec<CellInstance>,
}

impl AppState {
    /// Default board and seeds. Queues the initial high-score fetch.
    pub fn new(ctx: HostContext, now_ms: f64) -> Self {
        Self::with_seeds(ctx, get_seeds(), DEFAULT_WIDTH, DEFAULT_HEIGHT, now_ms)
    }

    pub fn with_seeds(
        ctx: HostContext,
        seeds: Vec<Seed>,
        width: usize,
        height: usize,
        now_ms: f64,
    ) -> Self {
        let mut state = AppState {
            ctx,
            grid: LifeGrid::new(width, height),
            history: History::new(),
            seeds,
            seed_index: 0,
            phase: SessionPhase::Editing,
            step_count: 0,
            active_count: 0,
            modifications: Vec::new(),
            has_life_high_score: false,
            has_death_high_score: false,
            user_name: String::new(),
            user_name_is_valid: false,
            has_no_network: false,
            rate: DEFAULT_RATE,
            max_fps: DEFAULT_MAX_FPS,
            last_step_ms: now_ms,
            fps: FpsDetector::new(now_ms),
            previous_scores: Vec::new(),
            outbox: Vec::new(),
            gradient: GradientManager::default(),
            render_buffer: Vec::with_capacity(width * height),
        };
        state.reset_to_current_seed();
        state.request_scores();
        state.rebuild_render_buffer();
        state
    }

    // --- Player actions ---

    /// Flip the cell at (column, row). Only while editing. Flipping an
    /// already modified cell undoes that modification.
    pub fn grid_clicked(&mut self, column: usize, row: usize) -> bool {
        if self.phase != SessionPhase::Editing
            || column >= self.grid.width
            || row >= self.grid.height
        {
            return false;
        }
        let index = self.grid.idx(row, column);

        let before = self.modifications.len();
        self.modifications.retain(|m| m.grid_index != index);
        if self.modifications.len() == before {
            self.modifications.push(GridModification {
                step_index: self.step_count,
                grid_index: index,
            });
        }

        self.grid.toggle(index);
        self.update_active_count();
        true
    }

    /// Start a run from the edited seed. A run starts once; afterwards only
    /// the modal (or a seed change) gets back to editing.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Editing {
            return false;
        }
        self.phase = SessionPhase::Playing;
        self.history.clear_previous_steps();
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::Stopped;
        self.history.clear_previous_steps();
        true
    }

    /// Switch to another seed and start over.
    pub fn select_seed(&mut self, index: usize) -> bool {
        if index >= self.seeds.len() {
            log::warn!("no seed at index {index}");
            return false;
        }
        self.seed_index = index;
        self.reset_to_current_seed();
        true
    }

    /// Generations per second, clamped to what the display can show.
    pub fn set_rate(&mut self, rate: f64) {
        if !rate.is_finite() {
            return;
        }
        self.rate = rate.clamp(MIN_RATE, self.max_fps as f64);
    }

    pub fn change_user_name(&mut self, user_name: &str) {
        self.user_name = user_name.to_string();
        self.user_name_is_valid = self.is_valid_user_name(user_name);
    }

    fn is_valid_user_name(&self, user_name: &str) -> bool {
        let len = user_name.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return false;
        }
        match self.ctx.filter() {
            Some(filter) => !filter.contains_profanity(user_name),
            None => true,
        }
    }

    /// Queue the finished run for submission and start over. Needs a pending
    /// high score and a valid name.
    pub fn submit_score(&mut self) -> bool {
        if !self.has_high_score() || !self.user_name_is_valid {
            return false;
        }
        let payload = self.build_payload();
        match self.ctx.config().submit_result() {
            Some(url) => self.outbox.push(NetRequest::SubmitResult {
                url: url.to_string(),
                payload,
            }),
            None => log::warn!("no result endpoint configured, score not submitted"),
        }
        self.reset_to_current_seed();
        true
    }

    pub fn dismiss_score_modal(&mut self) -> bool {
        if !self.modal_visible() {
            return false;
        }
        self.reset_to_current_seed();
        true
    }

    // --- Frame loop ---

    /// Called once per animation frame. Steps the board when a generation is
    /// due at the current rate.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(fps) = self.fps.record_frame(now_ms) {
            self.set_max_fps(fps);
        }

        let frame_time = 1000.0 / self.rate;
        if self.last_step_ms + frame_time < now_ms {
            self.last_step_ms = now_ms;
            self.step_game();
        }

        self.rebuild_render_buffer();
    }

    /// Advance one generation if playing. Ends the run on a repeated
    /// generation or past the step limit.
    pub fn step_game(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.step_count += 1;
        self.grid.step();
        let in_endless_loop = self.history.is_in_endless_loop(&self.grid);
        self.update_active_count();

        if in_endless_loop || self.step_count > MAX_STEPS {
            self.finish_run();
        }
    }

    fn finish_run(&mut self) {
        let run = RunOutcome {
            seed_label: self.current_seed_label(),
            modification_count: self.modifications.len(),
            step_count: self.step_count,
            active_count: self.active_count,
        };
        let life = is_life_high_score(&self.previous_scores, &run);
        let death = is_death_high_score(&self.previous_scores, &run);
        self.has_life_high_score = life;
        self.has_death_high_score = death;
        self.phase = SessionPhase::Finished;
        self.history.clear_previous_steps();
        log::info!(
            "run finished after {} steps with {} edits, {} cells alive",
            self.step_count,
            self.modifications.len(),
            self.active_count
        );
    }

    fn set_max_fps(&mut self, fps: i64) {
        self.max_fps = fps.max(MIN_RATE as i64);
        self.rate = self.rate.min(self.max_fps as f64);
    }

    // --- Network ---

    fn request_scores(&mut self) {
        match self.ctx.config().get_high_scores() {
            Some(url) => self.outbox.push(NetRequest::FetchScores {
                url: url.to_string(),
            }),
            None => log::warn!("no high-score endpoint configured, playing offline"),
        }
    }

    /// Take the queued requests.
    pub fn drain_requests(&mut self) -> Vec<NetRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub fn scores_loaded(&mut self, scores: Vec<ScoreEntry>) {
        log::info!("loaded {} high scores", scores.len());
        self.previous_scores = scores;
        self.has_no_network = false;
    }

    pub fn scores_unavailable(&mut self, reason: &str) {
        log::warn!("high scores unavailable: {reason}");
        self.has_no_network = true;
    }

    pub fn result_submitted(&mut self, response: ResultResponse) {
        log::info!("result submitted: {}", response.message);
    }

    pub fn build_payload(&self) -> SendResultPayload {
        SendResultPayload {
            game_state: SerializedGameState {
                cellules: self.grid.serialize(),
                active: false,
                cellules_width: self.grid.width,
                cellules_height: self.grid.height,
            },
            step_count: self.step_count,
            active_count: self.active_count,
            modifications: self.modifications.clone(),
            seed_label: self.current_seed_label().to_string(),
            user_name: self.user_name.clone(),
        }
    }

    // --- Helpers ---

    fn reset_to_current_seed(&mut self) {
        let cellules = self
            .seeds
            .get(self.seed_index)
            .map(|seed| seed.cellules.clone())
            .unwrap_or_default();
        self.grid.set_cellules(cellules);
        self.phase = SessionPhase::Editing;
        self.step_count = 0;
        self.modifications.clear();
        self.has_life_high_score = false;
        self.has_death_high_score = false;
        self.history.clear_previous_steps();
        self.update_active_count();
    }

    fn current_seed_label(&self) -> &str {
        self.seeds
            .get(self.seed_index)
            .map_or("", |seed| seed.label.as_str())
    }

    fn update_active_count(&mut self) {
        self.active_count = self.grid.alive_count() as u32;
    }

    /// One quad per cell, row-major.
    fn rebuild_render_buffer(&mut self) {
        self.render_buffer.clear();
        let size = BASE_CELLULE_SIZE;
        for row in 0..self.grid.height {
            for column in 0..self.grid.width {
                let color = match self.grid.get(row, column) {
                    Some(cellule) if cellule.is_alive() => self.gradient.cell_color(row, column),
                    _ => DEAD_COLOR,
                };
                self.render_buffer.push(CellInstance::new(
                    column as f32 * size,
                    row as f32 * size,
                    size,
                    color,
                ));
            }
        }
    }

    // --- Accessors ---

    pub fn modal_visible(&self) -> bool {
        self.step_count > 0 && self.phase != SessionPhase::Playing
    }

    pub fn has_high_score(&self) -> bool {
        self.has_life_high_score || self.has_death_high_score
    }

    pub fn render_buffer(&self) -> &[CellInstance] {
        &self.render_buffer
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn active_count(&self) -> u32 {
        self.active_count
    }

    pub fn modifications(&self) -> &[GridModification] {
        &self.modifications
    }

    pub fn has_life_high_score(&self) -> bool {
        self.has_life_high_score
    }

    pub fn has_death_high_score(&self) -> bool {
        self.has_death_high_score
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_name_is_valid(&self) -> bool {
        self.user_name_is_valid
    }

    pub fn has_no_network(&self) -> bool {
        self.has_no_network
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn max_fps(&self) -> i64 {
        self.max_fps
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn seed_index(&self) -> usize {
        self.seed_index
    }

    pub fn previous_scores(&self) -> &[ScoreEntry] {
        &self.previous_scores
    }

    pub fn context(&self) -> &HostContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Cellule;
    use crate::config::EndpointConfig;
    use crate::filter::{ContentFilter, WordFilter};
    use std::rc::Rc;

    const SUBMIT: &str = "https://api.example.com/submit";
    const SCORES: &str = "https://api.example.com/scores";

    fn online() -> HostContext {
        let filter: Rc<dyn ContentFilter> = Rc::new(WordFilter::default());
        HostContext::new(
            Rc::new(EndpointConfig::new(Some(SUBMIT.into()), Some(SCORES.into()))),
            Some(filter),
        )
    }

    fn offline() -> HostContext {
        HostContext::new(Rc::new(EndpointConfig::default()), None)
    }

    fn pattern(label: &str, width: usize, height: usize, alive: &[(usize, usize)]) -> Seed {
        let mut cellules = vec![Cellule::dead(); width * height];
        for &(row, column) in alive {
            cellules[row * width + column] = Cellule::alive();
        }
        Seed {
            label: label.into(),
            cellules,
        }
    }

    /// A 6x6 board with a block (still life) and a blinker (period 2).
    fn small_state(ctx: HostContext) -> AppState {
        let seeds = vec![
            pattern("Block", 6, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)]),
            pattern("Blinker", 6, 6, &[(2, 1), (2, 2), (2, 3)]),
        ];
        AppState::with_seeds(ctx, seeds, 6, 6, 0.0)
    }

    fn run_to_end(state: &mut AppState) {
        assert!(state.start());
        for _ in 0..10 {
            state.step_game();
            if state.phase() == SessionPhase::Finished {
                return;
            }
        }
        panic!("run did not finish");
    }

    fn score(label: &str, steps: u32, active: u32) -> ScoreEntry {
        ScoreEntry {
            game_state: SerializedGameState {
                cellules: String::new(),
                active: false,
                cellules_width: 6,
                cellules_height: 6,
            },
            step_count: steps,
            active_count: active,
            modifications: vec![],
            seed_label: label.into(),
            user_name: "BOB".into(),
            id: format!("{label}-{steps}"),
        }
    }

    #[test]
    fn new_session_loads_first_seed_and_queues_score_fetch() {
        let mut state = AppState::new(online(), 0.0);
        assert_eq!(state.phase(), SessionPhase::Editing);
        assert_eq!(state.seed_index(), 0);
        assert_eq!(state.active_count(), 13);
        assert_eq!(
            state.drain_requests(),
            vec![NetRequest::FetchScores { url: SCORES.into() }]
        );
        assert!(state.drain_requests().is_empty());
    }

    #[test]
    fn offline_session_queues_nothing() {
        let mut state = AppState::new(offline(), 0.0);
        assert!(state.drain_requests().is_empty());
        assert!(!state.has_no_network());
    }

    #[test]
    fn clicking_a_cell_twice_undoes_the_modification() {
        let mut state = small_state(offline());
        assert!(state.grid_clicked(4, 3));
        assert_eq!(state.active_count(), 5);
        assert_eq!(
            state.modifications(),
            &[GridModification {
                step_index: 0,
                grid_index: 3 * 6 + 4
            }]
        );

        assert!(state.grid_clicked(4, 3));
        assert_eq!(state.active_count(), 4);
        assert!(state.modifications().is_empty());
    }

    #[test]
    fn clicks_outside_editing_or_off_board_are_ignored() {
        let mut state = small_state(offline());
        assert!(!state.grid_clicked(6, 0));
        assert!(!state.grid_clicked(0, 6));

        state.start();
        assert!(!state.grid_clicked(0, 0));
        state.stop();
        assert!(!state.grid_clicked(0, 0));
        assert!(state.modifications().is_empty());
    }

    #[test]
    fn start_and_stop_follow_the_session_phases() {
        let mut state = small_state(offline());
        assert!(!state.stop());
        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state.phase(), SessionPhase::Playing);
        assert!(state.stop());
        assert_eq!(state.phase(), SessionPhase::Stopped);
    }

    #[test]
    fn stopped_run_can_only_be_dismissed() {
        let mut state = small_state(offline());
        state.select_seed(1);
        state.start();
        state.step_game();
        state.stop();
        assert!(state.modal_visible());
        assert!(!state.start(), "a stopped run does not resume");
        assert_eq!(state.phase(), SessionPhase::Stopped);
        assert_eq!(state.step_count(), 1);

        assert!(state.dismiss_score_modal());
        assert!(!state.modal_visible());
        assert!(state.start());
    }

    #[test]
    fn still_life_finishes_on_the_second_step() {
        let mut state = small_state(offline());
        run_to_end(&mut state);
        assert_eq!(state.step_count(), 2);
        assert_eq!(state.active_count(), 4);
        assert!(state.modal_visible());
    }

    #[test]
    fn oscillator_finishes_when_a_generation_repeats() {
        let mut state = small_state(offline());
        state.select_seed(1);
        run_to_end(&mut state);
        assert_eq!(state.step_count(), 3);
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn run_is_cut_off_after_the_step_limit() {
        let mut state = small_state(offline());
        state.select_seed(1);
        state.start();
        state.step_count = MAX_STEPS;
        state.step_game();
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.step_count(), MAX_STEPS + 1);
    }

    #[test]
    fn stepping_does_nothing_unless_playing() {
        let mut state = small_state(offline());
        state.select_seed(1);
        let before = state.grid().clone();
        state.step_game();
        assert_eq!(state.grid(), &before);
        assert_eq!(state.step_count(), 0);
    }

    #[test]
    fn empty_table_makes_any_run_a_high_score() {
        let mut state = small_state(offline());
        run_to_end(&mut state);
        assert!(state.has_life_high_score());
        assert!(state.has_death_high_score());
    }

    #[test]
    fn strong_table_means_no_high_score() {
        let mut state = small_state(offline());
        state.scores_loaded((0..20).map(|i| score("Block", 1000 + i, 0)).collect());
        run_to_end(&mut state);
        assert!(!state.has_high_score());
        assert!(state.modal_visible());
        assert!(!state.submit_score());
    }

    #[test]
    fn scores_of_other_seeds_do_not_count() {
        let mut state = small_state(offline());
        state.scores_loaded((0..20).map(|i| score("Blinker", 1000 + i, 0)).collect());
        run_to_end(&mut state);
        assert!(state.has_life_high_score());
    }

    #[test]
    fn names_must_be_short_non_empty_and_clean() {
        let mut state = small_state(online());
        state.change_user_name("ABCD");
        assert!(state.user_name_is_valid());
        state.change_user_name("");
        assert!(!state.user_name_is_valid());
        state.change_user_name("ABCDE");
        assert!(!state.user_name_is_valid());
        state.change_user_name("shit");
        assert!(!state.user_name_is_valid());
        assert_eq!(state.user_name(), "shit");
    }

    #[test]
    fn without_a_filter_only_length_is_checked() {
        let mut state = small_state(offline());
        state.change_user_name("shit");
        assert!(state.user_name_is_valid());
    }

    #[test]
    fn submitting_queues_the_result_and_resets() {
        let mut state = small_state(online());
        state.drain_requests();
        state.grid_clicked(5, 5);
        state.grid_clicked(5, 5);
        state.grid_clicked(4, 4);
        run_to_end(&mut state);

        assert!(!state.submit_score(), "needs a valid name");
        state.change_user_name("ZED");
        let expected = state.build_payload();
        assert!(state.submit_score());

        let requests = state.drain_requests();
        assert_eq!(
            requests,
            vec![NetRequest::SubmitResult {
                url: SUBMIT.into(),
                payload: expected.clone(),
            }]
        );
        assert_eq!(expected.seed_label, "Block");
        assert_eq!(expected.user_name, "ZED");
        assert_eq!(expected.modifications.len(), 1);
        assert_eq!(expected.game_state.cellules.len(), 36);
        assert!(!expected.game_state.active);

        assert_eq!(state.phase(), SessionPhase::Editing);
        assert_eq!(state.step_count(), 0);
        assert!(!state.has_high_score());
        assert!(!state.modal_visible());
    }

    #[test]
    fn submitting_offline_still_resets() {
        let mut state = small_state(offline());
        run_to_end(&mut state);
        state.change_user_name("ZED");
        assert!(state.submit_score());
        assert!(state.drain_requests().is_empty());
        assert_eq!(state.phase(), SessionPhase::Editing);
    }

    #[test]
    fn dismissing_the_modal_resets_to_the_current_seed() {
        let mut state = small_state(offline());
        state.select_seed(1);
        assert!(!state.dismiss_score_modal(), "no modal before a run");
        state.start();
        state.step_game();
        state.stop();
        assert!(state.modal_visible());
        assert!(state.dismiss_score_modal());
        assert_eq!(state.seed_index(), 1);
        assert_eq!(state.step_count(), 0);
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn selecting_a_seed_discards_edits() {
        let mut state = small_state(offline());
        state.grid_clicked(0, 0);
        assert!(state.select_seed(1));
        assert!(state.modifications().is_empty());
        assert_eq!(state.active_count(), 3);
        assert!(!state.select_seed(2));
        assert_eq!(state.seed_index(), 1);
    }

    #[test]
    fn rate_is_clamped_to_display_rate() {
        let mut state = small_state(offline());
        state.set_rate(500.0);
        assert_eq!(state.rate(), DEFAULT_MAX_FPS as f64);
        state.set_rate(0.0);
        assert_eq!(state.rate(), MIN_RATE);
        state.set_rate(f64::NAN);
        assert_eq!(state.rate(), MIN_RATE);
    }

    #[test]
    fn detected_frame_rate_caps_the_rate() {
        let mut state = small_state(offline());
        let mut now = 0.0;
        for _ in 0..200 {
            now += 1000.0 / 30.0;
            state.tick(now);
        }
        assert_eq!(state.max_fps(), 30);
        assert_eq!(state.rate(), 30.0);
    }

    #[test]
    fn tick_steps_at_the_chosen_rate() {
        let mut state = small_state(offline());
        state.select_seed(1);
        state.set_rate(10.0);
        state.start();
        state.tick(50.0);
        assert_eq!(state.step_count(), 0);
        state.tick(101.0);
        assert_eq!(state.step_count(), 1);
        state.tick(150.0);
        assert_eq!(state.step_count(), 1);
    }

    #[test]
    fn network_outcomes_toggle_the_offline_flag() {
        let mut state = small_state(online());
        state.scores_unavailable("HTTP 503");
        assert!(state.has_no_network());
        state.scores_loaded(vec![score("Block", 3, 3)]);
        assert!(!state.has_no_network());
        assert_eq!(state.previous_scores().len(), 1);
    }

    #[test]
    fn render_buffer_has_one_quad_per_cell() {
        let mut state = small_state(offline());
        state.tick(1.0);
        let buffer = state.render_buffer();
        assert_eq!(buffer.len(), 36);

        // (1, 1) is alive in the block seed, (0, 0) is dead.
        let dead = buffer[0];
        assert_eq!((dead.x, dead.y, dead.width), (0.0, 0.0, BASE_CELLULE_SIZE));
        assert!((dead.b - 221.0 / 255.0).abs() < 1e-6);

        let alive = buffer[7];
        assert_eq!((alive.x, alive.y), (BASE_CELLULE_SIZE, BASE_CELLULE_SIZE));
        let expected = GradientManager::default().cell_color(1, 1);
        assert!((alive.r - expected.red / 255.0).abs() < 1e-6);
        assert_eq!(alive.a, 1.0);
    }

    #[test]
    fn cell_instance_is_eight_floats() {
        assert_eq!(std::mem::size_of::<CellInstance>(), 32);
        let cells = [CellInstance::default()];
        let bytes: &[u8] = bytemuck::cast_slice(&cells);
        assert_eq!(bytes.len(), 32);
    }
}
