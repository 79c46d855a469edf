use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{start_frame_loop, App};
use crate::config::EndpointConfig;
use crate::filter::{ContentFilter, JsFilter, WordFilter};
use crate::host::{Host, HostContext, HostError, SimulationModule, StaticLoader};

/// Global a page installs its content filter under.
const FILTER_GLOBAL: &str = "filter";

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the running app. Before `run_app` (or during a nested
/// call) this logs a warning and returns the default value.
pub(crate) fn with_app<R: Default>(f: impl FnOnce(&mut App) -> R) -> R {
    APP.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            log::warn!("cellulelife: nested call into the running app ignored");
            return R::default();
        };
        match slot.as_mut() {
            Some(app) => f(app),
            None => {
                log::warn!("cellulelife: app not running, call run_app() first");
                R::default()
            }
        }
    })
}

fn is_running() -> bool {
    APP.with(|cell| cell.try_borrow().map_or(true, |slot| slot.is_some()))
}

/// The statically linked simulation module.
pub struct LifeModule;

impl SimulationModule for LifeModule {
    fn run_app(self, ctx: HostContext) {
        if is_running() {
            log::warn!("cellulelife: run_app called twice, ignoring");
            return;
        }
        if let Err(err) = start(ctx) {
            log::error!("cellulelife: failed to start: {err:?}");
        }
    }
}

fn start(ctx: HostContext) -> Result<(), JsValue> {
    let app = App::new(ctx)?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    with_app(|app| app.spawn_renderer());
    start_frame_loop()?;
    log::info!("cellulelife: app running");
    Ok(())
}

/// Module entry point for a JS host shell. Reads the endpoint configuration
/// and the content filter the page published on the global object.
#[wasm_bindgen]
pub fn run_app() {
    let config = Rc::new(EndpointConfig::from_global());
    let filter: Rc<dyn ContentFilter> = match JsFilter::from_global(FILTER_GLOBAL) {
        Some(filter) => Rc::new(filter),
        None => {
            log::warn!("cellulelife: no `{FILTER_GLOBAL}` global, using the built-in word list");
            Rc::new(WordFilter::default())
        }
    };
    LifeModule.run_app(HostContext::new(config, Some(filter)));
}

/// Rust host shell: publish the build-time configuration, install the
/// built-in filter, then load and start the module.
#[wasm_bindgen]
pub fn boot() {
    spawn_local(async {
        match launch().await {
            Ok(()) => {}
            Err(HostError::Load(err)) => {
                log::error!("cellulelife: simulation module failed to load: {err}")
            }
            Err(err) => log::error!("cellulelife: {err}"),
        }
    });
}

async fn launch() -> Result<(), HostError> {
    let mut host = Host::new();
    let config = EndpointConfig::from_build_env();
    if let Err(err) = config.publish_to_global() {
        log::warn!("cellulelife: could not publish endpoints: {err:?}");
    }
    host.initialize(config)?;
    host.install_filter(WordFilter::default())?;
    host.launch(StaticLoader::new(LifeModule)).await
}

#[wasm_bindgen]
pub fn start_game() -> bool {
    with_app(|a| a.state.start())
}

#[wasm_bindgen]
pub fn stop_game() -> bool {
    with_app(|a| a.state.stop())
}

/// Switch seed by menu index. Returns false for an unknown index.
#[wasm_bindgen]
pub fn select_seed(index: u32) -> bool {
    with_app(|a| a.state.select_seed(index as usize))
}

#[wasm_bindgen]
pub fn seed_count() -> u32 {
    with_app(|a| a.state.seeds().len() as u32)
}

/// Menu label of a seed, or `undefined` for an unknown index.
#[wasm_bindgen]
pub fn seed_label(index: u32) -> Option<String> {
    with_app(|a| {
        a.state
            .seeds()
            .get(index as usize)
            .map(|seed| seed.label.clone())
    })
}

#[wasm_bindgen]
pub fn get_seed_index() -> u32 {
    with_app(|a| a.state.seed_index() as u32)
}

/// Generations per second. Clamped to [1, detected frame rate].
#[wasm_bindgen]
pub fn set_rate(rate: f64) {
    with_app(|a| a.state.set_rate(rate));
}

#[wasm_bindgen]
pub fn get_rate() -> f64 {
    with_app(|a| a.state.rate())
}

#[wasm_bindgen]
pub fn get_max_fps() -> i32 {
    with_app(|a| a.state.max_fps() as i32)
}

/// Store the name typed into the score form. Returns whether it is valid.
#[wasm_bindgen]
pub fn change_user_name(user_name: &str) -> bool {
    with_app(|a| {
        a.state.change_user_name(user_name);
        a.state.user_name_is_valid()
    })
}

#[wasm_bindgen]
pub fn submit_score() -> bool {
    with_app(|a| a.state.submit_score())
}

#[wasm_bindgen]
pub fn dismiss_score_modal() -> bool {
    with_app(|a| a.state.dismiss_score_modal())
}

/// 0 = Editing, 1 = Playing, 2 = Stopped, 3 = Finished.
#[wasm_bindgen]
pub fn get_phase() -> u8 {
    with_app(|a| a.state.phase() as u8)
}

#[wasm_bindgen]
pub fn get_step_count() -> u32 {
    with_app(|a| a.state.step_count())
}

#[wasm_bindgen]
pub fn get_active_count() -> u32 {
    with_app(|a| a.state.active_count())
}

#[wasm_bindgen]
pub fn get_modification_count() -> u32 {
    with_app(|a| a.state.modifications().len() as u32)
}

#[wasm_bindgen]
pub fn is_modal_visible() -> bool {
    with_app(|a| a.state.modal_visible())
}

#[wasm_bindgen]
pub fn has_life_high_score() -> bool {
    with_app(|a| a.state.has_life_high_score())
}

#[wasm_bindgen]
pub fn has_death_high_score() -> bool {
    with_app(|a| a.state.has_death_high_score())
}

#[wasm_bindgen]
pub fn is_user_name_valid() -> bool {
    with_app(|a| a.state.user_name_is_valid())
}

/// True after the high-score server failed to answer.
#[wasm_bindgen]
pub fn has_no_network() -> bool {
    with_app(|a| a.state.has_no_network())
}
