pub mod components;
pub mod config;
pub mod filter;
pub mod grid;
pub mod host;
pub mod scores;
pub mod seeds;
pub mod state;
pub mod systems;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod bridge;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cellulelife-sim initialized");
}
