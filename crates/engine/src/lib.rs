pub mod camera;
pub mod fetch;
pub mod input;
pub mod quad;

#[cfg(target_arch = "wasm32")]
pub mod renderer;
