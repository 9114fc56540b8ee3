pub mod bmi;
pub mod config;
pub mod form;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
