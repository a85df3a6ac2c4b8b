//! Platform front-ends
//!
//! The browser front-end paints onto an HTML canvas and ticks from
//! `setInterval`. Native builds run headless from `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;
