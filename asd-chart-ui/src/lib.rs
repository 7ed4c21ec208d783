//! Shared Dioxus components and D3.js bridge for the sales dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line/bar/pie renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Dropdowns, chart grid and status components

pub mod js_bridge;
pub mod state;
pub mod components;
