// SafetyBoard - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, plus pure data crates (chrono, serde, regex, csv).
// Must NOT depend on: ui, platform, app, or egui.

pub mod colour;
pub mod export;
pub mod model;
pub mod store;
pub mod theme;
pub mod view;
