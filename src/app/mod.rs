// SafetyBoard - app/mod.rs
//
// Application layer: state ownership and form handling.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod form;
pub mod state;
