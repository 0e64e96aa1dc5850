// X3dPrefs - app/mod.rs
//
// Application layer: dialog flows, state management, file persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod dialog;
pub mod prefs_file;
pub mod state;
