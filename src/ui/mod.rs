// X3dPrefs - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (form models), platform::fs (path status), egui.
// Must NOT write preference files directly.

pub mod panels;
pub mod theme;
