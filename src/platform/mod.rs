// X3dPrefs - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, core::defaults types.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
pub mod host;
