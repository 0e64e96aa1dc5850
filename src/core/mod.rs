// X3dPrefs - core/mod.rs
//
// Core preference logic: keys, defaults, the registry, and form models.
// Dependencies: standard library, tracing, chrono.
// Must NOT depend on: ui, platform, app, or any file I/O directly.

pub mod cad_filter;
pub mod defaults;
pub mod external_tools;
pub mod form;
pub mod keys;
pub mod misc_options;
pub mod registry;
pub mod store;
