// X3dPrefs - ui/panels/mod.rs

pub mod about;
pub mod cad_filter;
pub mod error;
pub mod misc;
pub mod options;
pub mod tools;
