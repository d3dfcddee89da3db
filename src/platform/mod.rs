// SentiScope - platform/mod.rs
//
// Platform layer: config/data directory resolution and config.toml loading.
// Must NOT depend on: ui, app.

pub mod config;
