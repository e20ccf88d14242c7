//! Core devlink library (config, API client, store, profile actions, routing).

pub mod actions;
pub mod api;
pub mod config;
pub mod confirm;
pub mod logging;
pub mod navigation;
pub mod routing;
pub mod spinner;
pub mod store;

pub use devlink_types as types;
