//! Region Selector - pick a region of Seoul on a map in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod map;
pub mod mock_api;
pub mod models;
pub mod startup;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
