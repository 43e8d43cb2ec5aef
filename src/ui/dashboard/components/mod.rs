//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod assets;
pub mod footer;
pub mod forecasts;
pub mod header;
pub mod logs;
pub mod metrics;
pub mod models;
