pub mod api;
pub mod config;
pub mod handler;
pub mod models;
pub mod telemetry;
