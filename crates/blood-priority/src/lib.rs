pub mod config;
pub mod error;
pub mod priority;
pub mod telemetry;
