pub mod config;
pub mod error;
pub mod sirius;
pub mod telemetry;
pub mod web;
pub mod workflows;
