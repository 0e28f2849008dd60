// src/infrastructure/mod.rs
pub mod telemetry;
