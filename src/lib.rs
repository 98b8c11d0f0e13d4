//! WaterGuard firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("ESP-IDF targets need the `espidf` feature: cargo build --features espidf");

pub mod app;
pub mod config;
pub mod error;
pub mod link;
pub mod pins;
pub mod sensors;

// The ESP-IDF-facing modules compile on every target; the actual register
// access is guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
