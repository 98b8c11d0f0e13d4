//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the monitor: how a cycle samples,
//! reports and reacts to host commands.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
