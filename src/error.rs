//! Unified error types for the WaterGuard firmware.
//!
//! A single `Error` enum that every subsystem converts into.  All variants are
//! `Copy` so they can be passed around without allocation.  The sampling loop
//! itself never returns errors; these only surface during boot.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot-time operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The serial data link could not be used.
    Link(LinkError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Link(e) => write!(f, "link: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Serial link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// UART driver install or pin/parameter configuration failed.
    InitFailed(i32),
    /// The UART driver rejected a read.
    ReadFailed(i32),
    /// The UART driver rejected a write or accepted fewer bytes than given.
    WriteFailed(i32),
    /// The host-side stream (stdout) could not be written.
    Io,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitFailed(rc) => write!(f, "UART init failed (rc={rc})"),
            Self::ReadFailed(rc) => write!(f, "UART read failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "UART write failed (rc={rc})"),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
