//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port for the console log.  They are
//! diagnostics only: the serial data link never carries them.

use crate::drivers::relay::ValveState;
use crate::sensors::SensorSample;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has driven the valve to its boot default.
    Started(ValveState),

    /// A record was written to the data link.
    Reported { cycle: u64, sample: SensorSample },

    /// An accepted command moved the valve.
    ValveChanged { from: ValveState, to: ValveState },
}
