//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (ADC, GPIO, event sinks) implement these traits.  The
//! [`AppService`](super::service::AppService) consumes them via generics, so
//! the domain core never touches hardware directly.  The serial byte channel
//! is [`Transport`](crate::link::transport::Transport) and the end-of-cycle
//! hold is [`embedded_hal::delay::DelayNs`].

use embedded_hal::digital::PinState;

use crate::sensors::SensorChannel;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one analog conversion per call.
pub trait SensorPort {
    /// Raw ADC count for `channel` (0–4095 on a 12-bit converter).
    ///
    /// Always "succeeds": a disconnected probe simply returns whatever the
    /// converter sees.
    fn read_analog(&mut self, channel: SensorChannel) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: drive a digital output line.
pub trait ActuatorPort {
    fn write_digital(&mut self, gpio: i32, level: PinState);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go; none of them may
/// write to the serial data link.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
