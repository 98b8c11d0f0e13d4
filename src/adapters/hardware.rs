//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Exposes the ADC1 oneshot unit through [`SensorPort`] and the GPIO output
//! driver through [`ActuatorPort`].  This is the only module in the system
//! that touches actual hardware.  On non-espidf targets the `hw_init`
//! helpers fall back to in-memory simulation state.

use embedded_hal::digital::PinState;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init;
use crate::sensors::SensorChannel;

/// Concrete adapter over the on-chip ADC and GPIO.
pub struct HardwareAdapter;

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareAdapter {
    /// Peripherals must already be configured by
    /// [`hw_init::init_peripherals`].
    pub fn new() -> Self {
        Self
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_analog(&mut self, channel: SensorChannel) -> u16 {
        hw_init::adc1_read(channel.adc_channel())
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn write_digital(&mut self, gpio: i32, level: PinState) {
        hw_init::gpio_write(gpio, level == PinState::High);
    }
}
