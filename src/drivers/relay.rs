//! Valve relay driver (single-channel opto-isolated relay module).
//!
//! The valve is normally open: with the coil de-energised (GPIO LOW) water
//! flows, energising the coil (GPIO HIGH) closes it.
//!
//! ## Dual-target design
//!
//! The driver writes through [`ActuatorPort`], so on ESP-IDF it lands on the
//! real GPIO via the hardware adapter and on host/test it lands on a mock.

use embedded_hal::digital::PinState;
use serde::{Deserialize, Serialize};

use crate::app::ports::ActuatorPort;

/// Valve position.  Exactly two states; there is no "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValveState {
    #[default]
    Open,
    Closed,
}

impl ValveState {
    /// Output level that holds the valve in this position.
    pub const fn relay_level(self) -> PinState {
        match self {
            Self::Open => PinState::Low,
            Self::Closed => PinState::High,
        }
    }
}

pub struct RelayDriver {
    gpio: i32,
    state: ValveState,
}

impl RelayDriver {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            state: ValveState::Open,
        }
    }

    /// Drive the coil for `state`.  The pin is always rewritten, even if
    /// the valve is already there.
    pub fn drive(&mut self, state: ValveState, hw: &mut impl ActuatorPort) {
        hw.write_digital(self.gpio, state.relay_level());
        self.state = state;
    }

    pub fn state(&self) -> ValveState {
        self.state
    }
}
