//! Sensor subsystem — per-probe calibrations and the aggregating [`SensorHub`].
//!
//! The hub reads the three analog probes through the [`SensorPort`] once per
//! cycle and converts them into a [`SensorSample`] in physical units.  The
//! sample is a plain value: it is formatted, emitted and dropped.

pub mod ph;
pub mod tds;
pub mod turbidity;

use serde::{Deserialize, Serialize};

use crate::app::ports::SensorPort;
use crate::config::SystemConfig;
use ph::PhCalibration;
use tds::TdsCalibration;
use turbidity::TurbidityCalibration;

/// The three analog inputs on the sensor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorChannel {
    Turbidity,
    Ph,
    Tds,
}

impl SensorChannel {
    /// Sampling order used by the hub.
    pub const ALL: [Self; 3] = [Self::Turbidity, Self::Ph, Self::Tds];

    /// ADC1 channel number wired to this probe.
    pub const fn adc_channel(self) -> u32 {
        match self {
            Self::Turbidity => crate::pins::TURBIDITY_ADC_CHANNEL,
            Self::Ph => crate::pins::PH_ADC_CHANNEL,
            Self::Tds => crate::pins::TDS_ADC_CHANNEL,
        }
    }

    /// GPIO number wired to this probe.
    pub const fn gpio(self) -> i32 {
        match self {
            Self::Turbidity => crate::pins::TURBIDITY_ADC_GPIO,
            Self::Ph => crate::pins::PH_ADC_GPIO,
            Self::Tds => crate::pins::TDS_ADC_GPIO,
        }
    }
}

/// Raw 12-bit ADC counts for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawReadings {
    pub turbidity: u16,
    pub ph: u16,
    pub tds: u16,
}

/// One cycle's readings in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// pH, rounded to one decimal place.
    pub ph: f32,
    /// Turbidity in NTU (0–100, never negative).
    pub turbidity: u16,
    /// Total dissolved solids (ppm-equivalent).
    pub tds: u16,
}

/// Samples every probe and converts the raw counts.
pub struct SensorHub {
    turbidity: TurbidityCalibration,
    ph: PhCalibration,
    tds: TdsCalibration,
}

impl SensorHub {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            turbidity: config.turbidity,
            ph: config.ph,
            tds: config.tds,
        }
    }

    /// Acquire one raw reading per channel, in turbidity → pH → TDS order.
    pub fn read_raw(&self, port: &mut impl SensorPort) -> RawReadings {
        RawReadings {
            turbidity: port.read_analog(SensorChannel::Turbidity),
            ph: port.read_analog(SensorChannel::Ph),
            tds: port.read_analog(SensorChannel::Tds),
        }
    }

    /// Convert raw counts to physical units.  Pure.
    pub fn convert(&self, raw: RawReadings) -> SensorSample {
        SensorSample {
            ph: ph::raw_to_ph(raw.ph, &self.ph),
            turbidity: turbidity::raw_to_ntu(raw.turbidity, &self.turbidity),
            tds: tds::raw_to_tds(raw.tds, &self.tds),
        }
    }

    /// Read every sensor and return a converted sample.
    pub fn sample(&self, port: &mut impl SensorPort) -> SensorSample {
        self.convert(self.read_raw(port))
    }
}
