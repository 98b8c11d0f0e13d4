//! System configuration parameters
//!
//! All tunable parameters for the WaterGuard firmware.  The defaults match the
//! deployed board and the host supervisor (115200 baud, one record per second).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sensors::ph::PhCalibration;
use crate::sensors::tds::TdsCalibration;
use crate::sensors::turbidity::TurbidityCalibration;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Serial link ---
    /// Symbol rate of the data link (8N1).
    pub link_baud_rate: u32,

    // --- Timing ---
    /// Hold at the end of every sample/report/command cycle (milliseconds)
    pub cycle_interval_ms: u32,

    // --- Calibration ---
    pub turbidity: TurbidityCalibration,
    pub ph: PhCalibration,
    pub tds: TdsCalibration,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            link_baud_rate: 115_200,
            cycle_interval_ms: 1000, // 1 Hz
            turbidity: TurbidityCalibration::default(),
            ph: PhCalibration::default(),
            tds: TdsCalibration::default(),
        }
    }
}

impl SystemConfig {
    /// Reject values that would stall the loop or divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.link_baud_rate == 0 {
            return Err(Error::Config("link_baud_rate must be non-zero"));
        }
        if self.cycle_interval_ms == 0 {
            return Err(Error::Config("cycle_interval_ms must be non-zero"));
        }
        if self.turbidity.adc_full_scale == 0 || self.ph.adc_full_scale == 0 {
            return Err(Error::Config("adc_full_scale must be non-zero"));
        }
        if self.ph.full_scale_ph <= 0.0 {
            return Err(Error::Config("full_scale_ph must be positive"));
        }
        if self.tds.divisor == 0 {
            return Err(Error::Config("tds divisor must be non-zero"));
        }
        Ok(())
    }
}
