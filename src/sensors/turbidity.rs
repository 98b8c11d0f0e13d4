//! Analog turbidity probe.
//!
//! The probe's output voltage falls as the water gets murkier, so the
//! conversion is an inverse linear map from `[0, full_scale]` counts onto
//! `[max_ntu, 0]` NTU, using integer arithmetic that truncates toward zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurbidityCalibration {
    /// Raw count corresponding to clear water (0 NTU).
    pub adc_full_scale: u16,
    /// NTU reported at a raw count of zero.
    pub max_ntu: u16,
}

impl Default for TurbidityCalibration {
    fn default() -> Self {
        Self {
            adc_full_scale: crate::pins::ADC_MAX_RAW,
            max_ntu: 100,
        }
    }
}

/// Map a raw count to NTU, clamped at zero.
pub fn raw_to_ntu(raw: u16, cal: &TurbidityCalibration) -> u16 {
    if cal.adc_full_scale == 0 {
        return 0;
    }
    let max = i64::from(cal.max_ntu);
    let mapped = i64::from(raw) * -max / i64::from(cal.adc_full_scale) + max;
    mapped.max(0) as u16
}
