//! Analog pH probe (amplified electrode, 0–14 pH across the ADC range).
//!
//! Two-point linear calibration: zero counts → pH 0, full scale → `full_scale_ph`.
//! The result is rounded to one decimal place, which is all the wire record
//! carries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhCalibration {
    pub adc_full_scale: u16,
    pub full_scale_ph: f32,
}

impl Default for PhCalibration {
    fn default() -> Self {
        Self {
            adc_full_scale: crate::pins::ADC_MAX_RAW,
            full_scale_ph: 14.0,
        }
    }
}

pub fn raw_to_ph(raw: u16, cal: &PhCalibration) -> f32 {
    if cal.adc_full_scale == 0 {
        return 0.0;
    }
    let ph = f32::from(raw) * (cal.full_scale_ph / f32::from(cal.adc_full_scale));
    round_tenths(ph)
}

/// Round half away from zero to one decimal place.
fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
