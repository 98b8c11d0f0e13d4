//! TDS (total dissolved solids) probe.
//!
//! Uncompensated: raw counts integer-divided by a fixed factor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsCalibration {
    pub divisor: u16,
}

impl Default for TdsCalibration {
    fn default() -> Self {
        Self { divisor: 2 }
    }
}

pub fn raw_to_tds(raw: u16, cal: &TdsCalibration) -> u16 {
    raw.checked_div(cal.divisor).unwrap_or(0)
}
