//! GPIO / peripheral pin assignments for the WaterGuard sensor board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! Target is the classic ESP32 DevKit; the analog inputs are all on ADC1 so
//! they keep working while the radio is up.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1, 12-bit)
// ---------------------------------------------------------------------------

/// Analog turbidity probe.  ADC1 channel 6 (GPIO 34, input-only).
pub const TURBIDITY_ADC_GPIO: i32 = 34;
pub const TURBIDITY_ADC_CHANNEL: u32 = 6;

/// Analog pH probe amplifier.  ADC1 channel 7 (GPIO 35, input-only).
pub const PH_ADC_GPIO: i32 = 35;
pub const PH_ADC_CHANNEL: u32 = 7;

/// TDS (total dissolved solids) probe.  ADC1 channel 4 (GPIO 32).
pub const TDS_ADC_GPIO: i32 = 32;
pub const TDS_ADC_CHANNEL: u32 = 4;

/// Full-scale raw value of the 12-bit ADC.
pub const ADC_MAX_RAW: u16 = 4095;

// ---------------------------------------------------------------------------
// Valve relay
// ---------------------------------------------------------------------------

/// Digital output driving the valve relay coil.
/// LOW = relay off = valve open, HIGH = relay on = valve closed.
pub const RELAY_GPIO: i32 = 26;

// ---------------------------------------------------------------------------
// Serial data link (UART0 — the DevKit's USB bridge)
// ---------------------------------------------------------------------------

pub const LINK_UART_PORT: i32 = 0;
pub const LINK_TX_GPIO: i32 = 1;
pub const LINK_RX_GPIO: i32 = 3;
