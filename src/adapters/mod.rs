//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements             | Connects to              |
//! |------------|------------------------|--------------------------|
//! | `hardware` | SensorPort             | ESP32 ADC1 (oneshot)     |
//! |            | ActuatorPort           | ESP32 GPIO               |
//! | `log_sink` | EventSink              | Console log (UART1)      |
//! | `time`     | embedded-hal `DelayNs` | FreeRTOS tick / ROM delay|
//!
//! The serial data link lives in [`crate::link::uart`].

pub mod hardware;
pub mod log_sink;
pub mod time;
