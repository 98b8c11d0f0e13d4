//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! `log` facade.  On the board that is the ESP-IDF console on UART1, never
//! the data link on UART0.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(valve) => {
                info!("START | valve={:?}", valve);
            }
            AppEvent::Reported { cycle, sample } => {
                debug!(
                    "REPORT | #{} | pH={:.1} turbidity={}NTU tds={}",
                    cycle, sample.ph, sample.turbidity, sample.tds
                );
            }
            AppEvent::ValveChanged { from, to } => {
                info!("VALVE | {:?} -> {:?}", from, to);
            }
        }
    }
}
