//! Mock hardware adapters for integration tests.
//!
//! Records every digital write and every byte sent over the link so tests can
//! assert on the full history without touching real GPIO/UART registers.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use waterguard::app::events::AppEvent;
use waterguard::app::ports::{ActuatorPort, EventSink, SensorPort};
use waterguard::link::transport::Transport;
use waterguard::sensors::{RawReadings, SensorChannel};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub raw: RawReadings,
    pub reads: Vec<SensorChannel>,
    pub writes: Vec<(i32, PinState)>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::with_raw(0, 0, 0)
    }

    pub fn with_raw(turbidity: u16, ph: u16, tds: u16) -> Self {
        Self {
            raw: RawReadings { turbidity, ph, tds },
            reads: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// Last level written to `gpio`, if any.
    pub fn level(&self, gpio: i32) -> Option<PinState> {
        self.writes
            .iter()
            .rev()
            .find(|(pin, _)| *pin == gpio)
            .map(|(_, level)| *level)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_analog(&mut self, channel: SensorChannel) -> u16 {
        self.reads.push(channel);
        match channel {
            SensorChannel::Turbidity => self.raw.turbidity,
            SensorChannel::Ph => self.raw.ph,
            SensorChannel::Tds => self.raw.tds,
        }
    }
}

impl ActuatorPort for MockHardware {
    fn write_digital(&mut self, gpio: i32, level: PinState) {
        self.writes.push((gpio, level));
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// In-memory serial link: the test plays the host.
pub struct MockLink {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    /// When set, every write fails (unplugged cable).
    pub broken: bool,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
            broken: false,
        }
    }

    /// Host → device.
    pub fn send(&mut self, text: &str) {
        self.rx.extend(text.bytes());
    }

    /// Device → host, split into CRLF-terminated records.
    pub fn records(&self) -> Vec<String> {
        String::from_utf8(self.tx.clone())
            .expect("records are ASCII")
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockLink {
    type Error = &'static str;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if self.broken {
            return Err("link down");
        }
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.broken { Err("link down") } else { Ok(()) }
    }

    fn available(&self) -> usize {
        self.rx.len()
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested holds instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
