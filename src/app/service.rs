//! Application service — the sampling / reporting / actuation loop.
//!
//! [`AppService`] owns the valve state, the sensor hub and the inbound line
//! decoder.  Hardware, the serial link, the clock and the log all arrive as
//! port arguments at each call, so one cycle can be driven entirely by mocks.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ Transport (record out)
//!                 │        AppService         │
//! ActuatorPort ◀──│ sample · report · command │ ◀── Transport (command in)
//!                 └──────────────────────────┘ ──▶ EventSink
//! ```
//!
//! One cycle: read three probes → emit one record → take at most one command
//! line → hold for `cycle_interval_ms`.  There is no retry, validation or
//! fault path: unrecognised lines are dropped and link write errors are
//! ignored.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::SystemConfig;
use crate::drivers::relay::{RelayDriver, ValveState};
use crate::link::line::LineDecoder;
use crate::link::record;
use crate::link::transport::Transport;
use crate::pins;
use crate::sensors::{SensorHub, SensorSample};

use super::commands::ValveCommand;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    config: SystemConfig,
    sensors: SensorHub,
    relay: RelayDriver,
    decoder: LineDecoder,
    cycle_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the relay; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            sensors: SensorHub::new(&config),
            relay: RelayDriver::new(pins::RELAY_GPIO),
            decoder: LineDecoder::new(),
            cycle_count: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the valve to its safe default (open).
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.relay.drive(ValveState::Open, hw);
        sink.emit(&AppEvent::Started(ValveState::Open));
        info!(
            "AppService started: valve open, {} ms cycle",
            self.config.cycle_interval_ms
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Sample, report and service one command, without the trailing hold.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut impl Transport,
        sink: &mut impl EventSink,
    ) -> SensorSample {
        self.cycle_count += 1;

        // 1–2. Acquire and convert
        let sample = self.sensors.sample(hw);

        // 3. Fire-and-forget record
        self.report(&sample, link);
        sink.emit(&AppEvent::Reported {
            cycle: self.cycle_count,
            sample,
        });

        // 4. At most one inbound line per cycle
        if let Some(line) = self.decoder.poll(link) {
            match ValveCommand::parse_bytes(&line) {
                Some(cmd) => self.apply(cmd, hw, sink),
                None => debug!(
                    "ignoring inbound line {:?}",
                    core::str::from_utf8(&line).unwrap_or("<non-utf8>")
                ),
            }
        }

        sample
    }

    /// One full cycle: [`tick`](Self::tick) then the fixed hold.
    pub fn cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut impl Transport,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> SensorSample {
        let sample = self.tick(hw, link, sink);
        delay.delay_ms(self.config.cycle_interval_ms);
        sample
    }

    /// Cycle until power-off or reset.
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut impl Transport,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.cycle(hw, link, delay, sink);
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply an accepted command.  The relay pin is rewritten even when the
    /// valve is already in the requested position.
    pub fn apply(
        &mut self,
        cmd: ValveCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let target = match cmd {
            ValveCommand::Open => ValveState::Open,
            ValveCommand::Close => ValveState::Closed,
        };
        let prev = self.relay.state();
        self.relay.drive(target, hw);

        if prev != target {
            sink.emit(&AppEvent::ValveChanged {
                from: prev,
                to: target,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn valve_state(&self) -> ValveState {
        self.relay.state()
    }

    /// Cycles started since boot.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn report(&self, sample: &SensorSample, link: &mut impl Transport) {
        match record::encode_line(sample) {
            Ok(line) => {
                let _ = link.write_all(line.as_bytes());
                let _ = link.flush();
            }
            Err(_) => debug!("record does not fit the line buffer: {:?}", sample),
        }
    }
}
