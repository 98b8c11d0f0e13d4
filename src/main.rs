//! WaterGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-rate polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     UartTransport    SystemDelay  LogEventSink │
//! │  (Sensor+Actuator)   (data link)      (DelayNs)    (EventSink)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  sample → report → command → hold                      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use waterguard::adapters::hardware::HardwareAdapter;
use waterguard::adapters::log_sink::LogEventSink;
use waterguard::adapters::time::SystemDelay;
use waterguard::app::service::AppService;
use waterguard::config::SystemConfig;
use waterguard::drivers::hw_init;
use waterguard::error::Error;
use waterguard::link::uart::UartTransport;
use waterguard::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("WaterGuard v{} starting", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    config.validate()?;

    // ── 2. Serial link ────────────────────────────────────────
    let mut link = UartTransport::open(config.link_baud_rate).map_err(Error::from)?;

    // ── 3. Relay output + analog inputs ───────────────────────
    hw_init::init_peripherals().map_err(Error::from)?;
    info!(
        "Pins: turbidity=GPIO{} pH=GPIO{} TDS=GPIO{} relay=GPIO{}",
        pins::TURBIDITY_ADC_GPIO,
        pins::PH_ADC_GPIO,
        pins::TDS_ADC_GPIO,
        pins::RELAY_GPIO
    );

    // ── 4. Construct adapters + service ───────────────────────
    let mut hw = HardwareAdapter::new();
    let mut delay = SystemDelay::new();
    let mut log_sink = LogEventSink::new();

    let mut app = AppService::new(config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering sampling loop.");

    // ── 5. Sampling loop (never returns) ──────────────────────
    app.run(&mut hw, &mut link, &mut delay, &mut log_sink)
}
