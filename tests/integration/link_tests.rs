//! Serial link framing: line decoder over a mock host and the simulated board.

use embedded_hal::digital::PinState;
use waterguard::adapters::hardware::HardwareAdapter;
use waterguard::app::commands::ValveCommand;
use waterguard::app::ports::ActuatorPort;
use waterguard::app::service::AppService;
use waterguard::config::SystemConfig;
use waterguard::drivers::hw_init;
use waterguard::drivers::relay::ValveState;
use waterguard::link::line::{LineDecoder, MAX_LINE_LEN};
use waterguard::link::record;
use waterguard::link::transport::Transport;
use waterguard::pins;
use waterguard::sensors::SensorSample;

use super::mock_hw::{LogSink, MockLink};

fn parse_all(decoder: &mut LineDecoder, link: &mut MockLink, polls: usize) -> Vec<Option<ValveCommand>> {
    (0..polls)
        .filter_map(|_| decoder.poll(link))
        .map(|line| ValveCommand::parse_bytes(&line))
        .collect()
}

#[test]
fn buffered_lines_drain_one_per_poll() {
    let mut link = MockLink::new();
    let mut decoder = LineDecoder::new();
    link.send("OPEN\nCLOSE\nOPEN\n");

    assert!(decoder.poll(&mut link).is_some());
    assert!(decoder.poll(&mut link).is_some());
    assert!(decoder.poll(&mut link).is_some());
    assert!(decoder.poll(&mut link).is_none());
}

#[test]
fn garbage_between_commands_is_isolated() {
    let mut link = MockLink::new();
    let mut decoder = LineDecoder::new();
    link.send("CLOSE\n\u{0}\u{7f}junk\nclose\nOPEN\n");

    assert_eq!(
        parse_all(&mut decoder, &mut link, 8),
        vec![Some(ValveCommand::Close), None, None, Some(ValveCommand::Open)]
    );
}

#[test]
fn flooding_host_cannot_inject_a_command_via_overflow() {
    let mut link = MockLink::new();
    let mut decoder = LineDecoder::new();

    // An overlong line whose tail happens to read "CLOSE".
    let mut flood = "A".repeat(MAX_LINE_LEN * 2);
    flood.push_str("CLOSE\n");
    link.send(&flood);

    let parsed = parse_all(&mut decoder, &mut link, 8);
    assert!(parsed.iter().all(Option::is_none), "got {parsed:?}");
}

#[test]
fn record_body_matches_wire_layout() {
    let mut body = String::new();
    record::write_record(
        &mut body,
        &SensorSample {
            ph: 7.2,
            turbidity: 10,
            tds: 150,
        },
    )
    .unwrap();
    assert_eq!(body, r#"{"ph":7.2, "turbidity":10, "tds":150}"#);
}

#[test]
fn write_all_stops_when_transport_refuses() {
    struct Stingy(usize);
    impl Transport for Stingy {
        type Error = ();
        fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> {
            Ok(0)
        }
        fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
            let n = data.len().min(self.0);
            self.0 -= n;
            Ok(n)
        }
        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
        fn available(&self) -> usize {
            0
        }
    }

    let mut link = Stingy(5);
    assert_eq!(link.write_all(b"0123456789"), Ok(5));
}

// ── Simulated board (hw_init host stubs) ──────────────────────

#[test]
fn simulated_board_end_to_end() {
    hw_init::sim_set_adc(pins::TURBIDITY_ADC_CHANNEL, 0);
    hw_init::sim_set_adc(pins::PH_ADC_CHANNEL, 2048);
    hw_init::sim_set_adc(pins::TDS_ADC_CHANNEL, 100);

    let mut hw = HardwareAdapter::new();
    let mut link = MockLink::new();
    let mut sink = LogSink::new();
    let mut app = AppService::new(SystemConfig::default());

    app.start(&mut hw, &mut sink);
    assert!(!hw_init::sim_gpio_level(pins::RELAY_GPIO));

    link.send("CLOSE\n");
    app.tick(&mut hw, &mut link, &mut sink);

    assert_eq!(link.records(), vec![r#"{"ph":7.0, "turbidity":100, "tds":50}"#]);
    assert_eq!(app.valve_state(), ValveState::Closed);
    assert!(hw_init::sim_gpio_level(pins::RELAY_GPIO));

    hw.write_digital(pins::RELAY_GPIO, PinState::Low);
    assert!(!hw_init::sim_gpio_level(pins::RELAY_GPIO));
}
