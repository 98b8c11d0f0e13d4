//! Serial data link: the byte channel, inbound line framing and the outbound
//! record format.
//!
//! ```text
//!  device ──▶ {"ph":7.2, "turbidity":10, "tds":150}\r\n ──▶ host
//!  device ◀── OPEN\n | CLOSE\n                          ◀── host
//! ```

pub mod line;
pub mod record;
pub mod transport;
pub mod uart;
