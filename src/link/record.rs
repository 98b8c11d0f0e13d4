//! Outbound record encoder.
//!
//! Wire format, one record per cycle:
//! ```text
//! {"ph":7.2, "turbidity":10, "tds":150}\r\n
//! ```
//! Key order and spacing (a space after each comma, none after a colon) are
//! kept byte-for-byte because the deployed host parser was written against
//! them.  pH always carries exactly one decimal digit.

use core::fmt::{self, Write};

use heapless::String;

use crate::sensors::SensorSample;

/// Room for the widest record plus terminator.
pub const RECORD_CAP: usize = 96;

pub const LINE_TERMINATOR: &str = "\r\n";

/// A fully encoded record line, terminator included.
pub type RecordLine = String<RECORD_CAP>;

/// Write the record body (no terminator).
pub fn write_record<W: Write>(out: &mut W, sample: &SensorSample) -> fmt::Result {
    write!(
        out,
        "{{\"ph\":{:.1}, \"turbidity\":{}, \"tds\":{}}}",
        sample.ph, sample.turbidity, sample.tds
    )
}

/// Encode a complete line so it goes out in a single transport write.
pub fn encode_line(sample: &SensorSample) -> Result<RecordLine, fmt::Error> {
    let mut line = RecordLine::new();
    write_record(&mut line, sample)?;
    line.push_str(LINE_TERMINATOR).map_err(|()| fmt::Error)?;
    Ok(line)
}
