//! Inbound commands to the application service.
//!
//! The host supervisor sends one word per line over the serial link.  Only the
//! exact upper-case tokens are recognised; anything else is not a command.

/// Commands that the host can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveCommand {
    /// De-energise the relay and let water through.
    Open,
    /// Energise the relay and shut the valve.
    Close,
}

impl ValveCommand {
    pub const OPEN_TOKEN: &'static str = "OPEN";
    pub const CLOSE_TOKEN: &'static str = "CLOSE";

    /// Parse one inbound line.  Surrounding whitespace (including a `\r` left
    /// by CRLF senders) is ignored; the comparison is case-sensitive.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            Self::OPEN_TOKEN => Some(Self::Open),
            Self::CLOSE_TOKEN => Some(Self::Close),
            _ => None,
        }
    }

    /// Parse raw line bytes; non-UTF-8 input is never a command.
    pub fn parse_bytes(line: &[u8]) -> Option<Self> {
        core::str::from_utf8(line).ok().and_then(Self::parse)
    }
}
