//! Newline-delimited line decoder for inbound commands.
//!
//! Bytes are pulled from the [`Transport`] only as far as the fixed buffer has
//! room, so anything the decoder cannot hold yet stays queued in the UART
//! driver.  [`LineDecoder::poll`] hands out at most one line per call; any
//! further complete lines remain buffered for the next cycle.
//!
//! Lines are compared after trimming, so surrounding whitespace never counts
//! against the buffer: leading blanks are skipped, and a line that fills the
//! buffer is trimmed at its tail before being judged overlong.  Only a line
//! whose trimmed content does not fit is dropped, up to its newline.
//!
//! A partial line that the link stopped extending is handed out at the next
//! poll as if it had been terminated, so an unterminated command is applied
//! one cycle later and never swallows the line that follows it.

use heapless::Vec;

use super::transport::Transport;

/// Buffer capacity; a line must fit including its `\n`.
pub const MAX_LINE_LEN: usize = 128;

/// One inbound line, without its terminator.
pub type Line = Vec<u8, MAX_LINE_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// Accumulating bytes into `pending`.
    Collecting,
    /// Trimmed content is held; only blanks may follow before the newline.
    Trailing,
    /// Dropping the tail of an overlong line until its newline.
    Discarding,
}

/// Streaming line decoder.
pub struct LineDecoder {
    state: DecoderState,
    pending: Vec<u8, MAX_LINE_LEN>,
    /// The last fill emptied the link, so an unterminated tail is stale.
    drained: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Collecting,
            pending: Vec::new(),
            drained: false,
        }
    }

    /// Return the oldest complete line, reading from the link only when
    /// nothing is buffered.  Never blocks.
    pub fn poll<T: Transport>(&mut self, link: &mut T) -> Option<Line> {
        if let Some(line) = self.take_terminated() {
            return Some(line);
        }

        if self.drained {
            self.drained = false;
            if let Some(line) = self.expire_tail() {
                return Some(line);
            }
        }

        self.fill(link);
        self.take_terminated()
    }

    /// Bytes buffered but not yet handed out.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop all buffered input (e.g. after a link reset).
    pub fn reset(&mut self) {
        self.pending.clear();
        self.state = DecoderState::Collecting;
        self.drained = false;
    }

    fn fill<T: Transport>(&mut self, link: &mut T) {
        let mut chunk = [0u8; MAX_LINE_LEN];

        while link.available() > 0 {
            let room = self.pending.capacity() - self.pending.len();
            if room == 0 {
                break;
            }
            let n = match link.read(&mut chunk[..room]) {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            for &byte in &chunk[..n] {
                self.accept(byte);
            }
        }

        self.drained = link.available() == 0;
    }

    fn accept(&mut self, byte: u8) {
        match self.state {
            DecoderState::Discarding => {
                if byte == b'\n' {
                    self.state = DecoderState::Collecting;
                }
            }
            DecoderState::Trailing => {
                if byte == b'\n' {
                    self.store(byte);
                    self.state = DecoderState::Collecting;
                } else if !is_blank(byte) {
                    self.discard();
                }
            }
            DecoderState::Collecting => {
                if is_blank(byte) && self.tail_is_empty() {
                    return;
                }
                self.store(byte);
                if self.pending.is_full() && !self.pending.contains(&b'\n') {
                    self.overflow();
                }
            }
        }
    }

    fn store(&mut self, byte: u8) {
        // fill() never reads more than the free space.
        let stored = self.pending.push(byte);
        debug_assert!(stored.is_ok(), "line buffer overrun");
    }

    /// The buffer holds one unterminated line and nothing else.
    fn overflow(&mut self) {
        let content = self
            .pending
            .iter()
            .rposition(|&b| !is_blank(b))
            .map_or(0, |last| last + 1);

        if content < self.pending.len() {
            self.pending.truncate(content);
            self.state = DecoderState::Trailing;
        } else {
            self.discard();
        }
    }

    fn discard(&mut self) {
        log::debug!("link: dropping overlong line");
        self.pending.clear();
        self.state = DecoderState::Discarding;
    }

    /// Hand out the unterminated tail, if any, as a complete line.
    fn expire_tail(&mut self) -> Option<Line> {
        if self.state == DecoderState::Discarding {
            self.state = DecoderState::Collecting;
            return None;
        }
        self.state = DecoderState::Collecting;
        if self.tail_is_empty() {
            return None;
        }
        // take_terminated() already ran, so the tail is the whole buffer.
        let line = self.pending.clone();
        self.pending.clear();
        Some(line)
    }

    fn tail_is_empty(&self) -> bool {
        self.pending.last().is_none_or(|&b| b == b'\n')
    }

    fn take_terminated(&mut self) -> Option<Line> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line = Line::from_slice(&self.pending[..end]).ok()?;
        self.consume(end + 1);
        Some(line)
    }

    fn consume(&mut self, n: usize) {
        let len = self.pending.len();
        self.pending.copy_within(n..len, 0);
        self.pending.truncate(len - n);
    }
}

/// Whitespace that trimming removes; the newline is the terminator.
fn is_blank(byte: u8) -> bool {
    byte != b'\n' && byte.is_ascii_whitespace()
}
