//! Fuzz target: `LineDecoder::poll` + `ValveCommand::parse_bytes`
//!
//! The first input byte picks a chunk size; the rest is delivered to the
//! decoder in chunks of that size, one chunk per poll, the way a host might
//! dribble bytes across sampling cycles.  Lines must stay within the buffer
//! and never carry their newline.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use waterguard::app::commands::ValveCommand;
use waterguard::link::line::{LineDecoder, MAX_LINE_LEN};
use waterguard::link::transport::Transport;

struct Dribble<'a> {
    data: &'a [u8],
    budget: usize,
}

impl Transport for Dribble<'_> {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let n = buf.len().min(self.available());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        self.budget -= n;
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn available(&self) -> usize {
        self.data.len().min(self.budget)
    }
}

fuzz_target!(|input: &[u8]| {
    let Some((&chunk, data)) = input.split_first() else {
        return;
    };
    let chunk = usize::from(chunk).max(1);

    let mut link = Dribble { data, budget: 0 };
    let mut decoder = LineDecoder::new();

    // Enough polls to drain every chunk plus the idle flush at the end.
    for _ in 0..=(data.len() / chunk + 2) {
        link.budget = chunk;
        if let Some(line) = decoder.poll(&mut link) {
            assert!(line.len() < MAX_LINE_LEN, "line exceeds buffer");
            assert!(!line.contains(&b'\n'), "line kept its terminator");
            let _ = ValveCommand::parse_bytes(&line);
        }
        assert!(decoder.pending_len() <= MAX_LINE_LEN);
    }

    decoder.reset();
    assert_eq!(decoder.pending_len(), 0);
});
