//! Serial byte channel shared by the outbound record stream and the inbound
//! command lines.
//!
//! Implementations:
//! - [`UartTransport`](super::uart::UartTransport): UART0 on ESP-IDF, stdout on host
//! - in-memory loopbacks in the integration tests
//!
//! Every call is non-blocking; the only place the loop waits is the
//! end-of-cycle delay.

pub trait Transport {
    type Error: core::fmt::Debug;

    /// Copy already-received bytes into `buf`.  Returns 0 when nothing is
    /// pending; never waits for more.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Queue `data` for transmission.  Returns how many bytes were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Number of received bytes waiting to be read.
    fn available(&self) -> usize;

    /// Keep writing until `data` is queued or the transport stops accepting
    /// bytes.  Returns the number of bytes queued.
    fn write_all(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        let mut sent = 0;
        while sent < data.len() {
            let n = self.write(&data[sent..])?;
            if n == 0 {
                break;
            }
            sent += n;
        }
        Ok(sent)
    }
}
