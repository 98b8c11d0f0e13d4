//! UART transport for the serial data link.
//!
//! - **`target_os = "espidf"`** — installs the ESP-IDF UART driver on UART0
//!   (the DevKit's USB bridge) at the configured baud rate, 8N1, no flow
//!   control.  Reads are zero-timeout so the loop never stalls.
//! - **`not(target_os = "espidf")`** — records go to stdout and nothing is
//!   ever received, for host-side simulation.

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

use log::info;

use super::transport::Transport;
use crate::error::LinkError;

/// Driver-side receive ring; commands are a few bytes, records are outbound.
#[cfg(target_os = "espidf")]
const RX_RING_BYTES: i32 = 256;

pub struct UartTransport {
    #[cfg(target_os = "espidf")]
    port: uart_port_t,
    #[cfg(not(target_os = "espidf"))]
    stdout: std::io::Stdout,
}

impl UartTransport {
    #[cfg(target_os = "espidf")]
    pub fn open(baud_rate: u32) -> Result<Self, LinkError> {
        use crate::pins;

        let port = pins::LINK_UART_PORT as uart_port_t;
        let cfg = uart_config_t {
            baud_rate: baud_rate as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: Called once from main() before the loop; the port is not
        // shared with the console (moved to UART1 in sdkconfig.defaults).
        unsafe {
            let ret = uart_param_config(port, &cfg);
            if ret != ESP_OK as i32 {
                return Err(LinkError::InitFailed(ret));
            }
            // -1 = UART_PIN_NO_CHANGE for RTS/CTS.
            let ret = uart_set_pin(port, pins::LINK_TX_GPIO, pins::LINK_RX_GPIO, -1, -1);
            if ret != ESP_OK as i32 {
                return Err(LinkError::InitFailed(ret));
            }
            let ret = uart_driver_install(
                port,
                RX_RING_BYTES,
                0,
                0,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK as i32 {
                return Err(LinkError::InitFailed(ret));
            }
        }

        info!("link: UART{} up at {} baud (8N1)", port, baud_rate);
        Ok(Self { port })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn open(baud_rate: u32) -> Result<Self, LinkError> {
        info!("link(sim): stdout at nominal {} baud", baud_rate);
        Ok(Self {
            stdout: std::io::stdout(),
        })
    }
}

#[cfg(target_os = "espidf")]
impl Transport for UartTransport {
    type Error = LinkError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError> {
        // SAFETY: buf is a valid, exclusively borrowed slice of buf.len() bytes.
        let n = unsafe { uart_read_bytes(self.port, buf.as_mut_ptr().cast(), buf.len() as u32, 0) };
        usize::try_from(n).map_err(|_| LinkError::ReadFailed(n))
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        // SAFETY: data is a valid slice; the driver copies it before returning.
        let n = unsafe { uart_write_bytes(self.port, data.as_ptr().cast(), data.len()) };
        usize::try_from(n).map_err(|_| LinkError::WriteFailed(n))
    }

    fn flush(&mut self) -> Result<(), LinkError> {
        // uart_write_bytes only returns once the bytes are in the TX FIFO.
        Ok(())
    }

    fn available(&self) -> usize {
        let mut len: usize = 0;
        // SAFETY: len is a valid out-pointer; the driver was installed in open().
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        if ret != ESP_OK as i32 { 0 } else { len }
    }
}

#[cfg(not(target_os = "espidf"))]
impl Transport for UartTransport {
    type Error = LinkError;

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, LinkError> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        use std::io::Write;
        self.stdout.lock().write(data).map_err(|_| LinkError::Io)
    }

    fn flush(&mut self) -> Result<(), LinkError> {
        use std::io::Write;
        self.stdout.lock().flush().map_err(|_| LinkError::Io)
    }

    fn available(&self) -> usize {
        0
    }
}
