// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug console.
//!
//! Startup logging only: the banner, the active configuration, the timer values that were
//! programmed, and any configuration error. Every write blocks on the TX register, so nothing here
//! may be called from the tick interrupt.
//!
//! Note: when using `writeln!`, include `\r` in the format string so the terminal gets CRLF line
//! endings.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Console<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Console<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Write `  key: value Hz` on its own line.
    pub fn print_rate(&mut self, key: &str, hz: u32) {
        self.write_str("  ");
        self.write_str(key);
        self.write_str(": ");
        self.print_u32(hz);
        self.println(" Hz");
    }

    /// Write `  key: PSC=0xHHHH ARR=n` on its own line.
    pub fn print_timer(&mut self, key: &str, prescaler: u16, reload: u32) {
        self.write_str("  ");
        self.write_str(key);
        self.write_str(": PSC=");
        self.print_hex_u16(prescaler);
        self.write_str(" ARR=");
        self.print_u32(reload);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    pub fn print_hex_u16(&mut self, n: u16) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.write_str("0x");
        for shift in (0..=12).rev().step_by(4) {
            self.write_byte(HEX[((n >> shift) & 0xF) as usize]);
        }
    }

    pub fn print_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }
}

// `core::fmt::Write` so `write!` / `writeln!` work, e.g. for `ConfigError`.
impl<U: Instance> fmt::Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}
