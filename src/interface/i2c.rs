//! I2C transport implementation built on top of `embedded-hal` `I2c`.
//!
//! Writes are staged in a fixed transmit buffer and flushed with a single
//! [`I2c::write`] when the transaction ends. `embedded-hal` transactions always
//! finish with a STOP condition, so closing without `stop` also releases the
//! bus; the device keeps its register pointer across the STOP.

use embedded_hal::i2c::I2c;

use super::Transport;

/// Per-transaction buffer length of the classic two-wire master.
pub const WIRE_BUFFER_LEN: usize = 32;

/// Buffered I2C transport moving at most `N` bytes per transaction.
pub struct I2cTransport<I2C, const N: usize = WIRE_BUFFER_LEN> {
    i2c: I2C,
    target: u8,
    tx: [u8; N],
    tx_len: usize,
    rx: [u8; N],
    rx_len: usize,
    rx_pos: usize,
}

impl<I2C, const N: usize> I2cTransport<I2C, N> {
    /// Creates a new transport from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            target: 0,
            tx: [0; N],
            tx_len: 0,
            rx: [0; N],
            rx_len: 0,
            rx_pos: 0,
        }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the transport and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, const N: usize> Transport for I2cTransport<I2C, N>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn begin(&mut self, address: u8) {
        self.target = address;
        self.tx_len = 0;
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        let accepted = bytes.len().min(N - self.tx_len);
        self.tx[self.tx_len..self.tx_len + accepted].copy_from_slice(&bytes[..accepted]);
        self.tx_len += accepted;
        accepted
    }

    fn end(&mut self, _stop: bool) -> core::result::Result<(), Self::Error> {
        let len = core::mem::take(&mut self.tx_len);
        self.i2c.write(self.target, &self.tx[..len])
    }

    fn request(&mut self, address: u8, count: usize) -> core::result::Result<usize, Self::Error> {
        let count = count.min(N);
        self.rx_len = 0;
        self.rx_pos = 0;

        self.i2c.read(address, &mut self.rx[..count])?;
        self.rx_len = count;
        Ok(count)
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.rx_pos >= self.rx_len {
            return None;
        }

        let byte = self.rx[self.rx_pos];
        self.rx_pos += 1;
        Some(byte)
    }

    fn read_capacity(&self) -> usize {
        N
    }

    fn write_capacity(&self) -> usize {
        N
    }
}
