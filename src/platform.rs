//! Platform handle and chunked register transfers for the VL53L5CX.
//!
//! The sensor exposes a 16-bit register space, but a bus transport can only move
//! a bounded number of bytes per transaction. [`Platform`] splits register reads
//! and writes into transport-sized chunks and enforces that the number of bytes
//! moved always equals the number requested.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cTransport;
use crate::interface::Transport;
use crate::params::WriteRejection;
use crate::registers::{register_bytes, DeviceAddress, REGISTER_ADDRESS_LEN};
use crate::reset::ResetLine;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

/// Device handle passed to every platform call.
pub struct Platform<T, D> {
    transport: T,
    delay: D,
    address: DeviceAddress,
    config: Config,
}

impl<T, D> Platform<T, D> {
    // ==================================================================
    // == Construction & Ownership ======================================
    // ==================================================================
    /// Creates a handle for the device at `address` on the given transport.
    pub fn new(transport: T, delay: D, address: DeviceAddress, config: Config) -> Self {
        Self {
            transport,
            delay,
            address,
            config,
        }
    }

    /// Consumes the handle and returns the owned transport and delay.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Provides mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Returns the device address in its pre-shifted form.
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl<I2C, D> Platform<I2cTransport<I2C>, D>
where
    I2C: I2c,
{
    /// Convenience constructor for an `embedded-hal` I2C bus at the factory address.
    pub fn new_i2c(i2c: I2C, delay: D, config: Config) -> Self {
        Self::new(I2cTransport::new(i2c), delay, DeviceAddress::default(), config)
    }

    /// Releases the handle, returning the I2C bus and delay.
    pub fn release_i2c(self) -> (I2C, D) {
        let (transport, delay) = self.release();
        (transport.release(), delay)
    }
}

impl<T, D, CommE> Platform<T, D>
where
    T: Transport<Error = CommE>,
    D: DelayNs,
{
    // ==================================================================
    // == Register Transfers ============================================
    // ==================================================================
    /// Reads one register.
    pub fn read_byte(&mut self, register: u16) -> Result<u8, CommE> {
        let mut value = [0u8; 1];
        self.read_multi(register, &mut value)?;
        Ok(value[0])
    }

    /// Writes one register.
    pub fn write_byte(&mut self, register: u16, value: u8) -> Result<(), CommE> {
        self.write_multi(register, core::slice::from_ref(&value))
    }

    /// Fills `buf` from consecutive registers starting at `register`.
    ///
    /// The register address is sent once; each chunk after that is a fresh
    /// read request relying on the device's auto-increment. Every byte the
    /// transport supplies is copied before the total is checked, so on
    /// [`Error::ShortRead`] the buffer holds whatever did arrive.
    pub fn read_multi(&mut self, register: u16, buf: &mut [u8]) -> Result<(), CommE> {
        if buf.is_empty() {
            return Ok(());
        }

        self.config.validate().map_err(|_| Error::InvalidConfig)?;
        let max_chunk = self.read_chunk_len()?;
        if self.transport.write_capacity() < REGISTER_ADDRESS_LEN {
            return Err(Error::InvalidConfig);
        }
        self.select_register(register)?;

        let bus_address = self.address.seven_bit();
        let expected = buf.len();
        let mut received = 0;

        while received < expected {
            let requested = (expected - received).min(max_chunk);
            trace!("read chunk {=u16:#x}+{}: {} bytes", register, received, requested);

            self.transport.request(bus_address, requested)?;

            let mut chunk_received = 0;
            while let Some(byte) = self.transport.read_byte() {
                if let Some(slot) = buf.get_mut(received + chunk_received) {
                    *slot = byte;
                }
                chunk_received += 1;
            }

            received += chunk_received;
            if chunk_received < requested {
                break;
            }
        }

        if received != expected {
            error!(
                "short read from {=u16:#x}: expected {}, received {}",
                register,
                expected,
                received
            );
            return Err(Error::ShortRead { expected, received });
        }

        Ok(())
    }

    /// Writes `data` to consecutive registers starting at `register`.
    ///
    /// Each chunk is framed with its own register address, so chunk `n` targets
    /// `register + offset`. The bus is only released after the final chunk, and
    /// the status of that closing transaction is returned.
    pub fn write_multi(&mut self, register: u16, data: &[u8]) -> Result<(), CommE> {
        if data.is_empty() {
            return Ok(());
        }

        self.config.validate().map_err(|_| Error::InvalidConfig)?;
        let max_chunk = self.write_chunk_len()?;
        let bus_address = self.address.seven_bit();

        let mut offset = 0;
        for chunk in data.chunks(max_chunk) {
            let chunk_register = register.wrapping_add(offset as u16);
            trace!("write chunk {=u16:#x}: {} bytes", chunk_register, chunk.len());

            self.transport.begin(bus_address);
            self.send_register(chunk_register)?;

            let accepted = self.transport.write(chunk);
            if accepted == 0 {
                return self.reject_write(register, data.len());
            }
            if accepted != chunk.len() {
                error!(
                    "short write to {=u16:#x}: {} of {} bytes accepted",
                    chunk_register,
                    accepted,
                    chunk.len()
                );
                return Err(Error::ShortWrite {
                    expected: chunk.len(),
                    accepted,
                });
            }

            offset += chunk.len();
            if offset < data.len() {
                self.transport.end(false)?;
            }
        }

        self.transport.end(true).map_err(Error::from)
    }

    // ==================================================================
    // == Timing & Reset ================================================
    // ==================================================================
    /// Blocks the calling thread for `ms` milliseconds.
    pub fn wait_ms(&mut self, ms: u32) -> Result<(), CommE> {
        self.delay.delay_ms(ms);
        Ok(())
    }

    /// Pulses the sensor's LPn line using the configured settle time.
    pub fn reset_sensor<P>(&mut self, line: &mut ResetLine<P>) -> core::result::Result<(), P::Error>
    where
        P: OutputPin,
    {
        line.pulse(&mut self.delay, self.config.reset_settle_ms)
    }

    // ==================================================================
    // == Internal Transfer Helpers =====================================
    // ==================================================================
    fn read_chunk_len(&self) -> Result<usize, CommE> {
        match self.config.max_chunk.min(self.transport.read_capacity()) {
            0 => Err(Error::InvalidConfig),
            len => Ok(len),
        }
    }

    fn write_chunk_len(&self) -> Result<usize, CommE> {
        let capacity = self
            .transport
            .write_capacity()
            .saturating_sub(REGISTER_ADDRESS_LEN);
        match self.config.max_chunk.min(capacity) {
            0 => Err(Error::InvalidConfig),
            len => Ok(len),
        }
    }

    /// Points the device at `register`, retrying per the configured policy.
    fn select_register(&mut self, register: u16) -> Result<(), CommE> {
        let policy = self.config.address_retry;
        let bus_address = self.address.seven_bit();
        let mut attempts: u32 = 0;

        loop {
            self.transport.begin(bus_address);
            self.send_register(register)?;
            if self.transport.end(false).is_ok() {
                return Ok(());
            }

            attempts = attempts.saturating_add(1);
            warn!("addressing {=u16:#x} failed (attempt {})", register, attempts);

            // A failed reinit is not fatal; the next attempt reports the outcome.
            if self.transport.recover().is_err() {
                warn!("bus recovery after addressing {=u16:#x} failed", register);
            }

            if !policy.allows(attempts) {
                error!("giving up on {=u16:#x} after {} attempts", register, attempts);
                return Err(Error::AddressingFailed { attempts });
            }

            let backoff_us = policy.backoff_us();
            if backoff_us > 0 {
                self.delay.delay_us(backoff_us);
            }
        }
    }

    /// Queues the big-endian register address on the open transaction.
    fn send_register(&mut self, register: u16) -> Result<(), CommE> {
        let accepted = self.transport.write(&register_bytes(register));
        if accepted != REGISTER_ADDRESS_LEN {
            error!(
                "register address {=u16:#x} truncated: {} of {} bytes accepted",
                register,
                accepted,
                REGISTER_ADDRESS_LEN
            );
            return Err(Error::ShortWrite {
                expected: REGISTER_ADDRESS_LEN,
                accepted,
            });
        }

        Ok(())
    }

    fn reject_write(&mut self, register: u16, len: usize) -> Result<(), CommE> {
        match self.config.write_rejection {
            WriteRejection::Halt => {
                fatal!("write of {} bytes to register {:#x} rejected", len, register)
            }
            WriteRejection::Report => {
                error!("write of {} bytes to register {=u16:#x} rejected", len, register);
                Err(Error::WriteRejected { register, len })
            }
        }
    }
}
