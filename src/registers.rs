//! Register-address framing and device addressing for the VL53L5CX.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Factory bus address in its 8-bit (pre-shifted) form.
pub const DEFAULT_ADDRESS: u8 = 0x52;
/// Number of bytes used to transmit a register address.
pub const REGISTER_ADDRESS_LEN: usize = 2;

/// Encodes a register address in the big-endian framing the device expects.
#[inline]
pub const fn register_bytes(register: u16) -> [u8; REGISTER_ADDRESS_LEN] {
    register.to_be_bytes()
}

/// Bitfield view of the 8-bit address byte: direction bit plus 7-bit address.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceAddress {
    // Read/write direction (bit 0); ignored when addressing the transport.
    pub read: bool,
    // 7-bit bus address (bits 7:1).
    pub address: B7,
}

impl DeviceAddress {
    /// Builds the handle address from its 7-bit bus form.
    pub fn from_seven_bit(address: u8) -> Self {
        Self::new().with_address(address & 0x7F)
    }

    /// Returns the 7-bit form handed to the bus transport.
    pub fn seven_bit(self) -> u8 {
        self.address()
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::from(DEFAULT_ADDRESS)
    }
}

impl From<u8> for DeviceAddress {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DeviceAddress({=u8:#x})", self.seven_bit());
    }
}
