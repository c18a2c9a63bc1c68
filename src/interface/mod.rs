//! Bus transport abstraction for the VL53L5CX platform layer.

pub mod i2c;

/// Two-wire bus primitives the chunked register transfer is built on.
///
/// The contract follows a buffered master: bytes queued with [`write`](Self::write)
/// go out when the transaction is closed with [`end`](Self::end), and a
/// [`request`](Self::request) makes received bytes available one at a time
/// through [`read_byte`](Self::read_byte).
pub trait Transport {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Opens a write transaction to the 7-bit `address`.
    fn begin(&mut self, address: u8);

    /// Queues bytes for the open transaction and returns how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> usize;

    /// Closes the open transaction, releasing the bus when `stop` is set.
    fn end(&mut self, stop: bool) -> core::result::Result<(), Self::Error>;

    /// Reads up to `count` bytes from the 7-bit `address` and returns how many arrived.
    fn request(&mut self, address: u8, count: usize) -> core::result::Result<usize, Self::Error>;

    /// Pops the next received byte, or `None` once the request is drained.
    fn read_byte(&mut self) -> Option<u8>;

    /// Largest number of bytes a single request can return.
    fn read_capacity(&self) -> usize;

    /// Largest number of bytes a single write transaction can carry.
    fn write_capacity(&self) -> usize;

    /// Brings the bus back to a usable state after a failed transaction.
    fn recover(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}
