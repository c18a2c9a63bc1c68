//! Error handling primitives for the VL53L5CX platform layer.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus transport.
    Interface(E),
    /// The register-address phase kept failing until the retry budget ran out.
    AddressingFailed {
        /// Number of addressing attempts made.
        attempts: u32,
    },
    /// The device supplied a different number of bytes than requested.
    ShortRead {
        /// Bytes requested by the caller.
        expected: usize,
        /// Bytes actually supplied across all chunks.
        received: usize,
    },
    /// The transport accepted none of a write chunk.
    WriteRejected {
        /// Register the rejected chunk was addressed to.
        register: u16,
        /// Total size of the rejected write.
        len: usize,
    },
    /// The transport accepted only part of a write chunk.
    ShortWrite {
        /// Chunk length handed to the transport.
        expected: usize,
        /// Bytes the transport accepted.
        accepted: usize,
    },
    /// The provided configuration parameters are invalid.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
