//! Word-order helpers for buffers read from the sensor.

/// Rewrites each big-endian 32-bit word of `buf` in native byte order, in place.
///
/// Only whole words are touched; a trailing remainder of one to three bytes is
/// left as-is.
pub fn swap_buffer(buf: &mut [u8]) {
    for word in buf.chunks_exact_mut(4) {
        let value = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        word.copy_from_slice(&value.to_ne_bytes());
    }
}
