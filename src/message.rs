//! An explicit byte-encoding contract for typed payloads.

/// A value that can travel as a radio payload.
///
/// Both ends of a link must use the same encoding, so implementations
/// define a stable byte layout instead of relying on how the compiler
/// happens to lay a struct out in memory. Multi-byte fields should pick
/// an explicit endianness.
///
/// ```
/// use nrf24_radio::Message;
///
/// struct Reading {
///     temperature: i16,
///     humidity: u8,
/// }
///
/// impl Message for Reading {
///     const LEN: usize = 3;
///
///     fn encode(&self, buf: &mut [u8]) {
///         buf[..2].copy_from_slice(&self.temperature.to_le_bytes());
///         buf[2] = self.humidity;
///     }
///
///     fn decode(buf: &[u8]) -> Self {
///         Reading {
///             temperature: i16::from_le_bytes([buf[0], buf[1]]),
///             humidity: buf[2],
///         }
///     }
/// }
/// ```
pub trait Message: Sized {
    /// The encoded length in bytes. Must not exceed 32, the radio's
    /// payload slot size.
    const LEN: usize;

    /// Write the encoded form into `buf[..Self::LEN]`.
    fn encode(&self, buf: &mut [u8]);

    /// Rebuild a value from `buf[..Self::LEN]`.
    fn decode(buf: &[u8]) -> Self;
}
