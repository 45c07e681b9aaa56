/// Possible errors from the DHT11 driver.
///
/// A failed read leaves the driver ready for another attempt; retrying
/// (after the sensor's ~1 s recovery interval) is up to the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out waiting for a pin state change.
    ///
    /// Covers a disconnected or unresponsive sensor as well as missed
    /// edges at any protocol phase.
    Timeout,
    /// Checksum did not match the received data.
    ///
    /// The full 40-bit transfer completed, but the transmitted parity
    /// byte disagrees with the sum of the four data bytes.
    ChecksumMismatch,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}
