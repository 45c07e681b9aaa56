use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::error::DhtError;
use crate::timing::Timing;

/// Driver for the DHT11 temperature and humidity sensor.
///
/// The sensor speaks a single-wire protocol: the host issues a start
/// request, the sensor acknowledges, then transmits 40 bits where each
/// bit's value is encoded in the duration of a high pulse. The driver
/// measures those pulses by polling the line once per microsecond, so a
/// whole `read` busy-waits for the full transaction (tens of
/// milliseconds, dominated by the start request).
pub struct Dht11<PIN, D> {
    pin: PIN,
    delay: D,
    timing: Timing,
}

/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl<PIN, DELAY, E> Dht11<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT11 driver with stock timing.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Self::with_timing(pin, delay, Timing::DHT11)
    }

    /// Creates a driver with custom protocol timing, for sensor clones
    /// with off-nominal pulse widths or hosts with slow GPIO reads.
    pub fn with_timing(pin: PIN, delay: DELAY, timing: Timing) -> Self {
        Dht11 { pin, delay, timing }
    }

    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// This method performs the complete DHT11 communication sequence:
    /// sending a start request, waiting for the sensor's acknowledge
    /// pulses, sampling 40 bits into 5 bytes, validating the checksum,
    /// and decoding the result.
    ///
    /// The first timeout at any phase aborts the transaction; no partial
    /// reading is ever produced.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if a communication or checksum error occurs.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.start()?;

        let mut data = [0; 4];

        for b in data.iter_mut() {
            *b = self.read_byte()?;
        }

        let checksum = self.read_byte()?;
        if data.iter().fold(0u8, |sum, v| sum.wrapping_add(*v)) != checksum {
            Err(DhtError::ChecksumMismatch)
        } else {
            Ok(self.parse_data(data))
        }
    }

    /// Converts the 4-byte data into a `Reading` struct.
    ///
    /// Humidity is integer part plus tenths. Temperature is integer part
    /// in byte 2; bit 7 of byte 3 flags a sub-zero value with an
    /// off-by-one convention (the integer part maps to `-1 - t`, not a
    /// plain negation), and the low nibble of byte 3 carries the tenths.
    /// Bits 4-6 of byte 3 are unused.
    fn parse_data(&self, data: [u8; 4]) -> Reading {
        let [hum_int, hum_dec, temp_int, temp_dec] = data;

        let relative_humidity = hum_int as f32 + hum_dec as f32 * 0.1;

        let mut temperature = temp_int as f32;
        if temp_dec & 0x80 != 0 {
            temperature = -1.0 - temperature;
        }
        temperature += (temp_dec & 0x0F) as f32 * 0.1;

        Reading {
            temperature,
            relative_humidity,
        }
    }

    /// Sends the start request to the DHT11 and waits for its acknowledge.
    ///
    /// The host pulls the line low for at least 18 ms so the sensor
    /// detects the request, then high briefly before releasing the line.
    /// The sensor answers with an ~80 us low pulse followed by an ~80 us
    /// high pulse.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        // Host start request
        self.pin.set_low()?;
        self.delay.delay_ms(self.timing.start_low_ms);
        self.pin.set_high()?;
        self.delay.delay_us(self.timing.start_high_us);

        // Sensor acknowledge: pulls low, then releases high
        self.wait_for_low(self.timing.ack_timeout_us)?;
        self.wait_for_high(self.timing.ack_timeout_us)?;
        Ok(())
    }

    /// Reads one byte (8 bits) from the sensor, MSB first.
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut byte: u8 = 0;

        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            if self.read_bit()? {
                byte |= bit_mask;
            }
        }

        Ok(byte)
    }

    /// Reads a single bit from the sensor.
    ///
    /// Each bit is preceded by an ~50 us low sync pulse. The line then
    /// goes high for ~30 us (bit 0) or ~70 us (bit 1); the measured high
    /// duration decides the value. A pulse of exactly the threshold
    /// width still decodes as 0.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        // Sync pulse
        self.wait_for_low(self.timing.sync_timeout_us)?;
        self.wait_for_high(self.timing.sync_timeout_us)?;

        // Data pulse. The wait budget is sized to the longer (1-bit)
        // width, since a legal pulse never exceeds it.
        let high_us = self.wait_for_low(self.timing.one_pulse_us)?;

        Ok(high_us > self.timing.one_threshold_us())
    }

    /// Waits until the data line goes high or the budget runs out.
    fn wait_for_high(&mut self, budget_us: u16) -> Result<u16, DhtError<E>> {
        Self::wait_for_state(&mut self.delay, budget_us, || self.pin.is_high())
    }

    /// Waits until the data line goes low or the budget runs out.
    fn wait_for_low(&mut self, budget_us: u16) -> Result<u16, DhtError<E>> {
        Self::wait_for_state(&mut self.delay, budget_us, || self.pin.is_low())
    }

    /// Generic wait loop that polls a pin condition once per microsecond.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider
    /// * `budget_us` - Maximum number of 1 us polling cycles
    /// * `condition` - Closure that returns true when the expected line state is reached
    ///
    /// # Returns
    ///
    /// The number of polling cycles that elapsed before the condition
    /// held, which doubles as the measured pulse duration in
    /// microseconds.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` if the budget is exhausted.
    fn wait_for_state<F>(
        delay: &mut DELAY,
        budget_us: u16,
        mut condition: F,
    ) -> Result<u16, DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        for elapsed in 0..budget_us {
            if condition()? {
                return Ok(elapsed);
            }
            delay.delay_us(1);
        }
        Err(DhtError::Timeout)
    }
}
