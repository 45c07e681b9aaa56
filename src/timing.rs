//! Protocol timing configuration.
//!
//! The DHT11 datasheet only gives approximate pulse widths, and clones from
//! different manufacturers vary. Collecting the durations in one struct lets
//! a sensor variant or an unusually slow host substitute its own numbers
//! without touching the decode logic.

/// Timing parameters for one read transaction.
///
/// All polling budgets are expressed in 1 us polling cycles, matching the
/// driver's one-read-per-microsecond cadence.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Duration of the host's start-request low pulse, in milliseconds.
    /// The sensor requires at least 18 ms to detect it.
    pub start_low_ms: u32,
    /// Duration of the host's start-request high pulse, in microseconds,
    /// before the line is released to the sensor.
    pub start_high_us: u32,
    /// Polling budget for each leg of the sensor's acknowledge pulses
    /// (nominally 80 us low then 80 us high).
    pub ack_timeout_us: u16,
    /// Polling budget for the low sync pulse preceding each data bit
    /// (nominally 50 us).
    pub sync_timeout_us: u16,
    /// Nominal high-pulse width of a 0 bit, in microseconds.
    pub zero_pulse_us: u16,
    /// Nominal high-pulse width of a 1 bit, in microseconds. Also the
    /// polling budget for the data pulse, since it is the longer of the
    /// two legal widths.
    pub one_pulse_us: u16,
}

impl Timing {
    /// Timing for the stock DHT11.
    pub const DHT11: Timing = Timing {
        start_low_ms: 20,
        start_high_us: 50,
        ack_timeout_us: 100,
        sync_timeout_us: 50,
        zero_pulse_us: 30,
        one_pulse_us: 70,
    };

    /// Pulse width above which a data bit is decoded as 1.
    ///
    /// A pulse lasting longer than the difference between the two nominal
    /// widths cannot be a 0 bit; a pulse of exactly this duration still
    /// decodes as 0.
    pub const fn one_threshold_us(&self) -> u16 {
        self.one_pulse_us - self.zero_pulse_us
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DHT11
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dht11_threshold_is_pulse_difference() {
        assert_eq!(Timing::DHT11.one_threshold_us(), 40);
    }

    #[test]
    fn default_is_dht11() {
        assert_eq!(Timing::default(), Timing::DHT11);
    }
}
