//! A [`NineBitBus`] that bit-bangs 11-bit UART words on a GPIO pin.
//!
//! Useful on boards without a 9-bit-capable UART. Timing comes from a blocking
//! [`DelayNs`], so each word occupies the line for exactly [`BITS_PER_BYTE`] bit periods.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::{BITS_PER_BYTE, NineBitBus, Word};
use crate::{Error, Result};

/// Default bus speed of the galaxy's driver chips.
pub const BAUD_RATE_DEFAULT: u32 = 69_400;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Bit-banged 9-bit serial transmitter.
///
/// The pin idles high (the UART mark state). Pins whose writes can fail are not
/// supported; the bus has no error path.
///
/// ```rust
/// use core::convert::Infallible;
/// use embedded_hal::{delay::DelayNs, digital::{ErrorType, OutputPin}};
/// use galaxy_core::wire::{NineBitBus, Word, bit_bang::BitBangBus};
///
/// struct Line(Vec<bool>);
/// impl ErrorType for Line { type Error = Infallible; }
/// impl OutputPin for Line {
///     fn set_low(&mut self) -> Result<(), Infallible> { self.0.push(false); Ok(()) }
///     fn set_high(&mut self) -> Result<(), Infallible> { self.0.push(true); Ok(()) }
/// }
/// struct NoDelay;
/// impl DelayNs for NoDelay { fn delay_ns(&mut self, _ns: u32) {} }
///
/// let mut bus = BitBangBus::new(Line(Vec::new()), NoDelay, 69_400).unwrap();
/// bus.write_word(Word::Address(0x03));
/// let (line, _) = bus.release();
/// // idle, start, 1 1 0 0 0 0 0 0, address, stop
/// assert_eq!(line.0, [true, false, true, true, false, false, false, false, false, false, true, true]);
/// ```
pub struct BitBangBus<P, D> {
    pin: P,
    delay: D,
    bit_period_ns: u32,
}

impl<P, D> BitBangBus<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Take the pin, drive it to idle, and fix the bit period from `baud_rate`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaudRateZero`] for a zero baud rate.
    pub fn new(mut pin: P, delay: D, baud_rate: u32) -> Result<Self> {
        let bit_period_ns = NANOS_PER_SECOND
            .checked_div(baud_rate)
            .ok_or(Error::BaudRateZero)?;
        let Ok(()) = pin.set_high();
        Ok(Self {
            pin,
            delay,
            bit_period_ns,
        })
    }

    /// Length of one bit on the line, in nanoseconds.
    #[must_use]
    pub const fn bit_period_ns(&self) -> u32 {
        self.bit_period_ns
    }

    /// Give back the pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn drive(&mut self, high: bool) {
        let Ok(()) = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.delay.delay_ns(self.bit_period_ns);
    }
}

impl<P, D> NineBitBus for BitBangBus<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "shifts stay below the 11 framed bits"
    )]
    fn write_word(&mut self, word: Word) {
        let bits = word.line_bits();
        for bit in 0..BITS_PER_BYTE {
            self.drive((bits >> bit) & 1 == 1);
        }
    }
}
