//! Runtime settings for driving the galaxy.
//!
//! The topology itself (pixel count, chip addresses) is fixed at compile time; see
//! [`buffer`](crate::buffer) and [`wire::layout`](crate::wire::layout).

use embassy_time::Duration;

use crate::wire::bit_bang::BAUD_RATE_DEFAULT;
use crate::wire::{BITS_PER_BYTE, FRAME_BYTES, frame_duration};
use crate::{Error, Result};

/// Default seed for the pattern driver's random source.
pub const SEED_DEFAULT: u32 = 25;

/// Default extra delay between pattern steps (none; the frame write paces the loop).
pub const STEP_DELAY_DEFAULT: Duration = Duration::from_micros(0);

/// Bus speed, pacing, and seed for a [`PatternDriver`](crate::driver::PatternDriver).
///
/// ```rust
/// use embassy_time::Duration;
/// use galaxy_core::config::GalaxyConfig;
///
/// let config = GalaxyConfig::DEFAULT
///     .with_step_delay(Duration::from_millis(5))
///     .with_seed(7);
/// config.validate().unwrap();
/// assert_eq!(config.max_frames_per_second().unwrap(), 46);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GalaxyConfig {
    /// Serial bus speed in bits per second.
    pub baud_rate: u32,
    /// Extra blocking delay after each pattern step.
    pub step_delay: Duration,
    /// Seed for pattern selection.
    pub seed: u32,
}

impl GalaxyConfig {
    /// 69.4 kbaud, no extra step delay, seed 25.
    pub const DEFAULT: Self = Self {
        baud_rate: BAUD_RATE_DEFAULT,
        step_delay: STEP_DELAY_DEFAULT,
        seed: SEED_DEFAULT,
    };

    /// Replace the baud rate.
    #[must_use]
    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Replace the step delay.
    #[must_use]
    pub const fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Replace the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check the settings can drive a bus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaudRateZero`] for a zero baud rate.
    pub const fn validate(self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::BaudRateZero);
        }
        Ok(())
    }

    /// Time to send one frame at this baud rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaudRateZero`] for a zero baud rate.
    pub fn frame_duration(self) -> Result<Duration> {
        frame_duration(self.baud_rate)
    }

    /// Whole frames per second the bus can carry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaudRateZero`] for a zero baud rate.
    pub fn max_frames_per_second(self) -> Result<u32> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "frame bit count is a small constant"
        )]
        const FRAME_BITS: u32 = (FRAME_BYTES * BITS_PER_BYTE) as u32;
        self.validate()?;
        Ok(self.baud_rate / FRAME_BITS)
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
