//! The pattern loop: write a frame, step the current pattern, rotate patterns at random.
//!
//! Pattern bodies live outside this crate. Anything implementing [`Pattern`] (including a
//! closure with the same signature) can be driven.
//!
//! # Example
//!
//! ```rust
//! use galaxy_core::{MappingMode, PixelBuffer, pixel::colors, transform::ShiftDirection};
//! use galaxy_core::config::GalaxyConfig;
//! use galaxy_core::driver::{PatternDriver, PatternEntry};
//! use galaxy_core::wire::{FRAME_BYTES, RecordingBus};
//!
//! struct NoDelay;
//! impl embedded_hal::delay::DelayNs for NoDelay {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! let mut marquee = |galaxy: &mut PixelBuffer<42>, first_step: bool, mapping: &mut MappingMode| {
//!     if first_step {
//!         *mapping = MappingMode::Mirrored;
//!         galaxy.color_all(colors::BLACK);
//!         galaxy[0] = colors::WHITE;
//!     }
//!     galaxy.shift(ShiftDirection::Positive, *mapping);
//! };
//!
//! let entry: PatternEntry<'_, 42> = PatternEntry::new(&mut marquee, 100);
//! let mut driver = PatternDriver::seeded(
//!     GalaxyConfig::DEFAULT,
//!     RecordingBus::<{ 3 * FRAME_BYTES }>::new(),
//!     NoDelay,
//!     [entry],
//! )
//! .unwrap();
//!
//! driver.run(3);
//! assert_eq!(driver.buffer()[3], colors::WHITE);
//! assert_eq!(driver.transmitter().frames_sent(), 3);
//! ```

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::buffer::PixelBuffer;
use crate::config::GalaxyConfig;
use crate::mapping::MappingMode;
use crate::palette::{Lcg, RandomSource};
use crate::pixel::colors;
use crate::wire::{NineBitBus, Transmitter};
use crate::{Error, Result};

/// Most patterns one driver can rotate between.
pub const MAX_PATTERNS: usize = 16;

/// One animation pattern.
///
/// `step` is called once per frame. `first_step` is `true` on the first call after the
/// pattern is selected, so the pattern can set up the buffer and choose its mapping.
/// The mapping is shared across patterns; a pattern that does not set it inherits the
/// previous one.
pub trait Pattern<const N: usize> {
    /// Advance the pattern by one frame.
    fn step(&mut self, buffer: &mut PixelBuffer<N>, first_step: bool, mapping: &mut MappingMode);
}

impl<F, const N: usize> Pattern<N> for F
where
    F: FnMut(&mut PixelBuffer<N>, bool, &mut MappingMode),
{
    fn step(&mut self, buffer: &mut PixelBuffer<N>, first_step: bool, mapping: &mut MappingMode) {
        self(buffer, first_step, mapping);
    }
}

/// A pattern and how many frames it runs before another is chosen.
pub struct PatternEntry<'a, const N: usize> {
    pattern: &'a mut dyn Pattern<N>,
    iterations: u32,
}

impl<'a, const N: usize> PatternEntry<'a, N> {
    /// Run `pattern` for `iterations` frames per selection (at least one).
    pub fn new<P: Pattern<N> + 'a>(pattern: &'a mut P, iterations: u32) -> Self {
        Self {
            pattern,
            iterations: iterations.max(1),
        }
    }

    /// Frames per selection.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// Owns the pixel buffer and runs the write-then-step loop.
///
/// Each [`tick`](Self::tick):
/// 1. transmits the buffer with the current mapping,
/// 2. steps the current pattern,
/// 3. waits the configured step delay, and
/// 4. after the pattern's iteration count, picks the next pattern uniformly at random.
///
/// The buffer starts all black and the mapping starts at [`MappingMode::Full`].
pub struct PatternDriver<'a, B, R, D, const N: usize> {
    buffer: PixelBuffer<N>,
    mapping: MappingMode,
    transmitter: Transmitter<B>,
    patterns: Vec<PatternEntry<'a, N>, MAX_PATTERNS>,
    rng: R,
    delay: D,
    step_delay: Duration,
    current: usize,
    first_step: bool,
    ticks: u32,
}

impl<'a, B, D, const N: usize> PatternDriver<'a, B, Lcg, D, N>
where
    B: NineBitBus,
    D: DelayNs,
{
    /// Create a driver whose random source is an [`Lcg`] seeded from `config`.
    ///
    /// # Errors
    ///
    /// See [`PatternDriver::new`].
    pub fn seeded(
        config: GalaxyConfig,
        bus: B,
        delay: D,
        patterns: impl IntoIterator<Item = PatternEntry<'a, N>>,
    ) -> Result<Self> {
        Self::new(config, bus, Lcg::new(config.seed), delay, patterns)
    }
}

impl<'a, B, R, D, const N: usize> PatternDriver<'a, B, R, D, N>
where
    B: NineBitBus,
    R: RandomSource,
    D: DelayNs,
{
    /// Create a driver that starts on the first pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaudRateZero`] for an invalid config, [`Error::EmptyPatternList`]
    /// when no patterns are given, and [`Error::TooManyPatterns`] past [`MAX_PATTERNS`].
    pub fn new(
        config: GalaxyConfig,
        bus: B,
        rng: R,
        delay: D,
        patterns: impl IntoIterator<Item = PatternEntry<'a, N>>,
    ) -> Result<Self> {
        config.validate()?;
        let mut entries = Vec::new();
        for entry in patterns {
            entries
                .push(entry)
                .map_err(|_| Error::TooManyPatterns(MAX_PATTERNS))?;
        }
        if entries.is_empty() {
            return Err(Error::EmptyPatternList);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("PatternDriver::new: {} patterns", entries.len());

        Ok(Self {
            buffer: PixelBuffer::filled(colors::BLACK),
            mapping: MappingMode::Full,
            transmitter: Transmitter::new(bus),
            patterns: entries,
            rng,
            delay,
            step_delay: config.step_delay,
            current: 0,
            first_step: true,
            ticks: 0,
        })
    }

    /// Run one frame: transmit, step, pace, and rotate patterns when due.
    #[allow(
        clippy::indexing_slicing,
        reason = "the current pattern is always drawn below the pattern count"
    )]
    pub fn tick(&mut self) {
        self.transmitter.transmit_frame(&self.buffer, self.mapping);

        let entry = &mut self.patterns[self.current];
        entry
            .pattern
            .step(&mut self.buffer, self.first_step, &mut self.mapping);
        self.first_step = false;
        let iterations = entry.iterations;

        if self.step_delay.as_micros() > 0 {
            let micros = u32::try_from(self.step_delay.as_micros()).unwrap_or(u32::MAX);
            self.delay.delay_us(micros);
        }

        self.ticks = self.ticks.saturating_add(1);
        if self.ticks >= iterations {
            self.select_random_pattern();
        }
    }

    /// Run `frames` ticks back to back.
    pub fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.tick();
        }
    }

    /// Abandon the current pattern and pick another at random.
    pub fn skip(&mut self) {
        self.select_random_pattern();
    }

    fn select_random_pattern(&mut self) {
        self.current = self.rng.below(self.patterns.len());
        self.first_step = true;
        self.ticks = 0;
        #[cfg(feature = "defmt")]
        defmt::info!("PatternDriver: switching to pattern {}", self.current);
    }

    /// The pixel buffer as of the last step.
    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Mapping the next frame will be written with.
    #[must_use]
    pub const fn mapping(&self) -> MappingMode {
        self.mapping
    }

    /// Index of the running pattern.
    #[must_use]
    pub const fn current_pattern(&self) -> usize {
        self.current
    }

    /// Frames the running pattern has been stepped.
    #[must_use]
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// The transmitter and its bus.
    #[must_use]
    pub const fn transmitter(&self) -> &Transmitter<B> {
        &self.transmitter
    }

    /// Mutable access to the transmitter, e.g. to clear a recording bus.
    pub const fn transmitter_mut(&mut self) -> &mut Transmitter<B> {
        &mut self.transmitter
    }
}
