//! Serializes a [`PixelBuffer`] onto the galaxy's 9-bit serial bus.
//!
//! A frame is one address word per driver chip, each followed by that chip's pixel
//! data in green, blue, red order. Which pixels a chip receives depends on the
//! [`MappingMode`]; see [`layout::chip_layout`] for the table.
//!
//! On the line every word is 11 bits: 1 start bit, 8 data bits (LSB first), 1
//! address-select bit, and 1 stop bit. The address-select bit is what lets the chips
//! tell "this selects me" from "this is pixel data".
//!
//! # Example: Capture a Mirrored Frame
//!
//! ```rust
//! use galaxy_core::{Galaxy, MappingMode, pixel::colors};
//! use galaxy_core::wire::{FRAME_BYTES, RecordingBus, Transmitter, Word};
//!
//! let galaxy = Galaxy::filled(colors::ORANGE);
//! let mut transmitter = Transmitter::new(RecordingBus::<FRAME_BYTES>::new());
//! transmitter.transmit_frame(&galaxy, MappingMode::Mirrored);
//!
//! let words = transmitter.bus().words();
//! assert_eq!(words[0], Word::Address(0x03));
//! // green, blue, red
//! assert_eq!(&words[1..4], &[Word::Data(127), Word::Data(0), Word::Data(255)]);
//! ```

pub mod bit_bang;
pub mod layout;

use embassy_time::Duration;
use heapless::Vec;

use crate::buffer::{BYTES_PER_PIXEL, PIXEL_COUNT, PixelBuffer};
use crate::mapping::MappingMode;
use crate::pixel::{Channel, PixelChannels};
use crate::{Error, Result};

pub use layout::{CHIP_ADDRESSES, CHIP_COUNT};

// ============================================================================
// Constants
// ============================================================================

/// Line bits per word: 1 start, 8 data, 1 address-select, 1 stop.
pub const BITS_PER_BYTE: usize = 11;

/// Order in which a pixel's channels go out on the wire.
pub const WIRE_CHANNEL_ORDER: [Channel; BYTES_PER_PIXEL] =
    [Channel::Green, Channel::Blue, Channel::Red];

/// Words in one frame of the wired galaxy: every pixel's three bytes plus one address per chip.
pub const FRAME_BYTES: usize = frame_len::<PIXEL_COUNT>();

/// Words in one frame of an `N`-pixel buffer.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "pixel counts are bounded by the compile-time topology checks"
)]
pub const fn frame_len<const N: usize>() -> usize {
    N * BYTES_PER_PIXEL + CHIP_COUNT
}

/// Time to clock one full frame of the wired galaxy onto the bus at `baud_rate`.
///
/// This is the ceiling on refresh rate: ~21.4 ms (~46.7 frames per second) at 69.4 kbaud.
///
/// ```rust
/// use galaxy_core::wire::frame_duration;
///
/// let duration = frame_duration(69_400).unwrap();
/// assert_eq!(duration.as_micros(), 21_397);
/// ```
///
/// # Errors
///
/// Returns [`Error::BaudRateZero`] for a zero baud rate.
pub fn frame_duration(baud_rate: u32) -> Result<Duration> {
    const FRAME_BIT_MICROS: u64 = (FRAME_BYTES * BITS_PER_BYTE) as u64 * 1_000_000;
    let micros = FRAME_BIT_MICROS
        .checked_div(u64::from(baud_rate))
        .ok_or(Error::BaudRateZero)?;
    Ok(Duration::from_micros(micros))
}

// ============================================================================
// Word - One 9-bit bus word
// ============================================================================

/// A 9-bit bus word: 8 bits of payload plus the address-select bit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Word {
    /// Selects the chip with this address; the data words that follow are for it.
    Address(u8),
    /// One channel intensity for the currently selected chip.
    Data(u8),
}

impl Word {
    /// Bit position of the address-select flag in [`nine_bit`](Self::nine_bit).
    pub const ADDRESS_BIT: u16 = 1 << 8;

    /// The 8-bit payload.
    #[must_use]
    pub const fn payload(self) -> u8 {
        match self {
            Self::Address(value) | Self::Data(value) => value,
        }
    }

    /// Whether the address-select bit is set.
    #[must_use]
    pub const fn is_address(self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// Payload in bits 0..8, address-select in bit 8.
    #[must_use]
    pub const fn nine_bit(self) -> u16 {
        let payload = u16::from_le_bytes([self.payload(), 0]);
        if self.is_address() {
            payload | Self::ADDRESS_BIT
        } else {
            payload
        }
    }

    /// Inverse of [`nine_bit`](Self::nine_bit); bits above 8 are ignored.
    #[must_use]
    pub const fn from_nine_bit(bits: u16) -> Self {
        let [payload, _] = bits.to_le_bytes();
        if bits & Self::ADDRESS_BIT != 0 {
            Self::Address(payload)
        } else {
            Self::Data(payload)
        }
    }

    /// The 11 line bits in transmission order, first bit in bit 0.
    ///
    /// Start bit (low), 8 payload bits LSB first, address-select bit, stop bit (high).
    ///
    /// ```rust
    /// use galaxy_core::wire::Word;
    ///
    /// assert_eq!(Word::Address(0x03).line_bits(), 0b1_1_00000011_0);
    /// assert_eq!(Word::Data(0xff).line_bits(), 0b1_0_11111111_0);
    /// ```
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "nine payload bits shifted once fit in 16 bits"
    )]
    pub const fn line_bits(self) -> u16 {
        const STOP_BIT: u16 = 1 << (BITS_PER_BYTE - 1);
        (self.nine_bit() << 1) | STOP_BIT
    }
}

// ============================================================================
// NineBitBus - The physical bus seam
// ============================================================================

/// A serial transmitter that can send 9-bit words.
///
/// Implementations block until the previous word's framing slot has completed before
/// starting the next. There is no error path: a stalled bus is a hardware fault.
pub trait NineBitBus {
    /// Send one word, blocking until the bus can accept it.
    fn write_word(&mut self, word: Word);
}

impl<B: NineBitBus + ?Sized> NineBitBus for &mut B {
    fn write_word(&mut self, word: Word) {
        (**self).write_word(word);
    }
}

/// Every word of one frame, in transmission order.
///
/// ```rust
/// use galaxy_core::{Galaxy, MappingMode};
/// use galaxy_core::wire::{FRAME_BYTES, frame_words};
///
/// let galaxy = Galaxy::new();
/// let words = frame_words(&galaxy, MappingMode::Full);
/// assert_eq!(words.filter(|word| word.is_address()).count(), 9);
/// assert_eq!(frame_words(&galaxy, MappingMode::Full).count(), FRAME_BYTES);
/// ```
pub fn frame_words<const N: usize>(
    buffer: &PixelBuffer<N>,
    mapping: MappingMode,
) -> impl Iterator<Item = Word> + '_ {
    // Rejects pixel counts the chips cannot carry at compile time.
    let _ = const { layout::pixels_per_chip::<N>() };
    layout::chip_layout::<N>(mapping)
        .into_iter()
        .flat_map(move |segment| {
            let data = segment.pixels.indices().flat_map(move |index| {
                let pixel = buffer.pixel(index);
                WIRE_CHANNEL_ORDER
                    .into_iter()
                    .map(move |channel| Word::Data(pixel.channel(channel)))
            });
            core::iter::once(Word::Address(segment.address)).chain(data)
        })
}

// ============================================================================
// Transmitter
// ============================================================================

/// Writes whole frames to a [`NineBitBus`].
///
/// See the [module documentation](mod@crate::wire) for an example.
pub struct Transmitter<B> {
    bus: B,
    frames_sent: u32,
}

impl<B: NineBitBus> Transmitter<B> {
    /// Wrap a bus.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            frames_sent: 0,
        }
    }

    /// Send the whole buffer as one frame, blocking until the last word is on the bus.
    ///
    /// The pixel count must split evenly across the chips (see
    /// [`layout::pixels_per_chip`]); other counts fail to compile.
    pub fn transmit_frame<const N: usize>(&mut self, buffer: &PixelBuffer<N>, mapping: MappingMode) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "transmit_frame: frame {} of {} words, {}",
            self.frames_sent,
            frame_len::<N>(),
            mapping
        );
        for word in frame_words(buffer, mapping) {
            self.bus.write_word(word);
        }
        self.frames_sent = self.frames_sent.wrapping_add(1);
    }

    /// Frames sent since construction (wraps at `u32::MAX`).
    #[must_use]
    pub const fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    /// The underlying bus.
    #[must_use]
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the underlying bus.
    pub const fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give back the bus.
    pub fn into_inner(self) -> B {
        self.bus
    }
}

// ============================================================================
// RecordingBus - Captures words in memory
// ============================================================================

/// A [`NineBitBus`] that records up to `CAP` words in memory.
///
/// Used by host tests and by emulators that render what the chips would see. Words past
/// `CAP` are dropped and counted in [`dropped`](Self::dropped).
#[derive(Clone, Debug, Default)]
pub struct RecordingBus<const CAP: usize> {
    words: Vec<Word, CAP>,
    dropped: usize,
}

impl<const CAP: usize> RecordingBus<CAP> {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            dropped: 0,
        }
    }

    /// Words recorded so far.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words that did not fit.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.words.clear();
        self.dropped = 0;
    }

    /// Addresses in the order they were sent.
    pub fn addresses(&self) -> impl Iterator<Item = u8> + '_ {
        self.words
            .iter()
            .filter(|word| word.is_address())
            .map(|word| word.payload())
    }

    /// Data payloads that followed each sent occurrence of `address`, concatenated.
    #[must_use]
    pub fn data_for(&self, address: u8) -> Vec<u8, CAP> {
        let mut selected = false;
        let mut data = Vec::new();
        for word in &self.words {
            match *word {
                Word::Address(value) => selected = value == address,
                Word::Data(value) if selected => {
                    // Capacity matches the word buffer, so this always fits.
                    let _ = data.push(value);
                }
                Word::Data(_) => {}
            }
        }
        data
    }
}

impl<const CAP: usize> NineBitBus for RecordingBus<CAP> {
    fn write_word(&mut self, word: Word) {
        if self.words.push(word).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}
