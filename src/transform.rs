//! In-place array transforms every animation pattern is built from.
//!
//! All transforms are methods on [`PixelBuffer`]: [`color_all`](PixelBuffer::color_all),
//! [`fade_channel`](PixelBuffer::fade_channel), and [`shift`](PixelBuffer::shift).
//! Random color draws live in [`palette`](crate::palette).

use crate::buffer::PixelBuffer;
use crate::mapping::MappingMode;
use crate::pixel::{Channel, Pixel, PixelChannels};

// ============================================================================
// Modes
// ============================================================================

/// How [`PixelBuffer::fade_channel`] treats the 0..=255 channel bounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeMode {
    /// Wrap modulo 256: `255 + 1` becomes `0`, `0 - 1` becomes `255`.
    ///
    /// Patterns use the wrap as a visible "rolling seam".
    Modular,
    /// Clamp to `0..=255`.
    Constrained,
}

/// Direction of a one-pixel [`PixelBuffer::shift`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftDirection {
    /// Full: toward higher indices. Mirrored: inward, toward the center.
    Positive,
    /// Full: toward lower indices. Mirrored: outward, toward the tips.
    Negative,
}

impl ShiftDirection {
    /// The direction that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

// ============================================================================
// Transforms
// ============================================================================

impl<const N: usize> PixelBuffer<N> {
    /// Set every pixel to `color`.
    pub fn color_all(&mut self, color: Pixel) {
        self.fill(color);
    }

    /// Add `amount` to one channel of every pixel.
    ///
    /// Applies to the whole buffer regardless of [`MappingMode`].
    ///
    /// ```rust
    /// use galaxy_core::{Channel, Pixel, PixelBuffer, transform::FadeMode};
    ///
    /// let mut galaxy = PixelBuffer::<4>::filled(Pixel::new(250, 3, 0));
    ///
    /// galaxy.fade_channel(Channel::Red, 10, FadeMode::Modular);
    /// assert_eq!(galaxy[0].r, 4);
    ///
    /// galaxy.fade_channel(Channel::Green, -10, FadeMode::Constrained);
    /// assert_eq!(galaxy[0].g, 0);
    /// ```
    pub fn fade_channel(&mut self, channel: Channel, amount: i16, mode: FadeMode) {
        for pixel in self.iter_mut() {
            let value = pixel.channel_mut(channel);
            *value = match mode {
                FadeMode::Modular => fade_modular(*value, amount),
                FadeMode::Constrained => fade_constrained(*value, amount),
            };
        }
    }

    /// Rotate pixel values one position.
    ///
    /// In [`MappingMode::Full`] the buffer is one ring of length `N`:
    /// [`Positive`](ShiftDirection::Positive) moves every value to the next-higher
    /// index and wraps index `N - 1` into index `0`;
    /// [`Negative`](ShiftDirection::Negative) does the reverse.
    ///
    /// In [`MappingMode::Mirrored`] each arm rotates on its own.
    /// [`Positive`](ShiftDirection::Positive) moves values inward, wrapping the two
    /// center values out to the tips; [`Negative`](ShiftDirection::Negative) moves
    /// values outward, wrapping the two tip values in to the center.
    ///
    /// Every shift is a pure rotation: no value is created or lost, and shifting in
    /// the [reversed](ShiftDirection::reversed) direction restores the buffer.
    ///
    /// ```rust
    /// use galaxy_core::{MappingMode, Pixel, PixelBuffer, transform::ShiftDirection};
    ///
    /// let values = core::array::from_fn(|index| Pixel::new(index as u8, 0, 0));
    /// let mut galaxy = PixelBuffer::<6>::from(values);
    ///
    /// galaxy.shift(ShiftDirection::Positive, MappingMode::Mirrored);
    /// let reds: [u8; 6] = core::array::from_fn(|index| galaxy[index].r);
    /// assert_eq!(reds, [2, 0, 1, 4, 5, 3]);
    ///
    /// galaxy.shift(ShiftDirection::Negative, MappingMode::Mirrored);
    /// galaxy.shift(ShiftDirection::Positive, MappingMode::Full);
    /// let reds: [u8; 6] = core::array::from_fn(|index| galaxy[index].r);
    /// assert_eq!(reds, [5, 0, 1, 2, 3, 4]);
    /// ```
    pub fn shift(&mut self, direction: ShiftDirection, mapping: MappingMode) {
        match mapping {
            MappingMode::Full => match direction {
                ShiftDirection::Positive => self.rotate_right(1),
                ShiftDirection::Negative => self.rotate_left(1),
            },
            MappingMode::Mirrored => {
                // Arm A runs tip (0) to center; arm B runs center to tip (N - 1).
                let (arm_a, arm_b) = self.arms_mut();
                match direction {
                    ShiftDirection::Positive => {
                        arm_a.rotate_right(1);
                        arm_b.rotate_left(1);
                    }
                    ShiftDirection::Negative => {
                        arm_a.rotate_left(1);
                        arm_b.rotate_right(1);
                    }
                }
            }
        }
    }
}

fn fade_modular(value: u8, amount: i16) -> u8 {
    // Only the low byte of the step matters modulo 256.
    let step = amount.rem_euclid(256).to_le_bytes()[0];
    value.wrapping_add(step)
}

fn fade_constrained(value: u8, amount: i16) -> u8 {
    let faded = i16::from(value).saturating_add(amount).clamp(0, 255);
    u8::try_from(faded).unwrap_or(u8::MAX)
}
