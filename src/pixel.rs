//! RGB pixels with by-name and by-index channel access, plus the galaxy's named colors.
//!
//! See [`PixelChannels`] for channel addressing and [`colors`] for the named palette.

use crate::{Error, Result};

/// 8-bit-per-channel RGB pixel, re-exported from the `smart_leds` crate.
///
/// Fields are addressable by name (`r`, `g`, `b`) or, through [`PixelChannels`], by [`Channel`].
pub type Pixel = smart_leds::RGB8;

// ============================================================================
// Channel - Index addressing for pixel intensities
// ============================================================================

/// One of a pixel's three intensity channels.
///
/// The discriminants are the channel indices, so `Channel::Green as usize == 1`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red intensity.
    Red = 0,
    /// Green intensity.
    Green = 1,
    /// Blue intensity.
    Blue = 2,
}

impl Channel {
    /// Number of channels in a pixel.
    pub const COUNT: usize = 3;

    /// All channels in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Red, Self::Green, Self::Blue];

    /// Index of this channel (`0` red, `1` green, `2` blue).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Channel {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::ChannelIndexOutOfRange(index))
    }
}

/// Channel access on a [`Pixel`] by [`Channel`] value.
///
/// ```rust
/// use galaxy_core::{Channel, Pixel, PixelChannels};
///
/// let mut pixel = Pixel::new(10, 20, 30);
/// assert_eq!(pixel.channel(Channel::Green), 20);
///
/// *pixel.channel_mut(Channel::try_from(2).unwrap()) = 99;
/// assert_eq!(pixel.b, 99);
/// ```
pub trait PixelChannels {
    /// Read one channel.
    #[must_use]
    fn channel(&self, channel: Channel) -> u8;

    /// Mutable access to one channel.
    fn channel_mut(&mut self, channel: Channel) -> &mut u8;

    /// Overwrite one channel, leaving the others untouched.
    fn set_channel(&mut self, channel: Channel, value: u8) {
        *self.channel_mut(channel) = value;
    }
}

impl PixelChannels for Pixel {
    #[inline]
    fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }
}

/// Build a pure grey of the given intensity.
#[must_use]
pub const fn grey(level: u8) -> Pixel {
    Pixel::new(level, level, level)
}

// ============================================================================
// Named colors
// ============================================================================

/// Named colors of the galaxy palette.
///
/// The twelve hues form a color wheel at 30° steps starting from red; see
/// [`HUES`](crate::palette::HUES) for the ordered table.
pub mod colors {
    use super::{Pixel, grey};

    /// Red.
    pub const RED: Pixel = Pixel::new(255, 0, 0);
    /// Orange.
    pub const ORANGE: Pixel = Pixel::new(255, 127, 0);
    /// Yellow.
    pub const YELLOW: Pixel = Pixel::new(255, 255, 0);
    /// Chartreuse.
    pub const CHARTREUSE: Pixel = Pixel::new(127, 255, 0);
    /// Green.
    pub const GREEN: Pixel = Pixel::new(0, 255, 0);
    /// Aqua (spring green).
    pub const AQUA: Pixel = Pixel::new(0, 255, 127);
    /// Cyan.
    pub const CYAN: Pixel = Pixel::new(0, 255, 255);
    /// Azure.
    pub const AZURE: Pixel = Pixel::new(0, 127, 255);
    /// Blue.
    pub const BLUE: Pixel = Pixel::new(0, 0, 255);
    /// Violet.
    pub const VIOLET: Pixel = Pixel::new(127, 0, 255);
    /// Magenta.
    pub const MAGENTA: Pixel = Pixel::new(255, 0, 255);
    /// Rose.
    pub const ROSE: Pixel = Pixel::new(255, 0, 127);
    /// White.
    pub const WHITE: Pixel = grey(255);
    /// Light grey.
    pub const LT_GREY: Pixel = grey(191);
    /// Mid grey.
    pub const GREY: Pixel = grey(127);
    /// Dark grey.
    pub const DARK_GREY: Pixel = grey(63);
    /// Black (off).
    pub const BLACK: Pixel = grey(0);
}
