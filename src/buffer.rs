//! The galaxy's pixel buffer: one contiguous, fixed-length run of [`Pixel`]s split into two arms.
//!
//! See [`PixelBuffer`] for the topology and usage examples.

use core::ops::{Deref, DerefMut};

use crate::pixel::{Channel, Pixel, PixelChannels, colors};
use crate::{Error, Result};

/// Number of pixels (RGB triplets) in the galaxy.
pub const PIXEL_COUNT: usize = 42;

/// Number of arms the pixels are split across.
pub const ARM_COUNT: usize = 2;

/// Pixels on each arm.
pub const PIXELS_PER_ARM: usize = PIXEL_COUNT / ARM_COUNT;

/// Bytes per pixel on the wire (one each for red, green, and blue).
pub const BYTES_PER_PIXEL: usize = Channel::COUNT;

/// Fixed-length RGB pixel buffer with a two-arm topology.
///
/// Index `0` and index `N - 1` are the outer tips of the two arms. The two central
/// indices, `N / 2 - 1` and `N / 2`, are the galaxy's inner boundary. Each arm is
/// `N / 2` pixels long.
///
/// `N` must be even and at least 2. Any other length fails to compile:
///
/// ```rust,compile_fail
/// let _ = galaxy_core::PixelBuffer::<7>::new();
/// ```
///
/// Buffers deref to `[Pixel; N]`, so pixels can be read and written by index.
/// Indexing past the end panics; every index in this crate is derived from the
/// topology constants, so an out-of-range index is a programming error.
///
/// ```rust
/// use galaxy_core::{Channel, PixelBuffer, pixel::colors};
///
/// let mut galaxy = PixelBuffer::<42>::new();
/// galaxy[20] = colors::CYAN;
/// galaxy.set_channel(0, Channel::Red, 200);
///
/// let (arm_a, arm_b) = galaxy.arms();
/// assert_eq!(arm_a.len(), 21);
/// assert_eq!(arm_b.len(), 21);
/// assert_eq!(arm_a[20], colors::CYAN);
/// assert_eq!(galaxy.pixel(0).r, 200);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PixelBuffer<const N: usize>([Pixel; N]);

#[allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "topology arithmetic is bounded by the compile-time check; bad indices panic as documented"
)]
impl<const N: usize> PixelBuffer<N> {
    const TOPOLOGY: () = assert!(
        N >= ARM_COUNT && N % ARM_COUNT == 0,
        "pixel count must be even and at least 2"
    );

    /// Number of pixels in this buffer.
    pub const LEN: usize = N;

    /// Number of pixels on each arm.
    pub const ARM_LEN: usize = N / ARM_COUNT;

    /// Outer tip of the first arm.
    pub const TIP_A: usize = 0;

    /// Outer tip of the second arm.
    pub const TIP_B: usize = N - 1;

    /// Innermost pixel of the first arm.
    pub const CENTER_A: usize = N / ARM_COUNT - 1;

    /// Innermost pixel of the second arm.
    pub const CENTER_B: usize = N / ARM_COUNT;

    /// Create a new all-black buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self::filled(colors::BLACK)
    }

    /// Create a buffer with every pixel set to `color`.
    #[must_use]
    pub const fn filled(color: Pixel) -> Self {
        let () = Self::TOPOLOGY;
        Self([color; N])
    }

    /// Copy pixels out of a runtime slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when `pixels.len() != N`.
    pub fn from_slice(pixels: &[Pixel]) -> Result<Self> {
        if pixels.len() != N {
            return Err(Error::LengthMismatch {
                expected: N,
                actual: pixels.len(),
            });
        }
        let mut buffer = Self::new();
        buffer.0.copy_from_slice(pixels);
        Ok(buffer)
    }

    /// Number of pixels in this buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; a buffer holds at least two pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Read the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub const fn pixel(&self, index: usize) -> Pixel {
        self.0[index]
    }

    /// Overwrite the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub const fn set_pixel(&mut self, index: usize, pixel: Pixel) {
        self.0[index] = pixel;
    }

    /// Read one channel of the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn channel(&self, index: usize, channel: Channel) -> u8 {
        self.0[index].channel(channel)
    }

    /// Overwrite one channel of the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_channel(&mut self, index: usize, channel: Channel, value: u8) {
        self.0[index].set_channel(channel, value);
    }

    /// The two arms, tip-to-center for the first and center-to-tip for the second.
    #[must_use]
    pub fn arms(&self) -> (&[Pixel], &[Pixel]) {
        self.0.split_at(Self::ARM_LEN)
    }

    /// Mutable access to both arms at once.
    pub fn arms_mut(&mut self) -> (&mut [Pixel], &mut [Pixel]) {
        self.0.split_at_mut(Self::ARM_LEN)
    }
}

impl<const N: usize> Deref for PixelBuffer<N> {
    type Target = [Pixel; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for PixelBuffer<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Pixel; N]> for PixelBuffer<N> {
    fn from(array: [Pixel; N]) -> Self {
        let () = Self::TOPOLOGY;
        Self(array)
    }
}

impl<const N: usize> From<PixelBuffer<N>> for [Pixel; N] {
    fn from(buffer: PixelBuffer<N>) -> Self {
        buffer.0
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
