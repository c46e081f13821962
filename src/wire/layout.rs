//! Compile-time description of which buffer pixels each driver chip receives, and in what order.
//!
//! See [`chip_layout`] for the table and [`PixelRun`] for how a chip's pixels are walked.

use crate::buffer::ARM_COUNT;
use crate::mapping::MappingMode;

/// Number of downstream driver chips on the bus.
pub const CHIP_COUNT: usize = 9;

/// Bus address of each driver chip.
///
/// Chips `0..4` drive the first arm, chip `4` is the shared end cap, and chips `5..9`
/// drive the second arm (written in reverse order, `8` down to `5`). The values all
/// share odd parity, a holdover from an 8-bit odd-parity emulation of the 9-bit
/// address scheme.
pub const CHIP_ADDRESSES: [u8; CHIP_COUNT] = [0x03, 0x05, 0x06, 0x09, 0x0a, 0x12, 0x11, 0x0f, 0x0c];

/// Chips per arm, excluding the shared end cap.
pub const ARM_CHIPS: usize = 4;

/// Position of the end cap chip in [`CHIP_ADDRESSES`].
pub const END_CAP_CHIP: usize = ARM_CHIPS;

/// A walk over buffer indices: `count` steps of `stride`, starting at `start`.
///
/// Strides of `-1` and `1` walk an arm down or up. The end cap uses a stride of `0`
/// (the same tip twice) or `N - 1` (both tips).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelRun {
    /// First buffer index.
    pub start: usize,
    /// Number of pixels in the run.
    pub count: usize,
    /// Index step between pixels.
    pub stride: isize,
}

impl PixelRun {
    const fn descending(start: usize, count: usize) -> Self {
        Self {
            start,
            count,
            stride: -1,
        }
    }

    const fn ascending(start: usize, count: usize) -> Self {
        Self {
            start,
            count,
            stride: 1,
        }
    }

    /// Buffer index of the `step`-th pixel of the run.
    ///
    /// # Panics
    ///
    /// Panics if `step >= count`.
    #[must_use]
    pub const fn index(&self, step: usize) -> usize {
        assert!(step < self.count, "step past end of pixel run");
        #[allow(
            clippy::cast_possible_wrap,
            reason = "steps are bounded by the pixel count"
        )]
        let offset = self.stride.wrapping_mul(step as isize);
        self.start.wrapping_add_signed(offset)
    }

    /// Buffer indices in transmission order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..self.count).map(move |step| self.index(step))
    }
}

/// One driver chip's slice of a frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipSegment {
    /// Bus address sent before the chip's data.
    pub address: u8,
    /// Pixels the chip receives.
    pub pixels: PixelRun,
}

/// Pixels carried by each arm chip for an `N`-pixel buffer.
///
/// Each arm is `N / 2` pixels: one on the end cap, the rest split evenly over
/// [`ARM_CHIPS`] chips. A pixel count that does not split evenly fails to compile.
///
/// # Panics
///
/// Panics during const evaluation for any `N` the chips cannot carry.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "operands are checked by the assertions before use"
)]
pub const fn pixels_per_chip<const N: usize>() -> usize {
    assert!(
        N >= ARM_COUNT && N % ARM_COUNT == 0,
        "pixel count must be even and at least 2"
    );
    let arm_len = N / ARM_COUNT;
    assert!(
        (arm_len - 1) % ARM_CHIPS == 0,
        "each arm minus its end cap pixel must split evenly across the arm chips"
    );
    (arm_len - 1) / ARM_CHIPS
}

/// Transmission order of chips and their pixels.
///
/// For `N = 42` (21 pixels per arm, 5 per chip):
///
/// ```text
/// chip addr  Mirrored          Full
/// 0    0x03  20 19 18 17 16    20 19 18 17 16
/// 1    0x05  15 .. 11          15 .. 11
/// 2    0x06  10 .. 6           10 .. 6
/// 3    0x09   5 .. 1            5 .. 1
/// 4    0x0a   0  0              0 41
/// 8    0x0c  20 .. 16          21 22 23 24 25
/// 7    0x0f  15 .. 11          26 .. 30
/// 6    0x11  10 .. 6           31 .. 35
/// 5    0x12   5 .. 1           36 .. 40
/// ```
///
/// ```rust
/// use galaxy_core::MappingMode;
/// use galaxy_core::wire::layout::chip_layout;
///
/// const FULL: [galaxy_core::wire::layout::ChipSegment; 9] = chip_layout::<42>(MappingMode::Full);
/// assert_eq!(FULL[4].pixels.indices().collect::<Vec<_>>(), [0, 41]);
/// assert_eq!(FULL[5].address, 0x0c);
/// assert_eq!(FULL[5].pixels.indices().collect::<Vec<_>>(), [21, 22, 23, 24, 25]);
/// ```
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "const-evaluated table; chip and pixel indices are bounded by the topology"
)]
pub const fn chip_layout<const N: usize>(mapping: MappingMode) -> [ChipSegment; CHIP_COUNT] {
    let per_chip = pixels_per_chip::<N>();
    let arm_len = N / ARM_COUNT;
    #[allow(
        clippy::cast_possible_wrap,
        reason = "pixel counts are far below isize::MAX"
    )]
    let tip_to_tip = (N - 1) as isize;
    let end_cap_stride = match mapping {
        MappingMode::Mirrored => 0,
        MappingMode::Full => tip_to_tip,
    };

    let mut layout = [ChipSegment {
        address: CHIP_ADDRESSES[END_CAP_CHIP],
        pixels: PixelRun {
            start: 0,
            count: 2,
            stride: end_cap_stride,
        },
    }; CHIP_COUNT];

    let mut chip = 0;
    while chip < ARM_CHIPS {
        // First arm: center outward, one chip's worth at a time.
        let arm_a_start = arm_len - 1 - chip * per_chip;
        layout[chip] = ChipSegment {
            address: CHIP_ADDRESSES[chip],
            pixels: PixelRun::descending(arm_a_start, per_chip),
        };

        // Second arm: chips are addressed from the last address back.
        let arm_b_pixels = match mapping {
            MappingMode::Mirrored => PixelRun::descending(arm_a_start, per_chip),
            MappingMode::Full => PixelRun::ascending(arm_len + chip * per_chip, per_chip),
        };
        layout[END_CAP_CHIP + 1 + chip] = ChipSegment {
            address: CHIP_ADDRESSES[CHIP_COUNT - 1 - chip],
            pixels: arm_b_pixels,
        };
        chip += 1;
    }
    layout
}
