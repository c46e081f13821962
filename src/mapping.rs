//! Buffer-to-hardware mapping modes and the index arithmetic each one implies.
//!
//! The mode is not stored on the [`PixelBuffer`](crate::PixelBuffer). Callers pass it to
//! every [`shift`](crate::PixelBuffer::shift) and
//! [`transmit_frame`](crate::wire::Transmitter::transmit_frame) that operates on the same
//! logical frame.

/// How the pixel buffer is laid onto the two physical arms.
///
/// ```text
/// Physical galaxy, first arm tip -> center -> second arm tip (N = 42):
///
///   Mirrored:  0 1 .. 19 20 | 20 19 .. 1 0      (second half of the buffer unused)
///   Full:      0 1 .. 19 20 | 21 22 .. 40 41
/// ```
///
/// Both layouts share the first arm: buffer index `0` sits at the end cap and
/// index `N / 2 - 1` at the galaxy's center.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MappingMode {
    /// The first half of the buffer is written symmetrically to both arms.
    ///
    /// Transforms treat the two halves as independent, identically-patterned arms.
    Mirrored,
    /// The whole buffer is written as one continuous ring spanning both arms.
    #[default]
    Full,
}

impl MappingMode {
    /// Both modes.
    pub const ALL: [Self; 2] = [Self::Mirrored, Self::Full];

    /// Whether this is [`MappingMode::Mirrored`].
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Mirrored)
    }

    /// Number of distinct buffer pixels that reach the hardware.
    #[must_use]
    pub const fn visible_len<const N: usize>(self) -> usize {
        match self {
            Self::Mirrored => N / 2,
            Self::Full => N,
        }
    }

    /// Buffer index displayed at a physical position.
    ///
    /// Physical positions run from the first arm's tip (`0`), through the center, to
    /// the second arm's tip (`N - 1`). The first arm always shows the first half of
    /// the buffer; the second arm either continues the ring or mirrors the first.
    ///
    /// # Panics
    ///
    /// Panics if `position >= N`.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "position is checked below N"
    )]
    pub const fn source_index<const N: usize>(self, position: usize) -> usize {
        assert!(position < N, "physical position out of range");
        if position >= N / 2 && self.is_mirrored() {
            N - 1 - position
        } else {
            position
        }
    }

    /// Buffer index for every physical position, tip to tip.
    ///
    /// ```rust
    /// use galaxy_core::MappingMode;
    ///
    /// const FULL: [usize; 6] = MappingMode::Full.display_order::<6>();
    /// const MIRRORED: [usize; 6] = MappingMode::Mirrored.display_order::<6>();
    ///
    /// assert_eq!(FULL, [0, 1, 2, 3, 4, 5]);
    /// assert_eq!(MIRRORED, [0, 1, 2, 2, 1, 0]);
    /// ```
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "the loop stays below N"
    )]
    pub const fn display_order<const N: usize>(self) -> [usize; N] {
        let mut order = [0; N];
        let mut position = 0;
        while position < N {
            order[position] = self.source_index::<N>(position);
            position += 1;
        }
        order
    }
}
