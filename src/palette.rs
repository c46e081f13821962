//! Fixed color palettes and random color selection.
//!
//! See [`random_color`] for the draw rules and [`ColorMode`] for the available sets.

use heapless::Vec;

use crate::pixel::{Pixel, colors, grey};
use crate::{Error, Result};

/// The twelve-hue color wheel, red first, in 30° steps.
///
/// Primary hues sit at every fourth entry, secondary hues at every second.
pub const HUES: [Pixel; 12] = [
    colors::RED,
    colors::ORANGE,
    colors::YELLOW,
    colors::CHARTREUSE,
    colors::GREEN,
    colors::AQUA,
    colors::CYAN,
    colors::AZURE,
    colors::BLUE,
    colors::VIOLET,
    colors::MAGENTA,
    colors::ROSE,
];

/// The monochrome ramp, black to white.
pub const GREYS: [Pixel; 5] = [
    colors::BLACK,
    colors::DARK_GREY,
    colors::GREY,
    colors::LT_GREY,
    colors::WHITE,
];

/// Largest named candidate set (twelve hues plus white).
pub const MAX_CANDIDATES: usize = HUES.len() + 1;

// ============================================================================
// RandomSource - Ambient randomness
// ============================================================================

/// A source of uniformly distributed 32-bit values.
///
/// Implement this for a hardware RNG on target. [`Lcg`] is a seeded software generator
/// for hosts and for reproducible pattern runs.
pub trait RandomSource {
    /// Next random value.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw from `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "bound is checked non-zero; only the residue of the draw is kept"
    )]
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "random bound must be positive");
        self.next_u32() as usize % bound
    }

    /// Uniform random byte.
    fn next_u8(&mut self) -> u8 {
        self.next_u32().to_be_bytes()[0]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Linear congruential generator with the classic C `rand()` constants.
///
/// Each call to [`next_u32`](RandomSource::next_u32) advances the state twice and
/// keeps the high half of each step; the low bits of an LCG are poor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;

    /// Create a generator from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance once and return the high half of the new state.
    const fn step(&mut self) -> [u8; 2] {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let [top, upper, _, _] = self.state.to_be_bytes();
        [top, upper]
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        let [high_top, high_upper] = self.step();
        let [low_top, low_upper] = self.step();
        u32::from_be_bytes([high_top, high_upper, low_top, low_upper])
    }
}

// ============================================================================
// ColorMode - Which palette to draw from
// ============================================================================

/// Color set for [`random_color`].
///
/// The `*White` and [`GreyBlack`](Self::GreyBlack) variants add one extra color to
/// their base set; every member, extra included, is equally likely.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// Red, green, or blue.
    Primary,
    /// [`Primary`](Self::Primary) or white.
    PrimaryWhite,
    /// Red, yellow, green, cyan, blue, or magenta.
    Secondary,
    /// [`Secondary`](Self::Secondary) or white.
    SecondaryWhite,
    /// Any of the twelve [`HUES`].
    Tertiary,
    /// [`Tertiary`](Self::Tertiary) or white.
    TertiaryWhite,
    /// Dark grey, grey, light grey, or white.
    Grey,
    /// [`Grey`](Self::Grey) or black.
    GreyBlack,
    /// Any of the 256 pure greys.
    AnyGrey,
    /// Any RGB value, each channel drawn independently.
    Any,
}

impl ColorMode {
    /// Number of color modes.
    pub const COUNT: usize = 10;

    /// All color modes in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Primary,
        Self::PrimaryWhite,
        Self::Secondary,
        Self::SecondaryWhite,
        Self::Tertiary,
        Self::TertiaryWhite,
        Self::Grey,
        Self::GreyBlack,
        Self::AnyGrey,
        Self::Any,
    ];

    /// Draw a mode uniformly at random.
    #[allow(clippy::indexing_slicing, reason = "`below` stays under its bound")]
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.below(Self::COUNT)]
    }

    const fn draw(self) -> Draw {
        match self {
            Self::Primary => Draw::Hues {
                stride: 4,
                with_white: false,
            },
            Self::PrimaryWhite => Draw::Hues {
                stride: 4,
                with_white: true,
            },
            Self::Secondary => Draw::Hues {
                stride: 2,
                with_white: false,
            },
            Self::SecondaryWhite => Draw::Hues {
                stride: 2,
                with_white: true,
            },
            Self::Tertiary => Draw::Hues {
                stride: 1,
                with_white: false,
            },
            Self::TertiaryWhite => Draw::Hues {
                stride: 1,
                with_white: true,
            },
            Self::Grey => Draw::Greys { with_black: false },
            Self::GreyBlack => Draw::Greys { with_black: true },
            Self::AnyGrey => Draw::AnyGrey,
            Self::Any => Draw::Any,
        }
    }

    /// The named colors this mode draws from, or `None` for
    /// [`AnyGrey`](Self::AnyGrey) and [`Any`](Self::Any).
    ///
    /// ```rust
    /// use galaxy_core::palette::ColorMode;
    /// use galaxy_core::pixel::colors;
    ///
    /// let set = ColorMode::PrimaryWhite.candidates().unwrap();
    /// assert_eq!(set.as_slice(), &[colors::RED, colors::GREEN, colors::BLUE, colors::WHITE]);
    /// assert!(ColorMode::Any.candidates().is_none());
    /// ```
    #[must_use]
    pub fn candidates(self) -> Option<Vec<Pixel, MAX_CANDIDATES>> {
        let mut set = Vec::new();
        match self.draw() {
            Draw::Hues { stride, with_white } => {
                set.extend(HUES.iter().step_by(stride).copied());
                if with_white {
                    set.extend(core::iter::once(colors::WHITE));
                }
            }
            Draw::Greys { with_black } => {
                set.extend(GREYS.iter().skip(usize::from(!with_black)).copied());
            }
            Draw::AnyGrey | Draw::Any => return None,
        }
        Some(set)
    }
}

/// How a [`ColorMode`] picks its colors.
#[derive(Clone, Copy)]
enum Draw {
    /// Every `stride`-th entry of [`HUES`], plus white when `with_white`.
    Hues { stride: usize, with_white: bool },
    /// [`GREYS`] from dark grey up, or from black up when `with_black`.
    Greys { with_black: bool },
    AnyGrey,
    Any,
}

impl TryFrom<usize> for ColorMode {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::ColorModeOutOfRange(index))
    }
}

/// Draw one color from the set selected by `mode`.
///
/// Pure apart from advancing `rng`; the buffer is never touched.
///
/// ```rust
/// use galaxy_core::palette::{ColorMode, Lcg, random_color};
///
/// let mut rng = Lcg::new(25);
/// let color = random_color(ColorMode::Secondary, &mut rng);
/// assert!(ColorMode::Secondary.candidates().unwrap().contains(&color));
///
/// let shade = random_color(ColorMode::AnyGrey, &mut rng);
/// assert!(shade.r == shade.g && shade.g == shade.b);
/// ```
#[allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "strides are non-zero and every draw stays below the set it indexes"
)]
pub fn random_color(mode: ColorMode, rng: &mut impl RandomSource) -> Pixel {
    match mode.draw() {
        Draw::Hues { stride, with_white } => {
            let hue_count = HUES.len() / stride;
            let draw = rng.below(hue_count + usize::from(with_white));
            // The draw one past the last hue is the extra white.
            HUES.get(draw * stride).copied().unwrap_or(colors::WHITE)
        }
        Draw::Greys { with_black } => {
            let first = usize::from(!with_black);
            GREYS[first + rng.below(GREYS.len() - first)]
        }
        Draw::AnyGrey => grey(rng.next_u8()),
        Draw::Any => Pixel::new(rng.next_u8(), rng.next_u8(), rng.next_u8()),
    }
}
