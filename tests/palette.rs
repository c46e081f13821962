#![allow(missing_docs)]
//! Host-level tests for palettes and random color draws.

use std::collections::HashMap;

use galaxy_core::palette::{ColorMode, GREYS, HUES, Lcg, RandomSource, random_color};
use galaxy_core::pixel::colors;
use galaxy_core::{Error, Pixel};
use proptest::prelude::*;

const DRAWS: usize = 12_000;

fn histogram(mode: ColorMode, seed: u32) -> HashMap<Pixel, usize> {
    let mut rng = Lcg::new(seed);
    let mut counts = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(random_color(mode, &mut rng)).or_insert(0) += 1;
    }
    counts
}

#[test]
fn named_sets_have_expected_members() {
    let set = |mode: ColorMode| mode.candidates().unwrap().to_vec();

    assert_eq!(set(ColorMode::Primary), [colors::RED, colors::GREEN, colors::BLUE]);
    assert_eq!(
        set(ColorMode::Secondary),
        [
            colors::RED,
            colors::YELLOW,
            colors::GREEN,
            colors::CYAN,
            colors::BLUE,
            colors::MAGENTA
        ]
    );
    assert_eq!(set(ColorMode::Tertiary), HUES);
    assert_eq!(set(ColorMode::TertiaryWhite).len(), 13);
    assert_eq!(set(ColorMode::SecondaryWhite).last(), Some(&colors::WHITE));
    assert_eq!(set(ColorMode::Grey), GREYS[1..]);
    assert_eq!(set(ColorMode::GreyBlack), GREYS);
    assert!(ColorMode::AnyGrey.candidates().is_none());
}

#[test]
fn named_modes_draw_every_member_roughly_uniformly() {
    for mode in ColorMode::ALL {
        let Some(candidates) = mode.candidates() else {
            continue;
        };
        let counts = histogram(mode, 25);
        assert_eq!(counts.len(), candidates.len(), "{mode:?} hit every member");

        let expected = DRAWS / candidates.len();
        for color in &candidates {
            let count = counts[color];
            assert!(
                count > expected * 3 / 4 && count < expected * 5 / 4,
                "{mode:?} drew {color:?} {count} times, expected about {expected}"
            );
        }
    }
}

#[test]
fn any_grey_draws_equal_channels_across_the_range() {
    let counts = histogram(ColorMode::AnyGrey, 99);
    assert!(counts.keys().all(|pixel| pixel.r == pixel.g && pixel.g == pixel.b));
    assert!(counts.len() > 200, "only {} distinct greys", counts.len());
}

#[test]
fn any_draws_channels_independently() {
    let counts = histogram(ColorMode::Any, 7);
    let unequal = counts
        .keys()
        .filter(|pixel| pixel.r != pixel.g || pixel.g != pixel.b)
        .count();
    assert!(unequal > counts.len() * 9 / 10);
}

#[test]
fn lcg_is_reproducible_from_its_seed() {
    let mut first = Lcg::new(25);
    let mut second = Lcg::new(25);
    let mut other = Lcg::new(26);
    let a: Vec<u32> = (0..8).map(|_| first.next_u32()).collect();
    let b: Vec<u32> = (0..8).map(|_| second.next_u32()).collect();
    let c: Vec<u32> = (0..8).map(|_| other.next_u32()).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn random_mode_covers_every_mode() {
    let mut rng = Lcg::new(1);
    let mut seen = [false; ColorMode::COUNT];
    for _ in 0..1_000 {
        let mode = ColorMode::random(&mut rng);
        let index = ColorMode::ALL.iter().position(|each| *each == mode).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn color_mode_from_index() {
    assert_eq!(ColorMode::try_from(0), Ok(ColorMode::Primary));
    assert_eq!(ColorMode::try_from(9), Ok(ColorMode::Any));
    assert_eq!(ColorMode::try_from(10), Err(Error::ColorModeOutOfRange(10)));
}

/// Replays a fixed list of values, for pinning individual draws.
struct Replay<'a>(core::slice::Iter<'a, u32>);

impl RandomSource for Replay<'_> {
    fn next_u32(&mut self) -> u32 {
        self.0.next().copied().unwrap_or(0)
    }
}

#[test]
fn extra_member_is_the_last_draw() {
    assert_eq!(random_color(ColorMode::PrimaryWhite, &mut Replay([3].iter())), colors::WHITE);
    assert_eq!(random_color(ColorMode::PrimaryWhite, &mut Replay([2].iter())), colors::BLUE);
    assert_eq!(random_color(ColorMode::TertiaryWhite, &mut Replay([12].iter())), colors::WHITE);
    assert_eq!(random_color(ColorMode::GreyBlack, &mut Replay([0].iter())), colors::BLACK);
    assert_eq!(random_color(ColorMode::Grey, &mut Replay([0].iter())), colors::DARK_GREY);
}

#[test]
fn hue_draws_step_through_the_wheel() {
    let draw = |mode, value: u32| random_color(mode, &mut Replay([value].iter()));

    assert_eq!(draw(ColorMode::Primary, 1), colors::GREEN);
    assert_eq!(draw(ColorMode::Secondary, 1), colors::YELLOW);
    assert_eq!(draw(ColorMode::Secondary, 5), colors::MAGENTA);
    assert_eq!(draw(ColorMode::SecondaryWhite, 6), colors::WHITE);
    assert_eq!(draw(ColorMode::Tertiary, 11), colors::ROSE);
    assert_eq!(draw(ColorMode::Grey, 3), colors::WHITE);
    assert_eq!(draw(ColorMode::GreyBlack, 4), colors::WHITE);
}

proptest! {
    /// Every draw from a named mode is a member of that mode's set.
    #[test]
    fn named_draws_stay_in_their_set(seed in any::<u32>(), index in 0_usize..ColorMode::COUNT) {
        let mode = ColorMode::ALL[index];
        let mut rng = Lcg::new(seed);
        let color = random_color(mode, &mut rng);
        match mode.candidates() {
            Some(candidates) => prop_assert!(candidates.contains(&color)),
            None if mode == ColorMode::AnyGrey => {
                prop_assert!(color.r == color.g && color.g == color.b);
            }
            None => {}
        }
    }

    /// `below` never reaches its bound.
    #[test]
    fn below_stays_under_bound(seed in any::<u32>(), bound in 1_usize..1_000) {
        let mut rng = Lcg::new(seed);
        for _ in 0..16 {
            prop_assert!(rng.below(bound) < bound);
        }
    }
}
