#![allow(missing_docs)]
//! Host-level tests for pixel rotation in both mapping modes.

use galaxy_core::{
    Galaxy, MappingMode, Pixel, PixelBuffer,
    transform::ShiftDirection::{self, Negative, Positive},
};
use proptest::prelude::*;

fn numbered<const N: usize>() -> PixelBuffer<N> {
    PixelBuffer::from(core::array::from_fn(|index| {
        Pixel::new(index as u8, 255 - index as u8, 7)
    }))
}

fn reds<const N: usize>(buffer: &PixelBuffer<N>) -> Vec<u8> {
    buffer.iter().map(|pixel| pixel.r).collect()
}

fn sorted(pixels: &[Pixel]) -> Vec<Pixel> {
    let mut pixels = pixels.to_vec();
    pixels.sort();
    pixels
}

#[test]
fn full_positive_moves_values_up_and_wraps_last_to_first() {
    let mut buffer = numbered::<8>();
    buffer.shift(Positive, MappingMode::Full);
    assert_eq!(reds(&buffer), [7, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn full_negative_moves_values_down_and_wraps_first_to_last() {
    let mut buffer = numbered::<8>();
    buffer.shift(Negative, MappingMode::Full);
    assert_eq!(reds(&buffer), [1, 2, 3, 4, 5, 6, 7, 0]);
}

#[test]
fn mirrored_positive_moves_inward_and_wraps_center_to_tips() {
    let mut buffer = numbered::<8>();
    buffer.shift(Positive, MappingMode::Mirrored);
    // Arm A (0..4) toward index 3, arm B (4..8) toward index 4.
    assert_eq!(reds(&buffer), [3, 0, 1, 2, 5, 6, 7, 4]);
}

#[test]
fn mirrored_negative_moves_outward_and_wraps_tips_to_center() {
    let mut buffer = numbered::<8>();
    buffer.shift(Negative, MappingMode::Mirrored);
    assert_eq!(reds(&buffer), [1, 2, 3, 0, 7, 4, 5, 6]);
}

#[test]
fn mirrored_negative_moves_the_inner_boundary_pixel() {
    let mut galaxy = Galaxy::new();
    galaxy[Galaxy::CENTER_B] = Pixel::new(1, 1, 1);
    galaxy[Galaxy::TIP_B] = Pixel::new(2, 2, 2);
    galaxy.shift(Negative, MappingMode::Mirrored);
    assert_eq!(galaxy[Galaxy::CENTER_B + 1], Pixel::new(1, 1, 1));
    assert_eq!(galaxy[Galaxy::CENTER_B], Pixel::new(2, 2, 2));
}

#[test]
fn mirrored_arms_rotate_independently() {
    let mut buffer = numbered::<42>();
    let before_arm_b: Vec<Pixel> = buffer.arms().1.to_vec();
    for _ in 0..21 {
        buffer.shift(Positive, MappingMode::Mirrored);
    }
    // A full arm-length of shifts brings each arm back on its own.
    assert_eq!(buffer, numbered::<42>());
    assert_eq!(buffer.arms().1, before_arm_b.as_slice());
}

#[test]
fn full_cycle_rotation_restores_the_galaxy() {
    for direction in [Positive, Negative] {
        let mut galaxy: Galaxy = numbered();
        for step in 1..=42 {
            galaxy.shift(direction, MappingMode::Full);
            if step < 42 {
                assert_ne!(galaxy, numbered::<42>(), "restored early at step {step}");
            }
        }
        assert_eq!(galaxy, numbered::<42>());
    }
}

#[test]
fn reversed_direction_undoes_a_shift() {
    assert_eq!(Positive.reversed(), Negative);
    assert_eq!(Negative.reversed(), Positive);
}

fn any_pixel() -> impl Strategy<Value = Pixel> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Pixel::new(r, g, b))
}

fn any_galaxy() -> impl Strategy<Value = Galaxy> {
    proptest::collection::vec(any_pixel(), 42)
        .prop_map(|pixels| Galaxy::from_slice(&pixels).expect("strategy yields 42 pixels"))
}

fn any_mode() -> impl Strategy<Value = MappingMode> {
    prop_oneof![Just(MappingMode::Mirrored), Just(MappingMode::Full)]
}

fn any_direction() -> impl Strategy<Value = ShiftDirection> {
    prop_oneof![Just(Positive), Just(Negative)]
}

proptest! {
    /// Shifting never creates, duplicates, or loses a pixel value.
    #[test]
    fn shift_preserves_the_multiset(galaxy in any_galaxy(), mode in any_mode(), direction in any_direction()) {
        let mut shifted = galaxy;
        shifted.shift(direction, mode);
        prop_assert_eq!(sorted(shifted.as_slice()), sorted(galaxy.as_slice()));
    }

    /// In mirrored mode each arm keeps its own values.
    #[test]
    fn mirrored_shift_preserves_each_arm(galaxy in any_galaxy(), direction in any_direction()) {
        let mut shifted = galaxy;
        shifted.shift(direction, MappingMode::Mirrored);
        prop_assert_eq!(sorted(shifted.arms().0), sorted(galaxy.arms().0));
        prop_assert_eq!(sorted(shifted.arms().1), sorted(galaxy.arms().1));
    }

    /// A shift followed by the opposite shift is the identity.
    #[test]
    fn opposite_shift_restores(galaxy in any_galaxy(), mode in any_mode(), direction in any_direction()) {
        let mut shifted = galaxy;
        shifted.shift(direction, mode);
        shifted.shift(direction.reversed(), mode);
        prop_assert_eq!(shifted, galaxy);
    }
}
