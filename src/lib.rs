//! Pixel buffer, array transforms, and serial frame encoder for a two-armed RGB LED "galaxy".
//!
//! The galaxy is 42 RGB pixels split into two arms of 21. A single 9-bit serial bus
//! addresses nine downstream driver chips; see [`wire`] for the frame layout and
//! [`transform`] for the shift / fade / fill primitives patterns are built from.
//!
//! # Example
//!
//! ```rust
//! use galaxy_core::{
//!     MappingMode, PixelBuffer,
//!     pixel::colors,
//!     transform::ShiftDirection,
//!     wire::{RecordingBus, Transmitter, FRAME_BYTES},
//! };
//!
//! let mut galaxy = PixelBuffer::<42>::new();
//! galaxy.color_all(colors::BLACK);
//! galaxy[0] = colors::RED;
//! galaxy.shift(ShiftDirection::Positive, MappingMode::Mirrored);
//! assert_eq!(galaxy[1], colors::RED);
//!
//! let mut transmitter = Transmitter::new(RecordingBus::<FRAME_BYTES>::new());
//! transmitter.transmit_frame(&galaxy, MappingMode::Mirrored);
//! assert_eq!(transmitter.bus().words().len(), FRAME_BYTES);
//! ```
//!
//! # Glossary
//!
//! - **Arm:** one contiguous half of the pixel buffer, mapped to one physical branch of the galaxy.
//! - **Mirrored mode:** both arms are driven with identical, symmetric pixel values.
//! - **Full mode:** the whole buffer is one continuous ring spanning both arms.
//! - **Frame:** one complete transmission of the entire pixel buffer to all downstream chips.
//! - **Address word / data word:** a 9-bit bus word whose top bit says whether it selects a
//!   chip (address) or carries pixel intensity (data).
#![cfg_attr(not(test), no_std)]

pub mod buffer;
pub mod config;
pub mod driver;
mod error;
pub mod mapping;
pub mod palette;
pub mod pixel;
pub mod transform;
pub mod wire;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

pub use crate::buffer::{ARM_COUNT, PIXEL_COUNT, PIXELS_PER_ARM, PixelBuffer};
pub use crate::mapping::MappingMode;
pub use crate::pixel::{Channel, Pixel, PixelChannels};

/// The galaxy as wired: 42 pixels, 21 per arm.
pub type Galaxy = PixelBuffer<PIXEL_COUNT>;
