//! Crate-wide error type.

/// A specialized [`Result`](core::result::Result) for galaxy operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building galaxy values from runtime data.
///
/// Topology and index errors on const-sized buffers are not represented here: a
/// bad pixel count is rejected at compile time and an out-of-range index panics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A pixel slice did not match the buffer length.
    #[display("expected {expected} pixels, got {actual}")]
    LengthMismatch {
        /// Length of the destination buffer.
        expected: usize,
        /// Length of the slice supplied.
        actual: usize,
    },
    /// Channel index outside `0..3`.
    #[display("channel index {_0} out of range")]
    ChannelIndexOutOfRange(#[error(not(source))] usize),
    /// Color mode index outside the known modes.
    #[display("color mode index {_0} out of range")]
    ColorModeOutOfRange(#[error(not(source))] usize),
    /// A pattern driver needs at least one pattern to run.
    #[display("pattern list is empty")]
    EmptyPatternList,
    /// More patterns than the driver has room for.
    #[display("more than {_0} patterns")]
    TooManyPatterns(#[error(not(source))] usize),
    /// Bus baud rate must be positive.
    #[display("baud rate must be non-zero")]
    BaudRateZero,
}
