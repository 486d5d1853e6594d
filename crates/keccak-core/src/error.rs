//! Error types.

use thiserror::Error;

/// Rejected sponge parameters. The output buffer is never touched when one
/// of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpongeError {
    /// `rate + capacity` is not the 1600-bit permutation width.
    #[error("rate ({rate}) + capacity ({capacity}) must equal 1600 bits")]
    InvalidWidth {
        /// Requested rate in bits.
        rate: usize,
        /// Requested capacity in bits.
        capacity: usize,
    },
    /// The rate is not a whole number of bytes.
    #[error("rate ({rate}) must be a multiple of 8 bits")]
    UnalignedRate {
        /// Requested rate in bits.
        rate: usize,
    },
    /// A zero rate leaves no room for input or padding.
    #[error("rate must be non-zero")]
    ZeroRate,
}

/// A variant name that does not match any of the six FIPS-202 functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown hash variant `{0}`")]
pub struct UnknownVariant(pub String);
