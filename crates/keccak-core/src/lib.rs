//! Keccak-f[1600] and the FIPS-202 sponge functions.
//!
//! This crate provides:
//! - The Keccak-f[1600] permutation, with iota constants produced by the
//!   reference LFSR rather than a table.
//! - A one-shot sponge driver with validated parameters.
//! - SHA3-224/256/384/512 and SHAKE128/256.
//!
//! Hashing is one-shot: the whole message is absorbed and the whole output
//! squeezed in a single call. Nothing here is constant-time hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod fips202;
mod permutation;
mod round_constants;
mod sponge;
mod state;
mod variant;

pub use crate::error::{SpongeError, UnknownVariant};
pub use crate::fips202::{
    sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256, SHA3_224, SHA3_256, SHA3_384,
    SHA3_512, SHA3_SUFFIX, SHAKE128, SHAKE256, SHAKE_SUFFIX,
};
pub use crate::permutation::{keccak_f1600, ROUNDS};
pub use crate::round_constants::RoundConstants;
pub use crate::sponge::{keccak, sponge, SpongeParams, WIDTH_BITS};
pub use crate::state::{KeccakState, LANES, STATE_BYTES};
pub use crate::variant::Variant;
