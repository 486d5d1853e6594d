//! Run-time selection among the six FIPS-202 functions.

use core::fmt;
use core::str::FromStr;

use crate::error::UnknownVariant;
use crate::fips202::{SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHAKE128, SHAKE256};
use crate::sponge::{sponge, SpongeParams};

/// One of the fixed-parameter FIPS-202 functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// SHAKE128 extendable-output function.
    Shake128,
    /// SHAKE256 extendable-output function.
    Shake256,
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
}

impl Variant {
    /// All variants, XOFs first.
    pub const ALL: [Variant; 6] = [
        Variant::Shake128,
        Variant::Shake256,
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
    ];

    /// Sponge parameters of this variant.
    pub const fn params(self) -> SpongeParams {
        match self {
            Variant::Shake128 => SHAKE128,
            Variant::Shake256 => SHAKE256,
            Variant::Sha3_224 => SHA3_224,
            Variant::Sha3_256 => SHA3_256,
            Variant::Sha3_384 => SHA3_384,
            Variant::Sha3_512 => SHA3_512,
        }
    }

    /// Digest length for the SHA3 functions; `None` for the XOFs.
    pub const fn fixed_output_len(self) -> Option<usize> {
        match self {
            Variant::Shake128 | Variant::Shake256 => None,
            Variant::Sha3_224 => Some(28),
            Variant::Sha3_256 => Some(32),
            Variant::Sha3_384 => Some(48),
            Variant::Sha3_512 => Some(64),
        }
    }

    /// Returns `true` for SHAKE128 and SHAKE256.
    pub const fn is_xof(self) -> bool {
        self.fixed_output_len().is_none()
    }

    /// Output length actually produced when `requested` bytes are asked for.
    pub const fn output_len(self, requested: usize) -> usize {
        match self.fixed_output_len() {
            Some(len) => len,
            None => requested,
        }
    }

    /// Canonical lower-case name, e.g. `sha3-256`.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Shake128 => "shake128",
            Variant::Shake256 => "shake256",
            Variant::Sha3_224 => "sha3-224",
            Variant::Sha3_256 => "sha3-256",
            Variant::Sha3_384 => "sha3-384",
            Variant::Sha3_512 => "sha3-512",
        }
    }

    /// Hashes `input`. `requested` is the output length for the XOFs and is
    /// ignored for the fixed-length functions.
    pub fn hash(self, input: &[u8], requested: usize) -> Vec<u8> {
        let mut output = vec![0u8; self.output_len(requested)];
        sponge(&self.params(), input, &mut output);
        output
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "shake128" => Ok(Variant::Shake128),
            "shake256" => Ok(Variant::Shake256),
            "sha3224" => Ok(Variant::Sha3_224),
            "sha3256" => Ok(Variant::Sha3_256),
            "sha3384" => Ok(Variant::Sha3_384),
            "sha3512" => Ok(Variant::Sha3_512),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}
