//! The six FIPS-202 functions.

use crate::sponge::{sponge, SpongeParams};

/// Domain suffix for the SHA3 hash functions (`01` plus the first pad bit).
pub const SHA3_SUFFIX: u8 = 0x06;
/// Domain suffix for the SHAKE XOFs (`1111` plus the first pad bit).
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// SHAKE128 parameters.
pub const SHAKE128: SpongeParams = SpongeParams::checked(1344, 256, SHAKE_SUFFIX);
/// SHAKE256 parameters.
pub const SHAKE256: SpongeParams = SpongeParams::checked(1088, 512, SHAKE_SUFFIX);
/// SHA3-224 parameters.
pub const SHA3_224: SpongeParams = SpongeParams::checked(1152, 448, SHA3_SUFFIX);
/// SHA3-256 parameters.
pub const SHA3_256: SpongeParams = SpongeParams::checked(1088, 512, SHA3_SUFFIX);
/// SHA3-384 parameters.
pub const SHA3_384: SpongeParams = SpongeParams::checked(832, 768, SHA3_SUFFIX);
/// SHA3-512 parameters.
pub const SHA3_512: SpongeParams = SpongeParams::checked(576, 1024, SHA3_SUFFIX);

/// SHAKE128 with an output length chosen by the size of `output`.
pub fn shake128(input: &[u8], output: &mut [u8]) {
    sponge(&SHAKE128, input, output);
}

/// SHAKE256 with an output length chosen by the size of `output`.
pub fn shake256(input: &[u8], output: &mut [u8]) {
    sponge(&SHAKE256, input, output);
}

/// SHA3-224 digest.
pub fn sha3_224(input: &[u8]) -> [u8; 28] {
    let mut digest = [0u8; 28];
    sponge(&SHA3_224, input, &mut digest);
    digest
}

/// SHA3-256 digest.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut digest = [0u8; 32];
    sponge(&SHA3_256, input, &mut digest);
    digest
}

/// SHA3-384 digest.
pub fn sha3_384(input: &[u8]) -> [u8; 48] {
    let mut digest = [0u8; 48];
    sponge(&SHA3_384, input, &mut digest);
    digest
}

/// SHA3-512 digest.
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut digest = [0u8; 64];
    sponge(&SHA3_512, input, &mut digest);
    digest
}
