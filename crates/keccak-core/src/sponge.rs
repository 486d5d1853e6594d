//! The sponge construction over Keccak-f[1600].
//!
//! One call absorbs the whole message, pads it, and squeezes the whole
//! output. There is no incremental interface.

use crate::error::SpongeError;
use crate::permutation::keccak_f1600;
use crate::state::KeccakState;

/// Width of the Keccak-f[1600] permutation in bits.
pub const WIDTH_BITS: usize = 1600;

/// Final padding bit, placed in the last byte of the rate window.
const PAD_LAST: u8 = 0x80;

/// Validated sponge parameters.
///
/// Construction guarantees `rate + capacity == 1600`, a byte-aligned rate,
/// and a non-zero rate, so every `SpongeParams` value can drive [`sponge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    rate_bits: usize,
    capacity_bits: usize,
    suffix: u8,
}

impl SpongeParams {
    /// Checks the parameters and builds a sponge configuration.
    ///
    /// `suffix` holds the domain-separation bits followed by the first padding
    /// bit, least significant bit first (0x06 for SHA3, 0x1F for SHAKE).
    pub const fn new(
        rate_bits: usize,
        capacity_bits: usize,
        suffix: u8,
    ) -> Result<Self, SpongeError> {
        match rate_bits.checked_add(capacity_bits) {
            Some(WIDTH_BITS) => {}
            _ => {
                return Err(SpongeError::InvalidWidth {
                    rate: rate_bits,
                    capacity: capacity_bits,
                })
            }
        }
        if rate_bits % 8 != 0 {
            return Err(SpongeError::UnalignedRate { rate: rate_bits });
        }
        if rate_bits == 0 {
            return Err(SpongeError::ZeroRate);
        }
        Ok(Self {
            rate_bits,
            capacity_bits,
            suffix,
        })
    }

    /// Like [`SpongeParams::new`] for fixed parameter sets; fails compilation
    /// when evaluated in a `const` item with bad parameters.
    pub(crate) const fn checked(rate_bits: usize, capacity_bits: usize, suffix: u8) -> Self {
        match Self::new(rate_bits, capacity_bits, suffix) {
            Ok(params) => params,
            Err(_) => panic!("invalid sponge parameters"),
        }
    }

    /// Rate in bits.
    pub const fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    /// Capacity in bits.
    pub const fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    /// Rate in bytes: how much input is absorbed, or output squeezed, per
    /// permutation.
    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits / 8
    }

    /// Domain-separation suffix byte.
    pub const fn suffix(&self) -> u8 {
        self.suffix
    }
}

/// Runs the sponge with already validated parameters, filling `output`
/// completely.
pub fn sponge(params: &SpongeParams, input: &[u8], output: &mut [u8]) {
    let rate = params.rate_bytes();
    let mut state = KeccakState::new();

    let mut blocks = input.chunks_exact(rate);
    for block in &mut blocks {
        state.xor_bytes(0, block);
        keccak_f1600(&mut state);
    }
    let tail = blocks.remainder();
    state.xor_bytes(0, tail);

    // The suffix carries the first padding bit. If that bit is the last bit
    // of the window, the closing 0x80 belongs to a fresh block.
    let offset = tail.len();
    state.xor_byte(offset, params.suffix);
    if params.suffix & 0x80 != 0 && offset == rate - 1 {
        keccak_f1600(&mut state);
    }
    state.xor_byte(rate - 1, PAD_LAST);
    keccak_f1600(&mut state);

    let mut chunks = output.chunks_mut(rate).peekable();
    while let Some(chunk) = chunks.next() {
        state.read_bytes(0, chunk);
        if chunks.peek().is_some() {
            keccak_f1600(&mut state);
        }
    }
}

/// Keccak sponge with caller-supplied parameters.
///
/// Fills `output` and returns the number of bytes written. Parameters that
/// violate `rate + capacity == 1600` or byte alignment are rejected before
/// anything is written, so an error is never confused with an empty output.
pub fn keccak(
    rate_bits: usize,
    capacity_bits: usize,
    input: &[u8],
    suffix: u8,
    output: &mut [u8],
) -> Result<usize, SpongeError> {
    let params = SpongeParams::new(rate_bits, capacity_bits, suffix)?;
    sponge(&params, input, output);
    Ok(output.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_abc_through_generic_driver() {
        let mut out = [0u8; 32];
        assert_eq!(keccak(1088, 512, b"abc", 0x06, &mut out), Ok(32));
        assert_eq!(
            hex::encode(out),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn pre_standard_keccak_256_delimiter() {
        let mut out = [0u8; 32];
        keccak(1088, 512, b"", 0x01, &mut out).expect("valid parameters");
        assert_eq!(
            hex::encode(out),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn bad_width_is_reported_and_output_untouched() {
        let mut out = [0xaa_u8; 32];
        let err = keccak(1000, 500, b"abc", 0x06, &mut out).unwrap_err();
        assert_eq!(
            err,
            SpongeError::InvalidWidth {
                rate: 1000,
                capacity: 500
            }
        );
        assert_eq!(out, [0xaa; 32]);
    }

    #[test]
    fn unaligned_rate_is_reported_and_output_untouched() {
        let mut out = [0x55_u8; 16];
        let err = keccak(1084, 516, b"abc", 0x06, &mut out).unwrap_err();
        assert_eq!(err, SpongeError::UnalignedRate { rate: 1084 });
        assert_eq!(out, [0x55; 16]);
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(SpongeParams::new(0, 1600, 0x06), Err(SpongeError::ZeroRate));
    }

    #[test]
    fn overflowing_width_is_rejected() {
        assert!(matches!(
            SpongeParams::new(usize::MAX, 2, 0x06),
            Err(SpongeError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn rejection_differs_from_empty_success() {
        let mut empty: [u8; 0] = [];
        assert_eq!(keccak(1344, 256, b"abc", 0x1f, &mut empty), Ok(0));
        assert!(keccak(1088, 256, b"abc", 0x1f, &mut empty).is_err());
    }

    #[test]
    fn high_suffix_bit_at_window_end_starts_a_new_block() {
        // With the suffix landing on the last byte of the window, the result
        // equals absorbing that byte as data and padding with an empty suffix.
        let params = SpongeParams::new(1088, 512, 0x81).expect("valid");
        let message: Vec<u8> = (0..135u32).map(|i| (i * 7 + 1) as u8).collect();
        let mut boundary = [0u8; 32];
        sponge(&params, &message, &mut boundary);

        let mut extended = message.clone();
        extended.push(0x81);
        let mut expected = [0u8; 32];
        keccak(1088, 512, &extended, 0x00, &mut expected).expect("valid");
        assert_eq!(boundary, expected);
        assert_eq!(
            hex::encode(boundary),
            "0b0ed2e15ea1ddd19016fd06c4332461600c79909c8acbfbbacf6f752a5348ee"
        );
    }

    #[test]
    fn accessors_report_construction_values() {
        let params = SpongeParams::new(576, 1024, 0x06).expect("valid");
        assert_eq!(params.rate_bits(), 576);
        assert_eq!(params.capacity_bits(), 1024);
        assert_eq!(params.rate_bytes(), 72);
        assert_eq!(params.suffix(), 0x06);
    }
}
