//! Iota round constants generated by the Keccak LFSR.
//!
//! The constants are not tabulated. Each one is assembled from seven output
//! bits of an 8-bit LFSR with feedback polynomial `x^8 + x^6 + x^5 + x^4 + 1`,
//! placed at bit positions `2^j - 1` for `j` in `0..7`.

use crate::permutation::ROUNDS;

const LFSR_SEED: u8 = 0x01;
const LFSR_FEEDBACK: u8 = 0x71;

/// Iterator over the 24 round constants of Keccak-f[1600].
#[derive(Clone, Debug)]
pub struct RoundConstants {
    lfsr: u8,
    remaining: usize,
}

impl RoundConstants {
    /// Starts the LFSR from its fixed seed.
    pub const fn new() -> Self {
        Self {
            lfsr: LFSR_SEED,
            remaining: ROUNDS,
        }
    }

    /// Emits the low bit and advances the register one step.
    #[inline]
    fn step(&mut self) -> bool {
        let out = self.lfsr & 0x01 != 0;
        self.lfsr = if self.lfsr & 0x80 != 0 {
            (self.lfsr << 1) ^ LFSR_FEEDBACK
        } else {
            self.lfsr << 1
        };
        out
    }
}

impl Default for RoundConstants {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RoundConstants {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let mut constant = 0u64;
        for j in 0..7 {
            if self.step() {
                constant |= 1u64 << ((1u32 << j) - 1);
            }
        }
        Some(constant)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RoundConstants {}
