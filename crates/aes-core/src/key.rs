//! Key types for AES-128.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Size of an expanded AES-128 key schedule in bytes.
pub const SCHEDULE_BYTES: usize = 176;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_BYTES] {
        let mut out = [0u8; SCHEDULE_BYTES];
        for (chunk, round_key) in out.chunks_exact_mut(16).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_concatenates_rounds_in_order() {
        let keys = RoundKeys(core::array::from_fn(|round| [round as u8; 16]));
        let bytes = keys.to_bytes();
        assert_eq!(&bytes[..16], &[0u8; 16]);
        assert_eq!(&bytes[160..], &[10u8; 16]);
        assert_eq!(bytes[16 * 7 + 3], 7);
    }
}
