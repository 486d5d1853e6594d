//! AES round transformations.
//!
//! SubBytes and ShiftRows are never applied as separate passes: each output
//! byte is read from its row-shifted source position, keyed and substituted
//! in one step. MixColumns is built from `xtime` alone, and its inverse reuses
//! the forward routine after a short pre-conditioning pass.

use crate::block::{at, xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Multiplies `byte` by 2 in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// AddRoundKey, SubBytes and ShiftRows in a single pass.
///
/// Output byte `(r, c)` is `S[state(r, c + r) ^ key(r, c + r)]`.
#[inline]
pub fn add_key_sub_shift(state: &mut Block, round_key: &Block) {
    let src = *state;
    for col in 0..4 {
        for row in 0..4 {
            let from = at(row, (col + row) % 4);
            state[at(row, col)] = sbox(src[from] ^ round_key[from]);
        }
    }
}

/// InvShiftRows, InvSubBytes and AddRoundKey in a single pass.
///
/// Output byte `(r, c)` is `S⁻¹[state(r, c - r)] ^ key(r, c)`.
#[inline]
pub fn inv_shift_sub_add_key(state: &mut Block, round_key: &Block) {
    let src = *state;
    for col in 0..4 {
        for row in 0..4 {
            let to = at(row, col);
            state[to] = inv_sbox(src[at(row, (col + 4 - row) % 4)]) ^ round_key[to];
        }
    }
}

/// MixColumns over all four columns.
///
/// Each byte becomes `a[i] ^ xtime(a[i] ^ a[i+1]) ^ (a[0] ^ a[1] ^ a[2] ^ a[3])`,
/// which expands to the usual `{02, 03, 01, 01}` circulant row.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        column[0] = a0 ^ xtime(a0 ^ a1) ^ all;
        column[1] = a1 ^ xtime(a1 ^ a2) ^ all;
        column[2] = a2 ^ xtime(a2 ^ a3) ^ all;
        column[3] = a3 ^ xtime(a3 ^ a0) ^ all;
    }
}

/// Inverse MixColumns.
///
/// Pre-multiplying each column by `{04}x² + {05}` turns the inverse circulant
/// into the forward one, so only a double doubling across opposite bytes is
/// needed before running [`mix_columns`].
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        for y in 0..2 {
            let t = xtime(xtime(column[y] ^ column[y + 2]));
            column[y] ^= t;
            column[y + 2] ^= t;
        }
    }
    mix_columns(state);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
