//! Compact AES-128 block cipher.
//!
//! This crate follows FIPS-197 and provides:
//! - Key schedule for AES-128, recomputed per call into an owned value.
//! - Single-block encryption and decryption with fused round transforms.
//! - Key selection by small integer index through a [`KeyProvider`].
//!
//! The implementation favours small code and table size over constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
mod cipher;
mod key;
mod provider;
pub mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{
    decrypt_block, decrypt_in_place, encrypt_block, encrypt_in_place, expand_key, BlockCipher,
};
pub use crate::key::{Aes128Key, RoundKeys, SCHEDULE_BYTES};
pub use crate::provider::{KeyIndex, KeyProvider, KeyTable};
pub use crate::sbox::{inv_sbox, sbox};
