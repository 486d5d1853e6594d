//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys};
use crate::provider::{KeyIndex, KeyProvider};
use crate::round::{
    add_key_sub_shift, add_round_key, inv_mix_columns, inv_shift_sub_add_key, mix_columns,
};
use crate::sbox::sbox;

/// Round constants indexed by round number; entry 0 is never used.
const RCON: [u8; 11] = [0x8d, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

const ROUNDS: usize = 10;

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = key.0;

    for round in 1..=ROUNDS {
        let prev = round_keys[round - 1];
        let next = &mut round_keys[round];

        // RotWord then SubWord on the previous round's last word.
        let last = [prev[12], prev[13], prev[14], prev[15]];
        let rotated = [last[1], last[2], last[3], last[0]];
        for i in 0..4 {
            next[i] = sbox(rotated[i]) ^ prev[i];
        }
        next[0] ^= RCON[round];

        for i in 4..16 {
            next[i] = prev[i] ^ next[i - 4];
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a block in place with pre-expanded round keys.
pub fn encrypt_in_place(state: &mut Block, round_keys: &RoundKeys) {
    for round in 0..ROUNDS - 1 {
        add_key_sub_shift(state, round_keys.get(round));
        mix_columns(state);
    }
    add_key_sub_shift(state, round_keys.get(ROUNDS - 1));
    add_round_key(state, round_keys.get(ROUNDS));
}

/// Decrypts a block in place with pre-expanded round keys.
pub fn decrypt_in_place(state: &mut Block, round_keys: &RoundKeys) {
    add_round_key(state, round_keys.get(ROUNDS));
    inv_shift_sub_add_key(state, round_keys.get(ROUNDS - 1));
    for round in (0..ROUNDS - 1).rev() {
        inv_mix_columns(state);
        inv_shift_sub_add_key(state, round_keys.get(round));
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    encrypt_in_place(&mut state, round_keys);
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    decrypt_in_place(&mut state, round_keys);
    state
}

/// AES-128 bound to a key provider.
///
/// The schedule is derived from the selected key on every call and lives on
/// the caller's stack, so a shared `BlockCipher` can be used from several
/// threads without coordination.
#[derive(Clone, Debug)]
pub struct BlockCipher<P: KeyProvider> {
    keys: P,
}

impl<P: KeyProvider> BlockCipher<P> {
    /// Creates a cipher drawing keys from `keys`.
    pub fn new(keys: P) -> Self {
        Self { keys }
    }

    /// Returns the key provider.
    pub fn keys(&self) -> &P {
        &self.keys
    }

    /// Expands the key selected by `index`. Unknown indices use the default key.
    pub fn expand_key(&self, index: KeyIndex) -> RoundKeys {
        expand_key(&self.keys.resolve(index))
    }

    /// Encrypts `block` in place under the key selected by `index`.
    pub fn encrypt(&self, block: &mut Block, index: KeyIndex) {
        let round_keys = self.expand_key(index);
        encrypt_in_place(block, &round_keys);
    }

    /// Decrypts `block` in place under the key selected by `index`.
    pub fn decrypt(&self, block: &mut Block, index: KeyIndex) {
        let round_keys = self.expand_key(index);
        decrypt_in_place(block, &round_keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use crate::provider::KeyTable;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn hex16(s: &str) -> [u8; 16] {
        let bytes = hex::decode(s).expect("valid hex");
        bytes.try_into().expect("16 bytes")
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn appendix_b_schedule_and_ciphertext() {
        let key = Aes128Key::from(hex16("2b7e151628aed2a6abf7158809cf4f3c"));
        let round_keys = expand_key(&key);
        assert_eq!(*round_keys.get(1), hex16("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(*round_keys.get(10), hex16("d014f9a8c9ee2589e13f0cc8b6630ca6"));

        let ct = encrypt_block(&hex16("3243f6a8885a308d313198a2e0370734"), &round_keys);
        assert_eq!(ct, hex16("3925841d02dc09fbdc118597196a0b32"));
    }

    #[test]
    fn all_zero_key_and_block() {
        let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
        let ct = encrypt_block(&[0u8; 16], &round_keys);
        assert_eq!(ct, hex16("66e94bd4ef8a2c3b884cfa59ca342b2e"));
    }

    #[test]
    fn expand_key_is_deterministic() {
        let cipher = BlockCipher::new(Aes128Key::from(NIST_KEY));
        let first = cipher.expand_key(KeyIndex::DEFAULT).to_bytes();
        let second = cipher.expand_key(KeyIndex::DEFAULT).to_bytes();
        assert_eq!(first, second);
        assert_eq!(&first[..16], &NIST_KEY);
    }

    #[test]
    fn cipher_matches_nist_vector_in_place() {
        let cipher = BlockCipher::new(Aes128Key::from(NIST_KEY));
        let mut block = NIST_PLAIN;
        cipher.encrypt(&mut block, KeyIndex::DEFAULT);
        assert_eq!(block, NIST_CIPHER);
        cipher.decrypt(&mut block, KeyIndex::DEFAULT);
        assert_eq!(block, NIST_PLAIN);
    }

    #[test]
    fn unknown_index_encrypts_under_default_key() {
        let keys = KeyTable::with_slots(Aes128Key::from(NIST_KEY), vec![Aes128Key::from([7; 16])]);
        let cipher = BlockCipher::new(&keys);

        let mut fallback = NIST_PLAIN;
        cipher.encrypt(&mut fallback, KeyIndex(42));
        assert_eq!(fallback, NIST_CIPHER);

        let mut selected = NIST_PLAIN;
        cipher.encrypt(&mut selected, KeyIndex(1));
        assert_ne!(selected, NIST_CIPHER);
        cipher.decrypt(&mut selected, KeyIndex(1));
        assert_eq!(selected, NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }

    #[test]
    fn round_trip_every_slot_of_a_table() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let mut keys = KeyTable::new(Aes128Key::from(rng.gen::<[u8; 16]>()));
        for _ in 0..4 {
            keys.push(Aes128Key::from(rng.gen::<[u8; 16]>()));
        }
        let cipher = BlockCipher::new(keys);
        for index in 0..=5u8 {
            let plain: Block = rng.gen();
            let mut block = plain;
            cipher.encrypt(&mut block, KeyIndex(index));
            assert_ne!(block, plain);
            cipher.decrypt(&mut block, KeyIndex(index));
            assert_eq!(block, plain);
        }
    }
}
