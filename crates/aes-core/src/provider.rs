//! Key selection by small integer index.
//!
//! The cipher never owns key material. It asks a [`KeyProvider`] for the key
//! behind a [`KeyIndex`]; indices the provider does not know resolve to the
//! provider's default key. Index 0 always names that default key.

use serde::{Deserialize, Serialize};

use crate::key::Aes128Key;

/// Index selecting a key from a provisioned key set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyIndex(pub u8);

impl KeyIndex {
    /// The distinguished default key.
    pub const DEFAULT: Self = Self(0);

    /// Returns `true` for the default index.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for KeyIndex {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Source of AES-128 keys addressed by [`KeyIndex`].
pub trait KeyProvider {
    /// Returns the key stored under `index`, if any.
    fn key(&self, index: KeyIndex) -> Option<Aes128Key>;

    /// Returns the default key (index 0).
    fn default_key(&self) -> Aes128Key;

    /// Returns the key for `index`, falling back to the default key for
    /// indices the provider does not recognise.
    fn resolve(&self, index: KeyIndex) -> Aes128Key {
        self.key(index).unwrap_or_else(|| self.default_key())
    }
}

impl<P: KeyProvider + ?Sized> KeyProvider for &P {
    fn key(&self, index: KeyIndex) -> Option<Aes128Key> {
        (**self).key(index)
    }

    fn default_key(&self) -> Aes128Key {
        (**self).default_key()
    }
}

/// In-memory key set: index 0 is the default key, index `n >= 1` is
/// `slots[n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTable {
    default: Aes128Key,
    slots: Vec<Aes128Key>,
}

impl KeyTable {
    /// Largest number of extra slots addressable by a `u8` index.
    pub const MAX_SLOTS: usize = u8::MAX as usize;

    /// Creates a table holding only the default key.
    pub fn new(default: Aes128Key) -> Self {
        Self {
            default,
            slots: Vec::new(),
        }
    }

    /// Creates a table from a default key and additional slots. Slots past
    /// [`Self::MAX_SLOTS`] are unreachable and dropped.
    pub fn with_slots(default: Aes128Key, mut slots: Vec<Aes128Key>) -> Self {
        slots.truncate(Self::MAX_SLOTS);
        Self { default, slots }
    }

    /// Appends a key and returns its index, or `None` when the table is full.
    pub fn push(&mut self, key: Aes128Key) -> Option<KeyIndex> {
        if self.slots.len() >= Self::MAX_SLOTS {
            return None;
        }
        self.slots.push(key);
        Some(KeyIndex(self.slots.len() as u8))
    }

    /// Number of addressable keys, the default key included.
    pub fn len(&self) -> usize {
        self.slots.len() + 1
    }

    /// A table always holds its default key.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Serializes the table with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a table with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let mut table: Self = bincode::deserialize(bytes)?;
        table.slots.truncate(Self::MAX_SLOTS);
        Ok(table)
    }
}

impl KeyProvider for KeyTable {
    fn key(&self, index: KeyIndex) -> Option<Aes128Key> {
        match index.0 {
            0 => Some(self.default),
            n => self.slots.get(n as usize - 1).copied(),
        }
    }

    fn default_key(&self) -> Aes128Key {
        self.default
    }
}

impl KeyProvider for Aes128Key {
    fn key(&self, index: KeyIndex) -> Option<Aes128Key> {
        index.is_default().then_some(*self)
    }

    fn default_key(&self) -> Aes128Key {
        *self
    }
}
