//! The 1600-bit Keccak state.

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// State size in bytes.
pub const STATE_BYTES: usize = LANES * 8;

/// Keccak-f[1600] state as a 5×5 array of lanes.
///
/// Lane `(x, y)` is stored at `x + 5 * y`. The byte view used by the sponge
/// reads each lane little-endian, so byte `i` is byte `i % 8` of lane `i / 8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeccakState {
    lanes: [u64; LANES],
}

impl KeccakState {
    /// Returns the all-zero state.
    pub const fn new() -> Self {
        Self { lanes: [0; LANES] }
    }

    /// Wraps raw lanes in `x + 5 * y` order.
    pub const fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self { lanes }
    }

    /// Returns the raw lanes in `x + 5 * y` order.
    pub const fn lanes(&self) -> &[u64; LANES] {
        &self.lanes
    }

    /// Reads lane `(x, y)`.
    #[inline(always)]
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.lanes[index(x, y)]
    }

    /// Mutably borrows lane `(x, y)`.
    #[inline(always)]
    pub fn lane_mut(&mut self, x: usize, y: usize) -> &mut u64 {
        &mut self.lanes[index(x, y)]
    }

    /// XORs one byte into the byte view at `offset`.
    #[inline]
    pub fn xor_byte(&mut self, offset: usize, byte: u8) {
        self.lanes[offset / 8] ^= u64::from(byte) << (8 * (offset % 8));
    }

    /// XORs `data` into the byte view starting at `offset`.
    pub fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.xor_byte(offset + i, byte);
        }
    }

    /// Copies `out.len()` bytes of the byte view starting at `offset`.
    pub fn read_bytes(&self, offset: usize, out: &mut [u8]) {
        for (i, dst) in out.iter_mut().enumerate() {
            let pos = offset + i;
            *dst = (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }
}

#[inline(always)]
const fn index(x: usize, y: usize) -> usize {
    x + 5 * y
}
