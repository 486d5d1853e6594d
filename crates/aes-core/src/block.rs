//! Block representation helpers.
//!
//! The state is a 4×4 byte matrix stored column-major, so byte `(row, col)`
//! lives at `col * 4 + row`.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Flat index of the byte at `(row, col)` in a column-major block.
#[inline]
pub const fn at(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
