//! Keccak-f[1600].

use crate::round_constants::RoundConstants;
use crate::state::KeccakState;

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Applies the full 24-round permutation in place.
pub fn keccak_f1600(state: &mut KeccakState) {
    for constant in RoundConstants::new() {
        theta(state);
        rho_pi(state);
        chi(state);
        iota(state, constant);
    }
}

fn theta(state: &mut KeccakState) {
    let mut parity = [0u64; 5];
    for (x, column) in parity.iter_mut().enumerate() {
        *column = (0..5).fold(0, |acc, y| acc ^ state.lane(x, y));
    }
    for x in 0..5 {
        let effect = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            *state.lane_mut(x, y) ^= effect;
        }
    }
}

/// Walks the 24 non-origin lanes starting at (1, 0), moving each to
/// `(y, 2x + 3y)` and rotating it by the `t`-th triangular number.
fn rho_pi(state: &mut KeccakState) {
    let (mut x, mut y) = (1usize, 0usize);
    let mut current = state.lane(x, y);
    for t in 0..24u32 {
        let rotation = ((t + 1) * (t + 2) / 2) % 64;
        let next_y = (2 * x + 3 * y) % 5;
        x = y;
        y = next_y;
        let displaced = state.lane(x, y);
        *state.lane_mut(x, y) = current.rotate_left(rotation);
        current = displaced;
    }
}

fn chi(state: &mut KeccakState) {
    for y in 0..5 {
        let row: [u64; 5] = core::array::from_fn(|x| state.lane(x, y));
        for x in 0..5 {
            *state.lane_mut(x, y) = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline]
fn iota(state: &mut KeccakState, constant: u64) {
    *state.lane_mut(0, 0) ^= constant;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keccak-f[1600] applied once to the all-zero state.
    const ZERO_PERMUTED: [u64; 25] = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
        0xFF97A42D7F8E6FD4,
        0x90FEE5A0A44647C4,
        0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C,
        0x30935AB7D08FFC64,
        0xEB5AA93F2317D635,
        0xA9A6E6260D712103,
        0x81A57C16DBCF555F,
        0x43B831CD0347C826,
        0x01F22F1A11A5569F,
        0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2,
        0x613670957BC46611,
        0xB87C5A554FD00ECB,
        0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614,
        0x1841F924A2C509E4,
        0x16F53526E70465C2,
        0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    #[test]
    fn zero_state_matches_reference() {
        let mut state = KeccakState::new();
        keccak_f1600(&mut state);
        assert_eq!(state.lanes(), &ZERO_PERMUTED);
    }

    #[test]
    fn second_application_matches_reference() {
        const TWICE_PERMUTED: [u64; 25] = [
            0x2D5C954DF96ECB3C,
            0x6A332CD07057B56D,
            0x093D8D1270D76B6C,
            0x8A20D9B25569D094,
            0x4F9C4F99E5E7F156,
            0xF957B9A2DA65FB38,
            0x85773DAE1275AF0D,
            0xFAF4F247C3D810F7,
            0x1F1B9EE6F79A8759,
            0xE4FECC0FEE98B425,
            0x68CE61B6B9CE68A1,
            0xDEEA66C4BA8F974F,
            0x33C43D836EAFB1F5,
            0xE00654042719DBD9,
            0x7CF8A9F009831265,
            0xFD5449A6BF174743,
            0x97DDAD33D8994B40,
            0x48EAD5FC5D0BE774,
            0xE3B8C8EE55B7B03C,
            0x91A0226E649E42E9,
            0x900E3129E7BADD7B,
            0x202A9EC5FAA3CCE8,
            0x5B3402464E1C3DB6,
            0x609F4E62A44C1059,
            0x20D06CD26A8FBF5C,
        ];
        let mut state = KeccakState::from_lanes(ZERO_PERMUTED);
        keccak_f1600(&mut state);
        assert_eq!(state.lanes(), &TWICE_PERMUTED);
    }

    #[test]
    fn theta_spreads_a_single_bit_to_neighbour_columns() {
        let mut state = KeccakState::new();
        *state.lane_mut(0, 0) = 1;
        theta(&mut state);
        // Column 1 sees parity[0] directly; column 4 sees it rotated by one.
        for y in 0..5 {
            assert_eq!(state.lane(1, y), 1);
            assert_eq!(state.lane(4, y), 2);
            assert_eq!(state.lane(2, y), 0);
            assert_eq!(state.lane(3, y), 0);
        }
        assert_eq!(state.lane(0, 0), 1);
    }

    #[test]
    fn rho_pi_keeps_origin_and_moves_first_lane() {
        let mut state = KeccakState::new();
        *state.lane_mut(0, 0) = 0x5;
        *state.lane_mut(1, 0) = 1;
        rho_pi(&mut state);
        assert_eq!(state.lane(0, 0), 0x5);
        // (1, 0) lands on (0, 2) rotated by 1.
        assert_eq!(state.lane(0, 2), 2);
        assert_eq!(state.lane(1, 0), 0);
    }

    #[test]
    fn chi_uses_row_values_from_before_the_update() {
        let mut state = KeccakState::new();
        *state.lane_mut(2, 1) = u64::MAX;
        chi(&mut state);
        // lane(0,1) ^= !lane(1,1) & lane(2,1)
        assert_eq!(state.lane(0, 1), u64::MAX);
        assert_eq!(state.lane(1, 1), 0);
        assert_eq!(state.lane(2, 1), u64::MAX);
        assert_eq!(state.lane(0, 0), 0);
    }
}
