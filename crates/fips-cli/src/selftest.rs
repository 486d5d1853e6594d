//! Known-answer self-tests for both primitives.
//!
//! Every check hex-dumps what it computed at `debug` level, so a failing
//! device log shows the actual bytes next to the expected ones.

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128Key, Block};
use keccak_core::{keccak, keccak_f1600, KeccakState, Variant};
use tracing::{debug, info, warn};

/// Outcome of a single known-answer test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    /// Short name of the check.
    pub name: &'static str,
    /// Whether the computed bytes matched the published ones.
    pub passed: bool,
}

struct HashVector {
    name: &'static str,
    variant: Variant,
    message: &'static [u8],
    output_len: usize,
    expected: &'static str,
}

const AES_KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
const AES_PLAIN: Block = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
const AES_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

const HASH_VECTORS: [HashVector; 6] = [
    HashVector {
        name: "sha3-224(abc)",
        variant: Variant::Sha3_224,
        message: b"abc",
        output_len: 28,
        expected: "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    },
    HashVector {
        name: "sha3-256(abc)",
        variant: Variant::Sha3_256,
        message: b"abc",
        output_len: 32,
        expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    },
    HashVector {
        name: "sha3-384(abc)",
        variant: Variant::Sha3_384,
        message: b"abc",
        output_len: 48,
        expected: "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
                   98d88cea927ac7f539f1edf228376d25",
    },
    HashVector {
        name: "sha3-512(abc)",
        variant: Variant::Sha3_512,
        message: b"abc",
        output_len: 64,
        expected: "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
                   10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    },
    HashVector {
        name: "shake128('', 32)",
        variant: Variant::Shake128,
        message: b"",
        output_len: 32,
        expected: "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
    },
    HashVector {
        name: "shake256('', 64)",
        variant: Variant::Shake256,
        message: b"",
        output_len: 64,
        expected: "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
                   d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
    },
];

/// First lane of Keccak-f[1600] applied to the zero state.
const ZERO_PERMUTED_LANE0: u64 = 0xF1258F7940E1DDE7;

/// Runs every known-answer test and returns one result per check.
pub fn run_all() -> Vec<CheckResult> {
    let mut results = Vec::new();
    results.extend(aes_checks());
    results.push(permutation_check());
    results.extend(HASH_VECTORS.iter().map(hash_check));
    results.push(rejection_check());
    results
}

fn aes_checks() -> [CheckResult; 2] {
    let round_keys = expand_key(&Aes128Key::from(AES_KEY));
    debug!(schedule = %hex::encode(round_keys.to_bytes()), "aes-128 key schedule");

    let cipher = encrypt_block(&AES_PLAIN, &round_keys);
    let encrypt = report("aes-128 encrypt (fips-197 c.1)", &cipher, AES_CIPHER);

    let plain = decrypt_block(&cipher, &round_keys);
    let decrypt = report(
        "aes-128 decrypt (fips-197 c.1)",
        &plain,
        &hex::encode(AES_PLAIN),
    );
    [encrypt, decrypt]
}

fn permutation_check() -> CheckResult {
    let mut state = KeccakState::new();
    keccak_f1600(&mut state);
    let lane = state.lane(0, 0);
    report(
        "keccak-f[1600](0)",
        &lane.to_be_bytes(),
        &hex::encode(ZERO_PERMUTED_LANE0.to_be_bytes()),
    )
}

fn hash_check(vector: &HashVector) -> CheckResult {
    let output = vector.variant.hash(vector.message, vector.output_len);
    report(vector.name, &output, vector.expected)
}

fn rejection_check() -> CheckResult {
    let mut output = [0u8; 16];
    let rejected = keccak(1000, 500, b"abc", 0x06, &mut output);
    let passed = rejected.is_err() && output == [0u8; 16];
    match rejected {
        Err(err) => debug!(%err, "malformed parameters rejected"),
        Ok(written) => debug!(written, "malformed parameters accepted"),
    }
    log_outcome("sponge rejects rate+capacity != 1600", passed)
}

fn report(name: &'static str, actual: &[u8], expected: &str) -> CheckResult {
    let actual = hex::encode(actual);
    debug!(check = name, %actual, %expected, "hex dump");
    log_outcome(name, actual == expected)
}

fn log_outcome(name: &'static str, passed: bool) -> CheckResult {
    if passed {
        info!(check = name, "pass");
    } else {
        warn!(check = name, "FAIL");
    }
    CheckResult { name, passed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes() {
        let results = run_all();
        assert_eq!(results.len(), 10);
        for result in results {
            assert!(result.passed, "{} failed", result.name);
        }
    }

    #[test]
    fn report_flags_mismatch() {
        let result = report("mismatch", &[0x00], "01");
        assert!(!result.passed);
    }
}
