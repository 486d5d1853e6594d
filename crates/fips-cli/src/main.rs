//! Command-line interface for the AES-128 and SHA-3 primitives.

#![forbid(unsafe_code)]

mod selftest;

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{Aes128Key, Block, BlockCipher, KeyIndex, KeyProvider, KeyTable};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use keccak_core::{sha3_256, Variant};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// AES-128 / SHA-3 CLI.
#[derive(Parser)]
#[command(
    name = "fips",
    version,
    author,
    about = "AES-128 (FIPS-197) and SHA-3/SHAKE (FIPS-202) primitives"
)]
struct Cli {
    /// Log at debug level (hex dumps included) unless RUST_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a key table file: a default key plus extra indexed slots.
    Keygen {
        /// Output path for the serialized key table.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Number of keys besides the default key (index 0).
        #[arg(long, default_value_t = 1)]
        slots: u8,
        /// Default key as 32 hex characters (random when omitted).
        #[arg(long, value_name = "HEX")]
        default_key_hex: Option<String>,
        /// Optional RNG seed for reproducible tables.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt 16-byte blocks from a file under a key index.
    Enc(BlockArgs),
    /// Decrypt 16-byte blocks from a file under a key index.
    Dec(BlockArgs),
    /// Hash a file or a string with one of the FIPS-202 functions.
    Hash {
        /// sha3-224, sha3-256, sha3-384, sha3-512, shake128 or shake256.
        #[arg(long, default_value = "sha3-256")]
        variant: Variant,
        /// Output length in bytes (SHAKE only).
        #[arg(long, default_value_t = 32)]
        len: usize,
        /// Input file to hash.
        #[arg(long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,
        /// Literal string to hash.
        #[arg(long)]
        text: Option<String>,
    },
    /// Run the FIPS-197 and FIPS-202 known-answer tests.
    Selftest,
    /// Run a local demo: generate keys, encrypt random data, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct BlockArgs {
    /// Path to the serialized key table.
    #[arg(long, value_name = "FILE")]
    keys: PathBuf,
    /// Key index; unknown indices use the default key.
    #[arg(long, default_value_t = 0)]
    index: u8,
    /// Input file (must be a multiple of 16 bytes).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output path.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Keygen {
            out,
            slots,
            default_key_hex,
            seed,
        } => cmd_keygen(&out, slots, default_key_hex.as_deref(), seed),
        Commands::Enc(args) => cmd_blocks(&args, Direction::Encrypt),
        Commands::Dec(args) => cmd_blocks(&args, Direction::Decrypt),
        Commands::Hash {
            variant,
            len,
            input,
            text,
        } => cmd_hash(variant, len, input.as_deref(), text.as_deref()),
        Commands::Selftest => cmd_selftest(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_keygen(
    out: &Path,
    slots: u8,
    default_key_hex: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let default_key = match default_key_hex {
        Some(hex_str) => parse_key_hex(hex_str)?,
        None => random_key(&mut rng),
    };
    let table = generate_table(&mut rng, default_key, slots);
    write_table(out, &table)?;
    info!(path = %out.display(), keys = table.len(), "wrote key table");
    Ok(())
}

fn cmd_blocks(args: &BlockArgs, direction: Direction) -> Result<()> {
    let table = load_table(&args.keys)?;
    let index = KeyIndex(args.index);
    if table.key(index).is_none() {
        info!(index = args.index, "key index not provisioned, using default key");
    }
    let mut data =
        fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    transform_blocks(&BlockCipher::new(table), index, direction, &mut data)?;
    fs::write(&args.output, &data)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(blocks = data.len() / 16, ?direction, "done");
    Ok(())
}

fn cmd_hash(
    variant: Variant,
    len: usize,
    input: Option<&Path>,
    text: Option<&str>,
) -> Result<()> {
    let message = match (input, text) {
        (Some(path), _) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        (None, Some(text)) => text.as_bytes().to_vec(),
        (None, None) => bail!("either --input or --text is required"),
    };
    if !variant.is_xof() && len != 32 {
        debug!(%variant, "ignoring --len for fixed-length digest");
    }
    let digest = variant.hash(&message, len);
    println!("{}", hex::encode(digest));
    Ok(())
}

fn cmd_selftest() -> Result<()> {
    let results = selftest::run_all();
    let failed: Vec<&str> = results
        .iter()
        .filter(|result| !result.passed)
        .map(|result| result.name)
        .collect();
    println!("{} of {} checks passed", results.len() - failed.len(), results.len());
    if !failed.is_empty() {
        bail!("self-test failed: {}", failed.join(", "));
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let default_key = random_key(&mut rng);
    let table = generate_table(&mut rng, default_key, 1);
    let cipher = BlockCipher::new(table);

    let mut data = [0u8; 32];
    rng.fill_bytes(&mut data);
    let plaintext_hex = hex::encode(data);

    transform_blocks(&cipher, KeyIndex(1), Direction::Encrypt, &mut data)?;
    let ciphertext_hex = hex::encode(data);

    transform_blocks(&cipher, KeyIndex(1), Direction::Decrypt, &mut data)?;
    let decrypted_hex = hex::encode(data);

    println!("key[1]: {}", hex::encode(cipher.keys().resolve(KeyIndex(1)).0));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    println!("sha3-256(plaintext): {}", hex::encode(sha3_256(&data)));
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

/// Encrypts or decrypts `data` block by block in place.
fn transform_blocks<P: KeyProvider>(
    cipher: &BlockCipher<P>,
    index: KeyIndex,
    direction: Direction,
    data: &mut [u8],
) -> Result<()> {
    if data.len() % 16 != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    for chunk in data.chunks_exact_mut(16) {
        let block: &mut Block = chunk.try_into().context("split 16-byte block")?;
        match direction {
            Direction::Encrypt => cipher.encrypt(block, index),
            Direction::Decrypt => cipher.decrypt(block, index),
        }
    }
    Ok(())
}

fn generate_table(rng: &mut impl RngCore, default_key: Aes128Key, slots: u8) -> KeyTable {
    let keys = (0..slots).map(|_| random_key(&mut *rng)).collect();
    KeyTable::with_slots(default_key, keys)
}

fn random_key(rng: &mut impl RngCore) -> Aes128Key {
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    Aes128Key::from(key)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn write_table(path: &Path, table: &KeyTable) -> Result<()> {
    let bytes = table.to_bytes().context("serialize key table")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn load_table(path: &Path) -> Result<KeyTable> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    KeyTable::from_bytes(&bytes).context("deserialize key table")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
