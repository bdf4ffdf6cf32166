//! masterkey - CLI
//!
//! Derive subkeys from master key material on the command line.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use masterkey::{DeriverConfig, Encoding, HashAlgorithm, MasterKeyError, Result};

#[derive(Parser)]
#[command(name = "masterkey")]
#[command(version = masterkey::VERSION)]
#[command(about = "Derive purpose-scoped subkeys from a single master key")]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Hash behind HKDF (sha256, sha384, sha512); overrides the config
    #[arg(long, global = true)]
    hash: Option<HashAlgorithm>,

    /// Output encoding; overrides the config
    #[arg(short, long, global = true, value_enum)]
    encoding: Option<EncodingArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a subkey
    Derive {
        /// Purpose identifier, e.g. "encryption"
        #[arg(short, long)]
        id: String,

        /// Subkey length in bytes
        #[arg(short, long, default_value_t = 32)]
        size: usize,

        #[command(flatten)]
        material: MaterialSource,
    },

    /// Print fresh random master key material
    Generate {
        /// Material length in bytes
        #[arg(short, long, default_value_t = 64)]
        size: usize,
    },

    /// Show per-hash output limits
    Limits,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MaterialSource {
    /// Master material as hex
    #[arg(long)]
    material_hex: Option<String>,

    /// Master material as base64
    #[arg(long)]
    material_base64: Option<String>,

    /// Read raw master material from a file
    #[arg(long)]
    material_file: Option<PathBuf>,
}

impl MaterialSource {
    fn load(&self) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = match (&self.material_hex, &self.material_base64, &self.material_file) {
            (Some(text), _, _) => Encoding::Hex.decode(text)?,
            (_, Some(text), _) => Encoding::Base64.decode(text)?,
            (_, _, path) => {
                // clap's required group guarantees one source is set
                let path = path.as_deref().unwrap_or_else(|| Path::new(""));
                debug!(path = %path.display(), "reading master material");
                std::fs::read(path)?
            }
        };
        Ok(Zeroizing::new(bytes))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Hex,
    Base64,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Hex => Encoding::Hex,
            EncodingArg::Base64 => Encoding::Base64,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

/// 2 for bad caller input, 1 for everything else
fn exit_code(err: &MasterKeyError) -> i32 {
    if err.is_input_error() {
        2
    } else {
        1
    }
}

fn load_config(cli: &Cli) -> Result<DeriverConfig> {
    let mut config = match &cli.config {
        Some(path) => DeriverConfig::from_file(path)?,
        None => DeriverConfig::default(),
    };
    if let Some(hash) = cli.hash {
        config.hash = hash;
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding.into();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Derive { id, size, material } => {
            let master = config.master_key(material.load()?.as_slice())?;
            let subkey = master.subkey(&id, size)?;
            info!(id = %id, size, hash = %master.hash(), "derived subkey");
            println!("{}", config.encoding.encode(&subkey));
        }

        Commands::Generate { size } => {
            let mut material = Zeroizing::new(vec![0u8; size]);
            getrandom::getrandom(&mut material)
                .map_err(|e| MasterKeyError::Rng(e.to_string()))?;
            println!("{}", config.encoding.encode(&material));
        }

        Commands::Limits => {
            for line in limits_table(config.hash) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// One row per hash; the selected one is marked with `*`
fn limits_table(selected: HashAlgorithm) -> Vec<String> {
    let mut lines = vec![format!("{:<12} {:>8} {:>12}", "hash", "output", "max subkey")];
    for hash in HashAlgorithm::ALL {
        let marker = if hash == selected { " *" } else { "" };
        lines.push(format!(
            "{:<12} {:>8} {:>12}{}",
            hash.name(),
            hash.output_len(),
            hash.max_output_len(),
            marker
        ));
    }
    lines
}
