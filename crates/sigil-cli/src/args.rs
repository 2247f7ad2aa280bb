//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Sigil message codec
#[derive(Parser, Debug)]
#[command(name = "sigil")]
#[command(about = "Encode and decode signed, encrypted Sigil messages")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign and encrypt a payload
    Encode(EncodeArgs),
    /// Decrypt and verify a blob
    Decode(DecodeArgs),
    /// Write input bytes as lowercase hex
    HexEncode(IoArgs),
    /// Write hex input as raw bytes
    HexDecode(IoArgs),
}

/// Key material, as hex text.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// AES key (16, 24, or 32 bytes) as hex
    #[arg(long, env = "SIGIL_ENCRYPTION_KEY", hide_env_values = true)]
    pub encryption_key: String,

    /// HMAC key (non-empty) as hex
    #[arg(long, env = "SIGIL_SIGNING_KEY", hide_env_values = true)]
    pub signing_key: String,
}

/// Input and output locations.
#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Key material
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Input and output
    #[command(flatten)]
    pub io: IoArgs,

    /// Write the blob as hex text
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Key material
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Input and output
    #[command(flatten)]
    pub io: IoArgs,

    /// Read the blob as hex text
    #[arg(long)]
    pub hex: bool,

    /// Reject padding bytes that do not all match the pad length
    #[arg(long)]
    pub strict_padding: bool,
}

impl Command {
    /// Input and output locations of this command.
    pub fn io(&self) -> &IoArgs {
        match self {
            Self::Encode(args) => &args.io,
            Self::Decode(args) => &args.io,
            Self::HexEncode(io) | Self::HexDecode(io) => io,
        }
    }
}
