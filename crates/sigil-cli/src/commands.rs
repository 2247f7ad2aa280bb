//! Command execution over arbitrary byte streams.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use sigil_core::{
    Decoder, DecoderConfig, Encoder, HostError, PaddingMode, hex_decode, hex_encode,
    host::{self, KeyBytes},
};
use zeroize::Zeroizing;

use crate::{
    args::{Command, DecodeArgs, EncodeArgs, KeyArgs},
    error::CliError,
};

/// Open `path` for reading, or stdin when absent.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    })
}

/// Open `path` for writing (truncating), or stdout when absent.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

/// Run `command` against the files or standard streams it names.
///
/// The result is buffered and the output is only opened once the command
/// has succeeded, so a failure never truncates an existing output file and
/// the input and output may be the same file.
pub fn run(command: &Command) -> Result<(), CliError> {
    let io = command.io();
    let input = open_input(io.input.as_deref())?;

    let mut result = Zeroizing::new(Vec::new());
    execute(command, input, &mut *result)?;

    let mut output = open_output(io.output.as_deref())?;
    output.write_all(&result)?;
    output.flush()?;
    Ok(())
}

/// Run `command`, reading all of `input` and writing the result to `output`.
pub fn execute(
    command: &Command,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<(), CliError> {
    let mut bytes = Zeroizing::new(Vec::new());
    input.read_to_end(&mut bytes)?;

    match command {
        Command::Encode(args) => encode(args, &bytes, &mut output)?,
        Command::Decode(args) => decode(args, &bytes, &mut output)?,
        Command::HexEncode(_) => writeln!(output, "{}", hex_encode(&bytes))?,
        Command::HexDecode(_) => output.write_all(&parse_hex_input(&bytes)?)?,
    }

    output.flush()?;
    Ok(())
}

fn encode(args: &EncodeArgs, payload: &[u8], output: &mut impl Write) -> Result<(), CliError> {
    let (encryption_key, signing_key) = parse_keys(&args.keys)?;
    let blob = Encoder::new().encode(payload, &encryption_key, &signing_key)?;

    tracing::info!(payload_len = payload.len(), blob_len = blob.len(), "encoded");

    if args.hex {
        writeln!(output, "{}", hex_encode(&blob))?;
    } else {
        output.write_all(&blob)?;
    }
    Ok(())
}

fn decode(args: &DecodeArgs, input: &[u8], output: &mut impl Write) -> Result<(), CliError> {
    let (encryption_key, signing_key) = parse_keys(&args.keys)?;

    let hex_blob;
    let blob = if args.hex {
        hex_blob = parse_hex_input(input)?;
        &hex_blob[..]
    } else {
        input
    };

    let padding = if args.strict_padding { PaddingMode::Strict } else { PaddingMode::Lenient };
    let decoder = Decoder::with_config(DecoderConfig { padding });
    let payload = Zeroizing::new(decoder.decode(blob, &encryption_key, &signing_key)?);

    tracing::info!(blob_len = blob.len(), payload_len = payload.len(), "decoded");

    output.write_all(&payload)?;
    Ok(())
}

fn parse_keys(keys: &KeyArgs) -> Result<(KeyBytes, KeyBytes), HostError> {
    host::parse_keys(keys.encryption_key.trim(), keys.signing_key.trim())
}

/// Hex text with surrounding whitespace (such as a trailing newline) ignored.
fn parse_hex_input(input: &[u8]) -> Result<Vec<u8>, CliError> {
    let text = std::str::from_utf8(input).map_err(|_| CliError::InvalidInputHex)?;
    hex_decode(text.trim()).ok_or(CliError::InvalidInputHex)
}
