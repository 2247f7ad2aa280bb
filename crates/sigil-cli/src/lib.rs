//! Sigil command-line front end.
//!
//! Argument parsing and command execution live here so they can be driven
//! in-process; `main.rs` only wires up logging and standard streams.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod args;
pub mod commands;
pub mod error;

pub use args::{Cli, Command};
pub use commands::{execute, open_input, open_output, run};
pub use error::CliError;
