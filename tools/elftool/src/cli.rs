//! Command-line interface definitions for elftool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and compare the structure of ELF files.
#[derive(Parser)]
#[command(name = "elftool", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (`RUST_LOG` takes precedence).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the identification, header and header tables of each file.
    Dump(DumpArgs),
    /// Exit with status 1 and print `different` if two files differ structurally.
    Cmp(CmpArgs),
}

/// Arguments for the `dump` subcommand.
#[derive(Parser)]
pub struct DumpArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Reject files whose declared sizes disagree with their class.
    #[arg(long)]
    pub strict: bool,

    /// Files to dump.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `cmp` subcommand.
#[derive(Parser)]
pub struct CmpArgs {
    /// Reject files whose declared sizes disagree with their class.
    #[arg(long)]
    pub strict: bool,

    /// First file.
    pub a: PathBuf,

    /// Second file.
    pub b: PathBuf,
}
