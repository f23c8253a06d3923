//! ELF structure inspection tool.
//!
//! `elftool dump` renders decoded files as text or JSON; `elftool cmp`
//! compares two files structurally and reports through its exit status.

mod cli;
mod cmp;
mod dump;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use elfshape::{DecodeOptions, ElfFile};

/// Exit status when every file decoded and, for `cmp`, the files match.
const EXIT_OK: u8 = 0;
/// Exit status when `cmp` finds a structural difference.
const EXIT_DIFFERENT: u8 = 1;
/// Exit status when a file could not be read or decoded.
const EXIT_TROUBLE: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        cli::Command::Dump(ref args) => dump::cmd_dump(args).map(|()| EXIT_OK),
        cli::Command::Cmp(ref args) => cmp::cmd_cmp(args),
    };
    ExitCode::from(exit_status(result))
}

/// Map a command's outcome to its exit status, logging any error.
///
/// Errors get their own status so scripts can tell "different" from
/// "could not compare".
fn exit_status(result: Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            log::error!("{e:?}");
            EXIT_TROUBLE
        }
    }
}

/// Read `path` and decode it as an ELF file.
fn load(path: &Path, options: DecodeOptions) -> Result<ElfFile> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    log::debug!("{}: read {} bytes", path.display(), data.len());

    let elf = elfshape::decode_with(&data, options)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    log::debug!(
        "{}: {}, {} sections, {} segments",
        path.display(),
        elf.variant(),
        elf.sections().len(),
        elf.segments().len()
    );
    Ok(elf)
}
