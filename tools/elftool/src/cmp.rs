//! `elftool cmp`: structural comparison of two files.

use anyhow::Result;
use elfshape::{DecodeOptions, ElfFile};

use crate::cli::CmpArgs;
use crate::{EXIT_DIFFERENT, EXIT_OK};

/// Decode both files and compare them.
///
/// Prints `different` and yields exit status 1 when they differ. Read and
/// decode failures are returned as errors.
pub fn cmd_cmp(args: &CmpArgs) -> Result<u8> {
    let options = DecodeOptions {
        strict: args.strict,
    };
    let a = crate::load(&args.a, options)?;
    let b = crate::load(&args.b, options)?;

    if elfshape::equals(&a, &b) {
        log::info!("{} and {} match", args.a.display(), args.b.display());
        return Ok(EXIT_OK);
    }

    if let Some(part) = first_difference(&a, &b) {
        log::debug!("first difference: {part}");
    }
    println!("different");
    Ok(EXIT_DIFFERENT)
}

/// Name of the first part that differs, in file order.
fn first_difference(a: &ElfFile, b: &ElfFile) -> Option<String> {
    if a.ident() != b.ident() {
        return Some("identification".into());
    }
    if a.header() != b.header() {
        return Some("file header".into());
    }
    if let Some(i) = mismatch(a.sections(), b.sections()) {
        return Some(format!("section header {i}"));
    }
    if let Some(i) = mismatch(a.segments(), b.segments()) {
        return Some(format!("program header {i}"));
    }
    None
}

/// Index of the first differing entry, or the shorter length.
fn mismatch<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then_some(a.len().min(b.len())))
}
