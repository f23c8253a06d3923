//! `elftool dump`: render decoded files as text or JSON.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use elfshape::coding::{self, Category};
use elfshape::{DecodeOptions, ElfFile};

use crate::cli::DumpArgs;

/// Dump every file named in `args` to stdout.
pub fn cmd_dump(args: &DumpArgs) -> Result<()> {
    let options = DecodeOptions {
        strict: args.strict,
    };
    for path in &args.files {
        let elf = crate::load(path, options)?;
        if args.json {
            let doc = serde_json::json!({
                "path": path.display().to_string(),
                "file": elf,
            });
            let text = serde_json::to_string_pretty(&doc)
                .with_context(|| format!("failed to serialize {}", path.display()))?;
            println!("{text}");
        } else {
            print!("{}", render(path, &elf)?);
        }
    }
    Ok(())
}

/// Text rendering of one decoded file.
///
/// `sh_name` is printed as its raw string table offset.
fn render(path: &Path, elf: &ElfFile) -> Result<String> {
    let mut out = String::new();
    let ident = elf.ident();
    let hdr = elf.header();

    writeln!(out, "{}: {}", path.display(), elf.variant())?;
    writeln!(out)?;
    writeln!(out, "ELF Header:")?;
    writeln!(out, "  Class:              {}", ident.class)?;
    writeln!(out, "  Data:               {}", ident.data)?;
    writeln!(
        out,
        "  Version:            {}",
        coding::name_of(Category::Version, u64::from(ident.version))
    )?;
    writeln!(
        out,
        "  OS/ABI:             {} (ABI version {})",
        ident.os_abi, ident.abi_version
    )?;
    writeln!(out, "  Type:               {}", hdr.e_type)?;
    writeln!(out, "  Machine:            {}", hdr.e_machine)?;
    writeln!(out, "  Entry point:        {:#x}", hdr.e_entry)?;
    writeln!(out, "  Flags:              {:#x}", hdr.e_flags)?;
    writeln!(out, "  Header size:        {}", hdr.e_ehsize)?;
    writeln!(
        out,
        "  Program headers:    {} at {:#x}, {} bytes each",
        hdr.e_phnum, hdr.e_phoff, hdr.e_phentsize
    )?;
    writeln!(
        out,
        "  Section headers:    {} at {:#x}, {} bytes each",
        elf.sections().len(),
        hdr.e_shoff,
        hdr.e_shentsize
    )?;
    match elf.string_table_index() {
        Some(index) => writeln!(out, "  String table index: {index}")?,
        None => writeln!(out, "  String table index: none")?,
    }

    if !elf.sections().is_empty() {
        writeln!(out)?;
        writeln!(out, "Section Headers:")?;
        writeln!(
            out,
            "  [Nr] {:>8} {:<18} {:>16} {:>10} {:>10} {:>4} {:>4} {:>5}  Flags",
            "Name", "Type", "Address", "Offset", "Size", "Link", "Info", "Align"
        )?;
        for (i, s) in elf.sections().iter().enumerate() {
            writeln!(
                out,
                "  [{i:>2}] {:>8x} {:<18} {:>16x} {:>10x} {:>10x} {:>4} {:>4} {:>5}  {}",
                s.sh_name,
                s.sh_type.to_string(),
                s.sh_addr,
                s.sh_offset,
                s.sh_size,
                s.sh_link,
                s.sh_info,
                s.sh_addralign,
                s.sh_flags
            )?;
        }
    }

    if !elf.segments().is_empty() {
        writeln!(out)?;
        writeln!(out, "Program Headers:")?;
        writeln!(
            out,
            "  {:<16} {:>10} {:>16} {:>16} {:>10} {:>10} {:>8}  Flags",
            "Type", "Offset", "VirtAddr", "PhysAddr", "FileSiz", "MemSiz", "Align"
        )?;
        for p in elf.segments() {
            writeln!(
                out,
                "  {:<16} {:>10x} {:>16x} {:>16x} {:>10x} {:>10x} {:>8x}  {}",
                p.p_type.to_string(),
                p.p_offset,
                p.p_vaddr,
                p.p_paddr,
                p.p_filesz,
                p.p_memsz,
                p.p_align,
                p.p_flags
            )?;
        }
    }

    writeln!(out)?;
    Ok(out)
}
