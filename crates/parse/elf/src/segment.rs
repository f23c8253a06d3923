//! Program header table codec.
//!
//! Exactly `e_phnum` fixed-size entries starting at `e_phoff`; there is no
//! count escape. The two classes order their fields differently:
//!
//! | class | field order                                              |
//! |-------|----------------------------------------------------------|
//! | ELF32 | type, offset, vaddr, paddr, filesz, memsz, **flags**, align |
//! | ELF64 | type, **flags**, offset, vaddr, paddr, filesz, memsz, align |
//!
//! ELF64 moves `p_flags` up next to `p_type` so the 8-byte fields stay
//! naturally aligned.

use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

use crate::coding::{self, Category, code_newtype};
use crate::endian::{Reader, Writer, region};
use crate::header::{ElfError, FileHeader};
use crate::section::{entry_stride, table_span, table_start};
use crate::variant::Layout;

code_newtype! {
    /// `p_type`: segment kind.
    SegmentType(u32) => Category::SegmentType
}

impl SegmentType {
    /// Unused entry.
    pub const NULL: Self = Self(0);
    /// Loadable segment.
    pub const LOAD: Self = Self(1);
    /// Dynamic linking information.
    pub const DYNAMIC: Self = Self(2);
    /// Interpreter path.
    pub const INTERP: Self = Self(3);
    /// Auxiliary information.
    pub const NOTE: Self = Self(4);
    /// Reserved.
    pub const SHLIB: Self = Self(5);
    /// The program header table itself.
    pub const PHDR: Self = Self(6);
    /// Thread-local storage template.
    pub const TLS: Self = Self(7);
    /// Exception handling frame table.
    pub const GNU_EH_FRAME: Self = Self(0x6474_e550);
    /// Stack executability.
    pub const GNU_STACK: Self = Self(0x6474_e551);
    /// Read-only after relocation.
    pub const GNU_RELRO: Self = Self(0x6474_e552);
}

bitflags! {
    /// `p_flags`.
    ///
    /// Bits without a name here (OS- and processor-specific ranges) are
    /// retained as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SegmentFlags: u32 {
        /// Execute.
        const X = 0x1;
        /// Write.
        const W = 0x2;
        /// Read.
        const R = 0x4;
    }
}

impl fmt::Display for SegmentFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = coding::flag_names(Category::SegmentFlags, u64::from(self.bits()));
        fmt::Display::fmt(&names, f)
    }
}

/// Decoded program header entry.
///
/// Word-sized fields are widened to `u64` for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgramHeader {
    /// Segment type.
    pub p_type: SegmentType,
    /// Segment permissions.
    pub p_flags: SegmentFlags,
    /// File offset of the segment contents.
    pub p_offset: u64,
    /// Virtual address of the segment.
    pub p_vaddr: u64,
    /// Physical address, where relevant.
    pub p_paddr: u64,
    /// Bytes of the segment present in the file.
    pub p_filesz: u64,
    /// Bytes of the segment in memory.
    pub p_memsz: u64,
    /// Required alignment.
    pub p_align: u64,
}

impl ProgramHeader {
    /// Decode one entry laid out as `L` at `data[offset..]`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the entry runs past `data`.
    pub fn decode<L: Layout>(data: &[u8], offset: usize) -> Result<Self, ElfError> {
        let mut r = Reader::<L::Order>::new(data, offset, L::VARIANT.program_entry_size())?;
        let p_type = SegmentType(r.u32()?);

        if L::VARIANT.is_64() {
            let p_flags = SegmentFlags::from_bits_retain(r.u32()?);
            Ok(Self {
                p_type,
                p_flags,
                p_offset: r.u64()?,
                p_vaddr: r.u64()?,
                p_paddr: r.u64()?,
                p_filesz: r.u64()?,
                p_memsz: r.u64()?,
                p_align: r.u64()?,
            })
        } else {
            let p_offset = u64::from(r.u32()?);
            let p_vaddr = u64::from(r.u32()?);
            let p_paddr = u64::from(r.u32()?);
            let p_filesz = u64::from(r.u32()?);
            let p_memsz = u64::from(r.u32()?);
            let p_flags = SegmentFlags::from_bits_retain(r.u32()?);
            let p_align = u64::from(r.u32()?);
            Ok(Self {
                p_type,
                p_flags,
                p_offset,
                p_vaddr,
                p_paddr,
                p_filesz,
                p_memsz,
                p_align,
            })
        }
    }

    /// Encode this entry as `L` into `buf[offset..]`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the entry does not fit in `buf`.
    pub fn encode<L: Layout>(&self, buf: &mut [u8], offset: usize) -> Result<(), ElfError> {
        let mut w = Writer::<L::Order>::new(buf, offset, L::VARIANT.program_entry_size())?;
        w.u32(self.p_type.0)?;

        if L::VARIANT.is_64() {
            w.u32(self.p_flags.bits())?;
            L::write_word(&mut w, self.p_offset)?;
            L::write_word(&mut w, self.p_vaddr)?;
            L::write_word(&mut w, self.p_paddr)?;
            L::write_word(&mut w, self.p_filesz)?;
            L::write_word(&mut w, self.p_memsz)?;
            L::write_word(&mut w, self.p_align)
        } else {
            L::write_word(&mut w, self.p_offset)?;
            L::write_word(&mut w, self.p_vaddr)?;
            L::write_word(&mut w, self.p_paddr)?;
            L::write_word(&mut w, self.p_filesz)?;
            L::write_word(&mut w, self.p_memsz)?;
            w.u32(self.p_flags.bits())?;
            L::write_word(&mut w, self.p_align)
        }
    }
}

/// Decode the program header table described by `header`.
///
/// `base` is the offset of the ELF image within `data`; `e_phoff` is
/// relative to it.
///
/// # Errors
///
/// Returns [`ElfError::Truncated`] if any entry runs past `data`.
pub fn decode_table<L: Layout>(
    data: &[u8],
    base: usize,
    header: &FileHeader,
) -> Result<Vec<ProgramHeader>, ElfError> {
    if header.e_phoff == 0 || header.e_phnum == 0 {
        return Ok(Vec::new());
    }

    let start = table_start(base, header.e_phoff)?;
    let entry = L::VARIANT.program_entry_size();
    let stride = entry_stride(header.e_phentsize, entry);
    let count = usize::from(header.e_phnum);
    region(data, start, table_span(count, stride, entry)?)?;

    (0..count)
        .map(|i| ProgramHeader::decode::<L>(data, start + i * stride))
        .collect()
}

/// Encode `segments` at the table position recorded in `header`.
///
/// Nothing is written when `e_phoff` is 0. Keeping `e_phoff` and `e_phnum`
/// consistent with `segments` is up to the caller.
///
/// # Errors
///
/// Returns [`ElfError::Truncated`] if the table does not fit in `buf`.
pub fn encode_table<L: Layout>(
    segments: &[ProgramHeader],
    buf: &mut [u8],
    base: usize,
    header: &FileHeader,
) -> Result<(), ElfError> {
    if header.e_phoff == 0 || segments.is_empty() {
        return Ok(());
    }

    let start = table_start(base, header.e_phoff)?;
    let entry = L::VARIANT.program_entry_size();
    let stride = entry_stride(header.e_phentsize, entry);
    region(buf, start, table_span(segments.len(), stride, entry)?)?;

    for (i, segment) in segments.iter().enumerate() {
        segment.encode::<L>(buf, start + i * stride)?;
    }
    Ok(())
}
