//! Section header table codec.
//!
//! The section header table is a contiguous run of fixed-size entries
//! starting at `e_shoff`. Entry order matters: sections are referenced by
//! position from `sh_link`, `sh_info`, `e_shstrndx` and symbol tables.
//!
//! # Entry count
//!
//! `e_shnum` is only 16 bits wide. When the real count does not fit, the
//! header stores 0 and the count lives in the `sh_size` field of entry 0.
//! The table walk therefore resolves its count as:
//!
//! 1. `e_shoff == 0`: no table, whatever `e_shnum` says.
//! 2. `e_shnum != 0`: `e_shnum` entries.
//! 3. otherwise: decode entry 0 and use its `sh_size`.

use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

use crate::coding::{self, Category, code_newtype};
use crate::endian::{Reader, Writer, region};
use crate::header::{ElfError, FileHeader};
use crate::variant::Layout;

/// Special section index: undefined.
pub const SHN_UNDEF: u16 = 0;

/// Lower bound of the reserved section index range.
pub const SHN_LORESERVE: u16 = 0xff00;

/// Escape value: the real index is stored elsewhere.
pub const SHN_XINDEX: u16 = 0xffff;

code_newtype! {
    /// `sh_type`: section contents and semantics.
    SectionType(u32) => Category::SectionType
}

impl SectionType {
    /// Inactive entry.
    pub const NULL: Self = Self(0);
    /// Program-defined contents.
    pub const PROGBITS: Self = Self(1);
    /// Symbol table.
    pub const SYMTAB: Self = Self(2);
    /// String table.
    pub const STRTAB: Self = Self(3);
    /// Relocations with addends.
    pub const RELA: Self = Self(4);
    /// Symbol hash table.
    pub const HASH: Self = Self(5);
    /// Dynamic linking information.
    pub const DYNAMIC: Self = Self(6);
    /// Notes.
    pub const NOTE: Self = Self(7);
    /// Occupies no file space (`.bss`).
    pub const NOBITS: Self = Self(8);
    /// Relocations without addends.
    pub const REL: Self = Self(9);
    /// Reserved.
    pub const SHLIB: Self = Self(10);
    /// Dynamic linking symbols.
    pub const DYNSYM: Self = Self(11);
    /// Initialization function pointers.
    pub const INIT_ARRAY: Self = Self(14);
    /// Termination function pointers.
    pub const FINI_ARRAY: Self = Self(15);
    /// Pre-initialization function pointers.
    pub const PREINIT_ARRAY: Self = Self(16);
    /// Section group.
    pub const GROUP: Self = Self(17);
    /// Extended section indexes.
    pub const SYMTAB_SHNDX: Self = Self(18);
}

bitflags! {
    /// `sh_flags`.
    ///
    /// Bits without a name here (OS- and processor-specific ranges) are
    /// retained as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SectionFlags: u64 {
        /// Writable during execution.
        const WRITE = 0x1;
        /// Occupies memory during execution.
        const ALLOC = 0x2;
        /// Executable instructions.
        const EXECINSTR = 0x4;
        /// Mergeable data.
        const MERGE = 0x10;
        /// NUL-terminated strings.
        const STRINGS = 0x20;
        /// `sh_info` holds a section index.
        const INFO_LINK = 0x40;
        /// Ordering requirements for link editors.
        const LINK_ORDER = 0x80;
        /// OS-specific processing required.
        const OS_NONCONFORMING = 0x100;
        /// Member of a section group.
        const GROUP = 0x200;
        /// Thread-local storage.
        const TLS = 0x400;
        /// Compressed contents.
        const COMPRESSED = 0x800;
    }
}

impl fmt::Display for SectionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&coding::flag_names(Category::SectionFlags, self.bits()), f)
    }
}

/// Decoded section header entry.
///
/// Word-sized fields are widened to `u64` for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionHeader {
    /// Offset of the section name in the section name string table.
    pub sh_name: u32,
    /// Section type.
    pub sh_type: SectionType,
    /// Section flags.
    pub sh_flags: SectionFlags,
    /// Virtual address in memory (0 for non-loaded sections).
    pub sh_addr: u64,
    /// File offset of the section data.
    pub sh_offset: u64,
    /// Size of the section data; in entry 0, possibly the real section count.
    pub sh_size: u64,
    /// Index of an associated section.
    pub sh_link: u32,
    /// Extra information, interpretation depends on `sh_type`.
    pub sh_info: u32,
    /// Required alignment.
    pub sh_addralign: u64,
    /// Size of each entry, for sections holding fixed-size entries.
    pub sh_entsize: u64,
}

impl SectionHeader {
    /// Decode one entry laid out as `L` at `data[offset..]`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the entry runs past `data`.
    pub fn decode<L: Layout>(data: &[u8], offset: usize) -> Result<Self, ElfError> {
        let mut r = Reader::<L::Order>::new(data, offset, L::VARIANT.section_entry_size())?;
        Ok(Self {
            sh_name: r.u32()?,
            sh_type: SectionType(r.u32()?),
            sh_flags: SectionFlags::from_bits_retain(L::read_word(&mut r)?),
            sh_addr: L::read_word(&mut r)?,
            sh_offset: L::read_word(&mut r)?,
            sh_size: L::read_word(&mut r)?,
            sh_link: r.u32()?,
            sh_info: r.u32()?,
            sh_addralign: L::read_word(&mut r)?,
            sh_entsize: L::read_word(&mut r)?,
        })
    }

    /// Encode this entry as `L` into `buf[offset..]`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the entry does not fit in `buf`.
    pub fn encode<L: Layout>(&self, buf: &mut [u8], offset: usize) -> Result<(), ElfError> {
        let mut w = Writer::<L::Order>::new(buf, offset, L::VARIANT.section_entry_size())?;
        w.u32(self.sh_name)?;
        w.u32(self.sh_type.0)?;
        L::write_word(&mut w, self.sh_flags.bits())?;
        L::write_word(&mut w, self.sh_addr)?;
        L::write_word(&mut w, self.sh_offset)?;
        L::write_word(&mut w, self.sh_size)?;
        w.u32(self.sh_link)?;
        w.u32(self.sh_info)?;
        L::write_word(&mut w, self.sh_addralign)?;
        L::write_word(&mut w, self.sh_entsize)
    }
}

/// Absolute start of a table recorded at `offset` in an image at `base`.
pub(crate) fn table_start(base: usize, offset: u64) -> Result<usize, ElfError> {
    let offset = usize::try_from(offset).map_err(|_| ElfError::Truncated)?;
    base.checked_add(offset).ok_or(ElfError::Truncated)
}

/// Distance between consecutive entries.
///
/// The declared entry size wins unless it is smaller than the layout's
/// fixed entry, in which case entries would overlap.
pub(crate) fn entry_stride(declared: u16, fixed: usize) -> usize {
    usize::from(declared).max(fixed)
}

/// Number of bytes spanned by `count` entries, the last one unpadded.
pub(crate) fn table_span(count: usize, stride: usize, entry: usize) -> Result<usize, ElfError> {
    match count {
        0 => Ok(0),
        n => (n - 1)
            .checked_mul(stride)
            .and_then(|s| s.checked_add(entry))
            .ok_or(ElfError::Truncated),
    }
}

/// Decode the section header table described by `header`.
///
/// `base` is the offset of the ELF image within `data`; `e_shoff` is
/// relative to it.
///
/// # Errors
///
/// Returns [`ElfError::Truncated`] if any entry runs past `data`.
pub fn decode_table<L: Layout>(
    data: &[u8],
    base: usize,
    header: &FileHeader,
) -> Result<Vec<SectionHeader>, ElfError> {
    if header.e_shoff == 0 {
        return Ok(Vec::new());
    }

    let start = table_start(base, header.e_shoff)?;
    let entry = L::VARIANT.section_entry_size();
    let stride = entry_stride(header.e_shentsize, entry);

    let first = SectionHeader::decode::<L>(data, start)?;
    let count = if header.e_shnum != 0 {
        usize::from(header.e_shnum)
    } else {
        usize::try_from(first.sh_size).map_err(|_| ElfError::Truncated)?
    };
    if count == 0 {
        return Ok(Vec::new());
    }

    // Bound the whole walk before allocating for it.
    region(data, start, table_span(count, stride, entry)?)?;

    let mut sections = Vec::with_capacity(count);
    sections.push(first);
    for i in 1..count {
        sections.push(SectionHeader::decode::<L>(data, start + i * stride)?);
    }
    Ok(sections)
}

/// Number of entries the encoded table occupies.
///
/// With an escaped count (`e_shnum == 0`) entry 0 is always read, so an
/// empty table still takes one zeroed slot at `e_shoff`.
pub(crate) fn encoded_count(sections: &[SectionHeader], header: &FileHeader) -> usize {
    match sections.len() {
        0 if header.e_shoff != 0 && header.e_shnum == 0 => 1,
        n => n,
    }
}

/// Encode `sections` at the table position recorded in `header`.
///
/// Nothing is written when `e_shoff` is 0. An empty table with an escaped
/// count is written as a single zeroed entry 0. Keeping `e_shoff`, `e_shnum`
/// and entry 0's `sh_size` consistent with `sections` is up to the caller.
///
/// # Errors
///
/// Returns [`ElfError::Truncated`] if the table does not fit in `buf`.
pub fn encode_table<L: Layout>(
    sections: &[SectionHeader],
    buf: &mut [u8],
    base: usize,
    header: &FileHeader,
) -> Result<(), ElfError> {
    let count = encoded_count(sections, header);
    if header.e_shoff == 0 || count == 0 {
        return Ok(());
    }

    let start = table_start(base, header.e_shoff)?;
    let entry = L::VARIANT.section_entry_size();
    let stride = entry_stride(header.e_shentsize, entry);
    region(buf, start, table_span(count, stride, entry)?)?;

    if sections.is_empty() {
        return SectionHeader::default().encode::<L>(buf, start);
    }
    for (i, section) in sections.iter().enumerate() {
        section.encode::<L>(buf, start + i * stride)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::variant::{Elf32Be, Elf32Le, Elf64Be, Elf64Le};
    use alloc::format;
    use alloc::vec;

    /// Append a raw ELF64 little-endian section header to `buf`.
    #[expect(clippy::too_many_arguments, reason = "mirrors the Elf64_Shdr fields")]
    pub(crate) fn append_shdr64le(
        buf: &mut Vec<u8>,
        sh_name: u32,
        sh_type: u32,
        sh_flags: u64,
        sh_addr: u64,
        sh_offset: u64,
        sh_size: u64,
        sh_link: u32,
        sh_info: u32,
        sh_addralign: u64,
        sh_entsize: u64,
    ) {
        let start = buf.len();
        buf.resize(start + 64, 0);
        let b = &mut buf[start..];

        b[0..4].copy_from_slice(&sh_name.to_le_bytes());
        b[4..8].copy_from_slice(&sh_type.to_le_bytes());
        b[8..16].copy_from_slice(&sh_flags.to_le_bytes());
        b[16..24].copy_from_slice(&sh_addr.to_le_bytes());
        b[24..32].copy_from_slice(&sh_offset.to_le_bytes());
        b[32..40].copy_from_slice(&sh_size.to_le_bytes());
        b[40..44].copy_from_slice(&sh_link.to_le_bytes());
        b[44..48].copy_from_slice(&sh_info.to_le_bytes());
        b[48..56].copy_from_slice(&sh_addralign.to_le_bytes());
        b[56..64].copy_from_slice(&sh_entsize.to_le_bytes());
    }

    fn header_for(shoff: u64, shnum: u16, shentsize: u16) -> FileHeader {
        FileHeader {
            e_shoff: shoff,
            e_shnum: shnum,
            e_shentsize: shentsize,
            ..FileHeader::default()
        }
    }

    fn text_section() -> SectionHeader {
        SectionHeader {
            sh_name: 0x1b,
            sh_type: SectionType::PROGBITS,
            sh_flags: SectionFlags::ALLOC | SectionFlags::EXECINSTR,
            sh_addr: 0x1040,
            sh_offset: 0x1040,
            sh_size: 0x1a5,
            sh_link: 0,
            sh_info: 0,
            sh_addralign: 16,
            sh_entsize: 0,
        }
    }

    #[test]
    fn decode_elf64le_entry() {
        let mut buf = Vec::new();
        append_shdr64le(&mut buf, 0x1b, 1, 0x6, 0x1040, 0x1040, 0x1a5, 0, 0, 16, 0);
        assert_eq!(SectionHeader::decode::<Elf64Le>(&buf, 0), Ok(text_section()));
    }

    #[test]
    fn elf32_entry_is_forty_bytes() {
        let section = text_section();
        let mut buf = vec![0u8; 40];
        section.encode::<Elf32Be>(&mut buf, 0).expect("40 bytes suffice");
        // sh_flags is a 4-byte word right after sh_type.
        assert_eq!(&buf[8..12], &[0, 0, 0, 6]);
        // sh_size is the sixth 4-byte field.
        assert_eq!(&buf[20..24], &[0, 0, 0x01, 0xa5]);
        assert_eq!(SectionHeader::decode::<Elf32Be>(&buf, 0), Ok(section));
        assert_eq!(
            SectionHeader::decode::<Elf32Be>(&buf[..39], 0),
            Err(ElfError::Truncated)
        );
    }

    #[test]
    fn unknown_flag_bits_are_retained() {
        let section = SectionHeader {
            sh_flags: SectionFlags::from_bits_retain(0x8000_0000 | 0x0020_0000 | 0x2),
            sh_type: SectionType(0x7000_0003),
            ..SectionHeader::default()
        };
        let mut buf = vec![0u8; 64];
        section.encode::<Elf64Be>(&mut buf, 0).unwrap();
        let back = SectionHeader::decode::<Elf64Be>(&buf, 0).unwrap();
        assert_eq!(back.sh_flags.bits(), 0x8020_0002);
        assert_eq!(back, section);
        assert_eq!(format!("{}", back.sh_flags), "SHF_ALLOC|0x80200000");
    }

    #[test]
    fn empty_when_offset_is_zero() {
        let buf = vec![0xffu8; 256];
        let hdr = header_for(0, 12, 64);
        assert_eq!(decode_table::<Elf64Le>(&buf, 0, &hdr), Ok(Vec::new()));
    }

    #[test]
    fn count_from_header() {
        let mut buf = vec![0u8; 16];
        append_shdr64le(&mut buf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        append_shdr64le(&mut buf, 0x1b, 1, 0x6, 0x1040, 0x1040, 0x1a5, 0, 0, 16, 0);
        let hdr = header_for(16, 2, 64);
        let sections = decode_table::<Elf64Le>(&buf, 0, &hdr).expect("two entries");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], SectionHeader::default());
        assert_eq!(sections[1], text_section());
    }

    #[test]
    fn count_escape_reads_entry_zero_size() {
        const N: u64 = 5;
        let mut buf = Vec::new();
        append_shdr64le(&mut buf, 0, 0, 0, 0, 0, N, 0, 0, 0, 0);
        for i in 1..N {
            append_shdr64le(&mut buf, u32::try_from(i).unwrap(), 1, 0, 0, 0, 0, 0, 0, 0, 0);
        }
        // One trailing entry that must not be read.
        append_shdr64le(&mut buf, 99, 1, 0, 0, 0, 0, 0, 0, 0, 0);

        let hdr = header_for(0x40, 0, 64);
        let mut image = vec![0u8; 0x40];
        image.extend_from_slice(&buf);

        let sections = decode_table::<Elf64Le>(&image, 0, &hdr).expect("escaped count");
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].sh_size, N);
        assert_eq!(sections[4].sh_name, 4);
    }

    #[test]
    fn count_escape_with_zero_size_is_empty() {
        let mut buf = Vec::new();
        append_shdr64le(&mut buf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        let hdr = header_for(0, 0, 64);
        assert!(decode_table::<Elf64Le>(&buf, 0, &hdr).unwrap().is_empty());

        let mut image = vec![0u8; 8];
        image.extend_from_slice(&buf);
        let hdr = header_for(8, 0, 64);
        assert!(decode_table::<Elf64Le>(&image, 0, &hdr).unwrap().is_empty());
    }

    #[test]
    fn empty_escaped_table_keeps_entry_zero_slot() {
        let hdr = header_for(0x10, 0, 40);
        assert_eq!(encoded_count(&[], &hdr), 1);
        assert_eq!(encoded_count(&[], &header_for(0x10, 3, 40)), 0);
        assert_eq!(encoded_count(&[], &header_for(0, 0, 40)), 0);

        let mut buf = vec![0xeeu8; 0x10 + 40];
        encode_table::<Elf32Be>(&[], &mut buf, 0, &hdr).expect("room for entry 0");
        assert!(buf[0x10..].iter().all(|&b| b == 0));
        assert_eq!(buf[0x0f], 0xee);
        assert_eq!(decode_table::<Elf32Be>(&buf, 0, &hdr), Ok(Vec::new()));

        let mut short = vec![0u8; 0x10 + 39];
        assert_eq!(
            encode_table::<Elf32Be>(&[], &mut short, 0, &hdr),
            Err(ElfError::Truncated)
        );
    }

    #[test]
    fn oversized_escaped_count_is_truncated() {
        let mut buf = vec![0u8; 8];
        append_shdr64le(&mut buf, 0, 0, 0, 0, 0, u64::MAX, 0, 0, 0, 0);
        let hdr = header_for(8, 0, 64);
        assert_eq!(
            decode_table::<Elf64Le>(&buf, 0, &hdr),
            Err(ElfError::Truncated)
        );
    }

    #[test]
    fn table_past_end_is_truncated() {
        let mut buf = vec![0u8; 8];
        append_shdr64le(&mut buf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        let hdr = header_for(8, 2, 64);
        assert_eq!(
            decode_table::<Elf64Le>(&buf, 0, &hdr),
            Err(ElfError::Truncated)
        );
        let hdr = header_for(u64::MAX, 1, 64);
        assert_eq!(
            decode_table::<Elf64Le>(&buf, 0, &hdr),
            Err(ElfError::Truncated)
        );
    }

    #[test]
    fn declared_stride_is_honored() {
        let sections = [text_section(), SectionHeader::default(), text_section()];
        let hdr = header_for(4, 3, 48);
        let mut buf = vec![0xeeu8; 4 + 2 * 48 + 40];
        encode_table::<Elf32Le>(&sections, &mut buf, 0, &hdr).expect("fits");
        // Padding between entries is left untouched.
        assert_eq!(buf[4 + 40], 0xee);
        assert_eq!(decode_table::<Elf32Le>(&buf, 0, &hdr), Ok(sections.to_vec()));
    }

    #[test]
    fn undersized_stride_falls_back_to_entry_size() {
        let sections = [text_section(), text_section()];
        let hdr = header_for(0x10, 2, 0);
        let mut buf = vec![0u8; 0x10 + 2 * 64];
        encode_table::<Elf64Be>(&sections, &mut buf, 0, &hdr).unwrap();
        assert_eq!(decode_table::<Elf64Be>(&buf, 0, &hdr), Ok(sections.to_vec()));
    }

    #[test]
    fn offsets_are_relative_to_base() {
        let sections = [text_section()];
        let hdr = header_for(0x20, 1, 40);
        let mut buf = vec![0u8; 0x100 + 0x20 + 40];
        encode_table::<Elf32Le>(&sections, &mut buf, 0x100, &hdr).unwrap();
        assert_eq!(decode_table::<Elf32Le>(&buf, 0x100, &hdr), Ok(sections.to_vec()));
        assert_ne!(decode_table::<Elf32Le>(&buf, 0, &hdr), Ok(sections.to_vec()));
    }

    #[test]
    fn encode_rejects_short_buffer_without_writing() {
        let sections = [text_section(), text_section()];
        let hdr = header_for(0, 2, 64);
        let mut buf = vec![0u8; 100];
        // e_shoff of 0 means there is nowhere to put the table.
        encode_table::<Elf64Le>(&sections, &mut buf, 0, &hdr).unwrap();
        assert!(buf.iter().all(|&b| b == 0));

        let hdr = header_for(8, 2, 64);
        assert_eq!(
            encode_table::<Elf64Le>(&sections, &mut buf, 0, &hdr),
            Err(ElfError::Truncated)
        );
        assert!(buf.iter().all(|&b| b == 0));
    }
}
