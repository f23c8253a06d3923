//! The ELF file aggregate.
//!
//! [`ElfFile`] ties the identification, file header and both header tables
//! together. Decoding resolves the [`Variant`] once from the identification
//! and then runs every codec monomorphized over the matching [`Layout`].

use alloc::vec::Vec;

use crate::header::{ElfError, FileHeader};
use crate::ident::{Identification, OsAbi};
use crate::section::{self, SHN_UNDEF, SHN_XINDEX, SectionHeader, entry_stride, table_span};
use crate::segment::{self, ProgramHeader};
use crate::variant::{Elf32Be, Elf32Le, Elf64Be, Elf64Le, Layout, Variant};

/// Knobs for [`ElfFile::unpack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Reject files whose declared header or entry sizes disagree with the
    /// variant's fixed layout.
    ///
    /// Only tables that are present (non-zero offset) have their entry size
    /// checked.
    pub strict: bool,
}

impl DecodeOptions {
    /// Options with strict size checking enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/// A decoded ELF file: identification, header and both header tables.
///
/// The aggregate owns copies of every decoded field and keeps no reference
/// to the input. Equality is field-wise and table order matters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElfFile {
    variant: Variant,
    ident: Identification,
    header: FileHeader,
    sections: Vec<SectionHeader>,
    segments: Vec<ProgramHeader>,
}

impl ElfFile {
    /// An empty file of the given variant: no sections, no segments.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ident: Identification::new(variant),
            header: FileHeader::new(variant),
            sections: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Decode the ELF image that starts at `data[offset..]`.
    ///
    /// Table offsets in the header are relative to `offset`. Nothing is
    /// returned unless every part decodes.
    ///
    /// # Errors
    ///
    /// - [`ElfError::BadMagic`] if the image does not start with `\x7fELF`.
    /// - [`ElfError::UnsupportedClass`] / [`ElfError::UnsupportedByteOrder`]
    ///   for identification codes outside the four supported layouts.
    /// - [`ElfError::Truncated`] if any fixed-size region runs past `data`.
    /// - [`ElfError::InconsistentTable`] for size mismatches, with
    ///   [`DecodeOptions::strict`] only.
    pub fn unpack(data: &[u8], offset: usize, options: DecodeOptions) -> Result<Self, ElfError> {
        let image = data.get(offset..).ok_or(ElfError::Truncated)?;
        let ident = Identification::decode(image)?;

        match ident.variant()? {
            Variant::Elf32Le => Self::unpack_as::<Elf32Le>(data, offset, ident, options),
            Variant::Elf32Be => Self::unpack_as::<Elf32Be>(data, offset, ident, options),
            Variant::Elf64Le => Self::unpack_as::<Elf64Le>(data, offset, ident, options),
            Variant::Elf64Be => Self::unpack_as::<Elf64Be>(data, offset, ident, options),
        }
    }

    fn unpack_as<L: Layout>(
        data: &[u8],
        base: usize,
        ident: Identification,
        options: DecodeOptions,
    ) -> Result<Self, ElfError> {
        let header = FileHeader::decode::<L>(data, base + Identification::SIZE)?;
        if options.strict {
            check_sizes(L::VARIANT, &header)?;
        }

        let sections = section::decode_table::<L>(data, base, &header)?;
        let segments = segment::decode_table::<L>(data, base, &header)?;

        Ok(Self {
            variant: L::VARIANT,
            ident,
            header,
            sections,
            segments,
        })
    }

    /// Encode into `buf` with the image starting at `buf[offset..]`.
    ///
    /// The identification and header go first; each table is written at
    /// the offset its header field records. Bytes between regions are left
    /// as they are.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if `buf` cannot hold [`Self::size`]
    /// bytes past `offset`. The check happens before anything is written.
    pub fn pack(&self, buf: &mut [u8], offset: usize) -> Result<(), ElfError> {
        let end = offset.checked_add(self.size()).ok_or(ElfError::Truncated)?;
        if buf.len() < end {
            return Err(ElfError::Truncated);
        }

        match self.variant {
            Variant::Elf32Le => self.pack_as::<Elf32Le>(buf, offset),
            Variant::Elf32Be => self.pack_as::<Elf32Be>(buf, offset),
            Variant::Elf64Le => self.pack_as::<Elf64Le>(buf, offset),
            Variant::Elf64Be => self.pack_as::<Elf64Be>(buf, offset),
        }
    }

    fn pack_as<L: Layout>(&self, buf: &mut [u8], base: usize) -> Result<(), ElfError> {
        let image = buf.get_mut(base..).ok_or(ElfError::Truncated)?;
        self.ident.encode(image)?;
        self.header.encode::<L>(buf, base + Identification::SIZE)?;
        section::encode_table::<L>(&self.sections, buf, base, &self.header)?;
        segment::encode_table::<L>(&self.segments, buf, base, &self.header)
    }

    /// Number of bytes [`Self::pack`] needs: the furthest end of the
    /// header and both tables.
    ///
    /// An empty section table with an escaped count still reserves entry 0.
    ///
    /// Saturates at `usize::MAX` for offsets that cannot be addressed.
    #[must_use]
    pub fn size(&self) -> usize {
        let sections_end = table_end(
            self.header.e_shoff,
            self.header.e_shentsize,
            section::encoded_count(&self.sections, &self.header),
            self.variant.section_entry_size(),
        );
        let segments_end = table_end(
            self.header.e_phoff,
            self.header.e_phentsize,
            self.segments.len(),
            self.variant.program_entry_size(),
        );
        self.variant
            .header_size()
            .max(sections_end)
            .max(segments_end)
    }

    /// The layout this file is encoded in.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The identification prefix.
    #[must_use]
    pub fn ident(&self) -> &Identification {
        &self.ident
    }

    /// Set the OS/ABI tag and ABI version in the identification.
    pub fn set_os_abi(&mut self, os_abi: OsAbi, abi_version: u8) {
        self.ident.os_abi = os_abi;
        self.ident.abi_version = abi_version;
    }

    /// The file header.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Mutable access to the file header.
    ///
    /// Table offsets, counts and entry sizes are not updated automatically
    /// when the tables change.
    pub fn header_mut(&mut self) -> &mut FileHeader {
        &mut self.header
    }

    /// Section headers in table order.
    #[must_use]
    pub fn sections(&self) -> &[SectionHeader] {
        &self.sections
    }

    /// Mutable access to the section header table.
    pub fn sections_mut(&mut self) -> &mut Vec<SectionHeader> {
        &mut self.sections
    }

    /// Program headers in table order.
    #[must_use]
    pub fn segments(&self) -> &[ProgramHeader] {
        &self.segments
    }

    /// Mutable access to the program header table.
    pub fn segments_mut(&mut self) -> &mut Vec<ProgramHeader> {
        &mut self.segments
    }

    /// The section header at `index`, if present.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&SectionHeader> {
        self.sections.get(index)
    }

    /// Index of the section name string table.
    ///
    /// When `e_shstrndx` is `SHN_XINDEX` the real index lives in entry 0's
    /// `sh_link`. Returns `None` for `SHN_UNDEF` or a missing entry 0.
    #[must_use]
    pub fn string_table_index(&self) -> Option<u32> {
        match self.header.e_shstrndx {
            SHN_UNDEF => None,
            SHN_XINDEX => self.sections.first().map(|s| s.sh_link),
            index => Some(u32::from(index)),
        }
    }
}

/// Strict-mode agreement between declared and fixed sizes.
fn check_sizes(variant: Variant, header: &FileHeader) -> Result<(), ElfError> {
    let declared_ok = |declared: u16, fixed: usize| usize::from(declared) == fixed;

    if !declared_ok(header.e_ehsize, variant.header_size()) {
        return Err(ElfError::InconsistentTable);
    }
    if header.e_shoff != 0 && !declared_ok(header.e_shentsize, variant.section_entry_size()) {
        return Err(ElfError::InconsistentTable);
    }
    if header.e_phoff != 0 && !declared_ok(header.e_phentsize, variant.program_entry_size()) {
        return Err(ElfError::InconsistentTable);
    }
    Ok(())
}

fn table_end(offset: u64, declared: u16, count: usize, entry: usize) -> usize {
    if offset == 0 || count == 0 {
        return 0;
    }
    let stride = entry_stride(declared, entry);
    usize::try_from(offset)
        .ok()
        .zip(table_span(count, stride, entry).ok())
        .and_then(|(start, span)| start.checked_add(span))
        .unwrap_or(usize::MAX)
}

/// Decode a file image starting at byte 0, leniently.
///
/// # Errors
///
/// See [`ElfFile::unpack`].
pub fn decode(data: &[u8]) -> Result<ElfFile, ElfError> {
    decode_with(data, DecodeOptions::default())
}

/// Decode a file image starting at byte 0 with explicit options.
///
/// # Errors
///
/// See [`ElfFile::unpack`].
pub fn decode_with(data: &[u8], options: DecodeOptions) -> Result<ElfFile, ElfError> {
    ElfFile::unpack(data, 0, options)
}

/// Encode `file` into a freshly allocated, zero-filled buffer of
/// [`ElfFile::size`] bytes.
///
/// # Errors
///
/// Returns [`ElfError::Truncated`] if the recorded table offsets are too
/// large to allocate a buffer for.
pub fn encode(file: &ElfFile) -> Result<Vec<u8>, ElfError> {
    let size = file.size();
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|_| ElfError::Truncated)?;
    buf.resize(size, 0);
    file.pack(&mut buf, 0)?;
    Ok(buf)
}

/// Structural equality of two decoded files.
#[must_use]
pub fn equals(a: &ElfFile, b: &ElfFile) -> bool {
    a == b
}
