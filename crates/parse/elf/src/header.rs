//! ELF file header codec.
//!
//! The header follows the identification prefix and has one fixed layout
//! per [`Variant`]: addresses and offsets are 4 bytes wide in ELF32 and
//! 8 bytes wide in ELF64. Decoding is a pure structural transform; counts
//! and sizes are not checked against anything here.

use core::fmt;

use crate::coding::{Category, code_newtype};
use crate::endian::{Reader, Writer};
use crate::ident::EI_NIDENT;
use crate::variant::{Layout, Variant};

/// Errors that can occur when decoding or encoding an ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// The file does not start with the ELF magic bytes.
    BadMagic,
    /// `EI_CLASS` is neither `ELFCLASS32` nor `ELFCLASS64`.
    UnsupportedClass,
    /// `EI_DATA` is neither `ELFDATA2LSB` nor `ELFDATA2MSB`.
    UnsupportedByteOrder,
    /// A fixed-size region runs past the end of the buffer.
    Truncated,
    /// A declared header or entry size disagrees with the variant's layout
    /// (strict decoding only).
    InconsistentTable,
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "invalid ELF magic bytes"),
            Self::UnsupportedClass => {
                write!(f, "unsupported ELF class (expected ELFCLASS32 or ELFCLASS64)")
            }
            Self::UnsupportedByteOrder => {
                write!(f, "unsupported data encoding (expected ELFDATA2LSB or ELFDATA2MSB)")
            }
            Self::Truncated => write!(f, "input data truncated"),
            Self::InconsistentTable => {
                write!(f, "declared header or entry size does not match the ELF class")
            }
        }
    }
}

impl core::error::Error for ElfError {}

code_newtype! {
    /// `e_type`: object file type.
    ObjectType(u16) => Category::ObjectType
}

impl ObjectType {
    /// No file type.
    pub const NONE: Self = Self(0);
    /// Relocatable file.
    pub const REL: Self = Self(1);
    /// Executable file.
    pub const EXEC: Self = Self(2);
    /// Shared object (or PIE).
    pub const DYN: Self = Self(3);
    /// Core file.
    pub const CORE: Self = Self(4);
}

code_newtype! {
    /// `e_machine`: target architecture.
    Machine(u16) => Category::Machine
}

impl Machine {
    /// No machine.
    pub const NONE: Self = Self(0);
    /// SPARC.
    pub const SPARC: Self = Self(2);
    /// Intel 80386.
    pub const I386: Self = Self(3);
    /// MIPS I.
    pub const MIPS: Self = Self(8);
    /// PowerPC.
    pub const PPC: Self = Self(20);
    /// 64-bit PowerPC.
    pub const PPC64: Self = Self(21);
    /// IBM S/390.
    pub const S390: Self = Self(22);
    /// 32-bit ARM.
    pub const ARM: Self = Self(40);
    /// SPARC V9.
    pub const SPARCV9: Self = Self(43);
    /// AMD x86-64.
    pub const X86_64: Self = Self(62);
    /// AArch64.
    pub const AARCH64: Self = Self(183);
    /// RISC-V.
    pub const RISCV: Self = Self(243);
}

/// Decoded ELF file header (the part after `e_ident`).
///
/// Address and offset fields are widened to `u64` for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    /// Object file type.
    pub e_type: ObjectType,
    /// Target machine architecture.
    pub e_machine: Machine,
    /// Object file version.
    pub e_version: u32,
    /// Virtual address of the entry point.
    pub e_entry: u64,
    /// File offset of the program header table.
    pub e_phoff: u64,
    /// File offset of the section header table.
    pub e_shoff: u64,
    /// Processor-specific flags.
    pub e_flags: u32,
    /// Size of the file header, identification included.
    pub e_ehsize: u16,
    /// Size of one program header entry.
    pub e_phentsize: u16,
    /// Number of program header entries.
    pub e_phnum: u16,
    /// Size of one section header entry.
    pub e_shentsize: u16,
    /// Number of section header entries (0 if it overflowed, see
    /// [`crate::section`]).
    pub e_shnum: u16,
    /// Section index of the section name string table.
    pub e_shstrndx: u16,
}

impl FileHeader {
    /// An empty header whose size fields match `variant`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fixed ELF header and entry sizes are below 256"
    )]
    pub fn new(variant: Variant) -> Self {
        Self {
            e_version: 1,
            e_ehsize: variant.header_size() as u16,
            e_phentsize: variant.program_entry_size() as u16,
            e_shentsize: variant.section_entry_size() as u16,
            ..Self::default()
        }
    }

    /// Number of bytes this header occupies after the identification.
    #[must_use]
    pub const fn encoded_size(variant: Variant) -> usize {
        variant.header_size() - EI_NIDENT
    }

    /// Decode a header laid out as `L` at `data[offset..]`.
    ///
    /// `offset` points just past the identification prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if fewer bytes remain than the
    /// layout requires.
    #[expect(clippy::similar_names, reason = "ELF spec naming convention")]
    pub fn decode<L: Layout>(data: &[u8], offset: usize) -> Result<Self, ElfError> {
        let mut r = Reader::<L::Order>::new(data, offset, Self::encoded_size(L::VARIANT))?;

        let e_type = ObjectType(r.u16()?);
        let e_machine = Machine(r.u16()?);
        let e_version = r.u32()?;
        let e_entry = L::read_word(&mut r)?;
        let e_phoff = L::read_word(&mut r)?;
        let e_shoff = L::read_word(&mut r)?;
        let e_flags = r.u32()?;
        let e_ehsize = r.u16()?;
        let e_phentsize = r.u16()?;
        let e_phnum = r.u16()?;
        let e_shentsize = r.u16()?;
        let e_shnum = r.u16()?;
        let e_shstrndx = r.u16()?;

        Ok(Self {
            e_type,
            e_machine,
            e_version,
            e_entry,
            e_phoff,
            e_shoff,
            e_flags,
            e_ehsize,
            e_phentsize,
            e_phnum,
            e_shentsize,
            e_shnum,
            e_shstrndx,
        })
    }

    /// Encode this header as `L` into `buf[offset..]`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if `buf` is too short.
    pub fn encode<L: Layout>(&self, buf: &mut [u8], offset: usize) -> Result<(), ElfError> {
        let mut w = Writer::<L::Order>::new(buf, offset, Self::encoded_size(L::VARIANT))?;

        w.u16(self.e_type.0)?;
        w.u16(self.e_machine.0)?;
        w.u32(self.e_version)?;
        L::write_word(&mut w, self.e_entry)?;
        L::write_word(&mut w, self.e_phoff)?;
        L::write_word(&mut w, self.e_shoff)?;
        w.u32(self.e_flags)?;
        w.u16(self.e_ehsize)?;
        w.u16(self.e_phentsize)?;
        w.u16(self.e_phnum)?;
        w.u16(self.e_shentsize)?;
        w.u16(self.e_shnum)?;
        w.u16(self.e_shstrndx)
    }
}
